// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use alloc::string::String;

/// The `font-style` value used for italic text.
///
/// Some consumers only synthesize slanted glyphs for one of the two keywords, so
/// the choice is left to the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ItalicStyle {
    /// `font-style="oblique"`.
    #[default]
    Oblique,
    /// `font-style="italic"`.
    Italic,
}

impl ItalicStyle {
    /// The SVG keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oblique => "oblique",
            Self::Italic => "italic",
        }
    }
}

/// Options controlling SVG output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// Prepended to every generated definition id.
    ///
    /// Use distinct prefixes when several rendered documents share one page, since
    /// generated ids restart at zero for every render.
    pub id_prefix: String,
    /// Keyword emitted for italic text.
    pub italic_style: ItalicStyle,
    /// Emit `xmlns` and `xmlns:xlink` on the root element.
    ///
    /// Needed for standalone `.svg` files; inline SVG in HTML can skip it.
    pub xmlns: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            id_prefix: String::new(),
            italic_style: ItalicStyle::default(),
            xmlns: true,
        }
    }
}

impl RenderOptions {
    /// Replace the definition id prefix.
    #[must_use]
    pub fn with_id_prefix(self, id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            ..self
        }
    }

    /// Replace the italic keyword.
    #[must_use]
    pub fn with_italic_style(self, italic_style: ItalicStyle) -> Self {
        Self {
            italic_style,
            ..self
        }
    }

    /// Toggle namespace declarations on the root element.
    #[must_use]
    pub fn with_xmlns(self, xmlns: bool) -> Self {
        Self { xmlns, ..self }
    }

    /// Check that the options produce well-formed output.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_valid_id_prefix(&self.id_prefix) {
            return Err(OptionsError::InvalidIdPrefix {
                prefix: self.id_prefix.clone(),
            });
        }
        Ok(())
    }
}

/// Errors reported by [`RenderOptions::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// The id prefix would not form a valid XML id.
    #[error(
        "invalid id prefix {prefix:?}: expected an ASCII letter or `_` followed by letters, digits, `-`, `_` or `.`"
    )]
    InvalidIdPrefix {
        /// The rejected prefix.
        prefix: String,
    },
}

// Empty is fine: generated ids always continue with a role name.
fn is_valid_id_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = RenderOptions::default();
        assert_eq!(options.id_prefix, "");
        assert_eq!(options.italic_style, ItalicStyle::Oblique);
        assert!(options.xmlns);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn id_prefix_validation() {
        for ok in ["a", "scene-1.", "_x", "Chart_2"] {
            assert_eq!(RenderOptions::default().with_id_prefix(ok).validate(), Ok(()));
        }
        for bad in ["1a", "-a", "a b", "a\"", "é"] {
            assert_eq!(
                RenderOptions::default().with_id_prefix(bad).validate(),
                Err(OptionsError::InvalidIdPrefix {
                    prefix: String::from(bad)
                })
            );
        }
    }
}
