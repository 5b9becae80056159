// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered output: markup plus the listener bindings the host should attach.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use collage::Handler;

use crate::Counters;

/// Attribute that marks elements which have listener bindings.
///
/// Its value is the [`ListenerBinding::target`] shared by all bindings for that element.
pub const LISTENER_ATTRIBUTE: &str = "data-listener";

/// An event listener to attach to a rendered element.
///
/// The renderer never invokes `handler`. Hosts locate the element by its
/// [`LISTENER_ATTRIBUTE`] and wire the handler into their own event system.
#[derive(Clone, Debug, PartialEq)]
pub struct ListenerBinding {
    /// Value of the element's [`LISTENER_ATTRIBUTE`].
    pub target: u64,
    /// Native event name.
    pub event: Arc<str>,
    /// The decoder registered on the form.
    pub handler: Handler,
}

/// A complete SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    pub(crate) markup: String,
    pub(crate) listeners: Vec<ListenerBinding>,
}

impl SvgDocument {
    /// The SVG markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// Take the SVG markup, dropping listener bindings.
    pub fn into_string(self) -> String {
        self.markup
    }

    /// Listener bindings in document order, then registration order.
    pub fn listeners(&self) -> &[ListenerBinding] {
        &self.listeners
    }

    /// Bindings for the element whose [`LISTENER_ATTRIBUTE`] is `target`.
    pub fn listeners_for(&self, target: u64) -> impl Iterator<Item = &ListenerBinding> + '_ {
        self.listeners.iter().filter(move |b| b.target == target)
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// Output of [`Renderer::render_fragment`](crate::Renderer::render_fragment).
///
/// Hosts that assemble their own document place `defs` inside a `<defs>` element and
/// `markup` wherever the subtree belongs.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    /// Rendered elements, in paint order.
    pub markup: String,
    /// Definition blocks discovered while rendering.
    pub defs: String,
    /// Listener bindings for elements in `markup`.
    pub listeners: Vec<ListenerBinding>,
    /// Counters after the last element of this fragment.
    ///
    /// Pass them as the start of the next fragment to keep generated ids and listener
    /// targets distinct.
    pub next: Counters,
}
