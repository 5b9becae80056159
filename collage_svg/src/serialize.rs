// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first serialization of a form tree into SVG elements.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use collage::{BasicForm, Form, Shape, Texture};

use crate::attrs::attributes_of;
use crate::document::{Fragment, LISTENER_ATTRIBUTE, ListenerBinding, SvgDocument};
use crate::fmt::{fmt_f64, points, push_escaped_attr, push_escaped_text};
use crate::options::{OptionsError, RenderOptions};
use crate::texture::{PaintRole, definition_id, needs_definition, write_definition};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Sequence numbers threaded through one traversal.
///
/// Every line and shape consumes one `node` number, whether or not its textures need
/// definitions. Every element with event bindings consumes one `listener` number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counters {
    /// Next node number for lines and shapes.
    pub node: u64,
    /// Next listener target.
    pub listener: u64,
}

/// Errors reported by [`Renderer::render_fragment`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Numbering the fragment would run a counter past `u64::MAX`, so the following
    /// fragment could not continue without reusing ids.
    #[error("counters starting at node {node}, listener {listener} overflow in this fragment")]
    CounterOverflow {
        /// `Counters::node` the fragment started from.
        node: u64,
        /// `Counters::listener` the fragment started from.
        listener: u64,
    },
}

/// Renders form trees to SVG.
///
/// A renderer holds only validated options; each call works on its own counters and
/// buffers, so one renderer can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer, rejecting options that would produce malformed output.
    pub fn new(options: RenderOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `form` as a standalone SVG document of the given viewport size.
    ///
    /// The root element carries `width`, `height` and `version="1.1"`. All definition
    /// blocks go into a leading `<defs>` element, followed by the rendered tree.
    pub fn render(&self, form: &Form, width: f64, height: f64) -> SvgDocument {
        let mut emitter = Emitter::new(&self.options);
        let mut body = String::new();
        emitter.form(form, Counters::default(), &mut body);
        if emitter.exhausted {
            // Unreachable in practice: the output outgrows memory long before 2^64 nodes.
            log::warn!("node or listener counter saturated; later ids repeat");
        }

        let mut svg = String::with_capacity(body.len() + emitter.defs.len() + 160);
        svg.push_str("<svg");
        if self.options.xmlns {
            let _ = write!(svg, " xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\"");
        }
        let _ = write!(
            svg,
            " width=\"{}\" height=\"{}\" version=\"1.1\">",
            fmt_f64(width),
            fmt_f64(height)
        );
        svg.push_str("<defs>");
        svg.push_str(&emitter.defs);
        svg.push_str("</defs>");
        svg.push_str(&body);
        svg.push_str("</svg>");

        log::debug!(
            "rendered {} forms into a {}x{} document: {} definitions, {} listeners",
            emitter.forms,
            width,
            height,
            emitter.definitions,
            emitter.listeners.len()
        );

        SvgDocument {
            markup: svg,
            listeners: emitter.listeners,
        }
    }

    /// Render `form` without a root element, starting from the given counters.
    ///
    /// Fails if `start` leaves too little room to number every line, shape and
    /// listener target in `form`.
    pub fn render_fragment(&self, form: &Form, start: Counters) -> Result<Fragment, RenderError> {
        let mut emitter = Emitter::new(&self.options);
        let mut markup = String::new();
        let next = emitter.form(form, start, &mut markup);
        if emitter.exhausted {
            return Err(RenderError::CounterOverflow {
                node: start.node,
                listener: start.listener,
            });
        }
        log::debug!(
            "rendered {} forms as a fragment: {} definitions, {} listeners",
            emitter.forms,
            emitter.definitions,
            emitter.listeners.len()
        );
        Ok(Fragment {
            markup,
            defs: emitter.defs,
            listeners: emitter.listeners,
            next,
        })
    }
}

/// Render `form` with default options.
///
/// See [`Renderer::render`].
pub fn render(form: &Form, width: f64, height: f64) -> SvgDocument {
    Renderer::default().render(form, width, height)
}

/// Accumulators for a single render call.
struct Emitter<'a> {
    options: &'a RenderOptions,
    defs: String,
    listeners: Vec<ListenerBinding>,
    forms: usize,
    definitions: usize,
    /// Set when a counter could not advance past `u64::MAX`.
    exhausted: bool,
}

impl<'a> Emitter<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            defs: String::new(),
            listeners: Vec::new(),
            forms: 0,
            definitions: 0,
            exhausted: false,
        }
    }

    /// `counter + 1`, or `counter` unchanged (flagging exhaustion) at `u64::MAX`.
    fn advance(&mut self, counter: u64) -> u64 {
        match counter.checked_add(1) {
            Some(next) => next,
            None => {
                self.exhausted = true;
                counter
            }
        }
    }

    /// Append `form` and its subtree to `out`, returning the counters that follow it.
    fn form(&mut self, form: &Form, at: Counters, out: &mut String) -> Counters {
        self.forms += 1;
        let mut next = at;
        match &form.basic {
            BasicForm::Line { path, style } => {
                self.define(&style.texture, PaintRole::Stroke, at.node);
                let _ = write!(out, "<polyline points=\"{}\"", points(&path.points));
                self.attributes(out, form, at.node, &mut next);
                out.push_str("/>");
                next.node = self.advance(next.node);
            }
            BasicForm::Shape { shape, style } => {
                self.define(&style.fill, PaintRole::Fill, at.node);
                self.define(&style.border.texture, PaintRole::Stroke, at.node);
                match shape {
                    Shape::Polygon(vertices) => {
                        let _ = write!(out, "<polygon points=\"{}\"", points(vertices));
                    }
                    Shape::Ellipse { rx, ry } => {
                        let _ = write!(
                            out,
                            "<ellipse cx=\"0\" cy=\"0\" rx=\"{}\" ry=\"{}\"",
                            fmt_f64(*rx),
                            fmt_f64(*ry)
                        );
                    }
                }
                self.attributes(out, form, at.node, &mut next);
                out.push_str("/>");
                next.node = self.advance(next.node);
            }
            BasicForm::Text { content, .. } => {
                out.push_str("<text");
                self.attributes(out, form, at.node, &mut next);
                out.push('>');
                push_escaped_text(out, content);
                out.push_str("</text>");
            }
            BasicForm::Image { url, width, height } => {
                out.push_str("<image xlink:href=\"");
                push_escaped_attr(out, url);
                let _ = write!(
                    out,
                    "\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                    fmt_f64(-width / 2.0),
                    fmt_f64(-height / 2.0),
                    fmt_f64(*width),
                    fmt_f64(*height)
                );
                self.attributes(out, form, at.node, &mut next);
                out.push_str("/>");
            }
            BasicForm::Group(children) => {
                out.push_str("<g");
                self.attributes(out, form, at.node, &mut next);
                out.push('>');
                for child in children.iter() {
                    next = self.form(child, next, out);
                }
                out.push_str("</g>");
            }
            BasicForm::Element(markup) => {
                out.push_str("<g");
                self.attributes(out, form, at.node, &mut next);
                out.push('>');
                out.push_str(markup);
                out.push_str("</g>");
            }
        }
        next
    }

    fn define(&mut self, texture: &Texture, role: PaintRole, node: u64) {
        if !needs_definition(texture) {
            return;
        }
        let id = definition_id(&self.options.id_prefix, role, node);
        if write_definition(&mut self.defs, texture, &id) {
            self.definitions += 1;
        }
    }

    /// Write presentation attributes and, if the form has event bindings, claim a
    /// listener target for it.
    fn attributes(&mut self, out: &mut String, form: &Form, node: u64, next: &mut Counters) {
        for (name, value) in attributes_of(form, node, self.options) {
            let _ = write!(out, " {name}=\"");
            push_escaped_attr(out, &value);
            out.push('"');
        }
        if form.events.is_empty() {
            return;
        }
        let target = next.listener;
        next.listener = self.advance(next.listener);
        let _ = write!(out, " {LISTENER_ATTRIBUTE}=\"{target}\"");
        self.listeners
            .extend(form.events.iter().map(|binding| ListenerBinding {
                target,
                event: binding.event.clone(),
                handler: binding.handler.clone(),
            }));
    }
}
