// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived frame geometry: body insets and content-area margins.
//!
//! A popover window is larger than its visible body: the shadow rings the
//! whole window, and the tail edge additionally reserves the strip the
//! triangle protrudes into. Renderers subtract [`body_insets`] from the
//! window rectangle to find the body they paint, and lay the user's content
//! out with [`content_margins`].

use kurbo::Insets;

use crate::types::{Edge, TailMetrics};

/// Insets from the window rectangle to the painted body rectangle.
///
/// Shadow on all four sides; the tail's edge carries an extra clearance so
/// the triangle has a strip of window to live in.
pub fn body_insets(edge: Edge, metrics: &TailMetrics) -> Insets {
    let s = metrics.shadow;
    let c = metrics.clearance();
    match edge {
        Edge::Top => Insets::new(s, s + c, s, s),
        Edge::Bottom => Insets::new(s, s, s, s + c),
        Edge::Left => Insets::new(s + c, s, s, s),
        Edge::Right => Insets::new(s, s, s + c, s),
    }
}

/// Margins applied around the popover's content area, per edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentMargins {
    /// Margin above the content.
    pub top: f64,
    /// Margin below the content.
    pub bottom: f64,
    /// Margin at the leading side.
    pub start: f64,
    /// Margin at the trailing side.
    pub end: f64,
}

/// Content-area margins for a given tail edge.
///
/// The tail side gets the widest margin so content never crowds the
/// triangle.
pub fn content_margins(edge: Edge) -> ContentMargins {
    match edge {
        Edge::Top => ContentMargins {
            top: 10.0,
            bottom: 10.0,
            start: 5.0,
            end: 5.0,
        },
        Edge::Bottom => ContentMargins {
            top: 5.0,
            bottom: 15.0,
            start: 5.0,
            end: 5.0,
        },
        Edge::Left => ContentMargins {
            top: 5.0,
            bottom: 10.0,
            start: 15.0,
            end: 5.0,
        },
        Edge::Right => ContentMargins {
            top: 5.0,
            bottom: 10.0,
            start: 5.0,
            end: 15.0,
        },
    }
}
