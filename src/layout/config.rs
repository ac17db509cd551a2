//! Configuration for the layout engine

use super::anchor::Anchor;

/// White space outside the canvas, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Same margin on all four sides
    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Configuration options for a layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvas anchor placed at the coordinate origin (0, 0)
    pub origin: Anchor,

    /// Canvas width; `None` fits the canvas to its frames
    pub canvas_width: Option<f64>,

    /// Canvas height; `None` fits the canvas to its frames
    pub canvas_height: Option<f64>,

    /// Margins between the canvas and the figure edges
    pub margins: Margins,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Anchor::BottomLeft,
            canvas_width: None,
            canvas_height: None,
            margins: Margins::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas origin anchor
    pub fn with_origin(mut self, origin: Anchor) -> Self {
        self.origin = origin;
        self
    }

    /// Fix the canvas width
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = Some(width);
        self
    }

    /// Fix the canvas height
    pub fn with_canvas_height(mut self, height: f64) -> Self {
        self.canvas_height = Some(height);
        self
    }

    /// Fix both canvas dimensions
    pub fn with_canvas_size(self, width: f64, height: f64) -> Self {
        self.with_canvas_width(width).with_canvas_height(height)
    }

    /// Set the figure margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}
