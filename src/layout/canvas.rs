//! Layout orchestration and canvas auto-sizing
//!
//! A [`Layout`] owns the canvas frame and every frame created under it. A solve
//! pass always starts from scratch: the canvas origin is pinned to (0, 0),
//! every frame is cleared and re-solved, and canvas dimensions that were not
//! set explicitly are fitted to the frames.

use indexmap::IndexMap;

use super::anchor::{Anchor, AnchorTarget};
use super::config::{LayoutConfig, Margins};
use super::element::{FrameId, PinId, RulerId};
use super::error::{LayoutError, PlacementError};
use super::graph::Graph;
use super::ruler::Axis;
use super::types::{CanvasWarning, Extent, Point, SolveReport};

/// Name of the canvas frame, the root of every layout
pub const CANVAS_NAME: &str = "canvas";

/// Frame names that cannot be used for child frames
pub const RESERVED_NAMES: &[&str] = &[CANVAS_NAME, "figure"];

/// A canvas plus a registry of named frames placed on it
#[derive(Debug, Clone)]
pub struct Layout {
    graph: Graph,
    canvas: FrameId,
    frames: IndexMap<String, FrameId>,
    config: LayoutConfig,
}

impl Layout {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        let mut graph = Graph::new();
        let canvas = graph.add_frame(CANVAS_NAME, None)?;
        graph.set_width(canvas, config.canvas_width)?;
        graph.set_height(canvas, config.canvas_height)?;
        Ok(Self {
            graph,
            canvas,
            frames: IndexMap::new(),
            config,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn origin(&self) -> Anchor {
        self.config.origin
    }

    pub fn margins(&self) -> Margins {
        self.config.margins
    }

    pub fn canvas(&self) -> FrameId {
        self.canvas
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Create a frame on the canvas and register it under `name`
    pub fn add_frame(&mut self, name: impl Into<String>) -> Result<FrameId, LayoutError> {
        let name = name.into();
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(LayoutError::reserved_name(name));
        }
        if self.frames.contains_key(&name) {
            return Err(LayoutError::duplicate_frame(name));
        }
        let id = self.graph.add_frame(name.clone(), Some(self.canvas))?;
        self.frames.insert(name, id);
        Ok(id)
    }

    /// Registered frame by name
    pub fn frame(&self, name: &str) -> Option<FrameId> {
        self.frames.get(name).copied()
    }

    /// Registered frames in insertion order
    pub fn frames(&self) -> impl Iterator<Item = (&str, FrameId)> + '_ {
        self.frames.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn set_anchor(
        &mut self,
        frame: FrameId,
        anchor: Anchor,
        target: AnchorTarget,
    ) -> Result<(), LayoutError> {
        self.graph.set_anchor(frame, anchor, target)
    }

    pub fn clear_anchor(&mut self, frame: FrameId, anchor: Anchor) {
        self.graph.clear_anchor(frame, anchor);
    }

    pub fn set_size(&mut self, frame: FrameId, width: f64, height: f64) -> Result<(), LayoutError> {
        self.graph.set_size(frame, width, height)
    }

    pub fn set_width(&mut self, frame: FrameId, width: f64) -> Result<(), LayoutError> {
        self.graph.set_width(frame, Some(width))
    }

    pub fn set_height(&mut self, frame: FrameId, height: f64) -> Result<(), LayoutError> {
        self.graph.set_height(frame, Some(height))
    }

    pub fn extent(&self, frame: FrameId) -> Result<Extent, PlacementError> {
        self.graph.extent(frame)
    }

    pub fn anchor_position(&self, frame: FrameId, anchor: Anchor) -> Option<Point> {
        self.graph.anchor_position(frame, anchor)
    }

    /// Fix (or with `None`, release) the canvas width
    pub fn set_canvas_width(&mut self, width: Option<f64>) -> Result<(), LayoutError> {
        let result = self.graph.set_width(self.canvas, width);
        self.sync_canvas_config();
        result
    }

    /// Fix (or with `None`, release) the canvas height
    pub fn set_canvas_height(&mut self, height: Option<f64>) -> Result<(), LayoutError> {
        let result = self.graph.set_height(self.canvas, height);
        self.sync_canvas_config();
        result
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
        let result = self.graph.set_size(self.canvas, width, height);
        self.sync_canvas_config();
        result
    }

    /// Copy the explicit canvas lengths back into the stored config
    fn sync_canvas_config(&mut self) {
        let canvas = self.graph.frame(self.canvas);
        let (h, v) = (canvas.horizontal(), canvas.vertical());
        self.config.canvas_width = self.graph.ruler(h).explicit_length();
        self.config.canvas_height = self.graph.ruler(v).explicit_length();
    }

    /// Canvas width and height; only meaningful after a solve unless fixed
    pub fn canvas_size(&self) -> (Option<f64>, Option<f64>) {
        self.graph.size(self.canvas)
    }

    /// Solve the placement of every frame and of the canvas.
    ///
    /// Every call starts from a cleared state. On error the graph is left
    /// partially placed.
    pub fn place_all_frames(&mut self) -> Result<SolveReport, PlacementError> {
        let canvas = self.canvas;
        self.graph.clear_frame_placement(canvas);
        self.graph
            .set_anchor_placement(canvas, self.config.origin, (0.0, 0.0));

        let frames: Vec<FrameId> = self.frames.values().copied().collect();
        for &frame in &frames {
            self.graph.clear_frame_placement(frame);
        }
        for &frame in &frames {
            self.graph.solve(frame)?;
        }
        for &frame in &frames {
            self.graph.verify_placement(frame.into())?;
        }

        let mut warnings = Vec::new();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if let Some(warning) = self.solve_canvas_axis(axis)? {
                warnings.push(warning);
            }
        }
        let canvas = self.graph.extent(canvas)?;
        tracing::debug!(
            frames = frames.len(),
            width = canvas.width(),
            height = canvas.height(),
            "layout placed"
        );
        Ok(SolveReport { canvas, warnings })
    }

    fn solve_canvas_axis(&mut self, axis: Axis) -> Result<Option<CanvasWarning>, PlacementError> {
        let ruler = self.graph.frame(self.canvas).ruler(axis);
        let mut warning = None;
        if self.graph.ruler_is_placed(ruler) {
            // frames anchored to the far side already forced it
        } else if self.graph.ruler_is_placeable(ruler) {
            self.graph.solve(ruler)?;
        } else {
            let length = self.enclosing_length(axis)?;
            if length == 0.0 {
                let w = CanvasWarning::DegenerateAxis { axis };
                tracing::warn!(axis = axis.dimension(), "{}", w);
                warning = Some(w);
            }
            tracing::debug!(axis = axis.dimension(), length, "fitted canvas to frames");
            self.solve_with_temporary_length(ruler, length)?;
        }
        self.graph.verify_placement(ruler.into())?;
        Ok(warning)
    }

    /// Solve with an explicit length, then forget the length again.
    /// The pins keep their positions.
    fn solve_with_temporary_length(&mut self, ruler: RulerId, length: f64) -> Result<(), PlacementError> {
        self.graph.ruler_mut(ruler).replace_length(Some(length));
        let result = self.graph.solve(ruler);
        self.graph.ruler_mut(ruler).replace_length(None);
        result
    }

    /// Smallest canvas length along `axis` that encloses every frame when
    /// the canvas origin sits at 0
    fn enclosing_length(&self, axis: Axis) -> Result<f64, PlacementError> {
        let origin = self.origin_pin(axis);
        let pin = self.graph.pin(origin);
        debug_assert_eq!(pin.position(), Some(0.0), "canvas origin must sit exactly at 0");

        let mut low = 0.0_f64;
        let mut high = 0.0_f64;
        for (i, &frame) in self.frames.values().enumerate() {
            let (lo, hi) = self.graph.extent(frame)?.span(axis);
            if i == 0 {
                (low, high) = (lo, hi);
            } else {
                low = low.min(lo);
                high = high.max(hi);
            }
        }
        Ok(inclusive_length(pin.axis_position(), low, high))
    }

    fn origin_pin(&self, axis: Axis) -> PinId {
        let (h, v) = self.graph.anchor_pins(self.canvas, self.config.origin);
        match axis {
            Axis::Horizontal => h,
            Axis::Vertical => v,
        }
    }
}

/// Ruler length needed so that a ruler whose pin at `axis_position` sits at 0
/// reaches down to `min_low` and up to `max_high`
pub(crate) fn inclusive_length(axis_position: f64, min_low: f64, max_high: f64) -> f64 {
    let needed_high = if axis_position == 1.0 {
        0.0
    } else {
        max_high / (1.0 - axis_position)
    };
    let needed_low = if axis_position == 0.0 {
        0.0
    } else {
        -min_low / axis_position
    };
    needed_high.max(needed_low).max(0.0)
}
