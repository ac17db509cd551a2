//! Rectangular frames
//!
//! A frame pairs a horizontal and a vertical ruler and exposes the nine anchors
//! of [`Anchor`]. Placing a frame is placing both rulers, so most frame
//! operations are direct aggregates over the two rulers.

use super::anchor::{Anchor, AnchorTarget};
use super::element::{ElementInfo, FrameId, NodeId, PinId, RulerId};
use super::error::{LayoutError, PlacementError};
use super::graph::Graph;
use super::ruler::{Axis, PinSlot};
use super::types::{Extent, Point};

/// A rectangle spanned by two rulers
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) info: ElementInfo,
    horizontal: RulerId,
    vertical: RulerId,
}

impl Frame {
    pub(crate) fn new(info: ElementInfo, horizontal: RulerId, vertical: RulerId) -> Self {
        Self {
            info,
            horizontal,
            vertical,
        }
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Parent frame, if any
    pub fn parent(&self) -> Option<FrameId> {
        match self.info.parent() {
            Some(NodeId::Frame(id)) => Some(id),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> RulerId {
        self.horizontal
    }

    pub fn vertical(&self) -> RulerId {
        self.vertical
    }

    pub fn ruler(&self, axis: Axis) -> RulerId {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub fn rulers(&self) -> [RulerId; 2] {
        [self.horizontal, self.vertical]
    }
}

/// Declared reference of one anchor: per axis, the referenced pin and offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorConstraint {
    pub horizontal: Option<(PinId, f64)>,
    pub vertical: Option<(PinId, f64)>,
}

impl Graph {
    /// (horizontal pin, vertical pin) behind an anchor
    pub fn anchor_pins(&self, frame: FrameId, anchor: Anchor) -> (PinId, PinId) {
        let f = self.frame(frame);
        let (h, v) = anchor.slots();
        (
            self.ruler(f.horizontal()).pin(h),
            self.ruler(f.vertical()).pin(v),
        )
    }

    /// Align `anchor` of `frame` to another frame's anchor plus offsets
    pub fn set_anchor(
        &mut self,
        frame: FrameId,
        anchor: Anchor,
        target: AnchorTarget,
    ) -> Result<(), LayoutError> {
        let ref_frame = match target.frame.or_else(|| self.frame(frame).parent()) {
            Some(f) => f,
            None => return Err(LayoutError::no_parent_frame(self.global_name(frame))),
        };
        let ref_anchor = target.anchor.unwrap_or(anchor);
        let (h, v) = self.anchor_pins(frame, anchor);
        let (ref_h, ref_v) = self.anchor_pins(ref_frame, ref_anchor);
        let (dx, dy) = target.offsets;
        self.pin_mut(h).set_reference(ref_h, dx);
        self.pin_mut(v).set_reference(ref_v, dy);
        Ok(())
    }

    pub fn clear_anchor(&mut self, frame: FrameId, anchor: Anchor) {
        let (h, v) = self.anchor_pins(frame, anchor);
        self.pin_mut(h).clear_reference();
        self.pin_mut(v).clear_reference();
    }

    /// Declared references of an anchor
    pub fn anchor_constraint(&self, frame: FrameId, anchor: Anchor) -> AnchorConstraint {
        let (h, v) = self.anchor_pins(frame, anchor);
        let declared = |pin: PinId| {
            let p = self.pin(pin);
            p.reference().map(|r| (r, p.offset()))
        };
        AnchorConstraint {
            horizontal: declared(h),
            vertical: declared(v),
        }
    }

    /// Place an anchor at literal coordinates, dropping its references
    pub fn set_anchor_placement(&mut self, frame: FrameId, anchor: Anchor, position: impl Into<Point>) {
        let position = position.into();
        let (h, v) = self.anchor_pins(frame, anchor);
        for (pin, value) in [(h, position.x), (v, position.y)] {
            let p = self.pin_mut(pin);
            p.clear_reference();
            p.set_placement(value);
        }
    }

    /// Current coordinates of an anchor, if both pins are placed
    pub fn anchor_position(&self, frame: FrameId, anchor: Anchor) -> Option<Point> {
        let (h, v) = self.anchor_pins(frame, anchor);
        Some(Point::new(self.pin(h).position()?, self.pin(v).position()?))
    }

    pub fn set_width(&mut self, frame: FrameId, width: Option<f64>) -> Result<(), LayoutError> {
        self.set_ruler_length(self.frame(frame).horizontal(), width)
    }

    pub fn set_height(&mut self, frame: FrameId, height: Option<f64>) -> Result<(), LayoutError> {
        self.set_ruler_length(self.frame(frame).vertical(), height)
    }

    pub fn set_size(&mut self, frame: FrameId, width: f64, height: f64) -> Result<(), LayoutError> {
        self.set_width(frame, Some(width))?;
        self.set_height(frame, Some(height))
    }

    pub fn width(&self, frame: FrameId) -> Option<f64> {
        self.ruler_length(self.frame(frame).horizontal(), true)
    }

    pub fn height(&self, frame: FrameId) -> Option<f64> {
        self.ruler_length(self.frame(frame).vertical(), true)
    }

    pub fn size(&self, frame: FrameId) -> (Option<f64>, Option<f64>) {
        (self.width(frame), self.height(frame))
    }

    /// Left, right, bottom and top coordinates of a placed frame
    pub fn extent(&self, frame: FrameId) -> Result<Extent, PlacementError> {
        let f = self.frame(frame);
        let position = |ruler: RulerId, slot: PinSlot| {
            let pin = self.ruler(ruler).pin(slot);
            self.pin(pin)
                .position()
                .ok_or_else(|| PlacementError::not_placed(self.global_name(frame)))
        };
        Ok(Extent::new(
            position(f.horizontal(), PinSlot::Low)?,
            position(f.horizontal(), PinSlot::High)?,
            position(f.vertical(), PinSlot::Low)?,
            position(f.vertical(), PinSlot::High)?,
        ))
    }

    pub fn frame_is_placeable(&self, frame: FrameId) -> bool {
        self.frame(frame)
            .rulers()
            .into_iter()
            .all(|r| self.ruler_is_placeable(r))
    }

    pub fn frame_is_placed(&self, frame: FrameId) -> bool {
        self.frame(frame)
            .rulers()
            .into_iter()
            .all(|r| self.ruler_is_placed(r))
    }

    pub fn clear_frame_placement(&mut self, frame: FrameId) {
        for ruler in self.frame(frame).rulers() {
            self.clear_ruler_placement(ruler);
        }
    }

    pub(crate) fn frame_dependencies(&self, frame: FrameId) -> Vec<NodeId> {
        self.frame(frame)
            .rulers()
            .into_iter()
            .map(NodeId::Ruler)
            .collect()
    }

    pub(crate) fn solve_frame(&mut self, frame: FrameId) -> Result<(), PlacementError> {
        for ruler in self.frame(frame).rulers() {
            self.solve_ruler(ruler)?;
        }
        Ok(())
    }

    pub(crate) fn verify_frame(&self, frame: FrameId) -> Result<(), PlacementError> {
        for ruler in self.frame(frame).rulers() {
            self.verify_ruler(ruler)?;
        }
        Ok(())
    }
}
