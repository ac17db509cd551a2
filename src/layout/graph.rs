//! Arena owning every pin, ruler and frame of a layout
//!
//! Ownership is a tree (frame -> ruler -> pin) expressed through ids; the same
//! tree provides the parent links used for global names. Cross-frame anchor
//! links are plain `PinId` references on top of it and never own anything.

use super::element::{ElementInfo, FrameId, NodeId, PinId, RulerId, NAME_SEPARATOR};
use super::error::LayoutError;
use super::frame::Frame;
use super::pin::Pin;
use super::ruler::{Axis, PinSlot, Ruler};

/// Owning store for all placeable nodes
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pins: Vec<Pin>,
    rulers: Vec<Ruler>,
    frames: Vec<Frame>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame with its two rulers and six pins
    pub fn add_frame(
        &mut self,
        name: impl Into<String>,
        parent: Option<FrameId>,
    ) -> Result<FrameId, LayoutError> {
        let info = ElementInfo::new(name, parent.map(NodeId::Frame))?;
        let id = FrameId(self.frames.len());
        let horizontal = self.add_ruler(Axis::Horizontal, id)?;
        let vertical = self.add_ruler(Axis::Vertical, id)?;
        self.frames.push(Frame::new(info, horizontal, vertical));
        Ok(id)
    }

    fn add_ruler(&mut self, axis: Axis, frame: FrameId) -> Result<RulerId, LayoutError> {
        let info = ElementInfo::new(axis.ruler_name(), Some(NodeId::Frame(frame)))?;
        let id = RulerId(self.rulers.len());
        let mut pins = [PinId(0); 3];
        for (slot, pin) in PinSlot::ALL.iter().zip(pins.iter_mut()) {
            let pin_info = ElementInfo::new(slot.name(), Some(NodeId::Ruler(id)))?;
            *pin = PinId(self.pins.len());
            self.pins.push(Pin::new(pin_info, slot.axis_position()));
        }
        self.rulers.push(Ruler::new(info, axis, pins));
        Ok(id)
    }

    // Ids are only ever minted by this arena and nodes are never removed, so
    // indexing with them cannot go out of bounds.

    pub fn pin(&self, id: PinId) -> &Pin {
        &self.pins[id.0]
    }

    pub(crate) fn pin_mut(&mut self, id: PinId) -> &mut Pin {
        &mut self.pins[id.0]
    }

    pub fn ruler(&self, id: RulerId) -> &Ruler {
        &self.rulers[id.0]
    }

    pub(crate) fn ruler_mut(&mut self, id: RulerId) -> &mut Ruler {
        &mut self.rulers[id.0]
    }

    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.0]
    }

    /// Local name of any node
    pub fn name(&self, node: impl Into<NodeId>) -> &str {
        self.info(node.into()).name()
    }

    /// Parent of any node; roots have none
    pub fn parent(&self, node: impl Into<NodeId>) -> Option<NodeId> {
        self.info(node.into()).parent()
    }

    fn info(&self, node: NodeId) -> &ElementInfo {
        match node {
            NodeId::Pin(id) => &self.pin(id).info,
            NodeId::Ruler(id) => &self.ruler(id).info,
            NodeId::Frame(id) => &self.frame(id).info,
        }
    }

    /// Slash-separated path from the root to `node`
    pub fn global_name(&self, node: impl Into<NodeId>) -> String {
        let mut parts = Vec::new();
        let mut current = Some(node.into());
        while let Some(node) = current {
            let info = self.info(node);
            parts.push(info.name());
            current = info.parent();
        }
        parts.reverse();
        parts.join(&NAME_SEPARATOR.to_string())
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
