//! Element identity and hierarchical naming
//!
//! Every pin, ruler and frame lives in the [`Graph`](super::Graph) arena and is
//! identified by a typed index. Identity is the index itself: two elements are
//! the same element iff their ids are equal, regardless of name or position.

use std::fmt;

use super::error::LayoutError;

/// Separator used to join element names into a global name
pub const NAME_SEPARATOR: char = '/';

/// Identifier of a [`Pin`](super::Pin) in the graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub(crate) usize);

/// Identifier of a [`Ruler`](super::Ruler) in the graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RulerId(pub(crate) usize);

/// Identifier of a [`Frame`](super::Frame) in the graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub(crate) usize);

/// Any placeable node of the graph.
///
/// The set of node kinds is closed: the solver dispatches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Pin(PinId),
    Ruler(RulerId),
    Frame(FrameId),
}

impl From<PinId> for NodeId {
    fn from(id: PinId) -> Self {
        NodeId::Pin(id)
    }
}

impl From<RulerId> for NodeId {
    fn from(id: RulerId) -> Self {
        NodeId::Ruler(id)
    }
}

impl From<FrameId> for NodeId {
    fn from(id: FrameId) -> Self {
        NodeId::Frame(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Pin(id) => write!(f, "pin#{}", id.0),
            NodeId::Ruler(id) => write!(f, "ruler#{}", id.0),
            NodeId::Frame(id) => write!(f, "frame#{}", id.0),
        }
    }
}

/// Local name and (non-owning) parent link shared by all elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    name: String,
    parent: Option<NodeId>,
}

impl ElementInfo {
    /// Create element info, validating the local name
    pub fn new(name: impl Into<String>, parent: Option<NodeId>) -> Result<Self, LayoutError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, parent })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Check that a local element name can be joined into a global name
pub fn validate_name(name: &str) -> Result<(), LayoutError> {
    if name.is_empty() {
        return Err(LayoutError::invalid_name(name, "name cannot be empty"));
    }
    if name.contains(NAME_SEPARATOR) {
        return Err(LayoutError::invalid_name(
            name,
            format!("character '{}' not allowed in name", NAME_SEPARATOR),
        ));
    }
    Ok(())
}
