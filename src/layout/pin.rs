//! Pins: single coordinates on one axis
//!
//! A pin is either unplaced, placed directly, or placed by reference to another
//! pin plus a fixed offset. The reference and offset are the user's declared
//! constraint and survive across solve passes; the position is scratch state
//! of the current pass.

use super::element::{ElementInfo, NodeId, PinId, RulerId};
use super::error::PlacementError;
use super::graph::Graph;

/// Relative tolerance used by all verification checks
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute floor for comparisons around zero
pub const ABSOLUTE_TOLERANCE: f64 = 1e-12;

/// Compare two coordinates within [`RELATIVE_TOLERANCE`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= RELATIVE_TOLERANCE * a.abs().max(b.abs()) || diff <= ABSOLUTE_TOLERANCE
}

/// A single scalar coordinate holder owned by a ruler
#[derive(Debug, Clone)]
pub struct Pin {
    pub(crate) info: ElementInfo,
    position: Option<f64>,
    reference: Option<PinId>,
    offset: f64,
    axis_position: f64,
}

impl Pin {
    pub(crate) fn new(info: ElementInfo, axis_position: f64) -> Self {
        Self {
            info,
            position: None,
            reference: None,
            offset: 0.0,
            axis_position,
        }
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// The ruler owning this pin
    pub fn ruler(&self) -> Option<RulerId> {
        match self.info.parent() {
            Some(NodeId::Ruler(id)) => Some(id),
            _ => None,
        }
    }

    /// Fixed position along the owning ruler: 0 low end, 0.5 mid, 1 high end
    pub fn axis_position(&self) -> f64 {
        self.axis_position
    }

    /// A pin can be solved on its own iff it references another pin
    pub fn is_placeable(&self) -> bool {
        self.reference.is_some()
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn position(&self) -> Option<f64> {
        self.position
    }

    pub fn set_placement(&mut self, value: f64) {
        self.position = Some(value);
    }

    pub fn clear_placement(&mut self) {
        self.position = None;
    }

    pub fn reference(&self) -> Option<PinId> {
        self.reference
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Declare `position == reference.position + offset`
    pub fn set_reference(&mut self, reference: PinId, offset: f64) {
        self.reference = Some(reference);
        self.offset = offset;
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
        self.offset = 0.0;
    }
}

impl Graph {
    /// Direct dependency of a pin: its reference, or else its owning ruler
    pub(crate) fn pin_dependencies(&self, id: PinId) -> Vec<NodeId> {
        let pin = self.pin(id);
        match (pin.reference(), pin.ruler()) {
            (Some(reference), _) => vec![NodeId::Pin(reference)],
            (None, Some(ruler)) => vec![NodeId::Ruler(ruler)],
            (None, None) => Vec::new(),
        }
    }

    /// Place a pin from its (already placed) reference
    pub(crate) fn solve_pin(&mut self, id: PinId) -> Result<(), PlacementError> {
        let pin = self.pin(id);
        let Some(reference) = pin.reference() else {
            return Err(PlacementError::unsolvable(
                self.global_name(id),
                "pin has no reference and was not placed by its ruler",
            ));
        };
        let Some(base) = self.pin(reference).position() else {
            return Err(PlacementError::unsolvable(
                self.global_name(id),
                format!("dependency '{}' is not placed", self.global_name(reference)),
            ));
        };
        let value = base + pin.offset();
        tracing::trace!(pin = %self.global_name(id), value, "pin placed from reference");
        self.pin_mut(id).set_placement(value);
        Ok(())
    }

    /// Check that a referenced pin keeps its declared offset
    pub(crate) fn verify_pin(&self, id: PinId) -> Result<(), PlacementError> {
        let pin = self.pin(id);
        let Some(reference) = pin.reference() else {
            return Ok(());
        };
        let Some(position) = pin.position() else {
            return Err(PlacementError::not_placed(self.global_name(id)));
        };
        let Some(base) = self.pin(reference).position() else {
            return Err(PlacementError::not_placed(self.global_name(reference)));
        };
        let actual = position - base;
        if !approx_eq(actual, pin.offset()) {
            return Err(PlacementError::incomplying(
                self.global_name(id),
                format!(
                    "resolved {} and {} do not comply with offset {:.5} (actual {:.5}); \
                     usually due to conflicting positional relations",
                    self.describe_pin(id),
                    self.describe_pin(reference),
                    pin.offset(),
                    actual
                ),
            ));
        }
        Ok(())
    }

    /// `global/name (position)` for error messages
    pub(crate) fn describe_pin(&self, id: PinId) -> String {
        match self.pin(id).position() {
            Some(p) => format!("{} ({:.6})", self.global_name(id), p),
            None => format!("{} (unplaced)", self.global_name(id)),
        }
    }
}
