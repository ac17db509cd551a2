//! Rulers: three pins on a shared 0..1 axis scale
//!
//! A ruler owns a low, mid and high pin at axis positions 0, 0.5 and 1 and an
//! optional explicit length. Two independent pieces of information (two pins,
//! or one pin and the length) fix the interval; every remaining pin is then a
//! linear interpolation/extrapolation from one placed pin.

use super::element::{ElementInfo, NodeId, PinId, RulerId};
use super::error::{LayoutError, PlacementError};
use super::graph::Graph;
use super::pin::approx_eq;

/// Direction a ruler measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub(crate) fn ruler_name(self) -> &'static str {
        match self {
            Axis::Horizontal => "h_ruler",
            Axis::Vertical => "v_ruler",
        }
    }

    /// Human-readable dimension name ("width" / "height")
    pub fn dimension(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}

/// One of the three pins of a ruler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinSlot {
    Low,
    Mid,
    High,
}

impl PinSlot {
    /// All slots in axis order
    pub const ALL: [PinSlot; 3] = [PinSlot::Low, PinSlot::Mid, PinSlot::High];

    pub fn name(self) -> &'static str {
        match self {
            PinSlot::Low => "low",
            PinSlot::Mid => "mid",
            PinSlot::High => "high",
        }
    }

    pub fn axis_position(self) -> f64 {
        match self {
            PinSlot::Low => 0.0,
            PinSlot::Mid => 0.5,
            PinSlot::High => 1.0,
        }
    }

    fn index(self) -> usize {
        match self {
            PinSlot::Low => 0,
            PinSlot::Mid => 1,
            PinSlot::High => 2,
        }
    }
}

/// A one-dimensional interval made of three pins
#[derive(Debug, Clone)]
pub struct Ruler {
    pub(crate) info: ElementInfo,
    axis: Axis,
    pins: [PinId; 3],
    length: Option<f64>,
}

impl Ruler {
    pub(crate) fn new(info: ElementInfo, axis: Axis, pins: [PinId; 3]) -> Self {
        Self {
            info,
            axis,
            pins,
            length: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn pin(&self, slot: PinSlot) -> PinId {
        self.pins[slot.index()]
    }

    /// Owned pins in low, mid, high order
    pub fn pins(&self) -> [PinId; 3] {
        self.pins
    }

    /// Explicitly set length, ignoring anything that could be calculated
    pub fn explicit_length(&self) -> Option<f64> {
        self.length
    }

    /// Swap the explicit length without validation
    pub(crate) fn replace_length(&mut self, length: Option<f64>) -> Option<f64> {
        std::mem::replace(&mut self.length, length)
    }
}

impl Graph {
    /// Pins that are placed or carry a reference, in axis order
    fn anchorable_pins(&self, id: RulerId) -> Vec<PinId> {
        self.ruler(id)
            .pins()
            .into_iter()
            .filter(|&p| self.pin(p).is_placed() || self.pin(p).is_placeable())
            .collect()
    }

    fn placed_pins(&self, id: RulerId) -> Vec<PinId> {
        self.ruler(id)
            .pins()
            .into_iter()
            .filter(|&p| self.pin(p).is_placed())
            .collect()
    }

    /// Two pieces of positional information are enough to fix an interval
    pub fn ruler_is_placeable(&self, id: RulerId) -> bool {
        let mut count = self.anchorable_pins(id).len();
        if self.ruler(id).explicit_length().is_some() {
            count += 1;
        }
        count >= 2
    }

    /// A ruler is placed once all three pins are placed
    pub fn ruler_is_placed(&self, id: RulerId) -> bool {
        self.ruler(id)
            .pins()
            .into_iter()
            .all(|p| self.pin(p).is_placed())
    }

    /// Length implied by the first two placed pins, if there are two
    fn placed_length(&self, id: RulerId) -> Option<f64> {
        let placed = self.placed_pins(id);
        let (&p1, &p2) = (placed.first()?, placed.get(1)?);
        let (p1, p2) = (self.pin(p1), self.pin(p2));
        if p1.axis_position() == p2.axis_position() {
            return None;
        }
        let (Some(x1), Some(x2)) = (p1.position(), p2.position()) else {
            return None;
        };
        Some((x1 - x2) / (p1.axis_position() - p2.axis_position()))
    }

    /// Ruler length from placed pins; 0 when it cannot be inferred
    pub fn calc_ruler_length(&self, id: RulerId) -> f64 {
        self.placed_length(id).unwrap_or(0.0)
    }

    /// Explicit length, or the calculated one when `allow_calculated` is set
    pub fn ruler_length(&self, id: RulerId, allow_calculated: bool) -> Option<f64> {
        match self.ruler(id).explicit_length() {
            Some(length) => Some(length),
            None if allow_calculated => Some(self.calc_ruler_length(id)),
            None => None,
        }
    }

    /// Set (or with `None`, clear) the explicit length of a ruler
    pub fn set_ruler_length(&mut self, id: RulerId, length: Option<f64>) -> Result<(), LayoutError> {
        if let Some(value) = length {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::invalid_length(self.global_name(id), value));
            }
        }
        self.ruler_mut(id).length = length;
        Ok(())
    }

    pub fn clear_ruler_length(&mut self, id: RulerId) {
        self.ruler_mut(id).length = None;
    }

    pub fn clear_ruler_placement(&mut self, id: RulerId) {
        for pin in self.ruler(id).pins() {
            self.pin_mut(pin).clear_placement();
        }
    }

    /// Owned pins that carry a reference and must be placed first
    pub(crate) fn ruler_dependencies(&self, id: RulerId) -> Vec<NodeId> {
        self.ruler(id)
            .pins()
            .into_iter()
            .filter(|&p| self.pin(p).is_placeable())
            .map(NodeId::Pin)
            .collect()
    }

    /// Place every unplaced pin from one placed pin and the ruler length
    pub(crate) fn solve_ruler(&mut self, id: RulerId) -> Result<(), PlacementError> {
        if self.ruler_is_placed(id) {
            return Ok(());
        }
        if !self.ruler_is_placeable(id) {
            return Err(PlacementError::unsolvable(
                self.global_name(id),
                "insufficient information; set two anchors, or one anchor and the length",
            ));
        }
        let length = match self.ruler(id).explicit_length() {
            Some(length) => length,
            None => self
                .placed_length(id)
                .ok_or_else(|| PlacementError::dependency_unplaced(self.global_name(id)))?,
        };
        let Some(&reference) = self.placed_pins(id).first() else {
            return Err(PlacementError::dependency_unplaced(self.global_name(id)));
        };
        let (base, base_axis) = {
            let rp = self.pin(reference);
            (rp.position().unwrap_or_default(), rp.axis_position())
        };
        tracing::debug!(ruler = %self.global_name(id), length, base, "solving ruler");
        for pin in self.ruler(id).pins() {
            let p = self.pin_mut(pin);
            if p.is_placed() {
                continue;
            }
            let value = base + (p.axis_position() - base_axis) * length;
            p.set_placement(value);
        }
        Ok(())
    }

    /// Verify every pin, then the midpoint and ordering invariants
    pub(crate) fn verify_ruler(&self, id: RulerId) -> Result<(), PlacementError> {
        let ruler = self.ruler(id);
        for pin in ruler.pins() {
            self.verify_pin(pin)?;
        }
        let position = |slot: PinSlot| {
            let pin = ruler.pin(slot);
            self.pin(pin)
                .position()
                .ok_or_else(|| PlacementError::not_placed(self.global_name(pin)))
        };
        let (low, mid, high) = (
            position(PinSlot::Low)?,
            position(PinSlot::Mid)?,
            position(PinSlot::High)?,
        );
        if !approx_eq(low + high, 2.0 * mid) {
            return Err(PlacementError::incomplying(
                self.global_name(id),
                format!(
                    "resolved {}, {} and {} do not comply with in-ruler positions",
                    self.describe_pin(ruler.pin(PinSlot::Low)),
                    self.describe_pin(ruler.pin(PinSlot::Mid)),
                    self.describe_pin(ruler.pin(PinSlot::High)),
                ),
            ));
        }
        if high < low {
            return Err(PlacementError::incomplying(
                self.global_name(id),
                format!(
                    "resolved {} less than {} implies negative ruler length",
                    self.describe_pin(ruler.pin(PinSlot::High)),
                    self.describe_pin(ruler.pin(PinSlot::Low)),
                ),
            ));
        }
        Ok(())
    }
}
