//! Named anchor points of a rectangular frame
//!
//! Anchors form a 3x3 grid over (left, center, right) x (bottom, center, top).
//! Edge centers are shortened ("bottom" instead of "bottomcenter") and the
//! frame center is simply "center". Names are case-insensitive.

use std::fmt;
use std::str::FromStr;

use super::element::FrameId;
use super::error::LayoutError;
use super::ruler::PinSlot;

/// A named point on a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    BottomLeft,
    Bottom,
    BottomRight,
    Left,
    Center,
    Right,
    TopLeft,
    Top,
    TopRight,
}

impl Anchor {
    /// All anchors, bottom row first
    pub const ALL: [Anchor; 9] = [
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::BottomLeft => "bottomleft",
            Anchor::Bottom => "bottom",
            Anchor::BottomRight => "bottomright",
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
            Anchor::TopLeft => "topleft",
            Anchor::Top => "top",
            Anchor::TopRight => "topright",
        }
    }

    /// Horizontal and vertical ruler pins behind this anchor
    pub fn slots(self) -> (PinSlot, PinSlot) {
        use PinSlot::*;
        match self {
            Anchor::BottomLeft => (Low, Low),
            Anchor::Bottom => (Mid, Low),
            Anchor::BottomRight => (High, Low),
            Anchor::Left => (Low, Mid),
            Anchor::Center => (Mid, Mid),
            Anchor::Right => (High, Mid),
            Anchor::TopLeft => (Low, High),
            Anchor::Top => (Mid, High),
            Anchor::TopRight => (High, High),
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| LayoutError::unknown_anchor(s, &Self::names()))
    }
}

/// What an anchor is aligned to.
///
/// `frame` defaults to the aligning frame's parent, `anchor` to the same
/// anchor name, offsets to zero. Offsets are (right, up) positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorTarget {
    pub frame: Option<FrameId>,
    pub anchor: Option<Anchor>,
    pub offsets: (f64, f64),
}

impl AnchorTarget {
    /// Same anchor of the parent frame, no offset
    pub fn parent() -> Self {
        Self::default()
    }

    /// `anchor` of `frame`
    pub fn to(frame: FrameId, anchor: Anchor) -> Self {
        Self {
            frame: Some(frame),
            anchor: Some(anchor),
            offsets: (0.0, 0.0),
        }
    }

    /// Set the reference frame
    pub fn with_frame(mut self, frame: FrameId) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Set the reference anchor
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set horizontal and vertical offsets
    pub fn with_offsets(mut self, dx: f64, dy: f64) -> Self {
        self.offsets = (dx, dy);
        self
    }
}
