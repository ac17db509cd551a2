//! Figure sizing and normalized frame rectangles
//!
//! Plotting back ends usually position axes as fractions of the figure, with
//! the origin at the bottom left. The figure is the canvas plus margins.

use crate::layout::{Extent, Layout, PlacementError};

/// Frame rectangle as fractions of the figure: `[left, bottom, width, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRect {
    pub fn to_array(self) -> [f64; 4] {
        [self.left, self.bottom, self.width, self.height]
    }
}

/// A placed frame, in layout units and normalized
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlacement {
    pub name: String,
    pub extent: Extent,
    pub rect: NormalizedRect,
}

/// Figure size plus the placement of every registered frame
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub width: f64,
    pub height: f64,
    /// Solved canvas extent
    pub canvas: Extent,
    /// Frames in registration order
    pub frames: Vec<FramePlacement>,
}

impl FigureLayout {
    /// Collect placements from a solved layout
    pub fn from_layout(layout: &Layout) -> Result<Self, PlacementError> {
        let canvas = layout.extent(layout.canvas())?;
        let margins = layout.margins();
        let width = margins.left + canvas.width() + margins.right;
        let height = margins.bottom + canvas.height() + margins.top;

        let frames = layout
            .frames()
            .map(|(name, id)| -> Result<FramePlacement, PlacementError> {
                let extent = layout.extent(id)?;
                let rect = NormalizedRect {
                    left: (extent.left - canvas.left + margins.left) / width,
                    bottom: (extent.bottom - canvas.bottom + margins.bottom) / height,
                    width: extent.width() / width,
                    height: extent.height() / height,
                };
                Ok(FramePlacement {
                    name: name.to_string(),
                    extent,
                    rect,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            canvas,
            frames,
        })
    }

    pub fn frame(&self, name: &str) -> Option<&FramePlacement> {
        self.frames.iter().find(|f| f.name == name)
    }
}
