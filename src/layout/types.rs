//! Core value types for the layout engine

use super::ruler::Axis;

/// A 2D point in layout units (x to the right, y upwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Boundary coordinates of a solved frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Extent {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// (low, high) bounds along one axis
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.bottom, self.top),
        }
    }
}

/// Non-fatal conditions found while solving a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasWarning {
    /// Automatic sizing of a canvas axis found nothing to enclose
    DegenerateAxis { axis: Axis },
}

impl std::fmt::Display for CanvasWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasWarning::DegenerateAxis { axis } => write!(
                f,
                "canvas {} cannot be determined automatically; set it explicitly",
                axis.dimension()
            ),
        }
    }
}

/// Outcome of a successful solve pass
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Solved extent of the canvas frame
    pub canvas: Extent,
    pub warnings: Vec<CanvasWarning>,
}

impl SolveReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_dimensions() {
        let extent = Extent::new(1.0, 5.0, -1.0, 2.0);
        assert_eq!(extent.width(), 4.0);
        assert_eq!(extent.height(), 3.0);
        assert_eq!(extent.center(), Point::new(3.0, 0.5));
        assert_eq!(extent.span(Axis::Vertical), (-1.0, 2.0));
    }

    #[test]
    fn test_warning_display() {
        let warning = CanvasWarning::DegenerateAxis {
            axis: Axis::Horizontal,
        };
        assert!(warning.to_string().contains("width"));
    }
}
