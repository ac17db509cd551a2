//! Rendering collaborators for solved layouts
//!
//! [`placement`] turns frame extents into a figure size and normalized
//! rectangles for plotting back ends; [`svg`] draws a quick preview.

pub mod config;
pub mod placement;
pub mod svg;

pub use config::SvgConfig;
pub use placement::{FigureLayout, FramePlacement, NormalizedRect};
pub use svg::render_svg;
