//! Frame Layout - positional constraint solving for figure layouts
//!
//! Frames (rectangles) are positioned relative to each other and to a canvas
//! by anchoring their corners, edge midpoints and centers. The solver turns
//! those relative constraints into concrete coordinates, fits the canvas to
//! its frames, and hands the result to a renderer.
//!
//! # Example
//!
//! ```rust
//! use frame_layout::layout::{Anchor, AnchorTarget, Layout, LayoutConfig};
//!
//! let mut layout = Layout::new(LayoutConfig::default()).unwrap();
//! let plot = layout.add_frame("plot").unwrap();
//! layout.set_size(plot, 4.0, 2.5).unwrap();
//! layout
//!     .set_anchor(plot, Anchor::BottomLeft, AnchorTarget::parent())
//!     .unwrap();
//!
//! let report = layout.place_all_frames().unwrap();
//! assert_eq!(report.canvas.width(), 4.0);
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod renderer;

pub use document::LayoutDocument;
pub use error::DocumentError;
pub use layout::{Layout, LayoutConfig, LayoutError, PlacementError, SolveReport};
pub use renderer::{render_svg, FigureLayout, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading or building the layout document
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Error while solving the layout
    #[error("layout error: {0}")]
    Layout(#[from] PlacementError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Overrides the document's canvas and margins when set
    pub layout: Option<LayoutConfig>,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = Some(config);
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Build and solve the layout described by a TOML document
pub fn solve(source: &str) -> Result<(Layout, SolveReport), RenderError> {
    solve_with_config(source, &RenderConfig::default())
}

fn solve_with_config(
    source: &str,
    config: &RenderConfig,
) -> Result<(Layout, SolveReport), RenderError> {
    let document = LayoutDocument::from_str(source)?;
    let mut layout = match &config.layout {
        Some(layout_config) => document.build_with_config(layout_config.clone())?,
        None => document.build()?,
    };
    let report = layout.place_all_frames()?;
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    Ok((layout, report))
}

/// Render a TOML layout document to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use frame_layout::render;
///
/// let svg = render(r#"
///     [[frame]]
///     name = "plot"
///     size = [4.0, 3.0]
///
///     [[frame.anchor]]
///     anchor = "bottomleft"
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("plot"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML layout document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use frame_layout::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_scale(10.0));
/// let svg = render_with_config(r#"
///     [[frame]]
///     name = "a"
///     size = [1.0, 1.0]
///
///     [[frame.anchor]]
///     anchor = "bottomleft"
/// "#, config).unwrap();
/// assert!(svg.contains(r#"width="20""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let (layout, _) = solve_with_config(source, &config)?;
    Ok(render_svg(&layout, &config.svg)?)
}
