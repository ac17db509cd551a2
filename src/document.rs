//! Declarative layout descriptions in TOML
//!
//! ```toml
//! [canvas]
//! origin = "bottomleft"
//!
//! [margins]
//! left = 0.8
//!
//! [[frame]]
//! name = "plot"
//! size = [4.0, 3.0]
//!
//! [[frame.anchor]]
//! anchor = "bottomleft"
//! offsets = [0.5, 0.5]
//! ```
//!
//! Frames are registered in document order before any anchor is applied, so
//! an anchor may reference a frame declared further down.

use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::error::DocumentError;
use crate::layout::{
    find_similar, Anchor, AnchorTarget, FrameId, Layout, LayoutConfig, LayoutError, Margins,
    CANVAS_NAME,
};

/// A parsed layout document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    #[serde(default)]
    pub canvas: CanvasSection,
    #[serde(default)]
    pub margins: MarginsSection,
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSection {
    pub origin: Option<Spanned<String>>,
    pub width: Option<Spanned<f64>>,
    pub height: Option<Spanned<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarginsSection {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub top: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameSection {
    pub name: Spanned<String>,
    pub size: Option<Spanned<[f64; 2]>>,
    pub width: Option<Spanned<f64>>,
    pub height: Option<Spanned<f64>>,
    #[serde(default, rename = "anchor")]
    pub anchors: Vec<AnchorSection>,
}

/// One `[[frame.anchor]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorSection {
    pub anchor: Spanned<String>,
    /// Reference frame; the canvas when omitted
    pub frame: Option<Spanned<String>>,
    /// Anchor of the reference frame; the same anchor when omitted
    pub to: Option<Spanned<String>>,
    #[serde(default)]
    pub offsets: [f64; 2],
}

impl LayoutDocument {
    /// Load a layout document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load a layout document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    /// Layout configuration described by the `[canvas]` and `[margins]` tables
    pub fn config(&self) -> Result<LayoutConfig, DocumentError> {
        let mut config = LayoutConfig::default();
        if let Some(origin) = &self.canvas.origin {
            config.origin = parse_anchor(origin)?;
        }
        config.canvas_width = self.canvas.width.as_ref().map(|w| *w.get_ref());
        config.canvas_height = self.canvas.height.as_ref().map(|h| *h.get_ref());

        let defaults = Margins::default();
        let m = &self.margins;
        config.margins = Margins::new(
            m.left.unwrap_or(defaults.left),
            m.right.unwrap_or(defaults.right),
            m.bottom.unwrap_or(defaults.bottom),
            m.top.unwrap_or(defaults.top),
        );
        Ok(config)
    }

    /// Build an unsolved layout from the document
    pub fn build(&self) -> Result<Layout, DocumentError> {
        self.build_with_config(self.config()?)
    }

    /// Build the document's frames on a layout with the given configuration,
    /// ignoring the `[canvas]` and `[margins]` tables
    pub fn build_with_config(&self, config: LayoutConfig) -> Result<Layout, DocumentError> {
        let mut layout = Layout::new(config).map_err(|err| {
            let span = [&self.canvas.width, &self.canvas.height]
                .into_iter()
                .flatten()
                .find(|v| *v.get_ref() < 0.0)
                .map(|v| v.span());
            DocumentError::layout(err, span)
        })?;

        let mut ids = Vec::with_capacity(self.frames.len());
        for section in &self.frames {
            let id = layout
                .add_frame(section.name.get_ref().as_str())
                .map_err(|err| DocumentError::layout(err, Some(section.name.span())))?;
            apply_size(&mut layout, id, section)?;
            ids.push(id);
        }

        for (section, &id) in self.frames.iter().zip(&ids) {
            for anchor in &section.anchors {
                apply_anchor(&mut layout, id, anchor)?;
            }
        }
        tracing::debug!(frames = ids.len(), "layout document built");
        Ok(layout)
    }
}

fn apply_size(layout: &mut Layout, id: FrameId, section: &FrameSection) -> Result<(), DocumentError> {
    if let Some(size) = &section.size {
        if let Some(conflict) = section.width.as_ref().or(section.height.as_ref()) {
            return Err(DocumentError::invalid(
                format!(
                    "frame '{}' sets both `size` and `width`/`height`",
                    section.name.get_ref()
                ),
                Some(conflict.span()),
            ));
        }
        let [w, h] = *size.get_ref();
        return layout
            .set_size(id, w, h)
            .map_err(|err| DocumentError::layout(err, Some(size.span())));
    }
    if let Some(width) = &section.width {
        layout
            .set_width(id, *width.get_ref())
            .map_err(|err| DocumentError::layout(err, Some(width.span())))?;
    }
    if let Some(height) = &section.height {
        layout
            .set_height(id, *height.get_ref())
            .map_err(|err| DocumentError::layout(err, Some(height.span())))?;
    }
    Ok(())
}

fn apply_anchor(layout: &mut Layout, id: FrameId, section: &AnchorSection) -> Result<(), DocumentError> {
    let anchor = parse_anchor(&section.anchor)?;
    let [dx, dy] = section.offsets;
    let mut target = AnchorTarget::parent().with_offsets(dx, dy);
    if let Some(frame) = &section.frame {
        target = target.with_frame(resolve_frame(layout, frame)?);
    }
    if let Some(to) = &section.to {
        target = target.with_anchor(parse_anchor(to)?);
    }
    layout
        .set_anchor(id, anchor, target)
        .map_err(|err| DocumentError::layout(err, Some(section.anchor.span())))
}

fn resolve_frame(layout: &Layout, name: &Spanned<String>) -> Result<FrameId, DocumentError> {
    let name_str = name.get_ref().as_str();
    if name_str == CANVAS_NAME {
        return Ok(layout.canvas());
    }
    layout.frame(name_str).ok_or_else(|| {
        let known = std::iter::once(CANVAS_NAME).chain(layout.frames().map(|(n, _)| n));
        let suggestions = find_similar(known, name_str, 2);
        DocumentError::layout(
            LayoutError::unknown_frame(name_str, suggestions),
            Some(name.span()),
        )
    })
}

fn parse_anchor(value: &Spanned<String>) -> Result<Anchor, DocumentError> {
    value
        .get_ref()
        .parse()
        .map_err(|err| DocumentError::layout(err, Some(value.span())))
}
