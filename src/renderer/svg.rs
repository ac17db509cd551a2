//! SVG preview of a solved layout

use crate::layout::{Extent, Layout, PlacementError};

use super::placement::FigureLayout;
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the default look of figure, canvas, frames and labels
    pub fn add_default_styles(&mut self) {
        let p = self.prefix();
        self.styles.push(format!(
            ".{p}figure {{ fill: #ffffff; stroke: #bdbdbd; }} \
             .{p}canvas {{ fill: #f5f5f5; stroke: #9e9e9e; stroke-dasharray: 4 2; }} \
             .{p}frame {{ fill: #bbdefb; fill-opacity: 0.6; stroke: #1565c0; }} \
             .{p}label {{ font-family: sans-serif; font-size: 12px; fill: #0d47a1; }}"
        ));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, id: Option<&str>, x: f64, y: f64, w: f64, h: f64, class: &str) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<rect{} class="{}{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            self.prefix(),
            class,
            round_px(x),
            round_px(y),
            round_px(w),
            round_px(h),
        ));
    }

    /// Add a centered text label
    pub fn add_label(&mut self, text: &str, x: f64, y: f64) {
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            self.prefix(),
            round_px(x),
            round_px(y),
            escape_xml(text)
        ));
    }

    /// Start a group element
    pub fn start_group(&mut self, id: Option<&str>, class: &str) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<g{} class="{}{}">"#,
            self.indent_str(),
            id_attr,
            self.prefix(),
            class
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string for a drawing of `width` x `height` pixels
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let (w, h) = (round_px(width), round_px(height));

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Maps layout coordinates to SVG pixels: margins included, y axis down
struct Projection {
    canvas: Extent,
    margin_left: f64,
    margin_bottom: f64,
    figure_height: f64,
    scale: f64,
}

impl Projection {
    fn x(&self, x: f64) -> f64 {
        (x - self.canvas.left + self.margin_left) * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        (self.figure_height - (y - self.canvas.bottom + self.margin_bottom)) * self.scale
    }

    /// (x, y, width, height) of the SVG rect covering `extent`
    fn rect(&self, extent: &Extent) -> (f64, f64, f64, f64) {
        (
            self.x(extent.left),
            self.y(extent.top),
            extent.width() * self.scale,
            extent.height() * self.scale,
        )
    }
}

/// Render a solved layout to an SVG string
pub fn render_svg(layout: &Layout, config: &SvgConfig) -> Result<String, PlacementError> {
    let figure = FigureLayout::from_layout(layout)?;
    let margins = layout.margins();
    let projection = Projection {
        canvas: figure.canvas,
        margin_left: margins.left,
        margin_bottom: margins.bottom,
        figure_height: figure.height,
        scale: config.scale,
    };

    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    builder.add_rect(
        Some("figure"),
        0.0,
        0.0,
        figure.width * config.scale,
        figure.height * config.scale,
        "figure",
    );
    let (x, y, w, h) = projection.rect(&figure.canvas);
    builder.add_rect(Some("canvas"), x, y, w, h, "canvas");

    for frame in &figure.frames {
        builder.start_group(Some(frame.name.as_str()), "frame-group");
        let (x, y, w, h) = projection.rect(&frame.extent);
        builder.add_rect(None, x, y, w, h, "frame");
        if config.show_labels {
            let center = frame.extent.center();
            builder.add_label(&frame.name, projection.x(center.x), projection.y(center.y));
        }
        builder.end_group();
    }

    tracing::debug!(frames = figure.frames.len(), "rendered svg preview");
    Ok(builder.build(figure.width * config.scale, figure.height * config.scale))
}

/// Round to a thousandth of a pixel so scaled decimals print cleanly
fn round_px(v: f64) -> f64 {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
