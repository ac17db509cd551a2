//! End-to-end tests: TOML document -> solved layout -> placements and SVG.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use frame_layout::layout::Layout;
use frame_layout::{render, DocumentError, FigureLayout, LayoutDocument, RenderError};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn solved_demo(name: &str) -> Layout {
    let doc = LayoutDocument::from_file(&demo(name)).unwrap();
    let mut layout = doc.build().unwrap();
    layout.place_all_frames().unwrap();
    layout
}

fn summarize_extents(layout: &Layout) -> String {
    let mut out = String::new();
    let entries = std::iter::once(("canvas", layout.canvas())).chain(layout.frames());
    for (name, id) in entries {
        let e = layout.extent(id).unwrap();
        writeln!(
            out,
            "{}: [{:.3}, {:.3}] x [{:.3}, {:.3}]",
            name, e.left, e.right, e.bottom, e.top
        )
        .unwrap();
    }
    out
}

#[test]
fn test_mass_spectra_extents() {
    let layout = solved_demo("mass_spectra.toml");
    insta::assert_snapshot!(summarize_extents(&layout), @r###"
    canvas: [0.000, 9.200] x [0.000, 6.800]
    colorbar: [0.000, 8.000] x [0.000, 0.200]
    heatmap: [0.000, 8.000] x [0.800, 6.800]
    sum_inten: [8.200, 9.200] x [0.800, 6.800]
    "###);
}

#[test]
fn test_mass_spectra_figure_placements() {
    let layout = solved_demo("mass_spectra.toml");
    let figure = FigureLayout::from_layout(&layout).unwrap();

    let mut out = format!("figure: {:.3} x {:.3}\n", figure.width, figure.height);
    for frame in &figure.frames {
        let [l, b, w, h] = frame.rect.to_array();
        writeln!(out, "{}: [{:.4}, {:.4}, {:.4}, {:.4}]", frame.name, l, b, w, h).unwrap();
    }
    insta::assert_snapshot!(out, @r###"
    figure: 10.200 x 8.200
    colorbar: [0.0784, 0.0976, 0.7843, 0.0244]
    heatmap: [0.0784, 0.1951, 0.7843, 0.7317]
    sum_inten: [0.8824, 0.1951, 0.0980, 0.7317]
    "###);
}

#[test]
fn test_mass_spectra_renders_to_svg() {
    let source = std::fs::read_to_string(demo("mass_spectra.toml")).unwrap();
    let svg = render(&source).unwrap();
    for id in ["figure", "canvas", "colorbar", "heatmap", "sum_inten"] {
        assert!(svg.contains(&format!(r#"id="{id}""#)), "missing {id}");
    }
    assert!(svg.contains(r#"viewBox="0 0 734.4 590.4""#));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = LayoutDocument::from_file(&demo("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.toml"));
}

#[test]
fn test_report_points_at_unknown_frame() {
    let source = r#"
[[frame]]
name = "heatmap"
size = [1.0, 1.0]

[[frame]]
name = "bar"
size = [1.0, 1.0]

[[frame.anchor]]
anchor = "left"
frame = "heatmapp"
"#;
    let err = LayoutDocument::from_str(source)
        .and_then(|doc| doc.build())
        .unwrap_err();
    let report = err.format(source, "figure.toml");
    assert!(report.contains("figure.toml"));
    assert!(report.contains("unknown frame 'heatmapp'"));
    assert!(report.contains("did you mean: heatmap?"));
}

#[test]
fn test_syntax_errors_carry_a_span() {
    let source = "[[frame]]\nname = \"a\"\nsize = [1.0, \n";
    let err = LayoutDocument::from_str(source).unwrap_err();
    assert!(matches!(err, DocumentError::Toml(_)));
    assert!(err.span().is_some());
    assert!(render(source).is_err());
}

#[test]
fn test_unsolvable_document() {
    let source = r#"
[[frame]]
name = "floating"
size = [1.0, 1.0]
"#;
    let err = render(source).unwrap_err();
    assert!(matches!(err, RenderError::Layout(_)));
    assert!(err.to_string().contains("canvas/floating"));
}
