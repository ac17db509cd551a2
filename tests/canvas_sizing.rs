//! Canvas auto-sizing for every origin placement.

use frame_layout::layout::{
    Anchor, AnchorTarget, Axis, CanvasWarning, Extent, FrameId, Layout, LayoutConfig,
};
use pretty_assertions::assert_eq;

fn layout_with_origin(origin: Anchor) -> Layout {
    Layout::new(LayoutConfig::new().with_origin(origin)).unwrap()
}

/// Frame of the given size whose bottom left corner sits at (x, y)
fn frame_at(layout: &mut Layout, name: &str, x: f64, y: f64, w: f64, h: f64) -> FrameId {
    let frame = layout.add_frame(name).unwrap();
    let origin = layout.origin();
    layout.set_size(frame, w, h).unwrap();
    layout
        .set_anchor(
            frame,
            Anchor::BottomLeft,
            AnchorTarget::parent().with_anchor(origin).with_offsets(x, y),
        )
        .unwrap();
    frame
}

#[test]
fn test_canvas_encloses_child_from_bottom_left_origin() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    frame_at(&mut layout, "plot", 1.0, 0.0, 4.0, 1.0);

    let report = layout.place_all_frames().unwrap();
    assert_eq!(report.canvas.width(), 5.0);
    assert_eq!(report.canvas, Extent::new(0.0, 5.0, 0.0, 1.0));
}

#[test]
fn test_canvas_grows_left_and_down_from_top_right_origin() {
    let mut layout = layout_with_origin(Anchor::TopRight);
    frame_at(&mut layout, "plot", -3.0, -3.0, 2.0, 2.0);

    let report = layout.place_all_frames().unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.canvas, Extent::new(-3.0, 0.0, -3.0, 0.0));
}

#[test]
fn test_centered_origin_is_symmetric() {
    let mut layout = layout_with_origin(Anchor::Center);
    frame_at(&mut layout, "plot", 1.0, -0.5, 2.0, 1.0);

    let report = layout.place_all_frames().unwrap();
    assert_eq!(report.canvas, Extent::new(-3.0, 3.0, -0.5, 0.5));
}

#[test]
fn test_canvas_encloses_all_frames() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    frame_at(&mut layout, "low", 0.5, 0.5, 1.0, 1.0);
    frame_at(&mut layout, "far", 6.0, 2.0, 1.0, 3.0);

    let report = layout.place_all_frames().unwrap();
    assert_eq!(report.canvas, Extent::new(0.0, 7.0, 0.0, 5.0));
}

#[test]
fn test_fixed_dimension_is_kept() {
    let mut layout = Layout::new(LayoutConfig::new().with_canvas_width(10.0)).unwrap();
    frame_at(&mut layout, "plot", 1.0, 1.0, 2.0, 2.0);

    let report = layout.place_all_frames().unwrap();
    assert_eq!(report.canvas, Extent::new(0.0, 10.0, 0.0, 3.0));
    assert_eq!(layout.canvas_size(), (Some(10.0), Some(3.0)));
}

#[test]
fn test_frames_anchored_to_far_side_of_fixed_canvas() {
    let mut layout = Layout::new(LayoutConfig::new().with_canvas_size(8.0, 6.0)).unwrap();
    let legend = layout.add_frame("legend").unwrap();
    layout.set_size(legend, 2.0, 1.0).unwrap();
    layout
        .set_anchor(
            legend,
            Anchor::TopRight,
            AnchorTarget::parent().with_offsets(-0.5, -0.5),
        )
        .unwrap();

    let report = layout.place_all_frames().unwrap();
    assert_eq!(report.canvas, Extent::new(0.0, 8.0, 0.0, 6.0));
    assert_eq!(layout.extent(legend).unwrap(), Extent::new(5.5, 7.5, 4.5, 5.5));
}

#[test]
fn test_canvas_far_corner_anchored_to_a_frame() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    let plot = frame_at(&mut layout, "plot", 1.0, 1.0, 4.0, 2.0);
    let canvas = layout.canvas();
    layout
        .set_anchor(
            canvas,
            Anchor::TopRight,
            AnchorTarget::to(plot, Anchor::TopRight).with_offsets(0.5, 0.25),
        )
        .unwrap();

    let report = layout.place_all_frames().unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.canvas, Extent::new(0.0, 5.5, 0.0, 3.25));
    // solved from the anchor, not fitted, so the frame margin is kept
    assert_eq!(layout.canvas_size(), (Some(5.5), Some(3.25)));
    assert_eq!(layout.config().canvas_width, None);
}

#[test]
fn test_canvas_size_can_change_between_passes() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    frame_at(&mut layout, "plot", 0.0, 0.0, 2.0, 2.0);
    assert_eq!(layout.place_all_frames().unwrap().canvas.width(), 2.0);

    layout.set_canvas_width(Some(4.0)).unwrap();
    assert_eq!(layout.place_all_frames().unwrap().canvas.width(), 4.0);

    layout.set_canvas_width(None).unwrap();
    assert_eq!(layout.place_all_frames().unwrap().canvas.width(), 2.0);
}

#[test]
fn test_empty_layout_warns_about_both_axes() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    let report = layout.place_all_frames().unwrap();

    assert_eq!(
        report.warnings,
        vec![
            CanvasWarning::DegenerateAxis {
                axis: Axis::Horizontal
            },
            CanvasWarning::DegenerateAxis {
                axis: Axis::Vertical
            },
        ]
    );
    insta::assert_snapshot!(
        report.warnings[0].to_string(),
        @"canvas width cannot be determined automatically; set it explicitly"
    );
}

#[test]
fn test_frames_behind_the_origin_give_a_degenerate_axis() {
    let mut layout = layout_with_origin(Anchor::BottomLeft);
    frame_at(&mut layout, "behind", -5.0, 0.0, 1.0, 1.0);

    let report = layout.place_all_frames().unwrap();
    assert_eq!(
        report.warnings,
        vec![CanvasWarning::DegenerateAxis {
            axis: Axis::Horizontal
        }]
    );
    assert_eq!(report.canvas.width(), 0.0);
    assert_eq!(report.canvas.height(), 1.0);
}
