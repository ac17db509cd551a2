//! Properties every solved layout must satisfy.
//!
//! Layouts are built through the public API, solved with
//! `place_all_frames`, and then checked pin by pin.

use frame_layout::layout::{
    approx_eq, Anchor, AnchorTarget, Extent, FrameId, Layout, LayoutConfig, PinId, PinSlot,
    PlacementError,
};
use pretty_assertions::assert_eq;

/// Three frames chained off each other and the canvas
fn chained_layout() -> Layout {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let colorbar = layout.add_frame("colorbar").unwrap();
    let heatmap = layout.add_frame("heatmap").unwrap();
    let side = layout.add_frame("side").unwrap();

    layout.set_size(colorbar, 8.0, 0.2).unwrap();
    layout
        .set_anchor(colorbar, Anchor::BottomLeft, AnchorTarget::parent())
        .unwrap();

    layout.set_size(heatmap, 8.0, 6.0).unwrap();
    layout
        .set_anchor(
            heatmap,
            Anchor::BottomLeft,
            AnchorTarget::to(colorbar, Anchor::TopLeft).with_offsets(0.0, 0.6),
        )
        .unwrap();

    layout.set_width(side, 1.0).unwrap();
    layout
        .set_anchor(
            side,
            Anchor::BottomLeft,
            AnchorTarget::to(heatmap, Anchor::BottomRight).with_offsets(0.2, 0.0),
        )
        .unwrap();
    layout
        .set_anchor(
            side,
            Anchor::TopLeft,
            AnchorTarget::to(heatmap, Anchor::TopRight).with_offsets(0.2, 0.0),
        )
        .unwrap();
    layout
}

fn all_frames(layout: &Layout) -> Vec<FrameId> {
    std::iter::once(layout.canvas())
        .chain(layout.frames().map(|(_, id)| id))
        .collect()
}

fn all_pins(layout: &Layout) -> Vec<PinId> {
    let graph = layout.graph();
    all_frames(layout)
        .into_iter()
        .flat_map(|f| graph.frame(f).rulers())
        .flat_map(|r| graph.ruler(r).pins())
        .collect()
}

fn extents(layout: &Layout) -> Vec<Extent> {
    all_frames(layout)
        .into_iter()
        .map(|f| layout.extent(f).unwrap())
        .collect()
}

#[test]
fn test_referenced_pins_keep_their_offsets() {
    let mut layout = chained_layout();
    layout.place_all_frames().unwrap();

    let graph = layout.graph();
    let mut checked = 0;
    for id in all_pins(&layout) {
        let pin = graph.pin(id);
        let Some(reference) = pin.reference() else {
            continue;
        };
        let base = graph.pin(reference).position().unwrap();
        let position = pin.position().unwrap();
        assert!(
            approx_eq(position, base + pin.offset()),
            "{} at {} does not keep offset {} from {}",
            graph.global_name(id),
            position,
            pin.offset(),
            base
        );
        checked += 1;
    }
    assert_eq!(checked, 7);
}

#[test]
fn test_solved_rulers_are_consistent() {
    let mut layout = chained_layout();
    layout.place_all_frames().unwrap();

    let graph = layout.graph();
    for frame in all_frames(&layout) {
        for ruler in graph.frame(frame).rulers() {
            let r = graph.ruler(ruler);
            let at = |slot| graph.pin(r.pin(slot)).position().unwrap();
            let (low, mid, high) = (at(PinSlot::Low), at(PinSlot::Mid), at(PinSlot::High));
            assert!(approx_eq(mid, (low + high) / 2.0), "{}", graph.global_name(ruler));
            assert!(high >= low, "{}", graph.global_name(ruler));
        }
    }
}

#[test]
fn test_single_frame_anchors() {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let a = layout.add_frame("a").unwrap();
    layout.set_size(a, 4.0, 2.5).unwrap();
    layout
        .set_anchor(a, Anchor::BottomLeft, AnchorTarget::parent())
        .unwrap();
    layout.place_all_frames().unwrap();

    let top_right = layout.anchor_position(a, Anchor::TopRight).unwrap();
    let center = layout.anchor_position(a, Anchor::Center).unwrap();
    assert_eq!((top_right.x, top_right.y), (4.0, 2.5));
    assert_eq!((center.x, center.y), (2.0, 1.25));
}

#[test]
fn test_frame_spanning_two_anchors_of_another() {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let a = layout.add_frame("a").unwrap();
    let b = layout.add_frame("b").unwrap();
    layout.set_size(a, 4.0, 2.5).unwrap();
    layout
        .set_anchor(a, Anchor::BottomLeft, AnchorTarget::parent())
        .unwrap();
    layout
        .set_anchor(
            b,
            Anchor::BottomLeft,
            AnchorTarget::to(a, Anchor::Right).with_offsets(0.5, 0.0),
        )
        .unwrap();
    layout
        .set_anchor(
            b,
            Anchor::TopRight,
            AnchorTarget::to(a, Anchor::TopRight).with_offsets(2.5, 0.0),
        )
        .unwrap();
    layout.place_all_frames().unwrap();

    let a_extent = layout.extent(a).unwrap();
    let b_extent = layout.extent(b).unwrap();
    assert_eq!(b_extent, Extent::new(4.5, 6.5, 1.25, 2.5));
    assert_eq!(b_extent.bottom, a_extent.center().y);
    assert_eq!(b_extent.top, a_extent.top);
}

#[test]
fn test_anchor_cycle_is_reported() {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let a = layout.add_frame("a").unwrap();
    let b = layout.add_frame("b").unwrap();
    for frame in [a, b] {
        layout.set_size(frame, 1.0, 1.0).unwrap();
    }
    layout
        .set_anchor(a, Anchor::Left, AnchorTarget::to(b, Anchor::Right))
        .unwrap();
    layout
        .set_anchor(b, Anchor::Right, AnchorTarget::to(a, Anchor::Left))
        .unwrap();

    let err = layout.place_all_frames().unwrap_err();
    let PlacementError::CircularDependency { cycle } = &err else {
        panic!("expected a cycle, got {err:?}");
    };
    assert!(cycle.iter().any(|n| n.starts_with("canvas/a")));
    assert!(cycle.iter().any(|n| n.starts_with("canvas/b")));
    insta::assert_snapshot!(
        err.to_string(),
        @"circular dependency found: canvas/a -> canvas/a/h_ruler -> canvas/a/h_ruler/low -> canvas/b/h_ruler/high -> canvas/a/h_ruler/low"
    );
}

#[test]
fn test_re_solving_is_deterministic() {
    let mut layout = chained_layout();
    layout.place_all_frames().unwrap();
    let first = extents(&layout);

    for frame in all_frames(&layout) {
        layout.graph_mut().clear_frame_placement(frame);
    }
    layout.place_all_frames().unwrap();
    assert_eq!(extents(&layout), first);

    layout.place_all_frames().unwrap();
    assert_eq!(extents(&layout), first);
}

#[test]
fn test_over_constrained_ruler_fails_verification() {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let a = layout.add_frame("a").unwrap();
    layout.set_size(a, 2.0, 1.0).unwrap();
    layout
        .set_anchor(a, Anchor::BottomLeft, AnchorTarget::parent())
        .unwrap();
    layout
        .set_anchor(
            a,
            Anchor::BottomRight,
            AnchorTarget::to(layout.canvas(), Anchor::BottomLeft).with_offsets(5.0, 0.0),
        )
        .unwrap();

    let err = layout.place_all_frames().unwrap_err();
    assert!(
        matches!(&err, PlacementError::IncomplyingPlacement { element, .. } if element == "canvas/a/h_ruler"),
        "{err:?}"
    );
}

#[test]
fn test_direct_placement_conflicting_with_reference() {
    let mut layout = Layout::new(LayoutConfig::default()).unwrap();
    let canvas = layout.canvas();
    let a = layout.add_frame("a").unwrap();
    layout.set_size(a, 4.0, 1.0).unwrap();

    let graph = layout.graph_mut();
    graph.set_anchor_placement(canvas, Anchor::BottomLeft, (0.0, 0.0));
    graph.set_anchor_placement(a, Anchor::BottomLeft, (3.0, 0.0));
    graph
        .set_anchor(a, Anchor::BottomLeft, AnchorTarget::parent().with_offsets(1.0, 0.0))
        .unwrap();

    // the direct position is kept; solving never recomputes a placed pin
    graph.solve(a).unwrap();
    assert_eq!(graph.extent(a).unwrap(), Extent::new(3.0, 7.0, 0.0, 1.0));
    let err = graph.verify_placement(a.into()).unwrap_err();
    assert!(matches!(err, PlacementError::IncomplyingPlacement { .. }));

    // a full pass starts from scratch, so the reference wins
    layout.place_all_frames().unwrap();
    assert_eq!(layout.extent(a).unwrap(), Extent::new(1.0, 5.0, 0.0, 1.0));
}

#[test]
fn test_extent_before_solving() {
    let mut layout = chained_layout();
    let heatmap = layout.frame("heatmap").unwrap();
    assert!(matches!(
        layout.extent(heatmap),
        Err(PlacementError::NotPlaced { .. })
    ));
    layout.place_all_frames().unwrap();
    assert!(layout.extent(heatmap).is_ok());
}
