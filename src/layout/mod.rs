//! Layout engine for placing frames from relative constraints
//!
//! Frames are rectangles made of two rulers, each ruler three pins. Users link
//! anchors of one frame to anchors of another; [`Layout::place_all_frames`]
//! resolves those links into concrete coordinates.

pub mod anchor;
pub mod canvas;
pub mod config;
pub mod element;
pub mod error;
pub mod frame;
pub mod graph;
pub mod pin;
pub mod ruler;
pub mod solver;
pub mod types;

pub use anchor::{Anchor, AnchorTarget};
pub use canvas::{Layout, CANVAS_NAME, RESERVED_NAMES};
pub use config::{LayoutConfig, Margins};
pub use element::{FrameId, NodeId, PinId, RulerId};
pub use error::{LayoutError, PlacementError};
pub use frame::{AnchorConstraint, Frame};
pub use graph::Graph;
pub use pin::{approx_eq, Pin};
pub use ruler::{Axis, PinSlot, Ruler};
pub use solver::DependencyPath;
pub use types::*;

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (m, n) = (a_chars.len(), b_chars.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Frame names within `max_distance` edits of `target`, closest first
pub(crate) fn find_similar<'a>(
    names: impl IntoIterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = names
        .into_iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist > 0 && dist <= max_distance).then_some((name, dist))
        })
        .collect();
    candidates.sort_by_key(|&(_, d)| d);
    candidates
        .into_iter()
        .take(3)
        .map(|(name, _)| name.to_string())
        .collect()
}
