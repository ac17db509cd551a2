//! Error types for the layout engine

use thiserror::Error;

/// Errors raised while solving or verifying placements.
///
/// None of these are recovered internally: a failed pass leaves the graph
/// partially placed and the caller has to clear and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// A node reappeared on its own active resolution path
    #[error("circular dependency found: {}", .cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    /// A local solve step needed a dependency that was not placed yet
    #[error(
        "'{element}' solved before its dependencies were placed; \
         use the recursive solver instead of a local solve"
    )]
    DependencyUnplaced { element: String },

    /// Resolved coordinates contradict a declared constraint
    #[error("incomplying placement of '{element}': {reason}")]
    IncomplyingPlacement { element: String, reason: String },

    /// Not enough information to place a node
    #[error("cannot solve placement of '{element}': {reason}")]
    Unsolvable { element: String, reason: String },

    /// Verification or extent query before the node was solved
    #[error("'{element}' is not placed; solve the layout first")]
    NotPlaced { element: String },
}

impl PlacementError {
    /// Create a circular dependency error from the global names on the cycle
    pub fn circular(cycle: Vec<String>) -> Self {
        Self::CircularDependency { cycle }
    }

    pub fn dependency_unplaced(element: impl Into<String>) -> Self {
        Self::DependencyUnplaced {
            element: element.into(),
        }
    }

    pub fn incomplying(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncomplyingPlacement {
            element: element.into(),
            reason: reason.into(),
        }
    }

    pub fn unsolvable(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsolvable {
            element: element.into(),
            reason: reason.into(),
        }
    }

    pub fn not_placed(element: impl Into<String>) -> Self {
        Self::NotPlaced {
            element: element.into(),
        }
    }
}

/// Errors from building a layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Element name that cannot be used in a global name
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A frame with the same name is already registered
    #[error("frame '{name}' already exists, use another name")]
    DuplicateFrame { name: String },

    /// Name reserved by the layout itself
    #[error("name '{name}' is reserved, use another name")]
    ReservedName { name: String },

    /// Anchor name outside the 3x3 anchor grid
    #[error("unknown anchor '{anchor}' (valid anchors: {valid_anchors})")]
    UnknownAnchor {
        anchor: String,
        valid_anchors: String,
    },

    /// Reference to a frame that was never added
    #[error("unknown frame '{name}'{}", format_suggestions(.suggestions))]
    UnknownFrame {
        name: String,
        suggestions: Vec<String>,
    },

    /// Explicit ruler length that is negative, infinite or NaN
    #[error("length of '{element}' must be finite and non-negative, got {value}")]
    InvalidLength { element: String, value: f64 },

    /// Anchor aligned to the parent frame of a root frame
    #[error("'{element}' has no parent frame to align to; pass a reference frame")]
    NoParentFrame { element: String },

    /// Placement failure while solving the layout
    #[error("placement error: {0}")]
    Placement(#[from] PlacementError),
}

impl LayoutError {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_frame(name: impl Into<String>) -> Self {
        Self::DuplicateFrame { name: name.into() }
    }

    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::ReservedName { name: name.into() }
    }

    /// Create an unknown anchor error listing the valid anchor names
    pub fn unknown_anchor(anchor: impl Into<String>, valid_anchors: &[&str]) -> Self {
        Self::UnknownAnchor {
            anchor: anchor.into(),
            valid_anchors: valid_anchors.join(", "),
        }
    }

    /// Create an unknown frame error with similarly named frames
    pub fn unknown_frame(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownFrame {
            name: name.into(),
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownFrame { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }

    pub fn invalid_length(element: impl Into<String>, value: f64) -> Self {
        Self::InvalidLength {
            element: element.into(),
            value,
        }
    }

    pub fn no_parent_frame(element: impl Into<String>) -> Self {
        Self::NoParentFrame {
            element: element.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
