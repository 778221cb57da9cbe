//! Trunk posture categories

use serde::Serialize;

use crate::config::LungeThresholds;

/// Posture feedback shown before the first analyzed frame
pub const POSTURE_PENDING: &str = "Detecting back posture...";

/// Posture category from trunk lean
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureCategory {
    /// Lean above the warning threshold
    LeaningForward,
    /// Lean below the upright threshold
    Upright,
    Normal,
}

impl PostureCategory {
    /// Classify a trunk lean. Boundary values fall into `Normal`.
    pub fn classify(trunk_lean: f32, thresholds: &LungeThresholds) -> Self {
        if trunk_lean > thresholds.lean_warning_above {
            PostureCategory::LeaningForward
        } else if trunk_lean < thresholds.upright_below {
            PostureCategory::Upright
        } else {
            PostureCategory::Normal
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PostureCategory::LeaningForward => "Back leaning too far forward!",
            PostureCategory::Upright => "Back upright",
            PostureCategory::Normal => "Back angle normal",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, PostureCategory::LeaningForward)
    }
}
