//! Per-frame angle reading shared by the analyzer and the rep tracker

use serde::Serialize;

/// Which leg is doing the lunge this frame (the more flexed knee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Pick the more flexed knee. Equal angles (and NaN) resolve to `Right`.
    pub fn more_flexed(left_knee: f32, right_knee: f32) -> Self {
        if left_knee < right_knee {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Angles derived from one frame, in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleReading {
    pub left_knee_angle: f32,
    pub right_knee_angle: f32,
    /// Trunk lean of the active side only
    pub trunk_lean_angle: f32,
    pub active_side: Side,
}

impl AngleReading {
    /// Knee angle of the active side; this is what drives the rep tracker
    pub fn active_knee_angle(&self) -> f32 {
        match self.active_side {
            Side::Left => self.left_knee_angle,
            Side::Right => self.right_knee_angle,
        }
    }
}
