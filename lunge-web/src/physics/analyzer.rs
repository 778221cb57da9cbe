//! Frame analyzer - landmarks in, angles and classifications out
//!
//! Stateless apart from its thresholds. One call per frame; frames with no
//! body never reach this module.

use serde::Serialize;
use tracing::trace;

use crate::bridge::{
    LandmarkFrame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP,
    RIGHT_KNEE, RIGHT_SHOULDER,
};
use crate::config::LungeThresholds;

use super::angles::{joint_angle, vertical_lean_angle};
use super::posture::PostureCategory;
use super::state::{AngleReading, Side};

/// Angles plus their classification for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnalysis {
    #[serde(flatten)]
    pub reading: AngleReading,
    pub is_good_lunge: bool,
    /// Informational only, the rep tracker does not use it
    pub is_deep_lunge: bool,
    #[serde(rename = "postureCategory")]
    pub posture: PostureCategory,
}

/// Computes knee and trunk angles and classifies them against thresholds
#[derive(Debug, Clone, Default)]
pub struct FrameAnalyzer {
    thresholds: LungeThresholds,
}

impl FrameAnalyzer {
    pub fn new(thresholds: LungeThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &LungeThresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: LungeThresholds) {
        self.thresholds = thresholds;
    }

    /// Analyze one frame
    pub fn analyze(&self, frame: &LandmarkFrame) -> FrameAnalysis {
        let reading = read_angles(frame);
        let active_knee = reading.active_knee_angle();

        let analysis = FrameAnalysis {
            reading,
            is_good_lunge: active_knee < self.thresholds.good_lunge_below,
            is_deep_lunge: active_knee < self.thresholds.deep_lunge_below,
            posture: PostureCategory::classify(reading.trunk_lean_angle, &self.thresholds),
        };

        trace!(
            left = reading.left_knee_angle,
            right = reading.right_knee_angle,
            lean = reading.trunk_lean_angle,
            side = reading.active_side.name(),
            "frame analyzed"
        );

        analysis
    }
}

/// Knee angles for both legs and the trunk lean of the active side
pub fn read_angles(frame: &LandmarkFrame) -> AngleReading {
    let left_knee_angle = joint_angle(
        frame.get(LEFT_HIP),
        frame.get(LEFT_KNEE),
        frame.get(LEFT_ANKLE),
    );
    let right_knee_angle = joint_angle(
        frame.get(RIGHT_HIP),
        frame.get(RIGHT_KNEE),
        frame.get(RIGHT_ANKLE),
    );

    let active_side = Side::more_flexed(left_knee_angle, right_knee_angle);

    // The inactive side's trunk geometry is not evaluated
    let trunk_lean_angle = match active_side {
        Side::Left => vertical_lean_angle(frame.get(LEFT_SHOULDER), frame.get(LEFT_HIP)),
        Side::Right => vertical_lean_angle(frame.get(RIGHT_SHOULDER), frame.get(RIGHT_HIP)),
    };

    AngleReading {
        left_knee_angle,
        right_knee_angle,
        trunk_lean_angle,
        active_side,
    }
}
