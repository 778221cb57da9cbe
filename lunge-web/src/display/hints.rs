//! Render hints - colors, labels and bar fills for the JS overlay
//!
//! Pure data. The canvas drawing itself happens on the JS side.

use serde::Serialize;

use crate::bridge::{LandmarkFrame, LEFT_KNEE, RIGHT_KNEE};
use crate::coach::FrameReport;
use crate::config::LungeThresholds;
use crate::physics::{Side, NO_BEST_DEPTH};

/// Hex colors matching the skeleton/landmark palette
mod colors {
    pub const WHITE: &str = "#FFFFFF";
    pub const GREEN: &str = "#00FF00";
    pub const RED: &str = "#FF0000";
    pub const YELLOW: &str = "#FFFF00";
}

pub const LUNGE_BANNER: &str = "LUNGE!";

/// Skeleton line tone for the current frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonTone {
    Neutral,
    Good,
    Warning,
}

impl SkeletonTone {
    /// Warning (trunk too bent) wins over good depth
    pub fn from_report(report: &FrameReport, thresholds: &LungeThresholds) -> Self {
        let reading = &report.analysis.reading;
        if reading.trunk_lean_angle > thresholds.skeleton_warning_above {
            SkeletonTone::Warning
        } else if reading.active_knee_angle() < thresholds.good_lunge_below {
            SkeletonTone::Good
        } else {
            SkeletonTone::Neutral
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SkeletonTone::Neutral => colors::WHITE,
            SkeletonTone::Good => colors::GREEN,
            SkeletonTone::Warning => colors::RED,
        }
    }
}

/// One knee's progress bar: 0% standing straight, 100% at 90° or deeper
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KneeBar {
    pub fill_percent: f32,
    pub highlighted: bool,
}

impl KneeBar {
    pub fn new(angle: f32, thresholds: &LungeThresholds) -> Self {
        Self {
            fill_percent: knee_bar_fill(angle),
            highlighted: angle < thresholds.good_lunge_below,
        }
    }
}

/// Everything the overlay needs to style one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHints {
    pub skeleton_tone: SkeletonTone,
    pub skeleton_color: &'static str,
    pub landmark_color: &'static str,
    pub banner: Option<&'static str>,
    pub left_knee_bar: KneeBar,
    pub right_knee_bar: KneeBar,
    pub active_side: Side,
    pub lean_warning: bool,
    pub best_depth_label: String,
}

impl RenderHints {
    pub fn from_report(report: &FrameReport, thresholds: &LungeThresholds) -> Self {
        let reading = &report.analysis.reading;
        let tone = SkeletonTone::from_report(report, thresholds);
        Self {
            skeleton_tone: tone,
            skeleton_color: tone.color(),
            landmark_color: landmark_color(report.is_lunging),
            banner: report.is_lunging.then_some(LUNGE_BANNER),
            left_knee_bar: KneeBar::new(reading.left_knee_angle, thresholds),
            right_knee_bar: KneeBar::new(reading.right_knee_angle, thresholds),
            active_side: reading.active_side,
            lean_warning: reading.trunk_lean_angle > thresholds.lean_warning_above,
            best_depth_label: best_depth_label(report.best_depth),
        }
    }
}

/// Angle text anchored at a knee, in video pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KneeLabel {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

pub fn landmark_color(is_lunging: bool) -> &'static str {
    if is_lunging {
        colors::YELLOW
    } else {
        colors::RED
    }
}

/// `(180 - angle) / 90` as a percentage, clamped to [0, 100]
pub fn knee_bar_fill(angle: f32) -> f32 {
    ((180.0 - angle) / 90.0 * 100.0).clamp(0.0, 100.0)
}

/// "--" until a qualifying dip has been recorded
pub fn best_depth_label(best_depth: f32) -> String {
    if best_depth >= NO_BEST_DEPTH {
        "--".to_string()
    } else {
        format!("{:.0}°", best_depth)
    }
}

/// Labels for tracked knees only; an occluded knee gets none
pub fn knee_labels(
    frame: &LandmarkFrame,
    report: &FrameReport,
    video_width: f32,
    video_height: f32,
) -> Vec<KneeLabel> {
    let reading = &report.analysis.reading;
    [
        (Side::Left, LEFT_KNEE, reading.left_knee_angle),
        (Side::Right, RIGHT_KNEE, reading.right_knee_angle),
    ]
    .into_iter()
    .filter_map(|(side, index, angle)| {
        frame.get(index).map(|knee| KneeLabel {
            side,
            x: knee.x * video_width,
            y: knee.y * video_height,
            text: format!("{:.0}°", angle),
        })
    })
    .collect()
}
