//! Lunge Web - lunge/squat analysis from MediaPipe Pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen start hook (panic hook + tracing subscriber)
//! - Re-exports of the core API
//!
//! Per frame: bridge parses landmarks → physics computes angles and
//! classifications → rep tracker updates counters → display builds hints.

mod bridge;
mod coach;
mod config;
mod display;
mod error;
mod physics;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_landmarks, configure_thresholds, get_best_depth, get_best_depth_label, get_feedback,
    get_frame_report_json, get_knee_labels_json, get_overlay_text, get_posture_feedback,
    get_render_hints_json, get_rep_count, is_lunging, reset_session, update_landmarks,
};

// Core API for native callers
pub use bridge::{
    process_frame, with_coach, LandmarkFrame, Point2D, LANDMARK_COUNT, VALUES_PER_LANDMARK,
};
pub use coach::{FrameReport, LungeCoach};
pub use config::LungeThresholds;
pub use display::{
    best_depth_label, knee_bar_fill, knee_labels, landmark_color, overlay_text, KneeBar,
    KneeLabel, RenderHints, SkeletonTone, LUNGE_BANNER,
};
pub use error::{Error, Result};
pub use physics::{
    joint_angle, read_angles, vertical_lean_angle, AngleReading, FrameAnalysis, FrameAnalyzer,
    LungePhase, LungeSession, PostureCategory, RepetitionTracker, Side, Transition,
    FEEDBACK_NEXT_REP, FEEDBACK_REP_COUNTED, FEEDBACK_RESET, FEEDBACK_START, NO_BEST_DEPTH,
    POSTURE_PENDING,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("lunge-web initialized");
}
