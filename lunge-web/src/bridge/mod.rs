//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

#[cfg(test)]
pub(crate) use landmarks::test_frames;

pub use landmarks::{
    LandmarkFrame,
    Point2D,
    // Constants
    LANDMARK_COUNT, VALUES_PER_LANDMARK,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};

pub use session::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    reset_session,
    configure_thresholds,
    get_rep_count,
    get_best_depth,
    get_best_depth_label,
    is_lunging,
    get_feedback,
    get_posture_feedback,
    get_frame_report_json,
    get_render_hints_json,
    get_knee_labels_json,
    get_overlay_text,
    // Internal API
    process_frame,
    with_coach,
};
