//! Session store and JS entry points
//!
//! One coach per page. Frames, resets and threshold changes all run on the
//! single wasm thread through the same RefCell, so they are processed in
//! call order and never interleave.

use std::cell::RefCell;

use serde::Serialize;
use tracing::{trace, warn};
use wasm_bindgen::prelude::*;

use super::landmarks::LandmarkFrame;
use crate::coach::LungeCoach;
use crate::config::LungeThresholds;
use crate::display::{best_depth_label, knee_labels, overlay_text, RenderHints};
use crate::error::Result;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static COACH: RefCell<LungeCoach> = RefCell::new(LungeCoach::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × x, y, z). Untracked joints are NaN pairs.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> std::result::Result<(), JsValue> {
    process_frame(data)?;
    Ok(())
}

/// Called when the pose model found no body this tick
#[wasm_bindgen]
pub fn clear_landmarks() {
    with_coach(|coach| {
        coach.update(None);
    });
}

/// Manual reset from the UI. Always succeeds.
#[wasm_bindgen]
pub fn reset_session() -> bool {
    with_coach(|coach| coach.reset());
    true
}

/// Override thresholds with a (partial) JSON object
#[wasm_bindgen]
pub fn configure_thresholds(json: &str) -> std::result::Result<(), JsValue> {
    let thresholds = LungeThresholds::from_json(json)?;
    with_coach(|coach| coach.configure(thresholds))?;
    Ok(())
}

#[wasm_bindgen]
pub fn get_rep_count() -> u32 {
    with_coach(|coach| coach.session().rep_count)
}

#[wasm_bindgen]
pub fn get_best_depth() -> f32 {
    with_coach(|coach| coach.session().best_depth)
}

/// "--" until a qualifying dip, then e.g. "95°"
#[wasm_bindgen]
pub fn get_best_depth_label() -> String {
    with_coach(|coach| best_depth_label(coach.session().best_depth))
}

#[wasm_bindgen]
pub fn is_lunging() -> bool {
    with_coach(|coach| coach.session().is_lunging)
}

#[wasm_bindgen]
pub fn get_feedback() -> String {
    with_coach(|coach| coach.session().last_feedback.clone())
}

#[wasm_bindgen]
pub fn get_posture_feedback() -> String {
    with_coach(|coach| coach.posture_feedback().to_string())
}

/// Last frame report as JSON, or None before the first valid frame
#[wasm_bindgen]
pub fn get_frame_report_json() -> Option<String> {
    with_coach(|coach| coach.last_report().and_then(to_json))
}

/// Colors, banner and bar fills for the last frame as JSON
#[wasm_bindgen]
pub fn get_render_hints_json() -> Option<String> {
    with_coach(|coach| {
        let report = coach.last_report()?;
        to_json(&RenderHints::from_report(report, coach.thresholds()))
    })
}

/// Knee angle labels in video pixel coordinates as JSON
#[wasm_bindgen]
pub fn get_knee_labels_json(video_width: f32, video_height: f32) -> Option<String> {
    with_coach(|coach| {
        let report = coach.last_report()?;
        let frame = coach.last_frame()?;
        to_json(&knee_labels(frame, report, video_width, video_height))
    })
}

/// Formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_overlay_text() -> String {
    with_coach(|coach| overlay_text(coach))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Parse and process one frame. A malformed buffer changes nothing.
pub fn process_frame(data: &[f32]) -> Result<()> {
    let frame = LandmarkFrame::from_flat(data).inspect_err(|e| {
        warn!(error = %e, "rejected landmark frame");
    })?;
    with_coach(|coach| {
        if let Some(report) = coach.update(Some(&frame)) {
            trace!(reps = report.rep_count, "frame processed");
        }
    });
    Ok(())
}

/// Run `f` against the page's coach
pub fn with_coach<R>(f: impl FnOnce(&mut LungeCoach) -> R) -> R {
    COACH.with(|coach_cell| f(&mut coach_cell.borrow_mut()))
}

fn to_json<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!(error = %e, "failed to serialize for JS");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::test_frames::{lunge_frame, to_flat};
    use crate::error::Error;
    use crate::physics::{FEEDBACK_NEXT_REP, FEEDBACK_RESET};

    fn send(left: f32, right: f32, lean: f32) {
        update_landmarks(&to_flat(&lunge_frame(left, right, lean))).unwrap();
    }

    #[test]
    fn test_frames_drive_counters() {
        send(170.0, 178.0, 5.0);
        send(95.0, 178.0, 5.0);
        assert!(is_lunging());
        assert_eq!(get_rep_count(), 1);
        send(160.0, 178.0, 5.0);
        assert!(!is_lunging());
        assert_eq!(get_best_depth(), 95.0);
        assert_eq!(get_best_depth_label(), "95°");
        assert_eq!(get_feedback(), FEEDBACK_NEXT_REP);
    }

    #[test]
    fn test_no_body_tick_keeps_values() {
        send(95.0, 178.0, 5.0);
        let before = get_frame_report_json();
        clear_landmarks();
        assert_eq!(get_frame_report_json(), before);
        assert_eq!(get_rep_count(), 1);
    }

    #[test]
    fn test_malformed_frame_is_rejected_without_update() {
        send(95.0, 178.0, 5.0);
        let err = process_frame(&[0.5; 10]).unwrap_err();
        assert_eq!(err, Error::InvalidFrameShape { expected: 99, actual: 10 });
        assert_eq!(get_rep_count(), 1);
    }

    #[test]
    fn test_reset_session() {
        send(95.0, 178.0, 5.0);
        assert!(reset_session());
        assert_eq!(get_rep_count(), 0);
        assert_eq!(get_best_depth_label(), "--");
        assert!(!is_lunging());
        assert_eq!(get_feedback(), FEEDBACK_RESET);
    }

    #[test]
    fn test_json_outputs_before_and_after_frame() {
        assert_eq!(get_frame_report_json(), None);
        assert_eq!(get_render_hints_json(), None);
        assert_eq!(get_knee_labels_json(640.0, 480.0), None);
        assert_eq!(get_posture_feedback(), "Detecting back posture...");

        send(95.0, 170.0, 40.0);
        let hints: serde_json::Value =
            serde_json::from_str(&get_render_hints_json().unwrap()).unwrap();
        assert_eq!(hints["skeletonColor"], "#FF0000");
        assert_eq!(hints["banner"], "LUNGE!");
        let labels: serde_json::Value =
            serde_json::from_str(&get_knee_labels_json(640.0, 480.0).unwrap()).unwrap();
        assert_eq!(labels.as_array().unwrap().len(), 2);
        assert_eq!(get_posture_feedback(), "Back leaning too far forward!");
    }

    #[test]
    fn test_configure_applies_to_next_frame() {
        with_coach(|coach| {
            coach
                .configure(LungeThresholds {
                    good_lunge_below: 120.0,
                    ..LungeThresholds::default()
                })
                .unwrap()
        });
        send(115.0, 178.0, 5.0);
        assert_eq!(get_rep_count(), 1);
    }

    #[test]
    fn test_overlay_text_reflects_session() {
        send(95.0, 178.0, 5.0);
        assert!(get_overlay_text().starts_with("Reps: 1 | LUNGING"));
    }
}
