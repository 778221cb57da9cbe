//! Lunge repetition tracker
//!
//! Two-state machine (standing / lunging) with a hysteresis band between the
//! down threshold and the up threshold, plus a best-depth record. A rep is
//! counted only on the standing→lunging edge, never while held at the bottom.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::LungeThresholds;

/// "No qualifying dip yet" marker for best depth
pub const NO_BEST_DEPTH: f32 = 180.0;

pub const FEEDBACK_START: &str = "Please stand in front of the camera...";
pub const FEEDBACK_REP_COUNTED: &str = "Good Lunge! +1";
pub const FEEDBACK_NEXT_REP: &str = "Get ready for the next rep...";
pub const FEEDBACK_RESET: &str = "Stats reset";

/// Movement phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LungePhase {
    Standing,
    Lunging,
}

/// What a single reading did to the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Standing → lunging, rep counted
    RepCounted,
    /// Lunging → standing
    Stood,
    /// Dead zone or already in the target state
    None,
}

/// Cross-frame lunge state, reset only on explicit command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LungeSession {
    pub is_lunging: bool,
    pub rep_count: u32,
    /// Minimum active knee angle seen below the best-depth gate
    pub best_depth: f32,
    pub last_feedback: String,
}

impl LungeSession {
    pub fn new() -> Self {
        Self::with_feedback(FEEDBACK_START)
    }

    fn with_feedback(feedback: &str) -> Self {
        Self {
            is_lunging: false,
            rep_count: 0,
            best_depth: NO_BEST_DEPTH,
            last_feedback: feedback.to_string(),
        }
    }

    pub fn phase(&self) -> LungePhase {
        if self.is_lunging {
            LungePhase::Lunging
        } else {
            LungePhase::Standing
        }
    }

    pub fn has_best_depth(&self) -> bool {
        self.best_depth < NO_BEST_DEPTH
    }
}

impl Default for LungeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Rep counter driven by the active knee angle, one reading per frame
pub struct RepetitionTracker {
    session: LungeSession,
    thresholds: LungeThresholds,
}

impl RepetitionTracker {
    pub fn new(thresholds: LungeThresholds) -> Self {
        Self {
            session: LungeSession::new(),
            thresholds,
        }
    }

    pub fn session(&self) -> &LungeSession {
        &self.session
    }

    pub fn set_thresholds(&mut self, thresholds: LungeThresholds) {
        self.thresholds = thresholds;
    }

    /// Feed the active knee angle of one valid frame
    pub fn update(&mut self, active_knee_angle: f32) -> Transition {
        self.update_best_depth(active_knee_angle);

        let session = &mut self.session;
        if active_knee_angle < self.thresholds.good_lunge_below && !session.is_lunging {
            session.is_lunging = true;
            session.rep_count += 1;
            session.last_feedback = FEEDBACK_REP_COUNTED.to_string();
            debug!(reps = session.rep_count, angle = active_knee_angle, "rep counted");
            Transition::RepCounted
        } else if active_knee_angle > self.thresholds.stand_up_above && session.is_lunging {
            session.is_lunging = false;
            session.last_feedback = FEEDBACK_NEXT_REP.to_string();
            debug!(angle = active_knee_angle, "back to standing");
            Transition::Stood
        } else {
            Transition::None
        }
    }

    /// Independent of the phase: any angle under the gate can set a record
    fn update_best_depth(&mut self, angle: f32) {
        if angle < self.thresholds.best_depth_below && angle < self.session.best_depth {
            self.session.best_depth = angle;
            debug!(best = angle, "new best depth");
        }
    }

    /// Back to standing with zero reps and no best depth. Safe mid-lunge.
    pub fn reset(&mut self) {
        self.session = LungeSession::with_feedback(FEEDBACK_RESET);
        info!("lunge session reset");
    }
}

impl Default for RepetitionTracker {
    fn default() -> Self {
        Self::new(LungeThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(angles: &[f32]) -> (RepetitionTracker, Vec<Transition>) {
        let mut tracker = RepetitionTracker::default();
        let transitions = angles.iter().map(|&a| tracker.update(a)).collect();
        (tracker, transitions)
    }

    #[test]
    fn test_initial_session() {
        let tracker = RepetitionTracker::default();
        let s = tracker.session();
        assert!(!s.is_lunging);
        assert_eq!(s.rep_count, 0);
        assert_eq!(s.best_depth, NO_BEST_DEPTH);
        assert!(!s.has_best_depth());
        assert_eq!(s.last_feedback, FEEDBACK_START);
        assert_eq!(s.phase(), LungePhase::Standing);
    }

    #[test]
    fn test_single_rep() {
        let (tracker, transitions) = run(&[170.0, 95.0, 160.0]);
        assert_eq!(
            transitions,
            vec![Transition::None, Transition::RepCounted, Transition::Stood]
        );
        let s = tracker.session();
        assert_eq!(s.rep_count, 1);
        assert_eq!(s.best_depth, 95.0);
        assert_eq!(s.phase(), LungePhase::Standing);
        assert_eq!(s.last_feedback, FEEDBACK_NEXT_REP);
    }

    #[test]
    fn test_dead_zone_does_not_double_count() {
        let (tracker, transitions) = run(&[170.0, 95.0, 110.0, 95.0, 170.0]);
        assert_eq!(tracker.session().rep_count, 1);
        assert_eq!(transitions[2], Transition::None);
        assert_eq!(transitions[3], Transition::None);
        assert_eq!(transitions[4], Transition::Stood);
    }

    #[test]
    fn test_deep_lunge_rep() {
        let (tracker, _) = run(&[170.0, 86.0]);
        let s = tracker.session();
        assert_eq!(s.rep_count, 1);
        assert_eq!(s.best_depth, 86.0);
        assert!(s.is_lunging);
        assert_eq!(s.last_feedback, FEEDBACK_REP_COUNTED);
    }

    #[test]
    fn test_hysteresis_band_is_inert() {
        let (tracker, transitions) = run(&[170.0, 139.0, 101.0, 120.0, 138.0, 102.0, 125.0]);
        assert!(transitions.iter().all(|t| *t == Transition::None));
        assert_eq!(tracker.session().rep_count, 0);
        assert!(!tracker.session().is_lunging);

        // Same band while lunging: stays down
        let (tracker, _) = run(&[95.0, 139.0, 101.0, 140.0]);
        assert!(tracker.session().is_lunging);
        assert_eq!(tracker.session().rep_count, 1);
    }

    #[test]
    fn test_held_at_bottom_counts_once() {
        let (tracker, _) = run(&[95.0, 92.0, 88.0, 91.0, 97.0]);
        assert_eq!(tracker.session().rep_count, 1);
        assert_eq!(tracker.session().best_depth, 88.0);
    }

    #[test]
    fn test_rep_count_monotonic() {
        let angles = [
            170.0, 95.0, 150.0, 99.0, 120.0, 141.0, 80.0, 100.0, 145.0, 60.0, 179.0, 0.0,
        ];
        let mut tracker = RepetitionTracker::default();
        let mut prev = 0;
        for a in angles {
            let transition = tracker.update(a);
            let count = tracker.session().rep_count;
            assert!(count >= prev);
            if transition == Transition::RepCounted {
                assert_eq!(count, prev + 1);
            } else {
                assert_eq!(count, prev);
            }
            prev = count;
        }
        assert_eq!(prev, 5);
    }

    #[test]
    fn test_best_depth_gate() {
        // Shallow dips between 100 and 150 still set a record
        let (tracker, _) = run(&[170.0, 130.0, 160.0]);
        assert_eq!(tracker.session().best_depth, 130.0);
        assert_eq!(tracker.session().rep_count, 0);

        // Near-standing noise never does
        let (tracker, _) = run(&[170.0, 150.0, 155.0]);
        assert_eq!(tracker.session().best_depth, NO_BEST_DEPTH);
    }

    #[test]
    fn test_best_depth_keeps_minimum() {
        let (tracker, _) = run(&[95.0, 150.0, 120.0, 170.0, 97.0]);
        assert_eq!(tracker.session().best_depth, 95.0);
    }

    #[test]
    fn test_reset_mid_lunge() {
        let (mut tracker, _) = run(&[170.0, 95.0, 160.0, 85.0]);
        assert!(tracker.session().is_lunging);
        tracker.reset();
        let s = tracker.session();
        assert!(!s.is_lunging);
        assert_eq!(s.rep_count, 0);
        assert_eq!(s.best_depth, NO_BEST_DEPTH);
        assert_eq!(s.last_feedback, FEEDBACK_RESET);

        // Next dip counts from zero
        assert_eq!(tracker.update(90.0), Transition::RepCounted);
        assert_eq!(tracker.session().rep_count, 1);
    }

    #[test]
    fn test_missing_knee_zero_angle() {
        // 0° from an occluded knee counts a rep from standing...
        let (tracker, transitions) = run(&[170.0, 0.0]);
        assert_eq!(transitions[1], Transition::RepCounted);
        assert_eq!(tracker.session().rep_count, 1);
        assert_eq!(tracker.session().best_depth, 0.0);

        // ...but not when already lunging
        let (tracker, transitions) = run(&[95.0, 0.0, 0.0]);
        assert_eq!(transitions[1], Transition::None);
        assert_eq!(tracker.session().rep_count, 1);
    }

    #[test]
    fn test_nan_angle_is_inert() {
        let (tracker, transitions) = run(&[95.0, f32::NAN, f32::NAN]);
        assert_eq!(transitions[1], Transition::None);
        assert!(tracker.session().is_lunging);
        assert_eq!(tracker.session().best_depth, 95.0);
    }

    #[test]
    fn test_feedback_unchanged_without_transition() {
        let (tracker, _) = run(&[95.0, 120.0]);
        assert_eq!(tracker.session().last_feedback, FEEDBACK_REP_COUNTED);
    }
}
