//! Lunge coach - analyzer and rep tracker composed into one per-frame update
//!
//! Frames must arrive in delivery order; the tracker's hysteresis depends on
//! history. A tick without a body leaves everything untouched.

use serde::Serialize;
use tracing::{info, trace};

use crate::bridge::LandmarkFrame;
use crate::config::LungeThresholds;
use crate::error::Result;
use crate::physics::{
    FrameAnalysis, FrameAnalyzer, LungeSession, RepetitionTracker, Transition, POSTURE_PENDING,
};

/// Everything the UI needs after one valid frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    #[serde(flatten)]
    pub analysis: FrameAnalysis,
    pub posture_feedback: &'static str,
    pub is_lunging: bool,
    pub rep_count: u32,
    pub best_depth: f32,
    pub feedback_message: String,
    #[serde(skip)]
    pub transition: Transition,
}

impl FrameReport {
    fn sync_session(&mut self, session: &LungeSession) {
        self.is_lunging = session.is_lunging;
        self.rep_count = session.rep_count;
        self.best_depth = session.best_depth;
        self.feedback_message = session.last_feedback.clone();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct LungeCoach {
    analyzer: FrameAnalyzer,
    tracker: RepetitionTracker,
    last_frame: Option<LandmarkFrame>,
    last_report: Option<FrameReport>,
}

impl LungeCoach {
    pub fn new(thresholds: LungeThresholds) -> Self {
        Self {
            analyzer: FrameAnalyzer::new(thresholds),
            tracker: RepetitionTracker::new(thresholds),
            last_frame: None,
            last_report: None,
        }
    }

    /// Process one tick. `None` means no body was detected: nothing changes
    /// and the previous report stays current.
    pub fn update(&mut self, frame: Option<&LandmarkFrame>) -> Option<&FrameReport> {
        let Some(frame) = frame else {
            trace!("no body detected, keeping last report");
            return None;
        };

        let analysis = self.analyzer.analyze(frame);
        let transition = self.tracker.update(analysis.reading.active_knee_angle());

        let mut report = FrameReport {
            analysis,
            posture_feedback: analysis.posture.message(),
            is_lunging: false,
            rep_count: 0,
            best_depth: 0.0,
            feedback_message: String::new(),
            transition,
        };
        report.sync_session(self.tracker.session());

        self.last_frame = Some(frame.clone());
        self.last_report = Some(report);
        self.last_report.as_ref()
    }

    /// Zero the counters. Angles from the last frame stay on display.
    pub fn reset(&mut self) {
        self.tracker.reset();
        if let Some(report) = self.last_report.as_mut() {
            report.sync_session(self.tracker.session());
            report.transition = Transition::None;
        }
    }

    /// Swap thresholds for subsequent frames. Counters are kept.
    pub fn configure(&mut self, thresholds: LungeThresholds) -> Result<()> {
        thresholds.validate()?;
        self.analyzer.set_thresholds(thresholds);
        self.tracker.set_thresholds(thresholds);
        info!(?thresholds, "thresholds updated");
        Ok(())
    }

    pub fn thresholds(&self) -> &LungeThresholds {
        self.analyzer.thresholds()
    }

    pub fn session(&self) -> &LungeSession {
        self.tracker.session()
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    pub fn last_frame(&self) -> Option<&LandmarkFrame> {
        self.last_frame.as_ref()
    }

    pub fn posture_feedback(&self) -> &'static str {
        self.last_report
            .as_ref()
            .map_or(POSTURE_PENDING, |r| r.posture_feedback)
    }
}

impl Default for LungeCoach {
    fn default() -> Self {
        Self::new(LungeThresholds::default())
    }
}
