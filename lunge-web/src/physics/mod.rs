//! Physics module - lunge kinematics and rep counting
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod state;
mod posture;
mod analyzer;
mod repetition;

pub use angles::{joint_angle, vertical_lean_angle};
pub use state::{AngleReading, Side};
pub use posture::{PostureCategory, POSTURE_PENDING};
pub use analyzer::{read_angles, FrameAnalysis, FrameAnalyzer};
pub use repetition::{
    LungePhase, LungeSession, RepetitionTracker, Transition,
    NO_BEST_DEPTH, FEEDBACK_START, FEEDBACK_REP_COUNTED, FEEDBACK_NEXT_REP, FEEDBACK_RESET,
};
