//! Text summary for the debug panel

use crate::coach::LungeCoach;
use crate::physics::Side;

use super::hints::best_depth_label;

/// Multi-line summary of the session and the last analyzed frame
pub fn overlay_text(coach: &LungeCoach) -> String {
    let session = coach.session();
    let phase = if session.is_lunging { "LUNGING" } else { "STANDING" };

    let angles = match coach.last_report() {
        Some(report) => {
            let r = &report.analysis.reading;
            format!(
                "L knee: {:.0}°{} | R knee: {:.0}°{}\n\
                 Back: {:.0}° {}",
                r.left_knee_angle,
                if r.active_side == Side::Left { " *" } else { "" },
                r.right_knee_angle,
                if r.active_side == Side::Right { " *" } else { "" },
                r.trunk_lean_angle,
                report.posture_feedback,
            )
        }
        None => format!("No pose yet\nBack: {}", coach.posture_feedback()),
    };

    format!(
        "Reps: {} | {}\n\
         Best: {}\n\
         {}\n\
         {}",
        session.rep_count,
        phase,
        best_depth_label(session.best_depth),
        angles,
        session.last_feedback,
    )
}
