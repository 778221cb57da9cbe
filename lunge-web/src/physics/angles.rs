//! Joint and trunk angles from 2D landmarks
//!
//! Both functions return whole degrees. An untracked input point yields 0°,
//! which is a defined value rather than an error. Non-finite coordinates are
//! not sanitized and come back as NaN.

use crate::bridge::Point2D;

/// Interior angle at `b` between rays b→a and b→c, in whole degrees [0, 180]
///
/// Uses the difference of the two ray headings (atan2), folded so that
/// reflex angles map back into [0, 180].
/// - 180° = straight limb
/// - 90° = right-angle bend
pub fn joint_angle(a: Option<Point2D>, b: Option<Point2D>, c: Option<Point2D>) -> f32 {
    let (Some(a), Some(b), Some(c)) = (a, b, c) else {
        return 0.0;
    };

    let heading_c = (c.y - b.y).atan2(c.x - b.x);
    let heading_a = (a.y - b.y).atan2(a.x - b.x);
    let mut angle = (heading_c - heading_a).to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle.round()
}

/// Deviation of the hip→shoulder line from vertical, in whole degrees [0, 90]
///
/// - 0° = upright (shoulder straight above hip)
/// - 90° = horizontal trunk
pub fn vertical_lean_angle(shoulder: Option<Point2D>, hip: Option<Point2D>) -> f32 {
    let (Some(shoulder), Some(hip)) = (shoulder, hip) else {
        return 0.0;
    };

    let theta = (shoulder.y - hip.y).atan2(shoulder.x - hip.x).to_degrees();
    (90.0 - theta.abs()).abs().round()
}
