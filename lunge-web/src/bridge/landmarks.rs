//! Landmark frames received from JavaScript
//!
//! MediaPipe Pose hands us 33 landmarks per frame as a flat Float32Array.
//! A frame is either fully shaped (33 slots) or rejected; individual joints
//! inside a frame may be untracked.

use crate::error::{Error, Result};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat JS buffer (x, y, z)
pub const VALUES_PER_LANDMARK: usize = 3;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A 2D landmark position in normalized image coordinates.
/// Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One snapshot of all pose landmarks. `None` marks an untracked joint.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Option<Point2D>; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Parse the flat `[x0, y0, z0, x1, ...]` buffer sent from JS.
    ///
    /// A landmark with both x and y NaN is untracked. A single non-finite
    /// coordinate is kept as-is and propagates through the geometry.
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let expected = LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.len() != expected {
            return Err(Error::InvalidFrameShape {
                expected,
                actual: data.len(),
            });
        }

        let mut points = [None; LANDMARK_COUNT];
        for (slot, chunk) in points.iter_mut().zip(data.chunks_exact(VALUES_PER_LANDMARK)) {
            let (x, y) = (chunk[0], chunk[1]);
            if !(x.is_nan() && y.is_nan()) {
                *slot = Some(Point2D::new(x, y));
            }
        }
        Ok(Self { points })
    }

    /// Build a frame from exactly 33 optional points.
    pub fn from_points(points: &[Option<Point2D>]) -> Result<Self> {
        let points: [Option<Point2D>; LANDMARK_COUNT] =
            points.try_into().map_err(|_| Error::InvalidFrameShape {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        Ok(Self { points })
    }

    /// Landmark at `index`, or `None` if untracked or out of range
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied().flatten()
    }

    pub fn tracked_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

// ============================================================================
// TEST FRAMES
// ============================================================================
