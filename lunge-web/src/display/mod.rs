//! Display module - render hints and overlay text for the JS UI
//!
//! Re-exports only. All logic in submodules.

mod hints;
mod overlay;

pub use hints::{
    best_depth_label, knee_bar_fill, knee_labels, landmark_color,
    KneeBar, KneeLabel, RenderHints, SkeletonTone, LUNGE_BANNER,
};
pub use overlay::overlay_text;
