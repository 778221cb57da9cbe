//! Classification thresholds
//!
//! All angles are in whole degrees. Defaults are the values the lunge
//! coach ships with; the JS side may override any subset of them as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thresholds for depth, hysteresis and posture classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungeThresholds {
    /// Active knee angle below this is a good lunge (and counts a rep)
    pub good_lunge_below: f32,
    /// Active knee angle below this is a deep lunge
    pub deep_lunge_below: f32,
    /// Active knee angle above this returns the session to standing
    pub stand_up_above: f32,
    /// Only angles below this can set a best depth (filters near-standing noise)
    pub best_depth_below: f32,
    /// Trunk lean above this is "leaning too far forward"
    pub lean_warning_above: f32,
    /// Trunk lean below this is "upright"
    pub upright_below: f32,
    /// Trunk lean above this paints the skeleton in the warning tone
    pub skeleton_warning_above: f32,
}

impl Default for LungeThresholds {
    fn default() -> Self {
        Self {
            good_lunge_below: 100.0,
            deep_lunge_below: 90.0,
            stand_up_above: 140.0,
            best_depth_below: 150.0,
            lean_warning_above: 30.0,
            upright_below: 10.0,
            skeleton_warning_above: 35.0,
        }
    }
}

impl LungeThresholds {
    /// Parse a (possibly partial) JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let thresholds: Self = serde_json::from_str(json)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check ordering invariants. The gap between `good_lunge_below` and
    /// `stand_up_above` is the hysteresis band and must not be empty.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("good_lunge_below", self.good_lunge_below),
            ("deep_lunge_below", self.deep_lunge_below),
            ("stand_up_above", self.stand_up_above),
            ("best_depth_below", self.best_depth_below),
            ("lean_warning_above", self.lean_warning_above),
            ("upright_below", self.upright_below),
            ("skeleton_warning_above", self.skeleton_warning_above),
        ];
        for (name, value) in named {
            if !value.is_finite() || !(0.0..=180.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 180], got {}",
                    name, value
                )));
            }
        }

        if self.deep_lunge_below > self.good_lunge_below {
            return Err(Error::InvalidConfig(format!(
                "deep_lunge_below ({}) exceeds good_lunge_below ({})",
                self.deep_lunge_below, self.good_lunge_below
            )));
        }
        if self.good_lunge_below >= self.stand_up_above {
            return Err(Error::InvalidConfig(format!(
                "good_lunge_below ({}) must be below stand_up_above ({})",
                self.good_lunge_below, self.stand_up_above
            )));
        }
        if self.upright_below > self.lean_warning_above {
            return Err(Error::InvalidConfig(format!(
                "upright_below ({}) exceeds lean_warning_above ({})",
                self.upright_below, self.lean_warning_above
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let t = LungeThresholds::default();
        assert!(t.validate().is_ok());
        assert_eq!(t.good_lunge_below, 100.0);
        assert_eq!(t.stand_up_above, 140.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = LungeThresholds::from_json(r#"{"stand_up_above": 150}"#).unwrap();
        assert_eq!(t.stand_up_above, 150.0);
        assert_eq!(t.good_lunge_below, 100.0);
        assert_eq!(t.best_depth_below, 150.0);
    }

    #[test]
    fn test_empty_hysteresis_band_rejected() {
        let err = LungeThresholds::from_json(r#"{"stand_up_above": 100}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let t = LungeThresholds {
            lean_warning_above: 200.0,
            ..LungeThresholds::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = LungeThresholds::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_json_roundtrip_defaults() {
        let json = LungeThresholds::default().to_json().unwrap();
        assert_eq!(LungeThresholds::from_json(&json).unwrap(), LungeThresholds::default());
    }
}
