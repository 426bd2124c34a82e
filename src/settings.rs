//! Presentation preferences
//!
//! Gameplay tuning is compile-time (`crate::consts`); these are the knobs
//! that only change how the session sounds.

use serde::{Deserialize, Serialize};

/// Audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Bell volume (0.0 - 1.0)
    pub bell_volume: f32,
    /// Ambience volume (0.0 - 1.0)
    pub ambience_volume: f32,
    /// Play the background drone
    pub ambience: bool,
    /// Silence everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            bell_volume: 0.3,
            ambience_volume: 0.1,
            ambience: true,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective bell gain (respects mute)
    pub fn bell_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.bell_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective ambience gain (respects mute and the ambience toggle)
    pub fn ambience_gain(&self) -> f32 {
        if self.muted || !self.ambience {
            0.0
        } else {
            (self.master_volume * self.ambience_volume).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gains() {
        let s = Settings::default();
        assert!((s.bell_gain() - 0.3).abs() < 1e-6);
        assert!((s.ambience_gain() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_mute_and_toggle() {
        let mut s = Settings {
            ambience: false,
            ..Default::default()
        };
        assert_eq!(s.ambience_gain(), 0.0);
        assert!(s.bell_gain() > 0.0);

        s.muted = true;
        assert_eq!(s.bell_gain(), 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"master_volume":0.5,"bell_volume":1.0}"#).unwrap();
        assert!((s.bell_gain() - 0.5).abs() < 1e-6);
        assert!((s.ambience_gain() - 0.05).abs() < 1e-6);
        assert!(!s.muted);
    }
}
