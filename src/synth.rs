//! Procedural waveform synthesis
//!
//! Every sample is a closed-form function of its time index, so buffers are
//! built with a plain map over the frame range. Output is interleaved-ready
//! stereo `i16` with identical channels.

use std::f64::consts::TAU;
use std::sync::Arc;

use crate::consts::{AMBIENCE_DURATION, BELL_DURATION, BELL_FREQUENCIES, DEFAULT_SAMPLE_RATE};

/// One stereo frame (left, right)
pub type StereoFrame = [i16; 2];

/// Immutable stereo sample buffer
pub type StereoBuffer = Vec<StereoFrame>;

#[inline]
fn frame_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64) as usize
}

/// Decaying bell tone with a slow vibrato
///
/// `32767 * e^(-5t) * sin(2π f t (1 + 0.1 sin(2π 2t)))`
pub fn synthesize_bell(frequency: f64, duration: f64, sample_rate: u32) -> StereoBuffer {
    let sr = sample_rate as f64;
    (0..frame_count(duration, sample_rate))
        .map(|i| {
            let t = i as f64 / sr;
            let envelope = (-5.0 * t).exp();
            let wave = (TAU * frequency * t * (1.0 + 0.1 * (TAU * 2.0 * t).sin())).sin();
            let value = (32767.0 * envelope * wave) as i16;
            [value, value]
        })
        .collect()
}

/// Layered low-frequency drone, meant to be looped
///
/// `8000 * (sin(0.3t) + 0.3 sin(5.3t) + 0.1 sin(23t))`
pub fn synthesize_ambience(duration: f64, sample_rate: u32) -> StereoBuffer {
    let sr = sample_rate as f64;
    (0..frame_count(duration, sample_rate))
        .map(|i| {
            let t = i as f64 / sr;
            let layered = (0.3 * t).sin() + 0.3 * (5.3 * t).sin() + 0.1 * (23.0 * t).sin();
            let value = (8000.0 * layered) as i16;
            [value, value]
        })
        .collect()
}

/// All buffers the game plays, generated once at startup
#[derive(Debug, Clone)]
pub struct SoundBank {
    pub sample_rate: u32,
    /// One bell per entry of `BELL_FREQUENCIES`
    pub bells: Vec<Arc<StereoBuffer>>,
    pub ambience: Arc<StereoBuffer>,
}

impl SoundBank {
    pub fn generate(sample_rate: u32) -> Self {
        let bells = BELL_FREQUENCIES
            .iter()
            .map(|&f| Arc::new(synthesize_bell(f, BELL_DURATION, sample_rate)))
            .collect();
        Self {
            sample_rate,
            bells,
            ambience: Arc::new(synthesize_ambience(AMBIENCE_DURATION, sample_rate)),
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::generate(DEFAULT_SAMPLE_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 22_050;

    #[test]
    fn test_bell_length_and_silent_start() {
        let bell = synthesize_bell(440.0, 0.5, SR);
        assert_eq!(bell.len(), 11_025);
        assert_eq!(bell[0], [0, 0]);
    }

    #[test]
    fn test_bell_channels_match() {
        let bell = synthesize_bell(523.25, 0.5, SR);
        assert!(bell.iter().all(|[l, r]| l == r));
    }

    #[test]
    fn test_bell_decays() {
        let bell = synthesize_bell(659.25, 0.5, SR);
        let peak = |range: std::ops::Range<usize>| {
            bell[range].iter().map(|f| f[0].unsigned_abs()).max().unwrap_or(0)
        };
        let head = peak(0..2_000);
        let tail = peak(9_000..11_025);
        assert!(head > 20_000, "head peak {head}");
        // e^(-5 * 0.41) ≈ 0.13
        assert!(tail < head / 4, "tail {tail} vs head {head}");
    }

    #[test]
    fn test_bell_matches_formula() {
        let bell = synthesize_bell(440.0, 0.5, SR);
        let i = 1234;
        let t = i as f64 / SR as f64;
        let expected = 32767.0
            * (-5.0 * t).exp()
            * (TAU * 440.0 * t * (1.0 + 0.1 * (TAU * 2.0 * t).sin())).sin();
        assert!((bell[i][0] as f64 - expected).abs() <= 1.0);
    }

    #[test]
    fn test_ambience_bounds() {
        let amb = synthesize_ambience(10.0, SR);
        assert_eq!(amb.len(), 220_500);
        assert!(amb.iter().all(|[l, r]| l == r && l.unsigned_abs() <= 11_200));
        assert_eq!(amb[0], [0, 0]);
    }

    #[test]
    fn test_sound_bank() {
        let bank = SoundBank::generate(8_000);
        assert_eq!(bank.bells.len(), BELL_FREQUENCIES.len());
        assert!(bank.bells.iter().all(|b| b.len() == 4_000));
        assert_eq!(bank.ambience.len(), 80_000);

        let default = SoundBank::default();
        assert_eq!(default.sample_rate, 22_050);
        assert_eq!(default.bells[0].len(), 11_025);
    }
}
