//! Audio output using cpal
//!
//! Buffers come from `crate::synth` - no external files needed. A small
//! software mixer loops the ambience and overlays one-shot bells; the device
//! callback pulls frames from it. Any device failure leaves the manager
//! muted and the session keeps running.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use thiserror::Error;

use crate::settings::Settings;
use crate::sim::SessionEvent;
use crate::synth::{SoundBank, StereoBuffer};

/// Upper bound on simultaneously sounding bells
pub const MAX_VOICES: usize = 16;

/// Audio device setup failures
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device found")]
    NoOutputDevice,
    #[error("failed to query output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("unsupported sample format {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),
}

/// A buffer being played
#[derive(Debug, Clone)]
struct Voice {
    buffer: Arc<StereoBuffer>,
    position: usize,
    gain: f32,
    looping: bool,
}

impl Voice {
    /// Current frame scaled to [-1, 1] * gain, then advance
    fn next(&mut self) -> Option<[f32; 2]> {
        if self.position >= self.buffer.len() {
            if !self.looping || self.buffer.is_empty() {
                return None;
            }
            self.position = 0;
        }
        let [l, r] = self.buffer[self.position];
        self.position += 1;
        Some([
            l as f32 / 32768.0 * self.gain,
            r as f32 / 32768.0 * self.gain,
        ])
    }
}

/// Software mixer shared with the device callback
#[derive(Debug, Default)]
pub struct Mixer {
    ambience: Option<Voice>,
    voices: Vec<Voice>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start looping `buffer` in the background (replaces any previous loop)
    pub fn set_ambience(&mut self, buffer: Arc<StereoBuffer>, gain: f32) {
        self.ambience = Some(Voice {
            buffer,
            position: 0,
            gain,
            looping: true,
        });
    }

    /// Play `buffer` once; the oldest voice is dropped when at capacity
    pub fn trigger(&mut self, buffer: Arc<StereoBuffer>, gain: f32) {
        if self.voices.len() >= MAX_VOICES {
            self.voices.remove(0);
        }
        self.voices.push(Voice {
            buffer,
            position: 0,
            gain,
            looping: false,
        });
    }

    /// Number of one-shot voices still sounding
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn has_ambience(&self) -> bool {
        self.ambience.is_some()
    }

    /// Mix one stereo frame
    pub fn next_frame(&mut self) -> [f32; 2] {
        let mut out = [0.0f32; 2];

        if let Some(frame) = self.ambience.as_mut().and_then(Voice::next) {
            out[0] += frame[0];
            out[1] += frame[1];
        }

        self.voices.retain_mut(|voice| match voice.next() {
            Some(frame) => {
                out[0] += frame[0];
                out[1] += frame[1];
                true
            }
            None => false,
        });

        [out[0].clamp(-1.0, 1.0), out[1].clamp(-1.0, 1.0)]
    }

    /// Fill an interleaved device buffer; channels beyond stereo get silence
    pub fn fill<T>(&mut self, data: &mut [T], channels: usize)
    where
        T: Sample + FromSample<f32>,
    {
        let channels = channels.max(1);
        for frame in data.chunks_mut(channels) {
            let [l, r] = self.next_frame();
            for (ch, sample) in frame.iter_mut().enumerate() {
                let value = match (channels, ch) {
                    (1, _) => (l + r) * 0.5,
                    (_, 0) => l,
                    (_, 1) => r,
                    _ => 0.0,
                };
                *sample = T::from_sample(value);
            }
        }
    }
}

/// Live device stream plus the mixer it reads from
pub struct AudioOutput {
    mixer: Arc<Mutex<Mixer>>,
    sample_rate: u32,
    device_name: String,
    /// Kept alive for the life of the output
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Open the default output device and start streaming silence
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let supported = device.default_output_config()?;
        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels() as usize;
        let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());

        let mixer = Arc::new(Mutex::new(Mixer::new()));
        let config: cpal::StreamConfig = supported.config();

        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, channels, Arc::clone(&mixer))?
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config, channels, Arc::clone(&mixer))?
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config, channels, Arc::clone(&mixer))?
            }
            other => return Err(AudioError::UnsupportedFormat(other)),
        };
        stream.play()?;

        Ok(Self {
            mixer,
            sample_rate,
            device_name,
            _stream: stream,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    fn with_mixer(&self, f: impl FnOnce(&mut Mixer)) {
        match self.mixer.lock() {
            Ok(mut mixer) => f(&mut mixer),
            Err(_) => log::warn!("Audio mixer lock poisoned - dropping sound"),
        }
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    mixer: Arc<Mutex<Mixer>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| match mixer.lock() {
            Ok(mut mixer) => mixer.fill(data, channels),
            Err(_) => data.fill(T::EQUILIBRIUM),
        },
        |err| log::error!("Audio stream error: {}", err),
        None,
    )
}

/// Audio manager for the session
pub struct AudioManager {
    output: Option<AudioOutput>,
    bells: Vec<Arc<StereoBuffer>>,
    bell_gain: f32,
}

impl AudioManager {
    /// Open the default device; falls back to a muted manager on any failure
    pub fn new(settings: &Settings) -> Self {
        if settings.muted {
            log::info!("Audio muted by settings");
            return Self::muted();
        }
        Self::from_output(AudioOutput::open(), settings)
    }

    /// Finish setup from an already attempted device open
    pub fn from_output(output: Result<AudioOutput, AudioError>, settings: &Settings) -> Self {
        let output = match output {
            Ok(output) => output,
            Err(e) => {
                log::warn!("Sound unavailable ({}). Continuing without sound.", e);
                return Self::muted();
            }
        };

        log::info!(
            "Audio: {} @ {}Hz",
            output.device_name(),
            output.sample_rate()
        );

        let bank = SoundBank::generate(output.sample_rate());
        let ambience_gain = settings.ambience_gain();
        if ambience_gain > 0.0 {
            let ambience = Arc::clone(&bank.ambience);
            output.with_mixer(|mixer| mixer.set_ambience(ambience, ambience_gain));
        }

        Self {
            output: Some(output),
            bells: bank.bells,
            bell_gain: settings.bell_gain(),
        }
    }

    /// A manager that ignores every sound request
    pub fn muted() -> Self {
        Self {
            output: None,
            bells: Vec::new(),
            bell_gain: 0.0,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.output.is_none() || self.bells.is_empty()
    }

    /// React to a session event
    pub fn play(&self, event: SessionEvent) {
        match event {
            SessionEvent::Bell { voice } => self.play_bell(voice),
        }
    }

    /// Play bell `voice` (index into the bell set, wraps)
    pub fn play_bell(&self, voice: usize) {
        let Some(output) = &self.output else { return };
        if self.bells.is_empty() || self.bell_gain <= 0.0 {
            return;
        }
        let bell = Arc::clone(&self.bells[voice % self.bells.len()]);
        let gain = self.bell_gain;
        output.with_mixer(|mixer| mixer.trigger(bell, gain));
    }
}
