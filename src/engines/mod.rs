//! The synthesis engine catalog.
//!
//! Sixteen stateless algorithms, each a pure function of a clamped
//! four-parameter vector and a per-job random source. Slot four of the vector
//! always selects the rendered duration; slots one to three are mapped per
//! engine. Every render allocates its own scratch state (delay line,
//! wavetable, shift registers) and discards it on return, so calls are safe
//! to run on any thread in any order.

pub mod digital;
pub mod noise;
pub mod physical;
pub mod tonal;

use rand::Rng;

use crate::envelope;
use crate::synth::SampleBuffer;
use crate::synth_config::SynthConfig;
use crate::types::Params;

/// One named synthesis algorithm. The name is part of the output contract
/// (it becomes the subdirectory and filename suffix) and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
  NoiseBurst,
  SineDrop,
  ToneNoise,
  Cymbal,
  Fm,
  Am,
  Additive,
  Resonant,
  Karplus,
  Grain,
  Logistic,
  Bytebeat,
  Lfsr,
  Wavefold,
  FeedbackFm,
  Wavetable,
}

/// The fixed catalog, in render order.
pub const CATALOG: [Engine; 16] = [
  Engine::NoiseBurst,
  Engine::SineDrop,
  Engine::ToneNoise,
  Engine::Cymbal,
  Engine::Fm,
  Engine::Am,
  Engine::Additive,
  Engine::Resonant,
  Engine::Karplus,
  Engine::Grain,
  Engine::Logistic,
  Engine::Bytebeat,
  Engine::Lfsr,
  Engine::Wavefold,
  Engine::FeedbackFm,
  Engine::Wavetable,
];

impl Engine {
  /// Position in CATALOG. Variants are declared in catalog order.
  pub fn index(&self) -> usize {
    *self as usize
  }

  pub fn name(&self) -> &'static str {
    match self {
      Engine::NoiseBurst => "noise_burst",
      Engine::SineDrop => "sine_drop",
      Engine::ToneNoise => "tone_noise",
      Engine::Cymbal => "cymbal",
      Engine::Fm => "fm",
      Engine::Am => "am",
      Engine::Additive => "additive",
      Engine::Resonant => "resonant",
      Engine::Karplus => "karplus",
      Engine::Grain => "grain",
      Engine::Logistic => "logistic",
      Engine::Bytebeat => "bytebeat",
      Engine::Lfsr => "lfsr",
      Engine::Wavefold => "wavefold",
      Engine::FeedbackFm => "feedback_fm",
      Engine::Wavetable => "wavetable",
    }
  }

  /// Render one sound. The returned buffer is hard clamped to [-1, 1]
  /// and owned solely by the caller.
  pub fn render<R: Rng>(&self, params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
    let mut samples = match self {
      Engine::NoiseBurst => noise::noise_burst(params, conf, rng),
      Engine::SineDrop => tonal::sine_drop(params, conf),
      Engine::ToneNoise => noise::tone_noise(params, conf, rng),
      Engine::Cymbal => tonal::cymbal(params, conf, rng),
      Engine::Fm => tonal::fm(params, conf),
      Engine::Am => tonal::am(params, conf),
      Engine::Additive => tonal::additive(params, conf),
      Engine::Resonant => noise::resonant(params, conf, rng),
      Engine::Karplus => physical::karplus(params, conf, rng),
      Engine::Grain => physical::grain(params, conf, rng),
      Engine::Logistic => digital::logistic(params, conf),
      Engine::Bytebeat => digital::bytebeat(params, conf),
      Engine::Lfsr => digital::lfsr(params, conf),
      Engine::Wavefold => physical::wavefold(params, conf),
      Engine::FeedbackFm => physical::feedback_fm(params, conf),
      Engine::Wavetable => digital::wavetable(params, conf),
    };
    envelope::clip(&mut samples);
    samples
  }
}

/// Linear parameter-to-physical mapping.
pub(crate) fn lerp(lo: f32, hi: f32, p: f32) -> f32 {
  lo + p * (hi - lo)
}

/// Duration in seconds and sample count for a parameter vector.
/// A duration that rounds to zero samples is floored to one sample.
pub(crate) fn buffer_len(params: &Params, conf: &SynthConfig) -> (f32, usize) {
  let dur = conf.min_dur + params.p4 * (conf.max_dur - conf.min_dur);
  let n = ((dur * conf.sample_rate as f32).round() as usize).max(1);
  (dur, n)
}
