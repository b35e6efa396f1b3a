//! Noise-excited engines: filtered bursts, snare-like tone/noise blends,
//! and the resonant ping.

use rand::Rng;

use super::{buffer_len, lerp};
use crate::envelope;
use crate::synth::{pi2, SampleBuffer};
use crate::synth_config::SynthConfig;
use crate::types::Params;

/// Uniform noise, one-pole smoothed by a brightness parameter, exponentially
/// decayed and optionally tanh saturated.
///
/// p1 brightness, p2 decay speed, p3 saturation amount.
pub fn noise_burst<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let mut out: SampleBuffer = (0..n).map(|_| rng.gen_range(-1f32..1f32)).collect();
  if params.p1 < 1.0 {
    out = envelope::one_pole_lowpass(&out, envelope::lowpass_coefficient(params.p1));
  }
  envelope::apply_exp_decay(&mut out, 1.0 + 10.0 * params.p2);
  if params.p3 > 0.0 {
    let gain = 1.0 + params.p3 * 10.0;
    for sample in out.iter_mut() {
      *sample = envelope::soft_clip(*sample, gain);
    }
  }
  out
}

/// Snare-like blend of a sine tone and filtered noise, each with its own
/// decay rate weighted by the mix so the dominant component rings longer.
///
/// p1 tone frequency, p2 tone/noise mix (1 = all tone), p3 noise brightness.
pub fn tone_noise<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let freq = lerp(50.0, 1000.0, params.p1);

  let mut tone: SampleBuffer = (0..n).map(|i| (pi2 * freq * (i as f32 / n_f)).sin()).collect();
  let mut noise: SampleBuffer = (0..n).map(|_| rng.gen_range(-1f32..1f32)).collect();
  if params.p3 < 1.0 {
    noise = envelope::one_pole_lowpass(&noise, envelope::lowpass_coefficient(params.p3));
  }

  envelope::apply_exp_decay(&mut tone, 5.0 + 10.0 * (1.0 - params.p2));
  envelope::apply_exp_decay(&mut noise, 5.0 + 10.0 * params.p2);

  let mix = params.p2;
  tone
    .iter()
    .zip(noise.iter())
    .map(|(t, x)| t * mix + x * (1.0 - mix))
    .collect()
}

/// A damped sinusoid (the resonant mode) blended against a much faster
/// decaying noise burst.
///
/// p1 resonance frequency, p2 decay (1 = slow), p3 excitation mix (1 = pure tone).
pub fn resonant<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let freq = lerp(50.0, 10000.0, params.p1);
  let damping = 2.0 + (1.0 - params.p2) * 8.0;
  let mix = params.p3;

  (0..n)
    .map(|i| {
      let t = i as f32 / n_f;
      let tone = (pi2 * freq * t).sin() * envelope::exp_decay(damping, t);
      let burst = rng.gen_range(-1f32..1f32) * envelope::exp_decay(4.0 * damping, t);
      tone * mix + burst * (1.0 - mix)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sampler;

  #[test]
  fn test_noise_burst_decays() {
    let conf = SynthConfig::default();
    let params = Params::new(1.0, 1.0, 0.0, 1.0);
    let out = noise_burst(&params, &conf, &mut sampler::job_rng(3, 0, 0));
    let head: f32 = out[..100].iter().map(|s| s.abs()).sum();
    let tail: f32 = out[out.len() - 100..].iter().map(|s| s.abs()).sum();
    assert!(tail < head);
  }

  #[test]
  fn test_tone_noise_pure_tone_at_full_mix() {
    let conf = SynthConfig::default();
    // p2=1 removes the noise term entirely
    let params = Params::new(0.5, 1.0, 0.5, 0.5);
    let a = tone_noise(&params, &conf, &mut sampler::job_rng(1, 2, 0));
    let b = tone_noise(&params, &conf, &mut sampler::job_rng(2, 2, 0));
    assert_eq!(a, b);
  }

  #[test]
  fn test_resonant_tail_quieter_with_fast_decay() {
    let conf = SynthConfig::default();
    let fast = Params::new(0.5, 0.0, 1.0, 1.0);
    let out = resonant(&fast, &conf, &mut sampler::job_rng(5, 7, 0));
    let tail_peak = out[out.len() - 50..].iter().fold(0f32, |m, s| m.max(s.abs()));
    assert!(tail_peak < 0.01);
  }
}
