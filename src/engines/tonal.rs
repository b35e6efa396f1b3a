//! Oscillator-driven engines: the pitch-dropping kick, inharmonic clusters,
//! phase modulation, ring modulation, and modal additive partials.

use rand::Rng;

use super::{buffer_len, lerp};
use crate::envelope;
use crate::synth::{pi2, SampleBuffer};
use crate::synth_config::SynthConfig;
use crate::types::Params;

/// Kick-style decaying sine whose frequency glides exponentially from f0
/// down to f0 * end_ratio over the buffer. Phase is the running sum of the
/// instantaneous frequency so the glide stays click free.
///
/// p1 start frequency, p2 pitch-drop amount, p3 amplitude decay.
pub fn sine_drop(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let sr_f = conf.sample_rate as f32;
  let f0 = lerp(30.0, 1000.0, params.p1);
  let end_ratio = 0.1 + 0.9 * (1.0 - params.p2);
  let flat = (end_ratio - 1.0).abs() < 1e-6;
  let amp_decay = 5.0 + 15.0 * params.p3;

  let mut phase = 0f32;
  (0..n)
    .map(|i| {
      let t = i as f32 / n_f;
      let freq = if flat { f0 } else { f0 * end_ratio.powf(t) };
      phase += pi2 * freq / sr_f;
      phase.sin() * envelope::exp_decay(amp_decay, t)
    })
    .collect()
}

/// Sum of 2-10 random-phase sinusoids at base * k^exponent. Partials over
/// Nyquist are skipped rather than aliased; more partials decay faster.
///
/// p1 partial count, p2 base frequency, p3 inharmonicity exponent.
pub fn cymbal<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let sr_f = conf.sample_rate as f32;
  let count = ((2.0 + params.p1 * 8.0) as usize).clamp(2, 10);
  let base_freq = lerp(100.0, 10000.0, params.p2);
  let exponent = 1.0 + params.p3;
  let phases: Vec<f32> = (0..count).map(|_| pi2 * rng.gen::<f32>()).collect();

  let mut out = vec![0f32; n];
  for (k, &phase) in phases.iter().enumerate() {
    let partial_freq = base_freq * ((k + 1) as f32).powf(exponent);
    if partial_freq > sr_f / 2.0 {
      continue;
    }
    for (i, sample) in out.iter_mut().enumerate() {
      let t = i as f32 / sr_f;
      *sample += (pi2 * partial_freq * t + phase).sin();
    }
  }
  for sample in out.iter_mut() {
    *sample /= count as f32;
  }
  envelope::apply_exp_decay(&mut out, 5.0 + (count - 2) as f32);
  out
}

/// Two-operator phase modulation with the modulation index enveloped to zero,
/// giving a bright attack settling into a purer tone.
///
/// p1 carrier frequency, p2 modulator ratio, p3 modulation index.
pub fn fm(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let sr_f = conf.sample_rate as f32;
  let fc = lerp(20.0, 5000.0, params.p1);
  let fm_freq = fc * (0.1 + 9.9 * params.p2);
  let index = 20.0 * params.p3;

  (0..n)
    .map(|i| {
      let t = i as f32 / sr_f;
      let mod_signal = (pi2 * fm_freq * t).sin();
      let y = (pi2 * fc * t + index * envelope::exp_decay(10.0, t) * mod_signal).sin();
      y * envelope::exp_decay(8.0, t)
    })
    .collect()
}

/// Ring/amplitude modulation: carrier times a depth-blended modulator with a
/// DC offset. Depth 0 is pure ring mod, depth 1 leaves the carrier dry.
///
/// p1 carrier frequency, p2 modulator frequency, p3 depth.
pub fn am(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let sr_f = conf.sample_rate as f32;
  let f1 = lerp(20.0, 5000.0, params.p1);
  let f2 = lerp(20.0, 5000.0, params.p2);
  let depth = params.p3;

  (0..n)
    .map(|i| {
      let t = i as f32 / sr_f;
      let carrier = (pi2 * f1 * t).sin();
      let modulator = (1.0 - depth) * (pi2 * f2 * t).sin() + depth;
      carrier * modulator * envelope::exp_decay(8.0, t)
    })
    .collect()
}

/// Four modal partials at base * k^exponent with brightness-controlled
/// amplitude falloff; higher partials decay faster. Normalized by the number
/// of partials actually kept under Nyquist.
///
/// p1 base frequency, p2 inharmonicity, p3 brightness.
pub fn additive(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let base_freq = lerp(50.0, 2000.0, params.p1);
  let exponent = 1.0 + params.p2;
  let falloff = (1.0 - params.p3) * 2.0;

  let mut partials: Vec<(f32, f32)> = Vec::with_capacity(4);
  for k in 0..4usize {
    let freq = base_freq * ((k + 1) as f32).powf(exponent);
    if freq > conf.sample_rate as f32 / 2.0 {
      break;
    }
    partials.push((freq, envelope::exp_decay(falloff, k as f32)));
  }

  let mut out = vec![0f32; n];
  for (k, &(freq, amp)) in partials.iter().enumerate() {
    for (i, sample) in out.iter_mut().enumerate() {
      let t = i as f32 / n_f;
      *sample += amp * (pi2 * freq * t).sin() * envelope::exp_decay((k + 1) as f32 * 3.0, t);
    }
  }
  let norm = partials.len().max(1) as f32;
  for sample in out.iter_mut() {
    *sample /= norm;
  }
  envelope::apply_exp_decay(&mut out, 3.0);
  out
}
