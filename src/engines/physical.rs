//! Physically inspired engines: the Karplus-Strong plucked delay line, the
//! multi-pulse grain cluster, wavefolded sine distortion, and the
//! self-modulating feedback oscillator.

use rand::Rng;

use super::{buffer_len, lerp};
use crate::envelope;
use crate::synth::{pi2, SampleBuffer};
use crate::synth_config::SynthConfig;
use crate::types::Params;

/// Delay line length in samples for a Karplus-Strong pitch.
/// Floored at 2 so the averaging filter always has a neighbor to read.
fn karplus_delay(freq: f32, sample_rate: usize) -> usize {
  ((sample_rate as f32 / freq.max(1.0)).round() as usize).max(2)
}

/// Karplus-Strong: a delay line seeded with an impulse/noise blend, damped by
/// averaging adjacent taps, with a linear fade to silence over the buffer.
///
/// p1 pitch, p2 feedback decay, p3 excitation noise level.
pub fn karplus<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let freq = lerp(20.0, 10000.0, params.p1);
  let delay = karplus_delay(freq, conf.sample_rate);

  let mut line = vec![0f32; delay];
  if params.p3 <= 0.001 {
    line[0] = 1.0;
  } else {
    for tap in line.iter_mut() {
      *tap = rng.gen_range(-1f32..1f32) * params.p3;
    }
    if params.p3 < 1.0 {
      // blend an impulse in for the remaining excitation energy
      line[0] += 1.0 - params.p3;
    }
  }

  let decay = 0.90 + 0.099 * params.p2;
  let mut idx = 0;
  let mut out = Vec::with_capacity(n);
  for _ in 0..n {
    out.push(line[idx]);
    let next = (idx + 1) % delay;
    line[idx] = decay * 0.5 * (line[idx] + line[next]);
    idx = next;
  }
  envelope::apply_fade(&mut out, 1.0, 0.0);
  out
}

/// Clap-like cluster: one short enveloped pulse (noise, tone, or a blend)
/// stamped additively at evenly spaced offsets across the buffer.
///
/// p1 pulse count, p2 time spread, p3 pulse tone (0 noise, 1 tonal).
pub fn grain<R: Rng>(params: &Params, conf: &SynthConfig, rng: &mut R) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let count = ((1.0 + params.p1 * 4.0) as usize).clamp(1, 5);
  let min_frac = 0.05;
  let spread_frac = min_frac + (1.0 - min_frac) * params.p2;
  let spacing = if count > 1 {
    spread_frac * n as f32 / (count - 1) as f32
  } else {
    0.0
  };

  let pulse_len = (20 + (params.p3 * 40.0) as usize).min(n);
  let tone = params.p3;
  let mut pulse = Vec::with_capacity(pulse_len);
  for j in 0..pulse_len {
    let ts = j as f32 / pulse_len as f32;
    let mut value = if tone < 1.0 { rng.gen_range(-1f32..1f32) * (1.0 - tone) } else { 0.0 };
    if tone > 0.0 {
      let freq = 200.0 + tone * 1000.0;
      value += (pi2 * freq * ts).sin() * tone;
    }
    pulse.push(value * envelope::exp_decay(5.0, ts));
  }

  let mut out = vec![0f32; n];
  for j in 0..count {
    let start = (j as f32 * spacing) as usize;
    if start >= n {
      break;
    }
    let end = n.min(start + pulse_len);
    for (offset, &value) in pulse[..end - start].iter().enumerate() {
      out[start + offset] += value;
    }
  }
  out
}

/// Sine plus DC offset driven through the reflect-fold at up to 10x gain,
/// then exponentially decayed.
///
/// p1 base frequency, p2 fold gain, p3 asymmetry offset.
pub fn wavefold(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let sr_f = conf.sample_rate as f32;
  let freq = lerp(20.0, 1000.0, params.p1);
  let gain = 1.0 + params.p2 * 9.0;
  let offset = params.p3 - 0.5;

  let mut out: SampleBuffer = (0..n)
    .map(|i| {
      let t = i as f32 / sr_f;
      let x = ((pi2 * freq * t).sin() + offset) * gain;
      envelope::fold_to_range(x, -1.0, 1.0)
    })
    .collect();
  envelope::apply_exp_decay(&mut out, 5.0);
  out
}

/// Self-modulating oscillator: each phase step adds a decaying fraction of
/// the previous output sample, tipping from vibrato into chaos as the
/// feedback coefficient grows. Phase is wrapped into [0, 2pi).
///
/// p1 base frequency, p2 feedback coefficient, p3 feedback decay rate.
pub fn feedback_fm(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let freq = lerp(20.0, 1000.0, params.p1);
  let feedback = params.p2 * 5.0;
  let base_inc = pi2 * freq / conf.sample_rate as f32;

  let mut out = Vec::with_capacity(n);
  let mut phase = 0f32;
  for i in 0..n {
    let t = i as f32 / n_f;
    let sample = phase.sin();
    out.push(sample * envelope::exp_decay(3.0, t));
    phase += base_inc + feedback * envelope::exp_decay(5.0 * params.p3, t) * sample;
    if phase > pi2 {
      phase -= pi2 * (phase / pi2).floor();
    }
  }
  out
}
