//! Engines built from discrete maps and bit sequences rather than
//! oscillators: the logistic chaos map, bytebeat bit arithmetic, dual LFSR
//! pseudo-noise, and the seeded random wavetable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{buffer_len, lerp};
use crate::envelope;
use crate::synth::SampleBuffer;
use crate::synth_config::SynthConfig;
use crate::types::Params;

/// Galois feedback mask for a maximal-length 16-bit register (taps 16,14,13,11).
const LFSR_MASK: u16 = 0xB400;
const WAVETABLE_SIZE: usize = 64;

/// Iterated logistic map x <- r*x*(1-x), output blended between the centered
/// value and its first difference. A final linear de-bias ramp removes any
/// residual DC at the end of the buffer.
///
/// p1 chaos r, p2 initial x0, p3 output mode (0 raw, 1 differentiated).
pub fn logistic(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let r = 0.1 + 3.9 * params.p1;
  // keep x0 strictly inside (0, 1); the map is stuck at the endpoints
  let mut x = 0.0001 + params.p2 * 0.9998;
  let mode = params.p3;

  let mut out = Vec::with_capacity(n);
  let mut last_x = x;
  for _ in 0..n {
    x = r * x * (1.0 - x);
    let diff = (x - last_x) * 2.0;
    let value = if mode < 1.0 {
      let centered = (x - 0.5) * 2.0;
      centered * (1.0 - mode) + diff * mode
    } else {
      diff
    };
    out.push(value);
    last_x = x;
  }

  let end_val = out[n - 1];
  if end_val.abs() > 1e-6 {
    if n < 2 {
      out[0] -= end_val;
    } else {
      // ramp up to a full subtraction at the last sample, so the buffer ends on zero
      for (i, sample) in out.iter_mut().enumerate() {
        *sample -= end_val * (i as f32 / (n - 1) as f32);
      }
    }
  }
  out
}

fn bytebeat_value(t: u32, a: u32, b: u32, c: u32) -> f32 {
  let val = (t.wrapping_mul(a) & (t >> b)) | (t >> c);
  let byte = val & 0xFF;
  (byte as f32 - 128.0) / 128.0
}

/// Classic bitwise formula ((t*A) & (t>>B)) | (t>>C) over the sample index,
/// masked to 8 bits and recentered, with a linear fade to half amplitude.
///
/// p1 multiplier A (1-16), p2 shift B (0-15), p3 shift C (0-15).
pub fn bytebeat(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let a = 1 + (params.p1 * 15.0) as u32;
  let b = (params.p2 * 15.0) as u32;
  let c = (params.p3 * 15.0) as u32;

  let mut out: SampleBuffer = (0..n).map(|t| bytebeat_value(t as u32, a, b, c)).collect();
  envelope::apply_fade(&mut out, 1.0, 0.5);
  out
}

fn lfsr_seed(p: f32) -> u16 {
  // pre-increment value capped at 65533 so the register stays in [1, 65534]
  ((p * 65534.0) as u32).min(65533) as u16 + 1
}

fn lfsr_step(state: &mut u16) -> u16 {
  let lsb = *state & 1;
  *state >>= 1;
  if lsb == 1 {
    *state ^= LFSR_MASK;
  }
  lsb
}

/// Two independent maximal-length 16-bit shift registers, each stepped once
/// every `hold` samples and blended bit-for-bit into a +/-1 stream.
///
/// p1 bandwidth (inverse hold length), p2 seed one, p3 seed two and blend.
pub fn lfsr(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let mut state1 = lfsr_seed(params.p2);
  let mut state2 = lfsr_seed(params.p3);
  let hold = ((1.0 - params.p1) * 15.0) as usize + 1;
  let blend = params.p3;

  let mut bit1 = 0u16;
  let mut bit2 = 0u16;
  let mut out = Vec::with_capacity(n);
  for i in 0..n {
    if i % hold == 0 {
      bit1 = lfsr_step(&mut state1);
      bit2 = lfsr_step(&mut state2);
    }
    let value = bit1 as f32 * (1.0 - blend) + bit2 as f32 * blend;
    out.push(2.0 * value - 1.0);
  }
  envelope::apply_fade(&mut out, 1.0, 0.8);
  out
}

/// A 64-entry table of seeded uniform noise, smoothed by iterative neighbor
/// averaging and played back through a linearly interpolating phase
/// accumulator. The table is a pure function of p1 so a given seed always
/// yields the same waveform regardless of the job rng.
///
/// p1 table seed, p2 playback frequency, p3 smoothing (0 smooth, 1 raw).
pub fn wavetable(params: &Params, conf: &SynthConfig) -> SampleBuffer {
  let (_, n) = buffer_len(params, conf);
  let n_f = n as f32;
  let mut table_rng = StdRng::seed_from_u64((params.p1 * 1000.0).round() as u64);
  let mut table: Vec<f32> = (0..WAVETABLE_SIZE).map(|_| table_rng.gen_range(-1f32..1f32)).collect();

  let iterations = ((1.0 - params.p3) * 10.0) as usize;
  for _ in 0..iterations {
    let prev = table.clone();
    for (i, entry) in table.iter_mut().enumerate() {
      *entry = 0.5 * (prev[i] + prev[(i + WAVETABLE_SIZE - 1) % WAVETABLE_SIZE]);
    }
  }

  let freq = lerp(50.0, 2000.0, params.p2);
  let phase_inc = freq * WAVETABLE_SIZE as f32 / conf.sample_rate as f32;
  let mut phase = 0f32;
  let mut out = Vec::with_capacity(n);
  for i in 0..n {
    let idx = (phase as usize) % WAVETABLE_SIZE;
    let frac = phase - phase.floor();
    let nxt = (idx + 1) % WAVETABLE_SIZE;
    let sample = table[idx] * (1.0 - frac) + table[nxt] * frac;
    out.push(sample * envelope::exp_decay(3.0, i as f32 / n_f));
    phase += phase_inc;
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bytebeat_reference_value() {
    // ((255*1) & (255>>0)) | (255>>0) = 255 -> (255-128)/128 before any fade
    assert_eq!(bytebeat_value(255, 1, 0, 0), 0.9921875);
  }

  #[test]
  fn test_lfsr_seed_range() {
    assert_eq!(lfsr_seed(0.0), 1);
    assert_eq!(lfsr_seed(1.0), 65534);
    for p in [0.0, 0.001, 0.37, 0.999, 1.0] {
      let s = lfsr_seed(p);
      assert!((1..=65534).contains(&s));
    }
  }

  #[test]
  fn test_lfsr_never_reaches_zero() {
    let mut state = lfsr_seed(0.0);
    for _ in 0..70000 {
      lfsr_step(&mut state);
      assert_ne!(state, 0);
    }
  }

  #[test]
  fn test_logistic_de_biased_tail() {
    let conf = SynthConfig::default();
    let params = Params::new(0.9, 0.5, 0.0, 1.0);
    let out = logistic(&params, &conf);
    assert!(out[out.len() - 1].abs() < 1e-5);
  }

  #[test]
  fn test_wavetable_is_pure_in_p1() {
    let conf = SynthConfig::default();
    let params = Params::new(0.42, 0.5, 0.5, 0.5);
    assert_eq!(wavetable(&params, &conf), wavetable(&params, &conf));
  }

  #[test]
  fn test_wavetable_smoothing_reduces_swing() {
    let conf = SynthConfig::default();
    let raw = wavetable(&Params::new(0.42, 0.5, 1.0, 0.5), &conf);
    let smooth = wavetable(&Params::new(0.42, 0.5, 0.0, 0.5), &conf);
    let swing = |b: &SampleBuffer| -> f32 { b.windows(2).map(|w| (w[1] - w[0]).abs()).sum() };
    assert!(swing(&smooth) < swing(&raw));
  }
}
