//! Shaping primitives shared by every engine: exponential decay, one-pole
//! smoothing, tanh saturation, reflect-folding, and the final output clamp.

use crate::synth::SampleBuffer;

/// Reflections applied by `fold_to_range` before giving up and leaving the
/// residue for the final clamp. Extreme gain can legitimately need many
/// reflections; past this bound the remainder is an accepted lossy edge case.
const MAX_FOLDS: usize = 10;

pub fn exp_decay(rate: f32, t: f32) -> f32 {
    (-rate * t).exp()
}

/// Multiply a buffer by exp(-rate * t) with t normalized to [0, 1) over its length.
pub fn apply_exp_decay(samples: &mut SampleBuffer, rate: f32) {
    let n = samples.len();
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample *= exp_decay(rate, i as f32 / n as f32);
    }
}

/// Multiply a buffer by a linear ramp from `from` at the first sample to `to`
/// at the last (both endpoints included). A single-sample buffer gets `from`.
pub fn apply_fade(samples: &mut SampleBuffer, from: f32, to: f32) {
    let n = samples.len();
    if n < 2 {
        for sample in samples.iter_mut() {
            *sample *= from;
        }
        return;
    }
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample *= from + (to - from) * (i as f32 / (n - 1) as f32);
    }
}

/// Smoothing coefficient for a brightness parameter in [0, 1].
/// brightness=1 yields c=0 (pass-through), brightness=0 yields c=0.99 (heavy smoothing).
pub fn lowpass_coefficient(brightness: f32) -> f32 {
    0.99 * (1.0 - brightness)
}

/// One-pole low-pass: y[i] = c*y[i-1] + (1-c)*x[i], starting from silence.
pub fn one_pole_lowpass(signal: &[f32], c: f32) -> SampleBuffer {
    let mut prev = 0f32;
    signal
        .iter()
        .map(|&x| {
            prev = c * prev + (1.0 - c) * x;
            prev
        })
        .collect()
}

/// Normalized tanh saturation. Unity gain at gain=0 is undefined (0/0);
/// callers gate on gain > 0.
pub fn soft_clip(x: f32, gain: f32) -> f32 {
    (gain * x).tanh() / gain.tanh()
}

/// Reflect a value back inside [lo, hi] by mirroring at the bounds,
/// up to MAX_FOLDS times. Values still outside after the cap are left
/// for the final clamp.
pub fn fold_to_range(x: f32, lo: f32, hi: f32) -> f32 {
    let mut y = x;
    for _ in 0..MAX_FOLDS {
        if y > hi {
            y = 2.0 * hi - y;
        } else if y < lo {
            y = 2.0 * lo - y;
        } else {
            break;
        }
    }
    y
}

/// Final output stage for every engine: hard clamp to [-1, 1].
pub fn clip(samples: &mut SampleBuffer) {
    for sample in samples.iter_mut() {
        *sample = sample.clamp(-1f32, 1f32);
    }
}
