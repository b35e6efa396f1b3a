/// This module provides the settings for the application's synthesis engines.
/// It includes definitions for Sample Rate, Nyquist Frequency, and the
/// duration bounds every engine derives its buffer length from.
///
/// The module also offers convenient aliases for standard constants at f32 precision.
pub use crate::types::SampleBuffer;

pub const pi: f32 = std::f32::consts::PI;
pub const pi2: f32 = pi * 2f32;

pub const SR: usize = 44100;
pub const SRf: f32 = SR as f32;

// Nyquist Frequency: Maximum renderable frequency
pub const NF: usize = SR / 2;
pub const NFf: f32 = SR as f32 / 2f32;

/// Shortest and longest render a unit length parameter maps onto, in seconds.
pub const MIN_DUR: f32 = 0.001;
pub const MAX_DUR: f32 = 0.25;
