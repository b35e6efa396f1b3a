use std::path::PathBuf;

/// A floating point value in [0, 1]
pub type Range = f32;
pub type Freq = f32;

/// Sample values in -1 to 1
pub type SampleBuffer = Vec<f32>;

/// The four normalized control inputs to an engine.
///
/// Slots 1-3 are engine specific (frequency mapping, decay rate, mix ratio);
/// slot 4 always selects the rendered duration. Values are clamped onto the
/// closed unit interval on construction so engines never see out of range input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
  pub p1: Range,
  pub p2: Range,
  pub p3: Range,
  pub p4: Range,
}

impl Params {
  pub fn new(p1: f32, p2: f32, p3: f32, p4: f32) -> Self {
    Params {
      p1: p1.clamp(0f32, 1f32),
      p2: p2.clamp(0f32, 1f32),
      p3: p3.clamp(0f32, 1f32),
      p4: p4.clamp(0f32, 1f32),
    }
  }
}

/// One unit of batch work: which engine, which instance, which parameters.
/// Exists only for the duration of one render+write cycle.
#[derive(Clone, Copy, Debug)]
pub struct RenderJob {
  pub engine: crate::engines::Engine,
  /// 1-based position within the engine's instance count
  pub instance: usize,
  pub params: Params,
}

/// Where one rendered buffer lands on disk.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputDescriptor {
  pub dir: PathBuf,
  pub filename: String,
}

impl OutputDescriptor {
  pub fn path(&self) -> PathBuf {
    self.dir.join(&self.filename)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_params_clamp() {
    let p = Params::new(-0.5, 1.5, 0.25, 2.0);
    assert_eq!(p, Params { p1: 0.0, p2: 1.0, p3: 0.25, p4: 1.0 });
  }
}
