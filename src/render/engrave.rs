use std::path::Path;

use crate::files;
use crate::synth::SampleBuffer;

/// Write a single-channel 16-bit linear PCM wav file, creating parent
/// directories as needed and overwriting any existing file at `path`.
/// Samples are expected in [-1, 1]; each is scaled by round(sample * 32767).
pub fn samples(sample_rate: usize, samples: &SampleBuffer, path: &Path) -> Result<(), String> {
  files::with_dir(path)?;
  let spec = hound::WavSpec {
    channels: 1,
    sample_rate: sample_rate as u32,
    bits_per_sample: 16,
    sample_format: hound::SampleFormat::Int,
  };
  let mut writer =
    hound::WavWriter::create(path, spec).map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
  for &sample in samples {
    let value = (sample.clamp(-1f32, 1f32) * 32767.0).round() as i16;
    writer
      .write_sample(value)
      .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
  }
  writer.finalize().map_err(|e| format!("Failed to finalize {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  #[test]
  fn test_writes_readable_pcm() {
    let path = PathBuf::from("test-render/engrave/pcm16.wav");
    let buffer: SampleBuffer = vec![0.0, 0.5, -0.5, 1.0, -1.0];
    samples(44100, &buffer, &path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    let values: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(values, vec![0, 16384, -16384, 32767, -32767]);
  }

  #[test]
  fn test_unwritable_path_is_an_error_not_a_panic() {
    // a plain file sitting where the engine directory should be
    files::with_dir(Path::new("test-render/engrave")).unwrap();
    std::fs::write("test-render/engrave/blocked", b"x").unwrap();
    let result = samples(44100, &vec![0.0; 4], Path::new("test-render/engrave/blocked/drum_001_fm.wav"));
    assert!(result.is_err());
  }

  #[test]
  fn test_overwrites_existing_file() {
    let path = PathBuf::from("test-render/engrave/overwrite.wav");
    samples(44100, &vec![0.0; 10], &path).unwrap();
    samples(44100, &vec![0.0; 3], &path).unwrap();
    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.len(), 3);
  }
}
