use serde::{Deserialize, Serialize};

use crate::synth;

/// Batch-wide render settings. Everything has a default so a bare
/// `drumgen <out_dir>` produces the standard 16x64 corpus.
#[derive(Clone, Debug)]
pub struct SynthConfig {
    pub sample_rate: usize,
    pub min_dur: f32,
    pub max_dur: f32,
    pub instances_per_engine: usize,
    pub out_dir: String,
    /// Batch seed for reproducible corpora. None means draw one at startup.
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            sample_rate: synth::SR,
            min_dur: synth::MIN_DUR,
            max_dur: synth::MAX_DUR,
            instances_per_engine: 64,
            out_dir: String::from("drum_sounds"),
            seed: None,
        }
    }
}

/// On-disk settings file. All fields optional; present fields override the defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub sample_rate: Option<usize>,
    pub min_dur: Option<f32>,
    pub max_dur: Option<f32>,
    pub instances_per_engine: Option<usize>,
    pub seed: Option<u64>,
}

impl SynthConfig {
    pub fn from_settings_file(path: &str) -> Result<SynthConfig, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to open settings {}: {}", path, e))?;
        let settings: Settings = serde_json::from_str(&text).map_err(|e| format!("Failed to parse settings {}: {}", path, e))?;
        let mut config = SynthConfig::default();
        if let Some(sr) = settings.sample_rate {
            config.sample_rate = sr;
        }
        if let Some(dur) = settings.min_dur {
            config.min_dur = dur;
        }
        if let Some(dur) = settings.max_dur {
            config.max_dur = dur;
        }
        if let Some(count) = settings.instances_per_engine {
            config.instances_per_engine = count;
        }
        config.seed = settings.seed;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.instances_per_engine, 64);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_settings_overlay() {
        let settings: Settings = serde_json::from_str(r#"{"instances_per_engine": 2, "seed": 99}"#).unwrap();
        let mut config = SynthConfig::default();
        if let Some(count) = settings.instances_per_engine {
            config.instances_per_engine = count;
        }
        config.seed = settings.seed;
        assert_eq!(config.instances_per_engine, 2);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.sample_rate, 44100);
    }
}
