const TEST_AUDIO_DIR: &str = "test-render";
use drumgen::synth_config::SynthConfig;

pub fn test_audio_name(label: &str) -> String {
    format!("{}/{}.wav", TEST_AUDIO_DIR, label)
}

// A small, seeded batch config for testing
pub fn test_config() -> SynthConfig {
    SynthConfig {
        sample_rate: 44100,
        min_dur: 0.001,
        max_dur: 0.25,
        instances_per_engine: 2,
        out_dir: format!("{}/batch", TEST_AUDIO_DIR),
        seed: Some(808),
    }
}
