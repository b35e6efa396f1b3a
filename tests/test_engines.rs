mod common;

use std::path::Path;

use drumgen::engines::CATALOG;
use drumgen::render::engrave;
use drumgen::sampler;
use drumgen::types::Params;

#[test]
fn test_render_catalog_audio() {
    let config = common::test_config();
    for engine in CATALOG.iter() {
        let mut rng = sampler::job_rng(808, engine.index(), 1);
        let params = sampler::draw_params(&mut rng);
        let samples = engine.render(&params, &config, &mut rng);
        let filename = common::test_audio_name(&format!("engine_{}", engine.name()));
        engrave::samples(config.sample_rate, &samples, Path::new(&filename))
            .expect("Failed to write test waveform");
        println!("Completed writing test waveform {}", filename);
    }
}

#[test]
fn test_corner_vectors_across_catalog() {
    let config = common::test_config();
    let corners = [
        Params::new(0.0, 0.0, 0.0, 0.0),
        Params::new(1.0, 1.0, 1.0, 1.0),
        Params::new(1.0, 0.0, 1.0, 0.0),
        Params::new(0.0, 1.0, 0.0, 1.0),
    ];
    for engine in CATALOG.iter() {
        for (j, params) in corners.iter().enumerate() {
            let mut rng = sampler::job_rng(4242, engine.index(), j);
            let samples = engine.render(params, &config, &mut rng);
            let dur = config.min_dur + params.p4 * (config.max_dur - config.min_dur);
            let expected = ((dur * config.sample_rate as f32).round() as usize).max(1);
            assert_eq!(samples.len(), expected, "{} corner {}", engine.name(), j);
            assert!(
                samples.iter().all(|s| (-1.0..=1.0).contains(s)),
                "{} corner {} out of range",
                engine.name(),
                j
            );
        }
    }
}

#[test]
fn test_identical_sources_render_identical_buffers() {
    let config = common::test_config();
    let params = Params::new(0.62, 0.18, 0.95, 0.44);
    for engine in CATALOG.iter() {
        let a = engine.render(&params, &config, &mut sampler::job_rng(17, engine.index(), 5));
        let b = engine.render(&params, &config, &mut sampler::job_rng(17, engine.index(), 5));
        assert_eq!(a, b, "{} diverged across identical sources", engine.name());
    }
}
