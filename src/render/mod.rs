//! The batch render driver.
//!
//! For each engine in the catalog and each instance index, the driver draws a
//! parameter vector from that job's seeded rng, invokes the engine, and hands
//! the buffer to the wav sink. Jobs are independent by construction (engines
//! carry no cross-call state and every output path is unique), so the whole
//! set fans out over a rayon pool. A failed write is reported and skipped;
//! it never aborts the rest of the batch.

pub mod engrave;

use std::path::Path;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::engines::CATALOG;
use crate::files;
use crate::sampler;
use crate::synth::SampleBuffer;
use crate::synth_config::SynthConfig;
use crate::types::{OutputDescriptor, RenderJob};

/// Outcome of a full batch run.
#[derive(Clone, Copy, Debug)]
pub struct BatchSummary {
  pub written: usize,
  pub failed: usize,
  /// The seed the corpus was rendered with; reusing it reproduces every file.
  pub seed: u64,
}

/// Where a job's buffer lands: one subdirectory per engine, filenames
/// drum_<instance 03d>_<engine>.wav.
pub fn describe(job: &RenderJob, out_dir: &str) -> OutputDescriptor {
  OutputDescriptor {
    dir: Path::new(out_dir).join(job.engine.name()),
    filename: format!("drum_{:03}_{}.wav", job.instance, job.engine.name()),
  }
}

/// Enumerate the full job set in deterministic order: engines in catalog
/// order, instances 1-based within each engine, parameters drawn from each
/// job's own rng.
pub fn plan_jobs(conf: &SynthConfig, seed: u64) -> Vec<RenderJob> {
  let mut jobs = Vec::with_capacity(CATALOG.len() * conf.instances_per_engine);
  for engine in CATALOG.iter() {
    for instance in 1..=conf.instances_per_engine {
      let mut rng = sampler::job_rng(seed, engine.index(), instance);
      jobs.push(RenderJob {
        engine: *engine,
        instance,
        params: sampler::draw_params(&mut rng),
      });
    }
  }
  jobs
}

/// Render one planned job. The job rng is re-derived and advanced past the
/// parameter draw, so the engine receives the stream exactly where the
/// sampler left it.
pub fn render_job(conf: &SynthConfig, seed: u64, job: &RenderJob) -> SampleBuffer {
  let mut rng = sampler::job_rng(seed, job.engine.index(), job.instance);
  let params = sampler::draw_params(&mut rng);
  debug_assert_eq!(params, job.params);
  job.engine.render(&params, conf, &mut rng)
}

/// Run the whole batch: clear and recreate the output root, render every
/// (engine, instance) pair in parallel, and write each buffer to its own wav.
pub fn render_batch(conf: &SynthConfig) -> Result<BatchSummary, String> {
  let _ = ThreadPoolBuilder::new().num_threads(4).build_global();

  let seed = sampler::batch_seed(conf.seed);
  files::reset_dir(Path::new(&conf.out_dir))?;

  let jobs = plan_jobs(conf, seed);
  println!("Rendering {} sounds across {} engines (seed {})", jobs.len(), CATALOG.len(), seed);

  // every job creates its own directory via the sink, so a bad path costs
  // only the jobs that touch it
  let results: Vec<Result<(), String>> = jobs
    .par_iter()
    .map(|job| {
      let samples = render_job(conf, seed, job);
      engrave::samples(conf.sample_rate, &samples, &describe(job, &conf.out_dir).path())
    })
    .collect();

  let summary = tally(results, seed);
  println!("{} drum sounds generated across {} engines.", summary.written, CATALOG.len());
  Ok(summary)
}

/// Fold per-job outcomes into a summary. Failed writes are reported and
/// counted; they never take down the rest of the batch.
fn tally(results: Vec<Result<(), String>>, seed: u64) -> BatchSummary {
  let mut written = 0;
  let mut failed = 0;
  for result in results {
    match result {
      Ok(()) => written += 1,
      Err(msg) => {
        failed += 1;
        eprintln!("{}", msg);
      }
    }
  }
  BatchSummary { written, failed, seed }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tally_counts_failures_without_aborting() {
    let results = vec![
      Ok(()),
      Err(String::from("Failed to create drum_sounds/fm/drum_002_fm.wav: disk full")),
      Ok(()),
      Err(String::from("Failed to write drum_sounds/am/drum_001_am.wav: broken pipe")),
    ];
    let summary = tally(results, 7);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.seed, 7);
  }
}
