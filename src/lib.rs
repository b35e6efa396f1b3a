#![allow(dead_code)]
#![allow(non_upper_case_globals)]
pub mod engines;
pub mod envelope;
pub mod files;
pub mod render;
pub mod sampler;
pub mod synth;
pub mod synth_config;
pub mod types;
