pub mod pipeline;
pub mod utils;

pub use pipeline::{render, run, run_default, BitString, Layout, PaddingRule, PipelineError, Report};
