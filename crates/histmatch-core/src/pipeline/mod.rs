pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{apply_exported_mapping, run_match, run_match_reported};
pub use types::{MatchOutput, PipelineStage, ProgressReporter};
