use crate::channel::ChannelImage;
use crate::consts::CHANNEL_COUNT;
use crate::matching::MappingTable;

/// Processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Matching,
    Writing,
    ExportingMapping,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading images"),
            Self::Matching => write!(f, "Matching histograms"),
            Self::Writing => write!(f, "Writing output"),
            Self::ExportingMapping => write!(f, "Exporting mapping"),
        }
    }
}

/// Result of a matching run.
#[derive(Clone, Debug)]
pub struct MatchOutput {
    /// Matched channels in the configured color space.
    pub image: ChannelImage,
    /// One table per channel; identity for unselected channels.
    pub mappings: [MappingTable; CHANNEL_COUNT],
}

/// Thread-safe progress reporting for a matching run.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// in this stage, if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items within the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_match` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
