use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::channel::{ChannelImage, ColorSpace};
use crate::error::{HistMatchError, Result};
use crate::io::image_io::{load_channels, save_image};
use crate::io::mapping_io::{export_mapping, load_mapping};
use crate::matching::{apply_mapping, match_channels};

use super::config::MatchConfig;
use super::types::{MatchOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// Both inputs must be supplied before any decoding happens.
fn require_inputs(config: &MatchConfig) -> Result<(&Path, &Path)> {
    match (config.source.as_deref(), config.target.as_deref()) {
        (Some(source), Some(target)) => Ok((source, target)),
        (None, None) => Err(HistMatchError::MissingInput(
            "both source and target images are required".into(),
        )),
        (None, _) => Err(HistMatchError::MissingInput("no source image selected".into())),
        (_, None) => Err(HistMatchError::MissingInput("no target image selected".into())),
    }
}

/// Load, match, save, and optionally export the mapping, with progress.
pub fn run_match_reported(
    config: &MatchConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<MatchOutput> {
    let (source_path, target_path) = require_inputs(config)?;

    reporter.begin_stage(PipelineStage::Loading, Some(2));
    let source = load_channels(source_path, config.color_space)?;
    reporter.advance(1);
    let target = load_channels(target_path, config.color_space)?;
    reporter.advance(2);
    reporter.finish_stage();
    info!(
        source = %source_path.display(),
        source_width = source.width(),
        source_height = source.height(),
        target = %target_path.display(),
        target_width = target.width(),
        target_height = target.height(),
        color_space = %config.color_space,
        "Loaded images"
    );

    reporter.begin_stage(PipelineStage::Matching, None);
    let result = match_channels(&source.channels, &target.channels, &config.channels)?;
    reporter.finish_stage();

    let image = ChannelImage::new(result.channels, config.color_space)?;

    reporter.begin_stage(PipelineStage::Writing, None);
    save_image(&image, &config.output)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Matched image saved");

    if let Some(ref path) = config.export_mapping {
        reporter.begin_stage(PipelineStage::ExportingMapping, None);
        export_mapping(&result.mappings, path)?;
        reporter.finish_stage();
    }

    Ok(MatchOutput {
        image,
        mappings: result.mappings,
    })
}

/// Load, match, save, and optionally export the mapping.
pub fn run_match(config: &MatchConfig) -> Result<MatchOutput> {
    run_match_reported(config, Arc::new(NoOpReporter))
}

/// Remap an image through tables previously written by `export_mapping`.
///
/// `color_space` must be the one the tables were built in.
pub fn apply_exported_mapping(
    input: &Path,
    mapping_path: &Path,
    color_space: ColorSpace,
) -> Result<ChannelImage> {
    let mappings = load_mapping(mapping_path)?;
    let image = load_channels(input, color_space)?;

    let [a, b, c] = &image.channels;
    let channels = [
        apply_mapping(a, &mappings[0]),
        apply_mapping(b, &mappings[1]),
        apply_mapping(c, &mappings[2]),
    ];
    info!(
        input = %input.display(),
        mapping = %mapping_path.display(),
        identity_channels = mappings.iter().filter(|m| m.is_identity()).count(),
        "Applied exported mapping"
    );

    ChannelImage::new(channels, color_space)
}
