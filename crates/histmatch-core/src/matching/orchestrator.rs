use rayon::prelude::*;
use tracing::{debug, info};

use crate::channel::{ChannelArray, ChannelSelection};
use crate::consts::{CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{HistMatchError, Result};

use super::apply::apply_mapping;
use super::cdf::estimate_cdf;
use super::mapping::{build_mapping, MappingTable};

/// Matched channels and the tables that produced them, in channel order.
#[derive(Clone, Debug)]
pub struct MatchResult {
    pub channels: [ChannelArray; CHANNEL_COUNT],
    pub mappings: [MappingTable; CHANNEL_COUNT],
}

/// Match each selected source channel to the same-index target channel.
///
/// Unselected channels are copied through unchanged and report the identity
/// table. Inputs are validated up front, so an error means nothing was
/// computed.
pub fn match_channels(
    source: &[ChannelArray; CHANNEL_COUNT],
    target: &[ChannelArray; CHANNEL_COUNT],
    selection: &ChannelSelection,
) -> Result<MatchResult> {
    validate_inputs(source, target, selection)?;

    let resolve = |index: usize| resolve_channel(index, source, target, selection);
    let resolved: Vec<(ChannelArray, MappingTable)> = if source[0].len() >= PARALLEL_PIXEL_THRESHOLD
    {
        (0..CHANNEL_COUNT)
            .into_par_iter()
            .map(resolve)
            .collect::<Result<_>>()?
    } else {
        (0..CHANNEL_COUNT).map(resolve).collect::<Result<_>>()?
    };

    let mut mappings = [MappingTable::identity(); CHANNEL_COUNT];
    let mut channels = Vec::with_capacity(CHANNEL_COUNT);
    for (index, (channel, mapping)) in resolved.into_iter().enumerate() {
        channels.push(channel);
        mappings[index] = mapping;
    }
    let channels: [ChannelArray; CHANNEL_COUNT] = channels
        .try_into()
        .map_err(|_| HistMatchError::InvalidInput("channel count changed during matching".into()))?;

    info!(
        selected = selection.selected_count(),
        height = channels[0].nrows(),
        width = channels[0].ncols(),
        "Histogram matching complete"
    );

    Ok(MatchResult { channels, mappings })
}

fn validate_inputs(
    source: &[ChannelArray; CHANNEL_COUNT],
    target: &[ChannelArray; CHANNEL_COUNT],
    selection: &ChannelSelection,
) -> Result<()> {
    for index in 0..CHANNEL_COUNT {
        if !selection.is_selected(index) {
            continue;
        }
        if source[index].is_empty() {
            return Err(HistMatchError::InvalidInput(format!(
                "source channel {index} is empty"
            )));
        }
        if target[index].is_empty() {
            return Err(HistMatchError::InvalidInput(format!(
                "target channel {index} is empty"
            )));
        }
    }
    Ok(())
}

fn resolve_channel(
    index: usize,
    source: &[ChannelArray; CHANNEL_COUNT],
    target: &[ChannelArray; CHANNEL_COUNT],
    selection: &ChannelSelection,
) -> Result<(ChannelArray, MappingTable)> {
    if !selection.is_selected(index) {
        debug!(channel = index, "Channel not selected, passing through");
        return Ok((source[index].clone(), MappingTable::identity()));
    }

    let source_cdf = estimate_cdf(&source[index])?;
    let target_cdf = estimate_cdf(&target[index])?;
    let mapping = build_mapping(&source_cdf, &target_cdf);
    let (lo, hi) = mapping.output_range();
    debug!(
        channel = index,
        monotonic = mapping.is_monotonic(),
        out_min = lo,
        out_max = hi,
        "Built channel mapping"
    );

    Ok((apply_mapping(&source[index], &mapping), mapping))
}
