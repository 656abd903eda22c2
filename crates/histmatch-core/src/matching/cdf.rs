use crate::channel::ChannelArray;
use crate::consts::LEVEL_COUNT;
use crate::error::{HistMatchError, Result};

/// Empirical cumulative distribution over the 256 intensity levels.
///
/// Entry `k` is the fraction of samples with intensity <= `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cdf([f64; LEVEL_COUNT]);

impl Cdf {
    /// Wrap precomputed CDF values. No monotonicity check is made.
    pub fn from_values(values: [f64; LEVEL_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; LEVEL_COUNT] {
        &self.0
    }

    pub fn get(&self, level: u8) -> f64 {
        self.0[level as usize]
    }
}

/// Count the samples at each intensity level.
pub fn level_counts(channel: &ChannelArray) -> [u64; LEVEL_COUNT] {
    let mut counts = [0u64; LEVEL_COUNT];
    for &v in channel.iter() {
        counts[v as usize] += 1;
    }
    counts
}

/// Estimate the CDF of a channel.
///
/// Bins are density-normalised (count / total) and then summed in
/// increasing level order, so the last entry is 1.0 up to rounding.
/// An empty channel has no distribution and is rejected.
pub fn estimate_cdf(channel: &ChannelArray) -> Result<Cdf> {
    if channel.is_empty() {
        return Err(HistMatchError::InvalidInput(
            "cannot estimate a distribution over an empty channel".into(),
        ));
    }

    let total = channel.len() as f64;
    let counts = level_counts(channel);

    let mut values = [0.0f64; LEVEL_COUNT];
    let mut running = 0.0f64;
    for (level, &count) in counts.iter().enumerate() {
        running += count as f64 / total;
        values[level] = running;
    }

    Ok(Cdf(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_sample() {
        let data = ChannelArray::from_shape_vec((2, 3), vec![0, 0, 7, 255, 7, 7]).unwrap();
        let counts = level_counts(&data);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[7], 3);
        assert_eq!(counts[255], 1);
        assert_eq!(counts.iter().sum::<u64>(), 6);
    }

    #[test]
    fn empty_channel_is_rejected() {
        let data = ChannelArray::zeros((0, 5));
        assert!(matches!(
            estimate_cdf(&data),
            Err(HistMatchError::InvalidInput(_))
        ));
    }
}
