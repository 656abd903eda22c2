use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{CHANNEL_COUNT, MAX_LEVEL};
use crate::error::{HistMatchError, Result};

/// A single 8-bit intensity channel.
/// Row-major, shape = (height, width).
pub type ChannelArray = Array2<u8>;

/// Channel semantics of a three-channel image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsv,
}

impl ColorSpace {
    /// Short labels for the three channels, in channel order.
    pub fn channel_labels(&self) -> [&'static str; CHANNEL_COUNT] {
        match self {
            Self::Rgb => ["R", "G", "B"],
            Self::Hsv => ["H", "S", "V"],
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Hsv => write!(f, "HSV"),
        }
    }
}

/// Per-channel participation mask.
///
/// A selected channel is matched against the target; an unselected one
/// passes through with the identity mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelSelection([bool; CHANNEL_COUNT]);

impl Default for ChannelSelection {
    fn default() -> Self {
        Self([true; CHANNEL_COUNT])
    }
}

impl ChannelSelection {
    pub fn new(mask: [bool; CHANNEL_COUNT]) -> Self {
        Self(mask)
    }

    /// Build a selection from a mask of unknown length.
    pub fn from_slice(mask: &[bool]) -> Result<Self> {
        let mask: [bool; CHANNEL_COUNT] = mask.try_into().map_err(|_| {
            HistMatchError::InvalidInput(format!(
                "channel selection has {} entries, expected {}",
                mask.len(),
                CHANNEL_COUNT
            ))
        })?;
        Ok(Self(mask))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn as_array(&self) -> [bool; CHANNEL_COUNT] {
        self.0
    }

    pub fn selected_count(&self) -> usize {
        self.0.iter().filter(|&&s| s).count()
    }
}

/// Three equally sized channels of one decoded image.
#[derive(Clone, Debug)]
pub struct ChannelImage {
    pub channels: [ChannelArray; CHANNEL_COUNT],
    pub color_space: ColorSpace,
}

impl ChannelImage {
    /// Bundle three channels, checking that they share one shape.
    pub fn new(channels: [ChannelArray; CHANNEL_COUNT], color_space: ColorSpace) -> Result<Self> {
        let (height, width) = channels[0].dim();
        for (channel, data) in channels.iter().enumerate().skip(1) {
            let (found_height, found_width) = data.dim();
            if (found_height, found_width) != (height, width) {
                return Err(HistMatchError::DimensionMismatch {
                    channel,
                    height,
                    width,
                    found_height,
                    found_width,
                });
            }
        }
        Ok(Self {
            channels,
            color_space,
        })
    }

    /// Bundle three channels of raw integer samples, such as those produced
    /// by a decoder with a wider sample type. Out-of-range values are
    /// clamped to [0, 255] by [`clamp_samples`].
    pub fn from_samples(
        raw: &[Array2<i32>; CHANNEL_COUNT],
        color_space: ColorSpace,
    ) -> Result<Self> {
        let [a, b, c] = raw;
        Self::new(
            [clamp_samples(a), clamp_samples(b), clamp_samples(c)],
            color_space,
        )
    }

    pub fn width(&self) -> usize {
        self.channels[0].ncols()
    }

    pub fn height(&self) -> usize {
        self.channels[0].nrows()
    }
}

/// Convert raw integer samples into a channel, clamping to [0, 255].
///
/// Decoders occasionally overshoot the 8-bit range by a level or two; those
/// samples are pinned to the nearest bound rather than rejected.
pub fn clamp_samples(raw: &Array2<i32>) -> ChannelArray {
    let mut clamped = 0usize;
    let data = raw.mapv(|v| {
        if !(0..=MAX_LEVEL as i32).contains(&v) {
            clamped += 1;
        }
        v.clamp(0, MAX_LEVEL as i32) as u8
    });
    if clamped > 0 {
        warn!(clamped, total = raw.len(), "Clamped out-of-range samples");
    }
    data
}
