use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelSelection, ColorSpace};

/// Settings for one source-to-target matching run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Image whose colors are remapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Image whose channel distributions are imitated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub color_space: ColorSpace,
    /// Which of the three channels take part; the rest pass through.
    #[serde(default)]
    pub channels: ChannelSelection,
    /// Where to write the 256x3 mapping raster, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_mapping: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("matched.png")
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            output: default_output(),
            color_space: ColorSpace::default(),
            channels: ChannelSelection::default(),
            export_mapping: None,
        }
    }
}
