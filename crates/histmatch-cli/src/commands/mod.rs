pub mod apply;
pub mod config;
pub mod inspect;
pub mod run;

use anyhow::{Context, Result};
use clap::ValueEnum;
use histmatch_core::channel::{ChannelSelection, ColorSpace};

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorSpaceArg {
    Rgb,
    Hsv,
}

impl From<ColorSpaceArg> for ColorSpace {
    fn from(arg: ColorSpaceArg) -> Self {
        match arg {
            ColorSpaceArg::Rgb => ColorSpace::Rgb,
            ColorSpaceArg::Hsv => ColorSpace::Hsv,
        }
    }
}

/// Parse a channel mask such as "1,0,1" or "true,false,true".
pub fn parse_mask(mask: &str) -> Result<ChannelSelection> {
    let flags: Vec<bool> = mask
        .split(',')
        .map(|s| match s.trim() {
            "1" | "true" | "on" => Ok(true),
            "0" | "false" | "off" => Ok(false),
            other => Err(anyhow::anyhow!("Invalid channel flag '{other}'")),
        })
        .collect::<Result<_>>()
        .context("Invalid mask format (expected e.g. '1,1,0')")?;
    Ok(ChannelSelection::from_slice(&flags)?)
}
