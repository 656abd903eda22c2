use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use histmatch_core::pipeline::config::MatchConfig;
use histmatch_core::pipeline::run_match_reported;
use tracing::debug;

use super::{parse_mask, ColorSpaceArg};
use crate::progress::BarReporter;
use crate::summary::{print_mapping_summary, print_match_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Source image whose colors are remapped
    pub source: Option<PathBuf>,

    /// Target image whose channel distributions are imitated
    pub target: Option<PathBuf>,

    /// Match config file (TOML); positional images override its paths
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Channel semantics used for matching
    #[arg(long, value_enum, default_value = "rgb")]
    pub color_space: ColorSpaceArg,

    /// Channels to match, e.g. "1,1,0" leaves the third channel untouched
    #[arg(long, default_value = "1,1,1")]
    pub mask: String,

    /// Write the 256x3 mapping table PNG to this path
    #[arg(long)]
    pub export_mapping: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "matched.png")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid match config")?
    } else {
        build_config_from_args(args)?
    };
    if args.source.is_some() {
        config.source = args.source.clone();
    }
    if args.target.is_some() {
        config.target = args.target.clone();
    }

    debug!(config = ?config, "Resolved match config");
    print_match_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_match_reported(&config, reporter.clone())?;
    reporter.finish();

    print_mapping_summary(config.color_space, &output.mappings);
    println!("Output saved to {}", config.output.display());
    if let Some(ref path) = config.export_mapping {
        println!("Mapping table saved to {}", path.display());
    }

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<MatchConfig> {
    Ok(MatchConfig {
        source: args.source.clone(),
        target: args.target.clone(),
        output: args.output.clone(),
        color_space: args.color_space.into(),
        channels: parse_mask(&args.mask)?,
        export_mapping: args.export_mapping.clone(),
    })
}
