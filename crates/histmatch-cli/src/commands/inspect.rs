use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use histmatch_core::io::mapping_io::load_mapping;

use super::ColorSpaceArg;
use crate::summary::print_mapping_summary;

#[derive(Args)]
pub struct InspectArgs {
    /// Mapping table PNG
    pub file: PathBuf,

    /// Color space used to label the rows
    #[arg(long, value_enum, default_value = "rgb")]
    pub color_space: ColorSpaceArg,
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let mappings = load_mapping(&args.file)
        .with_context(|| format!("Failed to load mapping {}", args.file.display()))?;

    println!("File:  {}", args.file.display());
    print_mapping_summary(args.color_space.into(), &mappings);

    Ok(())
}
