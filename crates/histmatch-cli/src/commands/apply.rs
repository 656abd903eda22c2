use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use histmatch_core::io::image_io::save_image;
use histmatch_core::pipeline::apply_exported_mapping;

use super::ColorSpaceArg;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image to remap
    pub file: PathBuf,

    /// Mapping table PNG written by `histmatch run --export-mapping`
    #[arg(long)]
    pub mapping: PathBuf,

    /// Color space the mapping was built in
    #[arg(long, value_enum, default_value = "rgb")]
    pub color_space: ColorSpaceArg,

    /// Output file path
    #[arg(short, long, default_value = "mapped.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let image = apply_exported_mapping(&args.file, &args.mapping, args.color_space.into())
        .with_context(|| {
            format!(
                "Failed to apply {} to {}",
                args.mapping.display(),
                args.file.display()
            )
        })?;

    println!("Remapped {}x{} image", image.width(), image.height());

    save_image(&image, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
