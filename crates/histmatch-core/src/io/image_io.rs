use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::channel::{ChannelImage, ColorSpace};
use crate::color::process::{merge_rgb, split_rgb, to_color_space};
use crate::error::Result;

/// Load an image file as three 8-bit channels in the requested color space.
///
/// Any format the `image` crate decodes is accepted; alpha is dropped and
/// higher bit depths are reduced to 8 bits.
pub fn load_channels(path: &Path, color_space: ColorSpace) -> Result<ChannelImage> {
    let img = image::open(path)?.to_rgb8();
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    let rgb = split_rgb(&img);
    Ok(to_color_space(&rgb, color_space))
}

/// Save channels as 8-bit RGB PNG.
pub fn save_png(image: &ChannelImage, path: &Path) -> Result<()> {
    merge_rgb(image).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save channels as 8-bit RGB TIFF.
pub fn save_tiff(image: &ChannelImage, path: &Path) -> Result<()> {
    merge_rgb(image).save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save channels, choosing format from file extension. PNG unless the
/// extension asks for TIFF.
pub fn save_image(image: &ChannelImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(image, path),
        _ => save_png(image, path),
    }
}
