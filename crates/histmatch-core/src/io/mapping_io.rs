//! Mapping table raster export.
//!
//! The three tables are stacked row-wise into a 256x3 8-bit grayscale PNG:
//! row `i` holds channel `i`'s table, column `k` holds the output level for
//! input level `k`. PNG is lossless, so a reload reproduces every byte.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};
use tracing::info;

use crate::consts::{CHANNEL_COUNT, LEVEL_COUNT, MAPPING_RASTER_HEIGHT, MAPPING_RASTER_WIDTH};
use crate::error::{HistMatchError, Result};
use crate::matching::MappingTable;

/// Stack the tables into the exported raster layout.
pub fn mapping_raster(mappings: &[MappingTable; CHANNEL_COUNT]) -> Result<GrayImage> {
    let mut pixels = Vec::with_capacity(CHANNEL_COUNT * LEVEL_COUNT);
    for table in mappings {
        pixels.extend_from_slice(table.levels());
    }
    GrayImage::from_vec(MAPPING_RASTER_WIDTH, MAPPING_RASTER_HEIGHT, pixels)
        .ok_or_else(|| HistMatchError::InvalidInput("mapping raster buffer size mismatch".into()))
}

/// Write the three tables as a PNG.
pub fn export_mapping(mappings: &[MappingTable; CHANNEL_COUNT], path: &Path) -> Result<()> {
    mapping_raster(mappings)?.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "Mapping table exported");
    Ok(())
}

/// Read back tables written by [`export_mapping`].
///
/// Only 8-bit grayscale rasters are accepted; any other color type would
/// need a lossy conversion to recover levels.
pub fn load_mapping(path: &Path) -> Result<[MappingTable; CHANNEL_COUNT]> {
    let gray = match image::open(path)? {
        DynamicImage::ImageLuma8(gray) => gray,
        other => {
            return Err(HistMatchError::InvalidInput(format!(
                "mapping raster is {:?}, expected 8-bit grayscale",
                other.color()
            )))
        }
    };
    let (w, h) = gray.dimensions();
    if (w, h) != (MAPPING_RASTER_WIDTH, MAPPING_RASTER_HEIGHT) {
        return Err(HistMatchError::InvalidInput(format!(
            "mapping raster is {w}x{h}, expected {MAPPING_RASTER_WIDTH}x{MAPPING_RASTER_HEIGHT}"
        )));
    }
    let rows = gray.as_raw();

    let mut mappings = [MappingTable::identity(); CHANNEL_COUNT];
    for (channel, table) in mappings.iter_mut().enumerate() {
        let start = channel * LEVEL_COUNT;
        *table = MappingTable::from_slice(&rows[start..start + LEVEL_COUNT])?;
    }
    Ok(mappings)
}
