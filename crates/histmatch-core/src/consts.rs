/// Number of discrete intensity levels per channel (8-bit samples).
pub const LEVEL_COUNT: usize = 256;

/// Largest representable intensity level.
pub const MAX_LEVEL: u8 = 255;

/// Number of channels in an image (R, G, B or H, S, V).
pub const CHANNEL_COUNT: usize = 3;

/// Minimum pixel count (h*w) per channel to fan channels out across Rayon workers.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Tolerance for floating-point drift in the last CDF entry.
pub const CDF_TOLERANCE: f64 = 1e-9;

/// Width of the exported mapping raster: one column per intensity level.
pub const MAPPING_RASTER_WIDTH: u32 = LEVEL_COUNT as u32;

/// Height of the exported mapping raster: one row per channel.
pub const MAPPING_RASTER_HEIGHT: u32 = CHANNEL_COUNT as u32;
