#![allow(dead_code)]

use std::path::Path;

use image::{Rgb, RgbImage};
use ndarray::Array2;

use histmatch_core::channel::ChannelArray;

/// Channel filled with a single intensity.
pub fn constant_channel(h: usize, w: usize, level: u8) -> ChannelArray {
    Array2::from_elem((h, w), level)
}

/// Channel whose samples sweep through every level in row-major order.
pub fn ramp_channel(h: usize, w: usize) -> ChannelArray {
    Array2::from_shape_fn((h, w), |(row, col)| ((row * w + col) % 256) as u8)
}

/// Three copies of one channel.
pub fn triple(channel: &ChannelArray) -> [ChannelArray; 3] {
    [channel.clone(), channel.clone(), channel.clone()]
}

/// Write a solid-color RGB PNG.
pub fn write_solid_png(path: &Path, w: u32, h: u32, rgb: [u8; 3]) {
    RgbImage::from_pixel(w, h, Rgb(rgb))
        .save(path)
        .expect("write test PNG");
}

/// Write an RGB PNG whose channels are independent gradients.
pub fn write_gradient_png(path: &Path, w: u32, h: u32) {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            (x * 255 / w.max(1)) as u8,
            (y * 255 / h.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
    .save(path)
    .expect("write test PNG");
}
