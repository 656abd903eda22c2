use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::channel::{ChannelArray, ChannelImage, ColorSpace};
use crate::consts::CHANNEL_COUNT;

use super::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};

/// Split an 8-bit RGB raster into separate R, G, B channels.
pub fn split_rgb(img: &RgbImage) -> ChannelImage {
    let (w, h) = img.dimensions();
    let (w, h) = (w as usize, h as usize);

    let mut red = ChannelArray::zeros((h, w));
    let mut green = ChannelArray::zeros((h, w));
    let mut blue = ChannelArray::zeros((h, w));

    for (col, row, pixel) in img.enumerate_pixels() {
        let (row, col) = (row as usize, col as usize);
        let Rgb([r, g, b]) = *pixel;
        red[[row, col]] = r;
        green[[row, col]] = g;
        blue[[row, col]] = b;
    }

    ChannelImage {
        channels: [red, green, blue],
        color_space: ColorSpace::Rgb,
    }
}

/// Merge three RGB channels back into an interleaved raster.
///
/// HSV images are converted to RGB first.
pub fn merge_rgb(image: &ChannelImage) -> RgbImage {
    let rgb = to_color_space(image, ColorSpace::Rgb);
    let [red, green, blue] = &rgb.channels;
    let (h, w) = red.dim();

    RgbImage::from_fn(w as u32, h as u32, |col, row| {
        let idx = [row as usize, col as usize];
        Rgb([red[idx], green[idx], blue[idx]])
    })
}

/// Re-express an image's channels in another color space.
pub fn to_color_space(image: &ChannelImage, target: ColorSpace) -> ChannelImage {
    let channels = match (image.color_space, target) {
        (ColorSpace::Rgb, ColorSpace::Hsv) => map_pixels(&image.channels, |r, g, b| {
            let Hsv { h, s, v } = rgb_to_hsv(r, g, b);
            (h, s, v)
        }),
        (ColorSpace::Hsv, ColorSpace::Rgb) => {
            map_pixels(&image.channels, |h, s, v| hsv_to_rgb(Hsv { h, s, v }))
        }
        _ => image.channels.clone(),
    };

    ChannelImage {
        channels,
        color_space: target,
    }
}

/// Apply a per-pixel triple transform across three equally sized channels.
fn map_pixels<F>(channels: &[ChannelArray; CHANNEL_COUNT], convert: F) -> [ChannelArray; CHANNEL_COUNT]
where
    F: Fn(u8, u8, u8) -> (u8, u8, u8),
{
    let (h, w) = channels[0].dim();
    let mut a = Array2::<u8>::zeros((h, w));
    let mut b = Array2::<u8>::zeros((h, w));
    let mut c = Array2::<u8>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let (x, y, z) = convert(
                channels[0][[row, col]],
                channels[1][[row, col]],
                channels[2][[row, col]],
            );
            a[[row, col]] = x;
            b[[row, col]] = y;
            c[[row, col]] = z;
        }
    }

    [a, b, c]
}
