//! Byte-scaled HSV conversion.
//!
//! H, S and V each occupy the full [0, 255] range: hue is the fraction of
//! the colour wheel times 255, saturation is chroma over max times 255, and
//! value is the largest RGB component. Grey pixels carry H = S = 0.

/// One pixel in byte-scaled HSV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one RGB pixel to byte-scaled HSV. Hue and saturation truncate.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return Hsv { h: 0, s: 0, v: max };
    }

    // Component ratios are single precision; the sextant offset and wrap
    // run in double and are rounded back to single before scaling.
    let chroma = (max - min) as f32;
    let s = chroma / max as f32;
    let rc = (max - r) as f32 / chroma;
    let gc = (max - g) as f32 / chroma;
    let bc = (max - b) as f32 / chroma;

    let h = if r == max {
        f64::from(bc - gc)
    } else if g == max {
        2.0 + f64::from(rc) - f64::from(bc)
    } else {
        4.0 + f64::from(gc) - f64::from(rc)
    };
    // Shift by a full turn so negative sextants wrap into [0, 1).
    let h = ((h / 6.0 + 1.0) % 1.0) as f32;

    Hsv {
        h: to_byte(f64::from(h) * 255.0),
        s: to_byte(f64::from(s) * 255.0),
        v: max,
    }
}

/// Convert one byte-scaled HSV pixel back to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    if s == 0 {
        return (v, v, v);
    }

    let scaled = h as f64 * 6.0 / 255.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let fs = s as f64 / 255.0;
    let vf = v as f64;

    let p = to_byte((vf * (1.0 - fs)).round());
    let q = to_byte((vf * (1.0 - fs * f)).round());
    let t = to_byte((vf * (1.0 - fs * (1.0 - f))).round());

    match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[inline]
fn to_byte(x: f64) -> u8 {
    x.clamp(0.0, 255.0) as u8
}
