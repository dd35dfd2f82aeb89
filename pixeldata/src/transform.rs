//! Pixel sample layout and color space transformation functions.

/// Convert pixel data between interleaved (0) and planar (1)
/// sample arrangement.
///
/// `planar_configuration` is the arrangement of `data`;
/// the returned buffer has the other one.
/// Samples are moved as whole allocated units,
/// so 8 and 16 bit samples are supported alike.
/// Trailing bytes which do not form a whole pixel are kept as is.
pub fn toggle_planar_configuration(
    data: &[u8],
    bits_allocated: u16,
    samples_per_pixel: u16,
    planar_configuration: u16,
) -> Vec<u8> {
    let unit = usize::from(bits_allocated.saturating_add(7) / 8).max(1);
    let samples = usize::from(samples_per_pixel);
    if samples <= 1 {
        return data.to_vec();
    }
    let num_pixels = data.len() / (unit * samples);
    let mut out = data.to_vec();
    for n in 0..num_pixels {
        for s in 0..samples {
            let interleaved = (n * samples + s) * unit;
            let planar = (n + num_pixels * s) * unit;
            let (from, to) = if planar_configuration == 1 {
                (planar, interleaved)
            } else {
                (interleaved, planar)
            };
            out[to..to + unit].copy_from_slice(&data[from..from + unit]);
        }
    }
    out
}

const ALPHA: u32 = 0xFF00_0000;

#[inline]
fn argb(red: i32, green: i32, blue: i32) -> u32 {
    let channel = |c: i32| c.clamp(0, 255) as u32;
    ALPHA | channel(red) << 16 | channel(green) << 8 | channel(blue)
}

/// Convert a `YBR_FULL` value to an opaque ARGB value.
pub fn ybr_full_to_rgb(y: i32, cb: i32, cr: i32) -> u32 {
    let (y, cb, cr) = (f64::from(y), f64::from(cb - 128), f64::from(cr - 128));
    let red = (y + 1.4020 * cr + 0.5) as i32;
    let green = (y - 0.3441 * cb - 0.7141 * cr + 0.5) as i32;
    let blue = (y + 1.7720 * cb + 0.5) as i32;
    argb(red, green, blue)
}

/// Convert a `YBR_FULL_422` value to an opaque ARGB value.
///
/// Once the chroma samples are distributed to each pixel,
/// this is the same conversion as [`ybr_full_to_rgb`].
pub fn ybr_full_422_to_rgb(y: i32, cb: i32, cr: i32) -> u32 {
    ybr_full_to_rgb(y, cb, cr)
}

/// Convert a `YBR_PARTIAL_422` value to an opaque ARGB value.
pub fn ybr_partial_422_to_rgb(y: i32, cb: i32, cr: i32) -> u32 {
    let (y, cb, cr) = (
        1.1644 * f64::from(y - 16),
        f64::from(cb - 128),
        f64::from(cr - 128),
    );
    let red = (y + 1.5960 * cr + 0.5) as i32;
    let green = (y - 0.3917 * cb - 0.8130 * cr + 0.5) as i32;
    let blue = (y + 2.0173 * cb + 0.5) as i32;
    argb(red, green, blue)
}

/// Convert a `YBR_ICT` value to an opaque ARGB value.
///
/// Chroma components are centered at zero.
pub fn ybr_ict_to_rgb(y: i32, cb: i32, cr: i32) -> u32 {
    let (y, cb, cr) = (f64::from(y), f64::from(cb), f64::from(cr));
    let red = (y + 1.40200 * cr + 0.5) as i32;
    let green = (y - 0.34412 * cb - 0.71414 * cr + 0.5) as i32;
    let blue = (y + 1.77200 * cb + 0.5) as i32;
    argb(red, green, blue)
}

/// Convert a `YBR_RCT` value to an opaque ARGB value.
///
/// Chroma components are centered at zero.
pub fn ybr_rct_to_rgb(y: i32, cb: i32, cr: i32) -> u32 {
    let green = y - (cr + cb) / 4;
    let red = cr + green;
    let blue = cb + green;
    argb(red, green, blue)
}
