//! RGB <-> YCbCr conversion
//!
//! NOTE: The forward and inverse matrices are not exact inverses of each
//! other. They are kept as a matched pair because changing either one
//! changes the rendered colors of every decoded image.

use planecodec_core::{Channels, Plane, PlaneError, PlaneResult};

/// RGB to YCbCr rows (Y, Cb, Cr)
const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.159, -0.332, 0.050],
    [0.500, -0.419, -0.081],
];

/// YCbCr to RGB rows (R, G, B)
const YCBCR_TO_RGB: [[f64; 3]; 3] = [
    [0.871, -0.233, 1.405],
    [0.221, -1.752, -0.689],
    [4.236, 7.626, -0.108],
];

#[inline]
fn apply(matrix: &[[f64; 3]; 3], a: f64, b: f64, c: f64) -> [f64; 3] {
    [
        matrix[0][0] * a + matrix[0][1] * b + matrix[0][2] * c,
        matrix[1][0] * a + matrix[1][1] * b + matrix[1][2] * c,
        matrix[2][0] * a + matrix[2][1] * b + matrix[2][2] * c,
    ]
}

/// Convert one RGB pixel to integer (Y, Cb, Cr), truncating toward zero
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (i32, i32, i32) {
    let [y, cb, cr] = apply(&RGB_TO_YCBCR, r as f64, g as f64, b as f64);
    (y as i32, cb as i32, cr as i32)
}

/// Convert one (Y, Cb, Cr) sample back to RGB
///
/// Each component is truncated toward zero and then clamped to 0..=255,
/// which is where out-of-range codec output is absorbed.
pub fn ycbcr_to_rgb(y: i32, cb: i32, cr: i32) -> (u8, u8, u8) {
    let [r, g, b] = apply(&YCBCR_TO_RGB, y as f64, cb as f64, cr as f64);
    let clamp = |v: f64| (v as i32).clamp(0, 255) as u8;
    (clamp(r), clamp(g), clamp(b))
}

/// Convert planar RGB (all R samples, then all G, then all B) to channels
pub fn planar_rgb_to_channels(rgb: &[u8], width: usize, height: usize) -> PlaneResult<Channels> {
    let pixel_count = width * height;
    if rgb.len() < pixel_count * 3 {
        return Err(PlaneError::SampleCountMismatch {
            expected: pixel_count * 3,
            actual: rgb.len(),
        });
    }

    let (r_plane, rest) = rgb.split_at(pixel_count);
    let (g_plane, b_plane) = rest.split_at(pixel_count);

    let mut y = Vec::with_capacity(pixel_count);
    let mut cb = Vec::with_capacity(pixel_count);
    let mut cr = Vec::with_capacity(pixel_count);
    for i in 0..pixel_count {
        let (py, pcb, pcr) = rgb_to_ycbcr(r_plane[i], g_plane[i], b_plane[i]);
        y.push(py);
        cb.push(pcb);
        cr.push(pcr);
    }

    Channels::new(
        Plane::from_samples(width, height, y)?,
        Plane::from_samples(width, height, cb)?,
        Plane::from_samples(width, height, cr)?,
    )
}

/// Convert channels to interleaved 8-bit RGB
pub fn channels_to_rgb(channels: &Channels) -> Vec<u8> {
    let samples = channels
        .y
        .samples()
        .iter()
        .zip(channels.cb.samples())
        .zip(channels.cr.samples());

    let mut rgb = Vec::with_capacity(channels.y.samples().len() * 3);
    for ((&y, &cb), &cr) in samples {
        let (r, g, b) = ycbcr_to_rgb(y, cb, cr);
        rgb.extend_from_slice(&[r, g, b]);
    }
    rgb
}
