//! PNG output of reconstructed channels

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use planecodec::{channels_to_rgb, Channels, SweepFrame};
use std::path::{Path, PathBuf};

fn blit(canvas: &mut RgbImage, rgb: &[u8], width: u32, offset_x: u32) {
    for (i, pixel) in rgb.chunks_exact(3).enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        canvas.put_pixel(offset_x + x, y, Rgb([pixel[0], pixel[1], pixel[2]]));
    }
}

/// Compose the DCT reconstruction (left) and the wavelet reconstruction (right)
pub fn side_by_side(dct: &Channels, dwt: &Channels) -> RgbImage {
    let width = dct.width() as u32;
    let height = dct.height() as u32;

    let mut canvas = RgbImage::new(width * 2, height);
    blit(&mut canvas, &channels_to_rgb(dct), width, 0);
    blit(&mut canvas, &channels_to_rgb(dwt), width, width);
    canvas
}

/// Write one frame as `<dir>/frame_<step>.png` and return the path
pub fn render_frame(frame: &SweepFrame, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("frame_{:02}.png", frame.step));
    side_by_side(&frame.dct, &frame.dwt)
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!(
        "Wrote {} (m = {}, n = {})",
        path.display(),
        frame.dct_retention,
        frame.dwt_retention
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planecodec::Plane;

    fn flat(size: usize, y: i32) -> Channels {
        Channels::new(
            Plane::filled(size, size, y),
            Plane::new(size, size),
            Plane::new(size, size),
        )
        .unwrap()
    }

    #[test]
    fn test_side_by_side_layout() {
        let canvas = side_by_side(&flat(8, 0), &flat(8, 100));
        assert_eq!(canvas.dimensions(), (16, 8));
        assert_eq!(canvas.get_pixel(3, 3), &Rgb([0, 0, 0]));
        // 0.871 * 100, 0.221 * 100, 4.236 * 100 clamped
        assert_eq!(canvas.get_pixel(12, 3), &Rgb([87, 22, 255]));
    }
}
