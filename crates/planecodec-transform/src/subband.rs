//! Subband scan for wavelet coefficient retention
//!
//! The scan starts with the 2x2 corner of the pyramid, produced as four
//! quadrants of size 1 (LL, LH, HL, HH). It then visits the LH, HL and HH
//! quadrants of size 2, 4, ... up to half the plane, each one row-major.
//! Every grid position is visited exactly once.

use crate::dwt::WaveletPyramid;
use planecodec_core::consts::WAVELET_CORNER_POSITIONS;
use planecodec_core::{CodecConfig, PlaneResult};

/// Quadrant of one decomposition level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subband {
    /// Approximation (only the single top-left coefficient)
    LL,
    /// Top-right quadrant
    LH,
    /// Bottom-left quadrant
    HL,
    /// Bottom-right quadrant
    HH,
}

impl Subband {
    /// Top-left corner `(x, y)` of this quadrant at quadrant size `s`
    pub fn origin(self, s: usize) -> (usize, usize) {
        match self {
            Subband::LL => (0, 0),
            Subband::LH => (s, 0),
            Subband::HL => (0, s),
            Subband::HH => (s, s),
        }
    }

    /// The quadrant that follows this one, and whether the size doubles
    fn successor(self) -> (Subband, bool) {
        match self {
            Subband::LL => (Subband::LH, false),
            Subband::LH => (Subband::HL, false),
            Subband::HL => (Subband::HH, false),
            Subband::HH => (Subband::LH, true),
        }
    }
}

/// One visited position of the subband scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPosition {
    pub subband: Subband,
    pub quadrant_size: usize,
    pub x: usize,
    pub y: usize,
}

/// Lazy producer of the subband scan over a `plane_size`x`plane_size` grid
#[derive(Debug, Clone)]
pub struct SubbandScan {
    plane_size: usize,
    subband: Subband,
    quadrant_size: usize,
    index: usize,
}

impl SubbandScan {
    pub fn new(plane_size: usize) -> Self {
        Self {
            plane_size,
            subband: Subband::LL,
            quadrant_size: 1,
            index: 0,
        }
    }
}

impl Iterator for SubbandScan {
    type Item = ScanPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.quadrant_size;
        if s >= self.plane_size {
            return None;
        }

        let (origin_x, origin_y) = self.subband.origin(s);
        let position = ScanPosition {
            subband: self.subband,
            quadrant_size: s,
            x: origin_x + self.index % s,
            y: origin_y + self.index / s,
        };

        self.index += 1;
        if self.index == s * s {
            let (next, doubles) = self.subband.successor();
            self.subband = next;
            self.index = 0;
            if doubles {
                self.quadrant_size *= 2;
            }
        }

        Some(position)
    }
}

/// Zero every pyramid coefficient from the `n`-th scan position on
///
/// The first four positions (the 2x2 corner) are always kept, so any
/// `n < 4` behaves like `n == 4`.
pub fn retain_subbands(
    pyramid: &mut WaveletPyramid,
    n: usize,
    config: &CodecConfig,
) -> PlaneResult<()> {
    config.check_dwt_retention(n)?;
    config.check_dimensions(pyramid.size(), pyramid.size())?;

    let kept = n.max(WAVELET_CORNER_POSITIONS);
    for position in SubbandScan::new(pyramid.size()).skip(kept) {
        pyramid.set(position.x, position.y, 0.0);
    }

    log::trace!(
        "Kept {} of {} wavelet coefficients",
        kept,
        config.max_dwt_retention()
    );
    Ok(())
}
