//! Diagonal (zigzag) scan for DCT coefficient retention
//!
//! Diagonals `u + v = d` are visited in increasing `d`, and every diagonal
//! is walked from its lowest row up and to the right: `(u=0, v=d)`,
//! `(u=1, v=d-1)`, and so on. Coefficients earlier in the scan are treated
//! as more important and survive truncation first.

use crate::dct::TransformedBlock;
use planecodec_core::consts::{BLOCK_AREA, BLOCK_SIZE};

/// Diagonal scan order as row-major block positions (`v * 8 + u`)
pub const ZIGZAG_8X8: [usize; BLOCK_AREA] = [
    0, 8, 1, 16, 9, 2, 24, 17, 10, 3, 32, 25, 18, 11, 4, 40, 33, 26, 19, 12, 5, 48, 41, 34, 27,
    20, 13, 6, 56, 49, 42, 35, 28, 21, 14, 7, 57, 50, 43, 36, 29, 22, 15, 58, 51, 44, 37, 30, 23,
    59, 52, 45, 38, 31, 60, 53, 46, 39, 61, 54, 47, 62, 55, 63,
];

const NUM_DIAGONALS: usize = 2 * BLOCK_SIZE - 1;

/// Lazy producer of the diagonal scan, yielding `(u, v)` pairs
#[derive(Debug, Clone, Default)]
pub struct ZigzagScan {
    diagonal: usize,
    step: usize,
}

impl ZigzagScan {
    pub fn new() -> Self {
        Self::default()
    }

    fn diagonal_start(diagonal: usize) -> (usize, usize) {
        if diagonal < BLOCK_SIZE {
            (0, diagonal)
        } else {
            (diagonal - (BLOCK_SIZE - 1), BLOCK_SIZE - 1)
        }
    }
}

impl Iterator for ZigzagScan {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.diagonal < NUM_DIAGONALS {
            let (start_u, start_v) = Self::diagonal_start(self.diagonal);
            let u = start_u + self.step;
            if u < BLOCK_SIZE && self.step <= start_v {
                self.step += 1;
                return Some((u, start_v - self.step + 1));
            }
            self.diagonal += 1;
            self.step = 0;
        }
        None
    }
}

/// Zero every coefficient after the first `m` in scan order
///
/// `m >= 64` keeps the whole block, `m == 0` clears it.
pub fn retain_zigzag(coeffs: &mut TransformedBlock, m: usize) {
    for &pos in ZIGZAG_8X8.iter().skip(m) {
        coeffs[pos] = 0.0;
    }
}
