//! 8x8 DCT (Discrete Cosine Transform)
//!
//! Blocks are row-major: sample `f(x, y)` lives at `y * 8 + x` and
//! coefficient `F(u, v)` at `v * 8 + u`, so `u` is the horizontal and `v`
//! the vertical frequency.

use crate::blocks::Block;
use planecodec_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// An 8x8 block of DCT coefficients
pub type TransformedBlock = [f64; BLOCK_AREA];

lazy_static::lazy_static! {
    /// `COS_TABLE[u][x] = cos((2x + 1) * u * pi / 16)`
    static ref COS_TABLE: [[f64; BLOCK_SIZE]; BLOCK_SIZE] = {
        let mut table = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for u in 0..BLOCK_SIZE {
            for x in 0..BLOCK_SIZE {
                let angle = ((2 * x + 1) * u) as f64 * PI / 16.0;
                table[u][x] = angle.cos();
            }
        }
        table
    };

    /// `NORMALIZATION[u][v] = C(u) * C(v)` with `C(0) = 1/sqrt(2)`.
    /// The DC product is stored as exactly 0.5.
    static ref NORMALIZATION: [[f64; BLOCK_SIZE]; BLOCK_SIZE] = {
        let mut table = [[1.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for k in 1..BLOCK_SIZE {
            table[0][k] = FRAC_1_SQRT_2;
            table[k][0] = FRAC_1_SQRT_2;
        }
        table[0][0] = 0.5;
        table
    };
}

/// 8x8 DCT-II (forward transform)
///
/// `F(u,v) = 1/4 C(u) C(v) sum_{x,y} f(x,y) cos((2x+1)u pi/16) cos((2y+1)v pi/16)`
pub fn forward_block(block: &Block) -> TransformedBlock {
    let mut output = [0.0f64; BLOCK_AREA];

    for u in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for x in 0..BLOCK_SIZE {
                for y in 0..BLOCK_SIZE {
                    sum += block[y * BLOCK_SIZE + x] as f64 * COS_TABLE[u][x] * COS_TABLE[v][y];
                }
            }
            output[v * BLOCK_SIZE + u] = 0.25 * NORMALIZATION[u][v] * sum;
        }
    }

    output
}

/// 8x8 DCT-III (inverse transform)
///
/// Reconstructed samples are truncated toward zero, not rounded.
pub fn inverse_block(coeffs: &TransformedBlock) -> Block {
    let mut output = [0i32; BLOCK_AREA];

    for x in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for u in 0..BLOCK_SIZE {
                for v in 0..BLOCK_SIZE {
                    sum += NORMALIZATION[u][v]
                        * coeffs[v * BLOCK_SIZE + u]
                        * COS_TABLE[u][x]
                        * COS_TABLE[v][y];
                }
            }
            output[y * BLOCK_SIZE + x] = (0.25 * sum) as i32;
        }
    }

    output
}
