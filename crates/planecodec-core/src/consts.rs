//! Constants used throughout the codecs

/// Width and height of an 8x8 DCT block
pub const BLOCK_SIZE: usize = 8;

/// Number of coefficients in a block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Default plane width and height
pub const DEFAULT_PLANE_SIZE: usize = 512;

/// Number of positions in the wavelet scan that are always kept (the 2x2 LL corner)
pub const WAVELET_CORNER_POSITIONS: usize = 4;

/// Number of steps in a full quality sweep
pub const SWEEP_STEPS: usize = BLOCK_AREA;
