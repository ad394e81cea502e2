//! Transform operations for the plane codecs
//!
//! This crate implements block partitioning, the 8x8 DCT with its diagonal
//! coefficient scan, and the recursive two-tap wavelet transform with its
//! subband coefficient scan.

pub mod blocks;
pub mod dct;
pub mod dwt;
pub mod subband;
pub mod zigzag;

pub use blocks::*;
pub use dct::*;
pub use dwt::*;
pub use subband::*;
pub use zigzag::*;
