//! Color space transformations for the plane codecs
//!
//! This crate converts between 8-bit RGB and the integer luma/chroma
//! planes the codecs operate on.

pub mod ycbcr;

pub use ycbcr::*;
