//! # planecodec
//!
//! Two competing lossy codecs over integer image planes: a block DCT and a
//! recursive two-tap wavelet transform. Neither packs a bitstream; each
//! simulates a compression ratio by zeroing every coefficient past a
//! budget in a fixed traversal order and then decoding what is left.
//!
//! ## Quick Start
//!
//! ```
//! use planecodec::{Codec, CodecConfig, DctCodec, DwtCodec, Plane};
//!
//! let config = CodecConfig::new(16).unwrap();
//! let plane = Plane::from_fn(16, 16, |x, y| (x * 8 + y) as i32);
//!
//! // Keep 10 coefficients per 8x8 block
//! let dct = DctCodec::new(config).reconstruct(&plane, 10).unwrap();
//!
//! // Keep the same total number of coefficients under the wavelet
//! let dwt = DwtCodec::new(config).reconstruct(&plane, 10 * config.sweep_stride()).unwrap();
//!
//! assert_eq!(dct.width(), 16);
//! assert_eq!(dwt.height(), 16);
//! ```
//!
//! ## Quality sweep
//!
//! ```
//! use planecodec::{Channels, CodecConfig, Plane, QualitySweep, SweepOptions};
//!
//! let config = CodecConfig::new(8).unwrap();
//! let input = Channels::new(Plane::new(8, 8), Plane::new(8, 8), Plane::new(8, 8)).unwrap();
//!
//! let frames = QualitySweep::new(&input, config, SweepOptions::default()).unwrap();
//! assert_eq!(frames.count(), 64);
//! ```

pub mod codec;
pub mod dct_codec;
pub mod dwt_codec;
pub mod sweep;

pub use codec::Codec;
pub use dct_codec::DctCodec;
pub use dwt_codec::DwtCodec;
pub use sweep::{compare, QualitySweep, SweepFrame, SweepOptions};

// Re-export core types
pub use planecodec_core::{consts, Channels, CodecConfig, Plane, PlaneError, PlaneResult};

// Re-export transform building blocks
pub use planecodec_transform::{
    partition, reassemble, Block, Subband, SubbandScan, TransformedBlock, WaveletPyramid,
    ZigzagScan,
};

// Re-export color conversion
pub use planecodec_color::{channels_to_rgb, planar_rgb_to_channels};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
