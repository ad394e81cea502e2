//! Wavelet codec
//!
//! The whole plane is decomposed in place, every coefficient from the
//! `n`-th subband scan position on is zeroed, and the pyramid is inverse
//! transformed in place.

use crate::codec::Codec;
use planecodec_core::{CodecConfig, Plane, PlaneResult};
use planecodec_transform::{retain_subbands, WaveletPyramid};

/// Recursive two-tap wavelet codec
#[derive(Debug, Clone, Copy, Default)]
pub struct DwtCodec {
    config: CodecConfig,
}

impl DwtCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Decompose a plane over all levels
    pub fn forward(&self, plane: &Plane) -> PlaneResult<WaveletPyramid> {
        WaveletPyramid::forward(plane, &self.config)
    }

    /// Keep the first `n` coefficients in subband scan order (at least the 2x2 corner)
    pub fn retain(&self, pyramid: &mut WaveletPyramid, n: usize) -> PlaneResult<()> {
        retain_subbands(pyramid, n, &self.config)
    }

    /// Undo the decomposition and truncate to integer samples
    pub fn inverse(&self, pyramid: WaveletPyramid) -> PlaneResult<Plane> {
        self.config.check_dimensions(pyramid.size(), pyramid.size())?;
        pyramid.inverse()
    }
}

impl Codec for DwtCodec {
    fn name(&self) -> &'static str {
        "DWT"
    }

    fn max_retention(&self) -> usize {
        self.config.max_dwt_retention()
    }

    fn reconstruct(&self, plane: &Plane, n: usize) -> PlaneResult<Plane> {
        self.config.check_dwt_retention(n)?;

        let mut pyramid = self.forward(plane)?;
        self.retain(&mut pyramid, n)?;
        let decoded = self.inverse(pyramid)?;

        log::debug!("DWT reconstruction with n = {}", n);
        Ok(decoded)
    }
}
