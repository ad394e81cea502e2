//! Block DCT codec
//!
//! A plane is split into 8x8 blocks, every block is transformed on its own,
//! each block keeps its first `m` coefficients in zigzag order, and the
//! blocks are inverse transformed and reassembled.

use crate::codec::Codec;
use planecodec_core::{CodecConfig, Plane, PlaneResult};
use planecodec_transform::{
    forward_block, inverse_block, partition, reassemble, retain_zigzag, Block, TransformedBlock,
};
use rayon::prelude::*;

/// 8x8 block DCT codec
#[derive(Debug, Clone, Copy, Default)]
pub struct DctCodec {
    config: CodecConfig,
}

impl DctCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Partition a plane and transform every block, in raster order
    pub fn forward(&self, plane: &Plane) -> PlaneResult<Vec<TransformedBlock>> {
        self.config.check_dimensions(plane.width(), plane.height())?;

        let blocks = partition(plane)?;
        Ok(blocks.par_iter().map(forward_block).collect())
    }

    /// Keep the first `m` zigzag coefficients of every block
    pub fn retain(&self, coeffs: &mut [TransformedBlock], m: usize) -> PlaneResult<()> {
        self.config.check_dct_retention(m)?;

        coeffs.par_iter_mut().for_each(|block| retain_zigzag(block, m));
        log::trace!("Kept {} coefficients in each of {} blocks", m, coeffs.len());
        Ok(())
    }

    /// Inverse transform every block and reassemble the plane
    pub fn inverse(&self, coeffs: &[TransformedBlock]) -> PlaneResult<Plane> {
        let size = self.config.plane_size();
        let blocks: Vec<Block> = coeffs.par_iter().map(inverse_block).collect();
        reassemble(&blocks, size, size)
    }
}

impl Codec for DctCodec {
    fn name(&self) -> &'static str {
        "DCT"
    }

    fn max_retention(&self) -> usize {
        self.config.max_dct_retention()
    }

    fn reconstruct(&self, plane: &Plane, m: usize) -> PlaneResult<Plane> {
        self.config.check_dct_retention(m)?;

        let mut coeffs = self.forward(plane)?;
        self.retain(&mut coeffs, m)?;
        let decoded = self.inverse(&coeffs)?;

        log::debug!("DCT reconstruction with m = {}", m);
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planecodec_core::PlaneError;

    fn codec(size: usize) -> DctCodec {
        DctCodec::new(CodecConfig::new(size).unwrap())
    }

    #[test]
    fn test_codec_identity() {
        let codec = codec(8);
        assert_eq!(codec.name(), "DCT");
        assert_eq!(codec.max_retention(), 64);
    }

    #[test]
    fn test_forward_block_count() {
        let coeffs = codec(32).forward(&Plane::new(32, 32)).unwrap();
        assert_eq!(coeffs.len(), 16);
    }

    #[test]
    fn test_forward_rejects_wrong_size() {
        let result = codec(16).forward(&Plane::new(8, 8));
        assert!(matches!(result, Err(PlaneError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_retain_rejects_out_of_range() {
        let codec = codec(8);
        let mut coeffs = vec![[1.0f64; 64]];
        assert!(matches!(
            codec.retain(&mut coeffs, 65),
            Err(PlaneError::InvalidRetentionParameter { codec: "DCT", value: 65, max: 64 })
        ));
        // Nothing was zeroed
        assert!(coeffs[0].iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_m_zero_clears_blocks() {
        let plane = Plane::from_fn(16, 16, |x, y| (x * y) as i32 + 5);
        let decoded = codec(16).reconstruct(&plane, 0).unwrap();
        assert!(decoded.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_m_one_is_block_average() {
        // Left block is constant 10, right block constant -20
        let plane = Plane::from_fn(16, 16, |x, _| if x < 8 { 10 } else { -20 });
        let decoded = codec(16).reconstruct(&plane, 1).unwrap();
        assert_eq!(decoded, plane);
    }

    #[test]
    fn test_inverse_rejects_wrong_block_count() {
        let coeffs = vec![[0.0f64; 64]; 3];
        assert!(codec(16).inverse(&coeffs).is_err());
    }
}
