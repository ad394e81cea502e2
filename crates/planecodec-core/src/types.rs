//! Codec configuration

use crate::consts::{BLOCK_AREA, BLOCK_SIZE, DEFAULT_PLANE_SIZE};
use crate::{PlaneError, PlaneResult};

/// Plane geometry shared by every codec stage
///
/// Planes are square with a power-of-two side of at least 8, so the side is
/// always a whole number of DCT blocks and halves cleanly at every wavelet
/// level down to a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    plane_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            plane_size: DEFAULT_PLANE_SIZE,
        }
    }
}

impl CodecConfig {
    pub fn new(plane_size: usize) -> PlaneResult<Self> {
        if plane_size < BLOCK_SIZE || !plane_size.is_power_of_two() {
            return Err(PlaneError::InvalidPlaneSize(plane_size));
        }
        Ok(Self { plane_size })
    }

    /// Width and height of a plane in samples
    pub fn plane_size(&self) -> usize {
        self.plane_size
    }

    /// Total number of samples (and wavelet coefficients) in a plane
    pub fn sample_count(&self) -> usize {
        self.plane_size * self.plane_size
    }

    pub fn blocks_per_side(&self) -> usize {
        self.plane_size / BLOCK_SIZE
    }

    pub fn block_count(&self) -> usize {
        self.blocks_per_side() * self.blocks_per_side()
    }

    /// Number of wavelet decomposition levels (log2 of the plane size)
    pub fn levels(&self) -> usize {
        self.plane_size.trailing_zeros() as usize
    }

    /// Largest accepted DCT retention parameter (coefficients kept per block)
    pub fn max_dct_retention(&self) -> usize {
        BLOCK_AREA
    }

    /// Largest accepted DWT retention parameter (coefficients kept per plane)
    pub fn max_dwt_retention(&self) -> usize {
        self.sample_count()
    }

    /// Wavelet coefficients that match one DCT coefficient per block
    ///
    /// A sweep step `j` keeps `j` coefficients per block under the DCT and
    /// `j * sweep_stride()` coefficients under the DWT, so both codecs keep
    /// the same total number of coefficients.
    pub fn sweep_stride(&self) -> usize {
        self.sample_count() / BLOCK_AREA
    }

    /// Reject planes that do not match the configured geometry
    pub fn check_dimensions(&self, width: usize, height: usize) -> PlaneResult<()> {
        if width != self.plane_size || height != self.plane_size {
            return Err(PlaneError::DimensionMismatch {
                expected_width: self.plane_size,
                expected_height: self.plane_size,
                width,
                height,
            });
        }
        Ok(())
    }

    pub fn check_dct_retention(&self, m: usize) -> PlaneResult<()> {
        if m > self.max_dct_retention() {
            return Err(PlaneError::InvalidRetentionParameter {
                codec: "DCT",
                value: m,
                max: self.max_dct_retention(),
            });
        }
        Ok(())
    }

    pub fn check_dwt_retention(&self, n: usize) -> PlaneResult<()> {
        if n > self.max_dwt_retention() {
            return Err(PlaneError::InvalidRetentionParameter {
                codec: "DWT",
                value: n,
                max: self.max_dwt_retention(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = CodecConfig::default();
        assert_eq!(config.plane_size(), 512);
        assert_eq!(config.block_count(), 4096);
        assert_eq!(config.levels(), 9);
        assert_eq!(config.max_dwt_retention(), 262144);
        assert_eq!(config.sweep_stride(), 4096);
    }

    #[test]
    fn test_small_geometry() {
        let config = CodecConfig::new(16).unwrap();
        assert_eq!(config.blocks_per_side(), 2);
        assert_eq!(config.block_count(), 4);
        assert_eq!(config.levels(), 4);
        assert_eq!(config.sweep_stride(), 4);
    }

    #[test]
    fn test_invalid_sizes() {
        for size in [0, 1, 4, 12, 24, 500] {
            assert!(matches!(
                CodecConfig::new(size),
                Err(PlaneError::InvalidPlaneSize(s)) if s == size
            ));
        }
    }

    #[test]
    fn test_retention_bounds() {
        let config = CodecConfig::default();
        assert!(config.check_dct_retention(0).is_ok());
        assert!(config.check_dct_retention(64).is_ok());
        assert!(config.check_dct_retention(65).is_err());
        assert!(config.check_dwt_retention(262144).is_ok());
        assert!(matches!(
            config.check_dwt_retention(262145),
            Err(PlaneError::InvalidRetentionParameter { codec: "DWT", .. })
        ));
    }

    #[test]
    fn test_check_dimensions() {
        let config = CodecConfig::new(8).unwrap();
        assert!(config.check_dimensions(8, 8).is_ok());
        assert!(matches!(
            config.check_dimensions(16, 8),
            Err(PlaneError::DimensionMismatch { width: 16, height: 8, .. })
        ));
    }
}
