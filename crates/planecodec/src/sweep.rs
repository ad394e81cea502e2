//! Quality sweep
//!
//! Runs both codecs over the same input at increasing budgets. Step `j`
//! keeps `j` coefficients per 8x8 block under the DCT and
//! `j * sweep_stride` coefficients under the wavelet, so at every step both
//! codecs keep the same total number of coefficients.

use crate::codec::Codec;
use crate::dct_codec::DctCodec;
use crate::dwt_codec::DwtCodec;
use planecodec_core::consts::SWEEP_STEPS;
use planecodec_core::{Channels, CodecConfig, PlaneError, PlaneResult};

/// Range of sweep steps to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOptions {
    /// First step (inclusive)
    pub first_step: usize,
    /// Last step (inclusive)
    pub last_step: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            first_step: 1,
            last_step: SWEEP_STEPS,
        }
    }
}

impl SweepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_step(mut self, step: usize) -> Self {
        self.first_step = step;
        self
    }

    pub fn last_step(mut self, step: usize) -> Self {
        self.last_step = step;
        self
    }

    /// Reject empty or out-of-range step ranges
    pub fn validate(&self) -> PlaneResult<()> {
        if self.first_step > self.last_step || self.last_step > SWEEP_STEPS {
            return Err(PlaneError::InvalidParameter(format!(
                "sweep steps {}..={} (allowed within 0..={})",
                self.first_step, self.last_step, SWEEP_STEPS
            )));
        }
        Ok(())
    }
}

/// Reconstructions of one image under both codecs at one budget
#[derive(Debug, Clone)]
pub struct SweepFrame {
    pub step: usize,
    /// Coefficients kept per block (`m`)
    pub dct_retention: usize,
    /// Coefficients kept per plane (`n`)
    pub dwt_retention: usize,
    pub dct: Channels,
    pub dwt: Channels,
}

fn run_frame(
    input: &Channels,
    dct: &DctCodec,
    dwt: &DwtCodec,
    step: usize,
    dct_retention: usize,
    dwt_retention: usize,
) -> PlaneResult<SweepFrame> {
    let (dct_channels, dwt_channels) = rayon::join(
        || dct.reconstruct_channels(input, dct_retention),
        || dwt.reconstruct_channels(input, dwt_retention),
    );

    Ok(SweepFrame {
        step,
        dct_retention,
        dwt_retention,
        dct: dct_channels?,
        dwt: dwt_channels?,
    })
}

fn check_input(input: &Channels, config: &CodecConfig) -> PlaneResult<()> {
    for plane in input.planes() {
        config.check_dimensions(plane.width(), plane.height())?;
    }
    Ok(())
}

/// Run both codecs once for a wavelet budget `n`
///
/// The DCT budget is derived as `m = n / sweep_stride`.
pub fn compare(input: &Channels, config: CodecConfig, n: usize) -> PlaneResult<SweepFrame> {
    check_input(input, &config)?;
    config.check_dwt_retention(n)?;

    let m = n / config.sweep_stride();
    log::info!("Comparing codecs at m = {}, n = {}", m, n);
    run_frame(input, &DctCodec::new(config), &DwtCodec::new(config), m, m, n)
}

/// Lazy sequence of [`SweepFrame`]s over increasing budgets
///
/// Each step is computed only when requested and depends on nothing but
/// the shared input, so frames are independent of one another. The
/// sequence cannot be restarted; build a new sweep to run it again.
pub struct QualitySweep<'a> {
    input: &'a Channels,
    config: CodecConfig,
    dct: DctCodec,
    dwt: DwtCodec,
    next_step: usize,
    last_step: usize,
}

impl<'a> QualitySweep<'a> {
    pub fn new(
        input: &'a Channels,
        config: CodecConfig,
        options: SweepOptions,
    ) -> PlaneResult<Self> {
        options.validate()?;
        check_input(input, &config)?;

        Ok(Self {
            input,
            config,
            dct: DctCodec::new(config),
            dwt: DwtCodec::new(config),
            next_step: options.first_step,
            last_step: options.last_step,
        })
    }
}

impl Iterator for QualitySweep<'_> {
    type Item = PlaneResult<SweepFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_step > self.last_step {
            return None;
        }

        let step = self.next_step;
        self.next_step += 1;

        let n = step * self.config.sweep_stride();
        log::info!("Sweep step {}/{}", step, self.last_step);
        Some(run_frame(self.input, &self.dct, &self.dwt, step, step, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_step + 1).saturating_sub(self.next_step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for QualitySweep<'_> {}
