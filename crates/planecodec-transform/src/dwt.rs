//! Recursive two-tap wavelet transform
//!
//! The forward step splits a sequence into pairwise averages (low half)
//! and pairwise half-differences (high half). A full decomposition applies
//! it to the rows and then the columns of the top-left `size >> k` square
//! for every level `k`, so each level only reads and writes rows and
//! columns `0..(size >> k)` of the grid. The inverse walks the levels
//! backwards and undoes columns before rows.

use num_traits::Float;
use planecodec_core::{CodecConfig, Plane, PlaneResult};
use rayon::prelude::*;

#[inline]
fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

/// 1D forward step: `out[i] = (a + b) / 2`, `out[L/2 + i] = (a - b) / 2`
/// for each input pair `(a, b) = (in[2i], in[2i + 1])`
pub fn forward_step<T: Float>(input: &[T], output: &mut [T]) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len() / 2;
    let h = half::<T>();

    for i in 0..len {
        let a = input[2 * i];
        let b = input[2 * i + 1];
        output[i] = h * (a + b);
        output[len + i] = h * (a - b);
    }
}

/// 1D inverse step: `out[2i] = a[i] + b[i]`, `out[2i + 1] = a[i] - b[i]`
/// where `a` is the low half and `b` the high half of the input
pub fn inverse_step<T: Float>(input: &[T], output: &mut [T]) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len() / 2;

    for i in 0..len {
        let a = input[i];
        let b = input[len + i];
        output[2 * i] = a + b;
        output[2 * i + 1] = a - b;
    }
}

fn forward_in_place<T: Float>(data: &mut [T], scratch: &mut [T]) {
    let scratch = &mut scratch[..data.len()];
    forward_step(data, scratch);
    data.copy_from_slice(scratch);
}

fn inverse_in_place<T: Float>(data: &mut [T], scratch: &mut [T]) {
    let scratch = &mut scratch[..data.len()];
    inverse_step(data, scratch);
    data.copy_from_slice(scratch);
}

/// Apply a 1D step to the first `level_size` entries of the first
/// `level_size` rows. Rows are independent and run on the rayon pool.
fn transform_rows<T, F>(data: &mut [T], stride: usize, level_size: usize, step: F)
where
    T: Float + Send + Sync,
    F: Fn(&mut [T], &mut [T]) + Send + Sync,
{
    data.par_chunks_mut(stride)
        .take(level_size)
        .for_each_init(
            || vec![T::zero(); level_size],
            |scratch, row| step(&mut row[..level_size], scratch.as_mut_slice()),
        );
}

/// Apply a 1D step to the first `level_size` entries of the first
/// `level_size` columns.
fn transform_columns<T, F>(data: &mut [T], stride: usize, level_size: usize, step: F)
where
    T: Float,
    F: Fn(&mut [T], &mut [T]),
{
    let mut column = vec![T::zero(); level_size];
    let mut scratch = vec![T::zero(); level_size];

    for x in 0..level_size {
        for (y, value) in column.iter_mut().enumerate() {
            *value = data[y * stride + x];
        }
        step(&mut column[..], &mut scratch[..]);
        for (y, value) in column.iter().enumerate() {
            data[y * stride + x] = *value;
        }
    }
}

/// One forward level on the top-left `level_size` square: rows, then columns
pub fn forward_level<T: Float + Send + Sync>(data: &mut [T], stride: usize, level_size: usize) {
    transform_rows(data, stride, level_size, forward_in_place::<T>);
    transform_columns(data, stride, level_size, forward_in_place::<T>);
}

/// One inverse level on the top-left `level_size` square: columns, then rows
pub fn inverse_level<T: Float + Send + Sync>(data: &mut [T], stride: usize, level_size: usize) {
    transform_columns(data, stride, level_size, inverse_in_place::<T>);
    transform_rows(data, stride, level_size, inverse_in_place::<T>);
}

/// Full forward decomposition of a `size`x`size` grid
///
/// Levels run strictly in order: level `k + 1` reads the low band written
/// by level `k`.
pub fn forward_2d<T: Float + Send + Sync>(data: &mut [T], size: usize) {
    assert_eq!(data.len(), size * size);

    let mut level_size = size;
    let mut level = 0;
    while level_size >= 2 {
        log::trace!("Forward DWT level {} on {}x{}", level, level_size, level_size);
        forward_level(data, size, level_size);
        level_size /= 2;
        level += 1;
    }
}

/// Full inverse of [`forward_2d`]
pub fn inverse_2d<T: Float + Send + Sync>(data: &mut [T], size: usize) {
    assert_eq!(data.len(), size * size);

    let mut level_size = 2;
    while level_size <= size {
        log::trace!("Inverse DWT on {}x{}", level_size, level_size);
        inverse_level(data, size, level_size);
        level_size *= 2;
    }
}

/// Wavelet coefficients of one plane, nested subbands in a single grid
///
/// After a full decomposition the top-left sample holds the overall
/// average; the quadrants of the square `[0, 2s)` around it hold the detail
/// bands of quadrant size `s`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletPyramid {
    size: usize,
    coefficients: Vec<f64>,
}

impl WaveletPyramid {
    /// Decompose a plane
    pub fn forward(plane: &Plane, config: &CodecConfig) -> PlaneResult<Self> {
        config.check_dimensions(plane.width(), plane.height())?;

        let size = config.plane_size();
        let mut coefficients: Vec<f64> = plane.samples().iter().map(|&s| s as f64).collect();
        forward_2d(&mut coefficients, size);

        log::debug!(
            "Forward DWT: {} levels over {}x{} plane",
            config.levels(),
            size,
            size
        );
        Ok(Self { size, coefficients })
    }

    /// Reconstruct the plane, truncating every sample toward zero
    pub fn inverse(mut self) -> PlaneResult<Plane> {
        inverse_2d(&mut self.coefficients, self.size);

        let samples = self.coefficients.iter().map(|&c| c as i32).collect();
        log::debug!("Inverse DWT over {}x{} plane", self.size, self.size);
        Plane::from_samples(self.size, self.size, samples)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.coefficients[y * self.size + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.coefficients[y * self.size + x] = value;
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Side lengths of the squares processed by each forward level
    pub fn level_sizes(&self) -> impl Iterator<Item = usize> {
        let size = self.size;
        (0..size.trailing_zeros()).map(move |k| size >> k)
    }
}
