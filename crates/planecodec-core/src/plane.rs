//! Sample planes

use crate::{PlaneError, PlaneResult};

/// A single channel of integer samples, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: usize,
    height: usize,
    samples: Vec<i32>,
}

impl Plane {
    /// Create a zero-filled plane
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![0; width * height],
        }
    }

    /// Wrap existing row-major samples
    pub fn from_samples(width: usize, height: usize, samples: Vec<i32>) -> PlaneResult<Self> {
        if samples.len() != width * height {
            return Err(PlaneError::SampleCountMismatch {
                expected: width * height,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a plane whose every sample is `value`
    pub fn filled(width: usize, height: usize, value: i32) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width * height],
        }
    }

    /// Create a plane from a per-position generator `f(x, y)`
    pub fn from_fn<F: FnMut(usize, usize) -> i32>(width: usize, height: usize, mut f: F) -> Self {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.samples[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        self.samples[y * self.width + x] = value;
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [i32] {
        &mut self.samples
    }

    /// Largest absolute per-sample difference to another plane of the same size
    pub fn max_abs_diff(&self, other: &Plane) -> PlaneResult<u32> {
        if self.width != other.width || self.height != other.height {
            return Err(PlaneError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            });
        }
        Ok(self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0))
    }
}

/// The luma and two chroma planes of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels {
    pub y: Plane,
    pub cb: Plane,
    pub cr: Plane,
}

impl Channels {
    pub fn new(y: Plane, cb: Plane, cr: Plane) -> PlaneResult<Self> {
        for plane in [&cb, &cr] {
            if plane.width() != y.width() || plane.height() != y.height() {
                return Err(PlaneError::DimensionMismatch {
                    expected_width: y.width(),
                    expected_height: y.height(),
                    width: plane.width(),
                    height: plane.height(),
                });
            }
        }
        Ok(Self { y, cb, cr })
    }

    pub fn width(&self) -> usize {
        self.y.width()
    }

    pub fn height(&self) -> usize {
        self.y.height()
    }

    pub fn planes(&self) -> [&Plane; 3] {
        [&self.y, &self.cb, &self.cr]
    }
}
