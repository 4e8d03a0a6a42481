//! Square real-valued planes and the 2D Haar transform.
//!
//! A 1D step over the first `n` entries of a line turns each pair `(a, b)`
//! into `(a + b) / sqrt(2)` and `(a - b) / sqrt(2)`, writing all sums
//! before all differences. The 2D forward transform repeats row steps then
//! column steps over a shrinking active length `n = side, side/2, ..., 2`.
//! Every row and column of the plane is stepped, not only those inside the
//! active square. The inverse runs the reverse steps with `n` growing from 2
//! to `side`, columns before rows.

use std::f64::consts::SQRT_2;

use crate::Raster;

type StepFn = fn(&[f64], &mut Vec<f64>);

/// A `side x side` plane of real samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    side: usize,
    data: Vec<f64>,
}

impl Plane {
    /// Zero-filled plane.
    pub fn zeros(side: usize) -> Self {
        Self {
            side,
            data: vec![0.0; side * side],
        }
    }

    /// Copy one channel of `image` into the top-left corner of a zeroed
    /// `side x side` plane.
    pub fn from_channel(image: &Raster, channel: usize, side: usize) -> Self {
        let mut plane = Self::zeros(side);
        let width = image.width() as usize;
        for (idx, px) in image.pixels().chunks_exact(3).enumerate() {
            plane.set(idx % width, idx / width, px[channel] as f64);
        }
        plane
    }

    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.side + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.side + x] = value;
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.data
    }

    pub fn coefficients_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Forward 2D Haar transform in place.
    pub fn forward(&mut self) {
        let mut line = Vec::with_capacity(self.side);
        let mut n = self.side;
        while n > 1 {
            for row in 0..self.side {
                self.step_row(row, n, &mut line, forward_step);
            }
            for col in 0..self.side {
                self.step_col(col, n, &mut line, forward_step);
            }
            n /= 2;
        }
    }

    /// Inverse 2D Haar transform in place.
    pub fn inverse(&mut self) {
        let mut line = Vec::with_capacity(self.side);
        let mut n = 2;
        while n <= self.side {
            for col in 0..self.side {
                self.step_col(col, n, &mut line, inverse_step);
            }
            for row in 0..self.side {
                self.step_row(row, n, &mut line, inverse_step);
            }
            n *= 2;
        }
    }

    fn step_row(&mut self, row: usize, n: usize, line: &mut Vec<f64>, step: StepFn) {
        let start = row * self.side;
        step(&self.data[start..start + n], line);
        self.data[start..start + n].copy_from_slice(line);
    }

    fn step_col(&mut self, col: usize, n: usize, line: &mut Vec<f64>, step: StepFn) {
        let column: Vec<f64> = (0..n).map(|y| self.get(col, y)).collect();
        step(&column, line);
        for (y, &value) in line.iter().enumerate() {
            self.set(col, y, value);
        }
    }
}

/// One forward step: pairwise sums then pairwise differences.
fn forward_step(input: &[f64], out: &mut Vec<f64>) {
    out.clear();
    out.extend(input.chunks_exact(2).map(|p| (p[0] + p[1]) / SQRT_2));
    out.extend(input.chunks_exact(2).map(|p| (p[0] - p[1]) / SQRT_2));
}

/// One inverse step: interleave reconstructed pairs.
fn inverse_step(input: &[f64], out: &mut Vec<f64>) {
    let (avg, diff) = input.split_at(input.len() / 2);
    out.clear();
    for (&a, &d) in avg.iter().zip(diff) {
        out.push((a + d) / SQRT_2);
        out.push((a - d) / SQRT_2);
    }
}
