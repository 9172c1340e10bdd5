use num_traits::Float;

use super::{
    coeffstruct::SosCoeffs,
    filtertype::FilterError
};
use crate::sosfilt_common::FilteredSample;

#[derive(Debug, Clone, Copy)]
struct SectionState<T> {
    x1: T,
    x2: T,
    y1: T,
    y2: T
}

impl<T: Float> SectionState<T> {
    fn new() -> Self {
        Self { x1: T::zero(), x2: T::zero(), y1: T::zero(), y2: T::zero() }
    }

    fn reset(&mut self) {
        self.x1 = T::zero();
        self.x2 = T::zero();
        self.y1 = T::zero();
        self.y2 = T::zero();
    }
}

/// # SosCascade
///
/// Implementation references:
/// - Second-order sections: <https://www.dspguide.com/ch19/2.htm>
/// - Audio EQ Cookbook by Robert Bristow-Johnson, <https://www.musicdsp.org/en/latest/Filters/197-rbj-audio-eq-cookbook.html>
/// - CMSIS-DSP biquad cascade, direct form I
///
/// Direct form I difference equation, evaluated per section:
/// $$y[n] = b_0x[n] + b_1x[n - 1] + b_2x[n - 2] - a_1y[n - 1] - a_2y[n - 2]$$
/// Section 0 processes the raw input; section i > 0 processes the output
/// of section i - 1. The last section's output is the cascade output.
///
/// Coefficients are bound at construction and immutable for the lifetime
/// of the instance; only the per-section delay memory mutates. One
/// instance serves one sample stream. For concurrent streams, bind one
/// instance per stream to the same coefficient table (`SosCoeffs` is
/// `Copy`).
///
/// The cascade never clamps or stabilizes its output: unstable
/// coefficients diverge honestly. Stability of the supplied table is the
/// caller's responsibility; `check_stability` is available on request.
///
#[derive(Debug)]
pub struct SosCascade<T>
{
    coeffs: Vec<SosCoeffs<T>>,
    states: Vec<SectionState<T>>
}

impl<T: Float> SosCascade<T>
{
    /// Create new cascade from per-section coefficient groups
    ///
    /// # Args
    /// -----
    ///
    /// `coeffs`: one `SosCoeffs` per section, in cascade order
    ///
    /// # Return
    /// --------
    ///
    /// `Result<Self, FilterError>`
    ///
    pub fn new(coeffs: Vec<SosCoeffs<T>>) -> Result<Self, FilterError> {
        if coeffs.is_empty() { return Err(FilterError::EmptyCoeffTable) }
        let states = vec![SectionState::new(); coeffs.len()];
        Ok(Self { coeffs, states })
    }

    /// Create new cascade from a flat coefficient table
    ///
    /// # Args
    /// -----
    ///
    /// `table`: `5 x n_stages` values in stage order `{b0, b1, b2, a1, a2}`
    ///
    /// # Return
    /// --------
    ///
    /// `Result<Self, FilterError>`
    ///
    pub fn from_flat(table: &[T]) -> Result<Self, FilterError> {
        let coeffs = SosCoeffs::from_flat(table)?;
        Self::new(coeffs)
    }

    /// Create new cascade from a flat table with a declared stage count
    ///
    /// # Args
    /// -----
    ///
    /// `table`: flat coefficient table
    /// `n_stages`: declared cascade length; the table must hold exactly
    /// `5 x n_stages` values
    ///
    /// # Return
    /// --------
    ///
    /// `Result<Self, FilterError>`
    ///
    pub fn with_stages(table: &[T], n_stages: usize) -> Result<Self, FilterError> {
        if n_stages == 0 { return Err(FilterError::EmptyCoeffTable) }
        if table.len() != n_stages * 5 { return Err(FilterError::StageCountMismatch) }
        Self::from_flat(table)
    }

    pub fn n_stages(&self) -> usize {
        self.coeffs.len()
    }

    /// Check every section against the second-order stability triangle
    /// (`|a2| < 1` and `|a1| < 1 + a2`). Never called implicitly.
    pub fn check_stability(&self) -> Result<(), FilterError> {
        for section in self.coeffs.iter() {
            if !section.is_stable() { return Err(FilterError::UnstableFilterCoeffs) }
        }
        Ok(())
    }

    pub fn filt_sample(&mut self, sample: T) -> T {
        let mut x = sample;
        for (coeffs, state) in self.coeffs.iter().zip(self.states.iter_mut()) {
            let y = coeffs.b0 * x +
                coeffs.b1 * state.x1 +
                coeffs.b2 * state.x2 -
                coeffs.a1 * state.y1 -
                coeffs.a2 * state.y2;

            state.x2 = state.x1;
            state.x1 = x;
            state.y2 = state.y1;
            state.y1 = y;

            x = y;
        }
        x
    }

    pub fn filt_frame(&mut self, frame: Vec<T>) -> Vec<T> {
        let y: Vec<T> = frame
            .iter()
            .map(|&x| self.filt_sample(x))
            .collect();
        y
    }

    pub fn clear_delayed_samples_cache(&mut self) {
        for state in self.states.iter_mut() {
            state.reset();
        }
    }

}

impl<T: Float> FilteredSample<T> for SosCascade<T>
{
    fn filtered_sample(&mut self, sample: T) -> T {
        self.filt_sample(sample)
    }
}
