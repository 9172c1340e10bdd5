use num_traits::Float;

use super::filtertype::FilterError;

/// Coefficients of one second-order transfer-function section,
/// normalized so the leading denominator coefficient is 1.
#[derive(Debug, Clone, Copy)]
pub struct SosCoeffs<T> {
    pub b0: T,
    pub b1: T,
    pub b2: T,
    pub a1: T,
    pub a2: T
}

impl<T: Float> Default for SosCoeffs<T>
{
    fn default() -> Self {
        Self { b0: T::zero(), b1: T::zero(), b2: T::zero(), a1: T::zero(), a2: T::zero() }
    }
}

impl<T: Float> SosCoeffs<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_coeffs(&mut self, coeffs: (T, T, T, T, T)) {
        self.b0 = coeffs.0;
        self.b1 = coeffs.1;
        self.b2 = coeffs.2;
        self.a1 = coeffs.3;
        self.a2 = coeffs.4;
    }

    /// Unpack a flat coefficient table into per-section groups
    ///
    /// The flat layout is the one emitted by offline coefficient-design
    /// tools: `5 x n_stages` values, grouped consecutively in stage order
    /// `{b0, b1, b2, a1, a2}`.
    ///
    /// # Args
    /// -----
    ///
    /// `table`: flat coefficient table
    ///
    /// # Return
    /// --------
    ///
    /// `Result<Vec<SosCoeffs<T>>, FilterError>`
    ///
    pub fn from_flat(table: &[T]) -> Result<Vec<Self>, FilterError> {
        if table.is_empty() { return Err(FilterError::EmptyCoeffTable) }
        if table.len() % 5 != 0 { return Err(FilterError::CoeffTableLengthNotValid) }
        let sections = table
            .chunks_exact(5)
            .map(|group| Self { b0: group[0], b1: group[1], b2: group[2], a1: group[3], a2: group[4] })
            .collect();
        Ok(sections)
    }

    /// Stability test for a real second-order denominator
    /// `1 + a1 z^-1 + a2 z^-2`: both poles lie strictly inside the unit
    /// circle iff `|a2| < 1` and `|a1| < 1 + a2`.
    pub fn is_stable(&self) -> bool {
        self.a2.abs() < T::one() && self.a1.abs() < T::one() + self.a2
    }
}
