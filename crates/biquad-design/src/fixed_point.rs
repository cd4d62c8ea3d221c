//! Fixed-point coefficient export
//!
//! Integer biquad engines usually store coefficients as Q2.30: two integer
//! bits (sign included) and thirty fractional bits, covering `[-2, 2)`.
//! That range holds every low-pass, high-pass, band-pass, notch and
//! all-pass design; boosted shelves and peaking filters can exceed it.

use fixed::types::I2F30;

use crate::error::{DesignError, DesignResult};
use crate::types::CoefficientSet;

/// Coefficient word type (Q2.30)
pub type Coeff = I2F30;

/// Normalized coefficients in Q2.30.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCoefficientSet {
    /// Feedforward coefficients `(b0, b1, b2)`
    pub b: [Coeff; 3],
    /// Feedback coefficients `(a1, a2)`
    pub a: [Coeff; 2],
}

impl FixedCoefficientSet {
    /// Convert back to floating point.
    #[must_use]
    pub fn to_f64(&self) -> CoefficientSet {
        CoefficientSet::new(
            [self.a[0].to_num(), self.a[1].to_num()],
            [self.b[0].to_num(), self.b[1].to_num(), self.b[2].to_num()],
        )
    }

    /// Raw Q2.30 bits in `(b0, b1, b2, a1, a2)` order
    #[must_use]
    pub fn to_bits(&self) -> [i32; 5] {
        [
            self.b[0].to_bits(),
            self.b[1].to_bits(),
            self.b[2].to_bits(),
            self.a[0].to_bits(),
            self.a[1].to_bits(),
        ]
    }
}

fn quantize(coefficient: &'static str, value: f64) -> DesignResult<Coeff> {
    if !value.is_finite() {
        return Err(DesignError::FixedPointOverflow { coefficient, value });
    }
    Coeff::checked_from_num(value).ok_or(DesignError::FixedPointOverflow { coefficient, value })
}

impl CoefficientSet {
    /// Quantize to Q2.30, rounding to nearest.
    ///
    /// # Errors
    /// [`DesignError::FixedPointOverflow`] naming the first coefficient
    /// outside `[-2, 2)` or not finite.
    pub fn to_fixed(&self) -> DesignResult<FixedCoefficientSet> {
        Ok(FixedCoefficientSet {
            b: [
                quantize("b0", self.b0())?,
                quantize("b1", self.b1())?,
                quantize("b2", self.b2())?,
            ],
            a: [quantize("a1", self.a1())?, quantize("a2", self.a2())?],
        })
    }
}
