//! Coefficient Generator
//!
//! Computes normalized biquad coefficients from the RBJ Audio EQ Cookbook.
//! Every family shares the same derivation:
//!
//! 1. `ω = 2π·f/fs`
//! 2. `α = sin(ω) / 2Q`
//! 3. `A = 10^(gain/40)` (peaking and shelving only)
//! 4. Unnormalized `(b0, b1, b2, a0, a1, a2)` from the family row
//! 5. Divide everything by `a0`
//!
//! Step 4 is [`UnnormalizedCoeffs::for_family`], step 5 is
//! [`UnnormalizedCoeffs::normalize`]. [`generate`] chains the two.
//!
//! # Peaking EQ
//!
//! The peaking numerator scales α by ω, not by A:
//! `b0 = 1 + α·ω`, `b2 = 1 − α·ω`. The denominator uses `α/A` as in the
//! cookbook. Existing coefficient tables depend on this form, so it is
//! kept as is.

use crate::config::DEFAULT_SAMPLE_RATE_HZ;
use crate::error::{DesignError, DesignResult};
use crate::types::{CoefficientSet, FilterDesignParams, FilterFamily, UnnormalizedCoeffs};

impl UnnormalizedCoeffs {
    /// Evaluate the formula row for `family` without normalizing.
    #[must_use]
    pub fn for_family(family: FilterFamily, params: &FilterDesignParams) -> Self {
        let omega = params.omega();
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * params.q);

        match family {
            FilterFamily::LowPass => Self {
                b0: (1.0 - cos_omega) / 2.0,
                b1: 1.0 - cos_omega,
                b2: (1.0 - cos_omega) / 2.0,
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::HighPass => Self {
                b0: (1.0 + cos_omega) / 2.0,
                b1: -(1.0 + cos_omega),
                b2: (1.0 + cos_omega) / 2.0,
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::BandPassConstantSkirt => Self {
                b0: sin_omega / 2.0,
                b1: 0.0,
                b2: -(sin_omega / 2.0),
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::BandPassConstantPeak => Self {
                b0: alpha,
                b1: 0.0,
                b2: -alpha,
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::Notch => Self {
                b0: 1.0,
                b1: -2.0 * cos_omega,
                b2: 1.0,
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::AllPass => Self {
                b0: 1.0 - alpha,
                b1: -2.0 * cos_omega,
                b2: 1.0 + alpha,
                a0: 1.0 + alpha,
                a1: -2.0 * cos_omega,
                a2: 1.0 - alpha,
            },
            FilterFamily::PeakingEq => {
                let a = params.amplitude();
                Self {
                    b0: 1.0 + alpha * omega,
                    b1: -2.0 * cos_omega,
                    b2: 1.0 - alpha * omega,
                    a0: 1.0 + alpha / a,
                    a1: -2.0 * cos_omega,
                    a2: 1.0 - alpha / a,
                }
            }
            FilterFamily::LowShelf => {
                let a = params.amplitude();
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                Self {
                    b0: a * ((a + 1.0) - (a - 1.0) * cos_omega + two_sqrt_a_alpha),
                    b1: 2.0 * a * ((a - 1.0) - (a + 1.0) * cos_omega),
                    b2: a * ((a + 1.0) - (a - 1.0) * cos_omega - two_sqrt_a_alpha),
                    a0: (a + 1.0) + (a - 1.0) * cos_omega + two_sqrt_a_alpha,
                    a1: -2.0 * ((a - 1.0) + (a + 1.0) * cos_omega),
                    a2: (a + 1.0) + (a - 1.0) * cos_omega - two_sqrt_a_alpha,
                }
            }
            FilterFamily::HighShelf => {
                let a = params.amplitude();
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                Self {
                    b0: a * ((a + 1.0) + (a - 1.0) * cos_omega + two_sqrt_a_alpha),
                    b1: -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_omega),
                    b2: a * ((a + 1.0) + (a - 1.0) * cos_omega - two_sqrt_a_alpha),
                    a0: (a + 1.0) - (a - 1.0) * cos_omega + two_sqrt_a_alpha,
                    a1: 2.0 * ((a - 1.0) - (a + 1.0) * cos_omega),
                    a2: (a + 1.0) - (a - 1.0) * cos_omega - two_sqrt_a_alpha,
                }
            }
        }
    }

    /// Divide by `a0`, leaving it implicitly 1.
    ///
    /// # Errors
    /// [`DesignError::ZeroDenominator`] when `a0` is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn normalize(self, family: FilterFamily) -> DesignResult<CoefficientSet> {
        if self.a0 == 0.0 {
            return Err(DesignError::ZeroDenominator { family });
        }
        Ok(CoefficientSet::new(
            [self.a1 / self.a0, self.a2 / self.a0],
            [self.b0 / self.a0, self.b1 / self.a0, self.b2 / self.a0],
        ))
    }
}

/// Design normalized coefficients for `family`.
///
/// Pure and deterministic: identical inputs give bit-identical output.
/// Out-of-domain parameters (see [`crate::validate`]) still compute.
///
/// # Errors
/// [`DesignError::ZeroDenominator`] when the family's `a0` is zero.
/// `q <= 0` is not an error: Q = 0 makes α infinite and the returned
/// coefficients non-finite, and negative Q gives a meaningless design.
pub fn generate(family: FilterFamily, params: &FilterDesignParams) -> DesignResult<CoefficientSet> {
    UnnormalizedCoeffs::for_family(family, params).normalize(family)
}

fn design(
    family: FilterFamily,
    cutoff_hz: f64,
    q: f64,
    gain_db: f64,
    sample_rate_hz: f64,
) -> DesignResult<CoefficientSet> {
    let params = FilterDesignParams::new(cutoff_hz, q)
        .with_gain_db(gain_db)
        .with_sample_rate(sample_rate_hz);
    generate(family, &params)
}

/// Low-pass design. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn lowpass(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::LowPass, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// High-pass design. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn highpass(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::HighPass, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Band-pass design, constant skirt gain. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn bandpass_constant_skirt(
    cutoff_hz: f64,
    q: f64,
    gain_db: f64,
    sample_rate_hz: f64,
) -> DesignResult<CoefficientSet> {
    design(FilterFamily::BandPassConstantSkirt, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Band-pass design, constant 0 dB peak gain. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn bandpass_constant_peak(
    cutoff_hz: f64,
    q: f64,
    gain_db: f64,
    sample_rate_hz: f64,
) -> DesignResult<CoefficientSet> {
    design(FilterFamily::BandPassConstantPeak, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Notch design. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn notch(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::Notch, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// All-pass design. `gain_db` is ignored.
///
/// # Errors
/// See [`generate`].
pub fn allpass(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::AllPass, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Peaking EQ design.
///
/// # Errors
/// See [`generate`].
pub fn peaking_eq(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::PeakingEq, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Low-shelf design.
///
/// # Errors
/// See [`generate`].
pub fn low_shelf(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::LowShelf, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// High-shelf design.
///
/// # Errors
/// See [`generate`].
pub fn high_shelf(cutoff_hz: f64, q: f64, gain_db: f64, sample_rate_hz: f64) -> DesignResult<CoefficientSet> {
    design(FilterFamily::HighShelf, cutoff_hz, q, gain_db, sample_rate_hz)
}

/// Designs many filters at one sample rate.
///
/// Sweep and plotting front ends keep one of these and call
/// [`Designer::design`] per cutoff/Q combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Designer {
    sample_rate_hz: f64,
}

impl Designer {
    /// Designer at the given sample rate
    #[must_use]
    pub const fn new(sample_rate_hz: f64) -> Self {
        Self { sample_rate_hz }
    }

    /// Sample rate used for every design
    #[must_use]
    pub const fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Params for one design at this rate
    #[must_use]
    pub const fn params(&self, cutoff_hz: f64, q: f64, gain_db: f64) -> FilterDesignParams {
        FilterDesignParams::new(cutoff_hz, q)
            .with_gain_db(gain_db)
            .with_sample_rate(self.sample_rate_hz)
    }

    /// Design one filter.
    ///
    /// # Errors
    /// See [`generate`].
    pub fn design(
        &self,
        family: FilterFamily,
        cutoff_hz: f64,
        q: f64,
        gain_db: f64,
    ) -> DesignResult<CoefficientSet> {
        generate(family, &self.params(cutoff_hz, q, gain_db))
    }
}

impl Default for Designer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}
