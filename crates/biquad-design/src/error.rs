//! Diagnostics and errors raised while designing coefficients.
//!
//! Two severities exist. A [`DomainWarning`] flags parameters that still
//! compute but describe a meaningless filter; the caller decides what to do
//! with it. A [`DesignError`] means no coefficient set could be produced.

use core::fmt;

use crate::types::FilterFamily;

/// Design operation result
pub type DesignResult<T> = Result<T, DesignError>;

/// Non-fatal diagnostic for out-of-domain parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainWarning {
    /// Cutoff at or below 0 Hz
    NonPositiveCutoff {
        /// Offending cutoff in Hz
        cutoff_hz: f64,
    },
    /// Cutoff at or above Nyquist (aliased design)
    AboveNyquist {
        /// Offending cutoff in Hz
        cutoff_hz: f64,
        /// Nyquist frequency for the requested sample rate
        nyquist_hz: f64,
    },
    /// Quality factor at or below zero
    NonPositiveQ {
        /// Offending Q
        q: f64,
    },
    /// Sample rate at or below zero
    NonPositiveSampleRate {
        /// Offending sample rate in Hz
        sample_rate_hz: f64,
    },
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCutoff { cutoff_hz } => {
                write!(f, "cutoff {cutoff_hz} Hz is not positive")
            }
            Self::AboveNyquist {
                cutoff_hz,
                nyquist_hz,
            } => write!(
                f,
                "cutoff {cutoff_hz} Hz is at or above Nyquist ({nyquist_hz} Hz)"
            ),
            Self::NonPositiveQ { q } => write!(f, "Q {q} is not positive"),
            Self::NonPositiveSampleRate { sample_rate_hz } => {
                write!(f, "sample rate {sample_rate_hz} Hz is not positive")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainWarning {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::NonPositiveCutoff { cutoff_hz } => {
                defmt::write!(f, "NonPositiveCutoff({=f64} Hz)", *cutoff_hz);
            }
            Self::AboveNyquist {
                cutoff_hz,
                nyquist_hz,
            } => defmt::write!(
                f,
                "AboveNyquist({=f64} >= {=f64} Hz)",
                *cutoff_hz,
                *nyquist_hz
            ),
            Self::NonPositiveQ { q } => defmt::write!(f, "NonPositiveQ({=f64})", *q),
            Self::NonPositiveSampleRate { sample_rate_hz } => {
                defmt::write!(f, "NonPositiveSampleRate({=f64} Hz)", *sample_rate_hz);
            }
        }
    }
}

/// Fatal design failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DesignError {
    /// `a0` evaluated to exactly zero, so normalization would divide by zero
    ZeroDenominator {
        /// Family whose formula produced the zero
        family: FilterFamily,
    },
    /// Filter family name not recognised
    UnknownFamily,
    /// Coefficient outside the Q2.30 range `[-2, 2)` or not finite
    FixedPointOverflow {
        /// Name of the coefficient (`"b0"`, `"a1"`, ...)
        coefficient: &'static str,
        /// Its floating-point value
        value: f64,
    },
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator { family } => {
                write!(f, "invalid {family} design: a0 is zero (division by zero)")
            }
            Self::UnknownFamily => f.write_str("unknown filter family"),
            Self::FixedPointOverflow { coefficient, value } => {
                write!(f, "coefficient {coefficient} = {value} does not fit Q2.30")
            }
        }
    }
}

impl std::error::Error for DesignError {}

#[cfg(feature = "defmt")]
impl defmt::Format for DesignError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ZeroDenominator { family } => defmt::write!(f, "ZeroDenominator({})", family),
            Self::UnknownFamily => defmt::write!(f, "UnknownFamily"),
            Self::FixedPointOverflow { coefficient, value } => {
                defmt::write!(f, "FixedPointOverflow({=str} = {=f64})", *coefficient, *value);
            }
        }
    }
}
