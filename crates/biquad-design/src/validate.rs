//! Parameter validation
//!
//! The generator accepts any input. This module classifies the inputs that
//! lead to aliased or degenerate coefficient sets so callers (sweeps, UIs,
//! tests) can skip or flag them. Validation reads only its arguments.

use heapless::Vec;
use log::{trace, warn};

use crate::config::{nyquist_hz, MAX_WARNINGS};
use crate::design::generate;
use crate::error::{DesignResult, DomainWarning};
use crate::types::{CoefficientSet, FilterDesignParams, FilterFamily};

/// Warnings found for one parameter set
pub type Warnings = Vec<DomainWarning, MAX_WARNINGS>;

impl FilterDesignParams {
    /// Collect every domain warning for these parameters.
    ///
    /// NaN values fail the positivity checks.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Warnings {
        let mut warnings = Warnings::new();
        // Sample rate, one cutoff rule, Q: never more than MAX_WARNINGS
        if !(self.sample_rate_hz > 0.0) {
            let _ = warnings.push(DomainWarning::NonPositiveSampleRate {
                sample_rate_hz: self.sample_rate_hz,
            });
        }
        if !(self.cutoff_hz > 0.0) {
            let _ = warnings.push(DomainWarning::NonPositiveCutoff {
                cutoff_hz: self.cutoff_hz,
            });
        } else if self.sample_rate_hz > 0.0 && self.cutoff_hz >= nyquist_hz(self.sample_rate_hz) {
            let _ = warnings.push(DomainWarning::AboveNyquist {
                cutoff_hz: self.cutoff_hz,
                nyquist_hz: nyquist_hz(self.sample_rate_hz),
            });
        }
        if !(self.q > 0.0) {
            let _ = warnings.push(DomainWarning::NonPositiveQ { q: self.q });
        }
        warnings
    }
}

/// True when `params` describe a physically meaningful design.
#[must_use]
pub fn is_valid_design(params: &FilterDesignParams) -> bool {
    params.validate().is_empty()
}

/// Design with diagnostics.
///
/// Logs each domain warning at `warn` level, then designs anyway. The
/// result is identical to [`generate`].
///
/// # Errors
/// See [`generate`].
pub fn diagnose(family: FilterFamily, params: &FilterDesignParams) -> DesignResult<CoefficientSet> {
    for warning in params.validate() {
        warn!("{family}: {warning}");
    }
    let coeffs = generate(family, params)?;
    trace!("{family} @ {} Hz, Q {}: {coeffs}", params.cutoff_hz, params.q);
    Ok(coeffs)
}
