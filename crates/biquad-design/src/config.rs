//! Design defaults and numeric tolerances
//!
//! All defaults used by the generator and its callers are centralized here.

/// Default sample rate in Hz (48 kHz)
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 48_000.0;

/// Default gain in dB (unity) for families that take a gain
pub const DEFAULT_GAIN_DB: f64 = 0.0;

/// Exact Butterworth quality factor (1/√2)
pub const BUTTERWORTH_Q: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// Rounded Butterworth Q used by the reference sweeps
pub const REFERENCE_Q: f64 = 0.707;

/// Relative tolerance when checking normalized coefficients
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Capacity of a warning list
///
/// The cutoff rules (not positive, at or above Nyquist) are exclusive, so
/// at most three warnings are raised.
pub const MAX_WARNINGS: usize = 3;

/// Magnitude floor reported by `magnitude_db_at` for a zero response
pub const MAGNITUDE_FLOOR_DB: f64 = -240.0;

/// Nyquist frequency for a sample rate
#[must_use]
pub fn nyquist_hz(sample_rate_hz: f64) -> f64 {
    sample_rate_hz / 2.0
}
