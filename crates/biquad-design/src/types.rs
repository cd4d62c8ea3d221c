//! Core types for biquad coefficient design.

use core::fmt;
use core::str::FromStr;

use crate::config::{DEFAULT_GAIN_DB, DEFAULT_SAMPLE_RATE_HZ};
use crate::error::DesignError;

/// Filter family selecting a row of the cookbook formula table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    /// Second-order low-pass
    LowPass,
    /// Second-order high-pass
    HighPass,
    /// Band-pass with constant skirt gain (peak gain = Q)
    BandPassConstantSkirt,
    /// Band-pass with constant 0 dB peak gain
    BandPassConstantPeak,
    /// Notch (band-reject)
    Notch,
    /// All-pass (phase shift only)
    AllPass,
    /// Peaking (bell) equalizer
    PeakingEq,
    /// Low-shelf equalizer
    LowShelf,
    /// High-shelf equalizer
    HighShelf,
}

impl FilterFamily {
    /// Every family, in declaration order
    pub const ALL: [Self; 9] = [
        Self::LowPass,
        Self::HighPass,
        Self::BandPassConstantSkirt,
        Self::BandPassConstantPeak,
        Self::Notch,
        Self::AllPass,
        Self::PeakingEq,
        Self::LowShelf,
        Self::HighShelf,
    ];

    /// Whether `gain_db` takes part in the design
    #[must_use]
    pub const fn uses_gain(self) -> bool {
        matches!(self, Self::PeakingEq | Self::LowShelf | Self::HighShelf)
    }

    /// Stable identifier, also accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowPass => "lowpass",
            Self::HighPass => "highpass",
            Self::BandPassConstantSkirt => "bandpass-skirt",
            Self::BandPassConstantPeak => "bandpass-peak",
            Self::Notch => "notch",
            Self::AllPass => "allpass",
            Self::PeakingEq => "peaking-eq",
            Self::LowShelf => "low-shelf",
            Self::HighShelf => "high-shelf",
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterFamily {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(DesignError::UnknownFamily)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterFamily {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Design parameters shared by all families.
///
/// `gain_db` is ignored by families where [`FilterFamily::uses_gain`] is
/// false. A physically meaningful design needs
/// `0 < cutoff_hz < sample_rate_hz / 2` and `q > 0`; values outside that
/// range still compute (see [`crate::validate`]) but describe an aliased
/// or degenerate filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterDesignParams {
    /// Corner or center frequency in Hz
    pub cutoff_hz: f64,
    /// Quality factor
    pub q: f64,
    /// Gain in dB (peaking and shelving families only)
    pub gain_db: f64,
    /// Sample rate in Hz
    pub sample_rate_hz: f64,
}

impl FilterDesignParams {
    /// Create params at the default sample rate and 0 dB gain.
    #[must_use]
    pub const fn new(cutoff_hz: f64, q: f64) -> Self {
        Self {
            cutoff_hz,
            q,
            gain_db: DEFAULT_GAIN_DB,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }

    /// Copy with a different gain.
    #[must_use]
    pub const fn with_gain_db(self, gain_db: f64) -> Self {
        Self { gain_db, ..self }
    }

    /// Copy with a different sample rate.
    #[must_use]
    pub const fn with_sample_rate(self, sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            ..self
        }
    }

    /// Normalized angular frequency ω = 2π·f/fs
    #[must_use]
    pub fn omega(&self) -> f64 {
        2.0 * core::f64::consts::PI * self.cutoff_hz / self.sample_rate_hz
    }

    /// Bandwidth term α = sin(ω) / 2Q
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.omega().sin() / (2.0 * self.q)
    }

    /// Linear amplitude A = 10^(gain/40)
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        10.0_f64.powf(self.gain_db / 40.0)
    }
}

/// Raw cookbook coefficients before division by `a0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnnormalizedCoeffs {
    /// Feedforward b0
    pub b0: f64,
    /// Feedforward b1
    pub b1: f64,
    /// Feedforward b2
    pub b2: f64,
    /// Leading feedback term
    pub a0: f64,
    /// Feedback a1
    pub a1: f64,
    /// Feedback a2
    pub a2: f64,
}

/// Normalized biquad coefficients (`a0` is implicitly 1).
///
/// Transfer function:
/// ```text
/// H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientSet {
    a: [f64; 2],
    b: [f64; 3],
}

impl CoefficientSet {
    /// Pass-through coefficients
    pub const UNITY: Self = Self {
        a: [0.0, 0.0],
        b: [1.0, 0.0, 0.0],
    };

    /// Build from already-normalized `(a1, a2)` and `(b0, b1, b2)`.
    #[must_use]
    pub const fn new(a: [f64; 2], b: [f64; 3]) -> Self {
        Self { a, b }
    }

    /// Feedback coefficients `(a1, a2)`
    #[must_use]
    pub const fn a(&self) -> [f64; 2] {
        self.a
    }

    /// Feedforward coefficients `(b0, b1, b2)`
    #[must_use]
    pub const fn b(&self) -> [f64; 3] {
        self.b
    }

    /// Feedback a1
    #[must_use]
    pub const fn a1(&self) -> f64 {
        self.a[0]
    }

    /// Feedback a2
    #[must_use]
    pub const fn a2(&self) -> f64 {
        self.a[1]
    }

    /// Feedforward b0
    #[must_use]
    pub const fn b0(&self) -> f64 {
        self.b[0]
    }

    /// Feedforward b1
    #[must_use]
    pub const fn b1(&self) -> f64 {
        self.b[1]
    }

    /// Feedforward b2
    #[must_use]
    pub const fn b2(&self) -> f64 {
        self.b[2]
    }

    /// Single-precision copy in `(b0, b1, b2, a1, a2)` order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> [f32; 5] {
        [
            self.b[0] as f32,
            self.b[1] as f32,
            self.b[2] as f32,
            self.a[0] as f32,
            self.a[1] as f32,
        ]
    }

    /// Linear interpolation toward `end`, `start + t·(end − start)` per
    /// coefficient.
    ///
    /// Evaluated as `(1 − t)·start + t·end` so `t = 0` and `t = 1` return the
    /// endpoints bit-exact. `t` is not clamped. The result approximates a
    /// design at an intermediate cutoff only for nearby endpoints.
    #[must_use]
    pub fn lerp(&self, end: &CoefficientSet, t: f64) -> CoefficientSet {
        let mix = |from: f64, to: f64| (1.0 - t) * from + t * to;
        let [a1, a2] = self.a();
        let [b0, b1, b2] = self.b();
        let [end_a1, end_a2] = end.a();
        let [end_b0, end_b1, end_b2] = end.b();
        Self::new(
            [mix(a1, end_a1), mix(a2, end_a2)],
            [mix(b0, end_b0), mix(b1, end_b1), mix(b2, end_b2)],
        )
    }

    /// True when every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|c| c.is_finite())
    }
}

impl Default for CoefficientSet {
    fn default() -> Self {
        Self::UNITY
    }
}

impl fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a = [{:?}, {:?}], b = [{:?}, {:?}, {:?}]",
            self.a[0], self.a[1], self.b[0], self.b[1], self.b[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_name_roundtrip() {
        for family in FilterFamily::ALL {
            assert_eq!(family.name().parse::<FilterFamily>(), Ok(family));
        }
    }

    #[test]
    fn test_family_parse_ignores_case() {
        assert_eq!("LowPass".parse::<FilterFamily>(), Ok(FilterFamily::LowPass));
        assert_eq!(" NOTCH ".parse::<FilterFamily>(), Ok(FilterFamily::Notch));
    }

    #[test]
    fn test_family_parse_unknown() {
        assert_eq!(
            "butterworth".parse::<FilterFamily>(),
            Err(DesignError::UnknownFamily)
        );
    }

    #[test]
    fn test_gain_families() {
        let gain: Vec<_> = FilterFamily::ALL
            .into_iter()
            .filter(|f| f.uses_gain())
            .collect();
        assert_eq!(
            gain,
            [
                FilterFamily::PeakingEq,
                FilterFamily::LowShelf,
                FilterFamily::HighShelf
            ]
        );
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let start = CoefficientSet::new([-1.98, 0.981], [0.0002, 0.0004, 0.0002]);
        let end = CoefficientSet::new([0.3, 0.1], [0.7, -1.4, 0.7]);
        assert_eq!(start.lerp(&end, 0.0), start);
        assert_eq!(start.lerp(&end, 1.0), end);
    }

    #[test]
    fn test_lerp_midpoint() {
        let start = CoefficientSet::new([-1.0, 0.5], [1.0, 0.0, -1.0]);
        let end = CoefficientSet::new([1.0, 0.25], [3.0, 2.0, 1.0]);
        let mid = start.lerp(&end, 0.5);
        assert_eq!(mid.a(), [0.0, 0.375]);
        assert_eq!(mid.b(), [2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_params_defaults() {
        let params = FilterDesignParams::new(1_000.0, 0.707);
        assert_eq!(params.gain_db, 0.0);
        assert_eq!(params.sample_rate_hz, 48_000.0);

        let params = params.with_gain_db(-6.0).with_sample_rate(44_100.0);
        assert_eq!(params.gain_db, -6.0);
        assert_eq!(params.sample_rate_hz, 44_100.0);
        assert_eq!(params.cutoff_hz, 1_000.0);
    }

    #[test]
    fn test_params_derived_terms() {
        let params = FilterDesignParams::new(12_000.0, 0.5);
        assert!((params.omega() - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((params.alpha() - 1.0).abs() < 1e-15);
        assert_eq!(params.amplitude(), 1.0);
        assert!((params.with_gain_db(40.0).amplitude() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_unity() {
        let coeffs = CoefficientSet::default();
        assert_eq!(coeffs.b(), [1.0, 0.0, 0.0]);
        assert_eq!(coeffs.a(), [0.0, 0.0]);
    }

    #[test]
    fn test_accessors_and_f32() {
        let coeffs = CoefficientSet::new([-1.5, 0.5], [0.25, 0.5, 0.25]);
        assert_eq!(coeffs.a1(), -1.5);
        assert_eq!(coeffs.a2(), 0.5);
        assert_eq!(coeffs.b0(), 0.25);
        assert_eq!(coeffs.b1(), 0.5);
        assert_eq!(coeffs.b2(), 0.25);
        assert_eq!(coeffs.to_f32(), [0.25, 0.5, 0.25, -1.5, 0.5]);
        assert!(coeffs.is_finite());
        assert!(!CoefficientSet::new([f64::NAN, 0.0], [0.0; 3]).is_finite());
    }
}
