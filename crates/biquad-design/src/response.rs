//! Frequency response evaluation
//!
//! Evaluates `H(e^jω)` of a normalized coefficient set at single
//! frequencies. Used to check designs numerically; rendering response
//! curves is left to callers.

use core::f64::consts::PI;

use crate::config::MAGNITUDE_FLOOR_DB;
use crate::types::CoefficientSet;

impl CoefficientSet {
    /// Calculate magnitude response at a given frequency
    #[must_use]
    pub fn magnitude_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        let omega = 2.0 * PI * freq_hz / sample_rate_hz;
        let cos_omega = omega.cos();
        let cos_2omega = (2.0 * omega).cos();
        let [b0, b1, b2] = self.b();
        let [a1, a2] = self.a();

        // |H(e^jw)|^2 = |B(e^jw)|^2 / |A(e^jw)|^2
        let num = b0 * b0 + b1 * b1 + b2 * b2
            + 2.0 * (b0 * b1 + b1 * b2) * cos_omega
            + 2.0 * b0 * b2 * cos_2omega;

        let den = 1.0 + a1 * a1 + a2 * a2
            + 2.0 * (a1 + a1 * a2) * cos_omega
            + 2.0 * a2 * cos_2omega;

        if den > 0.0 {
            (num.max(0.0) / den).sqrt()
        } else {
            0.0
        }
    }

    /// Calculate magnitude response in dB at a given frequency
    #[must_use]
    pub fn magnitude_db_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        let mag = self.magnitude_at(freq_hz, sample_rate_hz);
        if mag > 0.0 {
            (20.0 * mag.log10()).max(MAGNITUDE_FLOOR_DB)
        } else {
            MAGNITUDE_FLOOR_DB
        }
    }

    /// Phase response in radians, wrapped to (-π, π]
    #[must_use]
    pub fn phase_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        let omega = 2.0 * PI * freq_hz / sample_rate_hz;
        let (sin_1, cos_1) = omega.sin_cos();
        let (sin_2, cos_2) = (2.0 * omega).sin_cos();
        let [b0, b1, b2] = self.b();
        let [a1, a2] = self.a();

        let num_re = b0 + b1 * cos_1 + b2 * cos_2;
        let num_im = -(b1 * sin_1 + b2 * sin_2);
        let den_re = 1.0 + a1 * cos_1 + a2 * cos_2;
        let den_im = -(a1 * sin_1 + a2 * sin_2);

        let phase = num_im.atan2(num_re) - den_im.atan2(den_re);
        if phase > PI {
            phase - 2.0 * PI
        } else if phase <= -PI {
            phase + 2.0 * PI
        } else {
            phase
        }
    }

    /// Both poles strictly inside the unit circle.
    ///
    /// Uses the stability triangle `|a2| < 1`, `|a1| < 1 + a2`.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        let [a1, a2] = self.a();
        a2.abs() < 1.0 && a1.abs() < 1.0 + a2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::generate;
    use crate::types::{FilterDesignParams, FilterFamily};

    const SAMPLE_RATE: f64 = 48_000.0;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn design(family: FilterFamily, fc: f64, q: f64, gain_db: f64) -> CoefficientSet {
        let params = FilterDesignParams::new(fc, q).with_gain_db(gain_db);
        generate(family, &params).unwrap()
    }

    #[test]
    fn unity_is_flat() {
        let coeffs = CoefficientSet::UNITY;
        for freq in [10.0, 1_000.0, 20_000.0] {
            assert!(approx_eq(coeffs.magnitude_at(freq, SAMPLE_RATE), 1.0, 1e-12));
            assert!(approx_eq(coeffs.phase_at(freq, SAMPLE_RATE), 0.0, 1e-12));
        }
    }

    #[test]
    fn lowpass_response() {
        let fc = 1_000.0;
        let coeffs = design(FilterFamily::LowPass, fc, 0.707, 0.0);

        let mag_dc = coeffs.magnitude_at(10.0, SAMPLE_RATE);
        assert!(approx_eq(mag_dc, 1.0, 0.01), "DC magnitude: {mag_dc}");

        let db_fc = coeffs.magnitude_db_at(fc, SAMPLE_RATE);
        assert!(approx_eq(db_fc, -3.0, 0.1), "Cutoff dB: {db_fc}");

        let mag_high = coeffs.magnitude_at(fc * 10.0, SAMPLE_RATE);
        assert!(mag_high < 0.02, "High freq magnitude: {mag_high}");
    }

    #[test]
    fn highpass_response() {
        let fc = 1_000.0;
        let coeffs = design(FilterFamily::HighPass, fc, 0.707, 0.0);

        let mag_low = coeffs.magnitude_at(10.0, SAMPLE_RATE);
        assert!(mag_low < 0.001, "Low freq magnitude: {mag_low}");

        let mag_high = coeffs.magnitude_at(fc * 10.0, SAMPLE_RATE);
        assert!(approx_eq(mag_high, 1.0, 0.01), "High freq magnitude: {mag_high}");
    }

    #[test]
    fn bandpass_peak_is_unity_at_center() {
        let coeffs = design(FilterFamily::BandPassConstantPeak, 2_000.0, 5.0, 0.0);
        let mag = coeffs.magnitude_at(2_000.0, SAMPLE_RATE);
        assert!(approx_eq(mag, 1.0, 1e-9), "Center magnitude: {mag}");
    }

    #[test]
    fn bandpass_skirt_peaks_at_q() {
        // Skirt numerator is Q times the constant-peak numerator
        let q = 5.0;
        let coeffs = design(FilterFamily::BandPassConstantSkirt, 2_000.0, q, 0.0);
        let mag = coeffs.magnitude_at(2_000.0, SAMPLE_RATE);
        assert!(approx_eq(mag, q, 1e-6), "Center magnitude: {mag}");
    }

    #[test]
    fn notch_rejects_center() {
        let coeffs = design(FilterFamily::Notch, 1_000.0, 10.0, 0.0);
        let mag = coeffs.magnitude_at(1_000.0, SAMPLE_RATE);
        assert!(mag < 1e-4, "Center magnitude: {mag}");
        let db = coeffs.magnitude_db_at(1_000.0, SAMPLE_RATE);
        assert!(db < -80.0, "Center dB: {db}");

        let mag_away = coeffs.magnitude_at(4_000.0, SAMPLE_RATE);
        assert!(approx_eq(mag_away, 1.0, 0.01), "Away magnitude: {mag_away}");
    }

    #[test]
    fn allpass_is_flat() {
        let coeffs = design(FilterFamily::AllPass, 1_000.0, 0.707, 0.0);
        for freq in [20.0, 500.0, 1_000.0, 5_000.0, 20_000.0] {
            let mag = coeffs.magnitude_at(freq, SAMPLE_RATE);
            assert!(approx_eq(mag, 1.0, 1e-9), "Magnitude at {freq}: {mag}");
        }
        // -π phase at the center frequency
        let phase = coeffs.phase_at(1_000.0, SAMPLE_RATE);
        assert!(approx_eq(phase.abs(), PI, 1e-9), "Center phase: {phase}");
    }

    #[test]
    fn shelves_reach_gain() {
        let low = design(FilterFamily::LowShelf, 500.0, 0.707, 12.0);
        let db = low.magnitude_db_at(10.0, SAMPLE_RATE);
        assert!(approx_eq(db, 12.0, 0.1), "Low shelf DC gain: {db}");
        let db = low.magnitude_db_at(20_000.0, SAMPLE_RATE);
        assert!(approx_eq(db, 0.0, 0.1), "Low shelf HF gain: {db}");

        let high = design(FilterFamily::HighShelf, 5_000.0, 0.707, -12.0);
        let db = high.magnitude_db_at(10.0, SAMPLE_RATE);
        assert!(approx_eq(db, 0.0, 0.1), "High shelf DC gain: {db}");
        let db = high.magnitude_db_at(23_999.0, SAMPLE_RATE);
        assert!(approx_eq(db, -12.0, 0.1), "High shelf HF gain: {db}");
    }

    #[test]
    fn designs_in_domain_are_stable() {
        for family in FilterFamily::ALL {
            for fc in [20.0, 1_000.0, 12_000.0, 20_000.0] {
                let coeffs = design(family, fc, 0.707, 6.0);
                assert!(coeffs.is_stable(), "{family} at {fc} Hz unstable: {coeffs}");
            }
        }
    }

    #[test]
    fn unstable_poles_detected() {
        assert!(!CoefficientSet::new([0.0, 1.0], [1.0, 0.0, 0.0]).is_stable());
        assert!(!CoefficientSet::new([-2.0, 1.0], [0.0; 3]).is_stable());
        assert!(CoefficientSet::new([-1.0, 0.5], [0.0; 3]).is_stable());
    }
}
