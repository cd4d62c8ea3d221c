//! Biquad Coefficient Design Library
//!
//! Derives the normalized recurrence coefficients of second-order IIR
//! (biquad) filters from the Robert Bristow-Johnson "Audio EQ Cookbook"
//! formulas. Every design is a pure function of its parameters: no state,
//! no allocation, no I/O.
//!
//! # Modules
//!
//! - [`config`] - Default sample rate, Q and tolerances
//! - [`types`] - `FilterFamily`, `FilterDesignParams`, `CoefficientSet`
//! - [`error`] - Domain warnings and fatal design errors
//! - [`design`] - The coefficient generator
//! - [`validate`] - Parameter classification and logged design
//! - [`response`] - Magnitude/phase evaluation and stability check
//! - [`fixed_point`] - Q2.30 coefficient export
//!
//! # Example
//!
//! ```
//! use biquad_design::{generate, FilterDesignParams, FilterFamily};
//!
//! let params = FilterDesignParams::new(1_000.0, 0.707);
//! let coeffs = generate(FilterFamily::LowPass, &params).unwrap();
//! assert!(coeffs.is_stable());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod design;
pub mod error;
pub mod fixed_point;
pub mod response;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use design::{
    allpass, bandpass_constant_peak, bandpass_constant_skirt, generate, high_shelf, highpass,
    low_shelf, lowpass, notch, peaking_eq, Designer,
};
pub use error::{DesignError, DesignResult, DomainWarning};
pub use fixed_point::FixedCoefficientSet;
pub use types::{CoefficientSet, FilterDesignParams, FilterFamily, UnnormalizedCoeffs};
pub use validate::{diagnose, is_valid_design, Warnings};
