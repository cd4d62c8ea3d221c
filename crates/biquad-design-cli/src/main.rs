//! Biquad coefficient printer
//!
//! Designs a single filter and prints its normalized coefficients:
//!
//! ```text
//! $ biquad-coeffs lowpass --cutoff 1000 --q 0.707
//! a: -1.8153179156742147 0.8309822224090126
//! b: 0.0039160766836994635 0.007832153367398927 0.0039160766836994635
//! ```

use std::fmt::Write as _;
use std::process::ExitCode;

use biquad_design::config::{DEFAULT_GAIN_DB, DEFAULT_SAMPLE_RATE_HZ, REFERENCE_Q};
use biquad_design::{diagnose, DesignResult, FilterDesignParams, FilterFamily};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Print normalized biquad coefficients for one design.
#[derive(Debug, Parser)]
#[command(name = "biquad-coeffs", version, about)]
struct Cli {
    /// Filter family: lowpass, highpass, bandpass-skirt, bandpass-peak,
    /// notch, allpass, peaking-eq, low-shelf, high-shelf
    family: FilterFamily,

    /// Cutoff or center frequency in Hz
    #[arg(long, allow_negative_numbers = true)]
    cutoff: f64,

    /// Quality factor
    #[arg(long, default_value_t = REFERENCE_Q, allow_negative_numbers = true)]
    q: f64,

    /// Gain in dB (peaking and shelving families)
    #[arg(long, default_value_t = DEFAULT_GAIN_DB, allow_negative_numbers = true)]
    gain_db: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: f64,

    /// Also print single-precision coefficients
    #[arg(long)]
    f32: bool,

    /// Also print Q2.30 fixed-point words
    #[arg(long)]
    fixed: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> FilterDesignParams {
        FilterDesignParams::new(self.cutoff, self.q)
            .with_gain_db(self.gain_db)
            .with_sample_rate(self.sample_rate)
    }
}

fn render(cli: &Cli) -> DesignResult<String> {
    let coeffs = diagnose(cli.family, &cli.params())?;
    let [a1, a2] = coeffs.a();
    let [b0, b1, b2] = coeffs.b();

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "a: {a1} {a2}");
    let _ = writeln!(out, "b: {b0} {b1} {b2}");

    if cli.f32 {
        let [b0, b1, b2, a1, a2] = coeffs.to_f32();
        let _ = writeln!(out, "a (f32): {a1} {a2}");
        let _ = writeln!(out, "b (f32): {b0} {b1} {b2}");
    }
    if cli.fixed {
        let [b0, b1, b2, a1, a2] = coeffs.to_fixed()?.to_bits();
        let _ = writeln!(out, "a (q2.30): {a1:#010x} {a2:#010x}");
        let _ = writeln!(out, "b (q2.30): {b0:#010x} {b1:#010x} {b2:#010x}");
    }
    Ok(out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("logger already initialised");
    }

    info!(
        "{} @ {} Hz, Q {}, {} dB, fs {} Hz",
        cli.family, cli.cutoff, cli.q, cli.gain_db, cli.sample_rate
    );

    match render(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
