//! GatiSim - synthesize reference motion and noisy IMU records
//!
//! Runs the synthesis pipeline once and writes the record files consumed
//! by the downstream estimator and plotting tools:
//!
//! - `measurements.csv`: noisy accelerations and angular rates
//! - `true_position.csv`: ground-truth roll/pitch/yaw
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario
//! gati-sim -o records
//!
//! # Slower sampling, harsher noise, reproducible
//! gati-sim -s 100 -n 10 --seed 42 -o records
//!
//! # From a TOML file, with CLI overrides on top
//! gati-sim --config gati-sim.toml -d 250
//! ```

use clap::Parser;
use gati_sim::config::SynthesisConfig;
use gati_sim::export::{write_attitude, write_measurements};
use gati_sim::pipeline::ProfileSynthesizer;
use gati_sim::Result;
use std::path::Path;

#[derive(Parser)]
#[command(name = "gati-sim")]
#[command(about = "Synthesize a reference motion profile and noisy IMU measurements")]
struct Args {
    /// Frequency of the sine pulse in Hz
    #[arg(short = 'f', long)]
    signal_frequency: Option<f64>,

    /// Sampling frequency in Hz
    #[arg(short = 's', long)]
    sampling_frequency: Option<f64>,

    /// Duration of each motion pulse in ms
    #[arg(short = 'd', long)]
    pulse_duration: Option<f64>,

    /// Target SNR of the measurement signals (gyro/accel) in dB
    #[arg(short = 'n', long)]
    target_snr: Option<f64>,

    /// Random seed for reproducible noise (0 = random each run)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file (CLI flags override file values)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Output directory for the CSV record files
    #[arg(short = 'o', long, default_value = "records")]
    output: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Using config: {}", path);
            SynthesisConfig::from_file(path)?
        }
        None => SynthesisConfig::default(),
    };

    if let Some(f) = args.signal_frequency {
        config.signal.signal_frequency_hz = f;
    }
    if let Some(fs) = args.sampling_frequency {
        config.signal.sampling_frequency_hz = fs;
    }
    if let Some(d) = args.pulse_duration {
        config.signal.pulse_duration_ms = d;
    }
    if let Some(snr) = args.target_snr {
        config.noise.target_snr_db = snr;
    }
    if let Some(seed) = args.seed {
        config.random_seed = seed;
    }

    log::info!(
        "Signal: f={} Hz, fs={} Hz, pulse={} ms, SNR={} dB, seed={}",
        config.signal.signal_frequency_hz,
        config.signal.sampling_frequency_hz,
        config.signal.pulse_duration_ms,
        config.noise.target_snr_db,
        config.random_seed
    );

    let mut synthesizer = ProfileSynthesizer::from_config(&config)?;
    log::info!(
        "Schedule: {} slots per axis, {} samples total",
        config.schedule.roll.len(),
        synthesizer.sample_count()
    );

    let data = synthesizer.synthesize()?;

    std::fs::create_dir_all(&args.output)?;
    let out_dir = Path::new(&args.output);
    let measurements_path = out_dir.join("measurements.csv");
    let truth_path = out_dir.join("true_position.csv");

    write_measurements(&measurements_path, &data.measurements)?;
    log::info!(
        "Wrote {} measurement rows to {}",
        data.measurements.len(),
        measurements_path.display()
    );

    write_attitude(&truth_path, &data.truth)?;
    log::info!(
        "Wrote {} true-attitude rows to {}",
        data.truth.len(),
        truth_path.display()
    );

    Ok(())
}
