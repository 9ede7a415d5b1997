//! Entropy DDoS Sentinel - Main Entry Point
//!
//! CLI driver for the detection core: generates (or imports) a traffic
//! scenario, calibrates the entropy baseline, runs the sliding-window
//! detection session, and reports accuracy against ground truth.

mod constants;
mod logic;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;

use logic::baseline::{self, EntropyBaseline};
use logic::config::{DetectorConfig, SessionConfig};
use logic::dataset;
use logic::history::{HistoryStore, JsonlHistoryStore, NullHistoryStore};
use logic::session::SessionDriver;
use logic::traffic::TrafficGenerator;

#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about = "Entropy-based DDoS detection simulator")]
struct Args {
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Sliding window capacity in packets
    #[arg(long, default_value_t = constants::DEFAULT_WINDOW_CAPACITY)]
    window: usize,

    /// Attack when source-address entropy ratio drops below this
    #[arg(long, default_value_t = constants::DEFAULT_IP_RATIO_THRESHOLD)]
    ip_threshold: f64,

    /// Attack when size entropy ratio drops below this
    #[arg(long, default_value_t = constants::DEFAULT_SIZE_RATIO_THRESHOLD)]
    size_threshold: f64,

    /// Playback speed multiplier (only meaningful with --paced)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Sleep between window advances instead of running flat out
    #[arg(long)]
    paced: bool,

    /// Replay a previously exported capture instead of generating traffic
    #[arg(long)]
    import: Option<PathBuf>,

    /// Write the traffic sequence to this file after the run
    #[arg(long)]
    export: Option<PathBuf>,

    /// History file (defaults to the per-user data directory)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Disable history persistence
    #[arg(long)]
    no_history: bool,

    /// Reuse a previously persisted baseline when it is still valid
    #[arg(long)]
    reuse_baseline: bool,

    /// Print persisted history (newest first) and exit
    #[arg(long)]
    show_history: bool,

    /// Delete persisted history and exit
    #[arg(long)]
    clear_history: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let args = Args::parse();

    let history_path = args
        .history_file
        .clone()
        .unwrap_or_else(logic::history::get_default_history_path);

    if args.show_history || args.clear_history {
        run_history_command(&args, &history_path);
        return;
    }

    let history: Box<dyn HistoryStore> = if args.no_history {
        Box::new(NullHistoryStore)
    } else {
        match JsonlHistoryStore::new(&history_path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                // Degrade to a null store; detection must not depend on storage
                log::error!("History store unavailable ({}), persistence disabled", e);
                Box::new(NullHistoryStore)
            }
        }
    };

    let mut generator = match args.seed {
        Some(seed) => {
            log::info!("Using seeded RNG ({})", seed);
            TrafficGenerator::seeded(seed)
        }
        None => TrafficGenerator::new(),
    };

    let (baseline_sample, traffic) = match &args.import {
        Some(path) => {
            let imported = match dataset::import_from_file(path) {
                Ok(packets) => packets,
                Err(e) => {
                    log::error!("Cannot read capture {:?}: {}", path, e);
                    return;
                }
            };
            if imported.is_empty() {
                log::error!("Capture {:?} held no usable packets", path);
                return;
            }
            // Imported captures carry no calibration sample; generate one
            let sample = generator.generate_batch(constants::BASELINE_PACKET_COUNT, 0, 0.0);
            (sample, imported)
        }
        None => {
            let scenario = generator.simulate_scenario();
            (scenario.baseline, scenario.traffic)
        }
    };

    let baseline = if args.reuse_baseline {
        let path = baseline::storage::get_default_baseline_path();
        baseline::load_or_calibrate(&path, "default", &baseline_sample)
    } else {
        EntropyBaseline::calibrate("default", &baseline_sample)
    };

    let config = SessionConfig {
        window_capacity: args.window,
        detector: DetectorConfig {
            ip_ratio_threshold: args.ip_threshold,
            size_ratio_threshold: args.size_threshold,
            ..DetectorConfig::default()
        },
        playback_speed: args.speed,
        ..SessionConfig::default()
    };

    let mut driver = SessionDriver::new(config, baseline, history);

    let report = if args.paced {
        let delay = pacing_delay(args.speed);
        log::info!("Paced playback: {:?} per window advance", delay);
        for packet in traffic.iter().cloned() {
            driver.step(packet);
            thread::sleep(delay);
        }
        driver.report()
    } else {
        driver.run(traffic.clone())
    };

    let stats = &report.stats;
    println!();
    println!("=== Detection Report ===");
    println!("packets processed : {}", report.packets_processed);
    println!("windows flagged   : {}", report.windows_flagged);
    println!(
        "confusion matrix  : TP={} FP={} TN={} FN={}",
        stats.true_positives, stats.false_positives, stats.true_negatives, stats.false_negatives
    );
    println!("accuracy          : {:.4}", stats.accuracy);
    println!("precision         : {:.4}", stats.precision);
    println!("recall            : {:.4}", stats.recall);
    println!("f1 score          : {:.4}", stats.f1_score);

    if let Some(path) = &args.export {
        if let Err(e) = dataset::export_to_file(path, &traffic) {
            log::error!("Export to {:?} failed: {}", path, e);
        }
    }
}

fn run_history_command(args: &Args, history_path: &PathBuf) {
    let store = match JsonlHistoryStore::new(history_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot open history {:?}: {}", history_path, e);
            return;
        }
    };

    if args.clear_history {
        match store.clear() {
            Ok(()) => println!("History cleared: {:?}", history_path),
            Err(e) => log::error!("Failed to clear history: {}", e),
        }
        return;
    }

    match store.list_all() {
        Ok(records) => {
            println!("{} history records (newest first):", records.len());
            for record in records {
                println!("{}", record.to_jsonl());
            }
        }
        Err(e) => log::error!("Failed to read history: {}", e),
    }
}

fn pacing_delay(speed: f64) -> Duration {
    let speed = if speed > 0.0 { speed } else { 1.0 };
    Duration::from_millis((constants::PACING_BASE_MS as f64 / speed).round() as u64)
}
