//! Sensor Window Simulation
//!
//! Generates synthetic temperature/vibration/speed windows plus plausible
//! model outputs and runs the reasoning engine over them, for demos and
//! manual testing without live sensors or trained models.
//!
//! # Usage
//! ```bash
//! ./simulation --scenario critical --points 60
//! ./simulation --scenario healthy --json
//! ```

use clap::{Parser, ValueEnum};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use sentinel_pm::config::MachineConfig;
use sentinel_pm::engine::HealthReasoner;
use sentinel_pm::types::{
    AnomalyScoreOutput, ClassificationOutput, ConditionLabel, ForecastOutput, ModelOutputs,
    SensorWindows,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    /// Steady readings well inside the normal bands
    Healthy,
    /// Temperature and vibration ramping toward their high bands
    Degrading,
    /// Critical temperature/vibration with a failing classifier verdict
    Critical,
}

#[derive(Parser, Debug)]
#[command(name = "simulation")]
#[command(about = "Synthetic sensor data generator for the reasoning engine")]
struct CliArgs {
    /// Scenario to simulate
    #[arg(long, value_enum, default_value = "healthy")]
    scenario: Scenario,

    /// Samples per sensor window
    #[arg(long, default_value = "60")]
    points: usize,

    /// RNG seed for reproducible windows
    #[arg(long, default_value = "7")]
    seed: u64,

    /// Optional operator question to route through the composer
    #[arg(long)]
    question: Option<String>,

    /// Print the full evaluation report as JSON instead of the answer text
    #[arg(long)]
    json: bool,
}

/// Linear ramp from `start` to `end` with gaussian noise.
fn ramp(rng: &mut StdRng, start: f64, end: f64, noise: f64, points: usize) -> Vec<f64> {
    let normal = Normal::new(0.0, noise).ok();
    (0..points)
        .map(|i| {
            let t = if points > 1 {
                i as f64 / (points - 1) as f64
            } else {
                1.0
            };
            let jitter = normal.as_ref().map_or(0.0, |n| n.sample(rng));
            start + (end - start) * t + jitter
        })
        .collect()
}

fn build_inputs(scenario: Scenario, points: usize, seed: u64) -> (SensorWindows, ModelOutputs) {
    let mut rng = StdRng::seed_from_u64(seed);

    match scenario {
        Scenario::Healthy => {
            let sensors = SensorWindows {
                temperature: ramp(&mut rng, 64.0, 66.0, 0.4, points),
                vibration: ramp(&mut rng, 3.0, 3.2, 0.05, points),
                speed: ramp(&mut rng, 1100.0, 1105.0, 3.0, points),
            };
            let models = ModelOutputs {
                forecast: Some(ForecastOutput {
                    temperature: 66.2,
                    vibration: 3.2,
                    speed: 1103.0,
                }),
                classification: Some(ClassificationOutput {
                    label: ConditionLabel::Normal,
                    raw_code: Some(0),
                }),
                anomaly: Some(AnomalyScoreOutput {
                    is_anomaly: false,
                    score: 0.05,
                }),
            };
            (sensors, models)
        }
        Scenario::Degrading => {
            let sensors = SensorWindows {
                temperature: ramp(&mut rng, 68.0, 81.0, 0.5, points),
                vibration: ramp(&mut rng, 4.0, 7.5, 0.1, points),
                speed: ramp(&mut rng, 1150.0, 1250.0, 5.0, points),
            };
            let models = ModelOutputs {
                forecast: Some(ForecastOutput {
                    temperature: 83.5,
                    vibration: 8.1,
                    speed: 1265.0,
                }),
                classification: Some(ClassificationOutput {
                    label: ConditionLabel::Warning,
                    raw_code: Some(1),
                }),
                anomaly: Some(AnomalyScoreOutput {
                    is_anomaly: true,
                    score: -0.03,
                }),
            };
            (sensors, models)
        }
        Scenario::Critical => {
            let sensors = SensorWindows {
                temperature: ramp(&mut rng, 85.0, 105.0, 0.5, points),
                vibration: ramp(&mut rng, 7.0, 14.0, 0.15, points),
                speed: ramp(&mut rng, 1300.0, 1480.0, 6.0, points),
            };
            let models = ModelOutputs {
                forecast: Some(ForecastOutput {
                    temperature: 108.0,
                    vibration: 14.8,
                    speed: 1500.0,
                }),
                classification: Some(ClassificationOutput {
                    label: ConditionLabel::Critical,
                    raw_code: Some(2),
                }),
                anomaly: Some(AnomalyScoreOutput {
                    is_anomaly: true,
                    score: -0.15,
                }),
            };
            (sensors, models)
        }
    }
}

fn main() {
    let args = CliArgs::parse();

    let (sensors, models) = build_inputs(args.scenario, args.points.max(5), args.seed);
    let reasoner = HealthReasoner::new(MachineConfig::default());
    let report = reasoner.evaluate(&sensors, &models, args.question.as_deref());

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize report: {e}"),
        }
    } else {
        println!(
            "scenario: {:?} | risk: {} ({}/100) | recommendations: {}",
            args.scenario,
            report.risk.level,
            report.risk.score,
            report.recommendations.len()
        );
        println!();
        println!("{}", report.response);
    }
}
