use circangle::{
    angular_space, geometric_median_with, mean_angle_with, Angle, AngleSeed, Complex64,
    StatsConfig,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "circangle CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Operation {
    #[default]
    Mean,
    Median,
    Space,
    Describe,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SeedConfig {
    Degrees(f64),
    Radians(f64),
    Vector([f64; 2]),
}

impl From<SeedConfig> for AngleSeed {
    fn from(value: SeedConfig) -> Self {
        match value {
            SeedConfig::Degrees(d) => AngleSeed::Degrees(d),
            SeedConfig::Radians(r) => AngleSeed::Radians(r),
            SeedConfig::Vector([re, im]) => AngleSeed::UnitVector(Complex64::new(re, im)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct StatsConfigJson {
    singular_eps: f64,
    tie_tolerance: f64,
    parallel: bool,
}

impl Default for StatsConfigJson {
    fn default() -> Self {
        let cfg = StatsConfig::default();
        Self {
            singular_eps: cfg.singular_eps,
            tie_tolerance: cfg.tie_tolerance,
            parallel: cfg.parallel,
        }
    }
}

impl From<StatsConfigJson> for StatsConfig {
    fn from(value: StatsConfigJson) -> Self {
        Self {
            singular_eps: value.singular_eps,
            tie_tolerance: value.tie_tolerance,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    operation: Operation,
    angles: Vec<SeedConfig>,
    start: Option<SeedConfig>,
    end: Option<SeedConfig>,
    steps: u64,
    stats: StatsConfigJson,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            angles: Vec::new(),
            start: None,
            end: None,
            steps: circangle::DEFAULT_STEPS as u64,
            stats: StatsConfigJson::default(),
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct AngleRecord {
    degrees: f64,
    radians: f64,
    signed_degrees: f64,
    vector: [f64; 2],
}

impl From<Angle> for AngleRecord {
    fn from(value: Angle) -> Self {
        let unit = value.unit_vector();
        Self {
            degrees: value.degrees(),
            radians: value.radians(),
            signed_degrees: value.signed_degrees(),
            vector: [unit.re, unit.im],
        }
    }
}

#[derive(Debug, Serialize)]
struct DescribeRecord {
    #[serde(flatten)]
    angle: AngleRecord,
    signed_radians: f64,
    fraction: f64,
    sin: f64,
    cos: f64,
    tan: f64,
    sinh: f64,
    cosh: f64,
    tanh: f64,
}

impl From<Angle> for DescribeRecord {
    fn from(value: Angle) -> Self {
        Self {
            angle: AngleRecord::from(value),
            signed_radians: value.signed_radians(),
            fraction: value.fraction(),
            sin: value.sin(),
            cos: value.cos(),
            tan: value.tan(),
            sinh: value.sinh(),
            cosh: value.cosh(),
            tanh: value.tanh(),
        }
    }
}

fn build_angles(seeds: &[SeedConfig]) -> Result<Vec<Angle>, Box<dyn std::error::Error>> {
    let mut angles = Vec::with_capacity(seeds.len());
    for seed in seeds {
        angles.push(Angle::from_seed((*seed).into())?);
    }
    Ok(angles)
}

fn run(config: Config) -> Result<String, Box<dyn std::error::Error>> {
    let angles = build_angles(&config.angles)?;
    let stats: StatsConfig = config.stats.into();
    tracing::info!(operation = ?config.operation, count = angles.len(), "running");

    let json = match config.operation {
        Operation::Mean => {
            let mean = mean_angle_with(&angles, &stats)?;
            serde_json::to_string_pretty(&AngleRecord::from(mean))?
        }
        Operation::Median => {
            let median = geometric_median_with(&angles, &stats)?;
            serde_json::to_string_pretty(&AngleRecord::from(median))?
        }
        Operation::Space => {
            let (Some(start), Some(end)) = (config.start, config.end) else {
                return Err("start and end must be set for the space operation".into());
            };
            let start = Angle::from_seed(start.into())?;
            let end = Angle::from_seed(end.into())?;
            let degrees = angular_space(&start, &end, config.steps)?;
            serde_json::to_string_pretty(&degrees)?
        }
        Operation::Describe => {
            let records: Vec<DescribeRecord> =
                angles.into_iter().map(DescribeRecord::from).collect();
            serde_json::to_string_pretty(&records)?
        }
    };
    Ok(json)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("circangle=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let output_path = config.output_path.clone();
    let json = run(config)?;

    match output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Config, EXAMPLE_JSON};

    #[test]
    fn example_config_parses_and_runs() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        let json = run(config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let degrees = value["degrees"].as_f64().unwrap();
        assert!((degrees - 25.0).abs() < 1e-9);
    }

    #[test]
    fn space_requires_endpoints() {
        let config: Config = serde_json::from_str(r#"{"operation": "space"}"#).unwrap();
        assert!(run(config).is_err());
    }

    #[test]
    fn space_validates_steps() {
        let config: Config = serde_json::from_str(
            r#"{"operation": "space", "start": {"degrees": 0}, "end": {"degrees": 90}, "steps": 1}"#,
        )
        .unwrap();
        let err = run(config).err().unwrap();
        assert!(err.to_string().contains("invalid parameter"));
    }

    #[test]
    fn describe_reports_every_angle() {
        let config: Config = serde_json::from_str(
            r#"{"operation": "describe", "angles": [{"degrees": 270}, {"vector": [0, 2]}]}"#,
        )
        .unwrap();
        let json = run(config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert!((records[0]["signed_degrees"].as_f64().unwrap() + 90.0).abs() < 1e-9);
        assert!((records[1]["degrees"].as_f64().unwrap() - 90.0).abs() < 1e-9);
    }
}
