//! Simulation configuration.

use thiserror::Error;

use crate::character::ClassKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimConfigError {
    #[error("number of runs must be at least 1")]
    ZeroRuns,
    #[error("max explores per run must be at least 1")]
    ZeroExplores,
    #[error("unknown class '{0}' (expected caster, duelist, bruiser or all)")]
    UnknownClass(String),
    #[error("invalid value '{value}' for {flag}")]
    InvalidNumber { flag: String, value: String },
    #[error("{0} needs a value")]
    MissingValue(String),
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Playthroughs per class
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Classes to simulate
    pub classes: Vec<ClassKind>,

    /// Explorations per run before the run counts as timed out
    pub max_explores_per_run: u32,

    /// Emit per-run and per-encounter logs
    pub verbose: bool,

    /// Also write the report as JSON
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            classes: ClassKind::PLAYABLE.to_vec(),
            max_explores_per_run: 200,
            verbose: false,
            json: false,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Only one class
    pub fn for_class(class: ClassKind, num_runs: u32) -> Self {
        Self {
            num_runs,
            classes: vec![class],
            ..Default::default()
        }
    }

    /// Parses command-line flags (`args[0]` is the program name).
    /// `-h/--help` is left to the caller.
    pub fn from_args(args: &[String]) -> Result<Self, SimConfigError> {
        let mut config = SimConfig::default();

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-n" | "--runs" => config.num_runs = parse_number(arg, iter.next())?,
                "-s" | "--seed" => config.seed = Some(parse_number(arg, iter.next())?),
                "--max-explores" => config.max_explores_per_run = parse_number(arg, iter.next())?,
                "-c" | "--class" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| SimConfigError::MissingValue(arg.clone()))?;
                    config.classes = parse_classes(value)?;
                }
                "--quick" => {
                    config.num_runs = SimConfig::quick().num_runs;
                }
                "-v" | "--verbose" => config.verbose = true,
                "--json" => config.json = true,
                "-h" | "--help" => {}
                other => return Err(SimConfigError::UnknownFlag(other.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimConfigError> {
        if self.num_runs == 0 {
            return Err(SimConfigError::ZeroRuns);
        }
        if self.max_explores_per_run == 0 {
            return Err(SimConfigError::ZeroExplores);
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, SimConfigError> {
    let value = value.ok_or_else(|| SimConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| SimConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

fn parse_classes(value: &str) -> Result<Vec<ClassKind>, SimConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "all" => Ok(ClassKind::PLAYABLE.to_vec()),
        "caster" => Ok(vec![ClassKind::Caster]),
        "duelist" => Ok(vec![ClassKind::Duelist]),
        "bruiser" => Ok(vec![ClassKind::Bruiser]),
        _ => Err(SimConfigError::UnknownClass(value.to_string())),
    }
}
