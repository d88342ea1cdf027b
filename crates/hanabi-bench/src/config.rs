use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root batch configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BenchConfig {
    pub run_id: String,
    pub games: GamesConfig,
    pub seats: Vec<SeatConfig>,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BenchConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: BenchConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.games.validate()?;
        validate_seats(&self.seats)?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

/// Batch sizing and seeding block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GamesConfig {
    pub seed: Option<u64>,
    pub count: usize,
}

impl GamesConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.count == 0 {
            return Err(ValidationError::InvalidField {
                field: "games.count".to_string(),
                message: "number of games must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// One seat at the table and the policy that fills it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeatConfig {
    pub name: String,
    pub difficulty: SeatDifficulty,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatDifficulty {
    Easy,
    Normal,
}

fn validate_seats(seats: &[SeatConfig]) -> Result<(), ValidationError> {
    if !(2..=5).contains(&seats.len()) {
        return Err(ValidationError::InvalidField {
            field: "seats".to_string(),
            message: format!("expected between 2 and 5 seats, found {}", seats.len()),
        });
    }

    let mut seen = HashSet::new();
    for seat in seats {
        if seat.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "seats.name".to_string(),
                message: "seat name must not be empty".to_string(),
            });
        }
        if !seen.insert(seat.name.clone()) {
            return Err(ValidationError::InvalidField {
                field: "seats".to_string(),
                message: format!("seat name '{}' defined more than once", seat.name),
            });
        }
    }

    Ok(())
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.jsonl", &self.jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "resolved path is invalid".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
