//! Configuration management module.
//!
//! This module handles loading and saving benchmark parameters: the random
//! sample seed and size, the code ranges to draw from, scratch buffer sizing
//! and the records to format.

mod error;

pub use error::ConfigError;

use crate::decode::DecodeError;
use crate::fixtures::{self, CodeCycle, CodeRange};
use crate::format::{
    render, Product, SampleRecord, ScratchBuffer, DEFAULT_PADDING, DEFAULT_SCRATCH_CAPACITY,
};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/decode-bench";

/// Environment variable naming the configuration directory for the benches.
pub const CONFIG_DIR_ENV: &str = "DECODE_BENCH_CONFIG";

/// Benchmark parameters, backed by an optional YAML file.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub seed: u64,
    pub sample_len: usize,
    pub valid_range: CodeRange,
    pub invalid_range: CodeRange,
    pub scratch_capacity: usize,
    pub padding: usize,
    pub product: Product,
    pub record: SampleRecord,
    #[serde(skip)]
    file_path: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            seed: fixtures::DEFAULT_SEED,
            sample_len: fixtures::DEFAULT_SAMPLE_LEN,
            valid_range: CodeRange::valid(),
            invalid_range: CodeRange::with_invalid(),
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
            padding: DEFAULT_PADDING,
            product: Product::sample(),
            record: SampleRecord::sample(),
            file_path: None,
        }
    }
}

impl BenchConfig {
    /// Load the configuration from the custom directory if provided, or the
    /// default directory otherwise. A missing file yields the defaults, with
    /// the file path remembered for a later `save`.
    ///
    pub fn load(custom_path: Option<&Path>) -> Result<BenchConfig, ConfigError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => BenchConfig::default_path()?,
        };
        let file_path = dir_path.join(FILE_NAME);

        let mut config = if file_path.exists() {
            debug!("Loading configuration from {}", file_path.display());
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            serde_yaml::from_str::<BenchConfig>(&contents).map_err(|e| {
                ConfigError::DeserializationFailed {
                    path: file_path.clone(),
                    source: e,
                }
            })?
        } else {
            debug!(
                "No configuration at {}, using defaults",
                file_path.display()
            );
            BenchConfig::default()
        };

        config.validate()?;
        config.file_path = Some(file_path);
        Ok(config)
    }

    /// Load from the directory named by [`CONFIG_DIR_ENV`], or the default
    /// directory when it is unset. Without a home directory the defaults are
    /// used.
    ///
    pub fn from_env() -> Result<BenchConfig, ConfigError> {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => BenchConfig::load(Some(Path::new(&dir))),
            None => match BenchConfig::load(None) {
                Err(ConfigError::HomeDirectoryNotFound) => {
                    warn!("No home directory, using the default configuration");
                    Ok(BenchConfig::default())
                }
                result => result,
            },
        }
    }

    /// Check that the values can drive a benchmark run. The configured record
    /// must fit in the scratch buffer after the padding.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_len == 0 {
            return Err(ConfigError::Invalid {
                field: "sample_len",
                reason: "must be positive".to_string(),
            });
        }
        for (field, range) in [
            ("valid_range", self.valid_range),
            ("invalid_range", self.invalid_range),
        ] {
            if range.is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{}..={} is empty", range.start, range.end),
                });
            }
        }

        self.record.validate()?;
        let record_len = render(&self.record)?.len();
        let required = self.padding.saturating_add(record_len);
        if required > self.scratch_capacity {
            return Err(ConfigError::Invalid {
                field: "padding",
                reason: format!(
                    "{} spaces plus a {}-byte record exceed the {}-byte scratch buffer",
                    self.padding, record_len, self.scratch_capacity
                ),
            });
        }
        Ok(())
    }

    /// Serialize the configuration and write it to the remembered path,
    /// creating the parent directory when needed.
    ///
    pub fn save(&self) -> Result<(), ConfigError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(self)
            .map_err(ConfigError::SerializationFailed)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        info!("Saved configuration to {}", file_path.display());
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the seeded sample of valid codes.
    ///
    pub fn code_cycle(&self) -> Result<CodeCycle, DecodeError> {
        CodeCycle::new(fixtures::random_codes(
            self.seed,
            self.sample_len,
            self.valid_range,
        )?)
    }

    /// Return the seeded sample drawn from the range that includes
    /// unrecognised codes.
    ///
    pub fn invalid_code_cycle(&self) -> Result<CodeCycle, DecodeError> {
        CodeCycle::new(fixtures::random_codes(
            self.seed,
            self.sample_len,
            self.invalid_range,
        )?)
    }

    /// Return an empty scratch buffer of the configured capacity.
    ///
    pub fn scratch_buffer(&self) -> ScratchBuffer {
        ScratchBuffer::with_capacity(self.scratch_capacity)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
