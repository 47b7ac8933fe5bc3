//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Complete configuration of the freelas services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreelasConfig {
    /// Opaque identifier encoding
    pub codec: CodecConfig,

    /// Listing page sizes
    pub pagination: PaginationConfig,

    /// Installment schedule generation
    pub schedule: ScheduleConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// Configuration of the identifier codec
///
/// Every process sharing identifiers with the same clients must use the same
/// values, otherwise previously issued ids stop decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Custom alphabet (unique ASCII characters, at least 3)
    ///
    /// Shuffling the alphabet changes every issued identifier. `None` uses the
    /// sqids default alphabet.
    pub alphabet: Option<String>,

    /// Minimum length of an issued identifier
    pub min_length: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet: None,
            min_length: 8,
        }
    }
}

/// Configuration of listing pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request does not specify one
    pub default_page_size: usize,

    /// Largest page size a request may ask for
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

/// Configuration of the installment scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Decimal places of every installment but the last, and of prices
    pub scale: u32,

    /// Largest installment count a project may have
    pub max_installments: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            scale: crate::core::schedule::DEFAULT_SCALE,
            max_installments: crate::core::schedule::DEFAULT_MAX_INSTALLMENTS,
        }
    }
}

/// Configuration of log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,

    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            with_target: true,
        }
    }
}

impl FreelasConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_page_size == 0 || self.pagination.max_page_size == 0 {
            anyhow::bail!("pagination page sizes must be greater than zero");
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            anyhow::bail!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.pagination.default_page_size,
                self.pagination.max_page_size
            );
        }
        if self.schedule.scale > 28 {
            anyhow::bail!("schedule scale {} exceeds 28 decimal places", self.schedule.scale);
        }
        if self.schedule.max_installments == 0 {
            anyhow::bail!("schedule max_installments must be greater than zero");
        }
        Ok(())
    }
}
