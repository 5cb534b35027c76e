//! Probe configuration
//!
//! Compile-time defaults with runtime environment overrides.
//!
//! # Example
//!
//! ```rust,ignore
//! use memprobe_runtime::config::ProbeConfig;
//!
//! let config = ProbeConfig::from_env().horizon(256);
//! config.validate()?;
//! ```

pub mod defaults;

use memprobe_core::env::{env_get, env_get_opt};
use memprobe_core::{ConfigError, LogLevel};

/// Probe configuration with builder pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Maximum bytes examined by a string scan
    pub horizon: usize,
    /// Diagnostic log level
    pub log_level: LogLevel,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ProbeConfig {
    /// Create config from defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `MEMPROBE_HORIZON` - Scan horizon in bytes
    /// - `MEMPROBE_LOG_LEVEL` - off, error, warn, info, debug, trace (or 0-5)
    pub fn from_env() -> Self {
        Self {
            horizon: env_get("MEMPROBE_HORIZON", defaults::HORIZON),
            log_level: env_get_opt::<String>("MEMPROBE_LOG_LEVEL")
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(defaults::LOG_LEVEL),
        }
    }

    /// Create config with explicit defaults (no env override).
    pub fn new() -> Self {
        Self {
            horizon: defaults::HORIZON,
            log_level: defaults::LOG_LEVEL,
        }
    }

    pub fn horizon(mut self, bytes: usize) -> Self {
        self.horizon = bytes;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::InvalidValue("horizon must be > 0"));
        }
        if self.horizon > defaults::MAX_HORIZON {
            return Err(ConfigError::InvalidValue("horizon must be <= 1MiB"));
        }
        Ok(())
    }

    /// Print configuration (for debugging)
    pub fn print(&self) {
        eprintln!("memprobe configuration:");
        eprintln!("  horizon:    {}", self.horizon);
        eprintln!("  log_level:  {:?}", self.log_level);
    }
}
