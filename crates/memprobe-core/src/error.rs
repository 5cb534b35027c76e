//! Error types for memory probing
//!
//! None of these escape `probe`/`sniff`/`classify`: every failure there has a
//! total, fail-closed result. They surface from page-size discovery,
//! diagnostics and configuration only.

use core::fmt;

/// Result type for probe plumbing
pub type Result<T> = core::result::Result<T, ProbeError>;

/// Errors raised below the probe boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The environment could not report its page size (errno, 0 if none)
    PageSizeUnavailable(i32),

    /// The environment reported a page size that is zero or not a power of two
    InvalidPageSize(usize),

    /// The environment reported a negative page size
    NegativePageSize(i64),

    /// The range query failed for a reason other than "not mapped"
    IndeterminateProbe(i32),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::PageSizeUnavailable(0) => write!(f, "page size unavailable"),
            ProbeError::PageSizeUnavailable(e) => write!(f, "page size unavailable: errno {}", e),
            ProbeError::InvalidPageSize(n) => write!(f, "invalid page size {}", n),
            ProbeError::NegativePageSize(n) => write!(f, "invalid page size {}", n),
            ProbeError::IndeterminateProbe(e) => write!(f, "indeterminate probe: errno {}", e),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
