//! Library defaults for `ProbeConfig`

use memprobe_core::LogLevel;

/// Maximum bytes a string scan examines
pub const HORIZON: usize = memprobe_core::DEFAULT_HORIZON;

/// Upper bound accepted by `ProbeConfig::validate`
pub const MAX_HORIZON: usize = 1 << 20;

pub const LOG_LEVEL: LogLevel = LogLevel::Warn;
