//! # memprobe-runtime
//!
//! Platform-specific runtime for memprobe.
//!
//! This crate provides:
//! - `msync(MS_ASYNC)` range queries and `sysconf` page size discovery
//! - A volatile byte reader for the current process
//! - Environment-driven configuration
//! - `Prober`, the live probe/sniff/classify bundle

pub mod config;
pub mod memory;
pub mod prober;

#[cfg(all(test, unix))]
pub(crate) mod test_util;

// Re-exports
pub use config::ProbeConfig;
pub use memory::{PlatformPageSize, PlatformQuery, VolatileReader};
pub use prober::{LiveProbe, Prober};
