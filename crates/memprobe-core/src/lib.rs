//! # memprobe-core
//!
//! Core types and algorithms for probing untrusted addresses without
//! faulting the process.
//!
//! This crate is platform-agnostic and contains no OS-specific code.
//! The `msync`/`sysconf` primitives live in `memprobe-runtime`.
//!
//! ## Modules
//!
//! - `address` - Opaque address newtype
//! - `page` - Validated page size and its once-initialised cache
//! - `probe` - Page probe over a non-faulting range query
//! - `sniff` - Bounded, byte-by-byte C-string detection
//! - `classify` - Text-or-integer dispatch
//! - `fmt` - Decimal and raw-byte writers
//! - `traits` - Environment traits
//! - `error` - Error types
//! - `kprint` - Leveled diagnostic macros (`kerror!`, `kwarn!`, `kdebug!`, `ktrace!`)
//! - `env` - Environment variable utilities

pub mod address;
pub mod page;
pub mod probe;
pub mod sniff;
pub mod classify;
pub mod fmt;
pub mod traits;
pub mod error;
pub mod kprint;
pub mod env;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use address::Address;
pub use page::{PageSize, PageSizeCell};
pub use probe::{PageProbe, ProbeResult, QueryStatus};
pub use sniff::{ScanOutcome, StringSniffer, DEFAULT_HORIZON};
pub use classify::{Classified, Classifier};
pub use traits::{ByteReader, MemoryProbe, PageSizeSource, RangeQuery};
pub use error::{ConfigError, ProbeError};
pub use env::{env_get, env_get_bool, env_get_opt};
pub use kprint::{set_log_level, LogLevel};
