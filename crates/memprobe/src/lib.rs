//! # memprobe - non-faulting memory probing
//!
//! Given an arbitrary, untrusted address, decide without crashing the
//! process whether it points at mapped memory, and whether a printable,
//! null-terminated string starts there.
//!
//! ## Quick Start
//!
//! ```ignore
//! use memprobe::{classify, dump, Address, Classified};
//!
//! let greeting = b"Hello, World!\0";
//! let addr = Address::from_ptr(greeting.as_ptr());
//! assert!(classify(addr).is_text());
//!
//! // Writes "Hello, World!"
//! dump(addr)?;
//! // Writes "-12345678910"
//! dump(Address::from_bits(-12345678910))?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  classify / dump          (text-or-integer dispatch)  │
//! ├──────────────────────────────────────────────────────┤
//! │  StringSniffer            (bounded byte-by-byte scan) │
//! ├──────────────────────────────────────────────────────┤
//! │  PageProbe                (page-granular, fail-closed)│
//! ├──────────────────────────────────────────────────────┤
//! │  msync(MS_ASYNC) + sysconf(_SC_PAGESIZE)   (runtime)  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caveats
//!
//! A probe result is a snapshot. Another thread can unmap a page between
//! the probe and the read that follows it; scanning re-probes before every
//! byte to keep that window small, but it cannot be closed. Pages that are
//! mapped but not readable (e.g. `PROT_NONE` guards) still report mapped.
//!
//! ## Environment Variables
//!
//! - `MEMPROBE_HORIZON` - Maximum bytes a string scan examines (default 4096)
//! - `MEMPROBE_LOG_LEVEL` - off, error, warn, info, debug, trace
//! - `MEMPROBE_FLUSH_EPRINT=1` - Flush diagnostics immediately

use std::io::{self, Write};

pub use memprobe_core::{
    Address, ByteReader, Classified, Classifier, ConfigError, LogLevel, MemoryProbe, PageProbe,
    PageSize, PageSizeSource, ProbeError, ProbeResult, QueryStatus, RangeQuery, ScanOutcome,
    StringSniffer, DEFAULT_HORIZON,
};
pub use memprobe_core::{kdebug, kerror, ktrace, kwarn};
pub use memprobe_core::{env, fmt, set_log_level};
pub use memprobe_runtime::{LiveProbe, ProbeConfig, Prober, VolatileReader};

/// Can the byte at `address` be read right now?
///
/// Returns `Mapped` or `Unmapped`; any failure other than "not mapped",
/// including a missing page size, reports `Unmapped`.
#[inline]
pub fn probe(address: Address) -> ProbeResult {
    Prober::global().probe(address)
}

/// Scan at most `horizon` bytes from `address` for a printable C string
#[inline]
pub fn sniff_string(address: Address, horizon: usize) -> ScanOutcome {
    Prober::global().sniff_with_horizon(address, horizon)
}

/// Text if `address` starts a string within the configured horizon,
/// otherwise its bit pattern as a signed integer
#[inline]
pub fn classify(address: Address) -> Classified {
    Prober::global().classify(address)
}

/// Classify `address` and render it to `w`
pub fn dump_to<W: Write + ?Sized>(w: &mut W, address: Address) -> io::Result<()> {
    fmt::write_classified(w, &classify(address))
}

/// Classify `address` and render it to stdout
pub fn dump(address: Address) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dump_to(&mut handle, address)?;
    handle.flush()
}

/// Write `value` to stdout in signed decimal
pub fn dump_i(value: i64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    fmt::write_decimal(&mut handle, value)?;
    handle.flush()
}

/// Write `s` to stdout unchanged
pub fn dump_str(s: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    fmt::write_raw(&mut handle, s.as_bytes())?;
    handle.flush()
}
