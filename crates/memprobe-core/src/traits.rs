//! Environment traits
//!
//! These traits define the interface between the platform-agnostic probe
//! logic and the platform-specific primitives in `memprobe-runtime`.
//! Tests drive the same logic through an in-memory fake.

use crate::address::Address;
use crate::error::Result;
use crate::probe::{ProbeResult, QueryStatus};

/// Source of the environment's page size
pub trait PageSizeSource: Send + Sync {
    /// Raw page size as reported by the environment
    ///
    /// Validation (positive, power of two) is the caller's job.
    fn query_page_size(&self) -> Result<usize>;
}

/// Non-faulting range validity query
pub trait RangeQuery: Send + Sync {
    /// Ask whether `[base, base + len)` is currently mapped
    ///
    /// `base` is always page-aligned and `len` is exactly one page.
    /// Must not read, copy or modify the range.
    fn query_range(&self, base: Address, len: usize) -> QueryStatus;
}

/// "Can the byte at this address be read right now?"
pub trait MemoryProbe {
    /// Never returns `ProbeResult::Indeterminate`
    fn probe(&self, address: Address) -> ProbeResult;
}

/// Reads a single byte
///
/// # Safety
///
/// Implementors must perform exactly one read of the byte at `address` and
/// nothing else. Callers uphold the probe-immediately-before-read discipline.
pub unsafe trait ByteReader {
    /// # Safety
    ///
    /// `address` must have been reported `Mapped` by a `MemoryProbe`
    /// immediately before this call.
    unsafe fn read_byte(&self, address: Address) -> u8;
}

impl<T: PageSizeSource + ?Sized> PageSizeSource for &T {
    fn query_page_size(&self) -> Result<usize> {
        (**self).query_page_size()
    }
}

impl<T: RangeQuery + ?Sized> RangeQuery for &T {
    fn query_range(&self, base: Address, len: usize) -> QueryStatus {
        (**self).query_range(base, len)
    }
}

impl<T: MemoryProbe + ?Sized> MemoryProbe for &T {
    fn probe(&self, address: Address) -> ProbeResult {
        (**self).probe(address)
    }
}

// SAFETY: forwards to the referent, which upholds the contract.
unsafe impl<T: ByteReader + ?Sized> ByteReader for &T {
    unsafe fn read_byte(&self, address: Address) -> u8 {
        // SAFETY: caller's contract is passed through unchanged.
        unsafe { (**self).read_byte(address) }
    }
}
