//! Platform memory primitives
//!
//! Each platform provides a `PlatformQuery` (non-faulting range check) and a
//! `PlatformPageSize` source. Platforms without a usable primitive fall back
//! to a source that never reports a page size, so every probe fails closed.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::{MsyncQuery as PlatformQuery, SysconfPageSize as PlatformPageSize};
        pub use unix::{MsyncQuery, SysconfPageSize};
    } else {
        mod fallback;
        pub use fallback::{NullQuery as PlatformQuery, NoPageSize as PlatformPageSize};
        pub use fallback::{NullQuery, NoPageSize};
    }
}

use memprobe_core::{Address, ByteReader};

/// Reads bytes from this process's own address space
#[derive(Debug, Clone, Copy, Default)]
pub struct VolatileReader;

// SAFETY: performs exactly one volatile byte load and nothing else.
unsafe impl ByteReader for VolatileReader {
    #[inline]
    unsafe fn read_byte(&self, address: Address) -> u8 {
        // SAFETY: the caller probed `address` as mapped immediately before
        // this call. A concurrent unmap in between is not prevented.
        unsafe { std::ptr::read_volatile(address.get() as *const u8) }
    }
}
