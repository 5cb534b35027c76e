//! Unix memory probing using msync and sysconf
//!
//! `msync(MS_ASYNC)` validates the range against the process's mappings
//! without copying or modifying data, and fails with `ENOMEM` when part of
//! the range is not mapped. On Linux an asynchronous msync is a no-op for
//! the data itself.

use memprobe_core::error::{ProbeError, Result};
use memprobe_core::{Address, PageSizeSource, QueryStatus, RangeQuery};
use nix::errno::Errno;
use nix::unistd::{sysconf, SysconfVar};

/// Range query backed by `msync(base, len, MS_ASYNC)`
#[derive(Debug, Clone, Copy, Default)]
pub struct MsyncQuery;

impl RangeQuery for MsyncQuery {
    fn query_range(&self, base: Address, len: usize) -> QueryStatus {
        // SAFETY: msync never dereferences the range from userspace; the
        // kernel validates it against the mapping table.
        let ret = unsafe { libc::msync(base.get() as *mut libc::c_void, len, libc::MS_ASYNC) };
        if ret == 0 {
            return QueryStatus::Ok;
        }

        match Errno::last() {
            Errno::ENOMEM => QueryStatus::NotMapped,
            errno => QueryStatus::Failed(errno as i32),
        }
    }
}

/// Page size from `sysconf(_SC_PAGESIZE)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SysconfPageSize;

impl PageSizeSource for SysconfPageSize {
    fn query_page_size(&self) -> Result<usize> {
        page_size_from_sysconf(sysconf(SysconfVar::PAGE_SIZE))
    }
}

/// Map a raw `sysconf` reply; zero is left for `PageSize::new` to reject
fn page_size_from_sysconf(reply: nix::Result<Option<libc::c_long>>) -> Result<usize> {
    match reply {
        Ok(Some(size)) => {
            usize::try_from(size).map_err(|_| ProbeError::NegativePageSize(i64::from(size)))
        }
        Ok(None) => Err(ProbeError::PageSizeUnavailable(0)),
        Err(errno) => Err(ProbeError::PageSizeUnavailable(errno as i32)),
    }
}
