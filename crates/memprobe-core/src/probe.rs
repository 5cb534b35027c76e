//! Page probe
//!
//! Answers "can the byte at this address be read right now?" without
//! dereferencing it. The containing page's base is handed to a
//! non-faulting `RangeQuery`; the address itself is never touched.
//!
//! # Result mapping
//!
//! | Range query          | `inspect`            | `probe`    |
//! |----------------------|----------------------|------------|
//! | succeeds             | `Mapped`             | `Mapped`   |
//! | "no such mapping"    | `Unmapped`           | `Unmapped` |
//! | any other failure    | `Indeterminate(err)` | `Unmapped` |
//! | no page size         | `Unmapped`           | `Unmapped` |

use std::sync::atomic::{AtomicU64, Ordering};

use crate::address::Address;
use crate::error::ProbeError;
use crate::page::{PageSize, PageSizeCell};
use crate::traits::{MemoryProbe, PageSizeSource, RangeQuery};

/// What the environment's range query reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Range is mapped
    Ok,
    /// Range (or part of it) is not mapped
    NotMapped,
    /// Query failed for another reason (errno)
    Failed(i32),
}

/// Outcome of probing one address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Mapped,
    Unmapped,
    /// The query failed for a reason other than "not mapped" (errno)
    Indeterminate(i32),
}

impl ProbeResult {
    #[inline]
    pub fn is_mapped(self) -> bool {
        matches!(self, ProbeResult::Mapped)
    }

    /// Collapse `Indeterminate` into `Unmapped`
    #[inline]
    pub fn fail_closed(self) -> ProbeResult {
        match self {
            ProbeResult::Indeterminate(_) => ProbeResult::Unmapped,
            other => other,
        }
    }

    /// Diagnostic error for an indeterminate result
    pub fn error(self) -> Option<ProbeError> {
        match self {
            ProbeResult::Indeterminate(errno) => Some(ProbeError::IndeterminateProbe(errno)),
            _ => None,
        }
    }
}

impl From<QueryStatus> for ProbeResult {
    fn from(status: QueryStatus) -> Self {
        match status {
            QueryStatus::Ok => ProbeResult::Mapped,
            QueryStatus::NotMapped => ProbeResult::Unmapped,
            QueryStatus::Failed(errno) => ProbeResult::Indeterminate(errno),
        }
    }
}

/// Page-granular probe over a range query and a page size source
pub struct PageProbe<Q, S> {
    query: Q,
    page_size: PageSizeCell<S>,
    queries: AtomicU64,
}

impl<Q: RangeQuery, S: PageSizeSource> PageProbe<Q, S> {
    pub const fn new(query: Q, source: S) -> Self {
        Self {
            query,
            page_size: PageSizeCell::new(source),
            queries: AtomicU64::new(0),
        }
    }

    /// Cached page size; `None` means every probe fails closed
    #[inline]
    pub fn page_size(&self) -> Option<PageSize> {
        self.page_size.get()
    }

    /// Three-way probe, keeping `Indeterminate` for diagnostics
    pub fn inspect(&self, address: Address) -> ProbeResult {
        let Some(page) = self.page_size() else {
            return ProbeResult::Unmapped;
        };

        let base = address.page_base(page);
        self.queries.fetch_add(1, Ordering::Relaxed);
        let result = ProbeResult::from(self.query.query_range(base, page.get()));

        if let ProbeResult::Indeterminate(errno) = result {
            crate::kdebug!("probe {} (page {}): indeterminate, errno {}", address, base, errno);
        }
        result
    }

    /// Number of range queries issued so far
    #[inline]
    pub fn probe_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }
}

impl<Q: RangeQuery, S: PageSizeSource> MemoryProbe for PageProbe<Q, S> {
    #[inline]
    fn probe(&self, address: Address) -> ProbeResult {
        self.inspect(address).fail_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingPageSize, FakeSpace};

    #[test]
    fn test_mapped_and_unmapped() {
        let space = FakeSpace::new(4096).with_page(0x10000, b"abc\0");
        let probe = PageProbe::new(&space, &space);

        assert_eq!(probe.probe(Address::new(0x10000)), ProbeResult::Mapped);
        assert_eq!(probe.probe(Address::new(0x10fff)), ProbeResult::Mapped);
        assert_eq!(probe.probe(Address::new(0x11000)), ProbeResult::Unmapped);
        assert_eq!(probe.probe(Address::NULL), ProbeResult::Unmapped);
    }

    #[test]
    fn test_queries_page_base_only() {
        let space = FakeSpace::new(4096).with_page(0x10000, b"");
        let probe = PageProbe::new(&space, &space);

        probe.probe(Address::new(0x10abc));
        probe.probe(Address::new(0x10001));
        assert_eq!(space.queried_bases(), vec![0x10000, 0x10000]);
        assert!(space.queried_lengths().iter().all(|&l| l == 4096));
    }

    #[test]
    fn test_indeterminate_fails_closed() {
        crate::kprint::set_log_level(crate::kprint::LogLevel::Off);
        let space = FakeSpace::new(4096)
            .with_page(0x10000, b"")
            .with_failing_page(0x20000, 13);
        let probe = PageProbe::new(&space, &space);

        assert_eq!(probe.inspect(Address::new(0x20010)), ProbeResult::Indeterminate(13));
        assert_eq!(probe.probe(Address::new(0x20010)), ProbeResult::Unmapped);
        assert_eq!(
            probe.inspect(Address::new(0x20010)).error(),
            Some(ProbeError::IndeterminateProbe(13))
        );
        assert_eq!(probe.inspect(Address::new(0x10000)).error(), None);
    }

    #[test]
    fn test_missing_page_size_fails_closed() {
        crate::kprint::set_log_level(crate::kprint::LogLevel::Off);
        let space = FakeSpace::new(4096).with_page(0x10000, b"Hi\0");
        let probe = PageProbe::new(&space, FailingPageSize);

        assert_eq!(probe.page_size(), None);
        assert_eq!(probe.probe(Address::new(0x10000)), ProbeResult::Unmapped);
        assert_eq!(probe.inspect(Address::new(0x10000)), ProbeResult::Unmapped);
        // No range query is issued without a page size
        assert_eq!(probe.probe_count(), 0);
        assert!(space.queried_bases().is_empty());
    }

    #[test]
    fn test_probe_count() {
        let space = FakeSpace::new(4096).with_page(0x10000, b"");
        let probe = PageProbe::new(&space, &space);
        for i in 0..5 {
            probe.probe(Address::new(0x10000 + i));
        }
        assert_eq!(probe.probe_count(), 5);
    }

    #[test]
    fn test_result_helpers() {
        assert!(ProbeResult::Mapped.is_mapped());
        assert!(!ProbeResult::Unmapped.is_mapped());
        assert!(!ProbeResult::Indeterminate(1).is_mapped());
        assert_eq!(ProbeResult::Indeterminate(1).fail_closed(), ProbeResult::Unmapped);
        assert_eq!(ProbeResult::Mapped.fail_closed(), ProbeResult::Mapped);
        assert_eq!(ProbeResult::from(QueryStatus::Failed(5)), ProbeResult::Indeterminate(5));
    }
}
