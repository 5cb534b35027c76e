//! Fallback for platforms without a non-faulting range query
//!
//! No page size is ever reported, so `PageProbe` fails closed for every
//! address and the range query is never reached.

use memprobe_core::error::{ProbeError, Result};
use memprobe_core::{Address, PageSizeSource, QueryStatus, RangeQuery};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullQuery;

impl RangeQuery for NullQuery {
    fn query_range(&self, _base: Address, _len: usize) -> QueryStatus {
        QueryStatus::Failed(0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoPageSize;

impl PageSizeSource for NoPageSize {
    fn query_page_size(&self) -> Result<usize> {
        Err(ProbeError::PageSizeUnavailable(0))
    }
}
