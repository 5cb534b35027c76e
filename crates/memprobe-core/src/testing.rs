//! In-memory fake address space for tests
//!
//! Pages are explicit; anything not added is unmapped. Reading a byte on an
//! unmapped page panics, which stands in for the fault a real read would
//! raise.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::address::Address;
use crate::error::{ProbeError, Result};
use crate::probe::QueryStatus;
use crate::traits::{ByteReader, PageSizeSource, RangeQuery};

pub struct FakeSpace {
    page_size: usize,
    pages: BTreeMap<usize, Vec<u8>>,
    failing: BTreeMap<usize, i32>,
    queries: Mutex<Vec<(usize, usize)>>,
    reads: Mutex<Vec<usize>>,
}

impl FakeSpace {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pages: BTreeMap::new(),
            failing: BTreeMap::new(),
            queries: Mutex::new(Vec::new()),
            reads: Mutex::new(Vec::new()),
        }
    }

    fn base_of(&self, addr: usize) -> usize {
        addr - addr % self.page_size
    }

    /// Map the page at `base` (zero-filled) with `bytes` at its start
    pub fn with_page(self, base: usize, bytes: &[u8]) -> Self {
        self.with_bytes(base, bytes)
    }

    /// Map every page touched by `[addr, addr + bytes.len())` and write `bytes`
    pub fn with_bytes(mut self, addr: usize, bytes: &[u8]) -> Self {
        let first = self.base_of(addr);
        let last = self.base_of(addr + (bytes.len().max(1) - 1));
        let mut base = first;
        loop {
            let size = self.page_size;
            self.pages.entry(base).or_insert_with(|| vec![0; size]);
            if base == last {
                break;
            }
            base += self.page_size;
        }
        for (i, &b) in bytes.iter().enumerate() {
            let at = addr + i;
            let base = self.base_of(at);
            if let Some(page) = self.pages.get_mut(&base) {
                page[at - base] = b;
            }
        }
        self
    }

    /// Make the range query on this page fail with `errno`
    pub fn with_failing_page(mut self, base: usize, errno: i32) -> Self {
        self.failing.insert(base, errno);
        self
    }

    pub fn queried_bases(&self) -> Vec<usize> {
        self.queries.lock().unwrap().iter().map(|&(b, _)| b).collect()
    }

    pub fn queried_lengths(&self) -> Vec<usize> {
        self.queries.lock().unwrap().iter().map(|&(_, l)| l).collect()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn reads(&self) -> Vec<usize> {
        self.reads.lock().unwrap().clone()
    }
}

impl PageSizeSource for FakeSpace {
    fn query_page_size(&self) -> Result<usize> {
        Ok(self.page_size)
    }
}

impl RangeQuery for FakeSpace {
    fn query_range(&self, base: Address, len: usize) -> QueryStatus {
        self.queries.lock().unwrap().push((base.get(), len));
        if let Some(&errno) = self.failing.get(&base.get()) {
            return QueryStatus::Failed(errno);
        }
        if self.pages.contains_key(&base.get()) {
            QueryStatus::Ok
        } else {
            QueryStatus::NotMapped
        }
    }
}

// SAFETY: reads only from owned `Vec`s; panics instead of faulting.
unsafe impl ByteReader for FakeSpace {
    unsafe fn read_byte(&self, address: Address) -> u8 {
        let addr = address.get();
        self.reads.lock().unwrap().push(addr);
        let base = self.base_of(addr);
        match self.pages.get(&base) {
            Some(page) => page[addr - base],
            None => panic!("read of unmapped address {:#x}", addr),
        }
    }
}

/// Page size source that always fails
pub struct FailingPageSize;

impl PageSizeSource for FailingPageSize {
    fn query_page_size(&self) -> Result<usize> {
        Err(ProbeError::PageSizeUnavailable(0))
    }
}
