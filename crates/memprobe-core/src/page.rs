//! Page size discovery
//!
//! The page size is queried once and cached for the life of the owner. A
//! failed query is cached too: the probe then fails closed forever rather
//! than guessing a size.

use std::sync::OnceLock;

use crate::error::{ProbeError, Result};
use crate::traits::PageSizeSource;

/// A validated page size: positive and a power of two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || !size.is_power_of_two() {
            return Err(ProbeError::InvalidPageSize(size));
        }
        Ok(Self(size))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Once-initialised page size cache
pub struct PageSizeCell<S> {
    source: S,
    value: OnceLock<Option<PageSize>>,
}

impl<S: PageSizeSource> PageSizeCell<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            value: OnceLock::new(),
        }
    }

    /// Cached page size, querying the source on first use
    ///
    /// `None` means the environment could not report a usable page size.
    pub fn get(&self) -> Option<PageSize> {
        *self.value.get_or_init(|| match self.discover() {
            Ok(page) => {
                crate::kdebug!("page size {}", page.get());
                Some(page)
            }
            Err(e) => {
                crate::kwarn!("{}; probing fails closed", e);
                None
            }
        })
    }

    /// Whether `get` has already run
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    fn discover(&self) -> Result<PageSize> {
        PageSize::new(self.source.query_page_size()?)
    }
}
