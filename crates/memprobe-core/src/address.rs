//! Opaque machine-word addresses
//!
//! An `Address` is a bit pattern. Nothing in this module dereferences it;
//! reads go through the probe/scan protocol in `sniff`.

use core::fmt;

use crate::page::PageSize;

/// An untrusted, possibly invalid, machine-word-sized address
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Address(usize);

impl Address {
    /// The null address
    pub const NULL: Address = Address(0);

    #[inline]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Take the address of a pointer without touching the pointee
    #[inline]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }

    /// Reinterpret a signed bit pattern as an address
    ///
    /// Sign-extends on 64-bit targets, truncates on narrower ones, matching
    /// a C cast from `int64_t` to `void*`.
    #[inline]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits as isize as usize)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Bit pattern as a signed integer, for the integer display path
    #[inline]
    pub const fn as_bits(self) -> i64 {
        self.0 as isize as i64
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Base of the page containing this address
    #[inline]
    pub const fn page_base(self, page: PageSize) -> Address {
        Address(self.0 & !(page.get() - 1))
    }

    /// `self + offset`, or `None` past the end of the address space
    #[inline]
    pub const fn checked_add(self, offset: usize) -> Option<Address> {
        match self.0.checked_add(offset) {
            Some(raw) => Some(Address(raw)),
            None => None,
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for Address {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl<T> From<*const T> for Address {
    fn from(ptr: *const T) -> Self {
        Self::from_ptr(ptr)
    }
}
