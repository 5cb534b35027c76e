//! Bounded C-string detection
//!
//! Scans forward from a candidate address one byte at a time. Every byte is
//! probed immediately before it is read; nothing is read after the first
//! unmapped or non-printable byte, and nothing past the horizon.
//!
//! The probe result is a snapshot. A page can still be unmapped between the
//! probe and the read; re-probing every byte keeps that window minimal. Do
//! not batch this into one probe followed by many reads.

use core::ops::RangeInclusive;

use crate::address::Address;
use crate::traits::{ByteReader, MemoryProbe};

/// Default scan horizon in bytes
pub const DEFAULT_HORIZON: usize = 4096;

/// Bytes accepted as string content
pub const PRINTABLE: RangeInclusive<u8> = 32..=126;

/// String terminator
pub const TERMINATOR: u8 = 0;

/// Result of a bounded scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Printable bytes followed by a terminator; length excludes the terminator
    ValidString(usize),
    NotAString,
}

impl ScanOutcome {
    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, ScanOutcome::ValidString(_))
    }

    #[inline]
    pub fn length(self) -> Option<usize> {
        match self {
            ScanOutcome::ValidString(n) => Some(n),
            ScanOutcome::NotAString => None,
        }
    }
}

/// Is `byte` displayable string content?
#[inline]
pub fn is_printable(byte: u8) -> bool {
    PRINTABLE.contains(&byte)
}

/// Scans candidate addresses for printable, null-terminated strings
pub struct StringSniffer<P, R> {
    probe: P,
    reader: R,
    horizon: usize,
}

impl<P: MemoryProbe, R: ByteReader> StringSniffer<P, R> {
    pub fn new(probe: P, reader: R, horizon: usize) -> Self {
        Self {
            probe,
            reader,
            horizon,
        }
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    #[inline]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Decide whether `address` starts a string within the horizon
    pub fn sniff(&self, address: Address) -> ScanOutcome {
        self.scan(address, |_| {})
    }

    /// Like `sniff`, but return the string's bytes (without terminator)
    ///
    /// Bytes are collected during the scan itself, so each is read exactly
    /// once, right after its probe.
    pub fn sniff_bytes(&self, address: Address) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        match self.scan(address, |b| bytes.push(b)) {
            ScanOutcome::ValidString(n) => {
                debug_assert_eq!(bytes.len(), n);
                Some(bytes)
            }
            ScanOutcome::NotAString => None,
        }
    }

    fn scan(&self, address: Address, mut sink: impl FnMut(u8)) -> ScanOutcome {
        for offset in 0..self.horizon {
            let Some(at) = address.checked_add(offset) else {
                return ScanOutcome::NotAString;
            };

            if !self.probe.probe(at).is_mapped() {
                return ScanOutcome::NotAString;
            }

            // SAFETY: `at` was reported mapped by the probe just above.
            let byte = unsafe { self.reader.read_byte(at) };

            if byte == TERMINATOR {
                return ScanOutcome::ValidString(offset);
            }
            if !is_printable(byte) {
                return ScanOutcome::NotAString;
            }
            sink(byte);
        }

        crate::ktrace!("scan from {} hit horizon {}", address, self.horizon);
        ScanOutcome::NotAString
    }
}
