//! String-or-integer dispatch
//!
//! An address that starts a printable string within the horizon is shown as
//! text; anything else is shown as its bit pattern in signed decimal.

use crate::address::Address;
use crate::sniff::StringSniffer;
use crate::traits::{ByteReader, MemoryProbe};

/// How an opaque address should be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Readable text starting at the address
    Text { bytes: Vec<u8>, len: usize },
    /// The address's bit pattern as a signed integer
    Integer(i64),
}

impl Classified {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Classified::Text { .. })
    }
}

/// Applies the dispatch policy on top of a `StringSniffer`
pub struct Classifier<P, R> {
    sniffer: StringSniffer<P, R>,
}

impl<P: MemoryProbe, R: ByteReader> Classifier<P, R> {
    pub fn new(sniffer: StringSniffer<P, R>) -> Self {
        Self { sniffer }
    }

    #[inline]
    pub fn sniffer(&self) -> &StringSniffer<P, R> {
        &self.sniffer
    }

    pub fn classify(&self, address: Address) -> Classified {
        match self.sniffer.sniff_bytes(address) {
            Some(bytes) => {
                let len = bytes.len();
                Classified::Text { bytes, len }
            }
            None => Classified::Integer(address.as_bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::PageProbe;
    use crate::sniff::DEFAULT_HORIZON;
    use crate::testing::FakeSpace;

    fn classifier(space: &FakeSpace) -> Classifier<PageProbe<&FakeSpace, &FakeSpace>, &FakeSpace> {
        Classifier::new(StringSniffer::new(PageProbe::new(space, space), space, DEFAULT_HORIZON))
    }

    #[test]
    fn test_text() {
        let space = FakeSpace::new(4096).with_page(0x10000, &[72, 105, 0]);
        let c = classifier(&space);

        let got = c.classify(Address::new(0x10000));
        assert_eq!(got, Classified::Text { bytes: b"Hi".to_vec(), len: 2 });
        assert!(got.is_text());
    }

    #[test]
    fn test_non_printable_is_integer() {
        let space = FakeSpace::new(4096).with_page(0x10000, &[200, 0]);
        let c = classifier(&space);

        assert_eq!(c.classify(Address::new(0x10000)), Classified::Integer(0x10000));
    }

    #[test]
    fn test_unmapped_is_integer() {
        let space = FakeSpace::new(4096);
        let c = classifier(&space);

        assert_eq!(c.classify(Address::new(100000)), Classified::Integer(100000));
        let neg = Address::from_bits(-12345678910);
        assert_eq!(c.classify(neg), Classified::Integer(-12345678910));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let space = FakeSpace::new(4096)
            .with_page(0x10000, b"stable\0")
            .with_page(0x20000, &[1, 2, 3]);
        let c = classifier(&space);

        for addr in [0x10000, 0x10003, 0x20000, 0x30000] {
            let first = c.classify(Address::new(addr));
            let second = c.classify(Address::new(addr));
            assert_eq!(first, second);
        }
        assert_eq!(
            c.classify(Address::new(0x10003)),
            Classified::Text { bytes: b"ble".to_vec(), len: 3 }
        );
    }
}
