//! Leaf display writers
//!
//! Raw output helpers for the dispatch policy: signed decimal and raw bytes,
//! written straight to an `io::Write` sink without newlines or padding.

use std::io::{self, Write};

use crate::classify::Classified;

/// Enough for `i64::MIN` plus sign
const DECIMAL_BUF: usize = 32;

/// Write `value` in signed decimal
pub fn write_decimal<W: Write + ?Sized>(w: &mut W, value: i64) -> io::Result<()> {
    let mut buf = [0u8; DECIMAL_BUF];
    let mut pos = buf.len();
    // unsigned_abs keeps i64::MIN from overflowing
    let mut n = value.unsigned_abs();

    loop {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    w.write_all(&buf[pos..])
}

/// Write `bytes` unchanged
#[inline]
pub fn write_raw<W: Write + ?Sized>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    w.write_all(bytes)
}

/// Render a classification: text as raw bytes, integers in decimal
pub fn write_classified<W: Write + ?Sized>(w: &mut W, value: &Classified) -> io::Result<()> {
    match value {
        // A hand-built `len` past the end renders the whole buffer
        Classified::Text { bytes, len } => write_raw(w, bytes.get(..*len).unwrap_or(bytes)),
        Classified::Integer(bits) => write_decimal(w, *bits),
    }
}
