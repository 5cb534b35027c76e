//! Dump demo
//!
//! Renders a fixed negative integer through the decimal writer. With
//! `MEMPROBE_DEMO=1` it also dumps a string literal and a (most likely)
//! unmapped address, exercising both sides of the dispatch policy.
//!
//! # Environment Variables
//!
//! - `MEMPROBE_DEMO=1` - Run the string/unmapped demos as well
//! - `MEMPROBE_LOG_LEVEL=debug` - Show probe diagnostics on stderr

use memprobe::{dump, dump_i, dump_str, kdebug, kerror, Address};
use memprobe::env::env_get_bool;

// MEMPROBE_DEMO=1 MEMPROBE_LOG_LEVEL=debug cargo run -p memprobe-dump
fn main() {
    if let Err(e) = run() {
        kerror!("dump failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> std::io::Result<()> {
    dump_i(-12345678910)?;

    if env_get_bool("MEMPROBE_DEMO", false) {
        dump_str("\n")?;

        let unmapped = Address::new(100000);
        kdebug!("dumping {}", unmapped);
        dump(unmapped)?;
        dump_str("\n")?;

        let greeting = b"Goodbye, World!\0";
        dump(Address::from_ptr(greeting.as_ptr()))?;
    }

    dump_str("\n")
}
