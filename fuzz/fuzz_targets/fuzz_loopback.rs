//! Fuzz target: loopback buffer write/read sequences
//!
//! Splits the input into alternating write/read operations and asserts:
//! - No panics, no out-of-bounds access for any sequence
//! - Stored length never exceeds capacity
//! - A read returns exactly what the preceding write stored, once
//!
//! cargo fuzz run fuzz_loopback

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermoled::adapters::loopback::{LoopbackBuffer, LOOPBACK_CAPACITY};

fuzz_target!(|data: &[u8]| {
    let mut dev = LoopbackBuffer::new();
    let mut out = vec![0u8; LOOPBACK_CAPACITY + 32];

    for chunk in data.chunks(97) {
        let stored = dev.write(chunk);
        assert!(stored <= LOOPBACK_CAPACITY, "stored length is capped");
        assert_eq!(stored, chunk.len().min(LOOPBACK_CAPACITY));

        let read = dev.read(&mut out);
        assert_eq!(read, stored, "one read drains exactly what was stored");
        assert_eq!(&out[..read], &chunk[..read]);
        assert_eq!(dev.read(&mut out), 0, "device is read-once");
    }

    // Open/release cycling with interleaved traffic stays consistent.
    assert!(dev.open().is_ok());
    assert!(dev.open().is_err(), "second open must report busy");
    dev.release();
    assert!(dev.open().is_ok());
});
