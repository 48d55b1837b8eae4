//! Size Estimation Module
//!
//! All capacity accounting uses the byte length of a payload's compact JSON
//! form. This is an estimate for relative capacity decisions, not a measure
//! of heap usage.

use std::io;

use serde::Serialize;
use tracing::warn;

use super::Payload;

/// Writer that only counts the bytes it is given.
#[derive(Debug, Default)]
struct ByteCounter {
    count: usize,
}

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// == Estimate Size ==
/// Returns the length in bytes of `payload` serialized as compact JSON.
///
/// The payload is streamed into a counter so no intermediate buffer is
/// allocated.
pub fn estimate_size(payload: &Payload) -> u64 {
    serialized_len(payload)
}

/// Compact JSON length of any serializable value. A value that fails to
/// serialize is logged and counts as 0 bytes.
fn serialized_len<T: Serialize + ?Sized>(value: &T) -> u64 {
    let mut counter = ByteCounter::default();
    match serde_json::to_writer(&mut counter, value) {
        Ok(()) => counter.count as u64,
        Err(e) => {
            warn!(error = %e, "Failed to measure payload; counting it as 0 bytes");
            0
        }
    }
}
