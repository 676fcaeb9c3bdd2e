//! Clock helpers. Note windows derive their ids from these timestamps.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_ISSUED_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a millisecond timestamp strictly greater than any previously issued on this thread.
///
/// Two windows created inside the same millisecond still get distinct values.
pub fn next_unique_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ISSUED_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_timestamps_strictly_increase() {
        let a = next_unique_timestamp_ms();
        let b = next_unique_timestamp_ms();
        let c = next_unique_timestamp_ms();
        assert!(a < b && b < c);
    }
}
