//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a timestamp `offset` seconds after a fixed base time.
///
/// Message factories use this to give rows distinct, predictable creation times so
/// ordering assertions don't depend on wall-clock resolution.
///
/// # Arguments
/// - `offset` - Seconds to add to the base time
///
/// # Returns
/// - `DateTime<Utc>` - Base time plus `offset` seconds
pub fn timestamp_at(offset: i64) -> DateTime<Utc> {
    let base = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_else(Utc::now);
    base + Duration::seconds(offset)
}
