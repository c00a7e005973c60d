use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

pub mod assets;
pub mod persistence;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);
static ROW_ID: AtomicU64 = AtomicU64::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Numeric ids for comparison rows; stable for the row's lifetime and unique
/// within the process.
pub fn next_row_id() -> u64 {
    ROW_ID.fetch_add(1, Ordering::Relaxed)
}

/// Moves the row id counter past `through`, so rows loaded from a saved
/// comparison never collide with rows created afterwards.
pub fn reserve_row_ids(through: u64) {
    ROW_ID.fetch_max(through + 1, Ordering::Relaxed);
}
