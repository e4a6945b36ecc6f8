use std::time::{Duration, Instant};

/// What is left of `budget` after the time spent since `started`.
pub fn remaining_budget(started: Instant, budget: Duration) -> Duration {
    budget.saturating_sub(started.elapsed())
}

pub fn duration_from_millis(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Finds the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
