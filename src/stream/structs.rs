/// Reusable-buffer stream copier.
pub mod stream_copier;

/// Remaining-time bookkeeping for blocking waits.
pub mod wait_budget;

/// Closure adapter implementing `ChunkFilter`.
pub mod fn_filter;
