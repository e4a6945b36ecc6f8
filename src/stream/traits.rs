/// Per-chunk transform with an end-of-stream flush.
pub mod chunk_filter;

/// Access to a pollable descriptor for readiness waits.
pub mod io_ready;
