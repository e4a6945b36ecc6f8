/// `StreamCopier` construction and copy loop.
pub mod stream_copier;

/// `WaitBudget` waits and deadline checks.
pub mod wait_budget;

/// `ChunkFilter` for `FnFilter`.
pub mod fn_filter;

/// `IoReady` for std streams.
pub mod io_ready;
