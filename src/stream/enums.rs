/// Per-wait or cumulative timeout selection.
pub mod timeout_mode;
