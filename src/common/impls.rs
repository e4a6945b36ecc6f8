/// Accessors on [`MogileError`](crate::common::enums::mogile_error::MogileError).
pub mod mogile_error;
