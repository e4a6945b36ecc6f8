/// Crate-wide error enumeration.
pub mod mogile_error;
