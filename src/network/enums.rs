/// Read or write readiness.
pub mod interest;
