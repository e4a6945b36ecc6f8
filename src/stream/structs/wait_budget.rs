use std::time::{Duration, Instant};
use crate::stream::enums::timeout_mode::TimeoutMode;

#[derive(Debug, Clone, Copy)]
pub struct WaitBudget {
    pub(crate) timeout: Option<Duration>,
    pub(crate) mode: TimeoutMode,
    pub(crate) started: Instant,
}
