#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutMode {
    /// Each individual blocking wait gets the full timeout.
    #[default]
    PerWait,
    /// The timeout covers the whole call.
    Cumulative,
}
