use std::time::Duration;

/// Races non-blocking `HEAD` requests against candidate storage URLs.
///
/// `expect` is the status code prefix a response line must carry
/// (`HTTP/x.y <expect> `) and `budget` bounds the whole race.
#[derive(Debug, Clone)]
pub struct LivenessProber {
    pub expect: String,
    pub budget: Duration,
}
