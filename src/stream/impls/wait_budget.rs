use std::os::fd::RawFd;
use std::time::{Duration, Instant};
use crate::common::common::remaining_budget;
use crate::common::enums::mogile_error::MogileError;
use crate::network::enums::interest::Interest;
use crate::network::network::{wait_for, wait_until_ready};
use crate::stream::enums::timeout_mode::TimeoutMode;
use crate::stream::structs::wait_budget::WaitBudget;

impl WaitBudget {
    pub fn new(timeout: Option<Duration>, mode: TimeoutMode) -> WaitBudget {
        WaitBudget {
            timeout,
            mode,
            started: Instant::now(),
        }
    }

    pub fn unbounded() -> WaitBudget {
        WaitBudget::new(None, TimeoutMode::PerWait)
    }

    /// Time allowed for the next wait; `None` when unbounded.
    pub fn remaining(&self) -> Result<Option<Duration>, MogileError> {
        let Some(timeout) = self.timeout else {
            return Ok(None);
        };
        match self.mode {
            TimeoutMode::PerWait => Ok(Some(timeout)),
            TimeoutMode::Cumulative => {
                let remaining = remaining_budget(self.started, timeout);
                if remaining.is_zero() {
                    return Err(MogileError::Timeout(format!("stream transfer exceeded {:?}", timeout)));
                }
                Ok(Some(remaining))
            }
        }
    }

    pub fn check(&self) -> Result<(), MogileError> {
        self.remaining().map(|_| ())
    }

    /// Blocks until `fd` is ready for `interest` or the budget runs out.
    pub fn wait(&self, fd: Option<RawFd>, interest: Interest) -> Result<(), MogileError> {
        let remaining = self.remaining()?;
        let Some(fd) = fd else {
            std::thread::yield_now();
            return Ok(());
        };
        match remaining {
            None => Ok(wait_until_ready(fd, interest)?),
            Some(remaining) => {
                if wait_for(fd, interest, remaining)? {
                    Ok(())
                } else {
                    Err(MogileError::Timeout(format!("descriptor not {} within {:?}", interest, remaining)))
                }
            }
        }
    }
}
