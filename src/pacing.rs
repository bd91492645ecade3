use std::time::Duration;
use std::u64;

use error_chain::bail;

use crate::errors::*;

/// How long drawing code should pause each time it draws a mark in a square.
///
/// Only the duration is kept here, waiting is up to the code that draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct PauseTime(Duration);

impl PauseTime {
    pub fn from_seconds(seconds: f64) -> Result<PauseTime> {
        if !seconds.is_finite() || seconds < 0.0 || seconds >= u64::MAX as f64 {
            bail!(ErrorKind::InvalidPauseTime(seconds));
        }
        Ok(PauseTime(Duration::from_secs_f64(seconds)))
    }

    #[inline]
    pub fn duration(self) -> Duration {
        self.0
    }
}
