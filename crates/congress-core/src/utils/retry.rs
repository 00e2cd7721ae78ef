use crate::config::Config;
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

// Upper bound for a single computed delay; Retry-After values are not capped.
const MAX_BACKOFF_DELAY: Duration = Duration::from_secs(3600);

/// Retry configuration for rate-limited requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first 429 response
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: config.retry_base_delay,
        }
    }

    /// Fresh backoff schedule for one request: base, base*2, base*4, ...
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            current_interval: self.base_delay,
            initial_interval: self.base_delay,
            randomization_factor: 0.0,
            multiplier: 2.0,
            max_interval: MAX_BACKOFF_DELAY,
            max_elapsed_time: None,
            ..Default::default()
        }
    }

    /// Delay before the next retry. The schedule always advances so that the
    /// computed delay for attempt `i` stays `base * 2^i` even when earlier
    /// attempts were governed by Retry-After.
    pub fn next_delay(
        &self,
        backoff: &mut ExponentialBackoff,
        retry_after: Option<Duration>,
    ) -> Duration {
        let computed = backoff.next_backoff().unwrap_or(MAX_BACKOFF_DELAY);
        retry_after.unwrap_or(computed)
    }

    /// Delay for a zero-based attempt, without consuming a schedule
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay
            .checked_mul(2u32.saturating_pow(attempt))
            .map_or(MAX_BACKOFF_DELAY, |d| d.min(MAX_BACKOFF_DELAY))
    }
}

/// Parse a Retry-After header given as a number of seconds.
///
/// HTTP-date values and anything non-numeric are ignored.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?;
    let secs = raw.trim().parse::<f64>().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}

/// Cooperative sleep used between retries
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
