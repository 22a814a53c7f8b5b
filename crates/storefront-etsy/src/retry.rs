//! Retry state machine for Etsy requests.
//!
//! Every request runs through a [`RetryState`]. After each attempt the state
//! classifies the outcome and decides whether to finish, wait and retry, or
//! fail. The classification:
//!
//! | Outcome               | Retried | Delay                                            |
//! |-----------------------|---------|--------------------------------------------------|
//! | transport failure     | yes     | network backoff                                  |
//! | 429                   | yes     | `Retry-After` seconds (capped), else 429 backoff |
//! | 5xx                   | yes     | network backoff                                  |
//! | 404                   | no      |                                                  |
//! | other non-2xx         | no      |                                                  |
//!
//! Backoff is `min(base * 2^retry, max)` where `retry` counts retries already
//! made. Once `max_retries` retries are spent the last transient outcome
//! becomes the final error.

use std::fmt;
use std::time::Duration;

use crate::config::EtsyClientConfig;
use crate::error::{EtsyError, EtsyResult};
use crate::http::RawResponse;

/// Exponential backoff with a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base: Duration,
    pub max: Duration,
}

impl Backoff {
    pub const fn new(base: Duration, max: Duration) -> Self {
        Self { base, max }
    }

    /// Delay before the retry following `retry` earlier retries.
    pub fn delay(self, retry: u32) -> Duration {
        2_u32
            .checked_pow(retry)
            .and_then(|factor| self.base.checked_mul(factor))
            .map_or(self.max, |delay| delay.min(self.max))
    }
}

/// Retry limits and backoff curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub network: Backoff,
    pub rate_limit: Backoff,
    /// Ceiling applied to server-requested `Retry-After` waits
    pub max_retry_after: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &EtsyClientConfig) -> Self {
        Self {
            max_retries: u32::from(config.max_retries),
            network: Backoff::new(config.network_base_delay, config.network_max_delay),
            rate_limit: Backoff::new(config.rate_limit_base_delay, config.rate_limit_max_delay),
            max_retry_after: config.max_retry_after,
        }
    }

    /// Start tracking a new request.
    pub const fn start(self) -> RetryState {
        RetryState {
            policy: self,
            retries: 0,
        }
    }
}

/// Why an attempt is being retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReason {
    Network(String),
    RateLimited,
    ServerError(u16),
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::RateLimited => f.write_str("rate limited"),
            Self::ServerError(status) => write!(f, "server error {status}"),
        }
    }
}

/// What to do after an attempt.
#[derive(Debug)]
pub enum Decision {
    /// The request succeeded with this body.
    Done(String),
    /// Sleep for `delay`, then try again.
    Retry {
        delay: Duration,
        reason: RetryReason,
    },
    /// Give up with this error.
    Fail(EtsyError),
}

/// Per-request retry bookkeeping.
#[derive(Debug)]
pub struct RetryState {
    policy: RetryPolicy,
    retries: u32,
}

impl RetryState {
    /// Attempts made so far, once the current attempt is classified.
    pub const fn attempts(&self) -> u32 {
        self.retries + 1
    }

    /// Classify the outcome of the latest attempt against `path`.
    pub fn next(&mut self, outcome: EtsyResult<RawResponse>, path: &str) -> Decision {
        let can_retry = self.retries < self.policy.max_retries;

        let decision = match outcome {
            Err(EtsyError::Transport { message }) => {
                if can_retry {
                    Decision::Retry {
                        delay: self.policy.network.delay(self.retries),
                        reason: RetryReason::Network(message),
                    }
                } else {
                    Decision::Fail(EtsyError::Network {
                        attempts: self.attempts(),
                        message,
                    })
                }
            }
            Err(other) => Decision::Fail(other),
            Ok(response) if response.is_success() => Decision::Done(response.body),
            Ok(response) if response.status == 429 => {
                if can_retry {
                    let delay = parse_retry_after(response.retry_after.as_deref())
                        .map(|wait| wait.min(self.policy.max_retry_after))
                        .unwrap_or_else(|| self.policy.rate_limit.delay(self.retries));
                    Decision::Retry {
                        delay,
                        reason: RetryReason::RateLimited,
                    }
                } else {
                    Decision::Fail(EtsyError::RateLimited {
                        attempts: self.attempts(),
                    })
                }
            }
            Ok(response) if response.status == 404 => Decision::Fail(EtsyError::NotFound {
                path: path.to_string(),
            }),
            Ok(response) if response.status >= 500 && can_retry => Decision::Retry {
                delay: self.policy.network.delay(self.retries),
                reason: RetryReason::ServerError(response.status),
            },
            Ok(response) => Decision::Fail(EtsyError::ApiRequestFailed {
                status: response.status,
                body: response.body,
            }),
        };

        if matches!(decision, Decision::Retry { .. }) {
            self.retries += 1;
        }
        decision
    }
}

/// Parse a `Retry-After` value given in whole seconds.
///
/// HTTP-date values are not supported and yield `None`.
pub fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    value?.trim().parse::<u64>().ok().map(Duration::from_secs)
}
