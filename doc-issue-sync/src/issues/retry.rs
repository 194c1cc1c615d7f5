//! Retry policy for issue creation.

use serde::Deserialize;
use std::time::Duration;

/// How often, and how patiently, a failed create-issue request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RetryPolicy {
    /// A single attempt.
    None,

    /// Up to `max_attempts` attempts with linearly growing delays:
    /// `base_delay_ms`, `2 * base_delay_ms`, ...
    Bounded {
        #[serde(rename = "max-attempts")]
        max_attempts: u32,
        #[serde(rename = "base-delay-ms")]
        base_delay_ms: u64,
    },
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Bounded {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Total number of attempts allowed.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        match self {
            Self::None => 1,
            Self::Bounded { max_attempts, .. } => *max_attempts,
        }
    }

    /// Delay after the failed attempt with zero-based index `attempt`.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Bounded { base_delay_ms, .. } => {
                Duration::from_millis(base_delay_ms.saturating_mul(u64::from(attempt) + 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delays_are_linear() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay_after(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(1), Duration::from_millis(2000));
    }

    #[test]
    fn none_is_single_attempt() {
        assert_eq!(RetryPolicy::None.max_attempts(), 1);
        assert_eq!(RetryPolicy::None.delay_after(0), Duration::ZERO);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        retry: RetryPolicy,
    }

    #[test]
    fn can_deserialize() {
        let bounded: Wrapper = toml::from_str(
            r#"
[retry]
kind = "bounded"
max-attempts = 5
base-delay-ms = 250
"#,
        )
        .unwrap();
        assert_eq!(
            bounded.retry,
            RetryPolicy::Bounded {
                max_attempts: 5,
                base_delay_ms: 250
            }
        );

        let none: Wrapper = toml::from_str("retry = { kind = \"none\" }").unwrap();
        assert_eq!(none.retry, RetryPolicy::None);
    }
}
