//! Transient, self-expiring error notices.
//!
//! The engine never schedules timers. A notice only records when it was
//! raised and how long it stays visible; whoever renders it decides when to
//! drop it.

use super::error::CalcError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Error message shown to the user for a limited time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub error: CalcError,
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ErrorNotice {
    /// Raise a notice for `error` at `now`, visible for `ttl`.
    pub fn raise(error: CalcError, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            error,
            message: error.to_string(),
            raised_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Visibility left at `now`; zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_ttl() {
        let now = Utc::now();
        let notice = ErrorNotice::raise(CalcError::DivideByZero, now, Duration::seconds(3));

        assert_eq!(notice.message, "Cannot divide by zero");
        assert_eq!(notice.error, CalcError::DivideByZero);
        assert!(!notice.is_expired(now));
        assert!(!notice.is_expired(now + Duration::milliseconds(2_999)));
        assert!(notice.is_expired(now + Duration::seconds(3)));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let now = Utc::now();
        let notice = ErrorNotice::raise(CalcError::InvalidInput, now, Duration::seconds(3));

        assert_eq!(notice.remaining(now + Duration::seconds(1)), Duration::seconds(2));
        assert_eq!(notice.remaining(now + Duration::seconds(10)), Duration::zero());
    }
}
