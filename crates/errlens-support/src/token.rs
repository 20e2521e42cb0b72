//! Access-token expiry arithmetic
//!
//! A token is issued at an instant with a lifetime in seconds. A refresh skew
//! makes the token count as due for refresh slightly before it actually
//! expires. All queries take `now` explicitly; pair with
//! [`errlens_core_types::Clock`] to source it.

use chrono::{DateTime, TimeDelta, Utc};

use crate::errors::{Result, SupportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenExpiry {
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    skew: TimeDelta,
}

impl TokenExpiry {
    /// # Errors
    ///
    /// Returns `SupportError::InvalidLifetime` if `expires_in_secs` is negative
    /// or the expiry instant falls outside the representable range.
    pub fn new(issued_at: DateTime<Utc>, expires_in_secs: i64) -> Result<Self> {
        if expires_in_secs < 0 {
            return Err(SupportError::InvalidLifetime {
                reason: format!("lifetime {}s is negative", expires_in_secs),
            });
        }
        let expires_at = TimeDelta::try_seconds(expires_in_secs)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| SupportError::InvalidLifetime {
                reason: format!("lifetime {}s overflows", expires_in_secs),
            })?;

        Ok(Self {
            issued_at,
            expires_at,
            skew: TimeDelta::zero(),
        })
    }

    /// Refresh this many seconds ahead of expiry; negative values count as zero
    #[must_use]
    pub fn with_skew(mut self, secs: i64) -> Self {
        self.skew = TimeDelta::try_seconds(secs.max(0)).unwrap_or(TimeDelta::MAX);
        self
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// True once `now + skew` reaches the expiry instant
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        match now.checked_add_signed(self.skew) {
            Some(shifted) => shifted >= self.expires_at,
            None => true,
        }
    }

    /// Time left before expiry, never negative
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.expires_at - now).max(TimeDelta::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issued() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn at(secs_after: i64) -> DateTime<Utc> {
        issued() + TimeDelta::seconds(secs_after)
    }

    #[test]
    fn test_expiry_boundaries() {
        let token = TokenExpiry::new(issued(), 3600).unwrap();

        assert_eq!(token.expires_at(), at(3600));
        assert!(!token.is_expired(at(3599)));
        assert!(token.is_expired(at(3600)));
        assert!(token.is_expired(at(7200)));
    }

    #[test]
    fn test_refresh_with_skew() {
        let token = TokenExpiry::new(issued(), 3600).unwrap().with_skew(60);

        assert!(!token.needs_refresh(at(3539)));
        assert!(token.needs_refresh(at(3540)));
        assert!(!token.is_expired(at(3540)));
    }

    #[test]
    fn test_refresh_without_skew_matches_expiry() {
        let token = TokenExpiry::new(issued(), 10).unwrap();
        assert!(!token.needs_refresh(at(9)));
        assert!(token.needs_refresh(at(10)));
    }

    #[test]
    fn test_negative_skew_is_clamped() {
        let token = TokenExpiry::new(issued(), 10).unwrap().with_skew(-30);
        assert!(!token.needs_refresh(at(9)));
    }

    #[test]
    fn test_remaining_clamped_at_zero() {
        let token = TokenExpiry::new(issued(), 300).unwrap();

        assert_eq!(token.remaining(at(100)), TimeDelta::seconds(200));
        assert_eq!(token.remaining(at(300)), TimeDelta::zero());
        assert_eq!(token.remaining(at(1000)), TimeDelta::zero());
    }

    #[test]
    fn test_zero_lifetime_is_immediately_expired() {
        let token = TokenExpiry::new(issued(), 0).unwrap();
        assert!(token.is_expired(issued()));
    }

    #[test]
    fn test_negative_lifetime_rejected() {
        let err = TokenExpiry::new(issued(), -1).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_LIFETIME");
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_overflowing_lifetime_rejected() {
        let err = TokenExpiry::new(issued(), i64::MAX).unwrap_err();
        assert!(matches!(err, SupportError::InvalidLifetime { .. }));
    }
}
