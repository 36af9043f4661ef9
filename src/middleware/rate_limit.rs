//! Rate limiting middleware
//!
//! Sliding-window limiter used to throttle admin login attempts per e-mail.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::config::AdminConfig;
use crate::utils::errors::{PortalError, Result};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum attempts per window
    pub max_requests: u32,
    /// Time window duration
    pub window_duration: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_duration: Duration::from_secs(300),
        }
    }
}

impl From<&AdminConfig> for RateLimitConfig {
    fn from(config: &AdminConfig) -> Self {
        Self {
            max_requests: config.login_max_attempts,
            window_duration: Duration::from_secs(config.login_window_seconds),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct RateLimitEntry {
    requests: Vec<Instant>,
}

impl RateLimitEntry {
    /// Drop attempts outside the window
    fn cleanup(&mut self, window_duration: Duration, now: Instant) {
        self.requests
            .retain(|&time| now.saturating_duration_since(time) < window_duration);
    }

    fn is_allowed(&mut self, config: &RateLimitConfig, now: Instant) -> bool {
        self.cleanup(config.window_duration, now);
        (self.requests.len() as u32) < config.max_requests
    }

    fn oldest(&self) -> Option<Instant> {
        self.requests.iter().min().copied()
    }
}

/// Rate limiting middleware keyed by an arbitrary string (e-mail, IP, ...)
#[derive(Debug, Clone)]
pub struct RateLimitMiddleware {
    config: RateLimitConfig,
    entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
}

impl RateLimitMiddleware {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, RateLimitEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record an attempt for `key`, failing when the window is exhausted
    ///
    /// Rejected attempts are not recorded.
    pub fn check_rate_limit(&self, key: &str) -> Result<()> {
        let now = Instant::now();
        let mut entries = self.entries();
        let entry = entries.entry(key.to_string()).or_default();

        if entry.is_allowed(&self.config, now) {
            entry.requests.push(now);
            debug!(key = %key, attempts = entry.requests.len(), "Rate limit check passed");
            Ok(())
        } else {
            warn!(key = %key, "Rate limit exceeded");
            Err(PortalError::RateLimitExceeded)
        }
    }

    /// Whether the next attempt for `key` would be rejected
    pub fn is_limited(&self, key: &str) -> bool {
        let status = self.get_rate_limit_status(key);
        status.remaining == 0
    }

    pub fn get_rate_limit_status(&self, key: &str) -> RateLimitStatus {
        let now = Instant::now();
        let entries = self.entries();

        let (current_requests, reset_time) = match entries.get(key) {
            Some(entry) => {
                let mut entry = entry.clone();
                entry.cleanup(self.config.window_duration, now);
                let reset = entry
                    .oldest()
                    .map_or(now, |oldest| oldest + self.config.window_duration);
                (entry.requests.len() as u32, reset)
            }
            None => (0, now),
        };

        RateLimitStatus {
            current_requests,
            max_requests: self.config.max_requests,
            remaining: self.config.max_requests.saturating_sub(current_requests),
            window_duration: self.config.window_duration,
            reset_time,
        }
    }

    /// Forget all attempts for `key`, e.g. after a successful login
    pub fn clear(&self, key: &str) -> bool {
        let removed = self.entries().remove(key).is_some();
        if removed {
            info!(key = %key, "Rate limit cleared");
        }
        removed
    }

    pub fn clear_all(&self) -> usize {
        let mut entries = self.entries();
        let count = entries.len();
        entries.clear();
        info!(cleared_count = count, "All rate limits cleared");
        count
    }

    /// Drop keys with no attempt inside the window
    pub fn cleanup_old_entries(&self) {
        let now = Instant::now();
        let window = self.config.window_duration;
        let mut entries = self.entries();
        entries.retain(|_, entry| {
            entry.cleanup(window, now);
            !entry.requests.is_empty()
        });
        debug!(remaining_entries = entries.len(), "Cleaned up old rate limit entries");
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

impl Default for RateLimitMiddleware {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

/// Rate limit status for a key
#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    pub current_requests: u32,
    pub max_requests: u32,
    pub remaining: u32,
    pub window_duration: Duration,
    /// When the oldest attempt leaves the window
    pub reset_time: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixth_attempt_is_blocked() {
        let limiter = RateLimitMiddleware::default();

        for _ in 0..5 {
            assert!(limiter.check_rate_limit("admin@example.com").is_ok());
        }
        assert!(matches!(
            limiter.check_rate_limit("admin@example.com"),
            Err(PortalError::RateLimitExceeded)
        ));
        assert!(limiter.is_limited("admin@example.com"));

        // Other keys are independent
        assert!(limiter.check_rate_limit("other@example.com").is_ok());
    }

    #[test]
    fn test_rejected_attempts_are_not_recorded() {
        let limiter = RateLimitMiddleware::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
        });
        limiter.check_rate_limit("a").unwrap();
        assert!(limiter.check_rate_limit("a").is_err());
        assert!(limiter.check_rate_limit("a").is_err());
        assert_eq!(limiter.get_rate_limit_status("a").current_requests, 1);
    }

    #[test]
    fn test_clear_resets_key() {
        let limiter = RateLimitMiddleware::new(RateLimitConfig {
            max_requests: 2,
            window_duration: Duration::from_secs(60),
        });
        limiter.check_rate_limit("a").unwrap();
        limiter.check_rate_limit("a").unwrap();
        assert!(limiter.is_limited("a"));

        assert!(limiter.clear("a"));
        assert!(!limiter.clear("a"));
        assert_eq!(limiter.get_rate_limit_status("a").remaining, 2);
    }

    #[test]
    fn test_window_expiry() {
        let limiter = RateLimitMiddleware::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_millis(30),
        });
        limiter.check_rate_limit("a").unwrap();
        assert!(limiter.check_rate_limit("a").is_err());

        std::thread::sleep(Duration::from_millis(50));
        assert!(limiter.check_rate_limit("a").is_ok());

        std::thread::sleep(Duration::from_millis(50));
        limiter.cleanup_old_entries();
        assert_eq!(limiter.clear_all(), 0);
    }

    #[test]
    fn test_config_from_admin_settings() {
        let admin = AdminConfig {
            page_size: 5,
            login_max_attempts: 3,
            login_window_seconds: 120,
            required_role: None,
        };
        let config = RateLimitConfig::from(&admin);
        assert_eq!(config.max_requests, 3);
        assert_eq!(config.window_duration, Duration::from_secs(120));
    }
}
