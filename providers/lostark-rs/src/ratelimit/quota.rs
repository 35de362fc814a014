//! Quota tracker for the Lost Ark rate-limit window
//!
//! Interprets the `X-RateLimit-*` and `Retry-After` headers of each response
//! and keeps the client's view of how many requests the current window still
//! allows. Pure state: time is passed in as Unix seconds, no I/O happens here.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use tracing::{info, warn};

/// Maximum requests per window
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Requests left in the current window
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Unix timestamp (seconds) at which the current window ends
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Delay used after a 429 that carries no usable `Retry-After`
const FALLBACK_RETRY_AFTER_SECS: i64 = 60;

/// Reset or retry times further ahead than this are treated as malformed
const MAX_RESET_HORIZON_SECS: i64 = 86_400;

/// Client-side view of the server's rate-limit window
///
/// `remaining + pending <= limit` holds once the state is loaded: later
/// observations are clamped against requests that are still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaState {
    limit: i64,
    remaining: i64,
    reset_at: Option<i64>,
    loaded: bool,
    pending: i64,
}

impl QuotaState {
    /// Creates an unobserved window allowing a single request
    pub fn new() -> Self {
        Self {
            limit: 1,
            remaining: 1,
            reset_at: None,
            loaded: false,
            pending: 0,
        }
    }

    /// Maximum requests per window (1 until the server reports one)
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Requests currently permitted before callers block, never negative
    pub fn remaining(&self) -> i64 {
        self.remaining.max(0)
    }

    /// Requests admitted whose responses have not been processed yet
    pub fn pending(&self) -> i64 {
        self.pending
    }

    /// Known end of the current window, in Unix seconds
    pub fn reset_at(&self) -> Option<i64> {
        self.reset_at
    }

    /// Whether `remaining` comes from a real server observation
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns true iff a reset time is known and has already passed
    pub fn is_expired(&self, now: i64) -> bool {
        self.reset_at.is_some_and(|reset_at| reset_at <= now)
    }

    /// Claims one slot of the window if any is left
    pub fn try_admit(&mut self) -> bool {
        if self.remaining <= 0 {
            return false;
        }

        self.remaining -= 1;
        self.pending += 1;
        true
    }

    /// Marks one admitted request as no longer in flight
    pub fn complete(&mut self) {
        self.pending = (self.pending - 1).max(0);
    }

    /// Updates the window from one response's status and headers
    ///
    /// Absent or unparseable headers leave the matching field untouched.
    /// A 429 overrides everything else: the window is treated as exhausted
    /// until `now + Retry-After`.
    pub fn observe(&mut self, status: StatusCode, headers: &HeaderMap, now: i64) {
        if let Some(limit) = header_i64(headers, LIMIT_HEADER) {
            self.limit = limit;
        }

        if let Some(remaining) = header_i64(headers, REMAINING_HEADER) {
            if self.loaded {
                self.remaining = remaining.min(self.limit.saturating_sub(self.pending));
            } else {
                self.remaining = remaining;
                self.loaded = true;
            }
        }

        if let Some(reset_at) = header_i64(headers, RESET_HEADER)
            .and_then(|reset_at| within_horizon(RESET_HEADER, reset_at, now))
        {
            self.reset_at = Some(reset_at);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            self.remaining = 0;
            let retry_at = header_i64(headers, RETRY_AFTER.as_str())
                .filter(|delay| *delay >= 0)
                .and_then(|delay| {
                    within_horizon(RETRY_AFTER.as_str(), now.saturating_add(delay), now)
                });
            self.reset_at = match retry_at {
                Some(retry_at) => Some(retry_at),
                None => Some(
                    self.reset_at
                        .filter(|reset_at| *reset_at > now)
                        .unwrap_or(now.saturating_add(FALLBACK_RETRY_AFTER_SECS)),
                ),
            };

            info!(
                reset_at = ?self.reset_at,
                "Unexpected rate limit exceeded, remaining capacity initialized"
            );
        } else if self.remaining == 0 {
            info!(
                limit = self.limit,
                pending = self.pending,
                reset_at = ?self.reset_at,
                "Expected to exceed rate limit, preemptive rate limiting started"
            );
        }
    }

    /// Starts a fresh window with in-flight requests already deducted
    pub fn reset(&mut self) {
        self.remaining = self.limit.saturating_sub(self.pending);
        self.reset_at = None;
        self.loaded = false;
    }
}

impl Default for QuotaState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an integer header, ignoring absent values and logging malformed ones
fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    let value = headers.get(name)?;

    match value.to_str().ok().and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(parsed) => Some(parsed),
        None => {
            warn!(header = name, value = ?value, "Ignoring malformed rate limit header");
            None
        }
    }
}

/// Rejects a reset time that lies implausibly far ahead of `now`
fn within_horizon(header: &str, at: i64, now: i64) -> Option<i64> {
    if at > now.saturating_add(MAX_RESET_HORIZON_SECS) {
        warn!(header, at, "Ignoring rate limit reset too far in the future");
        return None;
    }
    Some(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    const NOW: i64 = 1_700_000_000;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    fn loaded(limit: i64, remaining: i64) -> QuotaState {
        let mut state = QuotaState::new();
        state.observe(
            StatusCode::OK,
            &headers(&[
                ("X-RateLimit-Limit", &limit.to_string()),
                ("X-RateLimit-Remaining", &remaining.to_string()),
            ]),
            NOW,
        );
        state
    }

    #[test]
    fn test_new_state_allows_one_request() {
        let state = QuotaState::new();
        assert_eq!(state.limit(), 1);
        assert_eq!(state.remaining(), 1);
        assert_eq!(state.reset_at(), None);
        assert!(!state.is_loaded());
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_first_observation_is_trusted() {
        let state = loaded(5, 5);
        assert!(state.is_loaded());
        assert_eq!(state.limit(), 5);
        assert_eq!(state.remaining(), 5);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let mut state = QuotaState::new();
        state.observe(
            StatusCode::OK,
            &headers(&[
                ("x-ratelimit-limit", "100"),
                ("X-RATELIMIT-REMAINING", "42"),
                ("X-Ratelimit-Reset", "1700000060"),
            ]),
            NOW,
        );
        assert_eq!(state.limit(), 100);
        assert_eq!(state.remaining(), 42);
        assert_eq!(state.reset_at(), Some(1_700_000_060));
    }

    #[test]
    fn test_remaining_matching_in_flight_bound() {
        let mut state = loaded(5, 5);
        assert!(state.try_admit());
        assert!(state.try_admit());
        assert_eq!(state.pending(), 2);

        state.observe(
            StatusCode::OK,
            &headers(&[("X-RateLimit-Remaining", "3")]),
            NOW,
        );
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn test_remaining_clamped_to_in_flight_bound() {
        let mut state = loaded(5, 5);
        assert!(state.try_admit());
        assert!(state.try_admit());

        state.observe(
            StatusCode::OK,
            &headers(&[("X-RateLimit-Remaining", "4")]),
            NOW,
        );
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn test_too_many_requests_overrides_headers() {
        let mut state = loaded(100, 50);
        state.observe(
            StatusCode::TOO_MANY_REQUESTS,
            &headers(&[
                ("X-RateLimit-Remaining", "10"),
                ("X-RateLimit-Reset", "1700000999"),
                ("Retry-After", "5"),
            ]),
            NOW,
        );
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.reset_at(), Some(NOW + 5));
        assert!(!state.is_expired(NOW + 4));
        assert!(state.is_expired(NOW + 5));
    }

    #[test]
    fn test_too_many_requests_without_retry_after() {
        let mut state = loaded(100, 50);
        state.observe(StatusCode::TOO_MANY_REQUESTS, &HeaderMap::new(), NOW);
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.reset_at(), Some(NOW + FALLBACK_RETRY_AFTER_SECS));

        let mut state = loaded(100, 50);
        state.observe(
            StatusCode::TOO_MANY_REQUESTS,
            &headers(&[("X-RateLimit-Reset", "1700000030")]),
            NOW,
        );
        assert_eq!(state.reset_at(), Some(1_700_000_030));
    }

    #[test]
    fn test_missing_and_malformed_headers_keep_state() {
        let mut state = loaded(10, 7);
        state.observe(StatusCode::OK, &HeaderMap::new(), NOW);
        assert_eq!(state.limit(), 10);
        assert_eq!(state.remaining(), 7);

        state.observe(
            StatusCode::OK,
            &headers(&[
                ("X-RateLimit-Limit", "lots"),
                ("X-RateLimit-Remaining", ""),
                ("X-RateLimit-Reset", "soon"),
            ]),
            NOW,
        );
        assert_eq!(state.limit(), 10);
        assert_eq!(state.remaining(), 7);
        assert_eq!(state.reset_at(), None);
    }

    #[test]
    fn test_reset_deducts_in_flight_requests() {
        let mut state = loaded(5, 0);
        state.observe(
            StatusCode::OK,
            &headers(&[("X-RateLimit-Reset", "1700000001")]),
            NOW,
        );
        state.pending = 2;

        state.reset();
        assert_eq!(state.remaining(), 3);
        assert_eq!(state.reset_at(), None);
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = loaded(5, 1);
        assert!(state.try_admit());

        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
    }

    #[test]
    fn test_huge_header_values_are_ignored() {
        let mut state = loaded(5, 5);
        state.observe(
            StatusCode::OK,
            &headers(&[("X-RateLimit-Reset", "1700000060")]),
            NOW,
        );

        state.observe(
            StatusCode::OK,
            &headers(&[("X-RateLimit-Reset", "9223372036854775807")]),
            NOW,
        );
        assert_eq!(state.reset_at(), Some(1_700_000_060));

        state.observe(
            StatusCode::TOO_MANY_REQUESTS,
            &headers(&[("Retry-After", "9223372036854775807")]),
            NOW,
        );
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.reset_at(), Some(1_700_000_060));

        let mut fresh = loaded(5, 5);
        fresh.observe(
            StatusCode::TOO_MANY_REQUESTS,
            &headers(&[("Retry-After", "-5")]),
            NOW,
        );
        assert_eq!(fresh.reset_at(), Some(NOW + FALLBACK_RETRY_AFTER_SECS));
    }

    #[test]
    fn test_extreme_limit_does_not_overflow() {
        let mut state = loaded(5, 5);
        assert!(state.try_admit());
        state.observe(
            StatusCode::OK,
            &headers(&[
                ("X-RateLimit-Limit", "-9223372036854775808"),
                ("X-RateLimit-Remaining", "3"),
            ]),
            NOW,
        );
        assert_eq!(state.remaining(), 0);

        state.reset();
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_expiry_requires_known_reset() {
        let state = QuotaState::new();
        assert!(!state.is_expired(i64::MAX));
    }

    #[test]
    fn test_try_admit_stops_at_zero() {
        let mut state = loaded(2, 2);
        assert!(state.try_admit());
        assert!(state.try_admit());
        assert!(!state.try_admit());
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.pending(), 2);

        state.complete();
        state.complete();
        state.complete();
        assert_eq!(state.pending(), 0);
    }
}
