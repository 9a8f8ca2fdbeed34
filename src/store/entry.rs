//! Stored Value Module
//!
//! Defines a single stored blob with its expiry deadline.

use chrono::Utc;

// == Stored Value ==
/// Bytes held by the in-process store together with their expiry.
#[derive(Debug, Clone)]
pub struct StoredValue {
    /// The stored bytes
    pub data: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoredValue {
    // == Constructor ==
    /// Creates a new stored value expiring `ttl_seconds` from now.
    pub fn new(data: Vec<u8>, ttl_seconds: Option<u64>) -> Self {
        Self {
            data,
            expires_at: ttl_seconds.map(deadline_from_now),
        }
    }

    // == Is Expired ==
    /// Checks if the value has expired.
    ///
    /// A value is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Rearm ==
    /// Replaces the deadline with one `ttl_seconds` from now.
    pub fn rearm(&mut self, ttl_seconds: u64) {
        self.expires_at = Some(deadline_from_now(ttl_seconds));
    }

    // == Time To Live ==
    /// Returns remaining TTL in whole seconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the deadline has passed
    /// - `Some(remaining_seconds)` otherwise, floored
    /// - `None` if the value never expires
    pub fn ttl_remaining(&self) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(current_timestamp_ms()) / 1000)
    }

    /// Size of the stored bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

fn deadline_from_now(ttl_seconds: u64) -> u64 {
    current_timestamp_ms().saturating_add(ttl_seconds.saturating_mul(1000))
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
