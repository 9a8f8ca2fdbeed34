//! Capacity Manager Module
//!
//! Tracks used bytes against the capacity bound and validates resize requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::{MAX_CAPACITY, MIN_CAPACITY};
use crate::error::{CacheError, Result};

// == Size Unit ==
/// Unit a resize request is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    #[serde(alias = "kb", alias = "Kb")]
    KB,
    #[serde(alias = "mb", alias = "Mb")]
    MB,
}

impl SizeUnit {
    /// Number of bytes in one unit.
    pub fn bytes(self) -> u64 {
        match self {
            SizeUnit::KB => 1024,
            SizeUnit::MB => 1024 * 1024,
        }
    }

    /// Renders a byte count in this unit, without trailing zeros.
    pub fn format(self, bytes: u64) -> String {
        let unit = self.bytes();
        if bytes % unit == 0 {
            format!("{}{}", bytes / unit, self)
        } else {
            let value = format!("{:.4}", bytes as f64 / unit as f64);
            format!("{}{}", value.trim_end_matches('0').trim_end_matches('.'), self)
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnit::KB => write!(f, "KB"),
            SizeUnit::MB => write!(f, "MB"),
        }
    }
}

// == Capacity Manager ==
/// Capacity bound and current usage of one cache.
#[derive(Debug, Clone)]
pub struct CapacityManager {
    /// Upper bound on the sum of entry sizes
    capacity_bytes: u64,
    /// Sum of live entry sizes
    used_bytes: u64,
}

impl CapacityManager {
    // == Constructor ==
    /// Creates an empty manager with the given bound.
    ///
    /// Fails with `InvalidArgument` if the bound is outside
    /// `[MIN_CAPACITY, MAX_CAPACITY]`.
    pub fn new(capacity_bytes: u64) -> Result<Self> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity_bytes) {
            return Err(CacheError::InvalidArgument(format!(
                "Capacity {} bytes is outside {}..={} bytes",
                capacity_bytes, MIN_CAPACITY, MAX_CAPACITY
            )));
        }
        Ok(Self {
            capacity_bytes,
            used_bytes: 0,
        })
    }

    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    /// Free bytes, zero when usage exceeds the bound.
    pub fn available_bytes(&self) -> u64 {
        self.capacity_bytes.saturating_sub(self.used_bytes)
    }

    /// Usage as a percentage of capacity.
    pub fn utilization(&self) -> f64 {
        if self.capacity_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.capacity_bytes as f64 * 100.0
        }
    }

    /// Whether inserting `required` more bytes would break the bound.
    pub fn would_overflow(&self, required: u64) -> bool {
        self.used_bytes.saturating_add(required) > self.capacity_bytes
    }

    // == Usage Accounting ==
    pub fn add_usage(&mut self, bytes: u64) {
        self.used_bytes = self.used_bytes.saturating_add(bytes);
    }

    pub fn release(&mut self, bytes: u64) {
        self.used_bytes = self.used_bytes.saturating_sub(bytes);
    }

    /// Overwrites usage with a freshly measured total.
    pub fn set_usage(&mut self, bytes: u64) {
        self.used_bytes = bytes;
    }

    // == Resize Validation ==
    /// Converts a resize request to bytes without mutating anything.
    ///
    /// `value` may be fractional; the result is rounded to whole bytes.
    /// Bounds are reported in the requested unit.
    pub fn validate_resize(&self, value: &str, unit: SizeUnit) -> Result<u64> {
        let amount: f64 = value.trim().parse().map_err(|_| {
            CacheError::InvalidArgument(format!("'{}' is not a valid number", value.trim()))
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CacheError::InvalidArgument(format!(
                "Size must be a positive number, got '{}'",
                value.trim()
            )));
        }

        let requested = (amount * unit.bytes() as f64).round();
        if requested < MIN_CAPACITY as f64 {
            return Err(CacheError::InvalidArgument(format!(
                "Minimum size in {} is {}",
                unit,
                unit.format(MIN_CAPACITY)
            )));
        }
        if requested > MAX_CAPACITY as f64 {
            return Err(CacheError::InvalidArgument(format!(
                "Maximum size in {} is {}",
                unit,
                unit.format(MAX_CAPACITY)
            )));
        }
        Ok(requested as u64)
    }

    /// Commits a bound previously returned by [`CapacityManager::validate_resize`].
    pub fn commit(&mut self, capacity_bytes: u64) {
        self.capacity_bytes = capacity_bytes;
    }
}

impl Default for CapacityManager {
    fn default() -> Self {
        Self {
            capacity_bytes: MAX_CAPACITY,
            used_bytes: 0,
        }
    }
}
