//! Request DTOs for the cache simulator API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::SizeUnit;

/// Request body for POST /access
#[derive(Debug, Clone, Deserialize)]
pub struct AccessRequest {
    /// Resource path, relative to the resource root
    pub path: String,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl AccessRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.path.trim().is_empty() {
            return Some("Path cannot be empty".to_string());
        }
        if self.ttl == Some(0) {
            return Some("TTL must be at least one second".to_string());
        }
        None
    }
}

/// A size given either as a JSON number or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Text(String),
}

impl SizeValue {
    pub fn as_text(&self) -> String {
        match self {
            SizeValue::Number(n) => n.to_string(),
            SizeValue::Text(s) => s.clone(),
        }
    }
}

/// Request body for PUT /capacity
#[derive(Debug, Clone, Deserialize)]
pub struct ResizeRequest {
    pub value: SizeValue,
    pub unit: SizeUnit,
}
