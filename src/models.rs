//! Timer Models
//!
//! The persisted timer record, stored as `{"name": ..., "end": ...}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DEFAULT_TIMER_NAME;
use crate::time_format::parse_end;

/// One user-created countdown timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRecord {
    #[serde(default = "default_name", deserialize_with = "null_as_default_name")]
    pub name: String,
    /// Target instant as entered; empty means "not yet configured"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end: String,
}

impl TimerRecord {
    pub fn new() -> Self {
        Self {
            name: default_name(),
            end: String::new(),
        }
    }

    /// Parsed target instant, `None` when unset or unparsable
    pub fn target(&self) -> Option<DateTime<Utc>> {
        parse_end(&self.end)
    }
}

impl Default for TimerRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim a user-entered name, falling back to the default label when blank
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default_name()
    } else {
        trimmed.to_string()
    }
}

fn default_name() -> String {
    DEFAULT_TIMER_NAME.to_string()
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_name))
}
