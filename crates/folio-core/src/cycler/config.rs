//! Typewriter configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 100;
pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 50;
pub const DEFAULT_HOLD_MS: u64 = 2000;

fn default_type_interval_ms() -> u64 {
    DEFAULT_TYPE_INTERVAL_MS
}

fn default_delete_interval_ms() -> u64 {
    DEFAULT_DELETE_INTERVAL_MS
}

fn default_hold_ms() -> u64 {
    DEFAULT_HOLD_MS
}

/// Phrases to cycle through and the pacing of each step.
///
/// Any interval value is accepted, including zero (next tick runs immediately).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclerConfig {
    /// Phrases in display order
    pub phrases: Vec<String>,
    /// Delay between revealed characters while typing
    #[serde(default = "default_type_interval_ms")]
    pub type_interval_ms: u64,
    /// Delay between removed characters while deleting
    #[serde(default = "default_delete_interval_ms")]
    pub delete_interval_ms: u64,
    /// Pause after a phrase is fully typed, before deletion begins
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

impl CyclerConfig {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The hero section's role titles and pacing
    pub fn hero() -> Self {
        Self::new([
            "Java Developer",
            "Spring Boot Expert",
            "React.js Developer",
            "Full Stack Engineer",
            "Microservices Architect",
        ])
        .with_type_interval(80)
        .with_delete_interval(40)
        .with_hold(2500)
    }

    pub fn with_type_interval(mut self, ms: u64) -> Self {
        self.type_interval_ms = ms;
        self
    }

    pub fn with_delete_interval(mut self, ms: u64) -> Self {
        self.delete_interval_ms = ms;
        self
    }

    pub fn with_hold(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            type_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            delete_interval_ms: DEFAULT_DELETE_INTERVAL_MS,
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}
