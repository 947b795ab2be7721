use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{CountTiers, InputLayout};

/// Tunables for the form controller. Every field has a default, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Reviews shorter than this (after trimming) are rejected with a warning.
    pub min_review_chars: usize,
    pub notification_timeout_ms: u64,
    pub exit_animation_ms: u64,
    pub max_input_height_px: u32,
    pub layout: InputLayout,
    pub count_tiers: CountTiers,
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_review_chars: 10,
            notification_timeout_ms: 5000,
            exit_animation_ms: 300,
            max_input_height_px: 300,
            layout: InputLayout::default(),
            count_tiers: CountTiers::default(),
            messages: Messages::default(),
        }
    }
}

impl FormConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }
}

/// User-facing notification texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_review: String,
    pub short_review: String,
    pub input_cleared: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_review: "Please enter a movie review to analyze.".to_string(),
            short_review: "Please enter a longer review for better analysis.".to_string(),
            input_cleared: "Input cleared".to_string(),
        }
    }
}
