use serde::{Deserialize, Serialize};

/// Colour cue for the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountTier {
    #[default]
    Light,
    Neutral,
    Positive,
}

impl CountTier {
    /// CSS custom property the page defines for this tier.
    pub fn css_var(self) -> &'static str {
        match self {
            CountTier::Light => "--light",
            CountTier::Neutral => "--neutral",
            CountTier::Positive => "--positive",
        }
    }
}

/// Exclusive lower bounds of the counter's colour tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountTiers {
    pub neutral_above: usize,
    pub positive_above: usize,
}

impl Default for CountTiers {
    fn default() -> Self {
        Self {
            neutral_above: 100,
            positive_above: 500,
        }
    }
}

pub fn count_tier(count: usize, tiers: &CountTiers) -> CountTier {
    if count > tiers.positive_above {
        CountTier::Positive
    } else if count > tiers.neutral_above {
        CountTier::Neutral
    } else {
        CountTier::Light
    }
}

/// Text metrics used to estimate the textarea's scroll height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLayout {
    pub line_height_px: u32,
    pub vertical_padding_px: u32,
    pub chars_per_line: usize,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            line_height_px: 24,
            vertical_padding_px: 24,
            chars_per_line: 80,
        }
    }
}

impl InputLayout {
    /// Height of an empty textarea.
    pub fn single_line_height(&self) -> u32 {
        self.vertical_padding_px.saturating_add(self.line_height_px)
    }

    pub fn content_height(&self, text: &str) -> u32 {
        let lines = u32::try_from(visual_lines(text, self.chars_per_line)).unwrap_or(u32::MAX);
        self.vertical_padding_px
            .saturating_add(lines.saturating_mul(self.line_height_px))
    }
}

/// Auto-grow height: content height capped at `max_px`, never below one line.
pub fn input_height(text: &str, layout: &InputLayout, max_px: u32) -> u32 {
    layout
        .content_height(text)
        .min(max_px)
        .max(layout.single_line_height())
}

fn visual_lines(text: &str, chars_per_line: usize) -> usize {
    let per_line = chars_per_line.max(1);
    text.split('\n')
        .map(|line| line.chars().count().div_ceil(per_line).max(1))
        .sum()
}
