//! Font assignment across a render batch

use crate::error::{EngineError, Result};

/// Fonts used when none are configured
pub const DEFAULT_FONTS: &[&str] = &[
    "GreatHorKham Taunggyi",
    "Myanmar Text",
    "PangLong Italic",
    "Pyidaungsu",
    "Shan",
];

/// Spreads fonts evenly over a batch
///
/// The batch is cut into as many contiguous blocks as there are fonts and
/// each block renders with one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSchedule {
    fonts: Vec<String>,
}

impl FontSchedule {
    pub fn new<I, S>(fonts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fonts: Vec<String> = fonts.into_iter().map(Into::into).collect();
        if fonts.is_empty() {
            return Err(EngineError::ConfigError(
                "at least one font is required".into(),
            ));
        }
        Ok(Self { fonts })
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Font for job `index` of `total`
    pub fn font_for(&self, index: usize, total: usize) -> &str {
        let slot = if total == 0 {
            0
        } else {
            (index.min(total - 1) * self.fonts.len()) / total
        };
        &self.fonts[slot]
    }
}

impl Default for FontSchedule {
    fn default() -> Self {
        Self {
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
