//! Configuration constants and settings for rangeline
//!
//! Holds crate-wide defaults and the JSON settings file read by the demo
//! binary. Library users build `RangePickerOptions` directly and only need
//! the constants.

use crate::picker::events::Disabled;
use crate::picker::models::DateAdapter;
use crate::picker::view_models::{RangePickerOptions, RangeShortcut};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default display and parse format
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Default locale passed to the date adapter
pub const DEFAULT_LOCALE: &str = "en_US";

/// Default text between the two inputs
pub const DEFAULT_SEPARATOR: &str = "~";

/// Default settings file path
pub const DEFAULT_CONFIG_PATH: &str = "~/.rangeline/config.json";

/// Environment variable name for overriding the settings file path
pub const CONFIG_PATH_ENV_VAR: &str = "RANGELINE_CONFIG_PATH";

/// Environment variable holding the log filter of the demo binary
pub const LOG_LEVEL_ENV_VAR: &str = "RANGELINE_LOG_LEVEL";

/// Get the settings file path, checking environment variable first, then
/// falling back to default. A leading `~` is expanded.
pub fn get_config_path() -> String {
    let path = std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    shellexpand::tilde(&path).into_owned()
}

/// One preset range in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSetting {
    pub label: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Picker settings as stored on disk; dates are strings in `formats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub formats: Vec<String>,
    pub locale: String,
    pub allow_empty: [bool; 2],
    pub selectable: [bool; 2],
    pub disabled: Disabled,
    pub separator: String,
    pub placeholder: [String; 2],
    pub input_read_only: bool,
    pub default_value: Option<[Option<String>; 2]>,
    pub default_picker_value: [Option<String>; 2],
    pub default_open: bool,
    pub ranges: Vec<RangeSetting>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            formats: vec![DEFAULT_FORMAT.to_string()],
            locale: DEFAULT_LOCALE.to_string(),
            allow_empty: [false, false],
            selectable: [true, true],
            disabled: Disabled::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            placeholder: ["Start date".to_string(), "End date".to_string()],
            input_read_only: false,
            default_value: None,
            default_picker_value: [None, None],
            default_open: false,
            ranges: Vec::new(),
        }
    }
}

impl PickerSettings {
    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        tracing::debug!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Formats used to read dates; an empty list means the default format
    pub fn parse_formats(&self) -> Vec<String> {
        if self.formats.is_empty() {
            vec![DEFAULT_FORMAT.to_string()]
        } else {
            self.formats.clone()
        }
    }

    /// Build picker options, parsing every date through the adapter
    pub fn into_options<A: DateAdapter>(self, adapter: &A) -> Result<RangePickerOptions<A::Date>> {
        let formats = self.parse_formats();
        let parse = |text: &Option<String>, field: &str| -> Result<Option<A::Date>> {
            match text {
                Some(text) => adapter
                    .parse(&self.locale, text, &formats)
                    .map(Some)
                    .with_context(|| format!("Unparsable date '{}' in {}", text, field)),
                None => Ok(None),
            }
        };

        let default_value = match &self.default_value {
            Some([start, end]) => {
                let pair = [parse(start, "default_value")?, parse(end, "default_value")?];
                if pair[0].is_none() && pair[1].is_none() {
                    None
                } else {
                    Some(pair)
                }
            }
            None => None,
        };
        let default_picker_value = [
            parse(&self.default_picker_value[0], "default_picker_value")?,
            parse(&self.default_picker_value[1], "default_picker_value")?,
        ];

        let mut ranges = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            let field = format!("range '{}'", range.label);
            let pair = [parse(&range.start, field.as_str())?, parse(&range.end, field.as_str())?];
            ranges.push((range.label.clone(), RangeShortcut::Fixed(pair)));
        }

        let [start_placeholder, end_placeholder] = &self.placeholder;
        let mut options = RangePickerOptions::new()
            .with_formats(self.formats.iter().cloned())
            .with_locale(&self.locale)
            .with_allow_empty(self.allow_empty)
            .with_selectable(self.selectable)
            .with_disabled(self.disabled)
            .with_separator(&self.separator)
            .with_placeholder(start_placeholder, end_placeholder)
            .with_input_read_only(self.input_read_only)
            .with_default_value(default_value)
            .with_default_picker_value(default_picker_value)
            .with_default_open(self.default_open);
        options.ranges = ranges;
        Ok(options)
    }
}
