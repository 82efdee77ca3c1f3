//! # Picker Options
//!
//! Host-facing configuration of a `RangeController`. Everything here is read
//! by the core; `separator` and `placeholder` only reach the view.

use crate::config::{DEFAULT_FORMAT, DEFAULT_LOCALE, DEFAULT_SEPARATOR};
use crate::picker::events::{Disabled, RangeValue};

/// Predicate marking dates that cannot be picked
pub type DisabledDate<D> = Box<dyn Fn(&D) -> bool + Send + Sync>;

/// Producer of a shortcut range, evaluated on every use
pub type RangeProducer<D> = Box<dyn Fn() -> [Option<D>; 2] + Send + Sync>;

/// A preset range offered next to the calendar
pub enum RangeShortcut<D> {
    Fixed([Option<D>; 2]),
    Producer(RangeProducer<D>),
}

impl<D: Clone> RangeShortcut<D> {
    /// The range this shortcut stands for right now
    pub fn resolve(&self) -> RangeValue<D> {
        let pair = match self {
            RangeShortcut::Fixed(pair) => pair.clone(),
            RangeShortcut::Producer(produce) => produce(),
        };
        if pair[0].is_none() && pair[1].is_none() {
            return None;
        }
        Some(pair)
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for RangeShortcut<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeShortcut::Fixed(pair) => f.debug_tuple("Fixed").field(pair).finish(),
            RangeShortcut::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Configuration of a range picker
pub struct RangePickerOptions<D> {
    /// Accepted formats; the first one is used for display
    pub formats: Vec<String>,
    pub locale: String,
    pub default_value: RangeValue<D>,
    /// `Some` makes the value controlled by the host
    pub value: Option<RangeValue<D>>,
    /// Month shown by each panel when its slot has no date
    pub default_picker_value: [Option<D>; 2],
    pub default_open: bool,
    pub allow_empty: [bool; 2],
    pub selectable: [bool; 2],
    pub disabled: Disabled,
    pub disabled_date: Option<DisabledDate<D>>,
    pub ranges: Vec<(String, RangeShortcut<D>)>,
    pub placeholder: [String; 2],
    pub separator: String,
    pub input_read_only: bool,
}

impl<D> RangePickerOptions<D> {
    pub fn new() -> Self {
        Self {
            formats: vec![DEFAULT_FORMAT.to_string()],
            locale: DEFAULT_LOCALE.to_string(),
            default_value: None,
            value: None,
            default_picker_value: [None, None],
            default_open: false,
            allow_empty: [false, false],
            selectable: [true, true],
            disabled: Disabled::default(),
            disabled_date: None,
            ranges: Vec::new(),
            placeholder: [String::new(), String::new()],
            separator: DEFAULT_SEPARATOR.to_string(),
            input_read_only: false,
        }
    }

    /// Display format, falling back to the crate default when none is set
    pub fn primary_format(&self) -> &str {
        self.formats
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_FORMAT)
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.formats = vec![format.to_string()];
        self
    }

    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn with_default_value(mut self, value: RangeValue<D>) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_value(mut self, value: RangeValue<D>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_picker_value(mut self, value: [Option<D>; 2]) -> Self {
        self.default_picker_value = value;
        self
    }

    pub fn with_default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: [bool; 2]) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_selectable(mut self, selectable: [bool; 2]) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_disabled(mut self, disabled: Disabled) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_disabled_date<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        self.disabled_date = Some(Box::new(predicate));
        self
    }

    pub fn with_range(mut self, label: &str, shortcut: RangeShortcut<D>) -> Self {
        self.ranges.push((label.to_string(), shortcut));
        self
    }

    pub fn with_placeholder(mut self, start: &str, end: &str) -> Self {
        self.placeholder = [start.to_string(), end.to_string()];
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn with_input_read_only(mut self, read_only: bool) -> Self {
        self.input_read_only = read_only;
        self
    }

    pub fn shortcut(&self, label: &str) -> Option<&RangeShortcut<D>> {
        self.ranges
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, shortcut)| shortcut)
    }
}

impl<D> Default for RangePickerOptions<D> {
    fn default() -> Self {
        Self::new()
    }
}
