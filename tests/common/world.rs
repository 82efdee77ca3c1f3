use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use cucumber::World;
use std::sync::{Arc, Mutex};

// Import real picker components
use rangeline::{
    ChronoAdapter, DateAdapter, Disabled, InputEvent, PickerEvent, RangeController,
    RangePickerOptions, RangeShortcut, RangeValue, SlotIndex,
};

/// Notifications captured from the picker's event bus
pub type CapturedEvents = Arc<Mutex<Vec<PickerEvent<NaiveDate>>>>;

/// Picker state shared by the steps of one scenario
///
/// `Given` steps configure `options`; the first interaction builds the
/// controller from them, so configuration order inside a scenario is free.
#[derive(World)]
#[world(init = Self::new)]
pub struct PickerWorld {
    /// Options collected by Given steps
    pub options: Option<RangePickerOptions<NaiveDate>>,

    /// Real RangeController instance, built on first use
    pub controller: Option<RangeController<ChronoAdapter>>,

    /// Every notification published so far
    pub events: CapturedEvents,

    /// Last error reported by a step
    pub last_error: Option<String>,
}

impl std::fmt::Debug for PickerWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerWorld")
            .field("started", &self.controller.is_some())
            .field("events", &self.events.lock().map(|e| e.len()).unwrap_or(0))
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl PickerWorld {
    pub fn new() -> Self {
        Self {
            options: Some(RangePickerOptions::new()),
            controller: None,
            events: Arc::new(Mutex::new(Vec::new())),
            last_error: None,
        }
    }

    /// Options still being configured
    pub fn options_mut(&mut self) -> &mut RangePickerOptions<NaiveDate> {
        assert!(
            self.controller.is_none(),
            "picker already started; configure it before interacting"
        );
        self.options.get_or_insert_with(RangePickerOptions::new)
    }

    /// Apply a builder method to the pending options
    pub fn configure<F>(&mut self, apply: F)
    where
        F: FnOnce(RangePickerOptions<NaiveDate>) -> RangePickerOptions<NaiveDate>,
    {
        let options = std::mem::take(self.options_mut());
        self.options = Some(apply(options));
    }

    /// The controller, built from the pending options on first use
    pub fn controller(&mut self) -> &mut RangeController<ChronoAdapter> {
        if self.controller.is_none() {
            let options = self.options.take().unwrap_or_default();
            let mut controller = RangeController::new(ChronoAdapter::new(), options);
            let events = self.events.clone();
            controller.subscribe(Box::new(move |event: &PickerEvent<NaiveDate>| {
                events.lock().unwrap().push(event.clone());
            }));
            tracing::debug!("Picker started for scenario");
            self.controller = Some(controller);
        }
        self.controller.as_mut().unwrap()
    }

    pub fn send(&mut self, event: InputEvent<NaiveDate>) {
        tracing::debug!("Sending {:?}", event);
        self.controller().handle_input(event);
    }

    /// Texts carried by every `Change` notification
    pub fn changes(&self) -> Vec<[String; 2]> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                PickerEvent::Change { texts, .. } => Some(texts.clone()),
                _ => None,
            })
            .collect()
    }

    /// Texts carried by every `CalendarChange` notification
    pub fn calendar_changes(&self) -> Vec<[String; 2]> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                PickerEvent::CalendarChange { texts, .. } => Some(texts.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn open_changes(&self) -> Vec<bool> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                PickerEvent::OpenChange { open } => Some(*open),
                _ => None,
            })
            .collect()
    }
}

impl Default for PickerWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_slot(text: &str) -> SlotIndex {
    text.parse().expect("step regex only admits start or end")
}

pub fn parse_flag(text: &str) -> bool {
    text == "true"
}

/// Parse a date in the default format; an empty string is an absent date
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>> {
    if text.is_empty() {
        return Ok(None);
    }
    ChronoAdapter::new()
        .parse("en_US", text, &["%Y-%m-%d".to_string()])
        .map(Some)
        .with_context(|| format!("bad date '{}' in step", text))
}

pub fn parse_range(start: &str, end: &str) -> Result<RangeValue<NaiveDate>> {
    let pair = [parse_date(start)?, parse_date(end)?];
    if pair[0].is_none() && pair[1].is_none() {
        return Ok(None);
    }
    Ok(Some(pair))
}

pub fn fixed_shortcut(start: &str, end: &str) -> Result<RangeShortcut<NaiveDate>> {
    match parse_range(start, end)? {
        Some(pair) => Ok(RangeShortcut::Fixed(pair)),
        None => Err(anyhow!("a shortcut needs at least one date")),
    }
}

pub fn disabled_slot(slot: SlotIndex) -> Disabled {
    let mut pair = [false, false];
    pair[slot.index()] = true;
    Disabled::Slots(pair)
}
