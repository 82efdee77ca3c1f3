//! # Core Event Types
//!
//! Common types used throughout the picker including slot indices, the range
//! value shape, pointer targets and the per-slot disabled setting.

use serde::{Deserialize, Serialize};
use std::ops::Not;

/// A range of two optional dates. `None` is the single "no selection" value;
/// a pair of two absent dates is never stored.
pub type RangeValue<D> = Option<[Option<D>; 2]>;

/// Which of the two inputs an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotIndex {
    Start,
    End,
}

impl SlotIndex {
    /// Both slots in display order
    pub const ALL: [SlotIndex; 2] = [SlotIndex::Start, SlotIndex::End];

    pub fn index(self) -> usize {
        match self {
            SlotIndex::Start => 0,
            SlotIndex::End => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SlotIndex::Start),
            1 => Some(SlotIndex::End),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SlotIndex::Start => "start",
            SlotIndex::End => "end",
        }
    }
}

/// Enable slot switching with !slot
impl Not for SlotIndex {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            SlotIndex::Start => SlotIndex::End,
            SlotIndex::End => SlotIndex::Start,
        }
    }
}

impl std::str::FromStr for SlotIndex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "0" => Ok(SlotIndex::Start),
            "end" | "1" => Ok(SlotIndex::End),
            other => Err(anyhow::anyhow!("unknown slot '{}'", other)),
        }
    }
}

/// Where a pointer press landed, relative to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The text input of a slot
    Input(SlotIndex),
    /// Anywhere inside the popup panel
    Panel,
    /// Anywhere else on the page
    Outside,
}

/// Disabled setting: one flag for the whole control or one per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Disabled {
    All(bool),
    Slots([bool; 2]),
}

impl Disabled {
    pub fn slot(&self, slot: SlotIndex) -> bool {
        match self {
            Disabled::All(flag) => *flag,
            Disabled::Slots(flags) => flags[slot.index()],
        }
    }

    /// True when no slot can be interacted with
    pub fn whole_control(&self) -> bool {
        match self {
            Disabled::All(flag) => *flag,
            Disabled::Slots(flags) => flags[0] && flags[1],
        }
    }
}

impl Default for Disabled {
    fn default() -> Self {
        Disabled::All(false)
    }
}

/// How a calendar panel reported a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectKind {
    /// Cell highlighted; the draft follows but nothing is committed
    #[default]
    Preview,
    /// Cell confirmed; advances to the empty slot or submits the range
    Submit,
}
