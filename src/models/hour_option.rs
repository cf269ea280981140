//! Selectable hour models for building shift entry forms.

use serde::{Deserialize, Serialize};

/// A single selectable hour.
///
/// `value` is `None` only for the "None specified" bedtime entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourOption {
    /// The wall-clock hour (0-23), or `None` for no selection.
    pub value: Option<u32>,
    /// The 12-hour display label (e.g. "5 PM").
    pub label: String,
}

/// The option lists for each hour input of a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourOptions {
    /// Options for the start hour.
    pub start: Vec<HourOption>,
    /// Options for the bedtime, led by a "None specified" entry.
    pub bed: Vec<HourOption>,
    /// Options for the end hour.
    pub end: Vec<HourOption>,
}
