//! Shift identifiers, display metadata, and per-shift assignments.
//!
//! A day always has exactly two shifts. `Shift1` leans toward the morning,
//! `Shift2` toward the evening; the two usually overlap in the afternoon.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// One of the two daily shifts.
///
/// Serialized as `"shift1"`/`"shift2"`; the legacy stored identifiers
/// `"ca1"`/`"ca2"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftId {
    /// Morning-leaning shift.
    #[serde(rename = "shift1", alias = "ca1")]
    Shift1,
    /// Evening-leaning shift.
    #[serde(rename = "shift2", alias = "ca2")]
    Shift2,
}

impl ShiftId {
    /// Both shifts in day order.
    pub const ALL: [ShiftId; 2] = [ShiftId::Shift1, ShiftId::Shift2];

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftId::Shift1 => "shift1",
            ShiftId::Shift2 => "shift2",
        }
    }

    /// The other shift of the day.
    pub fn other(self) -> ShiftId {
        match self {
            ShiftId::Shift1 => ShiftId::Shift2,
            ShiftId::Shift2 => ShiftId::Shift1,
        }
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "shift1" | "ca1" => Ok(ShiftId::Shift1),
            "shift2" | "ca2" => Ok(ShiftId::Shift2),
            other => Err(RosterError::UnknownShift(other.to_string())),
        }
    }
}

/// Display metadata for a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInfo {
    /// Display name.
    pub name: String,
    /// Start time, `HH:MM`.
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    /// End time, `HH:MM`. An end at or before the start wraps past midnight.
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl ShiftInfo {
    /// Creates shift metadata.
    pub fn new(name: impl Into<String>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the shift.
    pub fn duration(&self) -> Duration {
        let span = self.end_time - self.start_time;
        if span <= Duration::zero() {
            span + Duration::days(1)
        } else {
            span
        }
    }

    /// Time both shifts are staffed at once (same-day shifts only).
    pub fn overlap(&self, other: &ShiftInfo) -> Duration {
        let start = self.start_time.max(other.start_time);
        let end = self.end_time.min(other.end_time);
        if end > start {
            end - start
        } else {
            Duration::zero()
        }
    }
}

/// Display metadata for both shifts of a day.
///
/// Defaults to `Shift 1` 08:30–17:00 and `Shift 2` 14:00–23:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCatalog {
    /// Morning-leaning shift.
    pub shift1: ShiftInfo,
    /// Evening-leaning shift.
    pub shift2: ShiftInfo,
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self {
            shift1: ShiftInfo::new("Shift 1", hm(8, 30), hm(17, 0)),
            shift2: ShiftInfo::new("Shift 2", hm(14, 0), hm(23, 0)),
        }
    }
}

impl ShiftCatalog {
    /// Replaces the metadata of one shift.
    pub fn with_shift(mut self, shift: ShiftId, info: ShiftInfo) -> Self {
        match shift {
            ShiftId::Shift1 => self.shift1 = info,
            ShiftId::Shift2 => self.shift2 = info,
        }
        self
    }

    /// Metadata for a shift.
    pub fn get(&self, shift: ShiftId) -> &ShiftInfo {
        match shift {
            ShiftId::Shift1 => &self.shift1,
            ShiftId::Shift2 => &self.shift2,
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Employees placed on one shift of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    /// Which shift.
    pub shift_type: ShiftId,
    /// Member employee IDs. Order is not significant.
    pub employees: Vec<String>,
}

impl ShiftAssignment {
    /// Creates an assignment.
    pub fn new(shift_type: ShiftId, employees: Vec<String>) -> Self {
        Self {
            shift_type,
            employees,
        }
    }

    /// Creates an assignment with no members.
    pub fn empty(shift_type: ShiftId) -> Self {
        Self::new(shift_type, Vec::new())
    }

    /// Whether an employee is on this shift.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.employees.iter().any(|id| id == employee_id)
    }

    /// Whether nobody is on this shift.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.employees.len()
    }
}
