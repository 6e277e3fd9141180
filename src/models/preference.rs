//! Shift-time preference model.
//!
//! Each employee may declare one preference per weekday. A missing entry
//! means "any". Lookups follow first-match semantics: the first
//! `EmployeePreferences` for an employee wins, and within it the first
//! entry for the weekday wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// What an employee asked for on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    /// Prefers the morning-leaning shift (shift 1).
    Morning,
    /// Prefers the evening-leaning shift (shift 2).
    Evening,
    /// Requests the day off.
    Off,
    /// No preference.
    #[default]
    Any,
}

impl PreferenceKind {
    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKind::Morning => "morning",
            PreferenceKind::Evening => "evening",
            PreferenceKind::Off => "off",
            PreferenceKind::Any => "any",
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(PreferenceKind::Morning),
            "evening" => Ok(PreferenceKind::Evening),
            "off" => Ok(PreferenceKind::Off),
            "any" => Ok(PreferenceKind::Any),
            _ => Err(RosterError::UnknownPreference(s.to_string())),
        }
    }
}

/// A preference for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPreference {
    /// Weekday index, 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    /// Requested shift kind.
    pub preference: PreferenceKind,
}

impl DayPreference {
    /// Creates a day preference.
    pub fn new(day_of_week: u8, preference: PreferenceKind) -> Self {
        Self {
            day_of_week,
            preference,
        }
    }
}

/// All weekday preferences of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePreferences {
    /// Employee the preferences belong to.
    pub employee_id: String,
    /// Per-weekday entries.
    pub preferences: Vec<DayPreference>,
}

impl EmployeePreferences {
    /// Creates an empty preference set (every day "any").
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            preferences: Vec::new(),
        }
    }

    /// Adds a preference for a weekday.
    pub fn with_day(mut self, day_of_week: u8, preference: PreferenceKind) -> Self {
        self.preferences
            .push(DayPreference::new(day_of_week, preference));
        self
    }

    /// The declared preference for a weekday, if any.
    pub fn preference_for(&self, day_of_week: u8) -> Option<PreferenceKind> {
        self.preferences
            .iter()
            .find(|p| p.day_of_week == day_of_week)
            .map(|p| p.preference)
    }
}

/// Looks up an employee's preference for a weekday.
///
/// Returns `Any` when there is no table, no entry for the employee, or no
/// entry for the weekday.
pub fn preference_of(
    preferences: Option<&[EmployeePreferences]>,
    employee_id: &str,
    day_of_week: u8,
) -> PreferenceKind {
    preferences
        .and_then(|table| table.iter().find(|p| p.employee_id == employee_id))
        .and_then(|p| p.preference_for(day_of_week))
        .unwrap_or_default()
}
