//! Day and week schedule (solution) models.
//!
//! A `DaySchedule` records who works each of the two shifts on one date
//! and who is off. A `WeekSchedule` is seven consecutive days starting on
//! a Monday; it is what the surrounding application persists, keyed by
//! the ISO week-start date.
//!
//! # Invariants
//! - An employee listed in `day_off` is on neither shift.
//! - `days[i].date == week_start + i days`.
//!
//! Manual edits may break the staffing rules; `DaySchedule::status`
//! reports that instead of rejecting it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Employee, ShiftAssignment, ShiftId};

/// Staffing classification of a day, for display warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayStatus {
    /// Both shifts staffed and supervised, nobody off.
    Normal,
    /// Fully staffed, but someone is off.
    HasAbsence,
    /// A non-empty shift has no qualified member.
    Unsupervised,
    /// At least one shift is empty.
    Understaffed,
}

impl DayStatus {
    /// Whether the day needs a staffing warning.
    pub fn is_degraded(self) -> bool {
        matches!(self, DayStatus::Unsupervised | DayStatus::Understaffed)
    }
}

/// Assignments for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Calendar date.
    pub date: NaiveDate,
    /// The two shifts, `Shift1` first.
    pub shifts: Vec<ShiftAssignment>,
    /// Employees off on this date.
    pub day_off: Vec<String>,
}

impl DaySchedule {
    /// Creates a day from both shifts' members.
    pub fn new(
        date: NaiveDate,
        shift1: Vec<String>,
        shift2: Vec<String>,
        day_off: Vec<String>,
    ) -> Self {
        Self {
            date,
            shifts: vec![
                ShiftAssignment::new(ShiftId::Shift1, shift1),
                ShiftAssignment::new(ShiftId::Shift2, shift2),
            ],
            day_off,
        }
    }

    /// The assignment for a shift, if stored.
    pub fn shift(&self, shift: ShiftId) -> Option<&ShiftAssignment> {
        self.shifts.iter().find(|s| s.shift_type == shift)
    }

    /// Members of a shift (empty if the shift is missing).
    pub fn members(&self, shift: ShiftId) -> &[String] {
        self.shift(shift)
            .map(|s| s.employees.as_slice())
            .unwrap_or(&[])
    }

    /// Copy of this day with one shift's members replaced.
    ///
    /// A shift missing from stored data is added.
    pub fn with_shift(&self, shift: ShiftId, employees: Vec<String>) -> Self {
        let mut day = self.clone();
        match day.shifts.iter_mut().find(|s| s.shift_type == shift) {
            Some(existing) => existing.employees = employees,
            None => {
                day.shifts.push(ShiftAssignment::new(shift, employees));
                day.shifts.sort_by_key(|s| s.shift_type);
            }
        }
        day
    }

    /// Whether an employee is marked off.
    pub fn is_off(&self, employee_id: &str) -> bool {
        self.day_off.iter().any(|id| id == employee_id)
    }

    /// Shifts an employee works on this day.
    pub fn shifts_of(&self, employee_id: &str) -> Vec<ShiftId> {
        self.shifts
            .iter()
            .filter(|s| s.contains(employee_id))
            .map(|s| s.shift_type)
            .collect()
    }

    /// Whether any shift has nobody on it.
    pub fn is_understaffed(&self) -> bool {
        ShiftId::ALL.iter().any(|&s| self.members(s).is_empty())
    }

    /// Classifies the day for display.
    ///
    /// Qualification is looked up in `employees`; unknown IDs count as
    /// unqualified.
    pub fn status(&self, employees: &[Employee]) -> DayStatus {
        if self.is_understaffed() {
            return DayStatus::Understaffed;
        }

        let supervised = |members: &[String]| {
            members.iter().any(|id| {
                employees
                    .iter()
                    .any(|e| &e.id == id && e.is_qualified())
            })
        };
        if !ShiftId::ALL.iter().all(|&s| supervised(self.members(s))) {
            return DayStatus::Unsupervised;
        }

        if self.day_off.is_empty() {
            DayStatus::Normal
        } else {
            DayStatus::HasAbsence
        }
    }
}

/// Seven consecutive days starting on a Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Days, Monday first.
    pub days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Creates a week.
    pub fn new(week_start: NaiveDate, days: Vec<DaySchedule>) -> Self {
        Self { week_start, days }
    }

    /// The day stored for a date.
    pub fn day(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Storage key of this week (`YYYY-MM-DD` of its Monday).
    pub fn key(&self) -> String {
        super::calendar::format_date(self.week_start)
    }

    /// Copy of this week with the day for `date` replaced by
    /// `f(day, position)`, where `position` is the day's index in `days`.
    ///
    /// Returns `None` when the week has no day for `date`.
    pub(crate) fn map_day(
        &self,
        date: NaiveDate,
        f: impl FnOnce(&DaySchedule, usize) -> DaySchedule,
    ) -> Option<Self> {
        let index = self.days.iter().position(|d| d.date == date)?;
        let mut week = self.clone();
        week.days[index] = f(&self.days[index], index);
        Some(week)
    }
}
