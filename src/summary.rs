//! Week staffing summary.
//!
//! Aggregates a finished week for display: how many shifts each employee
//! works, how many days they are off, and which days need a staffing
//! warning.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Shifts worked | Shift memberships per employee (covering both shifts counts two) |
//! | Days off | Days the employee is listed in `day_off` |
//! | Status counts | Days per `DayStatus` |
//! | Understaffed dates | Days with an empty shift |
//! | Unsupervised dates | Days with a shift lacking a qualified member |

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{DayStatus, Employee, WeekSchedule};

/// Staffing indicators for one week.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    /// Shift memberships per employee ID.
    pub shifts_by_employee: HashMap<String, usize>,
    /// Days off per employee ID.
    pub days_off_by_employee: HashMap<String, usize>,
    /// Number of days per status.
    pub status_counts: HashMap<DayStatus, usize>,
    /// Dates with an empty shift.
    pub understaffed_dates: Vec<NaiveDate>,
    /// Dates where a staffed shift has no qualified member.
    pub unsupervised_dates: Vec<NaiveDate>,
}

impl WeekSummary {
    /// Computes the summary of a week.
    ///
    /// Every roster member gets an entry (possibly zero). IDs on the
    /// schedule but not on the roster are counted too, so stale
    /// assignments stay visible.
    pub fn calculate(week: &WeekSchedule, employees: &[Employee]) -> Self {
        let mut shifts_by_employee: HashMap<String, usize> =
            employees.iter().map(|e| (e.id.clone(), 0)).collect();
        let mut days_off_by_employee = shifts_by_employee.clone();
        let mut status_counts: HashMap<DayStatus, usize> = HashMap::new();
        let mut understaffed_dates = Vec::new();
        let mut unsupervised_dates = Vec::new();

        for day in &week.days {
            for assignment in &day.shifts {
                for id in &assignment.employees {
                    *shifts_by_employee.entry(id.clone()).or_insert(0) += 1;
                }
            }
            for id in &day.day_off {
                *days_off_by_employee.entry(id.clone()).or_insert(0) += 1;
            }

            let status = day.status(employees);
            *status_counts.entry(status).or_insert(0) += 1;
            match status {
                DayStatus::Understaffed => understaffed_dates.push(day.date),
                DayStatus::Unsupervised => unsupervised_dates.push(day.date),
                DayStatus::Normal | DayStatus::HasAbsence => {}
            }
        }

        Self {
            shifts_by_employee,
            days_off_by_employee,
            status_counts,
            understaffed_dates,
            unsupervised_dates,
        }
    }

    /// Shifts worked by an employee (0 if unknown).
    pub fn shifts_for(&self, employee_id: &str) -> usize {
        self.shifts_by_employee.get(employee_id).copied().unwrap_or(0)
    }

    /// Days off taken by an employee (0 if unknown).
    pub fn days_off_for(&self, employee_id: &str) -> usize {
        self.days_off_by_employee.get(employee_id).copied().unwrap_or(0)
    }

    /// Number of days with a given status.
    pub fn days_with(&self, status: DayStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    /// Whether no day needs a staffing warning.
    pub fn is_fully_staffed(&self) -> bool {
        self.understaffed_dates.is_empty() && self.unsupervised_dates.is_empty()
    }
}
