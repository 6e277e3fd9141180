//! Input validation for roster data.
//!
//! The roster pipeline accepts any input and degrades gracefully, so
//! nothing here is required before scheduling. These checks exist for the
//! surrounding application to report data problems to a user. Detects:
//! - Duplicate or empty employee IDs
//! - Preference weekdays out of range, duplicate weekday entries
//! - Preferences for employees no longer on the roster
//! - Week structure problems (start not a Monday, missing or shuffled days)
//! - Employees both off and on shift, missing or repeated shifts

use std::collections::HashSet;

use crate::models::calendar::{week_dates, weekday_index, DAYS_PER_WEEK};
use crate::models::{Employee, EmployeePreferences, ShiftId, WeekSchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An employee has an empty ID.
    EmptyId,
    /// A preference weekday outside 0..=6.
    InvalidWeekday,
    /// Two preference entries for the same employee and weekday.
    DuplicatePreference,
    /// Preferences reference an employee not on the roster.
    UnknownEmployee,
    /// Week start is not a Monday, or days do not follow it one by one.
    InvalidWeek,
    /// An employee is both off and on a shift.
    OffButScheduled,
    /// A day is missing a shift or lists one twice.
    InvalidShifts,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the roster and its preference table.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(
    employees: &[Employee],
    preferences: &[EmployeePreferences],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if e.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Employee '{}' has an empty ID", e.name),
            ));
        }
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
    }

    let mut seen_tables = HashSet::new();
    for table in preferences {
        if !employee_ids.contains(table.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEmployee,
                format!("Preferences for unknown employee '{}'", table.employee_id),
            ));
        }
        if !seen_tables.insert(table.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate preference table for employee: {}", table.employee_id),
            ));
        }

        let mut days = HashSet::new();
        for p in &table.preferences {
            if usize::from(p.day_of_week) >= DAYS_PER_WEEK {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!(
                        "Employee '{}' has a preference for weekday {}",
                        table.employee_id, p.day_of_week
                    ),
                ));
            } else if !days.insert(p.day_of_week) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePreference,
                    format!(
                        "Employee '{}' has several preferences for weekday {}",
                        table.employee_id, p.day_of_week
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the structure of a stored week.
///
/// Checks:
/// 1. `week_start` is a Monday
/// 2. Exactly seven days, `days[i].date == week_start + i`
/// 3. Each day lists `shift1` and `shift2` exactly once
/// 4. Nobody is both off and on a shift
///
/// Staffing quality (empty or unsupervised shifts) is not an error here;
/// see `DaySchedule::status`.
pub fn validate_week(week: &WeekSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    if weekday_index(week.week_start) != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeek,
            format!("Week start {} is not a Monday", week.week_start),
        ));
    }

    if week.days.len() != DAYS_PER_WEEK {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeek,
            format!("Week {} has {} days", week.week_start, week.days.len()),
        ));
    }

    for (day, expected) in week.days.iter().zip(week_dates(week.week_start)) {
        if day.date != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeek,
                format!("Expected {} but found {}", expected, day.date),
            ));
        }
    }

    for day in &week.days {
        for shift in ShiftId::ALL {
            let count = day.shifts.iter().filter(|s| s.shift_type == shift).count();
            if count != 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidShifts,
                    format!("{} lists {} {} times", day.date, shift, count),
                ));
            }
        }

        for assignment in &day.shifts {
            for id in assignment.employees.iter().filter(|id| day.is_off(id)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OffButScheduled,
                    format!(
                        "Employee '{}' is off on {} but on {}",
                        id, day.date, assignment.shift_type
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferenceKind, ShiftAssignment};
    use crate::roster::{generate_week_schedule, update_shift_assignment};
    use chrono::NaiveDate;

    fn sample_roster() -> Vec<Employee> {
        vec![
            Employee::new("1").with_name("An").qualified(),
            Employee::new("2").with_name("Binh"),
            Employee::new("3").with_name("Chi").qualified(),
        ]
    }

    fn sample_preferences() -> Vec<EmployeePreferences> {
        vec![
            EmployeePreferences::new("1")
                .with_day(0, PreferenceKind::Morning)
                .with_day(5, PreferenceKind::Off),
            EmployeePreferences::new("2").with_day(3, PreferenceKind::Evening),
        ]
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster(), &sample_preferences()).is_ok());
    }

    #[test]
    fn test_duplicate_employee_id() {
        let roster = vec![Employee::new("1"), Employee::new("1")];
        let errors = validate_roster(&roster, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("employee")));
    }

    #[test]
    fn test_empty_employee_id() {
        let roster = vec![Employee::new(" ").with_name("Blank")];
        let errors = validate_roster(&roster, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_preference_problems() {
        let prefs = vec![
            EmployeePreferences::new("1")
                .with_day(7, PreferenceKind::Off)
                .with_day(2, PreferenceKind::Morning)
                .with_day(2, PreferenceKind::Evening),
            EmployeePreferences::new("removed").with_day(0, PreferenceKind::Any),
        ];
        let errors = validate_roster(&sample_roster(), &prefs).unwrap_err();
        let kinds: Vec<&ValidationErrorKind> = errors.iter().map(|e| &e.kind).collect();

        assert!(kinds.contains(&&ValidationErrorKind::InvalidWeekday));
        assert!(kinds.contains(&&ValidationErrorKind::DuplicatePreference));
        assert!(kinds.contains(&&ValidationErrorKind::UnknownEmployee));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_generated_week_is_valid() {
        let prefs = sample_preferences();
        let week = generate_week_schedule(monday(), &sample_roster(), None, Some(&prefs));
        assert!(validate_week(&week).is_ok());
    }

    #[test]
    fn test_week_not_starting_monday() {
        let tuesday = monday().succ_opt().unwrap();
        let week = generate_week_schedule(tuesday, &sample_roster(), None, None);
        let errors = validate_week(&week).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidWeek);
    }

    #[test]
    fn test_missing_and_shuffled_days() {
        let mut week = generate_week_schedule(monday(), &sample_roster(), None, None);
        week.days.swap(1, 2);
        week.days.pop();
        let errors = validate_week(&week).unwrap_err();
        assert!(errors.len() >= 3); // day count + two misplaced dates
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWeek));
    }

    #[test]
    fn test_off_but_scheduled() {
        let mut week = generate_week_schedule(monday(), &sample_roster(), None, None);
        week.days[0].day_off.push("2".into());
        let week = update_shift_assignment(&week, monday(), ShiftId::Shift2, vec!["2".into()]);
        let errors = validate_week(&week).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OffButScheduled));
    }

    #[test]
    fn test_repeated_shift() {
        let mut week = generate_week_schedule(monday(), &sample_roster(), None, None);
        week.days[2]
            .shifts
            .push(ShiftAssignment::empty(ShiftId::Shift1));
        week.days[3].shifts.truncate(1);
        let errors = validate_week(&week).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidShifts)
                .count(),
            2
        );
    }
}
