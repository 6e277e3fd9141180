//! Single-day pipeline: day-off resolution → assignment → repair.

use chrono::NaiveDate;

use super::assign::assign_shifts;
use super::day_off::resolve_day_off;
use super::repair::{apply_repair, classify};
use crate::models::{DaySchedule, Employee, EmployeePreferences};

/// Computes one day's schedule from scratch.
///
/// `day_off` holds the explicit absence marks. When `weekday` is given,
/// preference-declared "off" days are merged in and preferences steer the
/// assignment; without it every employee ranks as "any".
///
/// Never fails: an understaffed day comes back with an empty or
/// unsupervised shift and is logged at `warn` level.
pub fn generate_day_schedule(
    date: NaiveDate,
    employees: &[Employee],
    day_off: &[String],
    weekday: Option<u8>,
    preferences: Option<&[EmployeePreferences]>,
) -> DaySchedule {
    // Preferences only apply once the weekday is known.
    let day_off = match weekday {
        Some(w) => resolve_day_off(employees, day_off, w, preferences),
        None => resolve_day_off(employees, day_off, 0, None),
    };

    let available: Vec<Employee> = employees
        .iter()
        .filter(|e| !day_off.contains(&e.id))
        .cloned()
        .collect();

    let candidate = assign_shifts(&available, weekday, preferences);
    let case = classify(&candidate, &available);
    tracing::debug!(%date, ?weekday, off = day_off.len(), ?case, "roster day computed");

    let pair = apply_repair(candidate, &case, &available);
    let day = DaySchedule::new(date, pair.shift1, pair.shift2, day_off);

    let status = day.status(employees);
    if status.is_degraded() {
        tracing::warn!(%date, ?status, available = available.len(), "day is short-staffed");
    }
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayStatus, PreferenceKind, ShiftId};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_qualified_no_absence() {
        let staff = [Employee::new("a").qualified(), Employee::new("b").qualified()];
        let day = generate_day_schedule(date(), &staff, &[], Some(0), None);

        assert_eq!(day.members(ShiftId::Shift1), ["a"]);
        assert_eq!(day.members(ShiftId::Shift2), ["b"]);
        assert_eq!(day.status(&staff), DayStatus::Normal);
    }

    #[test]
    fn test_qualified_off_by_preference_degrades_day() {
        let staff = [Employee::new("a").qualified(), Employee::new("x")];
        let prefs = vec![EmployeePreferences::new("a").with_day(0, PreferenceKind::Off)];
        let day = generate_day_schedule(date(), &staff, &[], Some(0), Some(&prefs));

        assert_eq!(day.day_off, ids(&["a"]));
        assert_eq!(day.members(ShiftId::Shift1), ["x"]);
        assert!(day.members(ShiftId::Shift2).is_empty());
        assert_eq!(day.status(&staff), DayStatus::Understaffed);
    }

    #[test]
    fn test_explicit_off_excluded_without_weekday() {
        let staff = [
            Employee::new("a").qualified(),
            Employee::new("b").qualified(),
            Employee::new("x"),
        ];
        let day = generate_day_schedule(date(), &staff, &ids(&["b"]), None, None);

        assert_eq!(day.day_off, ids(&["b"]));
        assert!(day.shifts_of("b").is_empty());
        // Lone qualified covers the full day
        assert_eq!(day.shifts_of("a"), vec![ShiftId::Shift1, ShiftId::Shift2]);
    }

    #[test]
    fn test_empty_roster() {
        let day = generate_day_schedule(date(), &[], &[], Some(0), None);
        assert!(day.members(ShiftId::Shift1).is_empty());
        assert!(day.members(ShiftId::Shift2).is_empty());
        assert!(day.day_off.is_empty());
    }
}
