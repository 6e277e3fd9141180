//! Day-off resolution.
//!
//! Merges explicit day-off marks with preference-declared "off" days into
//! one absence list for a date.

use crate::models::{preference_of, Employee, EmployeePreferences, PreferenceKind};

/// Returns the absence list for a weekday.
///
/// Keeps the explicit IDs first (deduplicated, in order), then appends every
/// roster member whose preference for `weekday` is `Off`, in roster order.
/// Idempotent: feeding the result back in returns it unchanged.
pub fn resolve_day_off(
    employees: &[Employee],
    explicit_off: &[String],
    weekday: u8,
    preferences: Option<&[EmployeePreferences]>,
) -> Vec<String> {
    let requested = employees
        .iter()
        .filter(|e| preference_of(preferences, &e.id, weekday) == PreferenceKind::Off)
        .map(|e| &e.id);

    let mut off: Vec<String> = Vec::with_capacity(explicit_off.len());
    for id in explicit_off.iter().chain(requested) {
        if !off.contains(id) {
            off.push(id.clone());
        }
    }
    off
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Employee> {
        vec![Employee::new("1"), Employee::new("2"), Employee::new("3")]
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_preferences_keeps_explicit() {
        let off = resolve_day_off(&staff(), &ids(&["2", "2"]), 0, None);
        assert_eq!(off, ids(&["2"]));
    }

    #[test]
    fn test_preference_off_is_added() {
        let prefs = vec![
            EmployeePreferences::new("3").with_day(4, PreferenceKind::Off),
            EmployeePreferences::new("1").with_day(4, PreferenceKind::Morning),
        ];
        let off = resolve_day_off(&staff(), &ids(&["2"]), 4, Some(&prefs));
        assert_eq!(off, ids(&["2", "3"]));

        // Other weekdays unaffected
        assert!(resolve_day_off(&staff(), &[], 5, Some(&prefs)).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let prefs = vec![EmployeePreferences::new("1").with_day(2, PreferenceKind::Off)];
        let once = resolve_day_off(&staff(), &ids(&["3"]), 2, Some(&prefs));
        let twice = resolve_day_off(&staff(), &once, 2, Some(&prefs));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_employee_preferences_ignored() {
        let prefs = vec![EmployeePreferences::new("gone").with_day(0, PreferenceKind::Off)];
        assert!(resolve_day_off(&staff(), &[], 0, Some(&prefs)).is_empty());
    }
}
