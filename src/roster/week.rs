//! Week builder and schedule mutations.
//!
//! Stored days are the source of truth: `generate_week_schedule` only runs
//! the day pipeline for dates the existing schedule lacks. Regeneration is
//! explicit (`regenerate_day`, `regenerate_week`) or a side effect of a
//! day-off toggle. Every operation returns a new `WeekSchedule` and leaves
//! its inputs untouched.

use chrono::NaiveDate;

use super::day::generate_day_schedule;
use crate::models::calendar::{week_dates, DAYS_PER_WEEK};
use crate::models::{DaySchedule, Employee, EmployeePreferences, ShiftId, WeekSchedule};

/// Builds the week starting at `week_start`.
///
/// Days present in `existing` (matched by date) are reused verbatim; the
/// others are computed with no explicit absences and weekday index equal
/// to the offset from `week_start`.
pub fn generate_week_schedule(
    week_start: NaiveDate,
    employees: &[Employee],
    existing: Option<&WeekSchedule>,
    preferences: Option<&[EmployeePreferences]>,
) -> WeekSchedule {
    let dates = week_dates(week_start);
    let build = |offset: usize| -> DaySchedule {
        let date = dates[offset];
        match existing.and_then(|week| week.day(date)) {
            Some(stored) => stored.clone(),
            None => generate_day_schedule(date, employees, &[], Some(offset as u8), preferences),
        }
    };

    #[cfg(feature = "parallel")]
    let days: Vec<DaySchedule> = {
        use rayon::prelude::*;
        (0..DAYS_PER_WEEK).into_par_iter().map(build).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let days: Vec<DaySchedule> = (0..DAYS_PER_WEEK).map(build).collect();

    WeekSchedule::new(week_start, days)
}

/// Recomputes every day of the week, ignoring anything stored.
pub fn regenerate_week(
    week_start: NaiveDate,
    employees: &[Employee],
    preferences: Option<&[EmployeePreferences]>,
) -> WeekSchedule {
    generate_week_schedule(week_start, employees, None, preferences)
}

/// Marks or unmarks one employee as off on `date` and recomputes that day.
///
/// Preferences are looked up by the day's position in the week, as
/// `generate_week_schedule` does. Manual shift edits for the day are
/// discarded. A date outside the week leaves the schedule unchanged.
pub fn update_day_off(
    schedule: &WeekSchedule,
    date: NaiveDate,
    employee_id: &str,
    is_off: bool,
    employees: &[Employee],
    preferences: Option<&[EmployeePreferences]>,
) -> WeekSchedule {
    let updated = schedule.map_day(date, |day, position| {
        let mut day_off: Vec<String> = day.day_off.clone();
        if is_off {
            if !day_off.iter().any(|id| id == employee_id) {
                day_off.push(employee_id.to_string());
            }
        } else {
            day_off.retain(|id| id != employee_id);
        }
        generate_day_schedule(date, employees, &day_off, Some(position as u8), preferences)
    });

    updated.unwrap_or_else(|| {
        tracing::debug!(%date, week = %schedule.week_start, "day-off update outside week ignored");
        schedule.clone()
    })
}

/// Replaces one shift's members on `date`.
///
/// No staffing validation: manual edits may leave a shift unsupervised,
/// which `DaySchedule::status` reports. A date outside the week leaves
/// the schedule unchanged.
pub fn update_shift_assignment(
    schedule: &WeekSchedule,
    date: NaiveDate,
    shift: ShiftId,
    employee_ids: Vec<String>,
) -> WeekSchedule {
    let updated = schedule.map_day(date, |day, _| day.with_shift(shift, employee_ids));

    updated.unwrap_or_else(|| {
        tracing::debug!(
            %date,
            %shift,
            week = %schedule.week_start,
            "shift edit outside week ignored"
        );
        schedule.clone()
    })
}

/// Recomputes one day on demand.
///
/// The day's stored absence marks are kept as explicit day-off input;
/// shift edits are discarded. A date outside the week leaves the schedule
/// unchanged.
pub fn regenerate_day(
    schedule: &WeekSchedule,
    date: NaiveDate,
    employees: &[Employee],
    preferences: Option<&[EmployeePreferences]>,
) -> WeekSchedule {
    let updated = schedule.map_day(date, |day, position| {
        generate_day_schedule(date, employees, &day.day_off, Some(position as u8), preferences)
    });

    updated.unwrap_or_else(|| {
        tracing::debug!(%date, week = %schedule.week_start, "regeneration outside week ignored");
        schedule.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::week_end;
    use crate::models::PreferenceKind;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new("a").with_name("An").qualified(),
            Employee::new("b").with_name("Binh").qualified(),
            Employee::new("x").with_name("Xuan"),
        ]
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_week_has_seven_consecutive_days() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        assert_eq!(week.week_start, monday());
        assert_eq!(week.days.len(), 7);
        for (i, day) in week.days.iter().enumerate() {
            assert_eq!(day.date, week_dates(monday())[i]);
        }
        assert_eq!(week.days[6].date, week_end(monday()));
    }

    #[test]
    fn test_existing_days_reused_verbatim() {
        let original = generate_week_schedule(monday(), &staff(), None, None);
        let edited = update_shift_assignment(&original, monday(), ShiftId::Shift1, ids(&["x"]));

        // Roster change would alter fresh days, but stored days win.
        let bigger = {
            let mut s = staff();
            s.insert(0, Employee::new("new").qualified());
            s
        };
        let again = generate_week_schedule(monday(), &bigger, Some(&edited), None);
        assert_eq!(again, edited);
    }

    #[test]
    fn test_missing_days_filled_from_pipeline() {
        let full = generate_week_schedule(monday(), &staff(), None, None);
        let partial = WeekSchedule::new(monday(), full.days[..3].to_vec());
        let rebuilt = generate_week_schedule(monday(), &staff(), Some(&partial), None);
        assert_eq!(rebuilt, full);
    }

    #[test]
    fn test_preferences_use_offset_weekday() {
        let prefs = vec![EmployeePreferences::new("a").with_day(2, PreferenceKind::Off)];
        let week = generate_week_schedule(monday(), &staff(), None, Some(&prefs));
        assert_eq!(week.days[2].day_off, ids(&["a"]));
        assert!(week.days[1].day_off.is_empty());
        assert!(week.days[2].shifts_of("a").is_empty());
    }

    #[test]
    fn test_update_day_off_recomputes_day() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let wednesday = week.days[2].date;
        let updated = update_day_off(&week, wednesday, "a", true, &staff(), None);

        let day = updated.day(wednesday).unwrap();
        assert_eq!(day.day_off, ids(&["a"]));
        assert!(day.shifts_of("a").is_empty());
        assert_eq!(day.members(ShiftId::Shift1), ["b", "x"]);
        assert_eq!(day.members(ShiftId::Shift2), ["b"]);

        // Other days and the input are untouched
        assert_eq!(updated.days[1], week.days[1]);
        assert!(week.days[2].day_off.is_empty());
    }

    #[test]
    fn test_day_off_toggle_round_trip() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let date = week.days[0].date;
        let off = update_day_off(&week, date, "b", true, &staff(), None);
        let back = update_day_off(&off, date, "b", false, &staff(), None);

        let fresh = generate_day_schedule(date, &staff(), &[], Some(0), None);
        assert_eq!(back.days[0], fresh);
    }

    #[test]
    fn test_day_off_toggle_round_trip_on_tuesday_week() {
        let tuesday = monday().succ_opt().unwrap();
        let prefs = vec![EmployeePreferences::new("a").with_day(0, PreferenceKind::Evening)];
        let week = generate_week_schedule(tuesday, &staff(), None, Some(&prefs));
        assert_eq!(week.days[0].members(ShiftId::Shift2), ["a"]);

        let off = update_day_off(&week, tuesday, "nobody", true, &staff(), Some(&prefs));
        let back = update_day_off(&off, tuesday, "nobody", false, &staff(), Some(&prefs));
        assert_eq!(back.days[0], week.days[0]);
        assert_eq!(regenerate_day(&week, tuesday, &staff(), Some(&prefs)), week);
    }

    #[test]
    fn test_day_off_toggle_discards_manual_edit() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let date = week.days[0].date;
        let edited = update_shift_assignment(&week, date, ShiftId::Shift2, ids(&["x"]));
        let toggled = update_day_off(&edited, date, "nobody", false, &staff(), None);
        assert_eq!(toggled.days[0], week.days[0]);
    }

    #[test]
    fn test_update_shift_assignment_is_unvalidated() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let date = week.days[4].date;
        let updated = update_shift_assignment(&week, date, ShiftId::Shift2, ids(&["x"]));
        assert_eq!(updated.days[4].members(ShiftId::Shift2), ["x"]);
        assert_eq!(
            updated.days[4].members(ShiftId::Shift1),
            week.days[4].members(ShiftId::Shift1)
        );
        assert!(updated.days[4].status(&staff()).is_degraded());
    }

    #[test]
    fn test_date_outside_week_is_noop() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let elsewhere = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert_eq!(update_day_off(&week, elsewhere, "a", true, &staff(), None), week);
        assert_eq!(
            update_shift_assignment(&week, elsewhere, ShiftId::Shift1, vec![]),
            week
        );
        assert_eq!(regenerate_day(&week, elsewhere, &staff(), None), week);
    }

    #[test]
    fn test_regenerate_day_keeps_absences() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let date = week.days[3].date;
        let off = update_day_off(&week, date, "a", true, &staff(), None);
        let edited = update_shift_assignment(&off, date, ShiftId::Shift1, ids(&["x"]));

        let regenerated = regenerate_day(&edited, date, &staff(), None);
        assert_eq!(regenerated.days[3], off.days[3]);
    }

    #[test]
    fn test_regenerate_week_ignores_stored() {
        let week = generate_week_schedule(monday(), &staff(), None, None);
        let edited = update_shift_assignment(&week, monday(), ShiftId::Shift1, ids(&["x"]));
        assert_eq!(regenerate_week(monday(), &staff(), None), week);
        assert_ne!(edited, week);
    }
}
