//! Shift-assignment pipeline and week builder.
//!
//! # Pipeline
//!
//! ```text
//! resolve_day_off → assign_shifts → repair
//!     → generate_day_schedule → generate_week_schedule
//! ```
//!
//! Every stage is a pure function over borrowed inputs. Given the same
//! roster, preferences and absences, the output is identical on every
//! call: ties are broken by roster order, never by hashing or time.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_roster::models::{Employee, ShiftId};
//! use u_roster::roster::generate_week_schedule;
//!
//! let staff = vec![
//!     Employee::new("1").with_name("An").qualified(),
//!     Employee::new("2").with_name("Binh").qualified(),
//! ];
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let week = generate_week_schedule(monday, &staff, None, None);
//!
//! assert_eq!(week.days.len(), 7);
//! assert_eq!(week.days[0].members(ShiftId::Shift1), ["1"]);
//! assert_eq!(week.days[0].members(ShiftId::Shift2), ["2"]);
//! ```

mod assign;
mod day;
mod day_off;
mod ranking;
mod repair;
mod week;

pub use assign::{assign_shifts, effective_preference, ShiftPair, SHIFT_SLOTS};
pub use day::generate_day_schedule;
pub use day_off::resolve_day_off;
pub use repair::{apply_repair, classify, coverage, repair, Coverage, RepairCase};
pub use week::{
    generate_week_schedule, regenerate_day, regenerate_week, update_day_off,
    update_shift_assignment,
};
