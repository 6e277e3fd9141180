//! Roster domain models.
//!
//! Plain data types exchanged with the surrounding application: the
//! employee roster and preference table come in, day and week schedules
//! go out. Every type derives serde with camelCase field names, matching
//! the stored JSON.
//!
//! | Type | Owned by |
//! |------|----------|
//! | `Employee` | roster store |
//! | `EmployeePreferences` | preference store |
//! | `WeekSchedule` | schedule store (keyed by Monday date) |
//! | `ShiftCatalog` | application configuration |

pub mod calendar;
mod employee;
mod preference;
mod schedule;
mod shift;

pub use employee::Employee;
pub use preference::{preference_of, DayPreference, EmployeePreferences, PreferenceKind};
pub use schedule::{DaySchedule, DayStatus, WeekSchedule};
pub use shift::{ShiftAssignment, ShiftCatalog, ShiftId, ShiftInfo};
