//! Weekly two-shift roster builder for small retail teams.
//!
//! Assigns a handful of cashiers to two daily shifts across a week,
//! honoring day-off requests, shift-time preferences, and a
//! "can work alone" qualification. Persistence, HTTP and UI belong to the
//! surrounding application: it supplies the roster, the preference table
//! and any stored week, and stores what this crate returns.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `EmployeePreferences`,
//!   `ShiftId`, `ShiftCatalog`, `DaySchedule`, `WeekSchedule`, week calendar helpers
//! - **`roster`**: The day pipeline (day-off resolution → assignment →
//!   supervision repair) and the week builder with its mutations
//! - **`validation`**: Input integrity checks (duplicate IDs, weekday ranges, week shape)
//! - **`summary`**: Week staffing indicators
//! - **`error`**: Boundary parsing errors
//!
//! # Guarantees
//!
//! All entry points are pure and deterministic. They never fail: a day
//! without enough staff comes back with an empty or unsupervised shift,
//! flagged by `DaySchedule::status`.
//!
//! # Features
//!
//! - `parallel`: compute the days of a week concurrently with rayon.

pub mod error;
pub mod models;
pub mod roster;
pub mod summary;
pub mod validation;

pub use error::RosterError;
pub use roster::{
    generate_day_schedule, generate_week_schedule, regenerate_day, regenerate_week,
    update_day_off, update_shift_assignment,
};
