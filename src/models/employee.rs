//! Employee (cashier) model.
//!
//! Employees are owned by the surrounding roster store. The pipeline treats
//! them as immutable values and relies on the slice order as the roster's
//! natural order for tie-breaking.

use serde::{Deserialize, Serialize};

/// A team member who can be placed on shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color (CSS color string, e.g. `#3b82f6`).
    pub color: String,
    /// Qualified to staff a shift without a second person present.
    #[serde(default)]
    pub can_work_alone: bool,
}

impl Employee {
    /// Creates an unqualified employee with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            color: String::new(),
            can_work_alone: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Marks the employee as able to work a shift alone.
    pub fn with_can_work_alone(mut self, can_work_alone: bool) -> Self {
        self.can_work_alone = can_work_alone;
        self
    }

    /// Shorthand for `with_can_work_alone(true)`.
    pub fn qualified(self) -> Self {
        self.with_can_work_alone(true)
    }

    /// Whether this employee may staff a shift alone.
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.can_work_alone
    }

    /// Seed roster used when the store has no employees yet.
    pub fn default_roster() -> Vec<Employee> {
        vec![
            Employee::new("1")
                .with_name("Employee 1")
                .with_color("#3b82f6"),
            Employee::new("2")
                .with_name("Employee 2")
                .with_color("#10b981"),
        ]
    }
}
