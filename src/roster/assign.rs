//! Initial shift assignment.
//!
//! # Algorithm
//!
//! Single pass, no backtracking:
//! 1. Split available employees into qualified and unqualified, keeping
//!    roster order, and attach each one's effective preference.
//! 2. Shift 1: lead = first qualified by morning → any → evening, plus one
//!    unqualified partner (morning → any). Without a qualified lead, up to
//!    two unqualified by morning → any → evening.
//! 3. Shift 2: same over the employees still unused, evening first.
//!
//! Nobody is placed twice; when both shifts are full, leftovers stay
//! unassigned.

use serde::{Deserialize, Serialize};

use super::ranking::{Candidate, RankedFilter, UsedIds};
use crate::models::{preference_of, Employee, EmployeePreferences, PreferenceKind, ShiftId};

/// Members per shift the assigner aims for.
pub const SHIFT_SLOTS: usize = 2;

/// Member IDs of both shifts of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPair {
    /// Morning-leaning shift.
    pub shift1: Vec<String>,
    /// Evening-leaning shift.
    pub shift2: Vec<String>,
}

impl ShiftPair {
    /// Creates a pair.
    pub fn new(shift1: Vec<String>, shift2: Vec<String>) -> Self {
        Self { shift1, shift2 }
    }

    /// Members of one shift.
    pub fn members(&self, shift: ShiftId) -> &[String] {
        match shift {
            ShiftId::Shift1 => &self.shift1,
            ShiftId::Shift2 => &self.shift2,
        }
    }

    pub(crate) fn members_mut(&mut self, shift: ShiftId) -> &mut Vec<String> {
        match shift {
            ShiftId::Shift1 => &mut self.shift1,
            ShiftId::Shift2 => &mut self.shift2,
        }
    }

    /// Whether an employee is on either shift.
    pub fn is_assigned(&self, employee_id: &str) -> bool {
        self.shift1
            .iter()
            .chain(&self.shift2)
            .any(|id| id == employee_id)
    }
}

/// Preference used for ranking an available employee.
///
/// `Off` cannot apply to someone who is available, so it ranks as `Any`.
pub fn effective_preference(
    employee_id: &str,
    weekday: Option<u8>,
    preferences: Option<&[EmployeePreferences]>,
) -> PreferenceKind {
    match weekday.map(|w| preference_of(preferences, employee_id, w)) {
        Some(PreferenceKind::Off) | None => PreferenceKind::Any,
        Some(kind) => kind,
    }
}

/// Partitions available employees into the two shifts.
///
/// `available` must already exclude employees off that day. Without a
/// weekday every employee ranks as "any".
pub fn assign_shifts(
    available: &[Employee],
    weekday: Option<u8>,
    preferences: Option<&[EmployeePreferences]>,
) -> ShiftPair {
    let (qualified, unqualified): (Vec<Candidate<'_>>, Vec<Candidate<'_>>) = available
        .iter()
        .map(|employee| Candidate {
            employee,
            preference: effective_preference(&employee.id, weekday, preferences),
        })
        .partition(|c| c.employee.is_qualified());

    let used = UsedIds::default();
    let (shift1, used) = staff_shift(ShiftId::Shift1, &qualified, &unqualified, &used);
    let (shift2, _) = staff_shift(ShiftId::Shift2, &qualified, &unqualified, &used);

    ShiftPair::new(ids(&shift1), ids(&shift2))
}

/// Picks the crew of one shift and returns it with the extended used set.
fn staff_shift<'a>(
    shift: ShiftId,
    qualified: &[Candidate<'a>],
    unqualified: &[Candidate<'a>],
    used: &UsedIds<'a>,
) -> (Vec<&'a Employee>, UsedIds<'a>) {
    let crew: Vec<&'a Employee> = match RankedFilter::crew(shift).first(qualified, used) {
        Some(lead) => {
            let with_lead = used.with([lead.id.as_str()]);
            let partner = RankedFilter::partner(shift).first(unqualified, &with_lead);
            std::iter::once(lead).chain(partner).collect()
        }
        None => RankedFilter::crew(shift).take(unqualified, used, SHIFT_SLOTS),
    };
    let used = used.with(crew.iter().copied().map(|e| e.id.as_str()));
    (crew, used)
}

fn ids(crew: &[&Employee]) -> Vec<String> {
    crew.iter().map(|e| e.id.clone()).collect()
}
