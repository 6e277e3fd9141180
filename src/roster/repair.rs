//! Supervision repair.
//!
//! Post-processes a candidate assignment so that every shift is led by a
//! qualified (can-work-alone) employee whenever the day's availability
//! allows it.
//!
//! # Rules
//!
//! A shift is *supervised* when it has at least one qualified member. An
//! empty shift counts as unsupervised: it must not stay empty while a
//! qualified employee could fill it.
//!
//! | Availability | Shifts | Case |
//! |--------------|--------|------|
//! | any | both supervised | `Satisfied` |
//! | 1 qualified | either unsupervised | `CoverBoth` |
//! | ≥2 qualified | either unsupervised | `Reinforce` (per shift) |
//! | 0 qualified, ≥2 unqualified | — | `UnsupervisedCrew` |
//! | 0 qualified, 1 unqualified | — | `LoneUnqualified` |
//! | nobody | — | `NoStaff` |
//!
//! Repair never fails. Days it cannot fix come back with an empty or
//! unsupervised shift, which callers surface as a staffing warning.

use std::collections::HashSet;

use super::assign::{ShiftPair, SHIFT_SLOTS};
use crate::models::{Employee, ShiftId};

/// Staffing state of a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Nobody on the shift.
    Empty,
    /// Members present, none qualified.
    Unsupervised,
    /// At least one qualified member.
    Supervised,
}

/// The repair decided for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairCase {
    /// Both shifts already supervised.
    Satisfied,
    /// The only qualified employee works both shifts.
    CoverBoth {
        /// The lone qualified employee.
        employee_id: String,
    },
    /// Qualified employees are inserted into unsupervised shifts.
    Reinforce {
        /// Employee added to shift 1, if it needed one.
        shift1: Option<String>,
        /// Employee added to shift 2, if it needed one.
        shift2: Option<String>,
    },
    /// Nobody qualified: unqualified staff fill shift 1 first. Degraded.
    UnsupervisedCrew,
    /// Nobody qualified and a single unqualified employee. Degraded.
    LoneUnqualified {
        /// The only available employee.
        employee_id: String,
    },
    /// Nobody available.
    NoStaff,
}

impl RepairCase {
    /// Whether the repaired day still violates the supervision rule.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            RepairCase::UnsupervisedCrew | RepairCase::LoneUnqualified { .. } | RepairCase::NoStaff
        )
    }
}

/// Coverage of a member list given the set of qualified IDs.
pub fn coverage(members: &[String], qualified: &HashSet<&str>) -> Coverage {
    if members.is_empty() {
        Coverage::Empty
    } else if members.iter().any(|id| qualified.contains(id.as_str())) {
        Coverage::Supervised
    } else {
        Coverage::Unsupervised
    }
}

/// Decides how to repair `candidate`.
///
/// Expects members to be drawn from `available`; `repair` guarantees that
/// before classifying.
pub fn classify(candidate: &ShiftPair, available: &[Employee]) -> RepairCase {
    let qualified: Vec<&Employee> = available.iter().filter(|e| e.is_qualified()).collect();
    let qualified_ids: HashSet<&str> = qualified.iter().map(|e| e.id.as_str()).collect();

    let needs_lead = |shift: ShiftId| {
        coverage(candidate.members(shift), &qualified_ids) != Coverage::Supervised
    };
    if !needs_lead(ShiftId::Shift1) && !needs_lead(ShiftId::Shift2) {
        return RepairCase::Satisfied;
    }

    match qualified.as_slice() {
        [only] => RepairCase::CoverBoth {
            employee_id: only.id.clone(),
        },
        [] => {
            let mut unqualified = available.iter().filter(|e| !e.is_qualified());
            match (unqualified.next(), unqualified.next()) {
                (None, _) => RepairCase::NoStaff,
                (Some(only), None) => RepairCase::LoneUnqualified {
                    employee_id: only.id.clone(),
                },
                (Some(_), Some(_)) => RepairCase::UnsupervisedCrew,
            }
        }
        _ => {
            let shift1 = needs_lead(ShiftId::Shift1)
                .then(|| pick_lead(candidate, &qualified, ShiftId::Shift1, None))
                .flatten();
            let shift2 = needs_lead(ShiftId::Shift2)
                .then(|| pick_lead(candidate, &qualified, ShiftId::Shift2, shift1.as_deref()))
                .flatten();
            RepairCase::Reinforce { shift1, shift2 }
        }
    }
}

/// Chooses a qualified employee for `shift`.
///
/// Prefers one on neither shift (roster order); otherwise reuses a
/// qualified member of the other shift, double-booking them.
fn pick_lead(
    candidate: &ShiftPair,
    qualified: &[&Employee],
    shift: ShiftId,
    already_added: Option<&str>,
) -> Option<String> {
    let unused = qualified
        .iter()
        .find(|e| !candidate.is_assigned(&e.id) && already_added != Some(e.id.as_str()));
    if let Some(e) = unused {
        return Some(e.id.clone());
    }

    let other = shift.other();
    let mut other_members: Vec<&str> =
        candidate.members(other).iter().map(String::as_str).collect();
    if other == ShiftId::Shift1 {
        other_members.extend(already_added);
    }
    qualified
        .iter()
        .find(|e| other_members.contains(&e.id.as_str()))
        .map(|e| e.id.clone())
}

/// Applies the supervision rules to a candidate assignment.
///
/// Members that are not in `available` (absent or unknown) are dropped
/// first, along with duplicates inside a shift.
pub fn repair(candidate: &ShiftPair, available: &[Employee]) -> ShiftPair {
    let cleaned = retain_available(candidate, available);
    let case = classify(&cleaned, available);
    apply_repair(cleaned, &case, available)
}

/// Applies a previously classified case.
pub fn apply_repair(mut pair: ShiftPair, case: &RepairCase, available: &[Employee]) -> ShiftPair {
    match case {
        RepairCase::Satisfied => pair,
        RepairCase::CoverBoth { employee_id } => {
            for shift in ShiftId::ALL {
                let members = pair.members_mut(shift);
                if !members.contains(employee_id) {
                    members.insert(0, employee_id.clone());
                }
            }
            pair
        }
        RepairCase::Reinforce { shift1, shift2 } => {
            for (shift, lead) in [(ShiftId::Shift1, shift1), (ShiftId::Shift2, shift2)] {
                if let Some(id) = lead {
                    let members = pair.members_mut(shift);
                    if !members.contains(id) {
                        members.insert(0, id.clone());
                    }
                }
            }
            pair
        }
        RepairCase::UnsupervisedCrew => {
            let roster_order = available.iter().map(|e| &e.id);

            let mut shift1: Vec<String> = Vec::with_capacity(SHIFT_SLOTS);
            for id in pair.shift1.iter().chain(&pair.shift2).chain(roster_order.clone()) {
                if shift1.len() >= SHIFT_SLOTS && !pair.shift1.contains(id) {
                    break;
                }
                if !shift1.contains(id) {
                    shift1.push(id.clone());
                }
            }

            let mut shift2: Vec<String> = Vec::new();
            for id in pair.shift2.iter().chain(roster_order) {
                if !shift1.contains(id) && !shift2.contains(id) {
                    shift2.push(id.clone());
                }
            }
            ShiftPair::new(shift1, shift2)
        }
        RepairCase::LoneUnqualified { employee_id } => {
            ShiftPair::new(vec![employee_id.clone()], Vec::new())
        }
        RepairCase::NoStaff => ShiftPair::default(),
    }
}

fn retain_available(candidate: &ShiftPair, available: &[Employee]) -> ShiftPair {
    let keep = |members: &[String]| {
        let mut kept: Vec<String> = Vec::with_capacity(members.len());
        for id in members {
            if available.iter().any(|e| &e.id == id) && !kept.contains(id) {
                kept.push(id.clone());
            }
        }
        kept
    };
    ShiftPair::new(keep(&candidate.shift1), keep(&candidate.shift2))
}
