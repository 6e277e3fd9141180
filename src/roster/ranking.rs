//! Ranked preference filter.
//!
//! Selection is a list of preference tiers evaluated in priority order.
//! Within a tier, candidates keep roster order, so the first match is
//! stable and the whole pipeline stays deterministic.

use std::collections::BTreeSet;

use crate::models::{Employee, PreferenceKind, ShiftId};

/// An available employee with their effective preference for the day.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub employee: &'a Employee,
    pub preference: PreferenceKind,
}

impl<'a> Candidate<'a> {
    pub fn id(&self) -> &'a str {
        &self.employee.id
    }
}

/// Employee IDs already placed, threaded through each selection step.
///
/// Never mutated in place; `with` returns an extended copy.
#[derive(Debug, Clone, Default)]
pub(crate) struct UsedIds<'a>(BTreeSet<&'a str>);

impl<'a> UsedIds<'a> {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn with(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut next = self.0.clone();
        next.extend(ids);
        Self(next)
    }
}

/// Preference tiers, most wanted first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankedFilter {
    tiers: &'static [PreferenceKind],
}

const MORNING_FIRST: &[PreferenceKind] = &[
    PreferenceKind::Morning,
    PreferenceKind::Any,
    PreferenceKind::Evening,
];
const EVENING_FIRST: &[PreferenceKind] = &[
    PreferenceKind::Evening,
    PreferenceKind::Any,
    PreferenceKind::Morning,
];
const MORNING_PARTNER: &[PreferenceKind] = &[PreferenceKind::Morning, PreferenceKind::Any];
const EVENING_PARTNER: &[PreferenceKind] = &[PreferenceKind::Evening, PreferenceKind::Any];

impl RankedFilter {
    /// Tiers for filling a shift: its own time first, then "any", then the other time.
    pub fn crew(shift: ShiftId) -> Self {
        match shift {
            ShiftId::Shift1 => Self { tiers: MORNING_FIRST },
            ShiftId::Shift2 => Self { tiers: EVENING_FIRST },
        }
    }

    /// Tiers for the unqualified partner of a qualified lead.
    ///
    /// Someone preferring the other shift is never pulled in as a partner.
    pub fn partner(shift: ShiftId) -> Self {
        match shift {
            ShiftId::Shift1 => Self {
                tiers: MORNING_PARTNER,
            },
            ShiftId::Shift2 => Self {
                tiers: EVENING_PARTNER,
            },
        }
    }

    /// First unused candidate in tier order.
    pub fn first<'a>(
        &self,
        candidates: &[Candidate<'a>],
        used: &UsedIds<'_>,
    ) -> Option<&'a Employee> {
        self.take(candidates, used, 1).into_iter().next()
    }

    /// Up to `limit` unused candidates in tier order.
    pub fn take<'a>(
        &self,
        candidates: &[Candidate<'a>],
        used: &UsedIds<'_>,
        limit: usize,
    ) -> Vec<&'a Employee> {
        self.tiers
            .iter()
            .flat_map(|&tier| candidates.iter().filter(move |c| c.preference == tier))
            .filter(|c| !used.contains(c.id()))
            .map(|c| c.employee)
            .take(limit)
            .collect()
    }
}
