//! Assignment plan (solution) model.
//!
//! A plan is a complete mapping from auxiliaries to ordered patient lists,
//! together with any capacity overflows incurred while producing it.

use serde::{Deserialize, Serialize};

use super::auxiliary::names_match;
use super::Patient;

/// One auxiliary's assigned patients, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryRoster {
    /// Auxiliary name.
    pub auxiliary: String,
    /// Assigned patients, in the order they were appended.
    pub patients: Vec<Patient>,
    /// Cumulative workload weight.
    pub load: u32,
}

/// Record of an assignment that pushed an auxiliary past nominal capacity.
///
/// Produced by the overflow fallback: when no auxiliary has room left, the
/// patient is still assigned (to the least-loaded auxiliary) and the
/// condition is reported here rather than failing the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityOverflow {
    /// Auxiliary that absorbed the patient.
    pub auxiliary: String,
    /// Bed number of the overflowing patient.
    pub bed_number: u32,
    /// Cumulative load after the assignment.
    pub load: u32,
    /// Nominal capacity that was exceeded.
    pub capacity: u32,
}

/// A complete assignment of patients to auxiliaries.
///
/// Contains exactly one roster per input auxiliary, in input order; every
/// input patient appears in exactly one roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Per-auxiliary assignments, in auxiliary input order.
    pub rosters: Vec<AuxiliaryRoster>,
    /// Overflow-fallback assignments, in the order they occurred.
    pub overflows: Vec<CapacityOverflow>,
}

impl AuxiliaryRoster {
    /// Creates an empty roster for the given auxiliary.
    pub fn new(auxiliary: impl Into<String>) -> Self {
        Self {
            auxiliary: auxiliary.into(),
            patients: Vec::new(),
            load: 0,
        }
    }
}

impl AssignmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the roster for an auxiliary (case-insensitive).
    pub fn roster_for(&self, auxiliary: &str) -> Option<&AuxiliaryRoster> {
        self.rosters.iter().find(|r| names_match(&r.auxiliary, auxiliary))
    }

    /// Patients assigned to an auxiliary.
    pub fn patients_for(&self, auxiliary: &str) -> Option<&[Patient]> {
        self.roster_for(auxiliary).map(|r| r.patients.as_slice())
    }

    /// Cumulative load of an auxiliary.
    pub fn load_for(&self, auxiliary: &str) -> Option<u32> {
        self.roster_for(auxiliary).map(|r| r.load)
    }

    /// Total number of assigned patients.
    pub fn patient_count(&self) -> usize {
        self.rosters.iter().map(|r| r.patients.len()).sum()
    }

    /// Number of auxiliaries in the plan.
    pub fn auxiliary_count(&self) -> usize {
        self.rosters.len()
    }

    /// Whether every assignment stayed within nominal capacity.
    pub fn is_within_capacity(&self) -> bool {
        self.overflows.is_empty()
    }

    /// Auxiliaries that absorbed overflow, deduplicated, in first-overflow
    /// order.
    pub fn overflowed_auxiliaries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for o in &self.overflows {
            if !seen.iter().any(|s| names_match(s, &o.auxiliary)) {
                seen.push(&o.auxiliary);
            }
        }
        seen
    }

    /// Largest per-auxiliary load (0 for an empty plan).
    pub fn max_load(&self) -> u32 {
        self.rosters.iter().map(|r| r.load).max().unwrap_or(0)
    }

    /// Smallest per-auxiliary load (0 for an empty plan).
    pub fn min_load(&self) -> u32 {
        self.rosters.iter().map(|r| r.load).min().unwrap_or(0)
    }
}
