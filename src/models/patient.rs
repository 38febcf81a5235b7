//! Patient model.
//!
//! A patient occupies a unique bed and carries an acuity category that
//! determines how much care workload they represent.

use serde::{Deserialize, Serialize};

/// Care acuity of a patient.
///
/// Determines the workload weight used by the assignment engine
/// (see [`CategoryWeights`](super::CategoryWeights)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcuityCategory {
    /// Intensive care — heaviest workload.
    Intensive,
    /// Intermediate care.
    Intermediate,
    /// Regular hospitalization.
    Hospitalization,
}

/// A patient to be assigned to an auxiliary.
///
/// The bed number is the patient's physical location and the natural sort
/// key: adjacent bed numbers are physically near each other. Bed numbers
/// are unique within a roster and strictly positive; both invariants are
/// enforced upstream (see [`validation`](crate::validation) and
/// [`Roster`](crate::roster::Roster)) — the engine assumes strict ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Bed number (unique, > 0).
    pub bed_number: u32,
    /// Patient name, if recorded.
    pub name: Option<String>,
    /// Care acuity category.
    pub category: AcuityCategory,
}

impl Patient {
    /// Creates a patient in the given bed.
    pub fn new(bed_number: u32, category: AcuityCategory) -> Self {
        Self {
            bed_number,
            name: None,
            category,
        }
    }

    /// Sets the patient name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
