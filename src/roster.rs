//! In-memory roster management.
//!
//! Owns the patient and auxiliary lists and the most recently computed
//! plan. Every mutation discards the cached plan: a plan is only valid for
//! the exact roster it was computed from, and it is always recomputed in
//! full rather than patched.
//!
//! Durable storage is out of scope; all types serialize, so callers can
//! persist a roster however they like.

use serde::{Deserialize, Serialize};

use crate::engine::{AssignError, AssignmentEngine};
use crate::models::{names_match, AssignmentPlan, Auxiliary, Patient};

/// A roster mutation that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A patient already occupies this bed.
    DuplicateBed(u32),
    /// Bed numbers must be strictly positive.
    InvalidBed,
    /// No patient occupies this bed.
    UnknownBed(u32),
    /// An auxiliary with this name already exists (names are compared
    /// case-insensitively).
    DuplicateAuxiliary(String),
    /// No auxiliary with this name.
    UnknownAuxiliary(String),
    /// Auxiliary names must be non-blank.
    BlankName,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateBed(bed) => write!(f, "bed {bed} is already occupied"),
            Self::InvalidBed => write!(f, "bed numbers must be greater than zero"),
            Self::UnknownBed(bed) => write!(f, "no patient in bed {bed}"),
            Self::DuplicateAuxiliary(name) => write!(f, "auxiliary '{name}' already exists"),
            Self::UnknownAuxiliary(name) => write!(f, "no auxiliary named '{name}'"),
            Self::BlankName => write!(f, "auxiliary name must not be blank"),
        }
    }
}

impl std::error::Error for RosterError {}

/// The current patient and auxiliary lists, plus the cached plan.
///
/// # Example
///
/// ```
/// use ward_assign::engine::AssignmentEngine;
/// use ward_assign::models::{AcuityCategory, Patient};
/// use ward_assign::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.add_patient(Patient::new(4, AcuityCategory::Intensive))?;
/// roster.add_auxiliary("Ana")?;
///
/// let engine = AssignmentEngine::new();
/// let plan = roster.assign(&engine)?;
/// assert_eq!(plan.patient_count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    patients: Vec<Patient>,
    auxiliaries: Vec<Auxiliary>,
    plan: Option<AssignmentPlan>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current patients, in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Current auxiliaries, in rotation order.
    pub fn auxiliaries(&self) -> &[Auxiliary] {
        &self.auxiliaries
    }

    /// Number of patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of auxiliaries.
    pub fn auxiliary_count(&self) -> usize {
        self.auxiliaries.len()
    }

    /// The cached plan, if the roster is unchanged since the last
    /// [`assign`](Self::assign).
    pub fn plan(&self) -> Option<&AssignmentPlan> {
        self.plan.as_ref()
    }

    /// Whether an assignment can be computed (both lists non-empty).
    pub fn can_assign(&self) -> bool {
        !self.patients.is_empty() && !self.auxiliaries.is_empty()
    }

    /// Adds a patient. Rejects bed 0 and occupied beds.
    pub fn add_patient(&mut self, patient: Patient) -> Result<(), RosterError> {
        if patient.bed_number == 0 {
            return Err(RosterError::InvalidBed);
        }
        if self.bed_index(patient.bed_number).is_some() {
            return Err(RosterError::DuplicateBed(patient.bed_number));
        }
        self.patients.push(patient);
        self.plan = None;
        Ok(())
    }

    /// Replaces the patient in `bed` with `updated`.
    ///
    /// The updated patient may move to a different bed as long as it is
    /// free.
    pub fn update_patient(&mut self, bed: u32, updated: Patient) -> Result<(), RosterError> {
        if updated.bed_number == 0 {
            return Err(RosterError::InvalidBed);
        }
        let index = self.bed_index(bed).ok_or(RosterError::UnknownBed(bed))?;
        if updated.bed_number != bed && self.bed_index(updated.bed_number).is_some() {
            return Err(RosterError::DuplicateBed(updated.bed_number));
        }
        self.patients[index] = updated;
        self.plan = None;
        Ok(())
    }

    /// Removes and returns the patient in `bed`.
    pub fn remove_patient(&mut self, bed: u32) -> Result<Patient, RosterError> {
        let index = self.bed_index(bed).ok_or(RosterError::UnknownBed(bed))?;
        self.plan = None;
        Ok(self.patients.remove(index))
    }

    /// Adds an auxiliary. The name is trimmed; blank or duplicate names
    /// (case-insensitive) are rejected.
    pub fn add_auxiliary(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }
        if self.auxiliary_index(&name).is_some() {
            return Err(RosterError::DuplicateAuxiliary(name));
        }
        self.auxiliaries.push(Auxiliary::new(name));
        self.plan = None;
        Ok(())
    }

    /// Renames an auxiliary. A pure case change of the same auxiliary is
    /// allowed; colliding with a different auxiliary is not.
    pub fn rename_auxiliary(
        &mut self,
        current: &str,
        new_name: impl Into<String>,
    ) -> Result<(), RosterError> {
        let new_name = new_name.into().trim().to_string();
        if new_name.is_empty() {
            return Err(RosterError::BlankName);
        }
        let index = self
            .auxiliary_index(current)
            .ok_or_else(|| RosterError::UnknownAuxiliary(current.to_string()))?;
        let collision = self
            .auxiliary_index(&new_name)
            .filter(|&other| other != index);
        if collision.is_some() {
            return Err(RosterError::DuplicateAuxiliary(new_name));
        }
        self.auxiliaries[index].name = new_name;
        self.plan = None;
        Ok(())
    }

    /// Removes and returns the auxiliary with the given name
    /// (case-insensitive).
    pub fn remove_auxiliary(&mut self, name: &str) -> Result<Auxiliary, RosterError> {
        let index = self
            .auxiliary_index(name)
            .ok_or_else(|| RosterError::UnknownAuxiliary(name.to_string()))?;
        self.plan = None;
        Ok(self.auxiliaries.remove(index))
    }

    /// Recomputes the plan over the current lists and caches it.
    pub fn assign(&mut self, engine: &AssignmentEngine) -> Result<&AssignmentPlan, AssignError> {
        let plan = engine.assign(&self.patients, &self.auxiliaries)?;
        Ok(self.plan.insert(plan))
    }

    fn bed_index(&self, bed: u32) -> Option<usize> {
        self.patients.iter().position(|p| p.bed_number == bed)
    }

    fn auxiliary_index(&self, name: &str) -> Option<usize> {
        self.auxiliaries
            .iter()
            .position(|a| names_match(&a.name, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AcuityCategory;

    fn seeded_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_patient(Patient::new(1, AcuityCategory::Hospitalization))
            .unwrap();
        roster
            .add_patient(Patient::new(2, AcuityCategory::Intensive))
            .unwrap();
        roster.add_auxiliary("Ana").unwrap();
        roster.add_auxiliary("Bea").unwrap();
        roster
    }

    #[test]
    fn test_add_patient_rejects_duplicate_bed() {
        let mut roster = seeded_roster();
        let err = roster
            .add_patient(Patient::new(1, AcuityCategory::Intermediate))
            .unwrap_err();
        assert_eq!(err, RosterError::DuplicateBed(1));
        assert_eq!(roster.patient_count(), 2);
    }

    #[test]
    fn test_add_patient_rejects_bed_zero() {
        let mut roster = Roster::new();
        let err = roster
            .add_patient(Patient::new(0, AcuityCategory::Hospitalization))
            .unwrap_err();
        assert_eq!(err, RosterError::InvalidBed);
    }

    #[test]
    fn test_update_patient_can_move_to_free_bed() {
        let mut roster = seeded_roster();
        roster
            .update_patient(1, Patient::new(9, AcuityCategory::Intermediate))
            .unwrap();
        assert!(roster.patients().iter().any(|p| p.bed_number == 9));
        assert!(!roster.patients().iter().any(|p| p.bed_number == 1));
    }

    #[test]
    fn test_update_patient_rejects_collision() {
        let mut roster = seeded_roster();
        let err = roster
            .update_patient(1, Patient::new(2, AcuityCategory::Hospitalization))
            .unwrap_err();
        assert_eq!(err, RosterError::DuplicateBed(2));
    }

    #[test]
    fn test_update_unknown_bed() {
        let mut roster = seeded_roster();
        let err = roster
            .update_patient(42, Patient::new(42, AcuityCategory::Hospitalization))
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownBed(42));
    }

    #[test]
    fn test_remove_patient() {
        let mut roster = seeded_roster();
        let removed = roster.remove_patient(2).unwrap();
        assert_eq!(removed.bed_number, 2);
        assert_eq!(roster.patient_count(), 1);
        assert_eq!(roster.remove_patient(2), Err(RosterError::UnknownBed(2)));
    }

    #[test]
    fn test_add_auxiliary_duplicate_is_case_insensitive() {
        let mut roster = seeded_roster();
        let err = roster.add_auxiliary("ANA").unwrap_err();
        assert_eq!(err, RosterError::DuplicateAuxiliary("ANA".to_string()));
    }

    #[test]
    fn test_add_auxiliary_trims_and_rejects_blank() {
        let mut roster = Roster::new();
        roster.add_auxiliary("  Carla  ").unwrap();
        assert_eq!(roster.auxiliaries()[0].name, "Carla");
        assert_eq!(roster.add_auxiliary("   "), Err(RosterError::BlankName));
    }

    #[test]
    fn test_rename_auxiliary_allows_case_change() {
        let mut roster = seeded_roster();
        roster.rename_auxiliary("ana", "ANA").unwrap();
        assert_eq!(roster.auxiliaries()[0].name, "ANA");
    }

    #[test]
    fn test_rename_auxiliary_rejects_collision() {
        let mut roster = seeded_roster();
        let err = roster.rename_auxiliary("Ana", "bea").unwrap_err();
        assert_eq!(err, RosterError::DuplicateAuxiliary("bea".to_string()));
    }

    #[test]
    fn test_remove_auxiliary_case_insensitive() {
        let mut roster = seeded_roster();
        let removed = roster.remove_auxiliary("BEA").unwrap();
        assert_eq!(removed.name, "Bea");
        assert_eq!(roster.auxiliary_count(), 1);
    }

    #[test]
    fn test_can_assign() {
        let mut roster = Roster::new();
        assert!(!roster.can_assign());
        roster
            .add_patient(Patient::new(1, AcuityCategory::Hospitalization))
            .unwrap();
        assert!(!roster.can_assign());
        roster.add_auxiliary("Ana").unwrap();
        assert!(roster.can_assign());
    }

    #[test]
    fn test_assign_caches_plan_and_mutation_invalidates() {
        let mut roster = seeded_roster();
        let engine = AssignmentEngine::new();

        roster.assign(&engine).unwrap();
        assert!(roster.plan().is_some());

        roster
            .add_patient(Patient::new(3, AcuityCategory::Hospitalization))
            .unwrap();
        assert!(roster.plan().is_none());

        let plan = roster.assign(&engine).unwrap();
        assert_eq!(plan.patient_count(), 3);
    }

    #[test]
    fn test_assign_empty_roster_fails() {
        let mut roster = Roster::new();
        roster.add_auxiliary("Ana").unwrap();
        let err = roster.assign(&AssignmentEngine::new()).unwrap_err();
        assert_eq!(err, AssignError::NoPatients);
        assert!(roster.plan().is_none());
    }

    #[test]
    fn test_roster_from_json_fixture() {
        let fixture = r#"{
            "patients": [
                { "bed_number": 4, "name": "L. Ortega", "category": "Intensive" },
                { "bed_number": 1, "name": null, "category": "Hospitalization" },
                { "bed_number": 2, "name": "R. Gil", "category": "Intermediate" }
            ],
            "auxiliaries": [ { "name": "Ana" }, { "name": "Bea" } ],
            "plan": null
        }"#;
        let mut roster: Roster = serde_json::from_str(fixture).unwrap();

        assert_eq!(roster.patient_count(), 3);
        assert_eq!(roster.auxiliary_count(), 2);
        assert!(roster.plan().is_none());

        let plan = roster.assign(&AssignmentEngine::new()).unwrap();
        assert_eq!(plan.patient_count(), 3);
        assert!(plan.is_within_capacity());
    }
}
