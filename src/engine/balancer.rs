//! Locality-and-load-aware greedy assignment.
//!
//! # Algorithm
//!
//! 1. Sort patients by ascending bed number (on a copy).
//! 2. Walk the sorted list with a rotation cursor over the auxiliaries.
//! 3. A patient goes to the cursor auxiliary while it has room, so runs of
//!    adjacent beds stay together; once full, the cursor scans forward
//!    (wrapping) for an auxiliary with room and moves there.
//! 4. When nobody has room the patient goes to the least-loaded auxiliary
//!    anyway and the overflow is recorded on the plan.
//!
//! # Complexity
//! O(n * a) where n = patients, a = auxiliaries (forward scan per patient).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::shuffle::block_shuffle;
use super::strategy::{FitPolicy, ShufflePolicy, StartPolicy, Strategy};
use crate::models::{
    AssignmentPlan, Auxiliary, AuxiliaryRoster, CapacityOverflow, CategoryWeights, Patient,
    DEFAULT_CAPACITY,
};

/// Input rejected by the engine.
///
/// Fatal to the call: no partial plan is produced. Callers are expected to
/// validate before invoking rather than recover from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// The patient list was empty.
    NoPatients,
    /// The auxiliary list was empty.
    NoAuxiliaries,
}

impl std::fmt::Display for AssignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPatients => write!(f, "no patients to assign"),
            Self::NoAuxiliaries => write!(f, "no auxiliaries available"),
        }
    }
}

impl std::error::Error for AssignError {}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOptions {
    /// Maximum cumulative weight per auxiliary.
    pub capacity: u32,
    /// Category → weight mapping.
    pub weights: CategoryWeights,
    /// Variant policies: rotation start, shuffle, fit.
    pub strategy: Strategy,
    /// RNG seed for the randomized policies. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            weights: CategoryWeights::default(),
            strategy: Strategy::default(),
            seed: None,
        }
    }
}

impl AssignOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-auxiliary capacity ceiling.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the category weight table.
    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixes the RNG seed, making randomized policies reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Locality-aware, capacity-bounded assignment engine.
///
/// A pure function of its inputs and options: no state survives a call,
/// and the input slices are never mutated.
///
/// # Example
///
/// ```
/// use ward_assign::engine::AssignmentEngine;
/// use ward_assign::models::{AcuityCategory, Auxiliary, Patient};
///
/// let patients = vec![
///     Patient::new(3, AcuityCategory::Hospitalization),
///     Patient::new(1, AcuityCategory::Intensive),
/// ];
/// let auxiliaries = vec![Auxiliary::new("Ana"), Auxiliary::new("Bea")];
///
/// let plan = AssignmentEngine::new().assign(&patients, &auxiliaries).unwrap();
/// assert_eq!(plan.patient_count(), 2);
/// assert!(plan.is_within_capacity());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    options: AssignOptions,
}

impl AssignmentEngine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the engine options.
    pub fn with_options(mut self, options: AssignOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the engine options.
    pub fn options(&self) -> &AssignOptions {
        &self.options
    }

    /// Assigns every patient to exactly one auxiliary.
    ///
    /// The result contains one roster per auxiliary (possibly empty), in
    /// auxiliary input order. Errors when either slice is empty; otherwise
    /// the plan is always total — a patient that fits nowhere goes to the
    /// least-loaded auxiliary and is reported in
    /// [`AssignmentPlan::overflows`].
    pub fn assign(
        &self,
        patients: &[Patient],
        auxiliaries: &[Auxiliary],
    ) -> Result<AssignmentPlan, AssignError> {
        if patients.is_empty() {
            return Err(AssignError::NoPatients);
        }
        if auxiliaries.is_empty() {
            return Err(AssignError::NoAuxiliaries);
        }

        let opts = &self.options;
        let mut rng = match opts.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut ordered: Vec<Patient> = patients.to_vec();
        ordered.sort_by_key(|p| p.bed_number);
        if let ShufflePolicy::Block(size) = opts.strategy.shuffle {
            block_shuffle(&mut ordered, size, &mut rng);
        }

        let count = auxiliaries.len();
        let mut loads = vec![0u32; count];
        let mut lists: Vec<Vec<Patient>> = vec![Vec::new(); count];
        let mut overflows = Vec::new();

        let mut cursor = match opts.strategy.start {
            StartPolicy::Fixed(index) => index % count,
            StartPolicy::Random => rng.random_range(0..count),
        };

        for patient in ordered {
            let weight = opts.weights.weight_of(patient.category);

            let target = if loads[cursor] + weight <= opts.capacity {
                cursor
            } else if let Some(found) = self.scan_forward(&loads, cursor, weight) {
                found
            } else {
                // Nobody has room; the least-loaded auxiliary takes the
                // patient anyway.
                let fallback = least_loaded(&loads);
                overflows.push(CapacityOverflow {
                    auxiliary: auxiliaries[fallback].name.clone(),
                    bed_number: patient.bed_number,
                    load: loads[fallback] + weight,
                    capacity: opts.capacity,
                });
                fallback
            };

            loads[target] += weight;
            lists[target].push(patient);
            // Subsequent nearby beds keep preferring the same auxiliary.
            cursor = target;
        }

        let rosters = auxiliaries
            .iter()
            .zip(lists)
            .zip(loads)
            .map(|((aux, assigned), load)| AuxiliaryRoster {
                auxiliary: aux.name.clone(),
                patients: assigned,
                load,
            })
            .collect();

        Ok(AssignmentPlan { rosters, overflows })
    }

    /// Scans the rotation forward (wrapping, cursor excluded) for an
    /// auxiliary that can take `weight` more.
    fn scan_forward(&self, loads: &[u32], cursor: usize, weight: u32) -> Option<usize> {
        let capacity = self.options.capacity;
        let count = loads.len();
        let mut best: Option<usize> = None;

        for step in 1..count {
            let idx = (cursor + step) % count;
            if loads[idx] + weight > capacity {
                continue;
            }
            match self.options.strategy.fit {
                FitPolicy::FirstFit => return Some(idx),
                FitPolicy::BestFit => {
                    // Strictly more room wins; ties keep the earlier candidate.
                    if best.map_or(true, |b| capacity - loads[idx] > capacity - loads[b]) {
                        best = Some(idx);
                    }
                }
            }
        }
        best
    }
}

/// Index of the smallest load; ties go to the earliest position.
fn least_loaded(loads: &[u32]) -> usize {
    let mut min_idx = 0;
    for (idx, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[min_idx] {
            min_idx = idx;
        }
    }
    min_idx
}
