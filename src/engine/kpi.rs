//! Assignment quality metrics.
//!
//! Computes load-distribution indicators from a completed plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Load | Mean cumulative weight per auxiliary |
//! | Load Spread | max_load - min_load |
//! | Avg Utilization | Mean of load / capacity |
//! | Overflow Count | Assignments past nominal capacity |

use std::collections::HashMap;

use crate::models::AssignmentPlan;

/// Load-distribution indicators for an assignment plan.
#[derive(Debug, Clone)]
pub struct AssignmentKpi {
    /// Total assigned patients.
    pub patient_count: usize,
    /// Number of auxiliaries in the plan.
    pub auxiliary_count: usize,
    /// Mean cumulative weight per auxiliary.
    pub avg_load: f64,
    /// Largest per-auxiliary load.
    pub max_load: u32,
    /// Smallest per-auxiliary load.
    pub min_load: u32,
    /// max_load - min_load.
    pub load_spread: u32,
    /// Per-auxiliary load.
    pub load_by_auxiliary: HashMap<String, u32>,
    /// Mean of load / capacity across auxiliaries (0.0 when capacity is 0).
    pub avg_utilization: f64,
    /// Number of overflow-fallback assignments.
    pub overflow_count: usize,
    /// Auxiliaries that absorbed overflow, in first-overflow order.
    pub overloaded_auxiliaries: Vec<String>,
}

impl AssignmentKpi {
    /// Computes KPIs from a plan and the capacity it was produced under.
    pub fn calculate(plan: &AssignmentPlan, capacity: u32) -> Self {
        let auxiliary_count = plan.auxiliary_count();

        let load_by_auxiliary: HashMap<String, u32> = plan
            .rosters
            .iter()
            .map(|r| (r.auxiliary.clone(), r.load))
            .collect();

        let total_load: u32 = plan.rosters.iter().map(|r| r.load).sum();
        let avg_load = if auxiliary_count == 0 {
            0.0
        } else {
            total_load as f64 / auxiliary_count as f64
        };

        let avg_utilization = if auxiliary_count == 0 || capacity == 0 {
            0.0
        } else {
            avg_load / capacity as f64
        };

        let max_load = plan.max_load();
        let min_load = plan.min_load();

        Self {
            patient_count: plan.patient_count(),
            auxiliary_count,
            avg_load,
            max_load,
            min_load,
            load_spread: max_load - min_load,
            load_by_auxiliary,
            avg_utilization,
            overflow_count: plan.overflows.len(),
            overloaded_auxiliaries: plan
                .overflowed_auxiliaries()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Whether the plan's loads stay within the given spread.
    pub fn is_balanced(&self, max_spread: u32) -> bool {
        self.load_spread <= max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AssignOptions, AssignmentEngine};
    use crate::models::{AcuityCategory, Auxiliary, Patient};

    fn plan_for(patients: &[Patient], names: &[&str], capacity: u32) -> AssignmentPlan {
        let auxiliaries: Vec<Auxiliary> = names.iter().map(|n| Auxiliary::new(*n)).collect();
        AssignmentEngine::new()
            .with_options(AssignOptions::new().with_capacity(capacity))
            .assign(patients, &auxiliaries)
            .unwrap()
    }

    #[test]
    fn test_kpi_basic() {
        let patients: Vec<Patient> = (1..=8)
            .map(|b| Patient::new(b, AcuityCategory::Hospitalization))
            .collect();
        let plan = plan_for(&patients, &["Ana", "Bea"], 4);
        let kpi = AssignmentKpi::calculate(&plan, 4);

        assert_eq!(kpi.patient_count, 8);
        assert_eq!(kpi.auxiliary_count, 2);
        assert!((kpi.avg_load - 4.0).abs() < 1e-10);
        assert_eq!(kpi.max_load, 4);
        assert_eq!(kpi.min_load, 4);
        assert_eq!(kpi.load_spread, 0);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.overflow_count, 0);
        assert!(kpi.is_balanced(0));
    }

    #[test]
    fn test_kpi_uneven_loads() {
        let patients = vec![
            Patient::new(1, AcuityCategory::Hospitalization),
            Patient::new(2, AcuityCategory::Hospitalization),
            Patient::new(3, AcuityCategory::Hospitalization),
        ];
        let plan = plan_for(&patients, &["Ana", "Bea"], 4);
        let kpi = AssignmentKpi::calculate(&plan, 4);

        // Forward fill: Ana 3, Bea 0.
        assert_eq!(kpi.load_by_auxiliary["Ana"], 3);
        assert_eq!(kpi.load_by_auxiliary["Bea"], 0);
        assert_eq!(kpi.load_spread, 3);
        assert!((kpi.avg_load - 1.5).abs() < 1e-10);
        assert!(!kpi.is_balanced(2));
    }

    #[test]
    fn test_kpi_overflow_reporting() {
        let patients = vec![
            Patient::new(1, AcuityCategory::Intensive),
            Patient::new(2, AcuityCategory::Intensive),
        ];
        let plan = plan_for(&patients, &["Ana"], 4);
        let kpi = AssignmentKpi::calculate(&plan, 4);

        assert_eq!(kpi.overflow_count, 1);
        assert_eq!(kpi.overloaded_auxiliaries, vec!["Ana".to_string()]);
        assert!((kpi.avg_utilization - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_zero_capacity_guard() {
        let patients = vec![Patient::new(1, AcuityCategory::Hospitalization)];
        let plan = plan_for(&patients, &["Ana"], 0);
        let kpi = AssignmentKpi::calculate(&plan, 0);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert_eq!(kpi.overflow_count, 1);
    }
}
