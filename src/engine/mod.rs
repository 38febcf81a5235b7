//! The assignment engine.
//!
//! Maps weighted patients onto auxiliaries under a per-auxiliary capacity
//! ceiling, favoring bed-number proximity. The engine is a pure function
//! of its inputs plus options; nothing persists across calls.
//!
//! # Usage
//!
//! ```
//! use ward_assign::engine::{AssignOptions, AssignmentEngine, StartPolicy, Strategy};
//! use ward_assign::models::{AcuityCategory, Auxiliary, Patient};
//!
//! let engine = AssignmentEngine::new().with_options(
//!     AssignOptions::new()
//!         .with_strategy(Strategy::new().with_start(StartPolicy::Random))
//!         .with_seed(42),
//! );
//!
//! let patients = vec![Patient::new(1, AcuityCategory::Intermediate)];
//! let auxiliaries = vec![Auxiliary::new("Ana")];
//! let plan = engine.assign(&patients, &auxiliaries).unwrap();
//! assert_eq!(plan.patient_count(), 1);
//! ```

mod balancer;
mod kpi;
pub mod shuffle;
mod strategy;

pub use balancer::{AssignError, AssignOptions, AssignmentEngine};
pub use kpi::AssignmentKpi;
pub use strategy::{FitPolicy, ShufflePolicy, StartPolicy, Strategy};
