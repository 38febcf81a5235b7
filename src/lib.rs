//! Locality-aware assignment of ward patients to care auxiliaries.
//!
//! Maps a set of weighted patients onto an ordered roster of auxiliaries
//! under a per-auxiliary capacity ceiling, favoring bed-number proximity so
//! that each auxiliary's patients are physically near each other.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Patient`, `AcuityCategory`, `Auxiliary`,
//!   `CategoryWeights`, `AssignmentPlan`
//! - **`engine`**: The assignment engine — greedy capacity-rotation
//!   balancer, strategy variants, seeded shuffling, KPIs
//! - **`roster`**: In-memory roster management with duplicate detection
//!   and plan invalidation
//! - **`validation`**: Structural integrity checks (duplicate beds,
//!   duplicate names) before assignment
//!
//! # Assignment model
//!
//! Patients are walked in bed order with a rotation cursor over the
//! auxiliaries: runs of adjacent beds stay with one auxiliary until its
//! capacity is reached, then the cursor advances to the next auxiliary
//! with room. When nobody has room the patient is assigned anyway (to the
//! least-loaded auxiliary) and the overflow is reported on the plan —
//! a patient is never dropped.
//!
//! Each call recomputes the full plan from scratch; no assignment state
//! survives between calls.

pub mod engine;
pub mod models;
pub mod roster;
pub mod validation;
