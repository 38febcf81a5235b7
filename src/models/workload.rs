//! Workload weights and capacity.
//!
//! Each acuity category maps to a positive integer weight representing its
//! relative care burden. Capacity is the maximum cumulative weight one
//! auxiliary should carry.

use serde::{Deserialize, Serialize};

use super::AcuityCategory;

/// Default maximum cumulative weight per auxiliary.
pub const DEFAULT_CAPACITY: u32 = 4;

/// Relative care burden per acuity category.
///
/// By default an intensive-care patient counts three times a regular one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Weight of an intensive-care patient.
    pub intensive: u32,
    /// Weight of an intermediate-care patient.
    pub intermediate: u32,
    /// Weight of a regular hospitalization patient.
    pub hospitalization: u32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            intensive: 3,
            intermediate: 1,
            hospitalization: 1,
        }
    }
}

impl CategoryWeights {
    /// Creates the default weight table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the intensive-care weight.
    pub fn with_intensive(mut self, weight: u32) -> Self {
        self.intensive = weight;
        self
    }

    /// Overrides the intermediate-care weight.
    pub fn with_intermediate(mut self, weight: u32) -> Self {
        self.intermediate = weight;
        self
    }

    /// Overrides the hospitalization weight.
    pub fn with_hospitalization(mut self, weight: u32) -> Self {
        self.hospitalization = weight;
        self
    }

    /// Weight of the given category.
    pub fn weight_of(&self, category: AcuityCategory) -> u32 {
        match category {
            AcuityCategory::Intensive => self.intensive,
            AcuityCategory::Intermediate => self.intermediate,
            AcuityCategory::Hospitalization => self.hospitalization,
        }
    }
}
