// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving configuration
//!
//! The knobs the orchestrator reads: which seam finder to use, the
//! object-removal constants, and an optional pause between steps for
//! anyone watching the seams go by.

use crate::error::CarveError;
use std::str::FromStr;
use std::time::Duration;

/// The three interchangeable seam finders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// Local, one-step lookahead.  Fast and frequently wrong.
    Greedy,
    /// The classic cumulative-cost table.
    DynamicProgramming,
    /// Min-cut over a flow network of the pixels.
    GraphCut,
}

impl FromStr for Algorithm {
    type Err = CarveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "dp" | "dynamic" | "dynamicprogramming" => Ok(Algorithm::DynamicProgramming),
            "graph" | "graphcut" | "mincut" => Ok(Algorithm::GraphCut),
            _ => Err(CarveError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Slices at or below this length count as consumed.
pub const DEFAULT_MASK_THRESHOLD: u32 = 8;

/// Energy written over marked pixels so seams prefer them.
pub const DEFAULT_MASK_ENERGY: f64 = -2000.0;

/// Smallest capacity of a cuttable edge in the graph-cut network.
pub const DEFAULT_MIN_CAPACITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CarveConfig {
    pub algorithm: Algorithm,
    pub mask_threshold: u32,
    pub mask_energy: f64,
    pub min_capacity: f64,
    pub step_delay: Option<Duration>,
}

impl Default for CarveConfig {
    fn default() -> Self {
        CarveConfig {
            algorithm: Algorithm::DynamicProgramming,
            mask_threshold: DEFAULT_MASK_THRESHOLD,
            mask_energy: DEFAULT_MASK_ENERGY,
            min_capacity: DEFAULT_MIN_CAPACITY,
            step_delay: None,
        }
    }
}

impl CarveConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_mask_threshold(mut self, threshold: u32) -> Self {
        self.mask_threshold = threshold;
        self
    }

    pub fn with_mask_energy(mut self, energy: f64) -> Self {
        self.mask_energy = energy;
        self
    }

    /// Values at or below zero are raised to a tiny positive capacity;
    /// a zero-capacity edge would let the cut float freely.
    pub fn with_min_capacity(mut self, capacity: f64) -> Self {
        self.min_capacity = if capacity > 0.0 { capacity } else { f64::EPSILON };
        self
    }

    pub fn with_step_delay(mut self, delay: Option<Duration>) -> Self {
        self.step_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("greedy".parse(), Ok(Algorithm::Greedy));
        assert_eq!("DP".parse(), Ok(Algorithm::DynamicProgramming));
        assert_eq!("graphcut".parse(), Ok(Algorithm::GraphCut));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(CarveError::UnknownAlgorithm("astar".to_string()))
        );
    }

    #[test]
    fn defaults_match_object_removal_constants() {
        let config = CarveConfig::default();
        assert_eq!(config.algorithm, Algorithm::DynamicProgramming);
        assert_eq!(config.mask_threshold, 8);
        assert_eq!(config.mask_energy, -2000.0);
        assert_eq!(config.step_delay, None);
    }

    #[test]
    fn min_capacity_stays_positive() {
        let config = CarveConfig::default().with_min_capacity(-3.0);
        assert!(config.min_capacity > 0.0);
    }
}
