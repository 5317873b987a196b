// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::config::{Algorithm, CarveConfig};
use crate::dynamic::DynamicProgramming;
use crate::graphcut::GraphCut;
use crate::greedy::Greedy;
use crate::orientation::Orientation;
use crate::twodmap::EnergyMap;

/// This trait defines how we get seams out of an energy map.  It's a
/// primitive interface, just enough to make the three strategies
/// interchangeable.
///
/// The returned seam has one offset per line of the map (per row for
/// a vertical seam, per column for a horizontal one).
pub trait SeamFinder {
    fn find_seam(&self, energy: &EnergyMap, orientation: Orientation) -> Vec<u32>;
}

/// The finder a configuration asks for.
pub fn seam_finder(config: &CarveConfig) -> Box<dyn SeamFinder> {
    match config.algorithm {
        Algorithm::Greedy => Box::new(Greedy),
        Algorithm::DynamicProgramming => Box::new(DynamicProgramming),
        Algorithm::GraphCut => Box::new(GraphCut::new(config.min_capacity)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    // A tiny linear congruential generator; enough to make a pile of
    // reproducible, irregular energy maps.
    pub(crate) fn noise_map(width: u32, height: u32, seed: u64) -> EnergyMap {
        let mut state = seed;
        let values = (0..width * height)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % 100) as f64
            })
            .collect();
        TwoDimensionalMap::from_vec(width, height, values).unwrap()
    }

    pub(crate) fn is_connected(seam: &[u32]) -> bool {
        seam.windows(2)
            .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1)
    }

    #[test]
    fn every_finder_gives_connected_seams_of_the_right_length() {
        let configs = [Algorithm::Greedy, Algorithm::DynamicProgramming, Algorithm::GraphCut];
        for (i, algorithm) in configs.iter().enumerate() {
            let finder = seam_finder(&CarveConfig::default().with_algorithm(*algorithm));
            for seed in 0..6 {
                let energy = noise_map(9, 7, seed + 10 * i as u64);
                let v = finder.find_seam(&energy, Orientation::Vertical);
                assert_eq!(v.len(), 7);
                assert!(v.iter().all(|o| *o < 9));
                assert!(is_connected(&v), "{:?} {:?}", algorithm, v);

                let h = finder.find_seam(&energy, Orientation::Horizontal);
                assert_eq!(h.len(), 9);
                assert!(h.iter().all(|o| *o < 7));
                assert!(is_connected(&h), "{:?} {:?}", algorithm, h);
            }
        }
    }
}
