// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The greedy seam finder
//!
//! Start at the cheapest pixel of the far edge and walk back toward
//! the start edge, each step taking the cheapest of the three pixels
//! next to the previous one.  No lookback, no table: O(lines × span)
//! time and nothing but the seam in memory.  It is a heuristic and
//! happily walks into expensive territory if the first step looked
//! cheap.
//!
//! The first and last offset of every line are never candidates, so
//! the seam never shaves the image border.

use crate::orientation::{Lines, Orientation};
use crate::seamfinder::SeamFinder;
use crate::twodmap::EnergyMap;
use itertools::Itertools;
use std::cmp::{max, min, Ordering};

#[derive(Debug, Default, Copy, Clone)]
pub struct Greedy;

// The inclusive range of offsets the walk may use.  Lines shorter than
// three pixels have no interior, so the whole line is fair game.
fn interior(span: u32) -> (u32, u32) {
    if span >= 3 {
        (1, span - 2)
    } else {
        (0, span.saturating_sub(1))
    }
}

// First (lowest) offset holding the smallest energy in `low..=high`.
fn cheapest(lines: &Lines<'_, f64>, line: u32, low: u32, high: u32) -> u32 {
    (low..=high)
        .position_min_by(|a, b| {
            lines
                .get(line, *a)
                .partial_cmp(&lines.get(line, *b))
                .unwrap_or(Ordering::Equal)
        })
        .map_or(low, |p| low + p as u32)
}

impl SeamFinder for Greedy {
    fn find_seam(&self, energy: &EnergyMap, orientation: Orientation) -> Vec<u32> {
        let lines = Lines::new(energy, orientation);
        let (count, span) = (lines.count(), lines.span());
        let mut seam = vec![0; count as usize];
        if energy.is_empty() {
            return seam;
        }

        let (low, high) = interior(span);
        let last = count - 1;
        seam[last as usize] = cheapest(&lines, last, low, high);

        for line in (0..last).rev() {
            let prev = seam[line as usize + 1];
            let start = max(low, prev.saturating_sub(1));
            let end = min(high, prev + 1);
            seam[line as usize] = cheapest(&lines, line, start, end);
        }
        seam
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seamfinder::tests::{is_connected, noise_map};
    use crate::twodmap::TwoDimensionalMap;

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 1.0, 9.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 9.0,
        0.0, 9.0,
    ];

    fn energies() -> EnergyMap {
        TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        assert_eq!(Greedy.find_seam(&energies(), Orientation::Vertical), [2, 1, 2, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        assert_eq!(
            Greedy.find_seam(&energies(), Orientation::Horizontal),
            [1, 1, 1, 1, 2]
        );
    }

    #[test]
    fn ignores_cheap_border_columns() {
        let values = vec![
            0.0, 5.0, 1.0, 5.0, 5.0, //
            0.0, 5.0, 5.0, 1.0, 5.0, //
            0.0, 5.0, 1.0, 5.0, 5.0, //
            0.0, 9.0, 2.0, 1.0, 0.0,
        ];
        let energy = TwoDimensionalMap::from_vec(5, 4, values).unwrap();
        assert_eq!(Greedy.find_seam(&energy, Orientation::Vertical), [2, 3, 2, 3]);
    }

    #[test]
    fn never_touches_the_border() {
        for seed in 0..20 {
            let energy = noise_map(8, 6, seed);
            let seam = Greedy.find_seam(&energy, Orientation::Vertical);
            assert!(seam.iter().all(|o| *o != 0 && *o != 7), "{:?}", seam);
            assert!(is_connected(&seam));

            let seam = Greedy.find_seam(&energy, Orientation::Horizontal);
            assert!(seam.iter().all(|o| *o != 0 && *o != 5), "{:?}", seam);
            assert!(is_connected(&seam));
        }
    }

    #[test]
    fn narrow_lines_use_the_whole_span() {
        let energy = TwoDimensionalMap::from_vec(2, 3, vec![3.0, 1.0, 0.0, 4.0, 2.0, 1.0]).unwrap();
        assert_eq!(Greedy.find_seam(&energy, Orientation::Vertical), [1, 0, 1]);
    }

    #[test]
    fn empty_map_gives_zeroed_seam() {
        let energy: EnergyMap = TwoDimensionalMap::new(0, 3);
        assert_eq!(Greedy.find_seam(&energy, Orientation::Vertical), [0, 0, 0]);
    }
}
