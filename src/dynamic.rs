// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dynamic programming seam finder
//!
//! Build the cumulative map, pick the cheapest offset on the first
//! line, and follow the cheapest neighbour toward the far edge.  Since
//! every cell of the map already holds the best cost to the far edge,
//! following the cheapest neighbour *is* the best seam.

use crate::cq;
use crate::cumulative::cumulative_map;
use crate::orientation::{Lines, Orientation};
use crate::seamfinder::SeamFinder;
use crate::twodmap::{CumulativeMap, EnergyMap};

#[derive(Debug, Default, Copy, Clone)]
pub struct DynamicProgramming;

impl SeamFinder for DynamicProgramming {
    fn find_seam(&self, energy: &EnergyMap, orientation: Orientation) -> Vec<u32> {
        seam_from_cumulative(&cumulative_map(energy, orientation), orientation)
    }
}

// Which way to step, given the three candidates on the next line.
// Left or middle only win when strictly cheaper than right; every tie
// with right goes right.
#[inline]
fn step(left: f64, mid: f64, right: f64) -> i8 {
    if left < mid {
        cq!(left < right, -1, 1)
    } else {
        cq!(mid < right, 0, 1)
    }
}

/// Walk a precomputed cumulative map from its first line to its last.
pub fn seam_from_cumulative(cum: &CumulativeMap, orientation: Orientation) -> Vec<u32> {
    let lines = Lines::new(cum, orientation);
    let (count, span) = (lines.count(), lines.span());
    let mut seam = vec![0; count as usize];
    if cum.is_empty() {
        return seam;
    }

    let mut offset = 0;
    for candidate in 1..span {
        if lines.get(0, candidate) < lines.get(0, offset) {
            offset = candidate;
        }
    }
    seam[0] = offset;

    for line in 1..count {
        let left = cq!(offset > 0, lines.get(line, offset - 1), f64::INFINITY);
        let mid = lines.get(line, offset);
        let right = cq!(offset + 1 < span, lines.get(line, offset + 1), f64::INFINITY);
        offset = match step(left, mid, right) {
            -1 => offset - 1,
            1 => offset + 1,
            _ => offset,
        };
        seam[line as usize] = offset;
    }
    seam
}
