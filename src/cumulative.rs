// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost map
//!
//! For every pixel, the cheapest total energy of a seam running from
//! that pixel to the far edge of the image: the last row for vertical
//! seams, the last column for horizontal ones.  The far edge copies the
//! energy map; each line before it adds the cheapest of the (up to)
//! three neighbours on the line after it.
//!
//! ```text
//!           ⎧ M(line+1, offset−1)
//! M = E + min⎨ M(line+1, offset)
//!           ⎩ M(line+1, offset+1)
//! ```
//!
//! The finished table is rescaled into 0..=255.

use crate::cq;
use crate::orientation::{Lines, Orientation};
use crate::twodmap::{CumulativeMap, EnergyMap};

/// The rescaled maximum of every cumulative map.
pub const CUMULATIVE_SCALE: f64 = 255.0;

/// Build the cumulative map for seams of the given orientation.
pub fn cumulative_map(energy: &EnergyMap, orientation: Orientation) -> CumulativeMap {
    let (width, height) = energy.dimensions();
    let mut cum = CumulativeMap::new(width, height);
    if energy.is_empty() {
        return cum;
    }

    let source = Lines::new(energy, orientation);
    let (lines, span) = (source.count(), source.span());
    let last = lines - 1;
    let at = |line, offset| orientation.xy(line, offset);

    for offset in 0..span {
        cum[at(last, offset)] = source.get(last, offset);
    }

    for line in (0..last).rev() {
        for offset in 0..span {
            let next = line + 1;
            let left = cq!(offset > 0, cum[at(next, offset - 1)], f64::INFINITY);
            let mid = cum[at(next, offset)];
            let right = cq!(offset + 1 < span, cum[at(next, offset + 1)], f64::INFINITY);
            cum[at(line, offset)] = source.get(line, offset) + left.min(mid).min(right);
        }
    }

    // A flat or fully masked map has nothing positive to divide by;
    // leave it as it is rather than fill it with NaN.
    if let Some(max) = cum.max() {
        if max > 0.0 {
            for v in cum.values_mut() {
                *v = *v / max * CUMULATIVE_SCALE;
            }
        }
    }
    cum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    // 3 wide, 3 high.
    const ENERGY: [f64; 9] = [1.0, 4.0, 3.0, 5.0, 2.0, 6.0, 1.0, 9.0, 8.0];

    fn energy() -> EnergyMap {
        TwoDimensionalMap::from_vec(3, 3, ENERGY.to_vec()).unwrap()
    }

    #[test]
    fn vertical_accumulates_upward() {
        let cum = cumulative_map(&energy(), Orientation::Vertical);
        // Raw table: row 2 = [1, 9, 8]; row 1 = [6, 3, 14]; row 0 = [4, 7, 6].
        // Maximum 14.
        let raw = [4.0, 7.0, 6.0, 6.0, 3.0, 14.0, 1.0, 9.0, 8.0];
        for (got, want) in cum.values().iter().zip(raw.iter()) {
            assert!((got - want / 14.0 * 255.0).abs() < 1e-9);
        }
    }

    #[test]
    fn horizontal_accumulates_leftward() {
        let cum = cumulative_map(&energy(), Orientation::Horizontal);
        // Column 2 = [3, 6, 8]; column 1 = [7, 5, 15]; column 0 = [6, 10, 6].
        // Maximum 15.
        let raw = [6.0, 7.0, 3.0, 10.0, 5.0, 6.0, 6.0, 15.0, 8.0];
        for (got, want) in cum.values().iter().zip(raw.iter()) {
            assert!((got - want / 15.0 * 255.0).abs() < 1e-9);
        }
    }

    #[test]
    fn shape_is_preserved() {
        let map: EnergyMap = TwoDimensionalMap::new(7, 4);
        for o in &[Orientation::Vertical, Orientation::Horizontal] {
            assert_eq!(cumulative_map(&map, *o).dimensions(), (7, 4));
        }
    }

    #[test]
    fn empty_map_stays_empty() {
        let map: EnergyMap = TwoDimensionalMap::new(0, 3);
        let cum = cumulative_map(&map, Orientation::Vertical);
        assert!(cum.is_empty());
    }

    #[test]
    fn flat_map_stays_finite() {
        let map: EnergyMap = TwoDimensionalMap::new(4, 4);
        let cum = cumulative_map(&map, Orientation::Vertical);
        assert!(cum.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn rescaled_into_range() {
        let cum = cumulative_map(&energy(), Orientation::Vertical);
        assert_eq!(cum.max(), Some(255.0));
        assert!(cum.values().iter().all(|v| *v >= 0.0 && *v <= 255.0));
    }
}
