// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A two-dimensional, addressable field of values.
//!
//! Every intermediate product of the carver (a single colour channel,
//! the energy map, the cumulative cost map) is one of these.  They are
//! always derived from the image, never the other way around, and are
//! thrown away after each seam.

use crate::cq;
use std::ops::{Index, IndexMut};

/// A `width × height` grid stored row by row, addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    values: Vec<P>,
}

/// The per-pixel importance of an image.  Higher means "keep".
pub type EnergyMap = TwoDimensionalMap<f64>;

/// Minimum cost from each pixel to the far edge of the image.
pub type CumulativeMap = TwoDimensionalMap<f64>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            values: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns None if the vector
    /// does not hold exactly `width * height` values.
    pub fn from_vec(width: u32, height: u32, values: Vec<P>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap { width, height, values })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the map has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw row-major values.
    pub fn values(&self) -> &[P] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [P] {
        &mut self.values
    }
}

impl TwoDimensionalMap<f64> {
    /// The largest value in the map, or None for an empty map.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().cloned().fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
    }

    /// The smallest value in the map, or None for an empty map.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().cloned().fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
    }

    /// Linearly rescale every value so the smallest becomes `low` and
    /// the largest becomes `high`.  A map with no spread is set to
    /// `low` throughout.
    pub fn normalize(&mut self, low: f64, high: f64) {
        let (min, max) = match (self.min(), self.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return,
        };
        let spread = max - min;
        for v in self.values.iter_mut() {
            *v = cq!(spread > 0.0, (*v - min) / spread * (high - low) + low, low);
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.values[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_row_major() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(2, 1)], 5);
    }

    #[test]
    fn rejects_mismatched_vectors() {
        assert!(TwoDimensionalMap::from_vec(3, 2, vec![0u32; 5]).is_none());
    }

    #[test]
    fn normalize_stretches_to_range() {
        let mut map = TwoDimensionalMap::from_vec(2, 2, vec![10.0, 20.0, 30.0, 50.0]).unwrap();
        map.normalize(0.0, 255.0);
        assert_eq!(map.values(), &[0.0, 63.75, 127.5, 255.0]);
    }

    #[test]
    fn normalize_flat_map_goes_low() {
        let mut map = TwoDimensionalMap::from_vec(2, 1, vec![4.0, 4.0]).unwrap();
        map.normalize(0.0, 255.0);
        assert_eq!(map.values(), &[0.0, 0.0]);
    }

    #[test]
    fn empty_maps_have_no_extremes() {
        let map: EnergyMap = TwoDimensionalMap::new(0, 4);
        assert!(map.is_empty());
        assert_eq!(map.max(), None);
    }
}
