// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation
//!
//! A vertical seam runs top to bottom and takes one pixel out of every
//! row; a horizontal seam runs left to right and takes one pixel out of
//! every column.  Rather than writing every algorithm twice, they are
//! written against *lines* and *offsets*: a line is a row for a
//! vertical seam and a column for a horizontal one, and the offset is
//! the position along that line.  The seam itself is then just "one
//! offset per line", whichever way the image is turned.
//!
//! `Lines` is the read-only proxy that lets a map be walked that way,
//! in the same spirit as flipping an image view 90° so that every
//! column reads like a row.

use crate::twodmap::TwoDimensionalMap;
use std::fmt;

/// Which way a seam runs through the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one column offset per row.  Narrows the image.
    Vertical,
    /// Left to right, one row offset per column.  Shortens the image.
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// How many lines (and therefore seam entries) an image of this
    /// size has.
    pub fn lines(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }

    /// The length of each line: the dimension a seam removal shrinks.
    pub fn span(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    /// Translate a (line, offset) address into image (x, y).
    #[inline]
    pub fn xy(self, line: u32, offset: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (offset, line),
            Orientation::Horizontal => (line, offset),
        }
    }

    /// Translate image (x, y) into (line, offset).
    #[inline]
    pub fn line_offset(self, x: u32, y: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (y, x),
            Orientation::Horizontal => (x, y),
        }
    }

    /// The name of the dimension a removal shrinks.
    pub fn dimension(self) -> &'static str {
        match self {
            Orientation::Vertical => "width",
            Orientation::Horizontal => "height",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A map seen as a stack of lines.
pub struct Lines<'a, P: Default + Copy> {
    map: &'a TwoDimensionalMap<P>,
    orientation: Orientation,
}

impl<'a, P: Default + Copy> Lines<'a, P> {
    pub fn new(map: &'a TwoDimensionalMap<P>, orientation: Orientation) -> Self {
        Lines { map, orientation }
    }

    pub fn count(&self) -> u32 {
        self.orientation.lines(self.map.width, self.map.height)
    }

    pub fn span(&self) -> u32 {
        self.orientation.span(self.map.width, self.map.height)
    }

    #[inline]
    pub fn get(&self, line: u32, offset: u32) -> P {
        self.map[self.orientation.xy(line, offset)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_lines_are_columns() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let lines = Lines::new(&map, Orientation::Horizontal);
        assert_eq!((lines.count(), lines.span()), (3, 2));
        assert_eq!(lines.get(2, 1), 5);
        assert_eq!(lines.get(1, 0), 1);
    }

    #[test]
    fn vertical_lines_are_rows() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let lines = Lines::new(&map, Orientation::Vertical);
        assert_eq!((lines.count(), lines.span()), (2, 3));
        assert_eq!(lines.get(1, 0), 3);
    }

    #[test]
    fn addresses_round_trip() {
        for o in &[Orientation::Vertical, Orientation::Horizontal] {
            let (x, y) = o.xy(4, 9);
            assert_eq!(o.line_offset(x, y), (4, 9));
        }
        assert_eq!(Orientation::Vertical.turn(), Orientation::Horizontal);
    }
}
