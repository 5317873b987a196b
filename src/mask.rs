// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The removal area
//!
//! A region marked for removal is kept as one slice per line: the
//! offset where the marked span starts and how long it is.  Every seam
//! that goes by either passes before a slice (the slice slides back by
//! one), through it (the slice loses a pixel), or after it (nothing
//! happens).  The area counts as consumed once every remaining slice
//! is no longer than a small threshold; painted masks have ragged
//! edges, and chasing the last few pixels of every line would carve
//! far more of the image than the object.

use crate::orientation::Orientation;
use crate::twodmap::EnergyMap;
use image::{GrayImage, Luma};

/// A contiguous marked run on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// The line (row or column) the slice lives on.
    pub pos: u32,
    /// First marked offset along the line.
    pub start: u32,
    /// Number of marked pixels.
    pub size: u32,
}

impl Slice {
    pub fn end(&self) -> u32 {
        self.start + self.size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemovalArea {
    orientation: Orientation,
    threshold: u32,
    slices: Vec<Slice>,
}

impl RemovalArea {
    /// Wrap a set of slices expressed in the lines of `orientation`.
    /// Empty slices are dropped.
    pub fn new(slices: Vec<Slice>, orientation: Orientation, threshold: u32) -> Self {
        RemovalArea {
            orientation,
            threshold,
            slices: slices.into_iter().filter(|s| s.size > 0).collect(),
        }
    }

    /// The rectangle from `start` (inclusive) to `end` (exclusive),
    /// both given as image `(x, y)` points, as one slice per line.
    pub fn bounded(
        start: (u32, u32),
        end: (u32, u32),
        orientation: Orientation,
        threshold: u32,
    ) -> Self {
        let (first_line, first_offset) = orientation.line_offset(start.0, start.1);
        let (end_line, end_offset) = orientation.line_offset(end.0, end.1);
        let size = end_offset.saturating_sub(first_offset);
        let slices = (first_line..end_line)
            .map(|pos| Slice {
                pos,
                start: first_offset,
                size,
            })
            .collect();
        RemovalArea::new(slices, orientation, threshold)
    }

    /// Scan a painted mask.  On every line, everything from the first
    /// to the last marked (non-zero) pixel becomes one slice, holes
    /// included.
    pub fn from_mask(mask: &GrayImage, orientation: Orientation, threshold: u32) -> Self {
        let (width, height) = mask.dimensions();
        let lines = orientation.lines(width, height);
        let span = orientation.span(width, height);
        let marked = |line, offset| {
            let (x, y) = orientation.xy(line, offset);
            mask.get_pixel(x, y)[0] > 0
        };

        let slices = (0..lines)
            .filter_map(|pos| {
                let first = (0..span).find(|&o| marked(pos, o))?;
                let last = (first..span).rev().find(|&o| marked(pos, o))?;
                Some(Slice {
                    pos,
                    start: first,
                    size: last - first + 1,
                })
            })
            .collect();
        RemovalArea::new(slices, orientation, threshold)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// How many marked pixels remain.
    pub fn total_size(&self) -> u64 {
        self.slices.iter().map(|s| u64::from(s.size)).sum()
    }

    pub fn clear(&mut self) {
        self.slices.clear();
    }

    /// Account for a seam having been removed.  Returns true once every
    /// slice is at or below the threshold, i.e. the area is consumed.
    pub fn modify(&mut self, seam: &[u32]) -> bool {
        for slice in self.slices.iter_mut() {
            let cut = match seam.get(slice.pos as usize) {
                Some(cut) => *cut,
                None => continue,
            };
            if cut < slice.start {
                slice.start -= 1;
            } else if cut < slice.end() {
                slice.size -= 1;
            }
        }
        let threshold = self.threshold;
        let consumed = self.slices.iter().all(|s| s.size <= threshold);
        self.slices.retain(|s| s.size > 0);
        consumed
    }

    /// Paint the area into a `width` × `height` mask, marked pixels at
    /// 255.  Slices falling outside the image are clipped.
    pub fn to_mask(&self, width: u32, height: u32) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        let lines = self.orientation.lines(width, height);
        let span = self.orientation.span(width, height);
        for slice in self.slices.iter().filter(|s| s.pos < lines) {
            for offset in slice.start..slice.end().min(span) {
                let (x, y) = self.orientation.xy(slice.pos, offset);
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }

    /// The same marked pixels, sliced along the other kind of line.
    pub fn reoriented(&self, orientation: Orientation, width: u32, height: u32) -> Self {
        if orientation == self.orientation {
            return self.clone();
        }
        RemovalArea::from_mask(&self.to_mask(width, height), orientation, self.threshold)
    }

    /// Overwrite the energy of every marked pixel.
    pub fn apply_to_energy(&self, energy: &mut EnergyMap, value: f64) {
        let (width, height) = energy.dimensions();
        let lines = self.orientation.lines(width, height);
        let span = self.orientation.span(width, height);
        for slice in self.slices.iter().filter(|s| s.pos < lines) {
            for offset in slice.start..slice.end().min(span) {
                energy[self.orientation.xy(slice.pos, offset)] = value;
            }
        }
    }
}
