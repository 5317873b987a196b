// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam traces
//!
//! Every seam is found in the coordinates of an image that earlier
//! seams have already shrunk.  To show all of them on the original
//! picture, the tracer carries a map from every pixel of the current
//! image back to where it came from, and carves that map exactly the
//! way the image was carved.

use crate::error::CarveError;
use crate::orientation::Orientation;
use crate::removal::check_seam;
use crate::twodmap::TwoDimensionalMap;
use crate::Image;
use image::{Pixel, Primitive};

#[derive(Debug, Clone)]
pub struct SeamTrace {
    origin: TwoDimensionalMap<(u32, u32)>,
}

impl SeamTrace {
    /// A tracer for an untouched `width` × `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        let mut origin = TwoDimensionalMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                origin[(x, y)] = (x, y);
            }
        }
        SeamTrace { origin }
    }

    /// The size of the image the next seam will be found in.
    pub fn dimensions(&self) -> (u32, u32) {
        self.origin.dimensions()
    }

    /// Follow one removal.  Returns the seam's pixels in original
    /// coordinates, one per line.
    pub fn record(
        &mut self,
        orientation: Orientation,
        seam: &[u32],
    ) -> Result<Vec<(u32, u32)>, CarveError> {
        let (width, height) = self.origin.dimensions();
        check_seam(seam, (width, height), orientation)?;

        let (new_width, new_height) = match orientation {
            Orientation::Vertical => (width - 1, height),
            Orientation::Horizontal => (width, height - 1),
        };
        let mut shrunk = TwoDimensionalMap::new(new_width, new_height);
        let mut removed = Vec::with_capacity(seam.len());
        for (line, &cut) in seam.iter().enumerate() {
            let line = line as u32;
            removed.push(self.origin[orientation.xy(line, cut)]);
            let kept = (0..cut).chain(cut + 1..orientation.span(width, height));
            for (offset, from) in kept.enumerate() {
                let here = orientation.xy(line, offset as u32);
                shrunk[here] = self.origin[orientation.xy(line, from)];
            }
        }
        self.origin = shrunk;
        Ok(removed)
    }

    /// Paint every seam of a carving run onto a copy of the original
    /// image.
    pub fn render<P, S>(
        original: &Image<P>,
        seams: &[(Orientation, Vec<u32>)],
        colour: P,
    ) -> Result<Image<P>, CarveError>
    where
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = original.dimensions();
        let mut tracer = SeamTrace::new(width, height);
        let mut out = original.clone();
        for (orientation, seam) in seams {
            for (x, y) in tracer.record(*orientation, seam)? {
                out.put_pixel(x, y, colour);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn later_seams_land_in_original_columns() {
        let mut trace = SeamTrace::new(5, 2);
        assert_eq!(
            trace.record(Orientation::Vertical, &[1, 3]).unwrap(),
            vec![(1, 0), (3, 1)]
        );
        // Column 1 of the narrowed image was column 2 on the first row
        // and still column 1 on the second.
        assert_eq!(
            trace.record(Orientation::Vertical, &[1, 1]).unwrap(),
            vec![(2, 0), (1, 1)]
        );
        assert_eq!(trace.dimensions(), (3, 2));
    }

    #[test]
    fn mixed_orientations_are_followed() {
        let mut trace = SeamTrace::new(3, 3);
        trace.record(Orientation::Vertical, &[0, 0, 0]).unwrap();
        assert_eq!(
            trace.record(Orientation::Horizontal, &[2, 0]).unwrap(),
            vec![(1, 2), (2, 0)]
        );
        assert_eq!(trace.dimensions(), (2, 2));
    }

    #[test]
    fn renders_seams_onto_the_original() {
        let original = GrayImage::new(3, 2);
        let seams = vec![
            (Orientation::Vertical, vec![0, 2]),
            (Orientation::Vertical, vec![0, 0]),
        ];
        let out = SeamTrace::render(&original, &seams, Luma([255])).unwrap();
        assert_eq!(out.into_raw(), vec![255, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn bad_seams_are_rejected() {
        let original = GrayImage::new(3, 2);
        let seams = vec![(Orientation::Horizontal, vec![0, 0])];
        assert_eq!(
            SeamTrace::render(&original, &seams, Luma([255])).unwrap_err(),
            CarveError::SeamLength { length: 2, lines: 3 }
        );
    }
}
