// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Take a seam out of an image.

use crate::error::CarveError;
use crate::orientation::Orientation;
use crate::Image;
use image::imageops::crop_imm;
use image::{Pixel, Primitive};

/// Check that a seam fits an image of the given size.
pub fn check_seam(
    seam: &[u32],
    (width, height): (u32, u32),
    orientation: Orientation,
) -> Result<(), CarveError> {
    let lines = orientation.lines(width, height);
    let span = orientation.span(width, height);
    if seam.len() != lines as usize {
        return Err(CarveError::SeamLength {
            length: seam.len(),
            lines,
        });
    }
    match seam.iter().enumerate().find(|(_, offset)| **offset >= span) {
        Some((line, offset)) => Err(CarveError::SeamOffset {
            line: line as u32,
            offset: *offset,
            span,
        }),
        None if span == 0 => Err(CarveError::SeamOffset {
            line: 0,
            offset: 0,
            span,
        }),
        None => Ok(()),
    }
}

// Every pixel past the seam slides one step toward it, overwriting the
// seam pixel, and the now-duplicated trailing column (or row) is
// cropped away.  An invalid seam leaves the image untouched.

/// Remove a seam from an image, shrinking it by one column (vertical
/// seam) or one row (horizontal seam).
pub fn remove_seam<P, S>(
    image: &mut Image<P>,
    seam: &[u32],
    orientation: Orientation,
) -> Result<(), CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    check_seam(seam, (width, height), orientation)?;
    let span = orientation.span(width, height);

    for (line, &cut) in seam.iter().enumerate() {
        let line = line as u32;
        for offset in cut..span - 1 {
            let (fx, fy) = orientation.xy(line, offset + 1);
            let (tx, ty) = orientation.xy(line, offset);
            let pixel = *image.get_pixel(fx, fy);
            image.put_pixel(tx, ty, pixel);
        }
    }

    let (new_width, new_height) = match orientation {
        Orientation::Vertical => (width - 1, height),
        Orientation::Horizontal => (width, height - 1),
    };
    let cropped = crop_imm(&*image, 0, 0, new_width, new_height).to_image();
    *image = cropped;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

    const IMAGE_DATA: [u8; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn vertical_seam_removes_a_pixel_per_row() {
        let mut buf: GrayImage = ImageBuffer::from_raw(3, 2, IMAGE_DATA.to_vec()).unwrap();
        remove_seam(&mut buf, &[1, 0], Orientation::Vertical).unwrap();
        assert_eq!(buf.dimensions(), (2, 2));
        assert_eq!(buf.into_raw(), vec![1, 3, 5, 6]);
    }

    #[test]
    fn horizontal_seam_removes_a_pixel_per_column() {
        let mut buf: GrayImage = ImageBuffer::from_raw(2, 3, IMAGE_DATA.to_vec()).unwrap();
        remove_seam(&mut buf, &[0, 2], Orientation::Horizontal).unwrap();
        assert_eq!(buf.dimensions(), (2, 2));
        assert_eq!(buf.into_raw(), vec![3, 2, 5, 4]);
    }

    #[test]
    fn keeps_colour_pixels_whole() {
        let mut img = RgbImage::from_fn(3, 1, |x, _| Rgb([x as u8, 10 + x as u8, 20 + x as u8]));
        remove_seam(&mut img, &[0], Orientation::Vertical).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgb([1, 11, 21]));
        assert_eq!(*img.get_pixel(1, 0), Rgb([2, 12, 22]));
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let mut buf: GrayImage = ImageBuffer::from_raw(3, 2, IMAGE_DATA.to_vec()).unwrap();
        let err = remove_seam(&mut buf, &[1, 0, 0], Orientation::Vertical).unwrap_err();
        assert_eq!(err, CarveError::SeamLength { length: 3, lines: 2 });
        assert_eq!(buf.dimensions(), (3, 2));
    }

    #[test]
    fn out_of_span_offset_is_rejected() {
        let mut buf: GrayImage = ImageBuffer::from_raw(3, 2, IMAGE_DATA.to_vec()).unwrap();
        let err = remove_seam(&mut buf, &[1, 3], Orientation::Vertical).unwrap_err();
        assert_eq!(
            err,
            CarveError::SeamOffset {
                line: 1,
                offset: 3,
                span: 3
            }
        );
        assert_eq!(buf.into_raw(), IMAGE_DATA.to_vec());
    }

    #[test]
    fn last_column_can_go() {
        let mut buf: ImageBuffer<Luma<u8>, _> =
            ImageBuffer::from_raw(3, 2, IMAGE_DATA.to_vec()).unwrap();
        remove_seam(&mut buf, &[2, 2], Orientation::Vertical).unwrap();
        assert_eq!(buf.into_raw(), vec![1, 2, 4, 5]);
    }
}
