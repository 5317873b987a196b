// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, split it into its channels and calculate, for every
//! pixel, the sum over channels of the absolute horizontal and
//! vertical Sobel responses.  Nothing is normalized here; the carver
//! decides when a map needs rescaling.

use crate::cq;
use crate::error::CarveError;
use crate::twodmap::{EnergyMap, TwoDimensionalMap};
use image::{GenericImageView, Pixel, Primitive};
use num_traits::ToPrimitive;

/// Split an image into one real-valued map per channel.
pub fn split_channels<I, P, S>(image: &I) -> Vec<TwoDimensionalMap<f64>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let count = P::CHANNEL_COUNT as usize;
    let mut channels = vec![TwoDimensionalMap::new(width, height); count];
    for y in 0..height {
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            for (channel, value) in channels.iter_mut().zip(pixel.channels()) {
                channel[(x, y)] = value.to_f64().unwrap_or(0.0);
            }
        }
    }
    channels
}

// Sobel border handling: mirror about the edge pixel without repeating
// it, so index -1 reads index 1 and index n reads n - 2.
#[inline]
fn reflect(i: i64, n: u32) -> u32 {
    let n = i64::from(n);
    if n == 1 {
        return 0;
    }
    let r = cq!(i < 0, -i, cq!(i >= n, 2 * n - 2 - i, i));
    r as u32
}

const SMOOTH: [f64; 3] = [1.0, 2.0, 1.0];

fn sobel_magnitude(channel: &TwoDimensionalMap<f64>, x: u32, y: u32) -> f64 {
    let (width, height) = channel.dimensions();
    let (x, y) = (i64::from(x), i64::from(y));
    let at = |dx: i64, dy: i64| channel[(reflect(x + dx, width), reflect(y + dy, height))];

    let (mut gx, mut gy) = (0.0, 0.0);
    for (d, weight) in (-1..=1).zip(SMOOTH.iter()) {
        gx += weight * (at(1, d) - at(-1, d));
        gy += weight * (at(d, 1) - at(d, -1));
    }
    gx.abs() + gy.abs()
}

/// Compute the energy of every pixel from its channels.  All channels
/// must share one shape, and there must be at least one.
pub fn calculate_energy(channels: &[TwoDimensionalMap<f64>]) -> Result<EnergyMap, CarveError> {
    let first = channels.first().ok_or(CarveError::NoChannels)?;
    let (width, height) = first.dimensions();
    if let Some((index, bad)) = channels
        .iter()
        .enumerate()
        .find(|(_, c)| c.dimensions() != (width, height))
    {
        return Err(CarveError::ChannelShape {
            channel: index,
            width: bad.width,
            height: bad.height,
            expected_width: width,
            expected_height: height,
        });
    }

    let mut emap = EnergyMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            emap[(x, y)] = channels.iter().map(|c| sobel_magnitude(c, x, y)).sum();
        }
    }
    Ok(emap)
}

/// A convenience wrapper: the energy map of an image.
pub fn image_energy<I, P, S>(image: &I) -> Result<EnergyMap, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    calculate_energy(&split_channels(image))
}
