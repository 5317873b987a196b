// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// Target-size carving only ever shrinks.
    #[fail(
        display = "target {} is {} but the image {} is {}; it must be smaller",
        dimension, target, dimension, current
    )]
    TargetNotSmaller {
        dimension: &'static str,
        target: u32,
        current: u32,
    },

    #[fail(
        display = "seamcarve cannot upscale an image from {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(display = "energy calculation requires at least one channel")]
    NoChannels,

    #[fail(
        display = "channel {} is {}x{}, expected {}x{}",
        channel, width, height, expected_width, expected_height
    )]
    ChannelShape {
        channel: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[fail(display = "seam has {} entries but the image has {} lines", length, lines)]
    SeamLength { length: usize, lines: u32 },

    #[fail(
        display = "seam offset {} on line {} is outside a span of {}",
        offset, line, span
    )]
    SeamOffset { line: u32, offset: u32, span: u32 },

    #[fail(
        display = "mask is {}x{} but the image is {}x{}",
        mask_width, mask_height, width, height
    )]
    MaskShape {
        mask_width: u32,
        mask_height: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "unknown seam algorithm: {} (expected greedy, dp or graphcut)", _0)]
    UnknownAlgorithm(String),

    #[fail(
        display = "{} marked pixels remain after the image ran out of seams",
        remaining
    )]
    MaskNotConsumed { remaining: u64 },
}
