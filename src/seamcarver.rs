// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! The carver owns the image being carved, the area (if any) marked
//! for removal, and the configuration.  Every step is the same: build
//! the energy map, find a seam, show it to whoever is watching, and
//! take it out.  The three public entry points differ only in which
//! way the seams run and when to stop.

// This is absurdly inefficient, as the entire energy map is
// recalculated for every seam.  Only the pixels next to the last seam
// actually change.

use crate::config::{Algorithm, CarveConfig};
use crate::energy::image_energy;
use crate::error::CarveError;
use crate::mask::RemovalArea;
use crate::orientation::Orientation;
use crate::removal::remove_seam;
use crate::seamfinder::{seam_finder, SeamFinder};
use crate::Image;
use image::{GrayImage, Pixel, Primitive};
use log::{debug, error, info, warn};
use std::thread;

/// What a carving run did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarveReport {
    /// Number of seams removed.
    pub iterations: u32,
    /// Width of the image afterwards.
    pub width: u32,
    /// Height of the image afterwards.
    pub height: u32,
    /// Every removed seam, in order, in the coordinates of the image
    /// as it was when the seam was found.
    pub seams: Vec<(Orientation, Vec<u32>)>,
}

impl CarveReport {
    fn record(&mut self, orientation: Orientation, seam: Vec<u32>, (width, height): (u32, u32)) {
        self.iterations += 1;
        self.width = width;
        self.height = height;
        self.seams.push((orientation, seam));
    }
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<P: Pixel> {
    image: Image<P>,
    mask: Option<RemovalArea>,
    config: CarveConfig,
}

impl<P, S> SeamCarver<P>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved and the
    /// default configuration.
    pub fn new(image: Image<P>) -> Self {
        Self::with_config(image, CarveConfig::default())
    }

    pub fn with_config(image: Image<P>, config: CarveConfig) -> Self {
        SeamCarver {
            image,
            mask: None,
            config,
        }
    }

    pub fn image(&self) -> &Image<P> {
        &self.image
    }

    pub fn into_image(self) -> Image<P> {
        self.image
    }

    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    pub fn mask(&self) -> Option<&RemovalArea> {
        self.mask.as_ref()
    }

    /// Replace (or with `None`, forget) the area marked for removal.
    pub fn set_mask(&mut self, area: Option<RemovalArea>) {
        self.mask = area;
    }

    /// Mark every non-zero pixel of `mask` for removal.  The mask must
    /// be the same size as the image.
    pub fn set_mask_image(
        &mut self,
        mask: &GrayImage,
        orientation: Orientation,
    ) -> Result<(), CarveError> {
        let (width, height) = self.image.dimensions();
        let (mask_width, mask_height) = mask.dimensions();
        if (mask_width, mask_height) != (width, height) {
            let err = CarveError::MaskShape {
                mask_width,
                mask_height,
                width,
                height,
            };
            error!("{}", err);
            return Err(err);
        }
        self.mask = Some(RemovalArea::from_mask(
            mask,
            orientation,
            self.config.mask_threshold,
        ));
        Ok(())
    }

    /// Mark the rectangle from `start` (inclusive) to `end` (exclusive)
    /// for removal.
    pub fn set_mask_rect(&mut self, start: (u32, u32), end: (u32, u32), orientation: Orientation) {
        self.mask = Some(RemovalArea::bounded(
            start,
            end,
            orientation,
            self.config.mask_threshold,
        ));
    }

    fn span(&self, orientation: Orientation) -> u32 {
        let (width, height) = self.image.dimensions();
        orientation.span(width, height)
    }

    // One seam, start to finish.  Masked runs keep their raw energies;
    // everything else on the dynamic-programming path is stretched to
    // 0..255 first.
    fn carve_once<F>(
        &mut self,
        finder: &dyn SeamFinder,
        orientation: Orientation,
        area: Option<&RemovalArea>,
        observer: &mut F,
        report: &mut CarveReport,
    ) -> Result<Vec<u32>, CarveError>
    where
        F: FnMut(Orientation, &[u32]),
    {
        let mut energy = image_energy(&self.image)?;
        match area {
            Some(area) => area.apply_to_energy(&mut energy, self.config.mask_energy),
            None if self.config.algorithm == Algorithm::DynamicProgramming => {
                energy.normalize(0.0, 255.0)
            }
            None => {}
        }

        let seam = finder.find_seam(&energy, orientation);
        debug!(
            "{:?} seam on {}x{} starts at {:?}",
            orientation,
            self.image.width(),
            self.image.height(),
            seam.first()
        );
        observer(orientation, &seam);
        if let Some(delay) = self.config.step_delay {
            thread::sleep(delay);
        }

        remove_seam(&mut self.image, &seam, orientation)?;
        report.record(orientation, seam.clone(), self.image.dimensions());
        Ok(seam)
    }

    fn empty_report(&self) -> CarveReport {
        let (width, height) = self.image.dimensions();
        CarveReport {
            width,
            height,
            ..CarveReport::default()
        }
    }

    /// Remove seams running in `orientation` until the dimension they
    /// shrink is down to `target`.
    pub fn carve_to<F>(
        &mut self,
        target: u32,
        orientation: Orientation,
        mut observer: F,
    ) -> Result<CarveReport, CarveError>
    where
        F: FnMut(Orientation, &[u32]),
    {
        let current = self.span(orientation);
        if target >= current {
            let err = CarveError::TargetNotSmaller {
                dimension: orientation.dimension(),
                target,
                current,
            };
            error!("{}", err);
            return Err(err);
        }

        let finder = seam_finder(&self.config);
        let mut report = self.empty_report();
        while self.span(orientation) > target {
            self.carve_once(&*finder, orientation, None, &mut observer, &mut report)?;
        }
        info!(
            "carved {} {:?} seams with {:?}; image is now {}x{}",
            report.iterations, orientation, self.config.algorithm, report.width, report.height
        );
        Ok(report)
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating directions while both dimensions still
    /// need to shrink.
    pub fn resize<F>(
        &mut self,
        new_width: u32,
        new_height: u32,
        mut observer: F,
    ) -> Result<CarveReport, CarveError>
    where
        F: FnMut(Orientation, &[u32]),
    {
        let (width, height) = self.image.dimensions();
        if width < new_width || height < new_height {
            let err = CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            };
            error!("{}", err);
            return Err(err);
        }

        let finder = seam_finder(&self.config);
        let mut report = self.empty_report();
        let mut direction = Orientation::Vertical;
        loop {
            let (width, height) = self.image.dimensions();
            let orientation = match (width > new_width, height > new_height) {
                (true, true) => {
                    let current = direction;
                    direction = direction.turn();
                    current
                }
                (true, false) => Orientation::Vertical,
                (false, true) => Orientation::Horizontal,
                (false, false) => break,
            };
            self.carve_once(&*finder, orientation, None, &mut observer, &mut report)?;
        }
        info!(
            "resized to {}x{} in {} seams",
            report.width, report.height, report.iterations
        );
        Ok(report)
    }

    /// Carve away the marked area with seams running in `orientation`.
    /// Without a mask, or with an empty one, nothing happens.  Once the
    /// area is consumed the mask is cleared.
    pub fn remove_object<F>(
        &mut self,
        orientation: Orientation,
        mut observer: F,
    ) -> Result<CarveReport, CarveError>
    where
        F: FnMut(Orientation, &[u32]),
    {
        let mut report = self.empty_report();
        let (width, height) = self.image.dimensions();
        let mut area = match self.mask.take() {
            Some(area) if !area.is_empty() => area.reoriented(orientation, width, height),
            _ => {
                info!("no marked pixels; nothing to remove");
                return Ok(report);
            }
        };

        let finder = seam_finder(&self.config);
        loop {
            if self.span(orientation) <= 1 {
                let remaining = area.total_size();
                warn!(
                    "image {} ran out after {} seams with {} marked pixels left",
                    orientation.dimension(),
                    report.iterations,
                    remaining
                );
                self.mask = Some(area);
                return Err(CarveError::MaskNotConsumed { remaining });
            }
            let seam = self.carve_once(
                &*finder,
                orientation,
                Some(&area),
                &mut observer,
                &mut report,
            )?;
            if area.modify(&seam) {
                break;
            }
        }
        info!(
            "object removed in {} {:?} seams; image is now {}x{}",
            report.iterations, orientation, report.width, report.height
        );
        Ok(report)
    }
}
