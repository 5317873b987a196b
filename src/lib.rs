// #![deny(missing_docs)]

//! Content-aware image resizing.
//!
//! Seams, connected paths of low-energy pixels, are found with one of
//! three interchangeable strategies and removed one at a time, either
//! until the image reaches a target size or until a marked object has
//! been carved away.

extern crate image;

#[macro_use]
pub mod ternary;

pub mod config;
pub mod cumulative;
pub mod dynamic;
pub mod energy;
pub mod error;
pub mod graphcut;
pub mod greedy;
pub mod mask;
pub mod orientation;
pub mod removal;
pub mod seamcarver;
pub mod seamfinder;
pub mod trace;
pub mod twodmap;

use image::{ImageBuffer, Pixel};

/// An owned image with the buffer layout the carver works on.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

pub use config::{Algorithm, CarveConfig};
pub use cumulative::cumulative_map;
pub use energy::{calculate_energy, image_energy};
pub use error::CarveError;
pub use mask::{RemovalArea, Slice};
pub use orientation::Orientation;
pub use removal::remove_seam;
pub use seamcarver::{CarveReport, SeamCarver};
pub use seamfinder::{seam_finder, SeamFinder};
pub use trace::SeamTrace;
pub use twodmap::{CumulativeMap, EnergyMap, TwoDimensionalMap};
