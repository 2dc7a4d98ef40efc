// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! Rather than scaling or cropping, the carver repeatedly finds the
//! connected path of pixels (a seam) that carries the least visual
//! information and takes it out, until the image is the requested
//! size.

mod ternary;

pub mod dump;
pub mod energy;
pub mod error;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamtable;
pub mod seamtracer;
pub mod twodmap;

pub use dump::{energy_to_image, paint_seam};
pub use energy::{calculate_energy, luminance_map, EnergyMap};
pub use error::{Error, Result};
pub use seamcarver::{remove_seam, SeamCarver, Strategy};
pub use seamfinder::{CenterSeams, GradientSeams, SeamFinder};
pub use seamtable::{Orientation, SeamTable};
pub use seamtracer::{trace, SeamPath};
pub use twodmap::TwoDimensionalMap;

/// An eight-bit RGB image, the currency of [`resize`].
pub type PixelGrid = image::RgbImage;

/// Shrink `image` to `target_width` x `target_height` by seam carving.
///
/// Fails with [`Error::InvalidWidth`] or [`Error::InvalidHeight`] if
/// either target is zero or larger than the image; `image` itself is
/// never modified.
pub fn resize(image: &PixelGrid, target_width: u32, target_height: u32) -> Result<PixelGrid> {
    SeamCarver::new(image).carve(target_width, target_height)
}
