// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam selection strategies.

use crate::energy::calculate_energy;
use crate::seamtable::{Orientation, SeamTable};
use crate::seamtracer::{trace, SeamPath};
use image::{GenericImageView, Pixel, Primitive};

/// This trait defines how we get seams out of an image.  It's a
/// primitive interface, just enough to make room for more than one way
/// of choosing what to cut.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a seam running the given way.
    fn find_seam(&self, orientation: Orientation) -> SeamPath;

    /// Request a left-to-right seam.
    fn find_horizontal_seam(&self) -> SeamPath {
        self.find_seam(Orientation::Horizontal)
    }

    /// Request a top-to-bottom seam.
    fn find_vertical_seam(&self) -> SeamPath {
        self.find_seam(Orientation::Vertical)
    }
}

/// The real thing: gradient energy, cumulative cost, backtrack.
/// Everything is rebuilt from scratch on every request, since taking
/// out one seam changes which pixels are adjacent everywhere.
pub struct GradientSeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> GradientSeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        GradientSeams { image }
    }
}

impl<'a, I, P, S> SeamFinder for GradientSeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_seam(&self, orientation: Orientation) -> SeamPath {
        let energy = calculate_energy(self.image);
        let seam = trace(&SeamTable::build(&energy, orientation));
        log::trace!("{:?} seam: {:?}", orientation, &*seam);
        seam
    }
}

/// A baseline that ignores the content altogether and always cuts
/// straight through the middle of the image.
pub struct CenterSeams {
    dimensions: (u32, u32),
}

impl CenterSeams {
    pub fn new<I: GenericImageView>(image: &I) -> Self {
        CenterSeams {
            dimensions: image.dimensions(),
        }
    }
}

impl SeamFinder for CenterSeams {
    fn find_seam(&self, orientation: Orientation) -> SeamPath {
        let middle = orientation.breadth(self.dimensions) / 2;
        let length = orientation.length(self.dimensions) as usize;
        SeamPath::new(orientation, vec![middle; length])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cq;
    use image::{Rgb, RgbImage};

    #[test]
    fn flat_images_give_up_the_first_seam() {
        let img = RgbImage::from_pixel(5, 4, Rgb([7, 7, 7]));
        let finder = GradientSeams::new(&img);
        assert_eq!(&*finder.find_vertical_seam(), &[0, 0, 0, 0]);
        assert_eq!(&*finder.find_horizontal_seam(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn gradient_seams_avoid_a_vertical_edge() {
        // Columns 0 and 1 black, 2 through 4 white.
        let img = RgbImage::from_fn(5, 5, |x, _| {
            cq!(x < 2, Rgb([0, 0, 0]), Rgb([255, 255, 255]))
        });
        let seam = GradientSeams::new(&img).find_vertical_seam();
        assert_eq!(seam.len(), 5);
        assert!(seam.iter().all(|x| *x != 2 && *x != 1));
    }

    #[test]
    fn center_seams_run_down_the_middle() {
        let img = RgbImage::new(5, 4);
        let finder = CenterSeams::new(&img);
        assert_eq!(&*finder.find_vertical_seam(), &[2, 2, 2, 2]);
        assert_eq!(&*finder.find_horizontal_seam(), &[2, 2, 2, 2, 2]);
    }
}
