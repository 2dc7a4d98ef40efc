// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with the seam removal helpers it
//! drives.

use crate::cq;
use crate::error::{Error, Result};
use crate::seamfinder::{CenterSeams, GradientSeams, SeamFinder};
use crate::seamtable::Orientation;
use crate::seamtracer::SeamPath;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::debug;

/// Build a new image without the pixels on `seam`.  A vertical seam
/// costs the image one column; a horizontal seam costs it one row.
/// Pixels past the seam slide over to close the gap.  The source image
/// is never touched.
pub fn remove_seam<I, P, S>(image: &I, seam: &SeamPath) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    match seam.orientation() {
        Orientation::Vertical => ImageBuffer::from_fn(width - 1, height, |x, y| {
            image.get_pixel(cq!(x < seam[y as usize], x, x + 1), y)
        }),
        Orientation::Horizontal => ImageBuffer::from_fn(width, height - 1, |x, y| {
            image.get_pixel(x, cq!(y < seam[x as usize], y, y + 1))
        }),
    }
}

/// How to choose the seam that comes out next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The minimal-energy seam.
    Gradient,
    /// The middle row or column, regardless of content.
    Center,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Gradient
    }
}

fn carveonce<I, P, S>(
    image: &I,
    strategy: Strategy,
    orientation: Orientation,
) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = match strategy {
        Strategy::Gradient => GradientSeams::new(image).find_seam(orientation),
        Strategy::Center => CenterSeams::new(image).find_seam(orientation),
    };
    remove_seam(image, &seam)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
    strategy: Strategy,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self {
            image,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image.
    ///
    /// Each pass takes out one row if the image is still too tall, then
    /// one column if it is still too wide, so the two dimensions shrink
    /// together rather than one after the other.  Both seams are found
    /// on the image as it stands at that moment.
    pub fn carve(&self, newwidth: u32, newheight: u32) -> Result<ImageBuffer<P, Vec<S>>> {
        let (width, height) = self.image.dimensions();
        let too_wide = Error::InvalidWidth {
            requested: newwidth,
            current: width,
        };
        let too_tall = Error::InvalidHeight {
            requested: newheight,
            current: height,
        };
        // Upscaling is refused before empty targets are.
        if newwidth > width {
            return Err(too_wide);
        }
        if newheight > height {
            return Err(too_tall);
        }
        if newwidth == 0 {
            return Err(too_wide);
        }
        if newheight == 0 {
            return Err(too_tall);
        }

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image
            .pixels()
            .for_each(|(x, y, p)| scratch.put_pixel(x, y, p));

        while scratch.height() > newheight || scratch.width() > newwidth {
            if scratch.height() > newheight {
                scratch = carveonce(&scratch, self.strategy, Orientation::Horizontal);
            }
            if scratch.width() > newwidth {
                scratch = carveonce(&scratch, self.strategy, Orientation::Vertical);
            }
            debug!("carved to {} x {}", scratch.width(), scratch.height());
        }
        Ok(scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn numbered(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]))
    }

    #[test]
    fn vertical_removal_closes_the_gap() {
        let img = numbered(3, 2);
        let seam = SeamPath::new(Orientation::Vertical, vec![1, 0]);
        let out = remove_seam(&img, &seam);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([2, 0, 0]));
        assert_eq!(out.get_pixel(0, 1), &Rgb([1, 1, 0]));
        assert_eq!(out.get_pixel(1, 1), &Rgb([2, 1, 0]));
    }

    #[test]
    fn horizontal_removal_closes_the_gap() {
        let img = numbered(2, 3);
        let seam = SeamPath::new(Orientation::Horizontal, vec![2, 0]);
        let out = remove_seam(&img, &seam);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(0, 1), &Rgb([0, 1, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([1, 1, 0]));
        assert_eq!(out.get_pixel(1, 1), &Rgb([1, 2, 0]));
    }

    #[test]
    fn removal_leaves_the_source_alone() {
        let img = numbered(4, 4);
        let before = img.clone();
        let seam = SeamPath::new(Orientation::Vertical, vec![3, 2, 1, 0]);
        let _ = remove_seam(&img, &seam);
        assert_eq!(img, before);
    }

    #[test]
    fn each_step_loses_exactly_one_row_or_column() {
        let img = numbered(6, 5);
        let finder = GradientSeams::new(&img);
        let narrower = remove_seam(&img, &finder.find_vertical_seam());
        assert_eq!(narrower.dimensions(), (5, 5));
        let shorter = remove_seam(&img, &finder.find_horizontal_seam());
        assert_eq!(shorter.dimensions(), (6, 4));
    }

    #[test]
    fn rejects_bad_sizes_before_doing_anything() {
        let img = numbered(4, 3);
        let carver = SeamCarver::new(&img);
        assert_eq!(
            carver.carve(5, 3).unwrap_err(),
            Error::InvalidWidth {
                requested: 5,
                current: 4
            }
        );
        assert_eq!(
            carver.carve(0, 3).unwrap_err(),
            Error::InvalidWidth {
                requested: 0,
                current: 4
            }
        );
        assert_eq!(
            carver.carve(4, 4).unwrap_err(),
            Error::InvalidHeight {
                requested: 4,
                current: 3
            }
        );
        assert_eq!(
            carver.carve(4, 0).unwrap_err(),
            Error::InvalidHeight {
                requested: 0,
                current: 3
            }
        );
    }

    #[test]
    fn width_is_checked_before_height() {
        let img = numbered(4, 3);
        match SeamCarver::new(&img).carve(9, 9) {
            Err(Error::InvalidWidth { .. }) => {}
            other => panic!("expected InvalidWidth, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn upscaling_is_reported_before_an_empty_target() {
        let img = numbered(4, 3);
        let carver = SeamCarver::new(&img);
        assert_eq!(
            carver.carve(0, 4).unwrap_err(),
            Error::InvalidHeight {
                requested: 4,
                current: 3
            }
        );
        assert_eq!(
            carver.carve(5, 0).unwrap_err(),
            Error::InvalidWidth {
                requested: 5,
                current: 4
            }
        );
    }

    #[test]
    fn same_size_is_a_copy() {
        let img = numbered(5, 4);
        let out = SeamCarver::new(&img).carve(5, 4).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn carves_down_to_a_single_pixel() {
        let img = numbered(5, 7);
        let out = SeamCarver::new(&img).carve(1, 1).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
    }

    #[test]
    fn center_strategy_drops_the_middle() {
        let img = numbered(5, 1);
        let out = SeamCarver::new(&img)
            .with_strategy(Strategy::Center)
            .carve(4, 1)
            .unwrap();
        let xs: Vec<u8> = out.pixels().map(|p| p[0]).collect();
        assert_eq!(xs, vec![0, 1, 3, 4]);
    }
}
