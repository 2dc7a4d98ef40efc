// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Diagnostic renderings: what the carver sees, and where it would cut.

use crate::energy::EnergyMap;
use crate::seamtracer::SeamPath;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};

/// Render an energy map as a grayscale image, the most energetic pixel
/// at full white.  A map with no energy at all comes out black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().cloned().fold(0.0f32, f32::max);
    let mut out = GrayImage::new(width, height);
    if factor <= 0.0 {
        return out;
    }
    for y in 0..height {
        for (x, e) in energy.row(y).iter().enumerate() {
            let level = (e / factor * 255.0).round().min(255.0).max(0.0) as u8;
            out.put_pixel(x as u32, y, Luma([level]));
        }
    }
    out
}

/// A copy of `image` with every pixel of `seam` replaced by `marker`.
pub fn paint_seam<I, P, S>(image: &I, seam: &SeamPath, marker: P) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let orientation = seam.orientation();
    let mut out = ImageBuffer::from_fn(image.width(), image.height(), |x, y| image.get_pixel(x, y));
    for (step, offset) in seam.iter().enumerate() {
        let (x, y) = orientation.to_xy(step as u32, *offset);
        out.put_pixel(x, y, marker);
    }
    out
}
