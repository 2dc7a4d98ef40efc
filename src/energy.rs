// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the intensity gradient
//! at that pixel: the image is reduced to a single luminance channel,
//! a 3x3 Sobel derivative is taken in each direction, and the energy
//! is `sqrt(dx² + dy²)`.  Luminance is scaled to `[0, 1]` by the
//! maximum value of the subpixel type, so the same picture at 8 or 16
//! bits per channel produces the same energies.

use crate::cq;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::ToPrimitive;

/// One energy value per pixel, never negative.
pub type EnergyMap = TwoDimensionalMap<f32>;

// ITU-R BT.601 weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[inline]
fn channel<S: Primitive>(s: S) -> f32 {
    s.to_f32().unwrap_or(0.0)
}

#[inline]
fn luminance<P, S>(pixel: &P) -> f32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let [r, g, b] = pixel.to_rgb().0;
    let max = channel(S::DEFAULT_MAX_VALUE);
    (LUMA_R * channel(r) + LUMA_G * channel(g) + LUMA_B * channel(b)) / max
}

/// Reduce an image to a single luminance channel in `[0, 1]`.
pub fn luminance_map<I, P, S>(image: &I) -> TwoDimensionalMap<f32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut luma = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        luma[(x, y)] = luminance(&image.get_pixel(x, y));
    }
    luma
}

// Reflect-101 border handling: the edge pixel is not repeated, so
// index -1 maps to 1 and index `len` maps to `len - 2`.  A dimension
// of length one reflects onto itself.
#[inline]
fn reflect(i: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len == 1 {
        return 0;
    }
    cq!(i < 0, -i, cq!(i >= len, 2 * len - 2 - i, i)) as u32
}

/// The Sobel gradient magnitude at a single luminance cell.
///
/// Each derivative is summed as differences of opposing samples, so a
/// flat neighborhood cancels to exactly zero.
fn gradient_at(luma: &TwoDimensionalMap<f32>, x: u32, y: u32) -> f32 {
    let (width, height) = luma.dimensions();
    let at = |ox: i64, oy: i64| {
        luma[(
            reflect(i64::from(x) + ox, width),
            reflect(i64::from(y) + oy, height),
        )]
    };
    let dx = (at(1, -1) - at(-1, -1)) + 2.0 * (at(1, 0) - at(-1, 0)) + (at(1, 1) - at(-1, 1));
    let dy = (at(-1, 1) - at(-1, -1)) + 2.0 * (at(0, 1) - at(0, -1)) + (at(1, 1) - at(1, -1));
    (dx * dx + dy * dy).sqrt()
}

#[cfg(not(feature = "threaded"))]
fn fill_gradients(luma: &TwoDimensionalMap<f32>, energy: &mut EnergyMap) {
    let (width, height) = luma.dimensions();
    for (y, x) in iproduct!(0..height, 0..width) {
        energy[(x, y)] = gradient_at(luma, x, y);
    }
}

#[cfg(feature = "threaded")]
fn fill_gradients(luma: &TwoDimensionalMap<f32>, energy: &mut EnergyMap) {
    fill_gradients_in_bands(luma, energy, num_cpus::get());
}

// Every energy cell depends only on the luminance map, so the rows
// can be cut into bands and each band filled on its own thread.
#[cfg(feature = "threaded")]
fn fill_gradients_in_bands(luma: &TwoDimensionalMap<f32>, energy: &mut EnergyMap, bands: usize) {
    let (width, height) = luma.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let width = width as usize;
    let bands = bands.max(1);
    let rows_per_band = (height as usize + bands - 1) / bands;
    let band_len = rows_per_band * width;

    let result = crossbeam::scope(|scope| {
        for (band, cells) in energy.as_mut_slice().chunks_mut(band_len).enumerate() {
            scope.spawn(move |_| {
                let offset = band * band_len;
                for (i, cell) in cells.iter_mut().enumerate() {
                    let index = offset + i;
                    *cell = gradient_at(luma, (index % width) as u32, (index / width) as u32);
                }
            });
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; anything the `image` crate can turn into RGB can be
/// measured.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let luma = luminance_map(image);
    let (width, height) = luma.dimensions();
    let mut energy = EnergyMap::new(width, height);
    fill_gradients(&luma, &mut energy);
    energy
}
