// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dynamic-programming half of seam finding.
//!
//! For every pixel, the cumulative cost table holds the energy of the
//! cheapest seam that reaches it from the starting edge of the image,
//! and the direction table records which of the three neighbors one
//! step back supplied that cheapest seam.  Both tables are kept in
//! image coordinates whichever way the seam runs.

use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;

/// Which way a seam runs through the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom, one pixel per row.  Removing it narrows the
    /// image by one column.
    Vertical,
    /// Left to right, one pixel per column.  Removing it shortens the
    /// image by one row.
    Horizontal,
}

impl Orientation {
    /// How many pixels long a seam is in an image of this size.
    pub fn length(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }

    /// How many candidate positions each step of a seam has.
    pub fn breadth(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    /// Map a position along the seam (`step`) and across it
    /// (`offset`) to image coordinates.
    #[inline]
    pub fn to_xy(self, step: u32, offset: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (offset, step),
            Orientation::Horizontal => (step, offset),
        }
    }
}

/// The cumulative cost and back-pointer tables for one orientation.
#[derive(Debug)]
pub struct SeamTable {
    orientation: Orientation,
    cost: TwoDimensionalMap<f32>,
    direction: TwoDimensionalMap<i8>,
}

impl SeamTable {
    /// Fill both tables from the starting edge outward (row 0 for a
    /// vertical seam, column 0 for a horizontal one).
    ///
    /// The predecessor choice is deliberately asymmetric.  The
    /// straight-back neighbor is the baseline; the `-1` neighbor
    /// replaces it only when strictly cheaper, and the `+1` neighbor
    /// replaces whichever is currently best only when strictly
    /// cheaper.  Changing this order changes which seam wins on flat
    /// regions.
    pub fn build(energy: &EnergyMap, orientation: Orientation) -> Self {
        let dimensions = energy.dimensions();
        let (width, height) = dimensions;
        let length = orientation.length(dimensions);
        let breadth = orientation.breadth(dimensions);
        let at = |step, offset| orientation.to_xy(step, offset);

        let mut cost = TwoDimensionalMap::new(width, height);
        let mut direction = TwoDimensionalMap::new(width, height);

        for offset in 0..breadth {
            cost[at(0, offset)] = energy[at(0, offset)];
        }

        for step in 1..length {
            let back = step - 1;
            for offset in 0..breadth {
                let mut best = cost[at(back, offset)];
                let mut dir = 0i8;
                if offset > 0 && cost[at(back, offset - 1)] < best {
                    best = cost[at(back, offset - 1)];
                    dir = -1;
                }
                if offset + 1 < breadth && cost[at(back, offset + 1)] < best {
                    best = cost[at(back, offset + 1)];
                    dir = 1;
                }
                cost[at(step, offset)] = energy[at(step, offset)] + best;
                direction[at(step, offset)] = dir;
            }
        }

        SeamTable {
            orientation,
            cost,
            direction,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.cost.dimensions()
    }

    /// Cumulative cost of the cheapest seam ending at `(x, y)`.
    pub fn cost(&self, x: u32, y: u32) -> f32 {
        self.cost[(x, y)]
    }

    /// Which neighbor one step back the cheapest seam through `(x, y)`
    /// came from: -1, 0 or +1 across the seam.
    pub fn direction(&self, x: u32, y: u32) -> i8 {
        self.direction[(x, y)]
    }
}
