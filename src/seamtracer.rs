// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam backtracking
//!
//! Given a completed seam table, find the cheapest pixel on the far
//! edge and walk the direction table back to the starting edge.

use crate::cq;
use crate::seamtable::{Orientation, SeamTable};
use std::ops::Deref;

/// A seam: for a vertical seam, the column to remove in each row; for
/// a horizontal seam, the row to remove in each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamPath {
    orientation: Orientation,
    path: Vec<u32>,
}

impl SeamPath {
    pub fn new(orientation: Orientation, path: Vec<u32>) -> Self {
        SeamPath { orientation, path }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// True if every step moves at most one pixel across the seam.
    pub fn is_connected(&self) -> bool {
        self.path
            .windows(2)
            .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1)
    }
}

impl Deref for SeamPath {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.path
    }
}

#[inline]
fn step_back(offset: u32, direction: i8) -> u32 {
    match direction {
        -1 => offset - 1,
        1 => offset + 1,
        _ => offset,
    }
}

/// Trace the cheapest seam out of a seam table.
///
/// On the far edge the lowest offset wins ties, since the scan only
/// moves on to a later candidate when it is strictly cheaper.
pub fn trace(table: &SeamTable) -> SeamPath {
    let orientation = table.orientation();
    let dimensions = table.dimensions();
    let length = orientation.length(dimensions);
    let breadth = orientation.breadth(dimensions);
    if length == 0 || breadth == 0 {
        return SeamPath::new(orientation, Vec::new());
    }

    let last = length - 1;
    let cost = |step, offset| {
        let (x, y) = orientation.to_xy(step, offset);
        table.cost(x, y)
    };

    let mut seam_offset = (1..breadth).fold(0, |best, offset| {
        cq!(cost(last, offset) < cost(last, best), offset, best)
    });

    // Working backwards, collect one offset per step, then reverse.
    let path = (0..length)
        .rev()
        .fold(Vec::<u32>::with_capacity(length as usize), |mut acc, step| {
            acc.push(seam_offset);
            let (x, y) = orientation.to_xy(step, seam_offset);
            seam_offset = step_back(seam_offset, table.direction(x, y));
            acc
        })
        .into_iter()
        .rev()
        .collect();

    SeamPath::new(orientation, path)
}
