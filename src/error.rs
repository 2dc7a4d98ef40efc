// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors reported by the carver.
//!
//! Every one of these is a precondition failure: they are checked
//! before any seam is computed, and once the carving loop starts it
//! cannot fail.

use failure::Fail;

/// The ways a resize request can be refused.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested width is zero or larger than the image.
    #[fail(
        display = "invalid width {}: must be between 1 and the current width {}",
        requested, current
    )]
    InvalidWidth { requested: u32, current: u32 },

    /// The requested height is zero or larger than the image.
    #[fail(
        display = "invalid height {}: must be between 1 and the current height {}",
        requested, current
    )]
    InvalidHeight { requested: u32, current: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_both_sizes() {
        let e = Error::InvalidWidth {
            requested: 12,
            current: 10,
        };
        assert_eq!(
            e.to_string(),
            "invalid width 12: must be between 1 and the current width 10"
        );
        let e = Error::InvalidHeight {
            requested: 0,
            current: 3,
        };
        assert!(e.to_string().starts_with("invalid height 0"));
    }
}
