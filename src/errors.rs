// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The only things that can go wrong with a PlaneField happen before
//! it exists: a grid with no pixels in it or too many to hold, or a
//! configuration that cannot describe a plane.  Once built, the field
//! never fails.

/// Reasons a PlaneField could not be constructed.
#[derive(Debug, Fail, PartialEq)]
pub enum FieldError {
    /// One or both of the pixel dimensions was zero.
    #[fail(display = "The pixel grid must be non-empty, got {}x{}", width, height)]
    EmptyGrid {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The grid has more bytes than this machine can address.
    #[fail(display = "The pixel grid is too large, got {}x{}", width, height)]
    GridTooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The configuration cannot produce a usable viewport or palette.
    #[fail(display = "Invalid field configuration: {}", reason)]
    BadConfig {
        /// What was wrong with it.
        reason: String,
    },
}

impl FieldError {
    pub(crate) fn bad_config<S: Into<String>>(reason: S) -> FieldError {
        FieldError::BadConfig {
            reason: reason.into(),
        }
    }
}
