#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot plane explorer
//!
//! Every pixel of a window is mapped to a point on the complex plane.
//! That point is iterated, and the number of iterations its orbit
//! survives before running off past radius two is turned into a color
//! from a five-band palette.  Clicking zooms in on a point, right
//! clicking backs out, and the picture is only recomputed when the
//! view actually changes.
//!
//! The window itself belongs to whoever drives a [`PlaneField`]; this
//! crate only keeps the viewport, the grid of colors, and the math in
//! between.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;
extern crate tracing;

#[cfg(test)]
extern crate rand;

pub mod config;
pub mod errors;
pub mod escape;
pub mod field;
pub mod palette;
pub mod planes;

pub use config::FieldConfig;
pub use errors::FieldError;
pub use escape::iteration_count;
pub use field::{PlaneField, RenderState};
pub use palette::{iterations_to_color, Band, Palette};
pub use planes::{Pixel, PlaneMapper, Viewport};
