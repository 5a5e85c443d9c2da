// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs a PlaneField is built with.  The defaults reproduce the
//! classic view: a 4.0-wide window on the plane centered on the
//! origin, 64 iterations, five color bands, and each zoom step halving
//! the window.

use errors::FieldError;
use num_cpus;

/// Iteration cap used when nothing else is asked for.
pub const MAX_ITER: usize = 64;
/// Number of hue bands in the palette.
pub const REGION_COUNT: usize = 5;
/// Width of the plane visible at zoom level zero.
pub const BASE_WIDTH: f64 = 4.0;
/// Height of the plane visible at zoom level zero, before the aspect
/// ratio of the pixel grid is applied.
pub const BASE_HEIGHT: f64 = 4.0;
/// Multiplier applied to the extent per zoom level.
pub const BASE_ZOOM: f64 = 0.5;

/// Everything about a PlaneField that isn't the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// The escape evaluator gives up after this many iterations.
    pub max_iterations: usize,
    /// How many hue bands the iteration range is split into.
    pub regions: usize,
    /// Plane width at zoom level zero.
    pub base_width: f64,
    /// Plane height at zoom level zero (scaled by the aspect ratio).
    pub base_height: f64,
    /// Extent multiplier per zoom level; below 1.0 means zoom_in
    /// magnifies.
    pub zoom_factor: f64,
    /// Worker threads used by recompute.
    pub threads: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_iterations: MAX_ITER,
            regions: REGION_COUNT,
            base_width: BASE_WIDTH,
            base_height: BASE_HEIGHT,
            zoom_factor: BASE_ZOOM,
            threads: num_cpus::get(),
        }
    }
}

impl FieldConfig {
    /// This configuration with a different iteration cap.
    pub fn with_iterations(self, max_iterations: usize) -> Self {
        FieldConfig {
            max_iterations,
            ..self
        }
    }

    /// This configuration with a different worker count.
    pub fn with_threads(self, threads: usize) -> Self {
        FieldConfig { threads, ..self }
    }

    /// Rejects configurations that can't describe a plane.  A region
    /// size of zero (more regions than iterations) is allowed; the
    /// palette paints everything black in that case.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.max_iterations == 0 {
            return Err(FieldError::bad_config("max_iterations must be at least 1"));
        }
        if self.regions == 0 {
            return Err(FieldError::bad_config("regions must be at least 1"));
        }
        if self.threads == 0 {
            return Err(FieldError::bad_config("threads must be at least 1"));
        }
        for &(name, value) in &[
            ("base_width", self.base_width),
            ("base_height", self.base_height),
            ("zoom_factor", self.zoom_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::bad_config(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
