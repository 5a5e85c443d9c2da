// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport, which describes which rectangle of the
//! complex plane is currently on screen, and the PlaneMapper, a frozen
//! snapshot of a viewport laid over a pixel grid that maps points from
//! one to the other.
//!
//! Screens count rows downward and the plane counts the imaginary
//! axis upward, so row zero of the grid is the *top* edge of the
//! viewport.
use num::Complex;

use config::FieldConfig;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the lower-left corner and upper-right corner of a
/// rectangle on the complex plane, treating the real part of each
/// value as the x-component and the imaginary part as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Column and row of a pixel.  Signed, because pointer positions
/// outside the window are allowed and simply extrapolate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub i32, pub i32);

/// The width and height of the visible rectangle, in plane units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    /// Horizontal span.
    pub width: f64,
    /// Vertical span.
    pub height: f64,
}

/// The rectangle of the complex plane currently mapped onto the pixel
/// grid.  The extent is always derived from the zoom level, never
/// accumulated, so zooming in and back out returns to exactly where
/// it started.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    center: Complex<f64>,
    extent: Extent,
    aspect_ratio: f64,
    zoom_level: i32,
    base: Extent,
    zoom_factor: f64,
}

impl Viewport {
    /// A viewport at zoom level zero, centered on the origin.  The base
    /// height is scaled by `aspect_ratio` (pixel height / pixel width)
    /// so that pixels come out square.
    pub fn new(aspect_ratio: f64, config: &FieldConfig) -> Viewport {
        let base = Extent {
            width: config.base_width,
            height: config.base_height * aspect_ratio,
        };
        Viewport {
            center: Complex::new(0.0, 0.0),
            extent: base,
            aspect_ratio,
            zoom_level: 0,
            base,
            zoom_factor: config.zoom_factor,
        }
    }

    /// The point at the middle of the screen.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// The size of the visible rectangle.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Pixel height over pixel width, fixed at construction.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// How many more zoom_in than zoom_out calls have been made.
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Move the middle of the screen to `center`.
    pub fn set_center(&mut self, center: Complex<f64>) {
        self.center = center;
    }

    /// One step closer.
    pub fn zoom_in(&mut self) {
        self.zoom_level += 1;
        self.rescale();
    }

    /// One step farther away.
    pub fn zoom_out(&mut self) {
        self.zoom_level -= 1;
        self.rescale();
    }

    fn rescale(&mut self) {
        let scale = self.zoom_factor.powi(self.zoom_level);
        self.extent = Extent {
            width: self.base.width * scale,
            height: self.base.height * scale,
        };
    }

    /// The lower-left and upper-right corners of the visible rectangle.
    pub fn bounds(&self) -> ComplexPlane {
        let (half_w, half_h) = (self.extent.width / 2.0, self.extent.height / 2.0);
        ComplexPlane(
            Complex::new(self.center.re - half_w, self.center.im - half_h),
            Complex::new(self.center.re + half_w, self.center.im + half_h),
        )
    }
}

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex, real cartesian plane.  Maps points from one to the
/// other.  Built from a viewport and then never changed, so it can be
/// shared freely between render workers.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The size of the pixel grid.
    pub integral_plane: IntegralPlane,
    /// The lower-left and upper-right corners of the visible plane.
    pub complex_plane: ComplexPlane,
    // Pixels per plane unit, horizontally and vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Freeze `viewport` over a grid of the given size.
    pub fn new(integral_plane: IntegralPlane, viewport: &Viewport) -> PlaneMapper {
        let complex_plane = viewport.bounds();
        let region_width = complex_plane.1.re - complex_plane.0.re;
        let region_height = complex_plane.1.im - complex_plane.0.im;
        PlaneMapper {
            integral_plane,
            complex_plane,
            grid_factors: (
                f64::from(integral_plane.0) / region_width,
                f64::from(integral_plane.1) / region_height,
            ),
        }
    }

    /// The total number of pixels in the grid.
    pub fn pixel_count(&self) -> usize {
        self.integral_plane.0 as usize * self.integral_plane.1 as usize
    }

    /// Given a pixel, find the point on the complex plane at its
    /// upper-left corner.  Pixels outside the grid extrapolate.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let ComplexPlane(leftlower, rightupper) = self.complex_plane;
        let fx = f64::from(pixel.0) / f64::from(self.integral_plane.0);
        let fy = f64::from(pixel.1) / f64::from(self.integral_plane.1);
        Complex::new(
            fx * (rightupper.re - leftlower.re) + leftlower.re,
            fy * (leftlower.im - rightupper.im) + rightupper.im,
        )
    }

    /// Given a point on the complex plane, find the pixel that contains
    /// it.  Points outside the viewport give pixels outside the grid.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Pixel {
        let left = (point.re - self.complex_plane.0.re) * self.grid_factors.0;
        let top = (self.complex_plane.1.im - point.im) * self.grid_factors.1;
        Pixel(left.floor() as i32, top.floor() as i32)
    }
}
