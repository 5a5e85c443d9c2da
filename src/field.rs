// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The PlaneField owns a pixel grid and the viewport laid over it.
//! Drivers feed it pointer events (zoom, recenter, cursor moves) and
//! call `recompute` once per frame; recompute only does any work when
//! something has moved since the last time it ran.  What to actually
//! draw is the driver's problem; the field only exposes the colored
//! grid.

use std::panic;
use std::time::Instant;

use crossbeam;
use image::{Rgb, RgbImage};
use itertools::iproduct;
use num::Complex;
use tracing::{debug, trace};

use config::FieldConfig;
use errors::FieldError;
use escape::iteration_count;
use palette::Palette;
use planes::{IntegralPlane, Pixel, PlaneMapper, Viewport};

const CHANNELS: usize = 3;

/// Whether the pixel grid reflects the current viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// The viewport moved; the grid is stale.
    Dirty,
    /// The grid matches the viewport.
    Clean,
}

/// An interactive, lazily recomputed view of the plane.
#[derive(Debug)]
pub struct PlaneField {
    grid: RgbImage,
    viewport: Viewport,
    state: RenderState,
    cursor: Complex<f64>,
    palette: Palette,
    config: FieldConfig,
}

impl PlaneField {
    /// A field of `width` by `height` pixels with the default
    /// configuration.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        PlaneField::with_config(width, height, FieldConfig::default())
    }

    /// A field of `width` by `height` pixels.  Neither may be zero,
    /// and the grid's bytes must fit in memory's address range.
    pub fn with_config(width: u32, height: u32, config: FieldConfig) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(FieldError::GridTooLarge { width, height })?;
        config.validate()?;

        let aspect_ratio = f64::from(height) / f64::from(width);
        Ok(PlaneField {
            grid: RgbImage::new(width, height),
            viewport: Viewport::new(aspect_ratio, &config),
            state: RenderState::Dirty,
            cursor: Complex::new(0.0, 0.0),
            palette: Palette::new(config.max_iterations, config.regions),
            config,
        })
    }

    /// Width and height of the pixel grid.
    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The visible rectangle of the plane.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Whether a recompute is pending.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Force the render state.  Setting it to Dirty makes the next
    /// recompute redraw everything even if nothing moved.
    pub fn set_state(&mut self, state: RenderState) {
        self.state = state;
    }

    /// The plane coordinate under the pointer, as of the last call to
    /// set_mouse_location.
    pub fn cursor(&self) -> Complex<f64> {
        self.cursor
    }

    /// The colored pixel grid, row-major, for the driver to display.
    /// Only meaningful once recompute has run.
    pub fn draw(&self) -> &RgbImage {
        &self.grid
    }

    /// The color of one pixel, or None if it's off the grid.
    pub fn color_at(&self, pixel: Pixel) -> Option<Rgb<u8>> {
        let (width, height) = self.dimensions();
        let Pixel(col, row) = pixel;
        if col < 0 || row < 0 || col as u32 >= width || row as u32 >= height {
            return None;
        }
        Some(*self.grid.get_pixel(col as u32, row as u32))
    }

    fn mapper(&self) -> PlaneMapper {
        let (width, height) = self.dimensions();
        PlaneMapper::new(IntegralPlane(width, height), &self.viewport)
    }

    /// Where `pixel` lands on the plane under the current viewport.
    pub fn map_pixel_to_point(&self, pixel: Pixel) -> Complex<f64> {
        self.mapper().pixel_to_point(&pixel)
    }

    /// The pixel containing `point` under the current viewport.  Points
    /// off screen give pixels off the grid.
    pub fn map_point_to_pixel(&self, point: Complex<f64>) -> Pixel {
        self.mapper().point_to_pixel(&point)
    }

    /// Magnify one step around the current center.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        trace!(zoom_level = self.viewport.zoom_level(), "zoom in");
        self.state = RenderState::Dirty;
    }

    /// Back off one step around the current center.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        trace!(zoom_level = self.viewport.zoom_level(), "zoom out");
        self.state = RenderState::Dirty;
    }

    /// Re-center the view on the point under `pixel`.
    pub fn set_center(&mut self, pixel: Pixel) {
        let center = self.map_pixel_to_point(pixel);
        self.viewport.set_center(center);
        trace!(re = center.re, im = center.im, "recentered");
        self.state = RenderState::Dirty;
    }

    /// Remember the point under the pointer.  Does not dirty the field.
    pub fn set_mouse_location(&mut self, pixel: Pixel) {
        self.cursor = self.map_pixel_to_point(pixel);
    }

    /// Recolor every pixel if the viewport has changed since the last
    /// recompute.  Returns true if any pixels were written.
    ///
    /// The grid is cut into bands of whole rows, one per worker, and
    /// each worker gets its own slice of the buffer and a copy of the
    /// viewport, so nothing is shared but read-only data.
    pub fn recompute(&mut self) -> bool {
        if self.state == RenderState::Clean {
            return false;
        }

        let started = Instant::now();
        let mapper = self.mapper();
        let palette = self.palette;
        let max_iterations = self.config.max_iterations;
        let (width, height) = (mapper.integral_plane.0 as usize, mapper.integral_plane.1 as usize);
        let threads = self.config.threads.min(height).max(1);
        let zonesize = (height + threads - 1) / threads;
        debug!(width, height, threads, zonesize, "recompute started");

        let pixels: &mut [u8] = &mut self.grid;
        let rendered = crossbeam::scope(|spawner| {
            for (band, region) in pixels.chunks_mut(zonesize * width * CHANNELS).enumerate() {
                spawner.spawn(move |_| {
                    render_band(&mapper, &palette, max_iterations, band * zonesize, region)
                });
            }
        });
        if let Err(e) = rendered {
            panic::resume_unwind(e);
        }

        self.state = RenderState::Clean;
        debug!(pixels = mapper.pixel_count(), elapsed = ?started.elapsed(), "recompute finished");
        true
    }

    /// Title, center, cursor, and instructions, one per line.
    pub fn describe_status(&self) -> String {
        let center = self.viewport.center();
        format!(
            "Mandelbrot Set\nCenter: ({}, {})\nCursor: ({}, {})\nLeft-click to Zoom in\nRight-click to Zoom out",
            center.re, center.im, self.cursor.re, self.cursor.im
        )
    }
}

// Color the rows of one band.  `region` starts at row `first_row` of
// the full grid and holds whole rows.
fn render_band(
    mapper: &PlaneMapper,
    palette: &Palette,
    max_iterations: usize,
    first_row: usize,
    region: &mut [u8],
) {
    let width = mapper.integral_plane.0 as usize;
    let rows = region.len() / (width * CHANNELS);
    for (row, col) in iproduct!(0..rows, 0..width) {
        let pixel = Pixel(col as i32, (first_row + row) as i32);
        let count = iteration_count(mapper.pixel_to_point(&pixel), max_iterations);
        let Rgb(rgb) = palette.color(count);
        let offset = (row * width + col) * CHANNELS;
        region[offset..offset + CHANNELS].copy_from_slice(&rgb);
    }
}
