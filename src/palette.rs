// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns iteration counts into colors.  The iteration range is cut
//! into equal-width regions, each of which gets a hue, and within a
//! region one channel ramps linearly so that neighbouring counts fade
//! into each other:
//!
//! | band | hue           | r      | g         | b         |
//! |------|---------------|--------|-----------|-----------|
//! | 0    | purple → blue | ramp   | 0         | 255       |
//! | 1    | turquoise     | 0      | ramp      | 255       |
//! | 2    | green         | 0      | 255       | 255 - ramp|
//! | 3    | yellow        | ramp   | 255       | 0         |
//! | 4    | red           | 255    | 255 - ramp| 0         |

use image::Rgb;

use config::{MAX_ITER, REGION_COUNT};

/// What the palette paints when it has nothing better to offer.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// The hue regions, in order of increasing iteration count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Band {
    /// Fastest escapes; red ramps up over a blue base.
    Blue,
    /// Green ramps up over blue.
    Cyan,
    /// Blue ramps down under green.
    Green,
    /// Red ramps up over green.
    Yellow,
    /// Slowest escapes and the interior; green ramps down under red.
    Red,
}

impl Band {
    fn from_index(index: usize) -> Option<Band> {
        match index {
            0 => Some(Band::Blue),
            1 => Some(Band::Cyan),
            2 => Some(Band::Green),
            3 => Some(Band::Yellow),
            4 => Some(Band::Red),
            _ => None,
        }
    }

    fn paint(self, ramp: u8) -> Rgb<u8> {
        match self {
            Band::Blue => Rgb([ramp, 0, 255]),
            Band::Cyan => Rgb([0, ramp, 255]),
            Band::Green => Rgb([0, 255, 255 - ramp]),
            Band::Yellow => Rgb([ramp, 255, 0]),
            Band::Red => Rgb([255, 255 - ramp, 0]),
        }
    }
}

/// A banded palette over `[0, max_iterations)`.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    max_iterations: usize,
    regions: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(MAX_ITER, REGION_COUNT)
    }
}

impl Palette {
    /// A palette cutting `max_iterations` into `regions` bands.
    pub fn new(max_iterations: usize, regions: usize) -> Palette {
        Palette {
            max_iterations,
            regions,
        }
    }

    // Iterations per band.  Zero when there are more bands than
    // iterations, in which case nothing can be banded.
    fn region_size(&self) -> usize {
        if self.regions == 0 {
            0
        } else {
            self.max_iterations / self.regions
        }
    }

    // Clamp into [0, max - 1] and split into (band index, offset in
    // band).  Counts past the last whole region fold into it.
    fn locate(&self, count: usize) -> Option<(usize, usize)> {
        let region_size = self.region_size();
        if region_size == 0 {
            return None;
        }
        let count = count.min(self.max_iterations - 1);
        let index = (count / region_size).min(self.regions - 1);
        Some((index, count % region_size))
    }

    /// The band a count falls in, or None if it would be painted black.
    pub fn band_of(&self, count: usize) -> Option<Band> {
        self.locate(count)
            .and_then(|(index, _)| Band::from_index(index))
    }

    /// The color for a pixel whose orbit lasted `count` iterations.
    pub fn color(&self, count: usize) -> Rgb<u8> {
        match self.locate(count) {
            Some((index, offset)) => match Band::from_index(index) {
                Some(band) => {
                    let step = 255 / self.region_size();
                    band.paint((offset * step) as u8)
                }
                None => BLACK,
            },
            None => BLACK,
        }
    }
}

/// Colors `count` with the default 64-iteration, five band palette.
pub fn iterations_to_color(count: usize) -> Rgb<u8> {
    Palette::default().color(count)
}
