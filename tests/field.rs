// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate image;
extern crate mandelplane;
extern crate num;

use image::Rgb;
use mandelplane::config::{BASE_WIDTH, BASE_ZOOM, MAX_ITER};
use mandelplane::{iterations_to_color, Pixel, PlaneField, RenderState};
use num::Complex;

fn palette_colors() -> Vec<Rgb<u8>> {
    (0..MAX_ITER).map(iterations_to_color).collect()
}

#[test]
fn four_by_four_grid_end_to_end() {
    let mut field = PlaneField::new(4, 4).unwrap();
    let extent = field.viewport().extent();
    assert_eq!(field.viewport().center(), Complex::new(0.0, 0.0));
    assert_eq!(extent.width, 4.0);
    assert_eq!(extent.height, 4.0 * field.viewport().aspect_ratio());

    assert_eq!(field.state(), RenderState::Dirty);
    assert!(field.recompute());
    assert_eq!(field.state(), RenderState::Clean);

    let colors = palette_colors();
    for row in 0..4 {
        for col in 0..4 {
            let color = field.color_at(Pixel(col, row)).unwrap();
            assert!(colors.contains(&color), "{:?} at {},{} is not a band color", color, col, row);
        }
    }

    // The corner is (-2, 2) and leaves at once; the middle is the origin
    // and never leaves.
    let corner = field.color_at(Pixel(0, 0)).unwrap();
    let middle = field.color_at(Pixel(2, 2)).unwrap();
    assert_eq!(corner, Rgb([0, 0, 255]));
    assert_eq!(middle, iterations_to_color(MAX_ITER));
    assert_ne!(corner, middle);
}

#[test]
fn zooming_in_and_back_out_returns_to_baseline() {
    let mut field = PlaneField::new(120, 80).unwrap();
    let baseline = field.viewport().extent();

    for k in 1..=10 {
        field.zoom_in();
        let expected = BASE_WIDTH * BASE_ZOOM.powi(k);
        assert!((field.viewport().extent().width - expected).abs() < 1e-12);
    }
    for _ in 0..10 {
        field.zoom_out();
    }
    assert_eq!(field.viewport().zoom_level(), 0);
    assert_eq!(field.viewport().extent(), baseline);
}

#[test]
fn driver_session() {
    // Left-click, left-click, right-click, move, the way a window would.
    let mut field = PlaneField::new(200, 100).unwrap();
    field.recompute();

    field.zoom_in();
    field.set_center(Pixel(150, 50));
    assert_eq!(field.viewport().center(), Complex::new(0.5, 0.0));

    field.zoom_in();
    field.set_center(Pixel(100, 0));
    assert_eq!(field.viewport().center(), Complex::new(0.5, 0.25));

    field.zoom_out();
    assert_eq!(field.viewport().zoom_level(), 1);
    assert_eq!(field.state(), RenderState::Dirty);
    assert!(field.recompute());
    assert!(!field.recompute());

    field.set_mouse_location(Pixel(0, 100));
    assert_eq!(field.cursor(), Complex::new(-0.5, -0.25));
    assert_eq!(field.state(), RenderState::Clean);

    let status = field.describe_status();
    let lines: Vec<&str> = status.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Mandelbrot Set",
            "Center: (0.5, 0.25)",
            "Cursor: (-0.5, -0.25)",
            "Left-click to Zoom in",
            "Right-click to Zoom out",
        ]
    );
}

#[test]
fn grid_buffer_is_row_major() {
    let mut field = PlaneField::new(6, 3).unwrap();
    field.recompute();
    let raw: &[u8] = field.draw();
    assert_eq!(raw.len(), 6 * 3 * 3);
    for row in 0..3 {
        for col in 0..6 {
            let offset = (row * 6 + col) * 3;
            let Rgb(rgb) = field.color_at(Pixel(col as i32, row as i32)).unwrap();
            assert_eq!(&raw[offset..offset + 3], &rgb[..]);
        }
    }
}
