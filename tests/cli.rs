// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

#[test]
fn status_only() {
    mandel()
        .args(&["--size", "8x4", "--no-image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mandelbrot Set\nCenter: (0, 0)\nCursor: (0, 0)\n"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn clicks_and_cursor_reach_the_status() {
    mandel()
        .args(&["-s", "8x4", "-n", "--zoom-in", "4,2", "--cursor", "6,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Center: (0, 0)"))
        .stdout(predicate::str::contains("Cursor: (0.5, 0.25)"));
}

#[test]
fn image_is_painted_in_half_blocks() {
    mandel()
        .args(&["--size", "4x4", "--threads", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[38;2;0;0;255m"))
        .stdout(predicate::str::contains("\u{2580}"))
        .stdout(predicate::str::contains("Right-click to Zoom out"));
}

#[test]
fn malformed_size_is_rejected() {
    mandel()
        .args(&["--size", "eight-by-four"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse grid size"));
}

#[test]
fn oversize_grid_is_rejected() {
    mandel()
        .args(&["--size", "70000x70000", "-n"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse grid size"));
}

#[test]
fn marked_point_is_painted_white() {
    mandel()
        .args(&["--size", "4x4", "--mark=-2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[38;2;255;255;255m"));
    mandel()
        .args(&["--size", "4x4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[38;2;255;255;255m").not());
}

#[test]
fn verbose_logs_the_recompute() {
    mandel()
        .args(&["--size", "4x4", "-n", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("recompute started"))
        .stderr(predicate::str::contains("recompute finished"));
}

#[test]
fn quiet_by_default() {
    mandel()
        .args(&["--size", "4x4", "-n"])
        .assert()
        .success()
        .stderr(predicate::str::contains("recompute").not());
}

#[test]
fn empty_grid_is_rejected() {
    mandel()
        .args(&["--size", "0x4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The pixel grid must be non-empty, got 0x4"));
}
