// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
#[macro_use]
extern crate failure;
extern crate mandelplane;
extern crate num;
extern crate num_cpus;
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use mandelplane::{FieldConfig, Pixel, PlaneField};
use num::Complex;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;
use tracing::Level;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_pixel(s: &str) -> Option<Pixel> {
    parse_pair(s, ',').map(|(x, y)| Pixel(x, y))
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const ZOOM_IN: &str = "zoom-in";
const ZOOM_OUT: &str = "zoom-out";
const CURSOR: &str = "cursor";
const MARK: &str = "mark";
const NO_IMAGE: &str = "no-image";
const VERBOSE: &str = "verbose";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Explore the Mandelbrot plane in a truecolor terminal")
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("80x48")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse grid size"))
                .help("Size of the pixel grid, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("64")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Iterations before a point counts as inside the set"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ZOOM_IN)
                .long(ZOOM_IN)
                .short("z")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| validate_pair::<i32>(&s, ',', "Could not parse click position"))
                .help("Left-click at X,Y: zoom in and recenter there (repeatable)"),
        )
        .arg(
            Arg::with_name(ZOOM_OUT)
                .long(ZOOM_OUT)
                .short("u")
                .takes_value(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        64,
                        "Could not parse zoom-out count",
                        "Zoom-out count must be between 0 and 64",
                    )
                })
                .help("Right-clicks to apply after the left-clicks"),
        )
        .arg(
            Arg::with_name(CURSOR)
                .long(CURSOR)
                .short("c")
                .takes_value(true)
                .validator(|s| validate_pair::<i32>(&s, ',', "Could not parse cursor position"))
                .help("Final pointer position, X,Y"),
        )
        .arg(
            Arg::with_name(MARK)
                .long(MARK)
                .short("m")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse plane point"))
                .help("Paint the pixel containing the plane point RE,IM white"),
        )
        .arg(
            Arg::with_name(NO_IMAGE)
                .long(NO_IMAGE)
                .short("n")
                .help("Print only the status text"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .multiple(true)
                .help("Log to stderr; repeat for more detail"),
        )
        .get_matches()
}

const MARKED: [u8; 3] = [255, 255, 255];

// Two pixel rows per line of text: the upper half block takes the
// foreground color, the cell background shows the row below.
fn paint<W: Write>(out: &mut W, field: &PlaneField, mark: Option<Pixel>) -> io::Result<()> {
    let (width, height) = field.dimensions();
    let color = |x: u32, y: u32| {
        let pixel = Pixel(x as i32, y as i32);
        if mark == Some(pixel) {
            return MARKED;
        }
        field.color_at(pixel).map_or([0, 0, 0], |rgb| rgb.0)
    };
    for top in (0..height).step_by(2) {
        for x in 0..width {
            let upper = color(x, top);
            let lower = color(x, top + 1);
            write!(
                out,
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                upper[0], upper[1], upper[2], lower[0], lower[1], lower[2]
            )?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .ok_or_else(|| format_err!("Error parsing grid size"))?;

    let mut config = FieldConfig::default();
    if let Some(iterations) = matches.value_of(ITERATIONS) {
        config = config.with_iterations(usize::from_str(iterations)?);
    }
    if let Some(threads) = matches.value_of(THREADS) {
        config = config.with_threads(usize::from_str(threads)?);
    }

    let mut field = PlaneField::with_config(u32::from(width), u32::from(height), config)?;

    if let Some(clicks) = matches.values_of(ZOOM_IN) {
        for click in clicks {
            let pixel = parse_pixel(click)
                .ok_or_else(|| format_err!("Error parsing click position {}", click))?;
            field.zoom_in();
            field.set_center(pixel);
        }
    }
    let zoom_outs = usize::from_str(matches.value_of(ZOOM_OUT).unwrap_or("0"))?;
    for _ in 0..zoom_outs {
        field.zoom_out();
    }
    if let Some(cursor) = matches.value_of(CURSOR) {
        let pixel = parse_pixel(cursor)
            .ok_or_else(|| format_err!("Error parsing cursor position {}", cursor))?;
        field.set_mouse_location(pixel);
    }

    let mark = match matches.value_of(MARK) {
        Some(point) => {
            let (re, im) = parse_pair::<f64>(point, ',')
                .ok_or_else(|| format_err!("Error parsing plane point {}", point))?;
            Some(field.map_point_to_pixel(Complex::new(re, im)))
        }
        None => None,
    };

    field.recompute();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !matches.is_present(NO_IMAGE) {
        paint(&mut out, &field, mark)?;
    }
    writeln!(out, "{}", field.describe_status())?;
    out.flush()?;
    Ok(())
}

fn main() {
    let matches = args();

    let level = match matches.occurrences_of(VERBOSE) {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("mandel: {}", e);
        std::process::exit(1);
    }
}
