// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use image::Rgb;
use log::info;
use seamcarve::{Algorithm, CarveConfig, CarveReport, Orientation, SeamCarver, SeamTrace};
use std::process;
use std::time::Duration;

type Point = (u32, u32);

fn number(matches: &ArgMatches, name: &str) -> Result<Option<u32>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format_err!("--{} expects a whole number, got '{}'", name, value)),
    }
}

fn rectangle(value: &str) -> Result<(Point, Point), Error> {
    let corners = value
        .split(',')
        .map(|n| n.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format_err!("--rect expects X0,Y0,X1,Y1, got '{}'", value))?;
    match corners.as_slice() {
        [x0, y0, x1, y1] if x0 < x1 && y0 < y1 => Ok(((*x0, *y0), (*x1, *y1))),
        _ => Err(format_err!(
            "--rect expects X0,Y0,X1,Y1 with X0 < X1 and Y0 < Y1, got '{}'",
            value
        )),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware resizing and object removal by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height"),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .short("a")
                .takes_value(true)
                .default_value("dp")
                .help("Seam finder: greedy, dp or graphcut"),
        )
        .arg(
            Arg::with_name("mask")
                .long("mask")
                .takes_value(true)
                .conflicts_with("rect")
                .help("Image whose non-black pixels mark the object to remove"),
        )
        .arg(
            Arg::with_name("rect")
                .long("rect")
                .takes_value(true)
                .help("Rectangle X0,Y0,X1,Y1 to remove"),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .help("Remove the object with horizontal seams"),
        )
        .arg(
            Arg::with_name("threshold")
                .long("threshold")
                .takes_value(true)
                .help("Marked runs this short count as removed"),
        )
        .arg(
            Arg::with_name("seams")
                .long("seams")
                .takes_value(true)
                .help("Also write the original image with every removed seam in red"),
        )
        .arg(
            Arg::with_name("delay")
                .long("delay")
                .takes_value(true)
                .help("Pause this many milliseconds after finding each seam"),
        )
        .get_matches();

    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("no output image"))?;

    let algorithm: Algorithm = matches.value_of("algorithm").unwrap_or("dp").parse()?;
    let mut config = CarveConfig::default()
        .with_algorithm(algorithm)
        .with_step_delay(number(&matches, "delay")?.map(|ms| Duration::from_millis(u64::from(ms))));
    if let Some(threshold) = number(&matches, "threshold")? {
        config = config.with_mask_threshold(threshold);
    }

    let original = image::open(input)?.to_rgb8();
    let mut carver = SeamCarver::with_config(original.clone(), config);
    let orientation = if matches.is_present("horizontal") {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let ignore = |_: Orientation, _: &[u32]| ();

    let report: CarveReport = if let Some(mask) = matches.value_of("mask") {
        let mask = image::open(mask)?.to_luma8();
        carver.set_mask_image(&mask, orientation)?;
        carver.remove_object(orientation, ignore)?
    } else if let Some(rect) = matches.value_of("rect") {
        let (start, end) = rectangle(rect)?;
        carver.set_mask_rect(start, end, orientation);
        carver.remove_object(orientation, ignore)?
    } else {
        match (number(&matches, "width")?, number(&matches, "height")?) {
            (Some(width), Some(height)) => carver.resize(width, height, ignore)?,
            (Some(width), None) => carver.carve_to(width, Orientation::Vertical, ignore)?,
            (None, Some(height)) => carver.carve_to(height, Orientation::Horizontal, ignore)?,
            (None, None) => {
                return Err(format_err!(
                    "nothing to do: give --width, --height, --mask or --rect"
                ))
            }
        }
    };

    if let Some(path) = matches.value_of("seams") {
        SeamTrace::render(&original, &report.seams, Rgb([255, 0, 0]))?.save(path)?;
    }
    carver.into_image().save(output)?;
    info!(
        "{} seams removed; wrote {}x{} image to {}",
        report.iterations, report.width, report.height, output
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
