// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::process;

use clap::{crate_version, App, AppSettings, Arg, ArgMatches};
use failure::{bail, format_err, ResultExt};
use image::{Rgb, RgbImage};
use log::info;
use seamcarve::{
    calculate_energy, energy_to_image, paint_seam, CenterSeams, GradientSeams, SeamCarver,
    SeamFinder, Strategy,
};

const MARKER: Rgb<u8> = Rgb([255, 0, 0]);

fn dimension(matches: &ArgMatches, name: &str) -> Result<u32, failure::Error> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| format_err!("missing {}", name))?;
    raw.parse::<u32>()
        .map_err(|_| format_err!("invalid {} {:?}: must be a positive integer", name, raw))
}

fn paint_seams(image: &RgbImage, finder: &dyn SeamFinder) -> RgbImage {
    let painted = paint_seam(image, &finder.find_vertical_seam(), MARKER);
    paint_seam(&painted, &finder.find_horizontal_seam(), MARKER)
}

fn run() -> Result<(), failure::Error> {
    let matches = App::new("seamcarve")
        .version(crate_version!())
        .about("Content-aware image shrinking by seam carving")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("input")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("Width of the result, in pixels")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("Height of the result, in pixels")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(4),
        )
        .arg(
            Arg::with_name("trivial")
                .long("trivial")
                .help("Remove the middle row or column instead of the cheapest seam"),
        )
        .arg(
            Arg::with_name("dump-energy")
                .long("dump-energy")
                .value_name("FILE")
                .takes_value(true)
                .help("Also write the input's energy map as a grayscale image"),
        )
        .arg(
            Arg::with_name("paint-seams")
                .long("paint-seams")
                .value_name("FILE")
                .takes_value(true)
                .help("Also write the input with its first vertical and horizontal seams in red"),
        )
        .get_matches();

    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("missing input"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("missing output"))?;
    let width = dimension(&matches, "width")?;
    let height = dimension(&matches, "height")?;
    let strategy = if matches.is_present("trivial") {
        Strategy::Center
    } else {
        Strategy::Gradient
    };

    let image = image::open(input).context(format!("could not load input image {}", input))?;
    if image.color().channel_count() != 3 {
        bail!("image does not have 3 channels: {:?}", image.color());
    }
    let image = image.to_rgb8();
    println!(
        "Input image dimensions: {} x {}",
        image.height(),
        image.width()
    );

    if let Some(path) = matches.value_of("dump-energy") {
        energy_to_image(&calculate_energy(&image))
            .save(path)
            .context(format!("could not write energy map {}", path))?;
        info!("energy map written to {}", path);
    }

    if let Some(path) = matches.value_of("paint-seams") {
        let painted = match strategy {
            Strategy::Gradient => paint_seams(&image, &GradientSeams::new(&image)),
            Strategy::Center => paint_seams(&image, &CenterSeams::new(&image)),
        };
        painted
            .save(path)
            .context(format!("could not write seam image {}", path))?;
        info!("seams painted to {}", path);
    }

    let carved = SeamCarver::new(&image)
        .with_strategy(strategy)
        .carve(width, height)?;
    carved
        .save(output)
        .context(format!("could not write output image {}", output))?;

    println!(
        "Output image dimensions: {} x {}",
        carved.height(),
        carved.width()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
