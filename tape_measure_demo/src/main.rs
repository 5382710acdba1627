// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale demos for `tape_measure`: a thermometer and a row of amplifier dials,
//! written to a single SVG file.

mod dial;
mod svg;
mod thermometer;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kurbo::Point;

#[derive(Parser)]
#[command(version, about = "Render tape measure scales to SVG", long_about = None)]
struct Args {
    /// Output SVG path.
    #[arg(short, long, default_value = "tape_measure_demo.svg")]
    output: PathBuf,
    /// Temperature shown on the thermometer, in ºF.
    #[arg(long, default_value_t = 98.6, allow_hyphen_values = true)]
    temperature: f64,
    /// Scroll the thermometer scale by this many points.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    scroll: f64,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(log::LevelFilter::Off);
    log_config.set_thread_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut scene = svg::SvgScene::default();

    thermometer::Thermometer::new(args.temperature)
        .context("thermometer scale")?
        .draw(&mut scene, Point::new(420.0, 80.0), args.scroll);
    dial::AmpPanel::new()
        .context("amplifier dial scale")?
        .draw(&mut scene, Point::new(420.0, 300.0));

    std::fs::write(&args.output, scene.to_svg_string())
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("wrote {}", args.output.display());

    Ok(())
}
