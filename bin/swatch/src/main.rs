//! Print the color model of a color and render a darken/lighten ramp and a
//! mix ramp to a PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::{Rgb as Pixel, RgbImage};
use tincture::{Color, Mode, Policy, DEFAULT_ADJUST_AMOUNT};
use tracing_subscriber::EnvFilter;

const CELL: u32 = 80;

/// Render swatches for a color.
#[derive(Parser, Debug)]
#[command(name = "tincture-swatch")]
struct Args {
    /// The color, as a hex, an `r,g,b` string or a CSS color name.
    color: String,

    /// Color to mix with in the second row.
    #[arg(short, long, default_value = "white")]
    mix_with: String,

    /// Number of swatches on each side of the base color.
    #[arg(short, long, default_value_t = 4)]
    steps: u32,

    /// Lightness change between two swatches, in percent.
    #[arg(short, long, default_value_t = DEFAULT_ADJUST_AMOUNT / 2.0)]
    amount: f64,

    /// What to do with invalid input: silent, log or raise.
    #[arg(short, long, default_value_t = Policy::Log)]
    policy: Policy,

    /// Where to write the image.
    #[arg(short, long, default_value = "swatch.png")]
    out: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let (base, other) = match (
        Color::with_policy(args.color.as_str(), args.policy),
        Color::with_policy(args.mix_with.as_str(), args.policy),
    ) {
        (Ok(base), Ok(other)) => (base, other),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for mode in [Mode::Hex, Mode::Rgb, Mode::Hsl] {
        println!("{}", base.to_css(mode));
    }
    println!("shade: {}", base.shade());

    let steps = args.steps as i32;
    let ramp = (-steps..=steps)
        .map(|i| base.lighten(i as f64 * args.amount))
        .collect::<Vec<_>>();

    let columns = ramp.len() as u32;
    let mixes = (0..columns)
        .map(|i| {
            let weight = 1.0 - i as f64 / (columns - 1).max(1) as f64;
            base.mix(&other, weight)
        })
        .collect::<Vec<_>>();

    let mut img = RgbImage::new(columns * CELL, 2 * CELL);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = if y < CELL { &ramp } else { &mixes };
        let rgb = row[(x / CELL) as usize].rgb();
        *pixel = Pixel([rgb.red as u8, rgb.green as u8, rgb.blue as u8]);
    }

    for (label, row) in [("ramp", &ramp), ("mix", &mixes)] {
        let hexes = row.iter().map(Color::hex).collect::<Vec<_>>();
        println!("{label}: {}", hexes.join(" "));
    }

    if let Err(err) = img.save(&args.out) {
        eprintln!("error: could not write {}: {err}", args.out.display());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
