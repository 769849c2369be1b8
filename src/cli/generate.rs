//! Generate command implementation.
//!
//! Merges command line flags with the optional settings file, builds a
//! canvas, and runs the render pipeline.

use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{make_image, ColourOptions};
use crate::types::{Canvas, ColourMode, ColourWarning};

pub const DEFAULT_SIZE: u32 = 16;
pub const DEFAULT_SCALE: u32 = 20;
pub const DEFAULT_OUT: &str = "rorschach.ppm";
pub const DEFAULT_MIN_COLOR: i32 = 0;
pub const DEFAULT_MAX_COLOR: i32 = 255;

/// Settings forced by `--github`.
pub const GITHUB_SIZE: u32 = 5;
pub const GITHUB_MIN_COLOR: i32 = 50;
pub const GITHUB_MAX_COLOR: i32 = 255;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Length and width of the pattern in pixels [default: 16]
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Scale factor; each pixel becomes a SCALE x SCALE block [default: 20]
    #[arg(long, short = 'x', value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Colour mode [default: monochrome]
    #[arg(long, short, value_enum)]
    pub mode: Option<ColourMode>,

    /// Output file [default: rorschach.ppm]
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Upper colour boundary, cannot be higher than 255 [default: 255]
    #[arg(long, short = 'u', allow_negative_numbers = true)]
    pub max_color: Option<i32>,

    /// Lower colour boundary [default: 0]
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    pub min_color: Option<i32>,

    /// Recolour every foreground pixel (implies colour output)
    #[arg(long)]
    pub rainbow: bool,

    /// Derive coloured backgrounds from the foreground (implies colour output)
    #[arg(long)]
    pub colorbgs: bool,

    /// Make a GitHub-style identicon (ignores size and colour settings)
    #[arg(long)]
    pub github: bool,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Fully resolved generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub size: usize,
    pub scale: usize,
    pub mode: ColourMode,
    pub out: PathBuf,
    pub min_color: i32,
    pub max_color: i32,
    pub colour: ColourOptions,
    pub seed: Option<u64>,
}

impl GenerateOptions {
    /// Merge flags over settings over defaults, then apply the GitHub preset.
    pub fn resolve(args: &GenerateArgs, settings: &Settings) -> Self {
        let mut options = Self {
            size: args.size.or(settings.size).unwrap_or(DEFAULT_SIZE) as usize,
            scale: args.scale.or(settings.scale).unwrap_or(DEFAULT_SCALE) as usize,
            mode: args.mode.or(settings.mode).unwrap_or_default(),
            out: args
                .out
                .clone()
                .or_else(|| settings.out.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT)),
            min_color: args.min_color.or(settings.min_color).unwrap_or(DEFAULT_MIN_COLOR),
            max_color: args.max_color.or(settings.max_color).unwrap_or(DEFAULT_MAX_COLOR),
            colour: ColourOptions {
                rainbow: args.rainbow || settings.rainbow.unwrap_or(false),
                colored_backgrounds: args.colorbgs || settings.colorbgs.unwrap_or(false),
            },
            seed: args.seed.or(settings.seed),
        };

        if args.github {
            options.size = GITHUB_SIZE as usize;
            options.min_color = GITHUB_MIN_COLOR;
            options.max_color = GITHUB_MAX_COLOR;
            options.mode = ColourMode::Colour;
            options.colour.colored_backgrounds = true;
        }

        options
    }

    /// Build the canvas these options describe.
    pub fn canvas(&self) -> (Canvas, Vec<ColourWarning>) {
        Canvas::new(
            self.size,
            self.scale,
            self.min_color,
            self.max_color,
            self.mode,
            &self.out,
        )
    }

    /// Random generator for this run, seeded when a seed was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn run(args: GenerateArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let settings = Settings::discover(config, Path::new("."))?.unwrap_or_default();
    let options = GenerateOptions::resolve(&args, &settings);

    let (mut canvas, warnings) = options.canvas();
    for warning in &warnings {
        printer.warning("warning", &warning.to_string());
    }

    printer.status(
        "Generating",
        &format!(
            "{}x{} {} inkblot (scale {})",
            canvas.mirrored_width(),
            canvas.size(),
            canvas.mode(),
            canvas.scale()
        ),
    );
    if let Some(seed) = options.seed {
        printer.info("Seed", &seed.to_string());
    }

    let mut rng = options.rng();
    let format = make_image(&mut canvas, options.colour, &mut rng)?;

    let mut summary = format!(
        "{} {}x{} -> {}",
        format,
        canvas.width(),
        canvas.height(),
        printer.cyan(&display_path(canvas.output()))
    );
    if !warnings.is_empty() {
        summary.push_str(&format!(
            " ({})",
            plural(warnings.len(), "warning", "warnings")
        ));
    }
    printer.status("Finished", &summary);

    Ok(())
}
