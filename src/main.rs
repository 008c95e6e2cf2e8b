//! # periodic-names CLI
//!
//! Usage:
//!   periodic-names "Marie Curie" -o curie.png
//!   periodic-names "Marie Curie" -p instagram --svg
//!   periodic-names "Marie Curie" --json
//!   periodic-names "Marie Curie" --inline
//!
//! Options:
//!   -p, --platform x|instagram   share target (default x)
//!   -o, --output FILE            output path (default derived from the name)
//!   --svg                        write SVG instead of PNG
//!   --json                       print the match result and exit
//!   --inline                     print the on-screen tile layout and exit
//!   --config FILE                JSON config file
//!   --font FILE                  TTF/OTF for PNG labels (default: system sans-serif)
//!   --seed N                     fixed seed for placeholder choice

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use periodic_names::font::FontFace;
use periodic_names::layout::layout_inline;
use periodic_names::render::{self, ExportFormat, ExportOptions};
use periodic_names::{Config, Error, Platform, Tokenizer};

const USAGE: &str = "usage: periodic-names <NAME> [-p x|instagram] [-o FILE] [--svg] [--json] \
[--inline] [--config FILE] [--font FILE] [--seed N]";

#[derive(Debug, Default)]
struct Args {
    name: Option<String>,
    platform: Option<Platform>,
    output: Option<PathBuf>,
    svg: bool,
    json: bool,
    inline: bool,
    config: Option<PathBuf>,
    font: Option<PathBuf>,
    seed: Option<u64>,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value", flag))
        };
        match arg.as_str() {
            "-p" | "--platform" => {
                let v = value(arg.as_str())?;
                args.platform = Some(v.parse().map_err(|e: Error| e.to_string())?);
            }
            "-o" | "--output" => args.output = Some(PathBuf::from(value(arg.as_str())?)),
            "--config" => args.config = Some(PathBuf::from(value(arg.as_str())?)),
            "--font" => args.font = Some(PathBuf::from(value(arg.as_str())?)),
            "--seed" => {
                let v = value(arg.as_str())?;
                args.seed = Some(
                    v.parse()
                        .map_err(|_| format!("--seed expects an integer, got '{}'", v))?,
                );
            }
            "--svg" => args.svg = true,
            "--json" => args.json = true,
            "--inline" => args.inline = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option '{}'", flag));
            }
            _ => {
                if args.name.is_some() {
                    return Err(format!("unexpected argument '{}'", arg));
                }
                args.name = Some(arg.clone());
            }
        }
    }
    Ok(args)
}

fn main() {
    periodic_names::init_tracing();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return;
    }

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("✗ {}\n{}", msg, USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(name) = args.name.as_deref() else {
        return Err(USAGE.into());
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(platform) = args.platform {
        config.platform = platform;
    }
    if args.svg {
        config.format = ExportFormat::Svg;
    }
    if args.font.is_some() {
        config.font_path = args.font.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let catalog = config.catalog()?;
    let mut rng = config.random_source();
    let result = Tokenizer::new(&catalog).match_name(name, rng.as_mut());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    if args.inline {
        let inline = layout_inline(result.tokens());
        println!("{}", serde_json::to_string_pretty(&inline)?);
        return Ok(());
    }

    let font: Option<FontFace> = config.load_font()?;

    let mut options = ExportOptions::new(config.platform, &config.color_scheme);
    options.format = config.format;
    options.font = font.as_ref();
    options.branding = Some(config.branding());

    let bytes = render::export(&result, &options)?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(render::suggested_filename(&result, &options)));
    fs::write(&output, &bytes)?;

    eprintln!(
        "✓ {} ({}/{} real) → {} bytes written to {}",
        result.spelled(),
        result.real_elements_count(),
        result.real_elements_count() + result.placeholder_count(),
        bytes.len(),
        output.display()
    );
    Ok(())
}
