#![deny(unsafe_code)]
//! CLI binary for tint.
//!
//! Subcommands:
//! - `inspect <hex>`: decode a hex color and print every representation
//! - `format <r> <g> <b>`: clamp integer channels and print them as hex
//! - `convert <value> --to <type>`: clamping or exact numeric conversion
//! - `random`: reproducible random colors

mod error;
mod numeric;

use clap::{Parser, Subcommand};
use error::CliError;
use numeric::{convert_scalar, Scalar};
use serde::Serialize;
use std::process;
use tint_core::color::{grayscale_from_rgba, hsba_from_rgba, normalized_from_byte};
use tint_core::hex::{decode_hex, short_hex_string};
use tint_core::ops::random_color;
use tint_core::{Grayscale, HexFormat, Hsba, Rgba, Rgba255, Xorshift64};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tint", about = "Color and numeric conversion toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a hex color and print all of its representations.
    Inspect {
        /// Hex color: 3, 4, 6 or 8 digits, optionally prefixed by '#' or '0x'.
        hex: String,

        /// Alpha for 3 and 6 digit colors.
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,
    },
    /// Build a color from integer channels (clamped to 0..=255) and print it.
    Format {
        #[arg(allow_negative_numbers = true)]
        red: i64,
        #[arg(allow_negative_numbers = true)]
        green: i64,
        #[arg(allow_negative_numbers = true)]
        blue: i64,

        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,

        /// Output options as JSON, e.g. '{"allows_short": true, "prefix": "zerox"}'.
        #[arg(short, long, default_value = "{}")]
        format: String,
    },
    /// Convert a number to another numeric type.
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Target type (i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64).
        #[arg(short, long)]
        to: String,

        /// Fail instead of clamping or rounding.
        #[arg(long)]
        exact: bool,
    },
    /// Print reproducible random colors.
    Random {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Output options as JSON.
        #[arg(short, long, default_value = "{}")]
        format: String,
    },
}

/// Every representation of one decoded color.
#[derive(Serialize)]
struct Inspection {
    hex: String,
    hex_value: u32,
    short_hex: Option<String>,
    rgba255: Rgba255,
    rgba: Rgba,
    hsba: Hsba,
    grayscale: Grayscale,
}

impl Inspection {
    fn new(color: Rgba255) -> Self {
        let rgba = normalized_from_byte(color);
        Self {
            hex: tint_core::hex_string(&color, true, false),
            hex_value: tint_core::hex_value(&color, true),
            short_hex: short_hex_string(&color, true),
            rgba255: color,
            rgba,
            hsba: hsba_from_rgba(rgba),
            grayscale: grayscale_from_rgba(rgba),
        }
    }
}

fn parse_format(json: &str) -> Result<HexFormat, CliError> {
    let params: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CliError::Input(format!("invalid --format JSON: {e}")))?;
    Ok(HexFormat::from_json(&params))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Inspect { hex, alpha } => {
            let color = decode_hex(&hex, alpha)?;
            let report = Inspection::new(color);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let (rgba, hsba) = (report.rgba, report.hsba);
                println!("hex        {}", report.hex);
                println!("short      {}", report.short_hex.as_deref().unwrap_or("-"));
                println!(
                    "rgba255    {} {} {} {:.4}",
                    color.red(),
                    color.green(),
                    color.blue(),
                    color.alpha()
                );
                println!(
                    "rgba       {:.4} {:.4} {:.4} {:.4}",
                    rgba.red(),
                    rgba.green(),
                    rgba.blue(),
                    rgba.alpha()
                );
                println!(
                    "hsba       {:.4} {:.4} {:.4} {:.4}",
                    hsba.hue(),
                    hsba.saturation(),
                    hsba.brightness(),
                    hsba.alpha()
                );
                println!(
                    "grayscale  {:.4} {:.4}",
                    report.grayscale.white(),
                    report.grayscale.alpha()
                );
            }
        }
        Command::Format {
            red,
            green,
            blue,
            alpha,
            format,
        } => {
            let format = parse_format(&format)?;
            let color = Rgba255::clamped(red, green, blue, alpha);
            let text = format.format(&color);
            if cli.json {
                let info = serde_json::json!({ "color": text, "format": format });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{text}");
            }
        }
        Command::Convert { value, to, exact } => {
            let scalar = Scalar::parse(&value)
                .ok_or_else(|| CliError::Input(format!("not a number: '{value}'")))?;
            let converted = convert_scalar(scalar, &to, exact)?;
            if cli.json {
                let info = serde_json::json!({
                    "input": value,
                    "type": to,
                    "exact": exact,
                    "value": converted.json,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", converted.text);
            }
        }
        Command::Random {
            seed,
            count,
            format,
        } => {
            let format = parse_format(&format)?;
            let mut rng = Xorshift64::new(seed);
            let colors: Vec<String> = (0..count)
                .map(|_| format.format(&random_color(&mut rng)))
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                colors.iter().for_each(|c| println!("{c}"));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
