use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use labrat_core::{Control, Editor, Lab, Polar, Rgb};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use report::{FieldsReport, Report};

#[derive(Parser)]
#[command(name = "labrat")]
#[command(version, about = "Convert colors between hex, L*a*b* and hue/saturation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print unrounded values as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a hex color (#rrggbb)
    Hex {
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Convert L*a*b* to RGB
    Lab {
        #[arg(value_name = "L", allow_negative_numbers = true)]
        l: f64,
        #[arg(value_name = "A", allow_negative_numbers = true)]
        a: f64,
        #[arg(value_name = "B", allow_negative_numbers = true)]
        b: f64,
    },
    /// Convert lightness plus hue/saturation to RGB
    Polar {
        #[arg(value_name = "L", allow_negative_numbers = true)]
        l: f64,
        /// Hue in degrees
        #[arg(value_name = "HUE", allow_negative_numbers = true)]
        hue: f64,
        #[arg(value_name = "SAT", allow_negative_numbers = true)]
        saturation: f64,
    },
    /// Replay picker edits and print the resulting fields
    Fields {
        /// Start by typing this into the RGB field
        #[arg(long, value_name = "HEX")]
        hex: Option<String>,

        /// Then type into a numeric field, in order (e.g. --set hue=90)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Hex { hex } => {
            let rgb: Rgb = hex
                .parse()
                .with_context(|| format!("invalid hex color {hex:?}"))?;
            emit(&Report::from_rgb(rgb), cli.json)
        }
        Commands::Lab { l, a, b } => emit(&Report::from_lab(Lab::new(l, a, b)), cli.json),
        Commands::Polar { l, hue, saturation } => {
            let lab = Lab::from_polar(l, Polar::new(hue, saturation));
            debug!(a = lab.a, b = lab.b, "polar input resolved");
            emit(&Report::from_lab(lab), cli.json)
        }
        Commands::Fields { hex, edits } => {
            let mut editor = Editor::new();
            if let Some(hex) = hex {
                let changed = editor
                    .edit_hex(&hex)
                    .with_context(|| format!("invalid hex color {hex:?}"))?;
                info!(?changed, "applied hex");
            }
            for edit in &edits {
                let (control, text) = parse_edit(edit)?;
                let changed = editor.edit_entry(control, text);
                info!(%edit, ?changed, "applied edit");
            }
            emit(&FieldsReport::from_editor(&editor), cli.json)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "labrat=debug,labrat_core=debug",
        _ => "labrat=trace,labrat_core=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn emit<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Split `field=value`, where field is one of l, a, b, hue, sat
fn parse_edit(edit: &str) -> Result<(Control, &str)> {
    let Some((name, value)) = edit.split_once('=') else {
        bail!("expected FIELD=VALUE, got {edit:?}");
    };
    let control = match name.trim().to_ascii_lowercase().as_str() {
        "l" | "l*" => Control::L,
        "a" | "a*" => Control::A,
        "b" | "b*" => Control::B,
        "hue" | "h" => Control::Hue,
        "sat" | "s" | "saturation" => Control::Saturation,
        other => bail!("unknown field {other:?} (expected l, a, b, hue or sat)"),
    };
    Ok((control, value))
}
