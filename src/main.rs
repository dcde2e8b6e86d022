use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use flapcut::io::DEFAULT_PRECISION;
use flapcut::profile::{build_shape, ShapeParameters, PROFILES};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Parametric die-cut flap outlines", long_about = None)]
struct Cli {
    /// Log every fillet at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a shape and print its SVG path data
    Render {
        /// Shape parameters (YAML or JSON)
        #[arg(value_name = "PARAMS")]
        input: PathBuf,

        /// Leave out the trailing close command
        #[arg(long)]
        open: bool,

        /// Also print the labelled points as JSON
        #[arg(long)]
        points: bool,

        /// Decimals written per number
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,

        /// Write the path data to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the available profiles and their fields
    Profiles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render {
            input,
            open,
            points,
            precision,
            output,
        } => render(&input, open, points, precision, output.as_deref()),
        Command::Profiles => {
            for profile in PROFILES {
                println!(
                    "{:<12} {:<60} {}",
                    profile.id,
                    profile.fields.join(", "),
                    profile.summary
                );
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(
    input: &Path,
    open: bool,
    points: bool,
    precision: usize,
    output: Option<&Path>,
) -> Result<()> {
    let params = load_parameters(input)?;
    let shape = build_shape(&params)
        .with_context(|| format!("Failed to build {} shape", params.id()))?;
    let data = shape.to_svg(precision, !open);

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", data))
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!(path = %path.display(), "path data written");
        }
        None => println!("{}", data),
    }

    if points {
        let json = serde_json::to_string_pretty(&shape.points)
            .context("Failed to serialize points")?;
        println!("{}", json);
    }

    Ok(())
}

fn load_parameters(path: &Path) -> Result<ShapeParameters> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file: {:?}", path))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML parameters: {:?}", path)),
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON parameters: {:?}", path)),
        _ => bail!("Unsupported parameter file {:?}: expected .yaml, .yml or .json", path),
    }
}
