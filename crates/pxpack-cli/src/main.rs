//! pxpack - inspect and convert packed pixel values
//!
//! Packs components into any catalog format, decodes packed values, and
//! converts between formats through the canonical scaled vector.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pxpack")]
#[command(author, version, about = "Inspect and convert packed pixel values")]
#[command(long_about = "
Packs, unpacks and converts single pixel values between packed formats.
Every conversion goes through the canonical [0, 1] scaled vector.

Examples:
  pxpack formats                         # List known formats
  pxpack pack half-vector2 1 -1          # -> 0xbc003c00
  pxpack pack rgba32 1 0.5 0 --scaled    # Components in [0, 1]
  pxpack unpack half-vector2 0xbc003c00  # -> (1, -1, 0, 1)
  pxpack convert half-vector2 rgba32 0xbc003c00
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List pixel formats
    #[command(visible_alias = "f")]
    Formats(FormatsArgs),

    /// Pack components into a format
    #[command(visible_alias = "p")]
    Pack(PackArgs),

    /// Decode a packed value
    #[command(visible_alias = "u")]
    Unpack(UnpackArgs),

    /// Convert a packed value to another format
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct FormatsArgs {
    /// Only list half-float formats
    #[arg(long)]
    half: bool,
}

#[derive(Args)]
struct PackArgs {
    /// Target format (e.g. half-vector2, rgba32)
    format: String,

    /// X [Y [Z [W]]] components; missing ones default to 0, 0, 0, 1
    #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
    components: Vec<f32>,

    /// Components are in [0, 1] rather than the format's native range
    #[arg(short, long)]
    scaled: bool,
}

#[derive(Args)]
struct UnpackArgs {
    /// Source format
    format: String,

    /// Packed value, hex (0x...) or decimal
    packed: String,

    /// Print the scaled [0, 1] vector instead of the native one
    #[arg(short, long)]
    scaled: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source format
    from: String,

    /// Target format
    to: String,

    /// Packed value in the source format, hex (0x...) or decimal
    packed: String,
}

/// Initializes logging. `RUST_LOG` wins; otherwise `-v` raises the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Formats(args) => commands::formats::run(args),
        Commands::Pack(args) => commands::pack::run(args, cli.verbose),
        Commands::Unpack(args) => commands::unpack::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
    }
}
