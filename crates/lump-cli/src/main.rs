/// Lump storage command-line tool: inspect, validate and dump EEPROM
/// images written by the layout controller firmware.
///
/// # Command overview
///
/// ```text
/// lump <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print the lump tree of an image
///   validate   Check an image for structural correctness
///   dump       Render an image as JSON
///   tags       List every lump tag and item layout the decoder knows
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Raise log verbosity (repeatable, RUST_LOG wins)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid image, etc.)|
///
/// Diagnostics and log output go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use lump_decoder::DecoderConfig;
use lump_decoder::config::DEFAULT_MAX_DEPTH;

mod cmd_dump;
mod cmd_inspect;
mod cmd_tags;
mod cmd_validate;
mod fields;
mod logging;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Lump storage image tool.
#[derive(Parser)]
#[command(name = "lump", version, about = "EEPROM lump storage inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity: `-v` debug, `-vv` trace.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the lump tree of an image.
    Inspect(InspectArgs),
    /// Check an image for structural correctness.
    Validate(ValidateArgs),
    /// Render an image as JSON.
    Dump(DumpArgs),
    /// List the lump registry and the per-version item registry.
    Tags,
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Decoder options shared by every command that reads an image.
#[derive(clap::Args)]
pub struct DecodeOpts {
    /// Reject bytes after the root lump instead of reporting them.
    #[arg(long)]
    pub strict: bool,

    /// Deepest lump nesting accepted below the root.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl DecodeOpts {
    pub fn config(&self) -> DecoderConfig {
        DecoderConfig {
            max_depth: self.max_depth,
            strict_trailing: self.strict,
        }
    }
}

/// Arguments for `lump inspect`.
///
/// ```text
/// ┌─────────┬──────────────────────────────────────────────────────────┐
/// │ Flag    │ Effect                                                   │
/// ├─────────┼──────────────────────────────────────────────────────────┤
/// │ --items │ List every decoder item under its table                  │
/// │ --hex   │ Hex dump of the whole image, 16 bytes per line           │
/// └─────────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the EEPROM image.
    pub file: PathBuf,

    /// List the items of every decoders table.
    #[arg(long)]
    pub items: bool,

    /// Append a hex dump of the raw image.
    #[arg(long)]
    pub hex: bool,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

/// Arguments for `lump validate`.
///
/// Runs a full decode and prints ✓ lines on success or a single ✗ line
/// naming the failure. Exits 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the EEPROM image.
    pub file: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

/// Arguments for `lump dump`.
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the EEPROM image.
    pub file: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Dump(args) => cmd_dump::run(&args),
        Commands::Tags => cmd_tags::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
