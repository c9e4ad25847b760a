//! Command‑line entry point for the `phcurve` tool.
//!
//! Provides subcommands to generate a batch of curve files, write a single
//! order, and decode a binary curve file back to text.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pseudohilbert::Encoding;
use tracing::Level;

/// CLI command implementations.
mod cmd;

/// First order generated by `batch` unless `--from` is given.
const DEFAULT_FIRST_ORDER: u32 = 1;
/// Last order generated by `batch` unless `--to` is given.
const DEFAULT_LAST_ORDER: u32 = 15;

/// Output encoding selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EncodingArg {
    /// Native-endian `f64` pairs with no header.
    Binary,
    /// One `(x,y)` line per point.
    Text,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Binary => Self::Binary,
            EncodingArg::Text => Self::Text,
        }
    }
}

#[derive(Parser)]
#[command(name = "phcurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(
        short,
        global = true,
        action = clap::ArgAction::Count,
        help = "Sets the level of verbosity"
    )]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `phcurve` tool.
enum Commands {
    #[command(about = "Generate one file per order for a range of orders")]
    /// Build and write every order in `FROM..=TO`, stopping at the first failure.
    Batch {
        #[arg(
            long = "from",
            value_name = "ORDER",
            default_value_t = DEFAULT_FIRST_ORDER,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "First order to generate"
        )]
        /// First order (inclusive).
        from: u32,

        #[arg(
            long = "to",
            value_name = "ORDER",
            default_value_t = DEFAULT_LAST_ORDER,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Last order to generate"
        )]
        /// Last order (inclusive).
        to: u32,

        #[arg(
            short = 'e',
            long = "encoding",
            value_enum,
            default_value = "binary",
            help = "Output encoding"
        )]
        /// Encoding for every written file.
        encoding: EncodingArg,

        #[arg(
            short = 'o',
            long = "out-dir",
            value_name = "DIR",
            default_value = ".",
            help = "Directory to write curve files into"
        )]
        /// Destination directory (created when missing).
        out_dir: PathBuf,

        #[arg(
            long = "progress",
            default_value_t = false,
            help = "Show a progress bar on stderr"
        )]
        /// Draw a progress bar over the orders.
        progress: bool,
    },

    #[command(about = "Generate a single order")]
    /// Build one order and write it to a file or stdout.
    Write {
        #[arg(allow_negative_numbers = true, help = "Curve order (>= 1)")]
        /// Requested order; validated by the curve builder.
        order: i32,

        #[arg(
            short = 'e',
            long = "encoding",
            value_enum,
            default_value = "binary",
            help = "Output encoding"
        )]
        /// Encoding for the output.
        encoding: EncodingArg,

        #[arg(help = "Optional output file path; writes to stdout when omitted")]
        /// Optional output file (stdout when not provided).
        output: Option<PathBuf>,
    },

    #[command(about = "Print a binary curve file as text")]
    /// Decode a binary curve file of a known order and print it as text.
    Decode {
        #[arg(
            short = 'n',
            long = "order",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Order the file was written with"
        )]
        /// Order of the curve stored in the file.
        order: u32,

        #[arg(help = "Binary curve file")]
        /// Input file.
        input: PathBuf,
    },
}

/// Print an optional success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: Option<&str>) {
    match result {
        Ok(()) => {
            if let Some(msg) = ok_msg {
                println!("{msg}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Install a stderr log subscriber whose level follows the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Handle the `batch` subcommand.
fn handle_batch(
    from: u32,
    to: u32,
    encoding: EncodingArg,
    out_dir: &Path,
    progress: bool,
) -> Result<()> {
    let written = cmd::batch(cmd::BatchOptions {
        first: from,
        last: to,
        encoding: encoding.into(),
        out_dir,
        progress,
    })?;
    tracing::info!(files = written, dir = %out_dir.display(), "batch complete");
    Ok(())
}

/// Handle the `write` subcommand.
fn handle_write(order: i32, encoding: EncodingArg, output: Option<&Path>) -> Result<()> {
    cmd::write(order, encoding.into(), output)
}

/// Handle the `decode` subcommand.
fn handle_decode(order: u32, input: &Path) -> Result<()> {
    cmd::decode(input, order)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Batch {
            from,
            to,
            encoding,
            out_dir,
            progress,
        } => report_ok(handle_batch(from, to, encoding, &out_dir, progress), None),
        Commands::Write {
            order,
            encoding,
            output,
        } => {
            let msg = output
                .as_deref()
                .map(|path| format!("order {order} pseudo-hilbert curve written to {}", path.display()));
            report_ok(
                handle_write(order, encoding, output.as_deref()),
                msg.as_deref(),
            );
        }
        Commands::Decode { order, input } => report_ok(handle_decode(order, &input), None),
    }
}
