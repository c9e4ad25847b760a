//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Generate the default batch of curve files into `out/`.
    Curves {
        /// Last order to generate.
        #[arg(long, default_value_t = 10)]
        to: u32,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// Output directory for generated curve files.
    out: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            out: root.join("out"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Curves { to } => curves(&paths, to),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Build orders `1..=to` in release mode and write them under `out/`.
fn curves(paths: &RepoPaths, to: u32) -> Result<()> {
    let sh = repo_shell(paths)?;
    let out = &paths.out;
    let to = to.to_string();
    cmd!(
        sh,
        "cargo run --release -p phcurve -- batch --to {to} --out-dir {out} --progress"
    )
    .run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}
