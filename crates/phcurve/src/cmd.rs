//! Command handlers for the `phcurve` CLI.
//!
//! These functions build curves through `pseudohilbert` and hand the finished
//! point sequences to the encoders. No curve logic lives here.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result, bail};
use pbr::ProgressBar;
use pseudohilbert::{
    Encoding, build,
    encode::{read_binary, write_points, write_text},
};
use tracing::{debug, info};

/// Parameters controlling a batch run.
pub struct BatchOptions<'a> {
    /// First order to generate (inclusive).
    pub first: u32,
    /// Last order to generate (inclusive).
    pub last: u32,
    /// Encoding for every file.
    pub encoding: Encoding,
    /// Directory receiving one file per order.
    pub out_dir: &'a Path,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

/// Map a file into memory for read‑only access.
///
/// Safety rationale: the mapping is read‑only and the `File` is not mutated
/// for the lifetime of the returned map.
fn mmap_readonly(file: &File) -> Result<memmap2::Mmap> {
    // SAFETY: We create a read‑only mapping and only access it immutably.
    let map = unsafe { memmap2::MmapOptions::new().map(file)? };
    Ok(map)
}

/// Convert a CLI order into the builder's signed order type.
fn signed_order(order: u32) -> Result<i32> {
    i32::try_from(order).with_context(|| format!("order {order} is out of range"))
}

/// Build one order and write it into `dir`, returning the file path.
///
/// The curve is built before the file is created, so a failed build leaves
/// nothing behind.
fn write_order(order: u32, encoding: Encoding, dir: &Path) -> Result<PathBuf> {
    let started = Instant::now();
    let curve = build(signed_order(order)?)
        .with_context(|| format!("failed to build order {order} curve"))?;
    debug!(order, points = curve.len(), elapsed = ?started.elapsed(), "curve built");

    let path = dir.join(encoding.file_name(order));
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_points(&curve, encoding, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        order,
        points = curve.len(),
        path = %path.display(),
        elapsed = ?started.elapsed(),
        "curve written"
    );
    Ok(path)
}

/// Generate every order in `first..=last`, one file each.
///
/// Stops at the first failure; files for earlier orders are kept. Returns the
/// number of files written.
pub fn batch(options: BatchOptions<'_>) -> Result<usize> {
    let BatchOptions {
        first,
        last,
        encoding,
        out_dir,
        progress,
    } = options;

    if first > last {
        bail!("first order ({first}) must not exceed last order ({last})");
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut pb = progress.then(|| {
        let mut pb = ProgressBar::on(io::stderr(), u64::from(last - first + 1));
        pb.format("╢▌▌░╟");
        pb
    });

    let mut written = 0;
    for order in first..=last {
        if let Some(pb) = pb.as_mut() {
            pb.message(&format!("order {order} "));
        }
        write_order(order, encoding, out_dir)?;
        written += 1;
        println!("order {order} pseudo-hilbert curve written");
        if let Some(pb) = pb.as_mut() {
            pb.inc();
        }
    }

    if let Some(pb) = pb.as_mut() {
        pb.finish();
    }
    Ok(written)
}

/// Build a single order and write it to `output`, or to stdout when `None`.
pub fn write(order: i32, encoding: Encoding, output: Option<&Path>) -> Result<()> {
    let curve = build(order).with_context(|| format!("failed to build order {order} curve"))?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_points(&curve, encoding, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(order, path = %path.display(), "curve written");
        }
        None => {
            let stdout = io::stdout();
            write_points(&curve, encoding, BufWriter::new(stdout.lock()))
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Print a binary curve file of the given order in the text encoding.
pub fn decode(input: &Path, order: u32) -> Result<()> {
    let file = File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let mmap = mmap_readonly(&file)?;

    let points = read_binary(&mmap, order)
        .with_context(|| format!("failed to decode {} as order {order}", input.display()))?;
    debug!(order, points = points.len(), "decoded curve file");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_text(&points, &mut out).context("failed to write to stdout")?;
    out.flush()?;
    Ok(())
}
