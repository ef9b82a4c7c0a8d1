//! Command line front end for `ninepatch-render`.
//!
//! `input` is read as a nine-patch when it ends in `.9.png`; any other PNG
//! is converted by adding an empty marker border, which renders as one
//! stretch patch. Render settings come from `--config`, then from the
//! `NINEPATCH_CONFIG` environment variable, then from the defaults.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use crate::io::{ImageFormat, write_image};
use crate::{NinePatch, RenderConfig};

#[derive(Debug, Parser)]
#[command(
    name = "ninepatch-render",
    about = "Render a nine-patch PNG at a given size",
    version
)]
pub struct RenderArgs {
    /// Source image (`.9.png`, or a plain PNG to convert).
    pub input: PathBuf,

    /// Output PNG path.
    pub output: PathBuf,

    /// Target width in pixels.
    pub width: u32,

    /// Target height in pixels.
    pub height: u32,

    /// TOML render configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run_from_env() -> anyhow::Result<()> {
    run(RenderArgs::parse())
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let config = RenderConfig::resolve(args.config.as_deref())?;

    let Some(patch) = NinePatch::open(&args.input, true)
        .with_context(|| format!("failed to open {}", args.input.display()))?
    else {
        bail!("{} is not a nine-patch", args.input.display());
    };

    let corrupted = patch.corrupted_patches();
    if !corrupted.is_empty() {
        log::warn!(
            "{}: {} corrupted stretch patch(es)",
            args.input.display(),
            corrupted.len()
        );
    }
    let (min_w, min_h) = patch.min_size();
    if args.width < min_w || args.height < min_h {
        log::warn!(
            "target {}x{} is below the fixed size {}x{}; fixed patches will be clipped",
            args.width,
            args.height,
            min_w,
            min_h
        );
    }

    let out = patch.render(args.width, args.height, &config.render_options())?;
    write_image(&out, &args.output, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!(
        "rendered {} ({}x{}) to {} ({}x{})",
        args.input.display(),
        patch.width(),
        patch.height(),
        args.output.display(),
        out.width(),
        out.height()
    );
    Ok(())
}
