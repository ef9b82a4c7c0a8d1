//! Render a nine-patch PNG at a given size.
//!
//! Usage:
//!   ninepatch-render <input> <output> <width> <height> [--config FILE]
//!
//! Set `RUST_LOG=debug` to see the scanned runs and patch counts.

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    ninepatch::cli::run_from_env()
}
