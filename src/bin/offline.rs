// Offline pipeline entry point.
//
// Reads index.html from the current directory and writes
// Offline_Download_Version.html with every local stylesheet and script
// inlined and local images rewritten to base64 data URIs.

use anyhow::{Context, Result};
use htmlpack::{PackConfig, pipeline};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PackConfig::offline();
    let summary = pipeline::run(&config).context("offline packaging failed")?;

    println!("Offline HTML generated: {}", summary.output.display());
    Ok(())
}
