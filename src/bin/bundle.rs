// Bundle pipeline entry point.
//
// Reads index.html from the current directory and writes bundled.html with
// local stylesheets and scripts inlined. Scripts in the exclusion set stay
// external references.

use anyhow::{Context, Result};
use htmlpack::{PackConfig, pipeline};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PackConfig::bundled();
    let summary = pipeline::run(&config).context("bundling failed")?;

    println!("Bundled HTML created: {}", summary.output.display());
    Ok(())
}
