//! Pipeline orchestration
//!
//! One run is a straight line: read the input document, parse it once,
//! apply the replacement passes to the same tree, serialize once, write the
//! output. No pass revisits nodes touched by an earlier pass.

use kuchiki::traits::TendrilSink;
use std::fs;
use std::path::PathBuf;

use crate::config::PackConfig;
use crate::error::PackError;
use crate::inline::passes;
use crate::inline::types::InlineReport;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct PackSummary {
    /// Path the transformed document was written to
    pub output: PathBuf,
    /// What the passes inlined and what they left external
    pub report: InlineReport,
}

/// Run one packaging pipeline to completion.
///
/// The output path is overwritten if it already exists. Skipped references
/// are collected in the returned summary, not treated as failures.
pub fn run(config: &PackConfig) -> Result<PackSummary, PackError> {
    let html = fs::read_to_string(&config.input).map_err(|source| PackError::ReadInput {
        path: config.input.clone(),
        source,
    })?;

    let document = kuchiki::parse_html().one(html);
    let base_dir = config.base_dir();
    let mut report = InlineReport::default();

    passes::inline_stylesheets(&document, base_dir, &mut report)?;
    passes::inline_scripts(&document, base_dir, &config.excluded_scripts, &mut report)?;
    if config.inline_images {
        passes::inline_images(&document, base_dir, &mut report)?;
    }

    let mut output = Vec::new();
    document.serialize(&mut output).map_err(PackError::Serialize)?;

    fs::write(&config.output, &output).map_err(|source| PackError::WriteOutput {
        path: config.output.clone(),
        source,
    })?;

    log::info!(
        "wrote {}: {} assets inlined, {} left external",
        config.output.display(),
        report.inlined,
        report.skipped.len()
    );

    Ok(PackSummary {
        output: config.output.clone(),
        report,
    })
}
