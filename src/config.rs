//! Run configuration for the packaging pipelines
//!
//! The two shipping pipelines are fixed configurations over constant paths;
//! library callers and tests override paths through the `with_*` methods.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Input document, resolved against the current working directory.
pub const INPUT_FILE: &str = "index.html";

/// Output path of the bundle pipeline.
pub const BUNDLED_OUTPUT_FILE: &str = "bundled.html";

/// Output path of the offline pipeline.
pub const OFFLINE_OUTPUT_FILE: &str = "Offline_Download_Version.html";

/// Script base names the bundle pipeline must leave externally referenced.
///
/// `metadatafinderdontremovethisisimportant.js` is re-fetched by file name at
/// runtime and stops working when its tag is inlined; `fflate.js` is a
/// third-party library that must stay a separate external reference.
pub const EXCLUDED_SCRIPTS: &[&str] = &[
    "metadatafinderdontremovethisisimportant.js",
    "fflate.js",
];

/// Configuration for one packaging run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// HTML document to transform. Asset references are resolved against
    /// this file's parent directory.
    pub input: PathBuf,
    /// Output path, overwritten if it already exists.
    pub output: PathBuf,
    /// Script base names that stay external regardless of existence.
    pub excluded_scripts: HashSet<String>,
    /// Rewrite local image sources to base64 data URIs.
    pub inline_images: bool,
}

impl PackConfig {
    /// Fixed configuration of the bundle pipeline: CSS and JS inlined, the
    /// excluded scripts kept external, images untouched.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(BUNDLED_OUTPUT_FILE),
            excluded_scripts: EXCLUDED_SCRIPTS.iter().map(|s| (*s).to_string()).collect(),
            inline_images: false,
        }
    }

    /// Fixed configuration of the offline pipeline: no exclusion set and
    /// images inlined, so the output is fully self-contained.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(OFFLINE_OUTPUT_FILE),
            excluded_scripts: HashSet::new(),
            inline_images: true,
        }
    }

    /// Override the input document path.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Directory asset references are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.input.parent().unwrap_or_else(|| Path::new(""))
    }
}
