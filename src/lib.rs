pub mod config;
pub mod error;
pub mod inline;
pub mod pipeline;

pub use config::{
    BUNDLED_OUTPUT_FILE, EXCLUDED_SCRIPTS, INPUT_FILE, OFFLINE_OUTPUT_FILE, PackConfig,
};
pub use error::PackError;
pub use inline::{AssetKind, InlineReport, SkipReason, SkippedAsset};
pub use pipeline::{PackSummary, run};
