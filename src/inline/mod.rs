//! Asset inlining
//!
//! This module provides the replacement passes that rewrite a parsed HTML
//! document in place, substituting local stylesheet, script, and image
//! references with their file contents.

// Sub-modules
pub mod loaders;
pub mod passes;
pub mod paths;
pub mod types;

// Re-exports for public API
pub use passes::{inline_images, inline_scripts, inline_stylesheets};
pub use paths::{base_name, is_remote, local_asset_path};
pub use types::{AssetKind, InlineReport, SkipReason, SkippedAsset};
