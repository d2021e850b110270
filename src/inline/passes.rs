//! DOM replacement passes
//!
//! Each pass walks the parsed document once and rewrites matching nodes in
//! place. Stylesheet and script replacement detach nodes, so matches are
//! collected before mutation; image replacement only touches attributes and
//! iterates directly.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use std::collections::HashSet;
use std::path::Path;

use super::loaders;
use super::paths;
use super::types::{AssetKind, InlineReport, SkipReason};
use crate::error::PackError;

// Hardcoded, syntactically valid selectors. A parse failure on these is a
// compile-time bug, not a runtime condition.
const STYLESHEET_LINKS: &str = "link[rel=\"stylesheet\"]";
const EXTERNAL_SCRIPTS: &str = "script[src]";
const IMAGES: &str = "img[src]";

/// Replace stylesheet links that resolve to existing local files with
/// `<style>` nodes holding the file text verbatim.
///
/// Remote and missing references are recorded as skips and left unmodified.
/// Processing order is document order.
pub fn inline_stylesheets(
    document: &NodeRef,
    base_dir: &Path,
    report: &mut InlineReport,
) -> Result<(), PackError> {
    // Must collect before iterating: replacement detaches the link node,
    // which invalidates the live iterator.
    let matches: Vec<_> = document
        .select(STYLESHEET_LINKS)
        .expect("BUG: hardcoded stylesheet selector is invalid")
        .collect();

    for node_ref in matches {
        let attrs = node_ref.attributes.borrow();
        let Some(href) = attrs.get("href") else {
            continue;
        };

        let Some(path) = paths::local_asset_path(base_dir, href) else {
            report.skip(href, AssetKind::Stylesheet, SkipReason::Remote);
            continue;
        };
        if !path.is_file() {
            report.skip(href, AssetKind::Stylesheet, SkipReason::Missing);
            continue;
        }

        let css = loaders::load_text(&path)?;
        replace_with_inline_element(node_ref.as_node(), &format!("<style>{css}</style>"), "style");
        report.inlined += 1;
        log::debug!("replaced stylesheet link with inline style: {href}");
    }

    Ok(())
}

/// Replace external script tags that resolve to existing local files with
/// inline `<script>` nodes holding the file text.
///
/// Base names in `excluded` stay external regardless of existence; the
/// offline pipeline passes an empty set so every local script is inlined.
pub fn inline_scripts(
    document: &NodeRef,
    base_dir: &Path,
    excluded: &HashSet<String>,
    report: &mut InlineReport,
) -> Result<(), PackError> {
    // Must collect before iterating: replacement detaches the script node.
    let matches: Vec<_> = document
        .select(EXTERNAL_SCRIPTS)
        .expect("BUG: hardcoded script selector is invalid")
        .collect();

    for node_ref in matches {
        let attrs = node_ref.attributes.borrow();
        let Some(src) = attrs.get("src") else {
            continue;
        };

        // Exclusion wins before any path resolution or existence check.
        if excluded.contains(paths::base_name(src)) {
            report.skip(src, AssetKind::Script, SkipReason::Excluded);
            continue;
        }

        let Some(path) = paths::local_asset_path(base_dir, src) else {
            report.skip(src, AssetKind::Script, SkipReason::Remote);
            continue;
        };
        if !path.is_file() {
            report.skip(src, AssetKind::Script, SkipReason::Missing);
            continue;
        }

        let js = loaders::load_text(&path)?;
        replace_with_inline_element(node_ref.as_node(), &format!("<script>{js}</script>"), "script");
        report.inlined += 1;
        log::debug!("replaced external script with inline script: {src}");
    }

    Ok(())
}

/// Rewrite local image sources to base64 data URIs in place.
///
/// Direct iteration is safe here: only the `src` attribute changes, no node
/// is detached.
pub fn inline_images(
    document: &NodeRef,
    base_dir: &Path,
    report: &mut InlineReport,
) -> Result<(), PackError> {
    for node_ref in document
        .select(IMAGES)
        .expect("BUG: hardcoded img selector is invalid")
    {
        // Borrow attrs separately from the mutation below.
        let src_value = {
            let attrs = node_ref.attributes.borrow();
            attrs.get("src").map(std::string::ToString::to_string)
        };
        let Some(src) = src_value else {
            continue;
        };

        // Already inlined, e.g. by an earlier run over this document.
        if src.starts_with("data:") {
            continue;
        }

        let Some(path) = paths::local_asset_path(base_dir, &src) else {
            report.skip(&src, AssetKind::Image, SkipReason::Remote);
            continue;
        };
        if !path.is_file() {
            report.skip(&src, AssetKind::Image, SkipReason::Missing);
            continue;
        }

        let data_url = loaders::load_image_data_url(&path)?;
        let mut attrs = node_ref.attributes.borrow_mut();
        attrs.insert("src", data_url);
        report.inlined += 1;
        log::debug!("replaced image src with data URI: {src}");
    }

    Ok(())
}

/// Parse `markup`, move its `tag` element in front of `node`, then detach
/// `node`.
///
/// Parsing the markup as a document wraps it in html/head scaffolding, so
/// the replacement element is picked out of the fragment rather than
/// inserting the whole parse result.
fn replace_with_inline_element(node: &NodeRef, markup: &str, tag: &str) {
    let fragment = kuchiki::parse_html().one(markup);
    if let Ok(replacement) = fragment.select_first(tag) {
        node.insert_before(replacement.as_node().clone());
    }
    node.detach();
}
