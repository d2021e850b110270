//! Classification and resolution of asset references
//!
//! References in the input document are local relative paths in the common
//! case; absolute URLs, protocol-relative URLs, and data URIs stay external.

use std::path::{Path, PathBuf};
use url::Url;

/// True if the reference points outside the local file tree.
///
/// A reference that parses as an absolute URL (`https:`, `data:`, `file:`,
/// ...) is remote; so is a protocol-relative `//host/...` reference, which
/// inherits the page scheme at load time.
pub fn is_remote(reference: &str) -> bool {
    Url::parse(reference).is_ok() || reference.starts_with("//")
}

/// Resolve a reference to a local path under `base_dir`.
///
/// Returns `None` for remote references, fragments, and empty values. A
/// `Some` path is only a candidate; callers check existence before reading.
pub fn local_asset_path(base_dir: &Path, reference: &str) -> Option<PathBuf> {
    if reference.is_empty() || reference.starts_with('#') || is_remote(reference) {
        return None;
    }
    Some(base_dir.join(reference))
}

/// Final path component of a reference, used for exclusion matching.
pub fn base_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_remote() {
        assert!(is_remote("https://cdn.example.com/style.css"));
        assert!(is_remote("http://example.com/app.js"));
        assert!(is_remote("data:image/png;base64,AAAA"));
        assert!(is_remote("//cdn.example.com/style.css"));
    }

    #[test]
    fn relative_paths_are_local() {
        assert!(!is_remote("style.css"));
        assert!(!is_remote("css/base.css"));
        assert!(!is_remote("../shared/app.js"));
    }

    #[test]
    fn local_paths_join_the_document_directory() {
        assert_eq!(
            local_asset_path(Path::new("site"), "css/base.css"),
            Some(PathBuf::from("site/css/base.css"))
        );
        assert_eq!(
            local_asset_path(Path::new(""), "style.css"),
            Some(PathBuf::from("style.css"))
        );
    }

    #[test]
    fn remote_and_degenerate_references_do_not_resolve() {
        assert_eq!(local_asset_path(Path::new(""), "https://x.test/a.css"), None);
        assert_eq!(local_asset_path(Path::new(""), "#top"), None);
        assert_eq!(local_asset_path(Path::new(""), ""), None);
    }

    #[test]
    fn base_name_takes_the_final_component() {
        assert_eq!(base_name("js/vendor/fflate.js"), "fflate.js");
        assert_eq!(base_name("main.js"), "main.js");
    }
}
