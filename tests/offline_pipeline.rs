//! End-to-end tests for the offline pipeline: no exclusion set, images
//! rewritten to base64 data URIs, output self-contained.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use base64::Engine;
use htmlpack::{PackConfig, pipeline};
use std::fs;

const LOGO_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01];

const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Player</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
<img src="logo.png">
<img src="https://cdn.example.com/banner.jpg">
<script src="main.js"></script>
<script src="metadatafinderdontremovethisisimportant.js"></script>
</body>
</html>
"#;

fn fixture_site() -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    temp.child("index.html").write_str(INDEX).expect("index");
    temp.child("style.css")
        .write_str("body{margin:0}")
        .expect("css");
    temp.child("main.js")
        .write_str("console.log(\"main loaded\");")
        .expect("js");
    temp.child("metadatafinderdontremovethisisimportant.js")
        .write_str("fetch(\"metadata\");")
        .expect("metadata js");
    temp.child("logo.png").write_binary(LOGO_BYTES).expect("image");
    temp
}

fn run_offline(temp: &TempDir) -> (htmlpack::PackSummary, String) {
    let config = PackConfig::offline()
        .with_input(temp.child("index.html").path())
        .with_output(temp.child("Offline_Download_Version.html").path());
    let summary = pipeline::run(&config).expect("offline run");
    let output = fs::read_to_string(temp.child("Offline_Download_Version.html").path())
        .expect("read output");
    (summary, output)
}

#[test]
fn every_local_script_is_inlined_including_excluded_names() {
    let temp = fixture_site();
    let (_, output) = run_offline(&temp);

    assert!(output.contains("<script>console.log(\"main loaded\");</script>"));
    assert!(output.contains("<script>fetch(\"metadata\");</script>"));
    assert!(!output.contains(r#"src="main.js""#));
    assert!(!output.contains(r#"src="metadatafinderdontremovethisisimportant.js""#));
}

#[test]
fn image_data_uri_decodes_to_the_original_bytes() {
    let temp = fixture_site();
    let (_, output) = run_offline(&temp);

    let expected = base64::engine::general_purpose::STANDARD.encode(LOGO_BYTES);
    let expected_src = format!(r#"src="data:image/png;base64,{expected}""#);
    assert!(output.contains(&expected_src), "data URI missing: {output}");
    assert!(!output.contains(r#"src="logo.png""#));
}

#[test]
fn remote_image_is_left_untouched() {
    let temp = fixture_site();
    let (_, output) = run_offline(&temp);

    assert!(output.contains(r#"src="https://cdn.example.com/banner.jpg""#));
}

#[test]
fn report_accounts_for_every_reference() {
    let temp = fixture_site();
    let (summary, _) = run_offline(&temp);

    // style.css, main.js, the metadata script, logo.png inlined; the remote
    // image skipped.
    assert_eq!(summary.report.inlined, 4);
    assert_eq!(summary.report.skipped.len(), 1);
    assert_eq!(summary.report.total(), 5);
}

#[test]
fn second_pass_over_own_output_changes_nothing() {
    let temp = fixture_site();
    let (_, first) = run_offline(&temp);

    let config = PackConfig::offline()
        .with_input(temp.child("Offline_Download_Version.html").path())
        .with_output(temp.child("second_pass.html").path());
    let summary = pipeline::run(&config).expect("second pass");
    let second = fs::read_to_string(temp.child("second_pass.html").path()).expect("read output");

    assert_eq!(summary.report.inlined, 0);
    assert_eq!(first, second);
}
