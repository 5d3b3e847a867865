//! End-to-end tests over real directory trees

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use crate::error::Error;
use crate::mapping::{TokenMapping, combine, load_csv_mappings};
use crate::run::run;

fn write_config(dir: &Path, config: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
    path
}

#[test]
fn test_end_to_end_csv_mappings() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("dir");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("a.xml"), r##"<View color="#f8f8f8"/>"##).unwrap();
    fs::write(target.join("b.txt"), r##"color="#f8f8f8""##).unwrap();

    let csv = tmp.path().join("map.csv");
    fs::write(
        &csv,
        "#F8F8F8,@color/ds_color_gray_05\n#4A4A4A,@color/ds_color_dark\n",
    )
    .unwrap();

    let config = write_config(
        tmp.path(),
        &json!({
            "mappings": {},
            "csv_file_path": csv,
            "targets": [target],
            "file_extensions": [".xml", ".swift", ".html"]
        }),
    );

    let report = run(&config).unwrap();

    assert_eq!(report.updated, 1);
    assert!(report.is_clean());
    assert_eq!(
        fs::read_to_string(target.join("a.xml")).unwrap(),
        r#"<View color="@color/ds_color_gray_05"/>"#
    );
    assert_eq!(
        fs::read(target.join("b.txt")).unwrap(),
        br##"color="#f8f8f8""##.to_vec()
    );
}

#[test]
fn test_csv_overrides_config_mapping() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("theme.html");
    fs::write(&file, "body { color: #ffffff; }").unwrap();

    let csv = tmp.path().join("map.csv");
    fs::write(&csv, "#FFFFFF,@color/white_new\n").unwrap();

    let config = write_config(
        tmp.path(),
        &json!({
            "mappings": {"#FFFFFF": "@color/white_old"},
            "csv_file_path": csv,
            "targets": [file],
            "file_extensions": [".html"]
        }),
    );

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "body { color: @color/white_new; }"
    );
}

#[test]
fn test_combined_precedence_from_loaded_csv() {
    let tmp = TempDir::new().unwrap();
    let csv = tmp.path().join("map.csv");
    fs::write(&csv, "#ffffff,@color/white_new\n#F8F8F8,@color/gray\n").unwrap();

    let config_mappings: TokenMapping = [("#FFFFFF", "@color/white_old"), ("#000000", "black")]
        .into_iter()
        .collect();
    let combined = combine(&config_mappings, &load_csv_mappings(&csv).unwrap());

    assert_eq!(combined.get("#FFFFFF"), Some("@color/white_new"));
    assert_eq!(combined.get("#000000"), Some("black"));
    assert_eq!(combined.get("#F8F8F8"), Some("@color/gray"));
}

#[test]
fn test_per_file_isolation() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("src");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("a.swift"), "let c = \"#4a4a4a\"").unwrap();
    fs::write(target.join("b.swift"), [0x23, 0x34, 0x41, 0xff, 0xff]).unwrap();

    let config = write_config(
        tmp.path(),
        &json!({
            "mappings": {"#4A4A4A": "UIColor.dsColorDark"},
            "targets": [target],
            "file_extensions": [".swift"]
        }),
    );

    let report = run(&config).unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, target.join("b.swift"));
    assert_eq!(
        fs::read_to_string(target.join("a.swift")).unwrap(),
        "let c = \"UIColor.dsColorDark\""
    );
}

#[test]
fn test_rerun_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("web");
    fs::create_dir_all(target.join("css")).unwrap();
    fs::write(target.join("css").join("site.html"), "a{color:#F8F8F8}").unwrap();

    let config = write_config(
        tmp.path(),
        &json!({
            "mappings": {"#F8F8F8": "var(--ds-color-gray-05)"},
            "targets": [target],
            "file_extensions": [".html"]
        }),
    );

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();

    assert_eq!(first.updated, 1);
    assert_eq!(second.updated, 0);
    assert_eq!(second.unchanged, 1);
    assert_eq!(
        fs::read_to_string(target.join("css").join("site.html")).unwrap(),
        "a{color:var(--ds-color-gray-05)}"
    );
}

#[test]
fn test_malformed_csv_aborts_before_any_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("a.xml");
    fs::write(&file, "#ffffff").unwrap();

    let csv = tmp.path().join("map.csv");
    fs::write(&csv, "#FFFFFF,white\nbroken\n").unwrap();

    let config = write_config(
        tmp.path(),
        &json!({
            "csv_file_path": csv,
            "targets": [file],
            "file_extensions": [".xml"]
        }),
    );

    let err = run(&config).unwrap_err();

    assert!(matches!(err, Error::MalformedRow { line: 2, fields: 1, .. }));
    assert_eq!(fs::read_to_string(&file).unwrap(), "#ffffff");
}

#[test]
fn test_empty_targets_aborts() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(
        tmp.path(),
        &json!({"mappings": {"#FFFFFF": "white"}, "targets": [], "file_extensions": [".xml"]}),
    );

    assert!(matches!(run(&config), Err(Error::NoTargets)));
}
