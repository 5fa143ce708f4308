//! Integration tests for the region directory.

use std::io::Write;

use tempfile::NamedTempFile;
use vitrina::{LoadError, RegionDirectory};

const REGIONS_JSON: &str = r#"[
    {
        "code": "simferopol",
        "name": "Симферополь",
        "phone": "+79780000001",
        "email": "simf@doorhan-crimea.ru"
    },
    {
        "code": "yalta",
        "name": "Ялта",
        "phone": "+79780000002",
        "office_name": "Офис в Ялте"
    },
    {
        "code": "default",
        "name": "Крым",
        "phone": "+79780000000"
    }
]"#;

#[test]
fn load_str_indexes_by_code() {
    let mut directory = RegionDirectory::new();
    let count = directory.load_str(REGIONS_JSON).unwrap();
    assert_eq!(count, 3);
    assert_eq!(directory.len(), 3);
    assert_eq!(directory.get("yalta").unwrap().name, "Ялта");
    assert_eq!(
        directory.get("yalta").unwrap().office_name.as_deref(),
        Some("Офис в Ялте")
    );
}

#[test]
fn unknown_code_falls_back_to_default_record() {
    let mut directory = RegionDirectory::new();
    directory.load_str(REGIONS_JSON).unwrap();
    assert!(directory.get("atlantis").is_none());
    let fallback = directory.get_or_default("atlantis").unwrap();
    assert_eq!(fallback.code, "default");
    assert_eq!(fallback.name, "Крым");
}

#[test]
fn reload_replaces_previous_records() {
    let mut directory = RegionDirectory::new();
    directory.load_str(REGIONS_JSON).unwrap();
    directory
        .load_str(r#"[{"code": "kerch", "name": "Керчь"}]"#)
        .unwrap();
    assert_eq!(directory.len(), 1);
    assert!(directory.get("yalta").is_none());
    assert!(directory.get("kerch").is_some());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let mut directory = RegionDirectory::new();
    let err = directory.load_str("{not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    let mut directory = RegionDirectory::new();
    let err = directory.load_str(r#"{"code": "x", "name": "y"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let mut directory = RegionDirectory::new();
    let err = directory.load_file("/no/such/regions.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn load_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REGIONS_JSON.as_bytes()).unwrap();

    let mut directory = RegionDirectory::new();
    let count = directory.load_file(file.path()).unwrap();
    assert_eq!(count, 3);
    assert_eq!(directory.get("simferopol").unwrap().phone, "+79780000001");

    let mut codes: Vec<&str> = directory.codes().collect();
    codes.sort_unstable();
    assert_eq!(codes, vec!["default", "simferopol", "yalta"]);
}
