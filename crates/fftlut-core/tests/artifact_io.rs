//! Artifact rendering and file I/O.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use fftlut_core::{
    read_table_json, render, write_artifact, ArtifactFormat, CosineTable, ValueType,
};

#[test]
fn json_file_roundtrip_is_bit_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/table.json");
    let t = CosineTable::build(9).unwrap();

    write_artifact(&path, &t, ArtifactFormat::Json, ValueType::F64).unwrap();
    let back = read_table_json(&path).unwrap();

    assert_eq!(back.exponent(), 9);
    assert!(t
        .values()
        .iter()
        .zip(back.values())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn corrupt_json_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.json");
    std::fs::write(&path, r#"{"exponent":3,"size":4,"values":[1.0,0.7,0.0,-0.7,0.1]}"#).unwrap();

    let err = read_table_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("corrupt cosine table"), "{err:#}");
}

#[test]
fn rust_file_has_one_literal_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lut.rs");
    let t = CosineTable::build(6).unwrap();

    write_artifact(&path, &t, ArtifactFormat::Rust, ValueType::F64).unwrap();
    let src = std::fs::read_to_string(&path).unwrap();
    assert_eq!(src, render(&t, ArtifactFormat::Rust, ValueType::F64).unwrap());

    let body_start = src.find("= [").unwrap() + 3;
    let body_end = src[body_start..].find("];").unwrap() + body_start;
    let literals: Vec<f64> = src[body_start..body_end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(literals.len(), t.size());
    assert!(literals
        .iter()
        .zip(t.values())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn c_header_values_use_ten_decimals() {
    let t = CosineTable::build(8).unwrap();
    let src = render(&t, ArtifactFormat::CHeader, ValueType::F32).unwrap();
    assert!(src.contains("#define LUT_SIZE 128\n"));
    assert!(src.contains("{1.0, 0.9996988187, 0.9987954562,"));
    assert!(src.contains(", -0.9996988187};"));
}
