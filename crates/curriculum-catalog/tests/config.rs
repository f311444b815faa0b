//! Tests for checker configuration layering.

use std::fs;
use std::path::{Path, PathBuf};

use curriculum_catalog::{CatalogError, CheckerConfig, ConfigFile, DEFAULT_MAX_PRINT_PER_GRADE};
use curriculum_model::Grade;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "curriculum-catalog-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn defaults_follow_file_conventions() {
    let config = CheckerConfig::for_data_dir("data");
    assert_eq!(
        config.standards_path(),
        Path::new("data").join("national-standards.ts")
    );
    assert_eq!(config.grade_path(Grade::Six), Path::new("data").join("grade6.ts"));
    assert_eq!(config.max_print_per_grade, DEFAULT_MAX_PRINT_PER_GRADE);
}

#[test]
fn explicit_overrides_win() {
    let config = CheckerConfig::for_data_dir("data")
        .with_standards_file("elsewhere/standards.ts")
        .with_grade_file(Grade::Eight, "elsewhere/g8.ts")
        .with_max_print_per_grade(3);
    assert_eq!(config.standards_path(), Path::new("elsewhere/standards.ts"));
    assert_eq!(config.grade_path(Grade::Eight), Path::new("elsewhere/g8.ts"));
    assert_eq!(config.grade_path(Grade::Nine), Path::new("data").join("grade9.ts"));
    assert_eq!(config.max_print_per_grade, 3);
}

#[test]
fn config_file_paths_resolve_against_data_dir() {
    let dir = unique_temp_dir("config");
    let config_path = dir.join("mappings.toml");
    fs::write(
        &config_path,
        r#"
data_dir = "curriculum"
standards_path = "standards/national.ts"
max_print_per_grade = 5

[grade_files]
7 = "seventh.ts"
"#,
    )
    .expect("write config");

    let config = CheckerConfig::for_data_dir("data")
        .load_file(&config_path)
        .expect("load config");
    assert_eq!(config.data_dir, Path::new("curriculum"));
    assert_eq!(
        config.standards_path(),
        Path::new("curriculum").join("standards/national.ts")
    );
    assert_eq!(
        config.grade_path(Grade::Seven),
        Path::new("curriculum").join("seventh.ts")
    );
    assert_eq!(config.max_print_per_grade, 5);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn data_dir_override_moves_config_file_paths() {
    let dir = unique_temp_dir("config-override");
    let config_path = dir.join("mappings.toml");
    fs::write(
        &config_path,
        r#"
standards_path = "std.ts"

[grade_files]
7 = "seventh.ts"
8 = "/srv/curriculum/eighth.ts"
"#,
    )
    .expect("write config");

    let config = CheckerConfig::for_data_dir("data")
        .load_file(&config_path)
        .expect("load config")
        .with_data_dir("override");
    assert_eq!(config.standards_path(), Path::new("override").join("std.ts"));
    assert_eq!(
        config.grade_path(Grade::Seven),
        Path::new("override").join("seventh.ts")
    );
    assert_eq!(
        config.grade_path(Grade::Eight),
        Path::new("/srv/curriculum/eighth.ts")
    );
    assert_eq!(config.grade_path(Grade::Nine), Path::new("override").join("grade9.ts"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn explicit_paths_ignore_data_dir_override() {
    let config = CheckerConfig::for_data_dir("data")
        .with_standards_file("elsewhere/standards.ts")
        .with_data_dir("override");
    assert_eq!(config.standards_path(), Path::new("elsewhere/standards.ts"));
}

#[test]
fn unsupported_grade_key_is_rejected() {
    let mut file = ConfigFile::default();
    file.grade_files.insert("5".to_string(), "grade5.ts".into());
    let err = CheckerConfig::for_data_dir("data")
        .apply_file(file, Path::new("mappings.toml"))
        .expect_err("grade 5 is not supported");
    assert!(matches!(err, CatalogError::InvalidConfig { .. }));
    assert!(err.to_string().contains("unsupported grade 5"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = unique_temp_dir("config-unknown");
    let config_path = dir.join("mappings.toml");
    fs::write(&config_path, "max_print = 3\n").expect("write config");
    let err = ConfigFile::load(&config_path).expect_err("unknown key fails");
    assert!(matches!(err, CatalogError::Toml { .. }));

    fs::remove_dir_all(&dir).expect("cleanup");
}
