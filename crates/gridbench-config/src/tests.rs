//! Tests for run configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults_match_reference_sweep() {
    let config = RunConfig::new();
    assert_eq!(config.input, PathBuf::from("data/mock_polygons.geojson"));
    assert_eq!(config.output_dir, PathBuf::from("output"));
    assert_eq!(config.warmup_count, 0);
    assert_eq!(config.resolutions(SchemeKind::H3), (0..=8).collect::<Vec<u8>>());
    assert_eq!(config.resolutions(SchemeKind::S2), (0..=13).collect::<Vec<u8>>());
    assert_eq!(config.s2.max_cells, 8);
    assert_eq!(config.s2.level_mod, 1);
    assert_eq!(config.token_dump_for(SchemeKind::S2), Some(13));
    assert_eq!(config.token_dump_for(SchemeKind::H3), None);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        input = "in.geojson"
        output_dir = "out"
        progress = true
        warmup_count = 2

        [h3]
        min_resolution = 3
        max_resolution = 6

        [s2]
        min_level = 4
        max_level = 10
        max_cells = 16
        level_mod = 2

        [token_dump]
        scheme = "h3"
        resolution = 5
    "#;

    let config = RunConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.input, PathBuf::from("in.geojson"));
    assert!(config.progress);
    assert_eq!(config.warmup_count, 2);
    assert_eq!(config.h3.resolutions(), 3..=6);
    assert_eq!(config.s2.levels(), 4..=10);
    assert_eq!(config.s2.max_cells, 16);
    assert_eq!(config.token_dump.scheme, SchemeKind::H3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        input: in.geojson
        h3:
          enabled: false
        s2:
          max_level: 9
        token_dump:
          scheme: S2
          resolution: 9
    "#;

    let config = RunConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.enabled_schemes(), vec![SchemeKind::S2]);
    assert_eq!(config.token_dump_for(SchemeKind::S2), Some(9));
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_field_rejected() {
    let err = RunConfig::from_toml_str("resolution = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_unknown_scheme_rejected() {
    let err = RunConfig::from_toml_str("[token_dump]\nscheme = \"geohash\"").unwrap_err();
    assert!(err.to_string().contains("geohash"));
}

#[test]
fn test_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("run.toml");
    std::fs::File::create(&toml_path)
        .unwrap()
        .write_all(b"warmup_count = 1\n")
        .unwrap();
    assert_eq!(RunConfig::load(&toml_path).unwrap().warmup_count, 1);

    let yaml_path = dir.path().join("run.yml");
    std::fs::write(&yaml_path, "warmup_count: 3\n").unwrap();
    assert_eq!(RunConfig::load(&yaml_path).unwrap().warmup_count, 3);

    let json_path = dir.path().join("run.json");
    std::fs::write(&json_path, "{}").unwrap();
    assert!(matches!(
        RunConfig::load(&json_path),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    assert!(matches!(
        RunConfig::load(dir.path().join("missing.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_builder() {
    let config = RunConfig::new()
        .with_input("a.geojson")
        .with_output_dir("results")
        .with_progress(true)
        .with_warmup_count(4)
        .with_schemes(&[SchemeKind::H3])
        .with_token_dump(SchemeKind::H3, 8);

    assert_eq!(config.input, PathBuf::from("a.geojson"));
    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert!(config.progress);
    assert_eq!(config.warmup_count, 4);
    assert_eq!(config.enabled_schemes(), vec![SchemeKind::H3]);
    assert!(config.resolutions(SchemeKind::S2).is_empty());
    assert_eq!(config.token_dump_for(SchemeKind::H3), Some(8));
    assert!(config.validate().is_ok());
}

#[test]
fn test_token_dump_for_disabled_scheme_is_ignored() {
    let config = RunConfig::new().with_schemes(&[SchemeKind::H3]);
    assert_eq!(config.token_dump_for(SchemeKind::S2), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_failures() {
    let cases = [
        RunConfig::new().with_schemes(&[]),
        RunConfig::from_toml_str("[h3]\nmin_resolution = 5\nmax_resolution = 4").unwrap(),
        RunConfig::from_toml_str("[h3]\nmax_resolution = 16").unwrap(),
        RunConfig::from_toml_str("[s2]\nmax_level = 14\n[token_dump]\nenabled = false").unwrap(),
        RunConfig::from_toml_str("[s2]\nmax_cells = 0").unwrap(),
        RunConfig::from_toml_str("[s2]\nlevel_mod = 4").unwrap(),
        RunConfig::from_toml_str("[s2]\nmax_level = 10").unwrap(),
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "{config:?}"
        );
    }
}
