use std::fs;

use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use unit_economics::benchmark::IndustryBenchmark;
use unit_economics::config::{
    load_config_from, load_config_from_path, merge_preset_with_config, EngineConfig,
    PresetLevel, SimulationConfig, CONFIG_FILE_NAME,
};
use unit_economics::CohortSimulator;

const CUSTOM_CONFIG: &str = indoc! {r#"
    [simulation]
    horizon_months = 60
    healthy_payback_months = 18

    [offer]
    max_recommended_bonuses = 5

    [benchmarks]
    default_industry = "dental-clinics"

    [benchmarks.industries.dental-clinics]
    ltv_cac_ratio = { median = 4.0, good = 6.0, excellent = 9.0 }
    payback_months = { median = 5.0, good = 3.0, excellent = 1.5 }
"#};

#[test]
fn test_load_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, CUSTOM_CONFIG).unwrap();

    let config = load_config_from_path(&path).unwrap();

    assert_eq!(config.simulation.horizon_months, 60);
    assert_eq!(config.simulation.healthy_payback_months, 18);
    assert_eq!(config.simulation.fallback_ltv_months, 24);
    assert_eq!(config.offer.max_recommended_bonuses, 5);
    assert_eq!(config.offer.base_score, 50.0);

    let dental = config.benchmarks.resolve_default().unwrap();
    assert_eq!(dental.ltv_cac_ratio, IndustryBenchmark::new(4.0, 6.0, 9.0));
}

#[test]
fn test_search_walks_up_from_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), CUSTOM_CONFIG).unwrap();
    let nested = temp_dir.path().join("reports").join("q3");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);

    assert_eq!(config.simulation.horizon_months, 60);
    let simulator = CohortSimulator::new(config.simulation);
    assert_eq!(simulator.config().beyond_horizon_month(), 61);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let contents = indoc! {r#"
        [simulation]
        decay_floor_percent = 250.0
    "#};
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), contents).unwrap();

    let config = load_config_from(temp_dir.path().to_path_buf());
    assert_eq!(config, EngineConfig::default());

    let err = load_config_from_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
    assert!(err.to_string().contains("[simulation]"));
}

#[test]
fn test_out_of_order_benchmark_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let contents = indoc! {r#"
        [benchmarks.industries.gyms]
        ltv_cac_ratio = { median = 6.0, good = 4.0, excellent = 9.0 }
        payback_months = { median = 5.0, good = 3.0, excellent = 1.0 }
    "#};
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, contents).unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("benchmarks.industries.gyms"));
    assert!(message.contains("ltv_cac_ratio"));
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_preset_keeps_custom_benchmarks() {
    let config: EngineConfig = toml::from_str(CUSTOM_CONFIG).unwrap();

    let merged = merge_preset_with_config(PresetLevel::Strict, config);

    assert_eq!(merged.simulation.healthy_payback_months, 6);
    assert_eq!(merged.simulation.horizon_months, SimulationConfig::default().horizon_months);
    assert_eq!(merged.offer.max_recommended_bonuses, 5);
    assert!(merged.benchmarks.resolve("dental-clinics").is_some());
}
