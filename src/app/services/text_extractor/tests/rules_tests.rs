//! Tests for individual extraction rules

use super::*;
use crate::app::services::text_extractor::rules::{normalize_number, year_rule};

#[test]
fn test_rule_table_order() {
    let keys: Vec<MetricKey> = extraction_rules().iter().map(|rule| rule.key).collect();
    assert_eq!(
        keys,
        vec![
            MetricKey::Scope1Tco2e,
            MetricKey::Scope2Tco2e,
            MetricKey::Scope3Tco2e,
            MetricKey::TotalTco2e,
            MetricKey::EnergyMwh,
            MetricKey::WaterM3,
            MetricKey::FemalePct,
        ]
    );
}

#[test]
fn test_normalize_number() {
    assert_eq!(normalize_number("1,200 "), Some(1200.0));
    assert_eq!(normalize_number("120 000"), Some(120000.0));
    assert_eq!(normalize_number("38.5"), Some(38.5));
    assert_eq!(normalize_number("800."), Some(800.0));
    assert_eq!(normalize_number("1.200.5"), None);
    assert_eq!(normalize_number(""), None);
}

#[test]
fn test_scope_rules() {
    assert_eq!(
        apply_value(MetricKey::Scope1Tco2e, "Scope 1 emissions were 1,200 tCO2e"),
        Some(1200.0)
    );
    assert_eq!(apply_value(MetricKey::Scope2Tco2e, "scope2: 800"), Some(800.0));
    assert_eq!(
        apply_value(MetricKey::Scope3Tco2e, "SCOPE 3 (value chain) 5,600.5 t"),
        Some(5600.5)
    );
}

#[test]
fn test_scope_rule_does_not_match_other_scope() {
    assert_eq!(apply_value(MetricKey::Scope3Tco2e, "Scope 1 emissions were 10"), None);
}

#[test]
fn test_lookahead_window_limit() {
    let gap = "x".repeat(40);
    let text = format!("Scope 1{}123", gap);
    assert_eq!(apply_value(MetricKey::Scope1Tco2e, &text), Some(123.0));

    let gap = "x".repeat(41);
    let text = format!("Scope 1{}123", gap);
    assert_eq!(apply_value(MetricKey::Scope1Tco2e, &text), None);
}

#[test]
fn test_total_rule_requires_adjacent_qualifier() {
    assert_eq!(
        apply_value(MetricKey::TotalTco2e, "Total emissions amounted to 7,600 tCO2e"),
        Some(7600.0)
    );
    assert_eq!(apply_value(MetricKey::TotalTco2e, "total GHG: 512"), Some(512.0));
    assert_eq!(apply_value(MetricKey::TotalTco2e, "totalco2e 99"), Some(99.0));
    assert_eq!(
        apply_value(MetricKey::TotalTco2e, "our total greenhouse gas emissions were 7,600"),
        None
    );
}

#[test]
fn test_energy_rule_detects_unit_without_converting() {
    let found = rule_for(MetricKey::EnergyMwh)
        .apply("Energy consumption: 1.5 GWh")
        .unwrap();
    assert_eq!(found.value, 1.5);
    assert_eq!(found.unit.as_deref(), Some("GWh"));

    let found = rule_for(MetricKey::EnergyMwh)
        .apply("energy use 120,000 MWh")
        .unwrap();
    assert_eq!(found.value, 120000.0);
    assert_eq!(found.unit.as_deref(), Some("MWh"));

    let found = rule_for(MetricKey::EnergyMwh)
        .apply("energy use 42")
        .unwrap();
    assert_eq!(found.value, 42.0);
    assert_eq!(found.unit, None);
}

#[test]
fn test_water_rule() {
    let found = rule_for(MetricKey::WaterM3)
        .apply("Water withdrawal totalled 34,000 m³")
        .unwrap();
    assert_eq!(found.value, 34000.0);
    assert_eq!(found.unit.as_deref(), Some("m³"));

    assert_eq!(apply_value(MetricKey::WaterM3, "water: 12000 m3"), Some(12000.0));
}

#[test]
fn test_female_rule_requires_percentage_marker() {
    assert_eq!(apply_value(MetricKey::FemalePct, "Female staff: 39%"), Some(39.0));
    assert_eq!(apply_value(MetricKey::FemalePct, "women make up 51 %"), Some(51.0));
    assert_eq!(
        apply_value(MetricKey::FemalePct, "Women represented 42 percent"),
        Some(42.0)
    );
    assert_eq!(apply_value(MetricKey::FemalePct, "women employed: 420 people"), None);
}

#[test]
fn test_unparseable_number_omits_value() {
    assert_eq!(apply_value(MetricKey::Scope1Tco2e, "Scope 1 1.2.3 t"), None);
}

#[test]
fn test_year_rule() {
    let year = |text: &str| year_rule().apply(text).map(|found| found.value);

    assert_eq!(year("In 2023 our emissions fell"), Some(2023.0));
    assert_eq!(year("2021 and 2022"), Some(2021.0));
    assert_eq!(year("FY2024"), Some(2024.0));
    assert_eq!(year("Reported 120,000 MWh"), None);
    assert_eq!(year("Order 12023 shipped; see 2019"), Some(2019.0));
    assert_eq!(year("no year here"), None);
}
