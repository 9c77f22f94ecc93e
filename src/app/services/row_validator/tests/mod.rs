//! Tests for the row validator module
//!
//! This module provides unit tests for the individual rules and the
//! table-level validation driver.


// Test helper functions and fixtures
use crate::app::models::Row;

/// Create a fully populated row that passes every rule
pub fn create_clean_row() -> Row {
    create_row(&[
        ("company", "Acme Bank"),
        ("year", "2023"),
        ("scope1_tco2e", "1200"),
        ("scope2_tco2e", "800"),
        ("scope3_tco2e", "5600"),
        ("total_tco2e", "7600"),
        ("energy_mwh", "120000"),
        ("water_m3", "34000"),
        ("female_pct", "42"),
        ("employee_count", "3200"),
        ("source", "Annual report 2023"),
    ])
}

/// Create a row from field/value pairs
pub fn create_row(fields: &[(&str, &str)]) -> Row {
    fields.iter().copied().collect()
}

/// Create a clean row with some fields overridden
pub fn create_row_with(overrides: &[(&str, &str)]) -> Row {
    let mut row = create_clean_row();
    for (field, value) in overrides {
        row.insert(*field, *value);
    }
    row
}

/// Create a row with only the required fields and the given emissions values
pub fn create_emissions_row(scope1: &str, scope2: &str, scope3: &str, total: &str) -> Row {
    create_row(&[
        ("company", "Acme Bank"),
        ("year", "2023"),
        ("scope1_tco2e", scope1),
        ("scope2_tco2e", scope2),
        ("scope3_tco2e", scope3),
        ("total_tco2e", total),
    ])
}
