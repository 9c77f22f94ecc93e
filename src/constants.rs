//! Application constants for the ESG data checker
//!
//! This module contains the column schema, rule field lists, scoring
//! defaults and built-in sample data used throughout the checker.

// =============================================================================
// Column Schema
// =============================================================================

/// Expected disclosure columns, in display order
///
/// Reference only: uploaded headers are never checked against this list.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "company",
    "year",
    "scope1_tco2e",
    "scope2_tco2e",
    "scope3_tco2e",
    "total_tco2e",
    "energy_mwh",
    "water_m3",
    "female_pct",
    "employee_count",
    "source",
];

/// Column names referenced directly by the validation rules
pub mod columns {
    pub const COMPANY: &str = "company";
    pub const YEAR: &str = "year";
    pub const SCOPE1: &str = "scope1_tco2e";
    pub const SCOPE2: &str = "scope2_tco2e";
    pub const SCOPE3: &str = "scope3_tco2e";
    pub const TOTAL: &str = "total_tco2e";
    pub const ENERGY: &str = "energy_mwh";
    pub const WATER: &str = "water_m3";
    pub const FEMALE_PCT: &str = "female_pct";
}

// =============================================================================
// Validation Rules
// =============================================================================

/// Fields that must be non-empty on every row
pub const REQUIRED_FIELDS: &[&str] = &[columns::COMPANY, columns::YEAR, columns::TOTAL];

/// Fields that must hold a finite, non-negative number when present
pub const NUMERIC_FIELDS: &[&str] = &[
    columns::SCOPE1,
    columns::SCOPE2,
    columns::SCOPE3,
    columns::TOTAL,
    columns::ENERGY,
    columns::WATER,
    columns::FEMALE_PCT,
];

/// Scope columns summed for reconciliation against the total
pub const SCOPE_FIELDS: &[&str] = &[columns::SCOPE1, columns::SCOPE2, columns::SCOPE3];

/// Allowed relative difference between the scope sum and the reported total
pub const DEFAULT_RECONCILIATION_TOLERANCE: f64 = 0.15;

/// Inclusive bounds for percentage fields
pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

// =============================================================================
// Scoring
// =============================================================================

/// Score reported when no issues were found
pub const MAX_SCORE: i32 = 100;

/// Default score penalties per issue severity
pub const DEFAULT_HIGH_PENALTY: i32 = 12;
pub const DEFAULT_MEDIUM_PENALTY: i32 = 6;
pub const DEFAULT_LOW_PENALTY: i32 = 3;

/// Default lower bound for the quality score
pub const DEFAULT_SCORE_FLOOR: i32 = 40;

/// Score thresholds for the human-readable label
pub const STRONG_SCORE_THRESHOLD: i32 = 85;
pub const USABLE_SCORE_THRESHOLD: i32 = 70;

// =============================================================================
// Text Extraction
// =============================================================================

/// Maximum number of non-digit characters between a metric label and its value
pub const EXTRACTION_LOOKAHEAD_CHARS: usize = 40;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name used under the platform config directory
pub const CONFIG_DIR_NAME: &str = "esg-checker";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const TOLERANCE: &str = "ESG_CHECKER_TOLERANCE";
    pub const LOG_LEVEL: &str = "ESG_CHECKER_LOG_LEVEL";
    pub const NO_COLOR: &str = "ESG_CHECKER_NO_COLOR";
}

/// Default logging level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Sample Data
// =============================================================================

/// Three-row sample disclosure table; every row passes validation
pub const SAMPLE_CSV: &str = "company,year,scope1_tco2e,scope2_tco2e,scope3_tco2e,total_tco2e,energy_mwh,water_m3,female_pct,employee_count,source
Acme Bank,2023,1200,800,5600,7600,120000,34000,42,3200,Annual report 2023
Beta Insurance,2023,900,700,4100,5700,98000,21000,39,1800,Sustainability report 2023
Gamma Asset Mgmt,2023,500,400,2600,3500,64000,12000,51,900,TCFD update 2023
";

/// Sample report prose for the text extractor
pub const SAMPLE_TEXT: &str = "In 2023 our total greenhouse gas emissions (Scopes 1, 2 and 3) amounted to 7,600 tCO2e.
Scope 1 emissions were 1,200 tCO2e and Scope 2 emissions were 800 tCO2e.
Scope 3 emissions were 5,600 tCO2e. We used 120,000 MWh of energy during the year.
Women represented 42 percent of our workforce in 2023.";

// =============================================================================
// Status Messages
// =============================================================================

/// User-facing status lines shown by the presentation layer
pub mod messages {
    pub const NO_ISSUES: &str = "No issues found in this dataset.";
    pub const NO_REPORT_TEXT: &str = "Paste some report text first.";
    pub const NOTHING_EXTRACTED: &str = "Nothing extracted yet. Try including numbers for scopes, total emissions or gender balance.";
    pub const NO_METRICS_FOUND: &str = "No metrics could be identified in the text.";
    pub const EXTRACTION_CAVEAT: &str = "These metrics are extracted heuristically from the text. In a real workflow they would be compared to structured disclosures and flagged where the model disagrees.";
}
