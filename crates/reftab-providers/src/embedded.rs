//! Embedded coefficient tables.
//!
//! All tables are embedded at compile time using `include_str!()`, so
//! providers never touch the filesystem.
//!
//! # Structure
//!
//! - Energy: fuel energy estimates by province, soil category and tillage

// =============================================================================
// Energy
// =============================================================================

/// Resource name of the fuel energy estimates table.
pub const FUEL_ENERGY_ESTIMATES_NAME: &str = "fuel_energy_estimates.csv";

/// Fuel energy estimates (GJ ha-1).
///
/// Header rows: province, soil functional category, tillage type. Row
/// labels: crop type. The bundled values are illustrative sample figures.
pub const FUEL_ENERGY_ESTIMATES: &str =
    include_str!("../data/energy/fuel_energy_estimates.csv");
