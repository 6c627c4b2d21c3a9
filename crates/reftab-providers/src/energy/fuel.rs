//! Fuel energy estimates per crop, province, soil category and tillage.

use serde::Serialize;

use reftab_table::{CompositeKeyTable, LookupMiss, Record, TableOptions};

use crate::embedded;
use crate::enums::{CropType, Province, SoilFunctionalCategory, TillageType};
use crate::error::{ProviderError, Result};

/// Header-row part of the key, in header order.
pub type FuelEnergyKey = (Province, SoilFunctionalCategory, TillageType);

type FuelEnergyTable = CompositeKeyTable<FuelEnergyKey, CropType>;

/// Crop first, then soil category, tillage and finally province.
///
/// Indices follow header order (0 province, 1 soil, 2 tillage) with the
/// crop row label last (3).
const RELAXATION_ORDER: [usize; 4] = [3, 1, 2, 0];

/// Fuel energy estimate for one combination of characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelEnergyEstimate {
    pub province: Province,
    /// Simplified soil category the value was found under.
    pub soil_category: SoilFunctionalCategory,
    pub tillage_type: TillageType,
    pub crop_type: CropType,
    /// Fuel energy estimate (GJ ha-1).
    pub fuel_estimate: f64,
}

impl From<&Record<FuelEnergyKey, CropType>> for FuelEnergyEstimate {
    fn from(record: &Record<FuelEnergyKey, CropType>) -> Self {
        let (province, soil_category, tillage_type) = record.dimensions;
        Self {
            province,
            soil_category,
            tillage_type,
            crop_type: record.identifier,
            fuel_estimate: record.value,
        }
    }
}

/// Provides fuel energy estimates from the embedded table.
///
/// # Example
///
/// ```
/// use reftab_providers::{
///     CropType, FuelEnergyEstimatesProvider, Province, SoilFunctionalCategory, TillageType,
/// };
///
/// let provider = FuelEnergyEstimatesProvider::new()?;
/// let estimate = provider
///     .get(
///         Province::Alberta,
///         SoilFunctionalCategory::DarkBrownChernozem,
///         TillageType::Reduced,
///         CropType::Wheat,
///     )
///     .expect("wheat is tabulated for Alberta");
///
/// assert_eq!(estimate.soil_category, SoilFunctionalCategory::DarkBrown);
/// # Ok::<(), reftab_providers::ProviderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FuelEnergyEstimatesProvider {
    table: FuelEnergyTable,
}

impl FuelEnergyEstimatesProvider {
    /// Loads the embedded fuel energy estimates table.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table is malformed.
    pub fn new() -> Result<Self> {
        Self::from_csv(
            embedded::FUEL_ENERGY_ESTIMATES_NAME,
            embedded::FUEL_ENERGY_ESTIMATES,
        )
    }

    /// Loads a table with the fuel energy layout from CSV text.
    pub fn from_csv(resource: &'static str, content: &str) -> Result<Self> {
        let table = FuelEnergyTable::from_embedded(content, Self::options(resource))
            .map_err(|source| ProviderError::TableLoad { resource, source })?;

        tracing::debug!(
            resource,
            records = table.len(),
            "Loaded fuel energy estimates"
        );

        Ok(Self { table })
    }

    /// Table options used by this provider.
    pub fn options(resource: &str) -> TableOptions {
        TableOptions::named(resource).with_relaxation_order(RELAXATION_ORDER)
    }

    /// Finds the fuel energy estimate for the given characteristics.
    ///
    /// The soil category is simplified before the lookup. Returns `None` if
    /// nothing matches; the miss is logged with the characteristic that was
    /// most likely wrong.
    pub fn get(
        &self,
        province: Province,
        soil_category: SoilFunctionalCategory,
        tillage_type: TillageType,
        crop_type: CropType,
    ) -> Option<FuelEnergyEstimate> {
        self.table
            .lookup(
                (province, soil_category.simplified(), tillage_type),
                crop_type,
            )
            .map(FuelEnergyEstimate::from)
    }

    /// Like [`get`](Self::get), but returns the miss diagnosis instead of
    /// logging it.
    pub fn resolve(
        &self,
        province: Province,
        soil_category: SoilFunctionalCategory,
        tillage_type: TillageType,
        crop_type: CropType,
    ) -> std::result::Result<FuelEnergyEstimate, LookupMiss> {
        self.table
            .resolve(
                (province, soil_category.simplified(), tillage_type),
                crop_type,
            )
            .map(FuelEnergyEstimate::from)
    }

    /// The underlying table.
    pub fn table(&self) -> &CompositeKeyTable<FuelEnergyKey, CropType> {
        &self.table
    }
}
