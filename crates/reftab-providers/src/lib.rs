//! Embedded agronomic coefficient tables and their providers.
//!
//! Each provider owns one [`CompositeKeyTable`](reftab_table::CompositeKeyTable)
//! built from a CSV resource embedded in the binary. Tables are loaded when
//! the provider is constructed and are read-only afterwards.
//!
//! # Module Organization
//!
//! - [`enums`]: key categories (province, soil, tillage, crop)
//! - [`energy`]: fuel energy estimates
//! - [`embedded`]: the bundled CSV resources
//!
//! # Example
//!
//! ```
//! use reftab_providers::{
//!     CropType, FuelEnergyEstimatesProvider, Province, SoilFunctionalCategory, TillageType,
//! };
//!
//! let provider = FuelEnergyEstimatesProvider::new()?;
//!
//! // Oats are not tabulated: the miss is logged and `None` returned.
//! let missing = provider.get(
//!     Province::Saskatchewan,
//!     SoilFunctionalCategory::Black,
//!     TillageType::NoTill,
//!     CropType::Oats,
//! );
//! assert!(missing.is_none());
//! # Ok::<(), reftab_providers::ProviderError>(())
//! ```

pub mod embedded;
pub mod energy;
pub mod enums;
pub mod error;

// Error types
pub use error::{ProviderError, Result};

// Key categories
pub use enums::{CropType, Province, SoilFunctionalCategory, TillageType};

// Providers
pub use energy::{FuelEnergyEstimate, FuelEnergyEstimatesProvider, FuelEnergyKey};

// Lookup diagnostics
pub use reftab_table::LookupMiss;
