//! Energy coefficient providers.

mod fuel;

pub use fuel::{FuelEnergyEstimate, FuelEnergyEstimatesProvider, FuelEnergyKey};
