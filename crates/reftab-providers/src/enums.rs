//! Agronomic enumerations used as table keys.
//!
//! This module contains the closed value sets decoded from table headers
//! and row labels:
//! - [`Province`] - Canadian provinces
//! - [`SoilFunctionalCategory`] - Functional soil groupings
//! - [`TillageType`] - Tillage practice
//! - [`CropType`] - Crops and land uses
//!
//! Each enum parses case-insensitively and ignores spaces, hyphens and
//! underscores, so "Dark Brown", "dark-brown" and "DARK_BROWN" are the same
//! value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use reftab_table::Category;

/// Uppercases and strips separators so spelling variants compare equal.
fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace([' ', '-', '_'], "")
}

/// Canadian province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    Alberta,
    BritishColumbia,
    Saskatchewan,
    Manitoba,
    Ontario,
    Quebec,
    NewBrunswick,
    NovaScotia,
    PrinceEdwardIsland,
    NewfoundlandAndLabrador,
}

impl Province {
    /// Returns the province name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alberta => "Alberta",
            Self::BritishColumbia => "British Columbia",
            Self::Saskatchewan => "Saskatchewan",
            Self::Manitoba => "Manitoba",
            Self::Ontario => "Ontario",
            Self::Quebec => "Quebec",
            Self::NewBrunswick => "New Brunswick",
            Self::NovaScotia => "Nova Scotia",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
        }
    }

    /// Returns the two-letter postal abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Alberta => "AB",
            Self::BritishColumbia => "BC",
            Self::Saskatchewan => "SK",
            Self::Manitoba => "MB",
            Self::Ontario => "ON",
            Self::Quebec => "QC",
            Self::NewBrunswick => "NB",
            Self::NovaScotia => "NS",
            Self::PrinceEdwardIsland => "PE",
            Self::NewfoundlandAndLabrador => "NL",
        }
    }

    /// Returns true for the three Prairie provinces.
    pub fn is_prairie(&self) -> bool {
        matches!(self, Self::Alberta | Self::Saskatchewan | Self::Manitoba)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Province {
    type Err = String;

    /// Accepts full names and postal abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ALBERTA" | "AB" => Ok(Self::Alberta),
            "BRITISHCOLUMBIA" | "BC" => Ok(Self::BritishColumbia),
            "SASKATCHEWAN" | "SK" => Ok(Self::Saskatchewan),
            "MANITOBA" | "MB" => Ok(Self::Manitoba),
            "ONTARIO" | "ON" => Ok(Self::Ontario),
            "QUEBEC" | "QC" => Ok(Self::Quebec),
            "NEWBRUNSWICK" | "NB" => Ok(Self::NewBrunswick),
            "NOVASCOTIA" | "NS" => Ok(Self::NovaScotia),
            "PRINCEEDWARDISLAND" | "PE" | "PEI" => Ok(Self::PrinceEdwardIsland),
            "NEWFOUNDLANDANDLABRADOR" | "NEWFOUNDLAND" | "NL" => {
                Ok(Self::NewfoundlandAndLabrador)
            }
            _ => Err(format!("Unknown province: {s}")),
        }
    }
}

impl Category for Province {
    const DIMENSION: &'static str = "Province";

    fn decode(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

/// Functional soil category.
///
/// Tables are keyed by the simplified categories ([`Brown`](Self::Brown),
/// [`DarkBrown`](Self::DarkBrown), [`Black`](Self::Black),
/// [`EasternCanada`](Self::EasternCanada)); the detailed Chernozem variants
/// map onto them through [`simplified`](Self::simplified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SoilFunctionalCategory {
    Brown,
    BrownChernozem,
    DarkBrown,
    DarkBrownChernozem,
    Black,
    BlackGrayChernozem,
    EasternCanada,
}

impl SoilFunctionalCategory {
    /// Returns the category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brown => "Brown",
            Self::BrownChernozem => "Brown Chernozem",
            Self::DarkBrown => "Dark Brown",
            Self::DarkBrownChernozem => "Dark Brown Chernozem",
            Self::Black => "Black",
            Self::BlackGrayChernozem => "Black Gray Chernozem",
            Self::EasternCanada => "Eastern Canada",
        }
    }

    /// Returns the category used as a table key.
    pub fn simplified(&self) -> Self {
        match self {
            Self::Brown | Self::BrownChernozem => Self::Brown,
            Self::DarkBrown | Self::DarkBrownChernozem => Self::DarkBrown,
            Self::Black | Self::BlackGrayChernozem => Self::Black,
            Self::EasternCanada => Self::EasternCanada,
        }
    }
}

impl fmt::Display for SoilFunctionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SoilFunctionalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "BROWN" => Ok(Self::Brown),
            "BROWNCHERNOZEM" => Ok(Self::BrownChernozem),
            "DARKBROWN" => Ok(Self::DarkBrown),
            "DARKBROWNCHERNOZEM" => Ok(Self::DarkBrownChernozem),
            "BLACK" => Ok(Self::Black),
            "BLACKGRAYCHERNOZEM" | "BLACKGREYCHERNOZEM" => Ok(Self::BlackGrayChernozem),
            "EASTERNCANADA" | "EAST" => Ok(Self::EasternCanada),
            _ => Err(format!("Unknown soil functional category: {s}")),
        }
    }
}

impl Category for SoilFunctionalCategory {
    const DIMENSION: &'static str = "Soil Category";

    fn decode(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

/// Tillage practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TillageType {
    Intensive,
    Reduced,
    NoTill,
}

impl TillageType {
    /// Returns the tillage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intensive => "Intensive",
            Self::Reduced => "Reduced",
            Self::NoTill => "No-till",
        }
    }
}

impl fmt::Display for TillageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TillageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "INTENSIVE" | "CONVENTIONAL" => Ok(Self::Intensive),
            "REDUCED" | "MINIMUM" => Ok(Self::Reduced),
            "NOTILL" | "ZERO" | "ZEROTILL" => Ok(Self::NoTill),
            _ => Err(format!("Unknown tillage type: {s}")),
        }
    }
}

impl Category for TillageType {
    const DIMENSION: &'static str = "Tillage";

    fn decode(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

/// Crop or land use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CropType {
    Barley,
    Wheat,
    Durum,
    Oats,
    Canola,
    Flax,
    Lentils,
    Peas,
    SummerFallow,
}

impl CropType {
    /// Returns the crop name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Barley => "Barley",
            Self::Wheat => "Wheat",
            Self::Durum => "Durum",
            Self::Oats => "Oats",
            Self::Canola => "Canola",
            Self::Flax => "Flax",
            Self::Lentils => "Lentils",
            Self::Peas => "Peas",
            Self::SummerFallow => "Summer fallow",
        }
    }

    /// Returns true for pulse crops.
    pub fn is_pulse(&self) -> bool {
        matches!(self, Self::Lentils | Self::Peas)
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CropType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "BARLEY" => Ok(Self::Barley),
            "WHEAT" | "SPRINGWHEAT" => Ok(Self::Wheat),
            "DURUM" | "DURUMWHEAT" => Ok(Self::Durum),
            "OATS" => Ok(Self::Oats),
            "CANOLA" => Ok(Self::Canola),
            "FLAX" | "FLAXSEED" => Ok(Self::Flax),
            "LENTILS" | "LENTIL" => Ok(Self::Lentils),
            "PEAS" | "FIELDPEAS" => Ok(Self::Peas),
            "SUMMERFALLOW" | "FALLOW" => Ok(Self::SummerFallow),
            _ => Err(format!("Unknown crop type: {s}")),
        }
    }
}

impl Category for CropType {
    const DIMENSION: &'static str = "Crop";

    fn decode(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}
