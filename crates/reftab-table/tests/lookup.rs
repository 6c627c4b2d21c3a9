use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use reftab_table::{Category, CompositeKeyTable, TableOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Region {
    North,
    East,
    West,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Category for Region {
    const DIMENSION: &'static str = "Region";

    fn decode(raw: &str) -> Result<Self, String> {
        match raw.to_uppercase().as_str() {
            "NORTH" => Ok(Self::North),
            "EAST" => Ok(Self::East),
            "WEST" => Ok(Self::West),
            _ => Err(format!("Unknown region: {raw}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Soil {
    Clay,
}

impl fmt::Display for Soil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Category for Soil {
    const DIMENSION: &'static str = "Soil";

    fn decode(raw: &str) -> Result<Self, String> {
        match raw.to_uppercase().as_str() {
            "CLAY" => Ok(Self::Clay),
            _ => Err(format!("Unknown soil: {raw}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tillage {
    Intensive,
    NoTill,
}

impl fmt::Display for Tillage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Category for Tillage {
    const DIMENSION: &'static str = "Tillage";

    fn decode(raw: &str) -> Result<Self, String> {
        match raw.to_uppercase().replace(['-', ' '], "").as_str() {
            "INTENSIVE" => Ok(Self::Intensive),
            "NOTILL" => Ok(Self::NoTill),
            _ => Err(format!("Unknown tillage: {raw}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Crop {
    Wheat,
    Barley,
    Oats,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Category for Crop {
    const DIMENSION: &'static str = "Crop";

    fn decode(raw: &str) -> Result<Self, String> {
        match raw.to_uppercase().as_str() {
            "WHEAT" => Ok(Self::Wheat),
            "BARLEY" => Ok(Self::Barley),
            "OATS" => Ok(Self::Oats),
            _ => Err(format!("Unknown crop: {raw}")),
        }
    }
}

// =============================================================================
// Log capture
// =============================================================================

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn error_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}

// =============================================================================
// Scenario: Region x Soil, crop rows
// =============================================================================

type RegionSoilTable = CompositeKeyTable<(Region, Soil), Crop>;

const REGION_SOIL: &str = "Region,East,West\nSoil,Clay,Clay\nWheat,1.5,\n";

#[test]
fn scenario_exact_blank_and_miss() {
    let table = RegionSoilTable::from_embedded(REGION_SOIL, TableOptions::named("scenario")).unwrap();

    assert_eq!(table.value((Region::East, Soil::Clay), Crop::Wheat), Some(1.5));
    assert_eq!(table.value((Region::West, Soil::Clay), Crop::Wheat), Some(0.0));

    let miss = table
        .resolve((Region::North, Soil::Clay), Crop::Wheat)
        .unwrap_err();
    assert_eq!(miss.component, "Region");
    assert_eq!(miss.value, "North");
    assert!(miss.confirmed);
    insta::assert_snapshot!(miss.to_string(), @"scenario: unable to find Region: North in the available data");
}

#[test]
fn hit_returns_matched_key_context() {
    let table = RegionSoilTable::from_embedded(REGION_SOIL, TableOptions::default()).unwrap();
    let record = table.lookup((Region::East, Soil::Clay), Crop::Wheat).unwrap();

    assert_eq!(record.dimensions, (Region::East, Soil::Clay));
    assert_eq!(record.identifier, Crop::Wheat);
    assert_eq!(record.row, 3);
    assert_eq!(record.column, 1);
}

#[test]
fn blank_value_is_configurable() {
    let table = RegionSoilTable::from_embedded(
        REGION_SOIL,
        TableOptions::default().with_blank_value(f64::NAN),
    )
    .unwrap();
    let value = table.value((Region::West, Soil::Clay), Crop::Wheat).unwrap();
    assert!(value.is_nan());
}

// =============================================================================
// Determinism and attribution
// =============================================================================

type TillageTable = CompositeKeyTable<(Region, Tillage), Crop>;

const REGION_TILLAGE: &str = "\
Region,East,East,West,West
Tillage,Intensive,No-till,Intensive,No-till
Wheat,2.5,2.1,2.4,2.0
Barley,2.3,1.9,\"2,200.5\",1.8
";

#[test]
fn every_present_key_returns_its_cell() {
    let table = TillageTable::from_embedded(REGION_TILLAGE, TableOptions::default()).unwrap();
    let expected = [
        ((Region::East, Tillage::Intensive), Crop::Wheat, 2.5),
        ((Region::East, Tillage::NoTill), Crop::Wheat, 2.1),
        ((Region::West, Tillage::Intensive), Crop::Wheat, 2.4),
        ((Region::West, Tillage::NoTill), Crop::Wheat, 2.0),
        ((Region::East, Tillage::Intensive), Crop::Barley, 2.3),
        ((Region::East, Tillage::NoTill), Crop::Barley, 1.9),
        ((Region::West, Tillage::Intensive), Crop::Barley, 2200.5),
        ((Region::West, Tillage::NoTill), Crop::Barley, 1.8),
    ];

    assert_eq!(table.len(), expected.len());
    for (dimensions, crop, value) in expected {
        let first = table.lookup(dimensions, crop).copied();
        let second = table.lookup(dimensions, crop).copied();
        assert_eq!(first.map(|r| r.value), Some(value));
        assert_eq!(first, second);
    }
}

#[test]
fn unknown_region_is_blamed_not_tillage() {
    let table = TillageTable::from_embedded(REGION_TILLAGE, TableOptions::default()).unwrap();

    let miss = table
        .resolve((Region::North, Tillage::Intensive), Crop::Wheat)
        .unwrap_err();
    assert_eq!(miss.component, "Region");
    assert_eq!(miss.component_index, 0);
    assert!(miss.confirmed);
}

#[test]
fn crop_blamed_only_when_rest_of_key_matches() {
    let table = TillageTable::from_embedded(REGION_TILLAGE, TableOptions::default()).unwrap();

    let miss = table
        .resolve((Region::North, Tillage::Intensive), Crop::Oats)
        .unwrap_err();
    // Dropping the crop still leaves North unmatched; dropping the region
    // leaves Oats unmatched; dropping tillage matches nothing either.
    assert_eq!(miss.component, "Tillage");
    assert!(!miss.confirmed);

    let miss = table
        .resolve((Region::East, Tillage::NoTill), Crop::Oats)
        .unwrap_err();
    assert_eq!(miss.component, "Crop");
    assert_eq!(miss.value, "Oats");
    assert!(miss.confirmed);
}

#[test]
fn custom_relaxation_order() {
    let table = TillageTable::from_embedded(
        REGION_TILLAGE,
        TableOptions::named("custom").with_relaxation_order([1, 2]),
    )
    .unwrap();

    // Neither listed relaxation matches, so the last listed (Crop) is blamed.
    let miss = table
        .resolve((Region::North, Tillage::Intensive), Crop::Wheat)
        .unwrap_err();
    assert_eq!(miss.component, "Crop");
    assert!(!miss.confirmed);
    assert_eq!(table.relaxation_order(), &[1, 2]);
}

#[test]
fn invalid_relaxation_order_fails_construction() {
    let err = TillageTable::from_embedded(
        REGION_TILLAGE,
        TableOptions::default().with_relaxation_order([0, 5]),
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid relaxation order [0, 5] for 3 key components");
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn miss_logs_exactly_one_error_and_hit_logs_nothing() {
    let table = TillageTable::from_embedded(REGION_TILLAGE, TableOptions::named("fuel")).unwrap();

    let (hit, logs) =
        with_captured_logs(|| table.value((Region::East, Tillage::Intensive), Crop::Wheat));
    assert_eq!(hit, Some(2.5));
    assert!(logs.contents().is_empty());

    let (miss, logs) =
        with_captured_logs(|| table.value((Region::North, Tillage::Intensive), Crop::Wheat));
    assert_eq!(miss, None);
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("unable to find Region: North"));
    assert!(errors[0].contains("component=Region"));
}

#[test]
fn resolve_and_get_do_not_log() {
    let table = TillageTable::from_embedded(REGION_TILLAGE, TableOptions::default()).unwrap();

    let (_, logs) = with_captured_logs(|| {
        assert!(table.get((Region::North, Tillage::Intensive), Crop::Wheat).is_none());
        assert!(table.resolve((Region::North, Tillage::Intensive), Crop::Wheat).is_err());
    });
    assert!(logs.contents().is_empty());
}

#[test]
fn duplicate_keys_warn_and_keep_first() {
    let csv = "Region,East,East\nTillage,Intensive,Intensive\nWheat,1.0,9.0\n";
    let (table, logs) = with_captured_logs(|| {
        TillageTable::from_embedded(csv, TableOptions::default()).unwrap()
    });

    assert_eq!(table.value((Region::East, Tillage::Intensive), Crop::Wheat), Some(1.0));
    assert!(logs.contents().contains("Duplicate key ignored"));
}

#[test]
fn shared_across_threads() {
    let table = Arc::new(TillageTable::from_embedded(REGION_TILLAGE, TableOptions::default()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            std::thread::spawn(move || table.value((Region::West, Tillage::NoTill), Crop::Barley))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(1.8));
    }
}
