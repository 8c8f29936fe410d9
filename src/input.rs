//! Reading property descriptions (JSON) and asset lists (CSV)

use crate::core::{AssetCategory, AssetItem, PropertyFacts};
use depc_derive::CsvSchema;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid property JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid asset CSV at row {row}: {source}")]
    Csv { row: usize, source: csv::Error },
    #[error("no input received. Provide a file or pipe data to stdin.")]
    EmptyInput,
}

/// Description of one CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Column layout of a CSV record type, see `#[derive(CsvSchema)]`
pub trait CsvSchema {
    fn csv_fields() -> &'static [CsvField];

    fn csv_header() -> String {
        Self::csv_fields()
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// CSV record format for assets
#[derive(Debug, Clone, Serialize, Deserialize, CsvSchema)]
pub struct AssetRecord {
    /// Display name of the asset
    pub name: String,
    /// capital_works or plant_equipment
    pub category: AssetCategory,
    /// Asset value in dollars
    pub value: Decimal,
    /// Effective life in whole years (blank if unknown)
    #[serde(default)]
    pub effective_life: Option<u32>,
}

impl From<AssetRecord> for AssetItem {
    fn from(record: AssetRecord) -> Self {
        AssetItem {
            name: record.name,
            category: record.category,
            value: record.value,
            effective_life: record.effective_life,
        }
    }
}

/// Read a property description from JSON
pub fn read_property_json<R: Read>(reader: R) -> Result<PropertyFacts, ReadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read assets from CSV, keeping file order
pub fn read_assets_csv<R: Read>(reader: R) -> Result<Vec<AssetItem>, ReadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<AssetRecord>()
        .enumerate()
        .map(|(i, record)| {
            record
                .map(AssetItem::from)
                .map_err(|source| ReadError::Csv { row: i + 1, source })
        })
        .collect()
}

/// Read a property file, or stdin when the path is "-"
pub fn read_property(path: &Path) -> Result<PropertyFacts, ReadError> {
    if path.as_os_str() == "-" {
        read_property_stdin()
    } else {
        let file = open(path)?;
        read_property_json(BufReader::new(file))
    }
}

/// Read a property file and append any assets from a CSV file
pub fn read_property_with_assets(
    path: &Path,
    assets: Option<&Path>,
) -> Result<PropertyFacts, ReadError> {
    let mut facts = read_property(path)?;
    if let Some(assets_path) = assets {
        let file = open(assets_path)?;
        let extra = read_assets_csv(BufReader::new(file))?;
        log::info!("Read {} assets from {}", extra.len(), assets_path.display());
        facts.assets.extend(extra);
    }
    Ok(facts)
}

fn open(path: &Path) -> Result<File, ReadError> {
    File::open(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_property_stdin() -> Result<PropertyFacts, ReadError> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| ReadError::Io {
            path: "stdin".to_string(),
            source,
        })?;

    if buffer.iter().all(u8::is_ascii_whitespace) {
        return Err(ReadError::EmptyInput);
    }

    read_property_json(buffer.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyType;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_assets_csv() {
        let csv_data = "name,category,value,effective_life
Carpet,plant_equipment,3500.00,8
Kitchen cupboards,capital_works,12000,
Ceiling fans, plant_equipment ,450.50,5
Artwork,plant_equipment,900,";

        let assets = read_assets_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(assets.len(), 4);

        assert_eq!(assets[0].name, "Carpet");
        assert_eq!(assets[0].category, AssetCategory::PlantEquipment);
        assert_eq!(assets[0].value, dec!(3500.00));
        assert_eq!(assets[0].effective_life, Some(8));

        assert_eq!(assets[1].category, AssetCategory::CapitalWorks);
        assert_eq!(assets[1].effective_life, None);

        assert_eq!(assets[2].name, "Ceiling fans");
        assert_eq!(assets[2].value, dec!(450.50));

        assert_eq!(assets[3].effective_life, None);
    }

    #[test]
    fn csv_error_reports_row() {
        let csv_data = "name,category,value,effective_life
Carpet,plant_equipment,3500,8
Pool,swimming,9000,15";

        match read_assets_csv(csv_data.as_bytes()) {
            Err(ReadError::Csv { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected CSV error, got {:?}", other),
        }
    }

    #[test]
    fn negative_effective_life_rejected_in_csv() {
        let csv_data = "name,category,value,effective_life
Fan,plant_equipment,150,-3";

        match read_assets_csv(csv_data.as_bytes()) {
            Err(ReadError::Csv { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected CSV error, got {:?}", other),
        }
    }

    #[test]
    fn negative_effective_life_rejected_in_json() {
        let json_data = r#"{
            "property_type": "residential",
            "construction_date": "2000-01-01",
            "purchase_date": "2019-03-01",
            "purchase_price": 500000,
            "is_new_property": false,
            "assets": [
                { "name": "Fan", "category": "plant_equipment", "value": 150, "effective_life": -3 }
            ]
        }"#;

        assert!(matches!(
            read_property_json(json_data.as_bytes()),
            Err(ReadError::Json(_))
        ));
    }

    #[test]
    fn parse_property_json() {
        let json_data = r#"{
            "property_type": "residential",
            "construction_date": "2000-01-01",
            "purchase_date": "2019-03-01",
            "purchase_price": 500000,
            "is_new_property": false,
            "assets": [
                { "name": "Carpet", "category": "plant_equipment", "value": 10000, "effective_life": 5 }
            ]
        }"#;

        let facts = read_property_json(json_data.as_bytes()).unwrap();
        assert_eq!(facts.property_type, PropertyType::Residential);
        assert_eq!(facts.purchase_price, dec!(500000));
        assert_eq!(facts.assets.len(), 1);
    }

    #[test]
    fn unknown_property_type_rejected() {
        let json_data = r#"{
            "property_type": "agricultural",
            "construction_date": "2000-01-01",
            "purchase_date": "2019-03-01",
            "purchase_price": 500000,
            "is_new_property": false
        }"#;

        assert!(matches!(
            read_property_json(json_data.as_bytes()),
            Err(ReadError::Json(_))
        ));
    }

    #[test]
    fn asset_record_schema() {
        let fields = AssetRecord::csv_fields();
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "category", "value", "effective_life"]);
        assert!(fields[0].required);
        assert!(fields[2].required);
        assert!(!fields[3].required);
        assert_eq!(fields[0].description, "Display name of the asset");
        assert_eq!(AssetRecord::csv_header(), "name,category,value,effective_life");
    }
}
