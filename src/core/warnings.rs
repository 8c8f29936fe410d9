use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Non-fatal observations about a property's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Warning {
    /// Plant & equipment asset without an effective life, excluded from the
    /// diminishing value and prime cost figures.
    MissingEffectiveLife { name: String },
    /// Asset listed under capital works. The building write-off is derived
    /// from the purchase price, so the asset itself never contributes.
    CapitalWorksAsset { name: String },
    /// Built before the capital works threshold date, no building write-off.
    IneligibleForCapitalWorks {
        #[schemars(with = "String")]
        construction_date: NaiveDate,
    },
    PurchaseBeforeConstruction {
        #[schemars(with = "String")]
        purchase_date: NaiveDate,
        #[schemars(with = "String")]
        construction_date: NaiveDate,
    },
    ZeroValueAsset { name: String },
}

impl Warning {
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::MissingEffectiveLife { .. } => "MissingEffectiveLife",
            Warning::CapitalWorksAsset { .. } => "CapitalWorksAsset",
            Warning::IneligibleForCapitalWorks { .. } => "IneligibleForCapitalWorks",
            Warning::PurchaseBeforeConstruction { .. } => "PurchaseBeforeConstruction",
            Warning::ZeroValueAsset { .. } => "ZeroValueAsset",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MissingEffectiveLife { name } => {
                write!(f, "asset '{}' has no effective life and is not depreciated", name)
            }
            Warning::CapitalWorksAsset { name } => write!(
                f,
                "asset '{}' is capital works and is covered by the building write-off",
                name
            ),
            Warning::IneligibleForCapitalWorks { construction_date } => write!(
                f,
                "constructed {} - not eligible for capital works deductions",
                construction_date.format("%Y-%m-%d")
            ),
            Warning::PurchaseBeforeConstruction {
                purchase_date,
                construction_date,
            } => write!(
                f,
                "purchase date {} is before construction date {}",
                purchase_date.format("%Y-%m-%d"),
                construction_date.format("%Y-%m-%d")
            ),
            Warning::ZeroValueAsset { name } => write!(f, "asset '{}' has zero value", name),
        }
    }
}
