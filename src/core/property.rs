use super::error::InputError;
use super::warnings::Warning;
use crate::depreciation::policy::MAX_AMOUNT;
use crate::depreciation::DepreciationPolicy;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type of investment property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
}

impl PropertyType {
    pub fn display(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
            PropertyType::Industrial => "Industrial",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Depreciation category of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Part of the building structure
    CapitalWorks,
    /// Removable fixtures and fittings
    PlantEquipment,
}

impl AssetCategory {
    pub fn display(&self) -> &'static str {
        match self {
            AssetCategory::CapitalWorks => "Capital Works",
            AssetCategory::PlantEquipment => "Plant & Equipment",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A depreciable asset within the property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetItem {
    /// Display label, not used in calculations
    pub name: String,
    pub category: AssetCategory,
    #[schemars(with = "f64")]
    pub value: Decimal,
    /// Effective life in whole years
    #[serde(default)]
    pub effective_life: Option<u32>,
}

impl AssetItem {
    /// Effective life, if this asset takes part in the plant & equipment
    /// calculation
    pub fn plant_life(&self) -> Option<u32> {
        match self.category {
            AssetCategory::PlantEquipment => self.effective_life,
            AssetCategory::CapitalWorks => None,
        }
    }
}

/// Everything the engine needs to know about a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyFacts {
    pub property_type: PropertyType,
    #[schemars(with = "String")]
    pub construction_date: NaiveDate,
    #[schemars(with = "String")]
    pub purchase_date: NaiveDate,
    #[schemars(with = "f64")]
    pub purchase_price: Decimal,
    pub is_new_property: bool,
    #[serde(default)]
    pub assets: Vec<AssetItem>,
}

impl PropertyFacts {
    /// Check the engine preconditions, returning the first violation found.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.purchase_price <= Decimal::ZERO {
            return Err(InputError::NonPositivePurchasePrice(self.purchase_price));
        }
        if self.purchase_price > MAX_AMOUNT {
            return Err(InputError::PurchasePriceTooLarge(self.purchase_price));
        }
        for asset in &self.assets {
            if asset.value < Decimal::ZERO {
                return Err(InputError::NegativeAssetValue {
                    name: asset.name.clone(),
                    value: asset.value,
                });
            }
            if asset.value > MAX_AMOUNT {
                return Err(InputError::AssetValueTooLarge {
                    name: asset.name.clone(),
                    value: asset.value,
                });
            }
            if asset.effective_life == Some(0) {
                return Err(InputError::NonPositiveEffectiveLife {
                    name: asset.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Plant & equipment assets that have an effective life, paired with it
    pub fn plant_assets(&self) -> impl Iterator<Item = (&AssetItem, u32)> {
        self.assets
            .iter()
            .filter_map(|asset| asset.plant_life().map(|life| (asset, life)))
    }

    /// Non-fatal observations about the input
    pub fn warnings(&self, policy: &DepreciationPolicy) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if self.construction_date < policy.capital_works_threshold {
            warnings.push(Warning::IneligibleForCapitalWorks {
                construction_date: self.construction_date,
            });
        }
        if self.purchase_date < self.construction_date {
            warnings.push(Warning::PurchaseBeforeConstruction {
                purchase_date: self.purchase_date,
                construction_date: self.construction_date,
            });
        }

        for asset in &self.assets {
            match asset.category {
                AssetCategory::CapitalWorks => warnings.push(Warning::CapitalWorksAsset {
                    name: asset.name.clone(),
                }),
                AssetCategory::PlantEquipment if asset.effective_life.is_none() => {
                    warnings.push(Warning::MissingEffectiveLife {
                        name: asset.name.clone(),
                    })
                }
                AssetCategory::PlantEquipment => {}
            }
            if asset.value.is_zero() {
                warnings.push(Warning::ZeroValueAsset {
                    name: asset.name.clone(),
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn facts(assets: Vec<AssetItem>) -> PropertyFacts {
        PropertyFacts {
            property_type: PropertyType::Residential,
            construction_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            purchase_date: NaiveDate::from_ymd_opt(2020, 6, 30).unwrap(),
            purchase_price: dec!(500000),
            is_new_property: false,
            assets,
        }
    }

    fn asset(name: &str, category: AssetCategory, value: Decimal, life: Option<u32>) -> AssetItem {
        AssetItem {
            name: name.to_string(),
            category,
            value,
            effective_life: life,
        }
    }

    #[test]
    fn valid_input_passes() {
        let facts = facts(vec![asset(
            "Carpet",
            AssetCategory::PlantEquipment,
            dec!(5000),
            Some(10),
        )]);
        assert_eq!(facts.validate(), Ok(()));
    }

    #[test]
    fn zero_purchase_price_rejected() {
        let mut facts = facts(vec![]);
        facts.purchase_price = Decimal::ZERO;
        assert_eq!(
            facts.validate(),
            Err(InputError::NonPositivePurchasePrice(Decimal::ZERO))
        );
    }

    #[test]
    fn negative_purchase_price_rejected() {
        let mut facts = facts(vec![]);
        facts.purchase_price = dec!(-1);
        assert_eq!(
            facts.validate(),
            Err(InputError::NonPositivePurchasePrice(dec!(-1)))
        );
    }

    #[test]
    fn negative_asset_value_rejected() {
        let facts = facts(vec![asset(
            "Blinds",
            AssetCategory::PlantEquipment,
            dec!(-10),
            Some(10),
        )]);
        assert_eq!(
            facts.validate(),
            Err(InputError::NegativeAssetValue {
                name: "Blinds".to_string(),
                value: dec!(-10),
            })
        );
    }

    #[test]
    fn zero_effective_life_rejected() {
        let facts = facts(vec![asset(
            "Oven",
            AssetCategory::PlantEquipment,
            dec!(1200),
            Some(0),
        )]);
        assert_eq!(
            facts.validate(),
            Err(InputError::NonPositiveEffectiveLife {
                name: "Oven".to_string()
            })
        );
    }

    #[test]
    fn oversized_purchase_price_rejected() {
        let mut facts = facts(vec![]);
        facts.purchase_price = MAX_AMOUNT + Decimal::ONE;
        assert_eq!(
            facts.validate(),
            Err(InputError::PurchasePriceTooLarge(MAX_AMOUNT + Decimal::ONE))
        );
    }

    #[test]
    fn oversized_asset_value_rejected() {
        let value = dec!(50000000000000000000000000000);
        let facts = facts(vec![asset(
            "Generator",
            AssetCategory::PlantEquipment,
            value,
            Some(1),
        )]);
        assert_eq!(
            facts.validate(),
            Err(InputError::AssetValueTooLarge {
                name: "Generator".to_string(),
                value,
            })
        );
    }

    #[test]
    fn amounts_at_the_maximum_are_accepted() {
        let mut facts = facts(vec![asset(
            "Generator",
            AssetCategory::PlantEquipment,
            MAX_AMOUNT,
            Some(1),
        )]);
        facts.purchase_price = MAX_AMOUNT;
        assert_eq!(facts.validate(), Ok(()));
    }

    #[test]
    fn plant_assets_skip_capital_works_and_missing_life() {
        let facts = facts(vec![
            asset("Kitchen", AssetCategory::CapitalWorks, dec!(20000), Some(40)),
            asset("Artwork", AssetCategory::PlantEquipment, dec!(800), None),
            asset("Hot water", AssetCategory::PlantEquipment, dec!(1500), Some(12)),
        ]);
        let plant: Vec<_> = facts
            .plant_assets()
            .map(|(a, life)| (a.name.as_str(), life))
            .collect();
        assert_eq!(plant, vec![("Hot water", 12)]);
        // the input list itself is untouched
        assert_eq!(facts.assets.len(), 3);
    }

    #[test]
    fn warnings_flag_excluded_assets() {
        let facts = facts(vec![
            asset("Kitchen", AssetCategory::CapitalWorks, dec!(20000), None),
            asset("Artwork", AssetCategory::PlantEquipment, dec!(0), None),
        ]);
        let warnings = facts.warnings(&DepreciationPolicy::standard());
        assert_eq!(
            warnings,
            vec![
                Warning::CapitalWorksAsset {
                    name: "Kitchen".to_string()
                },
                Warning::MissingEffectiveLife {
                    name: "Artwork".to_string()
                },
                Warning::ZeroValueAsset {
                    name: "Artwork".to_string()
                },
            ]
        );
    }

    #[test]
    fn warnings_flag_dates() {
        let mut facts = facts(vec![]);
        facts.construction_date = NaiveDate::from_ymd_opt(1985, 9, 14).unwrap();
        facts.purchase_date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        let warnings = facts.warnings(&DepreciationPolicy::standard());
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::IneligibleForCapitalWorks { .. }));
        assert!(matches!(warnings[1], Warning::PurchaseBeforeConstruction { .. }));
    }

    #[test]
    fn parse_request_json() {
        let json = r#"{
            "property_type": "commercial",
            "construction_date": "1999-03-01",
            "purchase_date": "2021-07-15",
            "purchase_price": 750000,
            "is_new_property": false,
            "assets": [
                { "name": "Air conditioner", "category": "plant_equipment", "value": 6500.50, "effective_life": 10 },
                { "name": "Fit-out", "category": "capital_works", "value": "30000" }
            ]
        }"#;
        let facts: PropertyFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.property_type, PropertyType::Commercial);
        assert_eq!(facts.purchase_price, dec!(750000));
        assert_eq!(facts.assets[0].value, dec!(6500.50));
        assert_eq!(facts.assets[0].effective_life, Some(10));
        assert_eq!(facts.assets[1].category, AssetCategory::CapitalWorks);
        assert_eq!(facts.assets[1].effective_life, None);
    }

    #[test]
    fn assets_default_to_empty() {
        let json = r#"{
            "property_type": "industrial",
            "construction_date": "2010-01-01",
            "purchase_date": "2012-01-01",
            "purchase_price": 100000,
            "is_new_property": true
        }"#;
        let facts: PropertyFacts = serde_json::from_str(json).unwrap();
        assert!(facts.assets.is_empty());
    }
}
