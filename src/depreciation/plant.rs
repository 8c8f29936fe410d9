//! Plant & equipment accumulation (diminishing value and prime cost)

use super::policy::DepreciationPolicy;
use crate::core::AssetItem;
use rust_decimal::{Decimal, MathematicalOps};
use std::ops::Add;

/// Unrounded plant & equipment amounts under both methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantContribution {
    pub diminishing_value: Decimal,
    pub prime_cost: Decimal,
}

impl PlantContribution {
    /// The more favourable of the two methods
    pub fn best(&self) -> Decimal {
        self.diminishing_value.max(self.prime_cost)
    }
}

impl Add for PlantContribution {
    type Output = PlantContribution;

    fn add(self, rhs: PlantContribution) -> PlantContribution {
        PlantContribution {
            diminishing_value: self.diminishing_value + rhs.diminishing_value,
            prime_cost: self.prime_cost + rhs.prime_cost,
        }
    }
}

/// Diminishing value deduction for one asset in a given (1-based) year.
///
/// The written-down base is recomputed from the original value each year as
/// `value * max(0, 1 - rate)^(year - 1)` rather than carried forward from the
/// previous year's balance. The base is clamped at zero before raising it to
/// a power, which matters when the rate exceeds 100% (an effective life of 1).
pub fn diminishing_value(
    value: Decimal,
    effective_life: u32,
    year: u32,
    policy: &DepreciationPolicy,
) -> Decimal {
    let rate = policy.diminishing_value_rate(effective_life);
    if year <= 1 {
        return value * rate;
    }
    let base = (Decimal::ONE - rate).max(Decimal::ZERO);
    let remaining_value = value * base.powi(i64::from(year - 1));
    remaining_value * rate
}

/// Prime cost deduction for one asset, the same every year
pub fn prime_cost(value: Decimal, effective_life: u32, policy: &DepreciationPolicy) -> Decimal {
    value * policy.prime_cost_rate(effective_life)
}

/// Both methods for a single asset in a given year.
///
/// Returns `None` for assets that take no part in plant & equipment
/// depreciation (capital works, or no effective life).
pub fn asset_contribution(
    asset: &AssetItem,
    year: u32,
    policy: &DepreciationPolicy,
) -> Option<PlantContribution> {
    let life = asset.plant_life()?;
    Some(PlantContribution {
        diminishing_value: diminishing_value(asset.value, life, year, policy),
        prime_cost: prime_cost(asset.value, life, policy),
    })
}

/// Sum both methods over every eligible asset for one year
pub fn accumulate_plant<'a, I>(
    assets: I,
    year: u32,
    policy: &DepreciationPolicy,
) -> PlantContribution
where
    I: IntoIterator<Item = &'a AssetItem>,
{
    assets
        .into_iter()
        .filter_map(|asset| asset_contribution(asset, year, policy))
        .fold(PlantContribution::default(), |total, c| total + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AssetCategory;
    use rust_decimal_macros::dec;

    fn plant(name: &str, value: Decimal, life: Option<u32>) -> AssetItem {
        AssetItem {
            name: name.to_string(),
            category: AssetCategory::PlantEquipment,
            value,
            effective_life: life,
        }
    }

    #[test]
    fn diminishing_value_first_years() {
        let policy = DepreciationPolicy::standard();
        assert_eq!(diminishing_value(dec!(10000), 5, 1, &policy), dec!(4000));
        assert_eq!(diminishing_value(dec!(10000), 5, 2, &policy), dec!(2400));
        assert_eq!(diminishing_value(dec!(10000), 5, 3, &policy), dec!(1440));
        assert_eq!(diminishing_value(dec!(10000), 5, 4, &policy), dec!(864));
        assert_eq!(diminishing_value(dec!(10000), 5, 5, &policy), dec!(518.4));
    }

    #[test]
    fn diminishing_value_is_recomputed_from_original_value() {
        let policy = DepreciationPolicy::standard();
        // year 10 = 10000 * 0.6^9 * 0.4
        let expected = dec!(10000) * dec!(0.010077696) * dec!(0.4);
        assert_eq!(diminishing_value(dec!(10000), 5, 10, &policy), expected);
    }

    #[test]
    fn rate_above_one_clamps_base_to_zero() {
        let policy = DepreciationPolicy::standard();
        // life 1 => rate 200%, base (1 - 2) is clamped to 0
        assert_eq!(diminishing_value(dec!(1000), 1, 1, &policy), dec!(2000));
        for year in 2..=6 {
            assert_eq!(diminishing_value(dec!(1000), 1, year, &policy), Decimal::ZERO);
        }
    }

    #[test]
    fn two_year_life_fully_written_off_in_year_one() {
        let policy = DepreciationPolicy::standard();
        assert_eq!(diminishing_value(dec!(3000), 2, 1, &policy), dec!(3000));
        assert_eq!(diminishing_value(dec!(3000), 2, 2, &policy), Decimal::ZERO);
    }

    #[test]
    fn prime_cost_is_constant() {
        let policy = DepreciationPolicy::standard();
        assert_eq!(prime_cost(dec!(10000), 5, &policy), dec!(2000));
        assert_eq!(prime_cost(dec!(900), 8, &policy), dec!(112.5));
    }

    #[test]
    fn ineligible_assets_contribute_nothing() {
        let policy = DepreciationPolicy::standard();
        let capital = AssetItem {
            name: "Kitchen".to_string(),
            category: AssetCategory::CapitalWorks,
            value: dec!(25000),
            effective_life: Some(40),
        };
        assert_eq!(asset_contribution(&capital, 1, &policy), None);
        assert_eq!(asset_contribution(&plant("Rug", dec!(500), None), 1, &policy), None);
        assert_eq!(
            accumulate_plant([&capital, &plant("Rug", dec!(500), None)], 1, &policy),
            PlantContribution::default()
        );
    }

    #[test]
    fn accumulates_across_assets() {
        let policy = DepreciationPolicy::standard();
        let assets = vec![
            plant("Carpet", dec!(10000), Some(5)),
            plant("Dishwasher", dec!(1000), Some(10)),
        ];
        let year1 = accumulate_plant(&assets, 1, &policy);
        assert_eq!(year1.diminishing_value, dec!(4200));
        assert_eq!(year1.prime_cost, dec!(2100));
        assert_eq!(year1.best(), dec!(4200));

        let year2 = accumulate_plant(&assets, 2, &policy);
        // 2400 + 1000 * 0.8 * 0.2
        assert_eq!(year2.diminishing_value, dec!(2560));
        assert_eq!(year2.prime_cost, dec!(2100));
    }

    #[test]
    fn accumulation_is_order_independent() {
        let policy = DepreciationPolicy::standard();
        let mut assets = vec![
            plant("Carpet", dec!(7300), Some(8)),
            plant("Blinds", dec!(1250.55), Some(4)),
            plant("Oven", dec!(2100), Some(10)),
        ];
        let forward = accumulate_plant(&assets, 7, &policy);
        assets.reverse();
        assert_eq!(accumulate_plant(&assets, 7, &policy), forward);
    }
}
