use super::capital_works::capital_works_deduction;
use super::plant::{accumulate_plant, PlantContribution};
use super::policy::{round_currency, DepreciationPolicy};
use crate::core::{InputError, PropertyFacts, PropertyType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of leading years summed for the five-year figure
const FIVE_YEARS: usize = 5;

/// One year of the depreciation schedule, all amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub year: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub diminishing_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub prime_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub capital_works: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl YearEntry {
    /// Combine one year's unrounded amounts.
    ///
    /// The total takes the better of the two plant methods plus capital works,
    /// and every field is rounded from its own unrounded value.
    fn from_unrounded(year: u32, plant: PlantContribution, capital_works: Decimal) -> Self {
        let total = plant.best() + capital_works;
        YearEntry {
            year,
            diminishing_value: round_currency(plant.diminishing_value),
            prime_cost: round_currency(plant.prime_cost),
            capital_works: round_currency(capital_works),
            total: round_currency(total),
        }
    }

    /// The plant & equipment part of the total
    pub fn plant_equipment(&self) -> Decimal {
        self.diminishing_value.max(self.prime_cost)
    }
}

/// Full depreciation schedule for a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub property_type: PropertyType,
    #[serde(with = "rust_decimal::serde::float")]
    pub purchase_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_depreciable_amount: Decimal,
    pub yearly_breakdown: Vec<YearEntry>,
    #[serde(with = "rust_decimal::serde::float")]
    pub first_year_depreciation: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub five_year_depreciation: Decimal,
}

impl ScheduleResult {
    /// Entry for a 1-based year
    pub fn entry(&self, year: u32) -> Option<&YearEntry> {
        let index = usize::try_from(year).ok()?.checked_sub(1)?;
        self.yearly_breakdown.get(index)
    }

    /// Sum of the first `years` totals (fewer if the schedule is shorter)
    pub fn cumulative_depreciation(&self, years: usize) -> Decimal {
        round_currency(sum_totals(&self.yearly_breakdown, years))
    }

    /// Sum of every year's total
    pub fn total_over_horizon(&self) -> Decimal {
        self.cumulative_depreciation(self.yearly_breakdown.len())
    }

    pub fn horizon(&self) -> usize {
        self.yearly_breakdown.len()
    }
}

fn sum_totals(entries: &[YearEntry], years: usize) -> Decimal {
    entries.iter().take(years).map(|e| e.total).sum()
}

/// Calculate the depreciation schedule using the standard policy
pub fn calculate_schedule(facts: &PropertyFacts) -> Result<ScheduleResult, InputError> {
    calculate_schedule_with(facts, &DepreciationPolicy::standard())
}

/// Calculate the depreciation schedule under an explicit policy.
///
/// Input is validated first; nothing is calculated for invalid input.
pub fn calculate_schedule_with(
    facts: &PropertyFacts,
    policy: &DepreciationPolicy,
) -> Result<ScheduleResult, InputError> {
    facts.validate()?;

    let capital_works =
        capital_works_deduction(facts.construction_date, facts.purchase_price, policy);

    for (asset, life) in facts.plant_assets() {
        log::debug!(
            "Plant asset '{}': value={}, effective life={} years",
            asset.name,
            asset.value,
            life
        );
    }

    let yearly_breakdown: Vec<YearEntry> = (1..=policy.horizon_years)
        .map(|year| {
            let plant = accumulate_plant(&facts.assets, year, policy);
            let entry = YearEntry::from_unrounded(year, plant, capital_works);
            log::trace!(
                "Year {}: dv={}, pc={}, cw={}, total={}",
                entry.year,
                entry.diminishing_value,
                entry.prime_cost,
                entry.capital_works,
                entry.total
            );
            entry
        })
        .collect();

    let total_depreciable_amount = round_currency(facts.purchase_price * policy.depreciable_share);
    let first_year_depreciation = yearly_breakdown
        .first()
        .map_or(Decimal::ZERO, |entry| round_currency(entry.total));
    let five_year_depreciation = round_currency(sum_totals(&yearly_breakdown, FIVE_YEARS));

    log::debug!(
        "Schedule: {} years, first year={}, five years={}",
        yearly_breakdown.len(),
        first_year_depreciation,
        five_year_depreciation
    );

    Ok(ScheduleResult {
        property_type: facts.property_type,
        purchase_price: facts.purchase_price,
        total_depreciable_amount,
        yearly_breakdown,
        first_year_depreciation,
        five_year_depreciation,
    })
}
