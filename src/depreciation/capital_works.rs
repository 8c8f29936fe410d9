//! Building write-off (Division 43 style capital works)

use super::policy::DepreciationPolicy;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Construction on the threshold date itself qualifies
pub fn is_capital_works_eligible(
    construction_date: NaiveDate,
    policy: &DepreciationPolicy,
) -> bool {
    construction_date >= policy.capital_works_threshold
}

/// Annual capital works deduction, identical for every year of the schedule.
///
/// Unrounded; the caller rounds when storing a year.
pub fn capital_works_deduction(
    construction_date: NaiveDate,
    purchase_price: Decimal,
    policy: &DepreciationPolicy,
) -> Decimal {
    if !is_capital_works_eligible(construction_date, policy) {
        log::debug!(
            "Constructed {} before {}, no capital works",
            construction_date,
            policy.capital_works_threshold
        );
        return Decimal::ZERO;
    }

    let building_value = purchase_price * policy.building_share;
    let deduction = building_value * policy.capital_works_rate;
    log::debug!(
        "Capital works: building value={}, deduction={}",
        building_value,
        deduction
    );
    deduction
}
