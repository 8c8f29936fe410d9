use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of years every schedule covers
pub const HORIZON_YEARS: u32 = 40;

/// Share of the purchase price attributed to the building structure
pub const BUILDING_SHARE: Decimal = dec!(0.70);

/// Share of the purchase price reported as depreciable
pub const DEPRECIABLE_SHARE: Decimal = dec!(0.80);

/// Flat annual capital works rate (2.5%)
pub const CAPITAL_WORKS_RATE: Decimal = dec!(0.025);

/// Diminishing value rate is this multiple of the prime cost rate
pub const DIMINISHING_VALUE_MULTIPLIER: Decimal = dec!(2);

/// Currency precision for every stored amount
pub const CURRENCY_DP: u32 = 2;

/// Largest purchase price or asset value accepted as input.
///
/// Keeps every intermediate product and per-year sum well inside the
/// range of `Decimal`, so the engine arithmetic cannot overflow.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Buildings constructed on or after this date qualify for capital works
pub fn capital_works_threshold() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 9, 15).expect("valid threshold date")
}

/// Rates and allocation shares used to build a schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepreciationPolicy {
    pub horizon_years: u32,
    pub building_share: Decimal,
    pub depreciable_share: Decimal,
    pub capital_works_rate: Decimal,
    pub capital_works_threshold: NaiveDate,
    pub diminishing_value_multiplier: Decimal,
}

impl DepreciationPolicy {
    pub fn standard() -> Self {
        DepreciationPolicy {
            horizon_years: HORIZON_YEARS,
            building_share: BUILDING_SHARE,
            depreciable_share: DEPRECIABLE_SHARE,
            capital_works_rate: CAPITAL_WORKS_RATE,
            capital_works_threshold: capital_works_threshold(),
            diminishing_value_multiplier: DIMINISHING_VALUE_MULTIPLIER,
        }
    }

    /// Diminishing value rate for an effective life (200% / life)
    pub fn diminishing_value_rate(&self, effective_life: u32) -> Decimal {
        self.diminishing_value_multiplier / Decimal::from(effective_life)
    }

    /// Prime cost rate for an effective life (100% / life)
    pub fn prime_cost_rate(&self, effective_life: u32) -> Decimal {
        Decimal::ONE / Decimal::from(effective_life)
    }
}

impl Default for DepreciationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Round a currency amount to cents, halves away from zero
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}
