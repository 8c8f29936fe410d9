use crate::depreciation::policy::MAX_AMOUNT;
use rust_decimal::Decimal;

/// Input that violates a precondition of the depreciation engine.
///
/// Reported before any calculation starts; no partial schedule is produced.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("purchase price must be positive, got {0}")]
    NonPositivePurchasePrice(Decimal),
    #[error("purchase price {0} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    PurchasePriceTooLarge(Decimal),
    #[error("asset '{name}' has a negative value: {value}")]
    NegativeAssetValue { name: String, value: Decimal },
    #[error("asset '{name}' value {value} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    AssetValueTooLarge { name: String, value: Decimal },
    #[error("asset '{name}' has a non-positive effective life")]
    NonPositiveEffectiveLife { name: String },
}
