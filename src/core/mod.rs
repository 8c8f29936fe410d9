pub mod error;
pub mod property;
pub mod warnings;

// Flat public surface for domain types and functions.
pub use error::InputError;
pub use property::{AssetCategory, AssetItem, PropertyFacts, PropertyType};
pub use warnings::Warning;
