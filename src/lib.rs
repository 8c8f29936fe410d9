pub mod core;
pub mod depreciation;
pub mod input;
