pub mod html_report;
pub mod schedule;
pub mod schema;
pub mod summary;
pub mod validate;

use anyhow::Context;
use clap::Args;
use depc::core::PropertyFacts;
use depc::depreciation::DepreciationPolicy;
use depc::input;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Property input shared by every command that runs a calculation
#[derive(Args, Debug)]
pub struct PropertyArgs {
    /// Property JSON file. Reads from stdin if "-" or not specified.
    #[arg(default_value = "-")]
    property: PathBuf,

    /// CSV file of additional assets (name,category,value,effective_life)
    #[arg(short, long)]
    assets: Option<PathBuf>,
}

impl PropertyArgs {
    /// Read the property (and extra assets) without validating it
    pub fn read(&self) -> anyhow::Result<PropertyFacts> {
        let facts = input::read_property_with_assets(&self.property, self.assets.as_deref())
            .with_context(|| format!("reading property from {}", self.property.display()))?;
        log::info!(
            "Read {} property with {} assets",
            facts.property_type,
            facts.assets.len()
        );
        Ok(facts)
    }

    /// Read the property and log any warnings about it
    pub fn load(&self) -> anyhow::Result<PropertyFacts> {
        let facts = self.read()?;
        for warning in facts.warnings(&DepreciationPolicy::standard()) {
            log::warn!("{}", warning);
        }
        Ok(facts)
    }
}

pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
