//! Summary command - headline depreciation figures

use super::{format_amount, PropertyArgs};
use clap::Args;
use depc::depreciation::{
    calculate_schedule, is_capital_works_eligible, DepreciationPolicy, ScheduleResult,
};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    input: PropertyArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    property_type: String,
    purchase_price: String,
    total_depreciable_amount: String,
    capital_works_eligible: bool,
    annual_capital_works: String,
    first_year_depreciation: String,
    five_year_depreciation: String,
    horizon_years: usize,
    horizon_depreciation: String,
    asset_count: usize,
    depreciating_asset_count: usize,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let facts = self.input.load()?;
        let schedule = calculate_schedule(&facts)?;
        let policy = DepreciationPolicy::standard();

        let data = SummaryData {
            property_type: schedule.property_type.to_string(),
            purchase_price: format!("{:.2}", schedule.purchase_price),
            total_depreciable_amount: format!("{:.2}", schedule.total_depreciable_amount),
            capital_works_eligible: is_capital_works_eligible(facts.construction_date, &policy),
            annual_capital_works: format!("{:.2}", annual_capital_works(&schedule)),
            first_year_depreciation: format!("{:.2}", schedule.first_year_depreciation),
            five_year_depreciation: format!("{:.2}", schedule.five_year_depreciation),
            horizon_years: schedule.horizon(),
            horizon_depreciation: format!("{:.2}", schedule.total_over_horizon()),
            asset_count: facts.assets.len(),
            depreciating_asset_count: facts.plant_assets().count(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_summary(&schedule, &data, &policy);
        }
        Ok(())
    }
}

fn annual_capital_works(schedule: &ScheduleResult) -> rust_decimal::Decimal {
    schedule
        .entry(1)
        .map(|e| e.capital_works)
        .unwrap_or_default()
}

fn print_summary(schedule: &ScheduleResult, data: &SummaryData, policy: &DepreciationPolicy) {
    println!();
    println!("DEPRECIATION SUMMARY ({})", data.property_type);
    println!();
    println!("PROPERTY");
    println!(
        "  Purchase price: {} | Depreciable amount: {}",
        format_amount(schedule.purchase_price),
        format_amount(schedule.total_depreciable_amount)
    );
    println!(
        "  Assets: {} ({} depreciating)",
        data.asset_count, data.depreciating_asset_count
    );
    println!();
    println!("CAPITAL WORKS");
    if data.capital_works_eligible {
        println!(
            "  Eligible: {} per year",
            format_amount(annual_capital_works(schedule))
        );
    } else {
        println!(
            "  Not eligible (constructed before {})",
            policy.capital_works_threshold.format("%-d %B %Y")
        );
    }
    println!();
    println!("DEDUCTIONS");
    println!(
        "  First year: {}",
        format_amount(schedule.first_year_depreciation)
    );
    println!(
        "  First five years: {}",
        format_amount(schedule.five_year_depreciation)
    );
    println!(
        "  Over {} years: {}",
        data.horizon_years,
        format_amount(schedule.total_over_horizon())
    );
    println!();
}
