//! Schedule command - year-by-year depreciation breakdown

use super::{format_amount, PropertyArgs};
use clap::Args;
use depc::depreciation::{calculate_schedule, ScheduleResult, YearEntry};
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ScheduleCommand {
    #[command(flatten)]
    input: PropertyArgs,

    /// Only show the first N years of the schedule
    #[arg(short, long)]
    years: Option<usize>,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output the full schedule as JSON
    #[arg(long)]
    json: bool,
}

impl ScheduleCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let facts = self.input.load()?;
        let schedule = calculate_schedule(&facts)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
            return Ok(());
        }

        let rows: Vec<YearRow> = self.visible_entries(&schedule).map(YearRow::from).collect();
        if self.csv {
            write_csv(&rows, io::stdout())
        } else {
            self.print_table(&schedule, &rows);
            Ok(())
        }
    }

    fn visible_entries<'a>(
        &self,
        schedule: &'a ScheduleResult,
    ) -> impl Iterator<Item = &'a YearEntry> {
        let limit = self.years.unwrap_or(schedule.horizon());
        schedule.yearly_breakdown.iter().take(limit)
    }

    fn print_table(&self, schedule: &ScheduleResult, rows: &[YearRow]) {
        println!();
        println!(
            "DEPRECIATION SCHEDULE ({}, purchase price {})",
            schedule.property_type,
            format_amount(schedule.purchase_price)
        );
        println!();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        println!(
            "First year: {} | First five years: {} | Depreciable amount: {}",
            format_amount(schedule.first_year_depreciation),
            format_amount(schedule.five_year_depreciation),
            format_amount(schedule.total_depreciable_amount)
        );
    }
}

/// Row for the schedule table and CSV output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct YearRow {
    #[tabled(rename = "Year")]
    pub year: u32,

    #[tabled(rename = "Diminishing Value")]
    pub diminishing_value: String,

    #[tabled(rename = "Prime Cost")]
    pub prime_cost: String,

    #[tabled(rename = "Capital Works")]
    pub capital_works: String,

    #[tabled(rename = "Total")]
    pub total: String,
}

impl From<&YearEntry> for YearRow {
    fn from(entry: &YearEntry) -> Self {
        YearRow {
            year: entry.year,
            diminishing_value: format!("{:.2}", entry.diminishing_value),
            prime_cost: format!("{:.2}", entry.prime_cost),
            capital_works: format!("{:.2}", entry.capital_works),
            total: format!("{:.2}", entry.total),
        }
    }
}

fn write_csv<W: io::Write>(rows: &[YearRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
