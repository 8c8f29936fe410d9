//! HTML report generation for a depreciation schedule
//!
//! Generates a self-contained HTML file with embedded CSS.

use super::{format_amount, PropertyArgs};
use clap::Args;
use depc::core::{AssetItem, PropertyFacts};
use depc::depreciation::{calculate_schedule, ScheduleResult};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct HtmlCommand {
    #[command(flatten)]
    input: PropertyArgs,

    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HtmlCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let facts = self.input.load()?;
        let schedule = calculate_schedule(&facts)?;
        let generated = chrono::Local::now().format("%d %B %Y").to_string();

        let html = generate(&facts, &schedule, &generated);

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            println!("HTML report written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join("depc-report.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened HTML report in browser: {}", temp_path.display());
        }

        Ok(())
    }
}

/// Generate HTML report content
pub fn generate(facts: &PropertyFacts, schedule: &ScheduleResult, generated: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tax Depreciation Report</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>Tax Depreciation Report</h1>
        <p class="generated">Generated {generated}</p>
    </header>
    <main>
        <section class="summary-cards">
            <div class="card">
                <h3>Property Type</h3>
                <p class="value">{property_type}</p>
            </div>
            <div class="card">
                <h3>Purchase Price</h3>
                <p class="value">{purchase_price}</p>
            </div>
            <div class="card">
                <h3>Depreciable Amount</h3>
                <p class="value">{depreciable}</p>
            </div>
            <div class="card highlight">
                <h3>First Year Deduction</h3>
                <p class="value">{first_year}</p>
            </div>
            <div class="card highlight">
                <h3>First Five Years</h3>
                <p class="value">{five_year}</p>
            </div>
        </section>
        <section>
            <h2>Property Details</h2>
            <dl class="details">
                <dt>Construction date</dt><dd>{construction_date}</dd>
                <dt>Purchase date</dt><dd>{purchase_date}</dd>
                <dt>New property</dt><dd>{is_new}</dd>
            </dl>
        </section>
{assets}
        <section>
            <h2>Year-by-Year Schedule</h2>
            <table>
                <thead>
                    <tr>
                        <th>Year</th>
                        <th>Diminishing Value</th>
                        <th>Prime Cost</th>
                        <th>Capital Works</th>
                        <th>Total</th>
                    </tr>
                </thead>
                <tbody>
{rows}
                </tbody>
            </table>
        </section>
    </main>
    <footer>
        <p>Plant &amp; equipment figures show both methods; the total uses the higher of the two plus capital works.</p>
    </footer>
</body>
</html>
"##,
        css = CSS,
        generated = escape_html(generated),
        property_type = schedule.property_type,
        purchase_price = format_amount(schedule.purchase_price),
        depreciable = format_amount(schedule.total_depreciable_amount),
        first_year = format_amount(schedule.first_year_depreciation),
        five_year = format_amount(schedule.five_year_depreciation),
        construction_date = facts.construction_date.format("%d %B %Y"),
        purchase_date = facts.purchase_date.format("%d %B %Y"),
        is_new = if facts.is_new_property { "Yes" } else { "No" },
        assets = asset_section(&facts.assets),
        rows = schedule_rows(schedule),
    )
}

fn asset_section(assets: &[AssetItem]) -> String {
    if assets.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for asset in assets {
        let life = asset
            .effective_life
            .map_or("-".to_string(), |l| format!("{} years", l));
        let _ = writeln!(
            rows,
            "                    <tr><td class=\"text\">{}</td><td class=\"text\">{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&asset.name),
            escape_html(asset.category.display()),
            format_amount(asset.value),
            life
        );
    }

    format!(
        r#"        <section>
            <h2>Assets</h2>
            <table>
                <thead>
                    <tr><th>Name</th><th>Category</th><th>Value</th><th>Effective Life</th></tr>
                </thead>
                <tbody>
{}                </tbody>
            </table>
        </section>"#,
        rows
    )
}

fn schedule_rows(schedule: &ScheduleResult) -> String {
    let mut rows = String::new();
    for entry in &schedule.yearly_breakdown {
        let _ = writeln!(
            rows,
            "                    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"total\">{}</td></tr>",
            entry.year,
            format_amount(entry.diminishing_value),
            format_amount(entry.prime_cost),
            format_amount(entry.capital_works),
            format_amount(entry.total)
        );
    }
    rows
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const CSS: &str = r#"        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            margin: 0;
            color: #1f2933;
            background: #f5f7fa;
        }
        header { background: #1e3a5f; color: white; padding: 1.5rem 2rem; }
        header h1 { margin: 0; font-size: 1.6rem; }
        .generated { margin: 0.25rem 0 0; opacity: 0.8; }
        main { padding: 1.5rem 2rem; max-width: 1100px; }
        h2 { font-size: 1.2rem; margin: 2rem 0 0.75rem; }
        .summary-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; }
        .card { background: white; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .card h3 { margin: 0; font-size: 0.8rem; text-transform: uppercase; color: #616e7c; }
        .card .value { margin: 0.5rem 0 0; font-size: 1.3rem; font-weight: 600; }
        .card.highlight .value { color: #0b7a4b; }
        .details { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1.5rem; }
        .details dt { color: #616e7c; }
        .details dd { margin: 0; }
        table { width: 100%; border-collapse: collapse; background: white; }
        th, td { padding: 0.4rem 0.75rem; border-bottom: 1px solid #e4e7eb; text-align: right; }
        th { background: #e4e7eb; font-size: 0.85rem; }
        td.text, th:first-child { text-align: left; }
        td.total { font-weight: 600; }
        footer { padding: 1rem 2rem; color: #616e7c; font-size: 0.85rem; }"#;
