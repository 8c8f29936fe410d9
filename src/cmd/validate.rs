//! Validate command - surface input problems without producing a schedule

use super::PropertyArgs;
use clap::Args;
use depc::core::{InputError, PropertyFacts, Warning};
use depc::depreciation::DepreciationPolicy;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    #[command(flatten)]
    input: PropertyArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Severity {
    Error,
    Warning,
}

/// A validation issue for output
#[derive(Debug, Clone, Serialize)]
struct ValidationIssue {
    severity: Severity,
    #[serde(rename = "type")]
    issue_type: String,
    message: String,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    property_type: String,
    asset_count: usize,
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let facts = self.input.read()?;
        let issues = collect_issues(&facts, &DepreciationPolicy::standard());

        if self.json {
            let output = ValidationOutput {
                property_type: facts.property_type.to_string(),
                asset_count: facts.assets.len(),
                issue_count: issues.len(),
                issues: issues.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_text(&facts, &issues);
        }

        // Exit with code 1 if issues found
        if !issues.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn collect_issues(facts: &PropertyFacts, policy: &DepreciationPolicy) -> Vec<ValidationIssue> {
    let errors = facts.validate().err().into_iter().map(|e| ValidationIssue {
        severity: Severity::Error,
        issue_type: error_type_name(&e).to_string(),
        message: e.to_string(),
    });
    let warnings = facts
        .warnings(policy)
        .into_iter()
        .map(|w: Warning| ValidationIssue {
            severity: Severity::Warning,
            issue_type: w.kind().to_string(),
            message: w.to_string(),
        });
    errors.chain(warnings).collect()
}

fn error_type_name(error: &InputError) -> &'static str {
    match error {
        InputError::NonPositivePurchasePrice(_) => "NonPositivePurchasePrice",
        InputError::PurchasePriceTooLarge(_) => "PurchasePriceTooLarge",
        InputError::NegativeAssetValue { .. } => "NegativeAssetValue",
        InputError::AssetValueTooLarge { .. } => "AssetValueTooLarge",
        InputError::NonPositiveEffectiveLife { .. } => "NonPositiveEffectiveLife",
    }
}

fn print_text(facts: &PropertyFacts, issues: &[ValidationIssue]) {
    println!();
    println!(
        "VALIDATION RESULTS ({}, {} assets)",
        facts.property_type,
        facts.assets.len()
    );
    println!();

    if issues.is_empty() {
        println!("\u{2713} No issues found.");
        return;
    }

    println!("\u{26A0} {} issue(s) found:", issues.len());
    println!();
    for (i, issue) in issues.iter().enumerate() {
        let level = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("  {}. [{}] {}: {}", i + 1, level, issue.issue_type, issue.message);
    }
    println!();
}
