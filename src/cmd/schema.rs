//! Schema command - print expected input formats

use clap::Args;
use depc::core::PropertyFacts;
use depc::input::{AssetRecord, CsvSchema};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the property input
    JsonSchema,
    /// CSV header row for the asset file
    CsvHeader,
    /// Asset CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => {
                println!("{}", AssetRecord::csv_header());
                Ok(())
            }
            SchemaFormat::CsvFields => {
                self.print_csv_fields();
                Ok(())
            }
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PropertyFacts);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_fields(&self) {
        println!("Asset CSV Format");
        println!("================");
        println!();
        for field in AssetRecord::csv_fields() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:16} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Assets are appended to the property's asset list in file order.");
    }
}
