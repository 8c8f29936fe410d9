use clap::{Parser, Subcommand};
use log::LevelFilter;

mod cmd;

/// Property tax depreciation schedules
#[derive(Parser, Debug)]
#[command(name = "depc", version, about)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Year-by-year depreciation schedule
    Schedule(cmd::schedule::ScheduleCommand),
    /// Headline depreciation figures
    Summary(cmd::summary::SummaryCommand),
    /// Check property input for errors and warnings
    Validate(cmd::validate::ValidateCommand),
    /// Generate an HTML report
    Html(cmd::html_report::HtmlCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Schedule(schedule) => schedule.exec(),
        Command::Summary(summary) => summary.exec(),
        Command::Validate(validate) => validate.exec(),
        Command::Html(html) => html.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
