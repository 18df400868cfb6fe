use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use regex::Regex;
use serde::Serialize;
use syntaxtour::{cases, Outcome, VerificationReport, Verifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "syntaxtour")]
#[command(about = "Run the language feature examples and report which ones hold")]
struct Args {
    /// Only run examples whose name matches this regular expression
    #[arg(short, long)]
    filter: Option<String>,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List the selected examples without running them
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a VerificationReport,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let selected = match &args.filter {
        Some(pattern) => cases::matching(&Regex::new(pattern)?),
        None => cases::all(),
    };

    if args.list {
        for case in &selected {
            println!("{}/{}: {}", case.group, case.name, case.description);
        }
        return Ok(());
    }

    let report = Verifier::new().with_quiet_panics(true).run(&selected);

    match args.format {
        Format::Text => print_text(&report),
        Format::Json => {
            let envelope = JsonReport {
                generated_at: Utc::now(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }

    std::process::exit(report.exit_code());
}

fn print_text(report: &VerificationReport) {
    for result in &report.results {
        let line = result.to_string();
        match result.outcome {
            Outcome::Pass => println!("{}", line.green()),
            Outcome::Fail { .. } => println!("{}", line.red()),
        }
    }

    let summary = report.summary_line();
    if report.total() == 0 {
        println!("{}", summary.yellow());
    } else if report.all_passed() {
        println!("{}", summary.bold());
    } else {
        println!("{}", summary.red().bold());
    }
}
