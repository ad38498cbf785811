//! Savings Engine CLI
//!
//! Command-line interface for balance projections and installment splits

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::info;
use rust_decimal::Decimal;
use savings_engine::{
    format::{format_brl, format_brl_decimal, month_label},
    instrument::load_instruments,
    projection::DEFAULT_HORIZON_MONTHS,
    InstallmentPlan, InstrumentParameters, ProjectionConfig, ProjectionEngine, ProjectionPoint,
    ProjectionResult, ScenarioRunner,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "savings", version, about = "Savings projections and installment plans")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single instrument month by month
    Project(ProjectArgs),
    /// Project every instrument in a CSV file
    Batch(BatchArgs),
    /// Split an expense into monthly installments
    Amortize(AmortizeArgs),
}

#[derive(Args)]
struct ProjectArgs {
    /// Annual index rate in percent (e.g. 10.65)
    #[arg(long)]
    index_rate: f64,
    /// Percentage of the index paid (e.g. 110)
    #[arg(long, default_value_t = 100.0)]
    percent_of_index: f64,
    /// Opening principal
    #[arg(long, default_value_t = 0.0)]
    principal: f64,
    /// Contribution made at the start of each month
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,
    #[command(flatten)]
    output: OutputArgs,
    /// Estimate withdrawal taxes at each month
    #[arg(long)]
    withholding: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Instrument CSV file
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Months to project
    #[arg(long, env = "PROJECTION_MONTHS", default_value_t = DEFAULT_HORIZON_MONTHS)]
    horizon: u32,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Also write every projected month to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct AmortizeArgs {
    /// Total amount to split
    #[arg(long)]
    total: Decimal,
    /// Number of installments
    #[arg(long)]
    count: u32,
    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    first_due: NaiveDate,
    /// Description stamped on each installment
    #[arg(long, default_value = "")]
    description: String,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One CSV line of a batch run
#[derive(Serialize)]
struct BatchCsvRow<'a> {
    instrument_id: u32,
    name: &'a str,
    month: u32,
    reference_date: NaiveDate,
    total_contributions: f64,
    gross_balance: f64,
    gross_yield: f64,
    transaction_tax: f64,
    income_tax: f64,
    net_balance: f64,
}

#[derive(Serialize)]
struct AmortizedLine {
    sequence: u32,
    due_date: NaiveDate,
    amount: Decimal,
    description: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project(args) => run_project(args),
        Command::Batch(args) => run_batch(args),
        Command::Amortize(args) => run_amortize(args),
    }
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let params = InstrumentParameters::new(
        args.index_rate,
        args.percent_of_index,
        args.principal,
        args.contribution,
        args.start,
        args.withholding,
    );

    let engine = ProjectionEngine::new(ProjectionConfig::with_horizon(args.output.horizon));
    let result = engine.project(&params).context("projection failed")?;

    if let Some(path) = &args.output.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        for point in &result.points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        info!("Wrote {} rows to {}", result.points.len(), path.display());
    }

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Effective rate: {:.4}% a.a. ({:.6}% a.m.)",
        result.annual_rate * 100.0,
        result.monthly_rate * 100.0
    );
    print_points(&result.points);
    print_summary(&result);
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let records = load_instruments(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let params: Vec<InstrumentParameters> = records.iter().map(|r| r.parameters.clone()).collect();

    let runner = ScenarioRunner::with_config(ProjectionConfig::with_horizon(args.output.horizon));
    let results = runner
        .run_batch(&params)
        .into_iter()
        .zip(&records)
        .map(|(result, record)| result.with_context(|| format!("instrument {} ({})", record.id, record.name)))
        .collect::<Result<Vec<ProjectionResult>>>()?;

    if let Some(path) = &args.output.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        for (record, result) in records.iter().zip(&results) {
            for p in &result.points {
                writer.serialize(BatchCsvRow {
                    instrument_id: record.id,
                    name: &record.name,
                    month: p.month,
                    reference_date: p.reference_date,
                    total_contributions: p.total_contributions,
                    gross_balance: p.gross_balance,
                    gross_yield: p.gross_yield,
                    transaction_tax: p.transaction_tax,
                    income_tax: p.income_tax,
                    net_balance: p.net_balance,
                })?;
            }
        }
        writer.flush()?;
        info!("Wrote batch output to {}", path.display());
    }

    if args.output.json {
        let summaries: Vec<_> = results.iter().map(ProjectionResult::summary).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{:>4} {:<20} {:<16} {:>16} {:>16} {:>16}", "ID", "Name", "Institution", "Contributions", "Gross", "Net");
    println!("{}", "-".repeat(93));
    for (record, result) in records.iter().zip(&results) {
        let s = result.summary();
        println!(
            "{:>4} {:<20} {:<16} {:>16} {:>16} {:>16}",
            record.id,
            record.name,
            record.institution,
            format_brl(s.total_contributions),
            format_brl(s.final_gross_balance),
            format_brl(s.final_net_balance),
        );
    }
    Ok(())
}

fn run_amortize(args: AmortizeArgs) -> Result<()> {
    let plan = InstallmentPlan::new(args.total, args.count, args.first_due);
    let Some(lines) = plan.split()? else {
        if args.count == 0 {
            bail!("installment count must be at least 1");
        }
        println!("Not split: {} due {}", format_brl_decimal(args.total), args.first_due);
        return Ok(());
    };

    let rows: Vec<AmortizedLine> = lines
        .iter()
        .map(|l| AmortizedLine {
            sequence: l.sequence,
            due_date: l.due_date,
            amount: l.amount,
            description: l.label(&args.description),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>4} {:>12} {:>14}  {}", "#", "Due", "Amount", "Description");
    println!("{}", "-".repeat(60));
    for row in &rows {
        println!(
            "{:>4} {:>12} {:>14}  {}",
            row.sequence,
            row.due_date,
            format_brl_decimal(row.amount),
            row.description
        );
    }
    Ok(())
}

fn print_points(points: &[ProjectionPoint]) {
    println!(
        "{:>9} {:>16} {:>16} {:>14} {:>14} {:>16}",
        "Month", "Contributions", "Gross", "Yield", "Taxes", "Net"
    );
    println!("{}", "-".repeat(90));
    for p in points {
        println!(
            "{:>9} {:>16} {:>16} {:>14} {:>14} {:>16}",
            month_label(p.reference_date),
            format_brl(p.total_contributions),
            format_brl(p.gross_balance),
            format_brl(p.gross_yield),
            format_brl(p.total_tax()),
            format_brl(p.net_balance),
        );
    }
}

fn print_summary(result: &ProjectionResult) {
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Months: {}", summary.months);
    if let Some(date) = summary.final_date {
        println!("  Horizon: {}", date);
    }
    println!("  Contributions: {}", format_brl(summary.total_contributions));
    println!("  Gross balance: {}", format_brl(summary.final_gross_balance));
    println!("  Gross yield: {}", format_brl(summary.final_gross_yield));
    println!("  Withholding: {}", format_brl(summary.final_total_tax));
    println!("  Net balance: {}", format_brl(summary.final_net_balance));
}
