//! Command-line sale optimizer.
//!
//! Reads a holding statement, keeps the lots eligible under the configured
//! policy, and prints how many units of each lot to sell so that proceeds
//! are maximal without realizing more than the gain ceiling.
//!
//! ```text
//! lotopt --input statement.json --gain 25000 --age 12 --plan "GSU Class C"
//! ```

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use lot_optimizer::application::error::ApplicationError;
use lot_optimizer::application::services::{GainCeilingAllocator, sort_by_lot_id, summarize};
use lot_optimizer::domain::value_objects::Amount;
use lot_optimizer::infrastructure::config::OptimizerSettings;
use lot_optimizer::infrastructure::statement::Statement;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Optimize a lot sale subject to a limit on realized gains.
#[derive(Debug, Parser)]
#[command(name = "lotopt", version, about)]
struct Cli {
    /// Statement file (.json or .toml).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Settings file (TOML); `LOTOPT_*` variables and flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Realized gain ceiling, e.g. 25000 or -1000.50.
    #[arg(long, allow_hyphen_values = true)]
    gain: Option<Amount>,

    /// Minimum age in months (12 months is the short-term cutoff).
    #[arg(long)]
    age: Option<u32>,

    /// Consider only lots issued under this plan; empty for all plans.
    #[arg(long)]
    plan: Option<String>,

    /// Allow sale of lots with a capital loss.
    #[arg(long)]
    loss: bool,

    /// Print the available lots before solving.
    #[arg(long)]
    summary: bool,

    /// Write the filtered statement as JSON to this file.
    #[arg(long)]
    write: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// Applies flags on top of file and environment settings.
    fn apply(&self, mut settings: OptimizerSettings) -> OptimizerSettings {
        if let Some(input) = &self.input {
            settings = settings.with_input(input.clone());
        }
        if let Some(gain) = self.gain {
            settings = settings.with_gain_ceiling(gain);
        }
        if let Some(age) = self.age {
            settings = settings.with_min_age_months(age);
        }
        if let Some(plan) = &self.plan {
            settings = settings.with_plan(plan.clone());
        }
        if self.loss {
            settings = settings.with_allow_loss(true);
        }
        if self.summary {
            settings = settings.with_summary(true);
        }
        if let Some(write) = &self.write {
            settings = settings.with_write(write.clone());
        }
        settings
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let settings = cli.apply(OptimizerSettings::load(cli.config.as_deref())?);
    let input = settings
        .input()
        .ok_or_else(|| ApplicationError::validation("you must provide an --input statement path"))?;
    let ceiling = settings.gain_ceiling();

    let filter = settings.lot_filter(Local::now().date_naive());
    let statement = Statement::load(input)
        .context("reading statement")?
        .filtered(&filter);
    let catalog = statement.to_catalog().context("building lot catalog")?;
    let totals = catalog.totals().map_err(ApplicationError::from)?;

    println!("Input file:   {}", input.display());
    println!("Minimum age:  {} months", settings.min_age_months());
    println!("Plan:         {}", settings.plan().unwrap_or("(any)"));
    println!("Gains cap:    {ceiling}");
    println!("Allow loss:   {}", settings.allow_loss());
    println!("Total shares: {}", totals.shares());
    println!("Total value:  {}", totals.value());
    println!("Total gains:  {}", totals.gain());
    println!();

    if settings.summary() {
        println!("Available shares:");
        for entry in statement.entries() {
            println!("{:2}. {entry}", entry.index);
        }
        println!();
    }
    if let Some(path) = settings.write() {
        statement.write_json(path).context("writing statement")?;
    }

    let mut allocations = GainCeilingAllocator::new()
        .solve(&catalog, ceiling)
        .context("solving")?;
    sort_by_lot_id(&mut allocations);

    for alloc in &allocations {
        let index = *alloc.lot_id();
        let entry = statement
            .find(index)
            .with_context(|| format!("lot {index} missing from statement"))?;
        let line = entry
            .describe_sale(alloc.quantity())
            .map_err(ApplicationError::from)?;
        println!("Sell [lot {index:2}]: {line}");
    }

    let sold = summarize(&allocations).map_err(ApplicationError::from)?;
    println!();
    println!("Sold shares:  {}", sold.shares());
    println!("Sold value:   {}", sold.value());
    println!("Sold gains:   {}", sold.gain());
    if sold.exceeds_ceiling(ceiling) {
        println!("Warning: sold gains exceed the cap; losses available are not enough to reach it");
    }
    Ok(())
}
