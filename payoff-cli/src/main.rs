use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use payoff_core::{
    calculate_payoff_comparison_with, CalculationResult, Debt, PayoffMethod, PayoffStrategy,
    PortfolioSummary,
};
use payoff_ingest::load_debts;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod format;
mod report;
mod setup;
mod state;

use config::Config;
use format::{format_currency, format_duration, format_percent};
use report::{
    balance_timeline, interest_warnings, non_convergence_notice, per_debt_timeline, Verdict,
};

#[derive(Parser, Debug)]
#[command(
    name = "payoff",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAYOFF_BUILD_SHA"), ")"),
    about = "Debt snowball vs avalanche payoff planner"
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct PlanArgs {
    /// Debt list (.csv or .json plan); defaults to config, then ~/.payoff/plan.json
    #[arg(long)]
    debts: Option<PathBuf>,

    /// Extra monthly payment; defaults to the plan file, then config
    #[arg(long)]
    extra: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive setup: enter debts and an extra payment, write ~/.payoff/plan.json
    Setup,

    /// Compare snowball and avalanche side by side
    Compare {
        #[command(flatten)]
        plan: PlanArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Month-by-month payment table for one method
    Schedule {
        #[command(flatten)]
        plan: PlanArgs,

        /// snowball or avalanche (default from config)
        #[arg(long)]
        method: Option<PayoffMethod>,

        /// Limit number of rows printed (0 = all)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// Also write the schedule as CSV
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },

    /// Remaining balance over time, total and per debt
    Timeline {
        #[command(flatten)]
        plan: PlanArgs,

        /// snowball or avalanche (default from config)
        #[arg(long)]
        method: Option<PayoffMethod>,
    },

    /// Totals and recommended first-month payments
    Summary {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.payoff/config.toml
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "debug"
    } else {
        "payoff=info,payoff_core=warn,payoff_ingest=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Setup => {
            setup::run_setup()?;
        }

        Command::Compare { plan, json } => {
            let cfg = config::load_config()?;
            let (debts, extra) = resolve_plan(&plan, &cfg)?;
            let result = calculate(&debts, extra, &cfg)?;
            if json {
                print_json(&CompareOutput {
                    verdict: Verdict::from_result(&result),
                    result: &result,
                })?;
            } else {
                print_compare(&result);
            }
        }

        Command::Schedule {
            plan,
            method,
            limit,
            csv_out,
        } => {
            let cfg = config::load_config()?;
            let (debts, extra) = resolve_plan(&plan, &cfg)?;
            let method = method.unwrap_or(cfg.plan.method);
            let result = calculate(&debts, extra, &cfg)?;
            let strategy = result.strategy(method);

            print_schedule(strategy, limit);

            if let Some(path) = csv_out {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("create {}", path.display()))?;
                report::write_schedule_csv(file, strategy)
                    .with_context(|| format!("write {}", path.display()))?;
                println!("\nWrote {} rows to {}", strategy.monthly_payments.len(), path.display());
            }
        }

        Command::Timeline { plan, method } => {
            let cfg = config::load_config()?;
            let (debts, extra) = resolve_plan(&plan, &cfg)?;
            let method = method.unwrap_or(cfg.plan.method);
            let result = calculate(&debts, extra, &cfg)?;
            print_timeline(result.strategy(method), &result.debts);
        }

        Command::Summary { plan } => {
            let cfg = config::load_config()?;
            let (debts, extra) = resolve_plan(&plan, &cfg)?;
            let result = calculate(&debts, extra, &cfg)?;
            print_summary(&result);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}\n", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Pick the debt file and extra payment: flags, then plan file, then config.
fn resolve_plan(args: &PlanArgs, cfg: &Config) -> Result<(Vec<Debt>, f64)> {
    let path = match (&args.debts, &cfg.plan.debts_file) {
        (Some(p), _) => p.clone(),
        (None, Some(p)) => PathBuf::from(p),
        (None, None) => state::plan_path()?,
    };
    if !path.exists() {
        bail!(
            "No debts found at {}. Run: payoff setup (or pass --debts <file>)",
            path.display()
        );
    }

    let plan = load_debts(&path).with_context(|| format!("loading {}", path.display()))?;
    let extra = args
        .extra
        .or(plan.extra_payment)
        .unwrap_or(cfg.plan.extra_payment);

    tracing::info!(
        debts = plan.debts.len(),
        extra_payment = extra,
        source = %path.display(),
        "loaded debt plan"
    );
    Ok((plan.debts, extra))
}

fn calculate(debts: &[Debt], extra: f64, cfg: &Config) -> Result<CalculationResult> {
    let result = calculate_payoff_comparison_with(debts, extra, &cfg.simulation_config())
        .context("invalid debt plan")?;
    Ok(result)
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    #[serde(flatten)]
    result: &'a CalculationResult,
    verdict: Verdict,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_notices(result: &CalculationResult) {
    for method in PayoffMethod::ALL {
        if let Some(notice) = non_convergence_notice(result.strategy(method)) {
            println!("{notice}");
        }
    }
}

fn print_compare(result: &CalculationResult) {
    println!("# Payoff comparison\n");
    if result.debts.is_empty() {
        println!("No debts found. Add some debts first: `payoff setup`");
        return;
    }

    println!(
        "Debts: {} | Extra payment: {}/month{}\n",
        result.debts.len(),
        format_currency(result.extra_payment),
        if result.extra_payment > 0.0 { "" } else { " (no extra payment set)" }
    );

    println!(
        "{:<10} {:>7}  {:<20} {:>15} {:>15}",
        "Method", "Months", "Duration", "Total interest", "Total paid"
    );
    for method in PayoffMethod::ALL {
        let s = result.strategy(method);
        println!(
            "{:<10} {:>7}  {:<20} {:>15} {:>15}",
            method.label(),
            s.months_to_payoff,
            format_duration(s.months_to_payoff),
            format_currency(s.total_interest_paid),
            format_currency(s.total_paid())
        );
    }
    println!();

    match Verdict::from_result(result).message() {
        Some(msg) => println!("{msg}"),
        None => println!("Both methods cost the same in interest."),
    }
    print_notices(result);
}

fn print_schedule(strategy: &PayoffStrategy, limit: usize) {
    println!(
        "# {} schedule ({} months, {} interest)\n",
        strategy.method.label(),
        strategy.months_to_payoff,
        format_currency(strategy.total_interest_paid)
    );
    println!(
        "{:>5}  {:<24} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Debt", "Payment", "Principal", "Interest", "Remaining"
    );

    let take = if limit == 0 { usize::MAX } else { limit };
    for p in strategy.monthly_payments.iter().take(take) {
        let marker = if p.remaining_balance == 0.0 { " *" } else { "" };
        println!(
            "{:>5}  {:<24} {:>12} {:>12} {:>12} {:>14}{}",
            p.month,
            truncate(&p.debt_name, 24),
            format_currency(p.payment),
            format_currency(p.principal),
            format_currency(p.interest),
            format_currency(p.remaining_balance),
            marker
        );
    }
    if strategy.monthly_payments.len() > take {
        println!("... {} more rows (use --limit 0)", strategy.monthly_payments.len() - take);
    }
    if let Some(notice) = non_convergence_notice(strategy) {
        println!("\n{notice}");
    }
}

fn print_timeline(strategy: &PayoffStrategy, debts: &[Debt]) {
    println!("# {} balance timeline\n", strategy.method.label());

    let mut header = format!("{:>5}  {:>14}", "Month", "Total");
    for d in debts {
        header.push_str(&format!("  {:>14}", truncate(&d.name, 14)));
    }
    println!("{header}");

    let totals = balance_timeline(strategy);
    let per_debt = per_debt_timeline(strategy, debts);
    for (point, row) in totals.iter().zip(per_debt.iter()) {
        let mut line = format!("{:>5}  {:>14}", point.month, format_currency(point.total_remaining));
        for b in &row.balances {
            line.push_str(&format!("  {:>14}", format_currency(*b)));
        }
        println!("{line}");
    }
    if let Some(notice) = non_convergence_notice(strategy) {
        println!("\n{notice}");
    }
}

fn print_summary(result: &CalculationResult) {
    let summary = PortfolioSummary::from_debts(&result.debts);

    println!("# Debt summary\n");
    println!("Debts:              {}", summary.debt_count);
    println!("Total debt:         {}", format_currency(summary.total_balance));
    println!("Total minimums:     {}", format_currency(summary.total_minimum_payment));
    println!("Highest APR:        {}", format_percent(summary.highest_apr));
    println!("Extra payment:      {}", format_currency(result.extra_payment));
    println!(
        "Monthly budget:     {}",
        format_currency(summary.total_monthly_budget(result.extra_payment))
    );

    for method in PayoffMethod::ALL {
        let s = result.strategy(method);
        println!("\n## Recommended monthly payments ({})\n", method.label());
        for p in &s.debt_payments {
            println!("- {:<24} {:>12}", truncate(&p.debt_name, 24), format_currency(p.monthly_payment));
        }
    }
    println!();

    let warnings = interest_warnings(&result.debts);
    if !warnings.is_empty() {
        println!("## Minimums below interest\n");
        for w in &warnings {
            println!("- {w}");
        }
        println!();
    }
    print_notices(result);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
