//! Kassa command-line driver.
//!
//! Usage:
//!   kassa voucher <voucher.json>
//!   kassa project <series.json> <years> [baseline]
//!   kassa sample  <series.json> <from> <to> [baseline]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kassa_core::ledger::{LedgerError, Voucher, VoucherService, validate_for_submission};
use kassa_core::projection::{ProjectionInterpolator, ProjectionMetric, ProjectionSeries};
use kassa_shared::AppConfig;
use kassa_shared::config::LoggingConfig;
use kassa_shared::types::{Currency, Money};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Voucher {
        path: PathBuf,
    },
    Project {
        path: PathBuf,
        years: Decimal,
        baseline: Option<Decimal>,
    },
    Sample {
        path: PathBuf,
        from: Decimal,
        to: Decimal,
        baseline: Option<Decimal>,
    },
}

fn parse_decimal(raw: &str, what: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(raw.trim()).with_context(|| format!("invalid {what}: {raw}"))
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let optional = |idx: usize| -> anyhow::Result<Option<Decimal>> {
        args.get(idx).map(|raw| parse_decimal(raw, "baseline")).transpose()
    };

    match args {
        [cmd, path] if cmd == "voucher" => Ok(Command::Voucher { path: path.into() }),
        [cmd, path, years, ..] if cmd == "project" && args.len() <= 4 => Ok(Command::Project {
            path: path.into(),
            years: parse_decimal(years, "years")?,
            baseline: optional(3)?,
        }),
        [cmd, path, from, to, ..] if cmd == "sample" && args.len() <= 5 => Ok(Command::Sample {
            path: path.into(),
            from: parse_decimal(from, "from")?,
            to: parse_decimal(to, "to")?,
            baseline: optional(4)?,
        }),
        _ => bail!(
            "usage: kassa voucher <file> | kassa project <file> <years> [baseline] | \
             kassa sample <file> <from> <to> [baseline]"
        ),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Validates a voucher and builds the report printed on success.
fn voucher_report(
    voucher: &Voucher,
    currency: Currency,
) -> Result<serde_json::Value, LedgerError> {
    let totals = validate_for_submission(&voucher.rows)?;
    let request = VoucherService::prepare(voucher)?;
    info!(rows = request.rows.len(), "Voucher is postable");

    Ok(json!({
        "debit": Money::new(totals.debit, currency).to_string(),
        "credit": Money::new(totals.credit, currency).to_string(),
        "request": request,
    }))
}

fn check_voucher(config: &AppConfig, path: &Path) -> anyhow::Result<ExitCode> {
    let voucher: Voucher = read_json(path)?;

    match voucher_report(&voucher, config.bookkeeping.currency) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(code = err.error_code(), "Voucher rejected");
            eprintln!("{}: {err}", err.error_code());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let default_baseline = config.projection.default_baseline;

    match command {
        Command::Voucher { path } => check_voucher(&config, &path),
        Command::Project {
            path,
            years,
            baseline,
        } => {
            let series: ProjectionSeries = read_json(&path)?;
            let baseline = baseline.unwrap_or(default_baseline);
            let value = ProjectionInterpolator::value_at(&series, years, baseline);
            info!(points = series.len(), %years, "Projection evaluated");
            println!("{}", Money::new(value, config.bookkeeping.currency));
            Ok(ExitCode::SUCCESS)
        }
        Command::Sample {
            path,
            from,
            to,
            baseline,
        } => {
            let series: ProjectionSeries = read_json(&path)?;
            let samples = ProjectionInterpolator::sample(
                &series,
                ProjectionMetric::NetWorth,
                baseline.unwrap_or(default_baseline),
                from,
                to,
                config.projection.sample_step_years,
            );
            println!("{}", serde_json::to_string_pretty(&samples)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
