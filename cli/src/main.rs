use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use sleeplog::efficiency::DEFAULT_SLEEP_LATENCY_MINUTES;
use sleeplog::{
    ExportFormat, InvalidInputError, SleepBreakdown, SleepData, SleepGoal, SleepInterval, TimeOfDay, ValidationError,
    classify_quality, compute_duration, validate_sleep_times,
};
use tracing_subscriber::EnvFilter;

mod api;


use api::{ApiClient, ApiConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("not logged in: {path} redirected to the login page; pass --session-cookie")]
    Unauthenticated { path: String },
    #[error("server returned {status} for {path}")]
    ServerError { status: u16, path: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "sleeplog", about = "Sleep log calculations and tracker API CLI")]
struct Cli {
    #[arg(long, env = "SLEEPLOG_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Raw `Cookie` header value for an authenticated session, e.g. `session=...`.
    #[arg(long, env = "SLEEPLOG_SESSION_COOKIE")]
    session_cookie: Option<String>,

    #[arg(long, env = "SLEEPLOG_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rounded overnight duration classified against a goal.
    Duration {
        bedtime: TimeOfDay,
        wake: TimeOfDay,
        #[arg(long, default_value = "8", value_parser = parse_goal)]
        goal: SleepGoal,
    },
    /// Check a bedtime/wake pair against the plausibility bounds.
    Validate { bedtime: TimeOfDay, wake: TimeOfDay },
    /// Tier for a 1-10 quality score.
    Quality {
        #[arg(allow_negative_numbers = true)]
        score: i32,
    },
    /// Time in bed, actual sleep and efficiency.
    Efficiency {
        bedtime: TimeOfDay,
        wake: TimeOfDay,
        #[arg(long, default_value_t = DEFAULT_SLEEP_LATENCY_MINUTES)]
        latency: u32,
        #[arg(long, default_value_t = 0)]
        waso: u32,
    },
    /// Download the sleep history and render it as JSON or CSV.
    Export {
        #[arg(long, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Mark a recommendation as completed.
    Complete { id: i64 },
}

impl Cli {
    fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            session_cookie: self.session_cookie.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.api_config();

    match cli.command {
        Command::Duration { bedtime, wake, goal } => print_json(&duration_report(bedtime, wake, goal)),
        Command::Validate { bedtime, wake } => print_json(&validate_report(bedtime, wake)?),
        Command::Quality { score } => print_json(&quality_report(score)),
        Command::Efficiency { bedtime, wake, latency, waso } => {
            print_json(&efficiency_report(bedtime, wake, latency, waso))
        }
        Command::Export { format, output } => run_export(&config, format, output.as_deref()).await,
        Command::Complete { id } => {
            ApiClient::new(&config)?.complete_recommendation(id).await?;
            print_json(&json!({ "id": id, "completed": true }))
        }
    }
}

fn parse_goal(raw: &str) -> Result<SleepGoal, InvalidInputError> {
    let hours = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidInputError::Malformed(raw.to_owned()))?;
    SleepGoal::new(hours)
}

fn duration_report(bedtime: TimeOfDay, wake: TimeOfDay, goal: SleepGoal) -> Value {
    let result = compute_duration(bedtime, wake, goal);
    json!({
        "bedtime": bedtime.to_string(),
        "wake": wake.to_string(),
        "goal_hours": goal.hours(),
        "hours": result.hours,
        "label": result.label(),
        "tier": result.tier.as_str(),
        "wraps_midnight": SleepInterval::new(bedtime, wake).wraps_midnight(),
    })
}

fn validate_report(bedtime: TimeOfDay, wake: TimeOfDay) -> Result<Value, CliError> {
    let interval = validate_sleep_times(bedtime, wake)?;
    Ok(json!({
        "valid": true,
        "minutes": interval.minutes(),
        "hours": interval.hours(),
    }))
}

fn quality_report(score: i32) -> Value {
    json!({ "score": score, "tier": classify_quality(score).as_str() })
}

fn efficiency_report(bedtime: TimeOfDay, wake: TimeOfDay, latency: u32, waso: u32) -> Value {
    let breakdown = SleepBreakdown::compute(SleepInterval::new(bedtime, wake), latency, waso);
    json!({
        "time_in_bed_hours": breakdown.time_in_bed_hours,
        "actual_sleep_hours": breakdown.actual_sleep_hours,
        "efficiency_percent": breakdown.efficiency_percent,
    })
}

async fn run_export(config: &ApiConfig, format: ExportFormat, output: Option<&Path>) -> Result<(), CliError> {
    let data = ApiClient::new(config)?.fetch_sleep_data().await?;
    let summary = data.summary();
    tracing::info!(nights = summary.nights, %format, "sleep history fetched");
    emit_export(&data, format, output)
}

fn emit_export(data: &SleepData, format: ExportFormat, output: Option<&Path>) -> Result<(), CliError> {
    let rendered = data.export(format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "export written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
