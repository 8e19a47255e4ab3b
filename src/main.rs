use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use salary_engine::api::{AdjustmentResponse, AppState, EmployeeSummary, create_router};
use salary_engine::calculation::compute_adjustment;
use salary_engine::config::ConfigLoader;
use salary_engine::error::EngineResult;
use salary_engine::models::RawEmployeeInput;
use salary_engine::telemetry;
use salary_engine::validation::parse_employee_input;
use tracing::info;
use uuid::Uuid;

const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "salary-engine",
    about = "Validate employee data and compute salary readjustments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute one adjustment and print it as JSON
    Compute(ComputeArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Path to the service configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Employee age in years
    #[arg(long, allow_hyphen_values = true)]
    age: String,
    /// Gender code, M or F
    #[arg(long)]
    gender: String,
    /// Base salary before adjustment
    #[arg(long, allow_hyphen_values = true)]
    base_salary: String,
    /// Year the employee was hired
    #[arg(long, allow_hyphen_values = true)]
    hire_year: String,
    /// Employee registration number
    #[arg(long, allow_hyphen_values = true)]
    employee_id: String,
    /// Year to measure service against (defaults to the configured or calendar year)
    #[arg(long)]
    current_year: Option<i32>,
    /// Path to the service configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("error: {err}");
        for message in err.violation_messages() {
            eprintln!("  - {message}");
        }
        std::process::exit(1);
    }
}

async fn run_cli() -> EngineResult<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Compute(args) => run_compute(args),
    }
}

fn load_config(path: Option<PathBuf>) -> EngineResult<ConfigLoader> {
    let loader = match path {
        Some(path) => ConfigLoader::load(path)?,
        None if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
            ConfigLoader::load(DEFAULT_CONFIG_PATH)?
        }
        None => ConfigLoader::default(),
    };
    loader.with_env_overrides()
}

async fn run_server(args: ServeArgs) -> EngineResult<()> {
    let mut config = load_config(args.config)?.into_config();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.logging)?;

    let addr = config.server.socket_addr()?;
    let state = AppState::new(ConfigLoader::from_config(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "salary engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn run_compute(args: ComputeArgs) -> EngineResult<()> {
    let config = load_config(args.config)?.into_config();
    let current_year = args
        .current_year
        .unwrap_or_else(|| config.calculation.resolve_current_year());

    let raw = RawEmployeeInput::from_fields(
        args.age,
        args.gender,
        args.base_salary,
        args.hire_year,
        args.employee_id,
    );
    let employee = parse_employee_input(&raw)?;
    let result = compute_adjustment(&employee, current_year)?;

    let response = AdjustmentResponse {
        calculation_id: Uuid::new_v4(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        current_year,
        employee: EmployeeSummary::from(&employee),
        result,
    };
    let json = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}
