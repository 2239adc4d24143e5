use anyhow::Context;
use clap::Parser;
use livehub_domain::CliOverrides;
use livehub_jobs::{CalendarSeedJob, JobRunner};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "livehub")]
#[command(version)]
#[command(about = "LiveHub - live-streaming admin backend with visitor analytics")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting LiveHub v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos, &config);

    let shutdown = CancellationToken::new();

    let calendar_start = config
        .analytics
        .calendar_start_date()
        .context("analytics.calendar_start is not a valid date")?;
    let calendar_seed = CalendarSeedJob::new(
        use_cases.seed_calendar.clone(),
        calendar_start,
        config.analytics.calendar_days_ahead,
    )
    .with_interval(config.analytics.seed_interval_secs)
    .with_run_on_startup(config.analytics.seed_on_startup);

    let job_handles = JobRunner::new()
        .with_calendar_seed(calendar_seed)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::spawn(server::shutdown_signal(shutdown.clone()));

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .with_context(|| {
            format!(
                "invalid bind address {}:{}",
                config.server.bind_address, config.server.web_port
            )
        })?;

    let served = server::start_web_server(web_addr, use_cases.app_state(), shutdown.clone()).await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job terminated abnormally");
        }
    }

    served?;
    info!("Server shutdown complete");
    Ok(())
}
