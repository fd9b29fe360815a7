use clap::Parser;
use ipn_dns_application::use_cases::ResolveQueryUseCase;
use ipn_dns_domain::CliOverrides;
use ipn_dns_infrastructure::dns::query_logger::TracingQueryLogger;
use ipn_dns_infrastructure::dns::server::StubDnsHandler;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "ipn-dns")]
#[command(version)]
#[command(about = "Wildcard DNS stub server for IPN node-number records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Listen address
    #[arg(short = 'a', long)]
    address: Option<String>,

    /// Serve TCP alongside UDP (default: UDP only)
    #[arg(long)]
    tcp: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.address.clone(),
        tcp: cli.tcp.then_some(true),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting ipn-dns v{}", env!("CARGO_PKG_VERSION"));

    let table = Arc::new(config.record_table()?);
    for record in table.records() {
        info!(record = %record, "Record loaded");
    }

    let use_case = Arc::new(ResolveQueryUseCase::new(
        table,
        Arc::new(TracingQueryLogger),
    ));
    let handler = StubDnsHandler::new(use_case);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    server::start_dns_server(
        bind_addr,
        handler,
        config.server.tcp,
        Duration::from_secs(config.server.tcp_timeout_secs),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
