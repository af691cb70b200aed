//! Company lookup proxy.
//!
//! ```bash
//! company-proxy us=http://localhost:9001 ru=http://localhost:9002
//! ```

use anyhow::Result;
use clap::Parser;
use company_proxy::config::{self, Config};
use company_proxy::server;
use tracing_subscriber::EnvFilter;

/// Caching proxy for per-country company registries.
#[derive(Parser)]
#[command(name = "company-proxy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend routes, e.g. `us=http://localhost:9001`
    #[arg(value_name = "COUNTRY=URL")]
    backends: Vec<String>,

    /// Bind address
    #[arg(long, env = "LISTEN", value_name = "HOST:PORT")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(&cli.backends, cli.listen)?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
