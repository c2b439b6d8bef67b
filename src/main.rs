//! Server binary.
//!
//! ```bash
//! # Start with settings from the environment / .env
//! cargo run
//!
//! # Override the listen address and public base URL
//! cargo run -- --listen 127.0.0.1:8080 --base-url https://s.example.com
//!
//! # Validate configuration and exit
//! cargo run -- --check-config
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url_shortener::config::Config;
use url_shortener::server;

/// In-memory URL shortener with expiring links and click statistics.
#[derive(Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Public prefix for short URLs, overrides BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Print the configuration summary and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    init_tracing(&config);
    config.validate()?;
    config.print_summary();

    if cli.check_config {
        return Ok(());
    }

    server::run(config).await
}

/// Installs the global subscriber. `RUST_LOG` directives win over the
/// configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
