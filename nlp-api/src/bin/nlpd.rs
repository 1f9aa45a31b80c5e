use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use nlp_api::{start_server, ServiceConfig};
use nlp_text::ContractionPolicy;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "nlpd", about = "Tokenize and stem text over HTTP")]
struct Cli {
    /// HTTP listening address
    #[arg(long, env = "NLPD_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// JSON configuration file
    #[arg(long, env = "NLPD_CONFIG")]
    config: Option<PathBuf>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "NLPD_MAX_BODY_BYTES")]
    max_body_bytes: Option<usize>,

    /// Shortest stem the stemmer may produce
    #[arg(long, env = "NLPD_MIN_STEM_LENGTH")]
    min_stem_length: Option<usize>,

    /// Apostrophe handling: drop-clitics or split
    #[arg(long, env = "NLPD_CONTRACTION_POLICY")]
    contraction_policy: Option<ContractionPolicy>,

    /// Stop word file, one word per line
    #[arg(long, env = "NLPD_STOP_WORDS")]
    stop_words: Option<PathBuf>,
}

impl Cli {
    fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_path(path)?,
            None => ServiceConfig::default(),
        };
        if let Some(max_body_bytes) = self.max_body_bytes {
            config.max_body_bytes = max_body_bytes;
        }
        if let Some(min_stem_length) = self.min_stem_length {
            config.analyzer.min_stem_length = min_stem_length;
        }
        if let Some(policy) = self.contraction_policy {
            config.analyzer.contraction_policy = policy;
        }
        if let Some(path) = &self.stop_words {
            config.stop_words_path = Some(path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_observability();

    let cli = Cli::parse();
    let config = cli.service_config()?;
    info!(
        max_body_bytes = config.max_body_bytes,
        min_stem_length = config.analyzer.min_stem_length,
        contraction_policy = config.analyzer.contraction_policy.name(),
        stop_words = ?config.stop_words_path,
        "Starting nlpd"
    );

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
        }
        info!("Shutdown signal received");
    };

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    info!("Listening on http://{}", cli.addr);
    start_server(listener, &config, shutdown).await?.await??;

    info!("Server stopped successfully");
    Ok(())
}

fn init_observability() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .json();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,nlp_api=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}
