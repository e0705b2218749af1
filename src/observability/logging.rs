//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Resolve the log filter from environment and config
//! - Report the effective configuration once a subscriber is listening
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Output goes to stderr so command output on stdout stays machine readable

use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AdapterConfig;

/// Build the filter for `level`, letting `RUST_LOG` override it.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ingress_adapter={level}").into())
}

fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(level: &str) -> bool {
    build_subscriber(env_filter(level), std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install the global subscriber at the configured level, then report the
/// configuration it was built from.
pub fn init_logging_for(config: &AdapterConfig, source: Option<&Path>) -> bool {
    let installed = init_logging(&config.observability.log_level);
    log_config_loaded(config, source);
    installed
}

/// Emit the effective configuration as a structured event.
pub fn log_config_loaded(config: &AdapterConfig, source: Option<&Path>) {
    let source = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    tracing::debug!(
        source = %source,
        domain_suffix = %config.domain_suffix,
        ingress_class = %config.ingress_class,
        default_namespace = %config.default_namespace,
        "Configuration loaded"
    );
}
