use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `FOLIO_ENV=production` switches to JSON lines.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Store crates log at debug, everything else at info.
fn default_directives(service_name: &str) -> String {
    format!("info,{}=debug,folio_shared=debug", service_name.replace('-', "_"))
}

pub fn init_tracing(service_name: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(service_name)));

    let format = LogFormat::from_env_value(std::env::var("FOLIO_ENV").ok().as_deref());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_target(true))
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact().with_target(false))
                .init();
        }
    }

    tracing::debug!(service = service_name, ?format, "tracing initialized");
}

/// Installs the global Prometheus recorder. Counters emitted by the store
/// before this call are dropped.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}
