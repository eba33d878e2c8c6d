use std::time::Duration;

use serde::Deserialize;

use folio_shared::clients::db::PoolOptions;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_db")]
    pub database_url: String,
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_db() -> String { "folio.db".into() }
fn default_pool_max_size() -> u32 { 8 }
fn default_busy_timeout_ms() -> u64 { 5000 }

impl AppConfig {
    /// Reads `FOLIO_STORE__*` environment variables, e.g.
    /// `FOLIO_STORE__DATABASE_URL`.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_source(
            config::Environment::with_prefix("FOLIO_STORE")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder().add_source(source).build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.pool_max_size,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("FOLIO_STORE")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::from_source(env(&[])).unwrap();
        assert_eq!(config.database_url, "folio.db");
        assert_eq!(config.pool_max_size, 8);
        assert_eq!(config.pool_options().busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_source(env(&[
            ("FOLIO_STORE__DATABASE_URL", "/var/lib/folio/folio.db"),
            ("FOLIO_STORE__POOL_MAX_SIZE", "2"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "/var/lib/folio/folio.db");
        assert_eq!(config.pool_max_size, 2);
        assert_eq!(config.busy_timeout_ms, 5000);
    }
}
