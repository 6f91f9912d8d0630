use promise_order::FailurePolicy;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub datastore: DatastoreConfig,
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatastoreConfig {
    /// JSON file backing the in-memory service clients
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AggregationConfig {
    /// Promise providers to query, in result order
    pub sources: Vec<String>,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(Self::environment())
            .build()?;

        s.try_deserialize()
    }

    /// Eg.. `PROMISE__AGGREGATION__FAILURE_POLICY=isolate`, `PROMISE__AGGREGATION__SOURCES=OFS,DPS`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("PROMISE")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("aggregation.sources")
            .try_parsing(true)
    }
}
