pub mod app_config;
pub mod datastore;
pub mod memory;

pub use datastore::{Datastore, PromiseRecord};
pub use memory::{InMemoryOrderAuthority, InMemoryPromiseSource};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read datastore {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse datastore: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No promise records for provider: {0}")]
    UnknownProvider(String),
}
