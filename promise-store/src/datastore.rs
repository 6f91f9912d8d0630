use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use promise_core::{OrderResult, Promise};
use serde::Deserialize;
use tracing::info;

use crate::memory::{InMemoryOrderAuthority, InMemoryPromiseSource};
use crate::StoreError;

/// Promise record as a provider stores it
#[derive(Debug, Clone, Deserialize)]
pub struct PromiseRecord {
    pub customer_order_item_id: String,
    pub asin: String,
    #[serde(default)]
    pub is_active: bool,
    pub promise_effective_date: Option<DateTime<Utc>>,
    pub promise_latest_ship_date: Option<DateTime<Utc>>,
    pub promise_latest_arrival_date: Option<DateTime<Utc>>,
    pub promise_provided_by: Option<String>,
}

impl PromiseRecord {
    /// Delivery date is never known to a provider; it is left for the aggregator
    pub fn to_promise(&self, provider: &str) -> Promise {
        Promise::builder()
            .customer_order_item_id(&self.customer_order_item_id)
            .asin(&self.asin)
            .active(self.is_active)
            .promise_effective_date(self.promise_effective_date)
            .promise_latest_ship_date(self.promise_latest_ship_date)
            .promise_latest_arrival_date(self.promise_latest_arrival_date)
            .delivery_date(None)
            .promise_provided_by(self.promise_provided_by.as_deref().unwrap_or(provider))
            .build()
    }
}

/// Snapshot of every upstream service's data, loaded from a JSON document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datastore {
    /// Promise records keyed by provider name
    #[serde(default)]
    pub promises: HashMap<String, Vec<PromiseRecord>>,
    #[serde(default)]
    pub orders: Vec<OrderResult>,
}

impl Datastore {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io { path: path.display().to_string(), source })?;

        let datastore = Self::from_json(&contents)?;
        info!(
            "Loaded datastore {}: {} provider(s), {} order(s)",
            path.display(),
            datastore.promises.len(),
            datastore.orders.len()
        );
        Ok(datastore)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn promise_source(&self, provider: &str) -> Result<InMemoryPromiseSource, StoreError> {
        let records = self
            .promises
            .get(provider)
            .ok_or_else(|| StoreError::UnknownProvider(provider.to_string()))?;
        Ok(InMemoryPromiseSource::new(provider, records))
    }

    pub fn order_authority(&self) -> InMemoryOrderAuthority {
        InMemoryOrderAuthority::new(&self.orders)
    }
}
