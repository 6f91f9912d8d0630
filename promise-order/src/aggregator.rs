use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use promise_core::{CoreResult, Promise, PromiseSourceClient};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::dao::ReadOnlyDao;
use crate::resolver::DeliveryDateResolver;

/// What to do when a promise source call fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole lookup with the first failing source's error
    #[default]
    Propagate,
    /// Log the failure and keep whatever the other sources returned
    Isolate,
}

/// Collects every promise the configured sources hold for an order item and
/// stamps each with the delivery date of the shipment that carried the item.
///
/// Sources are queried concurrently, but results are merged in the order the
/// sources were configured. Nothing is deduplicated.
pub struct PromiseAggregator {
    sources: Vec<Arc<dyn PromiseSourceClient>>,
    resolver: DeliveryDateResolver,
    failure_policy: FailurePolicy,
}

impl PromiseAggregator {
    pub fn new(sources: Vec<Arc<dyn PromiseSourceClient>>, resolver: DeliveryDateResolver) -> Self {
        Self {
            sources,
            resolver,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub async fn get(&self, customer_order_item_id: &str) -> CoreResult<Vec<Promise>> {
        let lookups = self
            .sources
            .iter()
            .map(|source| source.get_promise_by_order_item_id(customer_order_item_id));
        let results = join_all(lookups).await;

        let mut promises = Vec::with_capacity(self.sources.len());
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(Some(promise)) => promises.push(promise),
                Ok(None) => debug!("{} has no promise for {}", source.name(), customer_order_item_id),
                Err(e) => match self.failure_policy {
                    FailurePolicy::Propagate => return Err(e),
                    FailurePolicy::Isolate => {
                        warn!("Skipping promise source {} for {}: {}", source.name(), customer_order_item_id, e);
                    }
                },
            }
        }

        if promises.is_empty() {
            return Ok(promises);
        }

        // Same item for every promise, so one resolution covers them all
        let delivery_date = self.resolver.resolve(customer_order_item_id).await?;
        for promise in &mut promises {
            promise.set_delivery_date(delivery_date);
        }

        info!(
            "Found {} promise(s) for {} (delivered: {:?})",
            promises.len(),
            customer_order_item_id,
            delivery_date
        );
        Ok(promises)
    }
}

#[async_trait]
impl ReadOnlyDao<Vec<Promise>> for PromiseAggregator {
    async fn get(&self, id: &str) -> CoreResult<Vec<Promise>> {
        PromiseAggregator::get(self, id).await
    }
}
