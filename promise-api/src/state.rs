use std::sync::Arc;

use promise_core::{OrderAuthorityClient, PromiseSourceClient};
use promise_order::{DeliveryDateResolver, OrderDao, PromiseAggregator};
use promise_store::app_config::AggregationConfig;
use promise_store::{Datastore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub promise_dao: Arc<PromiseAggregator>,
    pub order_dao: Arc<OrderDao>,
}

impl AppState {
    pub fn new(promise_dao: PromiseAggregator, order_dao: OrderDao) -> Self {
        Self {
            promise_dao: Arc::new(promise_dao),
            order_dao: Arc::new(order_dao),
        }
    }

    /// Wire one in-memory client per configured provider, plus a single order authority
    pub fn from_datastore(datastore: &Datastore, aggregation: &AggregationConfig) -> Result<Self, StoreError> {
        let sources = aggregation
            .sources
            .iter()
            .map(|provider| {
                datastore
                    .promise_source(provider)
                    .map(|source| Arc::new(source) as Arc<dyn PromiseSourceClient>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let authority: Arc<dyn OrderAuthorityClient> = Arc::new(datastore.order_authority());

        tracing::info!(
            "Aggregating promises from {:?} ({:?} on failure)",
            aggregation.sources,
            aggregation.failure_policy
        );

        let promise_dao = PromiseAggregator::new(sources, DeliveryDateResolver::single(authority.clone()))
            .with_failure_policy(aggregation.failure_policy);
        let order_dao = OrderDao::new(vec![authority]);

        Ok(Self::new(promise_dao, order_dao))
    }
}
