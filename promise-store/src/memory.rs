use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use promise_core::{
    CoreError, CoreResult, OrderAuthorityClient, OrderResult, OrderResultItem, Promise,
    PromiseSourceClient,
};
use tracing::debug;

use crate::datastore::PromiseRecord;

/// Promise provider answering from a fixed set of records
#[derive(Debug)]
pub struct InMemoryPromiseSource {
    name: String,
    records: HashMap<String, PromiseRecord>,
    available: AtomicBool,
}

impl InMemoryPromiseSource {
    pub fn new(name: &str, records: &[PromiseRecord]) -> Self {
        let mut by_item = HashMap::with_capacity(records.len());
        for record in records {
            // First record per item wins, a provider holds one promise per item
            by_item
                .entry(record.customer_order_item_id.clone())
                .or_insert_with(|| record.clone());
        }

        Self {
            name: name.to_string(),
            records: by_item,
            available: AtomicBool::new(true),
        }
    }

    /// Simulate an outage: every call fails until made available again
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

#[async_trait]
impl PromiseSourceClient for InMemoryPromiseSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_promise_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<Promise>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(CoreError::upstream(self.name.clone(), "service unavailable"));
        }

        debug!("{} lookup for {}", self.name, customer_order_item_id);
        Ok(self
            .records
            .get(customer_order_item_id)
            .map(|record| record.to_promise(&self.name)))
    }
}

/// Order authority over a fixed set of orders
#[derive(Debug)]
pub struct InMemoryOrderAuthority {
    items: HashMap<String, OrderResultItem>,
    orders: HashMap<String, OrderResult>,
    available: AtomicBool,
}

impl InMemoryOrderAuthority {
    pub fn new(orders: &[OrderResult]) -> Self {
        let mut items = HashMap::new();
        let mut by_id = HashMap::with_capacity(orders.len());

        for order in orders {
            for item in &order.customer_order_item_list {
                items.insert(item.customer_order_item_id.clone(), item.clone());
            }
            by_id.insert(order.order_id.clone(), order.clone());
        }

        Self {
            items,
            orders: by_id,
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> CoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CoreError::upstream("order-authority", "service unavailable"))
        }
    }
}

#[async_trait]
impl OrderAuthorityClient for InMemoryOrderAuthority {
    async fn get_customer_order_item_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<OrderResultItem>> {
        self.ensure_available()?;
        Ok(self.items.get(customer_order_item_id).cloned())
    }

    async fn get_customer_order_by_order_id(&self, order_id: &str) -> CoreResult<Option<OrderResult>> {
        self.ensure_available()?;
        Ok(self.orders.get(order_id).cloned())
    }
}
