//! Hand-rolled collaborators shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use promise_core::{
    CoreError, CoreResult, OrderAuthorityClient, OrderCondition, OrderResult, OrderResultItem,
    OrderShipment, Promise, PromiseSourceClient, ShipmentItem,
};

pub const KNOWN_ITEM: &str = "111-7497023-2960775-1";
pub const KNOWN_ORDER: &str = "111-7497023-2960775";
pub const UNKNOWN_ITEM: &str = "900-0000000-0000000-1";

pub fn delivered_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap()
}

pub fn promise_for(item_id: &str, provider: &str) -> Promise {
    Promise::builder()
        .customer_order_item_id(item_id)
        .asin("B00ASIN001")
        .active(true)
        .promise_latest_arrival_date(Some(Utc.with_ymd_and_hms(2023, 5, 2, 0, 0, 0).unwrap()))
        .promise_provided_by(provider)
        .build()
}

pub fn result_item(item_id: &str, order_id: &str) -> OrderResultItem {
    OrderResultItem {
        customer_order_item_id: item_id.to_string(),
        order_id: order_id.to_string(),
        asin: "B00ASIN001".to_string(),
        merchant_id: "M1".to_string(),
        quantity: 1,
        title: "Kindle".to_string(),
        is_confidence_tracked: false,
        confidence: 0,
    }
}

pub fn shipment(id: &str, delivery_date: Option<DateTime<Utc>>, items: &[&str]) -> OrderShipment {
    OrderShipment {
        shipment_id: id.to_string(),
        delivery_date,
        customer_shipment_items: items
            .iter()
            .map(|item| ShipmentItem { customer_order_item_id: item.to_string(), quantity: 1 })
            .collect(),
    }
}

pub fn order(order_id: &str, items: Vec<OrderResultItem>, shipments: Vec<OrderShipment>) -> OrderResult {
    OrderResult {
        order_id: order_id.to_string(),
        customer_id: "A2LSFLRO1YRVG5".to_string(),
        marketplace_id: "1".to_string(),
        order_condition: OrderCondition::Closed,
        ship_option: "second".to_string(),
        order_date: Utc.with_ymd_and_hms(2023, 4, 27, 8, 30, 0).unwrap(),
        customer_order_item_list: items,
        order_shipment_list: shipments,
    }
}

/// Order authority holding a fixed set of orders
#[derive(Default)]
pub struct StubAuthority {
    items: HashMap<String, OrderResultItem>,
    orders: HashMap<String, OrderResult>,
    pub failing: bool,
    pub item_lookups: AtomicUsize,
}

impl StubAuthority {
    pub fn with_order(mut self, order: OrderResult) -> Self {
        for item in &order.customer_order_item_list {
            self.items.insert(item.customer_order_item_id.clone(), item.clone());
        }
        self.orders.insert(order.order_id.clone(), order);
        self
    }

    /// Knows the item but not the order it points at
    pub fn with_orphan_item(mut self, item: OrderResultItem) -> Self {
        self.items.insert(item.customer_order_item_id.clone(), item);
        self
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Default::default() }
    }

    pub fn lookups(&self) -> usize {
        self.item_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderAuthorityClient for StubAuthority {
    async fn get_customer_order_item_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<OrderResultItem>> {
        self.item_lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(CoreError::upstream("OMA", "connection refused"));
        }
        Ok(self.items.get(customer_order_item_id).cloned())
    }

    async fn get_customer_order_by_order_id(&self, order_id: &str) -> CoreResult<Option<OrderResult>> {
        if self.failing {
            return Err(CoreError::upstream("OMA", "connection refused"));
        }
        Ok(self.orders.get(order_id).cloned())
    }
}

/// Promise source returning at most one canned promise
pub struct StubSource {
    name: String,
    promise: Option<Promise>,
    failing: bool,
}

impl StubSource {
    pub fn returning(name: &str, promise: Promise) -> Self {
        Self { name: name.to_string(), promise: Some(promise), failing: false }
    }

    pub fn empty(name: &str) -> Self {
        Self { name: name.to_string(), promise: None, failing: false }
    }

    pub fn failing(name: &str) -> Self {
        Self { name: name.to_string(), promise: None, failing: true }
    }
}

#[async_trait]
impl PromiseSourceClient for StubSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_promise_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<Promise>> {
        if self.failing {
            return Err(CoreError::upstream(self.name.clone(), "timed out"));
        }
        Ok(self
            .promise
            .clone()
            .filter(|promise| promise.customer_order_item_id() == customer_order_item_id))
    }
}
