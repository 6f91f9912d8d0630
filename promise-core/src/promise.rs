use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::CoreResult;

/// A delivery commitment for one order item, as issued by one provider.
///
/// Everything except the delivery date is fixed once the source hands the
/// record over. The delivery date is stamped afterwards by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Promise {
    customer_order_item_id: String,
    asin: String,
    is_active: bool,
    promise_effective_date: Option<DateTime<Utc>>,
    promise_latest_ship_date: Option<DateTime<Utc>>,
    promise_latest_arrival_date: Option<DateTime<Utc>>,
    delivery_date: Option<DateTime<Utc>>,
    promise_provided_by: String,
}

impl Promise {
    pub fn builder() -> PromiseBuilder {
        PromiseBuilder::default()
    }

    pub fn customer_order_item_id(&self) -> &str {
        &self.customer_order_item_id
    }

    pub fn asin(&self) -> &str {
        &self.asin
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn promise_effective_date(&self) -> Option<DateTime<Utc>> {
        self.promise_effective_date
    }

    pub fn promise_latest_ship_date(&self) -> Option<DateTime<Utc>> {
        self.promise_latest_ship_date
    }

    pub fn promise_latest_arrival_date(&self) -> Option<DateTime<Utc>> {
        self.promise_latest_arrival_date
    }

    /// Delivery date of the shipment that fulfilled this item, if known
    pub fn delivery_date(&self) -> Option<DateTime<Utc>> {
        self.delivery_date
    }

    pub fn promise_provided_by(&self) -> &str {
        &self.promise_provided_by
    }

    pub fn set_delivery_date(&mut self, delivery_date: Option<DateTime<Utc>>) {
        self.delivery_date = delivery_date;
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromiseBuilder {
    customer_order_item_id: String,
    asin: String,
    is_active: bool,
    promise_effective_date: Option<DateTime<Utc>>,
    promise_latest_ship_date: Option<DateTime<Utc>>,
    promise_latest_arrival_date: Option<DateTime<Utc>>,
    delivery_date: Option<DateTime<Utc>>,
    promise_provided_by: String,
}

impl PromiseBuilder {
    pub fn customer_order_item_id(mut self, id: impl Into<String>) -> Self {
        self.customer_order_item_id = id.into();
        self
    }

    pub fn asin(mut self, asin: impl Into<String>) -> Self {
        self.asin = asin.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn promise_effective_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.promise_effective_date = date;
        self
    }

    pub fn promise_latest_ship_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.promise_latest_ship_date = date;
        self
    }

    pub fn promise_latest_arrival_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.promise_latest_arrival_date = date;
        self
    }

    pub fn delivery_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.delivery_date = date;
        self
    }

    pub fn promise_provided_by(mut self, provider: impl Into<String>) -> Self {
        self.promise_provided_by = provider.into();
        self
    }

    pub fn build(self) -> Promise {
        Promise {
            customer_order_item_id: self.customer_order_item_id,
            asin: self.asin,
            is_active: self.is_active,
            promise_effective_date: self.promise_effective_date,
            promise_latest_ship_date: self.promise_latest_ship_date,
            promise_latest_arrival_date: self.promise_latest_arrival_date,
            delivery_date: self.delivery_date,
            promise_provided_by: self.promise_provided_by,
        }
    }
}

/// Any upstream service able to answer "is there a promise for this order item?"
#[async_trait]
pub trait PromiseSourceClient: Send + Sync {
    /// Provider name, used for logging
    fn name(&self) -> &str;

    /// Fetch the promise for an order item. `Ok(None)` means the source has no record.
    async fn get_promise_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<Promise>>;
}
