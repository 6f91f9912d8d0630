use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreResult;

/// Order state as reported by the order authority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCondition {
    Pending,
    Processing,
    Closed,
    Cancelled,
}

/// Order-item metadata as the order authority returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResultItem {
    pub customer_order_item_id: String,
    pub order_id: String,
    pub asin: String,
    pub merchant_id: String,
    pub quantity: i32,
    pub title: String,
    #[serde(default)]
    pub is_confidence_tracked: bool,
    #[serde(default)]
    pub confidence: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipmentItem {
    pub customer_order_item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 { 1 }

/// A physical shipment; `delivery_date` stays empty until it is delivered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderShipment {
    pub shipment_id: String,
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub customer_shipment_items: Vec<ShipmentItem>,
}

impl OrderShipment {
    pub fn contains_item(&self, customer_order_item_id: &str) -> bool {
        self.customer_shipment_items
            .iter()
            .any(|item| item.customer_order_item_id == customer_order_item_id)
    }
}

/// Full order record, including its shipments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResult {
    pub order_id: String,
    pub customer_id: String,
    pub marketplace_id: String,
    pub order_condition: OrderCondition,
    pub ship_option: String,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub customer_order_item_list: Vec<OrderResultItem>,
    #[serde(default)]
    pub order_shipment_list: Vec<OrderShipment>,
}

/// Source of truth for order and shipment structure
#[async_trait]
pub trait OrderAuthorityClient: Send + Sync {
    async fn get_customer_order_item_by_order_item_id(
        &self,
        customer_order_item_id: &str,
    ) -> CoreResult<Option<OrderResultItem>>;

    async fn get_customer_order_by_order_id(
        &self,
        order_id: &str,
    ) -> CoreResult<Option<OrderResult>>;
}
