use chrono::{DateTime, Utc};
use promise_core::{OrderCondition, OrderResult, OrderResultItem};
use serde::Serialize;

/// One line item within a customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    customer_order_item_id: String,
    order_id: String,
    asin: String,
    merchant_id: String,
    quantity: i32,
    title: String,
    is_confidence_tracked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<i32>,
}

impl OrderItem {
    pub fn builder() -> OrderItemBuilder {
        OrderItemBuilder::default()
    }

    pub fn customer_order_item_id(&self) -> &str {
        &self.customer_order_item_id
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn asin(&self) -> &str {
        &self.asin
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_confidence_tracked(&self) -> bool {
        self.is_confidence_tracked
    }

    /// Confidence score, `None` unless tracked
    pub fn confidence(&self) -> Option<i32> {
        self.confidence
    }
}

impl From<&OrderResultItem> for OrderItem {
    fn from(item: &OrderResultItem) -> Self {
        OrderItem::builder()
            .customer_order_item_id(&item.customer_order_item_id)
            .order_id(&item.order_id)
            .asin(&item.asin)
            .merchant_id(&item.merchant_id)
            .quantity(item.quantity)
            .title(&item.title)
            .confidence_tracked(item.is_confidence_tracked)
            .confidence(item.confidence)
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderItemBuilder {
    customer_order_item_id: String,
    order_id: String,
    asin: String,
    merchant_id: String,
    quantity: i32,
    title: String,
    is_confidence_tracked: bool,
    confidence: i32,
}

impl OrderItemBuilder {
    pub fn customer_order_item_id(mut self, id: impl Into<String>) -> Self {
        self.customer_order_item_id = id.into();
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    pub fn asin(mut self, asin: impl Into<String>) -> Self {
        self.asin = asin.into();
        self
    }

    pub fn merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = merchant_id.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn confidence_tracked(mut self, tracked: bool) -> Self {
        self.is_confidence_tracked = tracked;
        self
    }

    pub fn confidence(mut self, confidence: i32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn build(self) -> OrderItem {
        OrderItem {
            customer_order_item_id: self.customer_order_item_id,
            order_id: self.order_id,
            asin: self.asin,
            merchant_id: self.merchant_id,
            quantity: self.quantity,
            title: self.title,
            is_confidence_tracked: self.is_confidence_tracked,
            confidence: self.is_confidence_tracked.then_some(self.confidence),
        }
    }
}

/// A customer order. Items are owned by the order and only handed out as a
/// shared slice, so nobody outside can reorder or edit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: String,
    customer_id: String,
    marketplace_id: String,
    condition: OrderCondition,
    customer_order_item_list: Vec<OrderItem>,
    ship_option: String,
    order_date: DateTime<Utc>,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn marketplace_id(&self) -> &str {
        &self.marketplace_id
    }

    pub fn condition(&self) -> OrderCondition {
        self.condition
    }

    pub fn customer_order_items(&self) -> &[OrderItem] {
        &self.customer_order_item_list
    }

    pub fn ship_option(&self) -> &str {
        &self.ship_option
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }
}

impl From<&OrderResult> for Order {
    fn from(result: &OrderResult) -> Self {
        Order::builder()
            .order_id(&result.order_id)
            .customer_id(&result.customer_id)
            .marketplace_id(&result.marketplace_id)
            .condition(result.order_condition)
            .customer_order_items(result.customer_order_item_list.iter().map(OrderItem::from).collect())
            .ship_option(&result.ship_option)
            .order_date(result.order_date)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct OrderBuilder {
    order_id: String,
    customer_id: String,
    marketplace_id: String,
    condition: OrderCondition,
    customer_order_item_list: Vec<OrderItem>,
    ship_option: String,
    order_date: DateTime<Utc>,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            customer_id: String::new(),
            marketplace_id: String::new(),
            condition: OrderCondition::Pending,
            customer_order_item_list: Vec::new(),
            ship_option: String::new(),
            order_date: DateTime::<Utc>::default(),
        }
    }
}

impl OrderBuilder {
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    pub fn marketplace_id(mut self, marketplace_id: impl Into<String>) -> Self {
        self.marketplace_id = marketplace_id.into();
        self
    }

    pub fn condition(mut self, condition: OrderCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn customer_order_items(mut self, items: Vec<OrderItem>) -> Self {
        self.customer_order_item_list = items;
        self
    }

    pub fn ship_option(mut self, ship_option: impl Into<String>) -> Self {
        self.ship_option = ship_option.into();
        self
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    pub fn build(self) -> Order {
        Order {
            order_id: self.order_id,
            customer_id: self.customer_id,
            marketplace_id: self.marketplace_id,
            condition: self.condition,
            customer_order_item_list: self.customer_order_item_list,
            ship_option: self.ship_option,
            order_date: self.order_date,
        }
    }
}
