pub mod models;
pub mod dao;
pub mod resolver;
pub mod aggregator;
pub mod order_dao;

#[cfg(test)]
mod testing;

pub use models::{Order, OrderItem};
pub use dao::ReadOnlyDao;
pub use resolver::DeliveryDateResolver;
pub use aggregator::{FailurePolicy, PromiseAggregator};
pub use order_dao::OrderDao;
