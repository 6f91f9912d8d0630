use std::sync::Arc;

use async_trait::async_trait;
use promise_core::{CoreResult, OrderAuthorityClient};
use tracing::debug;

use crate::dao::ReadOnlyDao;
use crate::models::Order;

/// Reads orders from the order authorities, first authority that knows the id wins
pub struct OrderDao {
    authorities: Vec<Arc<dyn OrderAuthorityClient>>,
}

impl OrderDao {
    pub fn new(authorities: Vec<Arc<dyn OrderAuthorityClient>>) -> Self {
        Self { authorities }
    }

    pub async fn get(&self, order_id: &str) -> CoreResult<Option<Order>> {
        for authority in &self.authorities {
            if let Some(result) = authority.get_customer_order_by_order_id(order_id).await? {
                return Ok(Some(Order::from(&result)));
            }
        }

        debug!("Order {} not found", order_id);
        Ok(None)
    }
}

#[async_trait]
impl ReadOnlyDao<Option<Order>> for OrderDao {
    async fn get(&self, id: &str) -> CoreResult<Option<Order>> {
        OrderDao::get(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn dao_with(authority: StubAuthority) -> OrderDao {
        OrderDao::new(vec![Arc::new(authority)])
    }

    #[tokio::test]
    async fn test_get_for_known_order_id_returns_order() {
        let dao = dao_with(StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![shipment("SHIP-1", Some(delivered_at()), &[KNOWN_ITEM])],
        )));

        let order = dao.get(KNOWN_ORDER).await.unwrap().expect("order should exist");

        assert_eq!(order.order_id(), KNOWN_ORDER);
        assert_eq!(order.customer_order_items().len(), 1);
        assert_eq!(order.customer_order_items()[0].customer_order_item_id(), KNOWN_ITEM);
    }

    #[tokio::test]
    async fn test_get_for_unknown_order_id_returns_none() {
        let dao = dao_with(StubAuthority::default());
        assert!(dao.get("900-0000000-0000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authority_failure_propagates() {
        let dao = dao_with(StubAuthority::failing());
        assert!(dao.get(KNOWN_ORDER).await.is_err());
    }
}
