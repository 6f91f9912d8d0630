use std::sync::Arc;

use chrono::{DateTime, Utc};
use promise_core::{CoreResult, OrderAuthorityClient};
use tracing::debug;

/// Finds the delivery date of the shipment carrying a given order item.
///
/// Resolution is best effort: an item or order the authority does not know
/// yields `Ok(None)`. Only a failing authority call produces an error.
pub struct DeliveryDateResolver {
    authorities: Vec<Arc<dyn OrderAuthorityClient>>,
}

impl DeliveryDateResolver {
    pub fn new(authorities: Vec<Arc<dyn OrderAuthorityClient>>) -> Self {
        Self { authorities }
    }

    pub fn single(authority: Arc<dyn OrderAuthorityClient>) -> Self {
        Self::new(vec![authority])
    }

    /// Authorities are consulted in order; the first one whose order has a
    /// shipment containing the item answers, and the first matching shipment wins.
    pub async fn resolve(&self, customer_order_item_id: &str) -> CoreResult<Option<DateTime<Utc>>> {
        for authority in &self.authorities {
            let Some(item) = authority
                .get_customer_order_item_by_order_item_id(customer_order_item_id)
                .await?
            else {
                debug!("Order item {} unknown to authority", customer_order_item_id);
                continue;
            };

            let Some(order) = authority.get_customer_order_by_order_id(&item.order_id).await? else {
                debug!("Order {} for item {} not found", item.order_id, customer_order_item_id);
                continue;
            };

            if let Some(shipment) = order
                .order_shipment_list
                .iter()
                .find(|shipment| shipment.contains_item(customer_order_item_id))
            {
                debug!(
                    "Item {} shipped in {} (delivered: {:?})",
                    customer_order_item_id, shipment.shipment_id, shipment.delivery_date
                );
                return Ok(shipment.delivery_date);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use chrono::TimeZone;

    fn resolver_for(authority: StubAuthority) -> DeliveryDateResolver {
        DeliveryDateResolver::single(Arc::new(authority))
    }

    #[tokio::test]
    async fn test_resolves_matching_shipment() {
        let authority = StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![shipment("SHIP-1", Some(delivered_at()), &[KNOWN_ITEM])],
        ));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, Some(delivered_at()));
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_an_error() {
        let date = resolver_for(StubAuthority::default()).resolve(UNKNOWN_ITEM).await.unwrap();
        assert_eq!(date, None);
    }

    #[tokio::test]
    async fn test_missing_order_is_not_an_error() {
        let authority = StubAuthority::default().with_orphan_item(result_item(KNOWN_ITEM, "404-0000000-0000000"));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, None);
    }

    #[tokio::test]
    async fn test_no_matching_shipment_item() {
        let authority = StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![shipment("SHIP-1", Some(delivered_at()), &["111-7497023-2960775-2"])],
        ));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, None);
    }

    #[tokio::test]
    async fn test_skips_shipments_without_the_item() {
        let authority = StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![
                shipment("SHIP-1", Some(Utc.with_ymd_and_hms(2023, 4, 29, 9, 0, 0).unwrap()), &["111-7497023-2960775-2"]),
                shipment("SHIP-2", Some(delivered_at()), &["111-7497023-2960775-3", KNOWN_ITEM]),
            ],
        ));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, Some(delivered_at()));
    }

    #[tokio::test]
    async fn test_first_matching_shipment_wins() {
        let authority = StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![
                shipment("SHIP-1", Some(delivered_at()), &[KNOWN_ITEM]),
                shipment("SHIP-2", Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()), &[KNOWN_ITEM]),
            ],
        ));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, Some(delivered_at()));
    }

    #[tokio::test]
    async fn test_undelivered_shipment_resolves_to_none() {
        let authority = StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![
                shipment("SHIP-1", None, &[KNOWN_ITEM]),
                shipment("SHIP-2", Some(delivered_at()), &[KNOWN_ITEM]),
            ],
        ));

        let date = resolver_for(authority).resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, None);
    }

    #[tokio::test]
    async fn test_falls_through_to_next_authority() {
        let first = Arc::new(StubAuthority::default());
        let second = Arc::new(StubAuthority::default().with_order(order(
            KNOWN_ORDER,
            vec![result_item(KNOWN_ITEM, KNOWN_ORDER)],
            vec![shipment("SHIP-1", Some(delivered_at()), &[KNOWN_ITEM])],
        )));
        let authorities: Vec<Arc<dyn OrderAuthorityClient>> = vec![first.clone(), second.clone()];
        let resolver = DeliveryDateResolver::new(authorities);

        let date = resolver.resolve(KNOWN_ITEM).await.unwrap();

        assert_eq!(date, Some(delivered_at()));
        assert_eq!(first.lookups(), 1);
        assert_eq!(second.lookups(), 1);
    }

    #[tokio::test]
    async fn test_authority_failure_propagates() {
        let result = resolver_for(StubAuthority::failing()).resolve(KNOWN_ITEM).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_no_authorities_configured() {
        let resolver = DeliveryDateResolver::new(vec![]);
        assert_eq!(resolver.resolve(KNOWN_ITEM).await.unwrap(), None);
    }
}
