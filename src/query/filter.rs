use crate::models::delivery::{Delivery, DeliveryType};
use crate::models::report::DeliveryShortInfo;

const CITY_TYPE_RESULT_LIMIT: usize = 10;

pub fn paid(deliveries: &[Delivery]) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|delivery| delivery.payment_id.is_some())
        .cloned()
        .collect()
}

pub fn not_finished(deliveries: &[Delivery]) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|delivery| !delivery.status.is_terminal())
        .cloned()
        .collect()
}

/// Lazy projection of one client's deliveries. The `client_id` match is
/// exact and case-sensitive.
pub fn delivery_infos_by_client<'a>(
    deliveries: &'a [Delivery],
    client_id: &'a str,
) -> impl Iterator<Item = DeliveryShortInfo> + 'a {
    deliveries
        .iter()
        .filter(move |delivery| delivery.client_id == client_id)
        .map(DeliveryShortInfo::from)
}

/// Returns at most the first 10 matches, in input order.
pub fn deliveries_by_city_and_type(
    deliveries: &[Delivery],
    city_name: &str,
    kind: DeliveryType,
) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|delivery| delivery.kind == kind && delivery.direction.origin.city == city_name)
        .take(CITY_TYPE_RESULT_LIMIT)
        .cloned()
        .collect()
}
