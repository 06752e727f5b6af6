use std::cmp::Ordering;

use crate::models::delivery::Delivery;

/// Sorts by status lifecycle order, then by loading start for equal
/// statuses. The sort is stable: ties keep their input order.
pub fn by_status_then_start_loading(deliveries: &[Delivery]) -> Vec<Delivery> {
    let mut ordered = deliveries.to_vec();
    ordered.sort_by(compare_deliveries);
    ordered
}

fn compare_deliveries(a: &Delivery, b: &Delivery) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| a.loading_period.start.cmp(&b.loading_period.start))
}
