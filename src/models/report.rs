use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::delivery::{
    ArrivalPeriod, CargoType, Delivery, DeliveryStatus, DeliveryType, LoadingPeriod,
};

/// Flattened, read-only view of a delivery for client-facing listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryShortInfo {
    pub id: Uuid,
    pub start_city: String,
    pub end_city: String,
    pub client_id: String,
    pub kind: DeliveryType,
    pub loading_period: LoadingPeriod,
    pub arrival_period: ArrivalPeriod,
    pub status: DeliveryStatus,
    pub cargo_type: CargoType,
}

impl From<&Delivery> for DeliveryShortInfo {
    fn from(delivery: &Delivery) -> Self {
        Self {
            id: delivery.id,
            start_city: delivery.direction.origin.city.clone(),
            end_city: delivery.direction.destination.city.clone(),
            client_id: delivery.client_id.clone(),
            kind: delivery.kind,
            loading_period: delivery.loading_period,
            arrival_period: delivery.arrival_period,
            status: delivery.status,
            cargo_type: delivery.cargo_type,
        }
    }
}

/// Mean travel gap for one origin/destination city pair, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageGapsInfo {
    pub start_city: String,
    pub end_city: String,
    pub average_gap: f64,
}
