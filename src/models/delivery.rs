use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeliveryStatus {
    Created,
    InProcess,
    Cancelled,
    Done,
}

impl DeliveryStatus {
    /// A terminal delivery is no longer handled by the system.
    pub fn is_terminal(self) -> bool {
        matches!(self, DeliveryStatus::Cancelled | DeliveryStatus::Done)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeliveryType {
    Standard,
    Express,
    Overnight,
    International,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CargoType {
    General,
    Perishable,
    Fragile,
    Hazardous,
    Oversized,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Direction {
    pub origin: Location,
    pub destination: Location,
}

/// Loading always has a known start; the end is open until loading finishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingPeriod {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArrivalPeriod {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    pub client_id: String,
    pub payment_id: Option<Uuid>,
    pub status: DeliveryStatus,
    pub kind: DeliveryType,
    pub cargo_type: CargoType,
    pub direction: Direction,
    pub loading_period: LoadingPeriod,
    pub arrival_period: ArrivalPeriod,
}
