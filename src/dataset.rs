use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::delivery::{
    ArrivalPeriod, CargoType, Delivery, DeliveryStatus, DeliveryType, Direction, LoadingPeriod,
    Location,
};

/// Reads a delivery collection from a JSON fixture file.
pub fn load(path: &Path) -> Result<Vec<Delivery>, AppError> {
    let raw = fs::read_to_string(path)?;
    let deliveries: Vec<Delivery> = serde_json::from_str(&raw)?;
    Ok(deliveries)
}

/// Built-in demo fleet used when no fixture path is configured.
pub fn sample() -> Vec<Delivery> {
    let loading = |hour: u32| -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    };

    vec![
        record(
            1,
            ("atlas-logistics", Some(101)),
            (
                DeliveryStatus::Done,
                DeliveryType::Express,
                CargoType::Perishable,
            ),
            ("Kyiv", "Lviv"),
            (loading(6), Some(loading(7))),
            Some(loading(7) + Duration::minutes(320)),
        ),
        record(
            2,
            ("atlas-logistics", Some(102)),
            (
                DeliveryStatus::Done,
                DeliveryType::Standard,
                CargoType::General,
            ),
            ("Kyiv", "Lviv"),
            (loading(8), Some(loading(9))),
            Some(loading(9) + Duration::minutes(380)),
        ),
        record(
            3,
            ("borys-trade", Some(103)),
            (
                DeliveryStatus::InProcess,
                DeliveryType::Express,
                CargoType::Fragile,
            ),
            ("Kyiv", "Odesa"),
            (loading(9), Some(loading(10))),
            None,
        ),
        record(
            4,
            ("borys-trade", None),
            (
                DeliveryStatus::Created,
                DeliveryType::Overnight,
                CargoType::Hazardous,
            ),
            ("Kharkiv", "Dnipro"),
            (loading(10), None),
            None,
        ),
        record(
            5,
            ("clover-foods", Some(104)),
            (
                DeliveryStatus::Cancelled,
                DeliveryType::Standard,
                CargoType::Perishable,
            ),
            ("Lviv", "Kyiv"),
            (loading(11), Some(loading(12))),
            None,
        ),
        record(
            6,
            ("clover-foods", None),
            (
                DeliveryStatus::InProcess,
                DeliveryType::International,
                CargoType::Oversized,
            ),
            ("Odesa", "Warsaw"),
            (loading(5), Some(loading(8))),
            Some(loading(8) + Duration::minutes(1440)),
        ),
        record(
            7,
            ("atlas-logistics", Some(105)),
            (
                DeliveryStatus::Created,
                DeliveryType::Express,
                CargoType::General,
            ),
            ("Kyiv", "Lviv"),
            (loading(13), None),
            None,
        ),
        record(
            8,
            ("dnipro-steel", Some(106)),
            (
                DeliveryStatus::Done,
                DeliveryType::Standard,
                CargoType::Oversized,
            ),
            ("Kharkiv", "Dnipro"),
            (loading(7), Some(loading(9))),
            Some(loading(9) + Duration::minutes(150)),
        ),
    ]
}

fn record(
    id_seed: u128,
    (client, payment_seed): (&str, Option<u128>),
    (status, kind, cargo_type): (DeliveryStatus, DeliveryType, CargoType),
    (origin, destination): (&str, &str),
    (loading_start, loading_end): (DateTime<Utc>, Option<DateTime<Utc>>),
    arrival_start: Option<DateTime<Utc>>,
) -> Delivery {
    Delivery {
        id: Uuid::from_u128(id_seed),
        client_id: client.to_string(),
        payment_id: payment_seed.map(Uuid::from_u128),
        status,
        kind,
        cargo_type,
        direction: Direction {
            origin: Location {
                city: origin.to_string(),
            },
            destination: Location {
                city: destination.to_string(),
            },
        },
        loading_period: LoadingPeriod {
            start: loading_start,
            end: loading_end,
        },
        arrival_period: ArrivalPeriod {
            start: arrival_start,
            end: arrival_start.map(|start| start + Duration::minutes(30)),
        },
    }
}
