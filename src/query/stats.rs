use std::collections::{HashMap, HashSet};

use crate::models::delivery::{CargoType, Delivery, DeliveryStatus};
use crate::models::report::AverageGapsInfo;

pub fn count_uniq_cargo_types(deliveries: &[Delivery]) -> usize {
    deliveries
        .iter()
        .map(|delivery| delivery.cargo_type)
        .collect::<HashSet<CargoType>>()
        .len()
}

/// Counts deliveries per status. Only statuses present in the input
/// appear as keys.
pub fn counts_by_status(deliveries: &[Delivery]) -> HashMap<DeliveryStatus, usize> {
    let mut counts = HashMap::new();
    for delivery in deliveries {
        *counts.entry(delivery.status).or_insert(0) += 1;
    }
    counts
}

/// Mean gap between loading end and arrival start per city pair, in
/// minutes. Deliveries missing either endpoint are left out of every
/// group. Negative gaps are kept as-is. Output is sorted by city pair.
pub fn average_travel_time_per_direction(deliveries: &[Delivery]) -> Vec<AverageGapsInfo> {
    let mut gaps: HashMap<(String, String), (f64, usize)> = HashMap::new();

    for delivery in deliveries {
        let (Some(arrival_start), Some(loading_end)) =
            (delivery.arrival_period.start, delivery.loading_period.end)
        else {
            continue;
        };

        let minutes = (arrival_start - loading_end).num_seconds() as f64 / 60.0;
        let key = (
            delivery.direction.origin.city.clone(),
            delivery.direction.destination.city.clone(),
        );
        let entry = gaps.entry(key).or_insert((0.0, 0));
        entry.0 += minutes;
        entry.1 += 1;
    }

    let mut averages: Vec<AverageGapsInfo> = gaps
        .into_iter()
        .map(|((start_city, end_city), (total, count))| AverageGapsInfo {
            start_city,
            end_city,
            average_gap: total / count as f64,
        })
        .collect();

    averages.sort_by(|a, b| {
        a.start_city
            .cmp(&b.start_city)
            .then_with(|| a.end_city.cmp(&b.end_city))
    });
    averages
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::{average_travel_time_per_direction, count_uniq_cargo_types, counts_by_status};
    use crate::models::delivery::{
        ArrivalPeriod, CargoType, Delivery, DeliveryStatus, DeliveryType, Direction,
        LoadingPeriod, Location,
    };

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    fn delivery(id_seed: u128, status: DeliveryStatus, cargo_type: CargoType) -> Delivery {
        Delivery {
            id: Uuid::from_u128(id_seed),
            client_id: "acme".to_string(),
            payment_id: None,
            status,
            kind: DeliveryType::Standard,
            cargo_type,
            direction: Direction {
                origin: Location {
                    city: "Kyiv".to_string(),
                },
                destination: Location {
                    city: "Lviv".to_string(),
                },
            },
            loading_period: LoadingPeriod {
                start: at(8, 0),
                end: None,
            },
            arrival_period: ArrivalPeriod {
                start: None,
                end: None,
            },
        }
    }

    fn travelled(id_seed: u128, origin: &str, destination: &str, gap_minutes: i64) -> Delivery {
        let loading_end = at(9, 0);
        let mut result = delivery(id_seed, DeliveryStatus::Done, CargoType::General);
        result.direction = Direction {
            origin: Location {
                city: origin.to_string(),
            },
            destination: Location {
                city: destination.to_string(),
            },
        };
        result.loading_period.end = Some(loading_end);
        result.arrival_period.start = Some(loading_end + chrono::Duration::minutes(gap_minutes));
        result
    }

    #[test]
    fn counts_distinct_cargo_types() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Created, CargoType::General),
            delivery(2, DeliveryStatus::Created, CargoType::Fragile),
            delivery(3, DeliveryStatus::Created, CargoType::General),
            delivery(4, DeliveryStatus::Created, CargoType::Hazardous),
        ];

        assert_eq!(count_uniq_cargo_types(&deliveries), 3);
    }

    #[test]
    fn empty_input_has_zero_cargo_types() {
        assert_eq!(count_uniq_cargo_types(&[]), 0);
    }

    #[test]
    fn status_counts_cover_the_whole_input() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Created, CargoType::General),
            delivery(2, DeliveryStatus::Created, CargoType::General),
            delivery(3, DeliveryStatus::InProcess, CargoType::General),
            delivery(4, DeliveryStatus::Done, CargoType::General),
        ];

        let counts = counts_by_status(&deliveries);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&DeliveryStatus::Created], 2);
        assert_eq!(counts[&DeliveryStatus::InProcess], 1);
        assert_eq!(counts[&DeliveryStatus::Done], 1);
        assert!(!counts.contains_key(&DeliveryStatus::Cancelled));
        assert_eq!(counts.values().sum::<usize>(), deliveries.len());
    }

    #[test]
    fn averages_gap_per_city_pair() {
        let deliveries = vec![
            travelled(1, "Kyiv", "Lviv", 10),
            travelled(2, "Kyiv", "Lviv", 20),
            travelled(3, "Kharkiv", "Dnipro", 90),
        ];

        let averages = average_travel_time_per_direction(&deliveries);

        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].start_city, "Kharkiv");
        assert_eq!(averages[0].end_city, "Dnipro");
        assert_eq!(averages[0].average_gap, 90.0);
        assert_eq!(averages[1].start_city, "Kyiv");
        assert_eq!(averages[1].end_city, "Lviv");
        assert_eq!(averages[1].average_gap, 15.0);
    }

    #[test]
    fn deliveries_missing_endpoints_are_excluded() {
        let complete = travelled(1, "Kyiv", "Lviv", 30);
        let mut no_arrival = travelled(2, "Kyiv", "Lviv", 30);
        no_arrival.arrival_period.start = None;
        let mut no_loading_end = travelled(3, "Kyiv", "Lviv", 30);
        no_loading_end.loading_period.end = None;

        let averages = average_travel_time_per_direction(&[complete, no_arrival, no_loading_end]);

        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average_gap, 30.0);
    }

    #[test]
    fn arrival_before_loading_end_gives_negative_gap() {
        let averages = average_travel_time_per_direction(&[travelled(1, "Kyiv", "Lviv", -45)]);

        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average_gap, -45.0);
    }
}
