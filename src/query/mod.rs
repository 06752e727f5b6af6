pub mod filter;
pub mod order;
pub mod page;
pub mod stats;

pub use filter::{deliveries_by_city_and_type, delivery_infos_by_client, not_finished, paid};
pub use order::by_status_then_start_loading;
pub use page::{paginate, paginate_filtered, PageRequest};
pub use stats::{average_travel_time_per_direction, count_uniq_cargo_types, counts_by_status};
