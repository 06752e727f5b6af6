use tracing_subscriber::EnvFilter;

use delivery_query::config::Config;
use delivery_query::dataset;
use delivery_query::error::AppError;
use delivery_query::models::delivery::DeliveryType;
use delivery_query::query;
use delivery_query::query::PageRequest;

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let deliveries = match &config.data_path {
        Some(path) => dataset::load(path)?,
        None => dataset::sample(),
    };
    tracing::info!(count = deliveries.len(), "loaded delivery records");

    let paid = query::paid(&deliveries);
    tracing::info!(count = paid.len(), "paid deliveries");

    let active = query::not_finished(&deliveries);
    tracing::info!(count = active.len(), "deliveries still in progress");

    if let Some(first) = deliveries.first() {
        let infos: Vec<_> =
            query::delivery_infos_by_client(&deliveries, &first.client_id).collect();
        tracing::info!(
            client_id = %first.client_id,
            count = infos.len(),
            "deliveries for sample client"
        );
    }

    let express_from_city =
        query::deliveries_by_city_and_type(&deliveries, &config.report_city, DeliveryType::Express);
    tracing::info!(
        city = %config.report_city,
        count = express_from_city.len(),
        "express deliveries departing from report city"
    );

    let ordered = query::by_status_then_start_loading(&deliveries);
    if let Some(head) = ordered.first() {
        tracing::info!(
            id = %head.id,
            status = ?head.status,
            loading_start = %head.loading_period.start,
            "first delivery in status/loading order"
        );
    }

    tracing::info!(
        count = query::count_uniq_cargo_types(&deliveries),
        "distinct cargo types in fleet"
    );

    for (status, count) in query::counts_by_status(&deliveries) {
        tracing::info!(status = ?status, count, "deliveries per status");
    }

    for gap in query::average_travel_time_per_direction(&deliveries) {
        tracing::info!(
            start_city = %gap.start_city,
            end_city = %gap.end_city,
            average_minutes = gap.average_gap,
            "average travel time"
        );
    }

    let first_page = query::paginate(
        &deliveries,
        |delivery| delivery.loading_period.start,
        PageRequest {
            count_on_page: config.page_size,
            page_number: 1,
        },
    );
    tracing::info!(
        count = first_page.len(),
        page_size = config.page_size,
        "first page by loading start"
    );

    Ok(())
}
