use tracing::info;

use crate::{
    Config, error::LookupError, location::resolve_query, model::Report, provider::Services,
};

/// Resolve the place, geocode it, fetch its weather and assemble the report.
///
/// Stops at the first terminal error; the weather service is not called when
/// geocoding fails.
pub async fn current_conditions(
    argument: Option<String>,
    config: &Config,
    services: &Services,
) -> Result<Report, LookupError> {
    let query = resolve_query(
        argument,
        services.locator.as_ref(),
        &config.fallback_location,
    )
    .await;

    let location = services.geocoder.geocode(&query).await?;
    info!(
        latitude = location.latitude,
        longitude = location.longitude,
        address = %location.display_address,
        "geocoded"
    );

    let observation = services
        .weather
        .fetch(location.latitude, location.longitude)
        .await?;

    Ok(Report::new(location, observation))
}
