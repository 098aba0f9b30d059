use tracing::{debug, info};

use crate::provider::IpLocator;

/// Pick the place to look up: the explicit argument verbatim, else the caller's
/// IP-derived city, else `fallback`. Never fails.
pub async fn resolve_query(
    argument: Option<String>,
    locator: &dyn IpLocator,
    fallback: &str,
) -> String {
    if let Some(place) = argument {
        return place;
    }

    match locator.locate().await {
        Ok(location) => match location.query() {
            Some(place) => {
                info!(%place, "resolved location from IP");
                place
            }
            None => {
                debug!(?location, "IP lookup lacks city or country, using fallback");
                fallback.to_string()
            }
        },
        Err(err) => {
            debug!(error = %err, "IP lookup failed, using fallback");
            fallback.to_string()
        }
    }
}
