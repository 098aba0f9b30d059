use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::LocateError, model::IpLocation};

use super::{IpLocator, endpoint};

/// ipinfo.io `/json` lookup, no token.
#[derive(Debug, Clone)]
pub struct IpInfoClient {
    http: Client,
    url: String,
}

impl IpInfoClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            url: endpoint(base_url, "json"),
        }
    }
}

#[async_trait]
impl IpLocator for IpInfoClient {
    async fn locate(&self) -> Result<IpLocation, LocateError> {
        debug!(url = %self.url, "looking up location by IP");

        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocateError::Status(status));
        }

        Ok(res.json::<IpLocation>().await?)
    }
}
