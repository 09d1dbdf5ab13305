//! ipinfo.io geolocation client
//!
//! One GET per lookup, no cache and no retry. Failures surface as
//! [`GeoError`] and are turned into "Unknown Location" by the caller.

use async_trait::async_trait;
use igview_common::config::GeolocationConfig;
use igview_common::geo::{GeoError, GeoResolver};
use serde::Deserialize;
use std::net::IpAddr;

const USER_AGENT: &str = concat!("igview/", env!("CARGO_PKG_VERSION"));

/// Subset of the ipinfo.io `/{ip}/json` response used for display
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpInfoResponse {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl IpInfoResponse {
    /// "city, region, country" from the fields present, or `None` if there are none
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// ipinfo.io API client
pub struct IpInfoClient {
    http_client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl IpInfoClient {
    pub fn new(config: &GeolocationConfig) -> Result<Self, GeoError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| GeoError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl GeoResolver for IpInfoClient {
    async fn locate(&self, ip: &str) -> Result<String, GeoError> {
        let addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidAddress(ip.to_string()))?;

        let url = format!("{}/{}/json", self.base_url, addr);
        tracing::debug!(ip = %addr, url = %url, "Querying ipinfo");

        let mut request = self.http_client.get(&url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GeoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeoError::Api(status.as_u16(), error_text));
        }

        let info: IpInfoResponse = response
            .json()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))?;

        info.location()
            .ok_or_else(|| GeoError::NoLocation(addr.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(city: Option<&str>, region: Option<&str>, country: Option<&str>) -> IpInfoResponse {
        IpInfoResponse {
            city: city.map(str::to_string),
            region: region.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn test_location_all_fields() {
        let info = response(Some("Berlin"), Some("Land Berlin"), Some("DE"));
        assert_eq!(info.location().as_deref(), Some("Berlin, Land Berlin, DE"));
    }

    #[test]
    fn test_location_partial_fields() {
        let info = response(None, Some(""), Some("US"));
        assert_eq!(info.location().as_deref(), Some("US"));
    }

    #[test]
    fn test_location_no_fields() {
        assert_eq!(IpInfoResponse::default().location(), None);
    }

    #[test]
    fn test_client_creation() {
        assert!(IpInfoClient::new(&GeolocationConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_address_makes_no_request() {
        let config = GeolocationConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let client = IpInfoClient::new(&config).unwrap();
        let err = client.locate("not-an-ip").await.unwrap_err();
        assert!(matches!(err, GeoError::InvalidAddress(_)));
    }
}
