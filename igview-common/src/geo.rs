//! IP geolocation seam for the login activity view
//!
//! The resolver is an injected capability. Its failures never fail a
//! listing: each login whose lookup errors or times out shows
//! [`UNKNOWN_LOCATION`] instead.

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::normalize::LoginEvent;

/// Location shown when no lookup was made or the lookup failed
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Geolocation lookup errors
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Geolocation disabled")]
    Disabled,

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("No location known for {0}")]
    NoLocation(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Resolves an IP address to a free-text location
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn locate(&self, ip: &str) -> Result<String, GeoError>;
}

/// Resolver used when lookups are turned off in configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeoResolver;

#[async_trait]
impl GeoResolver for DisabledGeoResolver {
    async fn locate(&self, _ip: &str) -> Result<String, GeoError> {
        Err(GeoError::Disabled)
    }
}

/// A login event together with its resolved location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedLogin {
    pub event: LoginEvent,
    pub location: String,
}

/// Resolve the location of every login concurrently.
///
/// One lookup per event, each bounded by `timeout`. Returns once every
/// lookup has settled, in the order of `events`.
pub async fn locate_logins(
    events: Vec<LoginEvent>,
    resolver: &dyn GeoResolver,
    timeout: Duration,
) -> Vec<LocatedLogin> {
    let lookups = events.into_iter().map(move |event| async move {
        let location = match event.ip_address.as_deref() {
            None => UNKNOWN_LOCATION.to_string(),
            Some(ip) => locate_one(resolver, ip, timeout).await,
        };
        LocatedLogin { event, location }
    });

    join_all(lookups).await
}

async fn locate_one(resolver: &dyn GeoResolver, ip: &str, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, resolver.locate(ip)).await {
        Ok(Ok(location)) => {
            debug!(ip = %ip, location = %location, "Resolved login location");
            location
        }
        Ok(Err(GeoError::Disabled)) => UNKNOWN_LOCATION.to_string(),
        Ok(Err(e)) => {
            warn!(ip = %ip, error = %e, "Error fetching location for IP");
            UNKNOWN_LOCATION.to_string()
        }
        Err(_) => {
            warn!(ip = %ip, timeout_ms = timeout.as_millis() as u64, "Location lookup timed out");
            UNKNOWN_LOCATION.to_string()
        }
    }
}
