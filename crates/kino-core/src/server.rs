//! Backend endpoint resolution
//!
//! Secure pages talk to the https endpoints and plain pages to the http ones.
//! Publishers may override each endpoint separately for both cases.

use crate::{params::PlayerParams, Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

const PLAYER_HOST: &str = "player.kino.video";
const HASTUR_HOST: &str = "l.kino.video";
const HASTUR_STAGING_HOST: &str = "l-staging.kino.video";

/// Resolved backend endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEndpoints {
    /// Content and metadata API
    pub api: Url,
    /// Stream authorization server
    pub auth: Url,
    /// Analytics reporting
    pub analytics: Url,
    /// Player event logging
    pub hastur: Url,
}

impl ServerEndpoints {
    /// Resolve endpoints for a page loaded over https (`is_ssl`) or http
    pub fn resolve(params: &PlayerParams, is_ssl: bool) -> Result<Self> {
        let scheme = if is_ssl { "https" } else { "http" };
        let pick = |plain: &Option<String>, ssl: &Option<String>| {
            if is_ssl {
                ssl.clone()
            } else {
                plain.clone()
            }
        };

        let hastur_host = if params.is_prod() {
            HASTUR_HOST
        } else {
            HASTUR_STAGING_HOST
        };

        Ok(Self {
            api: endpoint(
                "api",
                pick(&params.api_server, &params.api_ssl_server),
                format!("{}://{}", scheme, PLAYER_HOST),
            )?,
            auth: endpoint(
                "auth",
                pick(&params.auth_server, &params.auth_ssl_server),
                format!("{}://{}/sas", scheme, PLAYER_HOST),
            )?,
            analytics: endpoint(
                "analytics",
                pick(&params.analytics_server, &params.analytics_ssl_server),
                format!("{}://{}", scheme, PLAYER_HOST),
            )?,
            hastur: endpoint(
                "hastur",
                pick(&params.hastur_server, &params.hastur_ssl_server),
                format!("{}://{}/player_events", scheme, hastur_host),
            )?,
        })
    }
}

fn endpoint(name: &'static str, configured: Option<String>, default: String) -> Result<Url> {
    let value = configured.filter(|s| !s.is_empty()).unwrap_or(default);
    Url::parse(&value).map_err(|source| Error::InvalidEndpoint {
        name,
        value,
        source,
    })
}
