use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{auth::Auth, handle_entry, transport::Transport, Error, Result};

pub const ENV_API_URI: &str = "MIDONET_API_URI";
pub const ENV_AUTH_TOKEN: &str = "MIDONET_AUTH_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    /// api_uri is the root of the MidoNet REST API, e.g.
    /// `http://127.0.0.1:8181/midonet-api`.
    /// Required: true
    pub api_uri: Option<String>,

    /// token is an already-issued API token sent as `X-Auth-Token`.
    /// Requests go out unauthenticated when it is None.
    pub token: Option<String>,
}

impl ClientConfig {
    /// Read the configuration from `MIDONET_API_URI` and `MIDONET_AUTH_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            api_uri: lookup(ENV_API_URI),
            token: lookup(ENV_AUTH_TOKEN).filter(|t| !t.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let api_uri = handle_entry(&self.api_uri, "api_uri")?;
        if !(api_uri.starts_with("http://") || api_uri.starts_with("https://")) {
            log::error!(
                "[midonet-client {}:{}:ClientConfig::validate bad api_uri {api_uri}]",
                file!(),
                line!()
            );
            return Err(Error::Config(format!(
                "api_uri must be an http(s) URI, got {api_uri}"
            )));
        }
        Ok(())
    }

    /// Root URI without a trailing slash.
    pub fn api_uri(&self) -> Result<String> {
        let api_uri = handle_entry(&self.api_uri, "api_uri")?;
        Ok(api_uri.trim_end_matches('/').to_string())
    }

    /// Build the session context every resource is constructed with.
    pub fn into_auth(self, transport: Arc<dyn Transport>) -> Result<Auth> {
        self.validate()?;
        let auth = Auth::new(transport).with_base_uri(self.api_uri()?);
        match self.token {
            Some(token) => auth.with_token(token),
            None => Ok(auth),
        }
    }
}
