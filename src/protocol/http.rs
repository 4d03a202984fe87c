// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for the appliance.

use std::net::Ipv6Addr;
use std::time::Duration;

use reqwest::{Client, Url};
use reqwest::header::CONTENT_TYPE;

use crate::error::{Error, TransportError};
use crate::protocol::{Protocol, RemoteCommand};
use crate::state::{DeviceState, TelemetrySnapshot};

/// Path of the command endpoint.
const REMOTE_PATH: &str = "/remote";

/// Path of the status endpoint.
const STATUS_PATH: &str = "/status";

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for reaching the appliance over HTTP.
///
/// # Examples
///
/// ```
/// use pac_adapter::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.103")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url().unwrap(), "http://192.168.1.103:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the appliance
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    ///
    /// The host may carry an `http://` or `https://` scheme and a port. A
    /// bare IPv6 literal is bracketed. A non-default configured port is
    /// applied when the host names none.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidAddress` if the host is empty, does
    /// not parse as a URL authority, carries a path, query or credentials,
    /// or names a port that conflicts with the configured one.
    pub fn base_url(&self) -> Result<String, TransportError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(TransportError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let candidate = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else if host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{host}]")
        } else {
            format!("http://{host}")
        };

        let mut url = Url::parse(&candidate)
            .map_err(|e| TransportError::InvalidAddress(format!("{host}: {e}")))?;

        if url.path() != "/"
            || url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(TransportError::InvalidAddress(format!(
                "{host}: must not contain a path, query or credentials"
            )));
        }

        match url.port() {
            None if self.port != Self::DEFAULT_PORT => {
                url.set_port(Some(self.port)).map_err(|()| {
                    TransportError::InvalidAddress(format!("{host}: cannot carry a port"))
                })?;
            }
            Some(port) if self.port != Self::DEFAULT_PORT && port != self.port => {
                return Err(TransportError::InvalidAddress(format!(
                    "{host}: port {port} conflicts with configured port {}",
                    self.port
                )));
            }
            _ => {}
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        let base_url = self.base_url()?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

// ============================================================================
// HttpClient - Push/pull over HTTP
// ============================================================================

/// HTTP client for the appliance's `/remote` and `/status` endpoints.
///
/// Each call is an independent request; the client holds no device state.
///
/// # Examples
///
/// ```no_run
/// use pac_adapter::protocol::{HttpClient, Protocol};
/// use pac_adapter::state::DeviceState;
///
/// # async fn example() -> pac_adapter::Result<()> {
/// let client = HttpClient::new("192.168.1.103")?;
/// client.push(&DeviceState::new()).await?;
/// let telemetry = client.pull().await?;
/// println!("{} °C", telemetry.current_temperature());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client with default port and timeout.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the appliance, optionally
    ///   with an `http://` scheme and port
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the appliance.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            // Safe: configured timeouts are far below u64::MAX milliseconds
            #[allow(clippy::cast_possible_truncation)]
            let millis = self.timeout.as_millis() as u64;
            TransportError::Timeout(millis)
        } else {
            TransportError::Http(err)
        }
    }
}

fn status_error(status: reqwest::StatusCode) -> TransportError {
    TransportError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}

impl Protocol for HttpClient {
    async fn push(&self, state: &DeviceState) -> Result<(), TransportError> {
        let url = self.url(REMOTE_PATH);
        let body = RemoteCommand::from(state)
            .to_json()
            .map_err(TransportError::Encode)?;

        tracing::debug!(url = %url, payload = %body, "Pushing state");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Push answered");

        if !status.is_success() {
            return Err(status_error(status));
        }

        Ok(())
    }

    async fn pull(&self) -> Result<TelemetrySnapshot, Error> {
        let url = self.url(STATUS_PATH);

        tracing::debug!(url = %url, "Pulling status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(status_error(response.status()).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(body = %body, "Received status");

        Ok(TelemetrySnapshot::from_json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.103");
        assert_eq!(config.host(), "192.168.1.103");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_base_url() {
        assert_eq!(
            HttpConfig::new("192.168.1.103").base_url().unwrap(),
            "http://192.168.1.103"
        );
        assert_eq!(
            HttpConfig::new("192.168.1.103")
                .with_port(8080)
                .base_url()
                .unwrap(),
            "http://192.168.1.103:8080"
        );
        assert_eq!(
            HttpConfig::new("pac.local:8081").base_url().unwrap(),
            "http://pac.local:8081"
        );
    }

    #[test]
    fn http_config_keeps_explicit_scheme() {
        let config = HttpConfig::new("http://127.0.0.1:4321/");
        assert_eq!(config.base_url().unwrap(), "http://127.0.0.1:4321");
    }

    #[test]
    fn explicit_scheme_takes_configured_port() {
        let config = HttpConfig::new("http://10.0.0.7").with_port(8080);
        assert_eq!(config.base_url().unwrap(), "http://10.0.0.7:8080");

        let config = HttpConfig::new("https://pac.local/").with_port(8443);
        assert_eq!(config.base_url().unwrap(), "https://pac.local:8443");
    }

    #[test]
    fn address_port_wins_over_default_port() {
        let config = HttpConfig::new("http://10.0.0.7:9000");
        assert_eq!(config.base_url().unwrap(), "http://10.0.0.7:9000");

        let config = HttpConfig::new("http://10.0.0.7:8080").with_port(8080);
        assert_eq!(config.base_url().unwrap(), "http://10.0.0.7:8080");
    }

    #[test]
    fn conflicting_ports_rejected() {
        let err = HttpConfig::new("http://10.0.0.7:9000")
            .with_port(8080)
            .base_url()
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidAddress(_)));
    }

    #[test]
    fn bare_ipv6_is_bracketed() {
        assert_eq!(
            HttpConfig::new("fe80::1").base_url().unwrap(),
            "http://[fe80::1]"
        );
        assert_eq!(
            HttpConfig::new("fe80::1").with_port(8080).base_url().unwrap(),
            "http://[fe80::1]:8080"
        );
        assert_eq!(
            HttpConfig::new("[fe80::1]:8080").base_url().unwrap(),
            "http://[fe80::1]:8080"
        );
    }

    #[test]
    fn malformed_addresses_rejected() {
        for address in ["bad host", "10.0.0.7/x?y", "http://10.0.0.7/api", "user:pw@pac.local"] {
            let err = HttpConfig::new(address).into_client().unwrap_err();
            assert!(
                matches!(err, TransportError::InvalidAddress(_)),
                "{address} should be rejected"
            );
        }
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::new("pac.local").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn empty_host_rejected() {
        let err = HttpConfig::new("  ").into_client().unwrap_err();
        assert!(matches!(err, TransportError::InvalidAddress(_)));
    }

    #[test]
    fn endpoint_urls() {
        let client = HttpClient::new("192.168.1.103").unwrap();
        assert_eq!(client.url(REMOTE_PATH), "http://192.168.1.103/remote");
        assert_eq!(client.url(STATUS_PATH), "http://192.168.1.103/status");
    }
}
