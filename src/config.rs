// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory configuration.
//!
//! The host hands each accessory a JSON block. Besides the fields used here
//! it may contain host-specific keys (such as `"accessory"`), which are
//! ignored.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
#[cfg(feature = "http")]
use crate::protocol::HttpConfig;

/// Configuration for one air-conditioner accessory.
///
/// # Examples
///
/// ```
/// use pac_adapter::AccessoryConfig;
///
/// let config = AccessoryConfig::from_json(r#"{
///     "accessory": "PortableAirConditioner",
///     "name": "Bedroom Cooler",
///     "manufacturer": "ACME",
///     "model": "PAC-9000",
///     "serial": "000123",
///     "address": "192.168.1.103"
/// }"#).unwrap();
///
/// assert_eq!(config.name, "Bedroom Cooler");
/// assert_eq!(config.port, 80);
///
/// // Programmatic construction
/// let config = AccessoryConfig::new("Office Cooler", "pac.local")
///     .with_manufacturer("ACME")
///     .with_port(8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryConfig {
    /// Display name shown by the host.
    pub name: String,
    /// Manufacturer string for the accessory information service.
    #[serde(default)]
    pub manufacturer: String,
    /// Model string for the accessory information service.
    #[serde(default)]
    pub model: String,
    /// Serial number for the accessory information service.
    #[serde(default)]
    pub serial: String,
    /// Hostname or IP address of the appliance.
    pub address: String,
    /// HTTP port of the appliance.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_port() -> u16 {
    80
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl AccessoryConfig {
    /// Creates a configuration with the required fields and defaults for the rest.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: String::new(),
            model: String::new(),
            serial: String::new(),
            address: address.into(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Parses and validates a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the JSON is malformed or lacks a
    /// required key, and the errors of [`validate`](Self::validate)
    /// otherwise.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive an appliance.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first blank required
    /// field, and `ConfigError::InvalidField` for a zero timeout or an
    /// address that does not resolve to a base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingField("name"));
        }
        if self.address.trim().is_empty() {
            return Err(ConfigError::MissingField("address"));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "timeoutMs",
                reason: "must be greater than zero".to_string(),
            });
        }
        #[cfg(feature = "http")]
        self.http_config()?;
        Ok(())
    }

    /// Sets the manufacturer string.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// Sets the model string.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the serial number.
    #[must_use]
    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = serial.into();
        self
    }

    /// Sets the HTTP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the identification values for the accessory information service.
    #[must_use]
    pub fn information(&self) -> AccessoryInformation {
        AccessoryInformation {
            name: self.name.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            serial: self.serial.clone(),
        }
    }

    /// Derives the HTTP connection parameters.
    ///
    /// An `address` with a scheme but no port takes `port`. An `address`
    /// whose port differs from a non-default `port` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidField` if the address does not resolve to
    /// a base URL.
    #[cfg(feature = "http")]
    pub fn http_config(&self) -> Result<HttpConfig, ConfigError> {
        let config = HttpConfig::new(self.address.trim())
            .with_port(self.port)
            .with_timeout(self.timeout());
        config
            .base_url()
            .map_err(|e| ConfigError::InvalidField {
                field: "address",
                reason: e.to_string(),
            })?;
        Ok(config)
    }
}

/// Values shown in the host's accessory information service.
///
/// These are opaque pass-through strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessoryInformation {
    /// Display name.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Model.
    pub model: String,
    /// Serial number.
    pub serial: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config =
            AccessoryConfig::from_json(r#"{"name":"Cooler","address":"10.0.0.7"}"#).unwrap();
        assert_eq!(config, AccessoryConfig::new("Cooler", "10.0.0.7"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn parse_full_config() {
        let config = AccessoryConfig::from_json(
            r#"{
                "accessory": "PortableAirConditioner",
                "name": "Cooler",
                "manufacturer": "ACME",
                "model": "PAC-9000",
                "serial": "SN1",
                "address": "10.0.0.7",
                "port": 8080,
                "timeoutMs": 2500
            }"#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(
            config.information(),
            AccessoryInformation {
                name: "Cooler".to_string(),
                manufacturer: "ACME".to_string(),
                model: "PAC-9000".to_string(),
                serial: "SN1".to_string(),
            }
        );
    }

    #[test]
    fn missing_address_is_rejected() {
        let err = AccessoryConfig::from_json(r#"{"name":"Cooler"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = AccessoryConfig::from_json(r#"{"name":" ","address":"10.0.0.7"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("name")));
    }

    #[test]
    fn builder_chain() {
        let config = AccessoryConfig::new("Cooler", "pac.local")
            .with_manufacturer("ACME")
            .with_model("PAC-9000")
            .with_serial("SN1")
            .with_port(81)
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.manufacturer, "ACME");
        assert_eq!(config.model, "PAC-9000");
        assert_eq!(config.serial, "SN1");
        assert_eq!(config.port, 81);
        assert_eq!(config.timeout_ms, 3000);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AccessoryConfig::from_json(r#"{"name":"Cooler","address":"10.0.0.7","timeoutMs":0}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "timeoutMs",
                ..
            }
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn http_config_from_accessory_config() {
        let http = AccessoryConfig::new("Cooler", "10.0.0.7")
            .with_port(8080)
            .http_config()
            .unwrap();
        assert_eq!(http.base_url().unwrap(), "http://10.0.0.7:8080");
        assert_eq!(http.timeout(), Duration::from_secs(10));
    }

    #[cfg(feature = "http")]
    #[test]
    fn port_applies_to_address_with_scheme() {
        let http = AccessoryConfig::new("Cooler", "http://10.0.0.7")
            .with_port(8080)
            .http_config()
            .unwrap();
        assert_eq!(http.base_url().unwrap(), "http://10.0.0.7:8080");
    }

    #[cfg(feature = "http")]
    #[test]
    fn conflicting_port_is_rejected() {
        let err = AccessoryConfig::from_json(
            r#"{"name":"Cooler","address":"http://10.0.0.7:9000","port":8080}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "address",
                ..
            }
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn malformed_address_is_rejected() {
        for address in ["bad host", "10.0.0.7/x?y"] {
            let err = AccessoryConfig::new("Cooler", address).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidField { field: "address", .. }));
        }
        assert!(AccessoryConfig::new("Cooler", "fe80::1").validate().is_ok());
    }
}
