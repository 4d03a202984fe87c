// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor readings reported by the appliance.

use serde::Deserialize;

use crate::error::DecodeError;

/// Last readings reported by the appliance's `/status` endpoint.
///
/// A snapshot is replaced as a whole on every successful pull; a failed pull
/// leaves the previous one in place.
///
/// # Examples
///
/// ```
/// use pac_adapter::state::TelemetrySnapshot;
///
/// let snapshot = TelemetrySnapshot::from_json(r#"{"temperature": 23.5, "humidity": 40}"#).unwrap();
/// assert!((snapshot.current_temperature() - 23.5).abs() < f64::EPSILON);
/// assert_eq!(snapshot.current_humidity(), Some(40.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    /// Room temperature in degrees Celsius.
    current_temperature: f64,
    /// Relative humidity in percent.
    current_humidity: Option<f64>,
}

/// Wire shape of the `/status` body.
#[derive(Debug, Deserialize)]
struct StatusBody {
    temperature: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
}

impl TelemetrySnapshot {
    /// Temperature reported before the appliance has answered any pull.
    pub const DEFAULT_TEMPERATURE: f64 = 0.0;

    /// Creates a snapshot from raw readings.
    #[must_use]
    pub fn new(current_temperature: f64, current_humidity: Option<f64>) -> Self {
        Self {
            current_temperature,
            current_humidity,
        }
    }

    /// Decodes a `/status` response body.
    ///
    /// Unknown fields are ignored; `temperature` is required.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Json` if the body is not valid JSON or a field
    /// has the wrong type, and `DecodeError::MissingField` if `temperature`
    /// is absent or null.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let status: StatusBody = serde_json::from_str(body)?;
        let temperature = status
            .temperature
            .ok_or_else(|| DecodeError::MissingField("temperature".to_string()))?;
        Ok(Self::new(temperature, status.humidity))
    }

    /// Returns the room temperature in degrees Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    /// Returns the relative humidity, if the appliance reported it.
    #[must_use]
    pub fn current_humidity(&self) -> Option<f64> {
        self.current_humidity
    }
}
