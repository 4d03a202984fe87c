// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the adapter.
//!
//! Errors are split by where they originate: the network transport, decoding
//! of appliance telemetry, value validation, misuse of the capability surface
//! by the host, and configuration parsing.

use thiserror::Error;

use crate::capability::Characteristic;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the appliance.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while decoding an appliance response.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The host used a characteristic in a way it does not support.
    #[error("capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// The accessory configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the HTTP transport.
///
/// These are never fatal: the adapter logs them and keeps serving its
/// cached state.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, DNS failure, timeout...).
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The appliance answered with a non-success status.
    #[error("unexpected status: HTTP {code} - {reason}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The command body could not be encoded.
    #[error("failed to encode command: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised while decoding appliance telemetry.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON, or does not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// A numeric code does not map to any known enum variant.
    #[error("invalid {kind} code: {code}")]
    InvalidCode {
        /// Name of the enum being decoded.
        kind: &'static str,
        /// The offending code.
        code: u8,
    },
}

/// Errors caused by host requests that the capability surface rejects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The characteristic is read-only.
    #[error("{0} is not writable")]
    NotWritable(Characteristic),

    /// The value type does not fit the characteristic.
    #[error("{characteristic} expects a {expected} value")]
    TypeMismatch {
        /// The characteristic that was written.
        characteristic: Characteristic,
        /// Human readable name of the expected format.
        expected: &'static str,
    },
}

/// Errors related to accessory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is empty.
    #[error("missing configuration field: {0}")]
    MissingField(&'static str),

    /// A field is present but unusable.
    #[error("invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Name of the offending key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 16,
            max: 32,
            actual: 40,
        };
        assert_eq!(err.to_string(), "value 40 is out of range [16, 32]");
    }

    #[test]
    fn error_from_decode_error() {
        let decode_err = DecodeError::MissingField("temperature".to_string());
        let err: Error = decode_err.into();
        assert!(matches!(err, Error::Decode(DecodeError::MissingField(_))));
    }

    #[test]
    fn status_error_display() {
        let err = TransportError::Status {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status: HTTP 503 - Service Unavailable"
        );
    }

    #[test]
    fn capability_error_display() {
        let err = CapabilityError::NotWritable(Characteristic::CurrentTemperature);
        assert_eq!(err.to_string(), "CurrentTemperature is not writable");
    }
}
