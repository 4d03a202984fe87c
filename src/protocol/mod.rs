// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementations for talking to the appliance.
//!
//! The appliance speaks a push/pull protocol with no acknowledgement of
//! individual settings and no notifications:
//!
//! - **push**: `POST /remote` with the complete desired state
//! - **pull**: `GET /status` returning the current sensor readings
//!
//! [`HttpClient`] is the production implementation. The adapter is generic
//! over [`Protocol`] so it can be driven by other transports in tests.

mod command;
#[cfg(feature = "http")]
mod http;

pub use command::RemoteCommand;
#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::future::Future;

use crate::error::{Error, TransportError};
use crate::state::{DeviceState, TelemetrySnapshot};

/// A stateless transport to one appliance.
///
/// Implementations keep nothing between calls: `push` is given the whole
/// state to send, and `pull` returns a freshly decoded snapshot.
pub trait Protocol: Send + Sync + 'static {
    /// Sends the complete desired state to the appliance.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request cannot be delivered or the
    /// appliance answers with a non-success status.
    fn push(&self, state: &DeviceState)
    -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Requests the current sensor readings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails and `Error::Decode`
    /// if the body is not a valid status document.
    fn pull(&self) -> impl Future<Output = Result<TelemetrySnapshot, Error>> + Send;
}
