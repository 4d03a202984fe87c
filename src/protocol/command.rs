// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `/remote` command body.

use serde::Serialize;

use crate::state::DeviceState;

/// Full desired state as expected by the appliance's `/remote` endpoint.
///
/// The appliance has no per-field commands: every push carries the complete
/// state. Field order is the order the appliance firmware emits and expects.
///
/// # Examples
///
/// ```
/// use pac_adapter::protocol::RemoteCommand;
/// use pac_adapter::state::DeviceState;
///
/// let body = RemoteCommand::from(&DeviceState::new()).to_json().unwrap();
/// assert_eq!(
///     body,
///     r#"{"on":false,"temperature":"16","mode":8,"fan":2,"timer":false,"timer_value":"0","unitF":false}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteCommand {
    /// Power flag.
    pub on: bool,
    /// Set point in whole degrees, as a decimal string.
    pub temperature: String,
    /// Operating mode code.
    pub mode: u8,
    /// Fan speed code.
    pub fan: u8,
    /// Whether the timer is armed.
    pub timer: bool,
    /// Timer duration in minutes, as a decimal string.
    pub timer_value: String,
    /// Whether the appliance displays Fahrenheit.
    #[serde(rename = "unitF")]
    pub unit_fahrenheit: bool,
}

impl RemoteCommand {
    /// Serializes the command to its JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&DeviceState> for RemoteCommand {
    fn from(state: &DeviceState) -> Self {
        Self {
            on: state.power(),
            temperature: state.target_temperature().celsius().to_string(),
            mode: state.mode().code(),
            fan: state.fan().code(),
            timer: state.timer_enabled(),
            timer_value: state.timer().to_string(),
            unit_fahrenheit: state.use_fahrenheit(),
        }
    }
}
