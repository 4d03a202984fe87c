// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State held by the adapter.
//!
//! - [`DeviceState`] - the desired settings, pushed to the appliance
//! - [`StateChange`] - a single change applied to a [`DeviceState`]
//! - [`TelemetrySnapshot`] - the readings last pulled from the appliance
//!
//! # Examples
//!
//! ```
//! use pac_adapter::state::{DeviceState, StateChange};
//! use pac_adapter::types::TargetTemperature;
//!
//! let mut state = DeviceState::new();
//!
//! let change = StateChange::TargetTemperature(TargetTemperature::new(22).unwrap());
//! state.apply(&change);
//!
//! assert_eq!(state.target_temperature().celsius(), 22);
//! ```

mod device_state;
mod state_change;
mod telemetry;

pub use device_state::DeviceState;
pub use state_change::StateChange;
pub use telemetry::TelemetrySnapshot;
