// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for appliance control.
//!
//! Each type keeps its value within the range the appliance or host accepts,
//! so invalid settings are rejected at construction time.
//!
//! # Types
//!
//! - [`TargetTemperature`] - Cooling set point (16-32 °C, step 1)
//! - [`OperatingMode`] - Appliance mode (cooling only)
//! - [`FanSpeed`] - Fan speed code
//! - [`TimerMinutes`] - Timer duration
//! - [`TargetHeaterCoolerState`] / [`CurrentHeaterCoolerState`] - Host catalog enums

mod heater_cooler;
mod mode;
mod temperature;
mod timer;

pub use heater_cooler::{CurrentHeaterCoolerState, TargetHeaterCoolerState};
pub use mode::{FanSpeed, OperatingMode};
pub use temperature::TargetTemperature;
pub use timer::TimerMinutes;
