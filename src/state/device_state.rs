// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired appliance settings.

use crate::types::{FanSpeed, OperatingMode, TargetTemperature, TimerMinutes};

use super::StateChange;

/// The settings the adapter believes the appliance is running with.
///
/// Unlike telemetry, every field always has a value: the state starts from
/// fixed defaults and is only changed by host requests. The whole struct is
/// sent to the appliance on every push.
///
/// # Examples
///
/// ```
/// use pac_adapter::state::DeviceState;
/// use pac_adapter::types::TargetTemperature;
///
/// let mut state = DeviceState::new();
/// assert!(!state.power());
/// assert_eq!(state.target_temperature(), TargetTemperature::MIN);
///
/// state.set_power(true);
/// assert!(state.power());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    /// Whether the appliance is switched on.
    power: bool,
    /// Cooling set point.
    target_temperature: TargetTemperature,
    /// Operating mode (always cooling for this appliance class).
    mode: OperatingMode,
    /// Fan speed code.
    fan: FanSpeed,
    /// Whether the appliance's built-in timer is armed.
    timer_enabled: bool,
    /// Timer duration.
    timer: TimerMinutes,
    /// Whether the appliance displays Fahrenheit.
    use_fahrenheit: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            power: false,
            target_temperature: TargetTemperature::MIN,
            mode: OperatingMode::Cool,
            fan: FanSpeed::DEFAULT,
            timer_enabled: false,
            timer: TimerMinutes::ZERO,
            use_fahrenheit: false,
        }
    }
}

impl DeviceState {
    /// Creates the default state: off, 16 °C, cooling, default fan, no timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Power ==========

    /// Returns whether the appliance is on.
    #[must_use]
    pub fn power(&self) -> bool {
        self.power
    }

    /// Sets the power flag.
    pub fn set_power(&mut self, on: bool) {
        self.power = on;
    }

    // ========== Temperature ==========

    /// Returns the cooling set point.
    #[must_use]
    pub fn target_temperature(&self) -> TargetTemperature {
        self.target_temperature
    }

    /// Sets the cooling set point.
    pub fn set_target_temperature(&mut self, temperature: TargetTemperature) {
        self.target_temperature = temperature;
    }

    /// Returns whether the appliance displays Fahrenheit.
    #[must_use]
    pub fn use_fahrenheit(&self) -> bool {
        self.use_fahrenheit
    }

    /// Sets the display unit.
    pub fn set_use_fahrenheit(&mut self, fahrenheit: bool) {
        self.use_fahrenheit = fahrenheit;
    }

    // ========== Fixed parameters ==========

    /// Returns the operating mode.
    #[must_use]
    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Returns the fan speed.
    #[must_use]
    pub fn fan(&self) -> FanSpeed {
        self.fan
    }

    // ========== Timer ==========

    /// Returns whether the timer is armed.
    #[must_use]
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// Returns the timer duration.
    #[must_use]
    pub fn timer(&self) -> TimerMinutes {
        self.timer
    }

    /// Arms the timer with the given duration.
    pub fn set_timer(&mut self, minutes: TimerMinutes) {
        self.timer_enabled = true;
        self.timer = minutes;
    }

    /// Disarms the timer.
    pub fn clear_timer(&mut self) {
        self.timer_enabled = false;
        self.timer = TimerMinutes::ZERO;
    }

    // ========== State Changes ==========

    /// Applies a state change and returns whether the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(on) => {
                if self.power == *on {
                    false
                } else {
                    self.power = *on;
                    true
                }
            }
            StateChange::TargetTemperature(temperature) => {
                if self.target_temperature == *temperature {
                    false
                } else {
                    self.target_temperature = *temperature;
                    true
                }
            }
        }
    }
}
