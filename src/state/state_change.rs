// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] is the unit the adapter applies to its
//! [`DeviceState`](super::DeviceState) when the host writes a characteristic.
//!
//! # Examples
//!
//! ```
//! use pac_adapter::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::power_on()));
//!
//! // Applying same change again returns false
//! assert!(!state.apply(&StateChange::power_on()));
//! ```

use crate::types::TargetTemperature;

/// Represents a change in desired appliance settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Power switched on or off.
    Power(bool),

    /// Cooling set point changed.
    TargetTemperature(TargetTemperature),
}

impl StateChange {
    /// Creates a power-on change.
    #[must_use]
    pub fn power_on() -> Self {
        Self::Power(true)
    }

    /// Creates a power-off change.
    #[must_use]
    pub fn power_off() -> Self {
        Self::Power(false)
    }

    /// Creates a set point change.
    #[must_use]
    pub fn target_temperature(temperature: TargetTemperature) -> Self {
        Self::TargetTemperature(temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_constructors() {
        assert_eq!(StateChange::power_on(), StateChange::Power(true));
        assert_eq!(StateChange::power_off(), StateChange::Power(false));
    }

    #[test]
    fn target_temperature_constructor() {
        let t = TargetTemperature::new(24).unwrap();
        assert_eq!(
            StateChange::target_temperature(t),
            StateChange::TargetTemperature(t)
        );
    }
}
