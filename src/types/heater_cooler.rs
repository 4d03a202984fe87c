// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater-cooler enumerations from the host capability catalog.
//!
//! The numeric codes are fixed by the host platform; they are mirrored here
//! so values can cross the capability boundary as plain integers.

use std::fmt;

use crate::error::ValueError;

/// Desired operating state requested by the host.
///
/// # Examples
///
/// ```
/// use pac_adapter::types::TargetHeaterCoolerState;
///
/// assert_eq!(TargetHeaterCoolerState::Cool.as_num(), 2);
/// assert_eq!(TargetHeaterCoolerState::try_from(1).unwrap(), TargetHeaterCoolerState::Heat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetHeaterCoolerState {
    /// Let the device pick heating or cooling.
    Auto,
    /// Heat.
    Heat,
    /// Cool.
    Cool,
}

impl TargetHeaterCoolerState {
    /// Returns the host catalog code.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }

    /// Returns the upper-case name used by the host catalog.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
        }
    }
}

impl fmt::Display for TargetHeaterCoolerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for TargetHeaterCoolerState {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            _ => Err(ValueError::InvalidCode {
                kind: "target heater-cooler state",
                code,
            }),
        }
    }
}

/// Operating state reported to the host.
///
/// The adapter only ever reports [`Inactive`](Self::Inactive) or
/// [`Cooling`](Self::Cooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentHeaterCoolerState {
    /// Switched off.
    Inactive,
    /// On but neither heating nor cooling.
    Idle,
    /// Heating.
    Heating,
    /// Cooling.
    Cooling,
}

impl CurrentHeaterCoolerState {
    /// Returns the host catalog code.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::Heating => 2,
            Self::Cooling => 3,
        }
    }

    /// Returns the upper-case name used by the host catalog.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Idle => "IDLE",
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
        }
    }

    /// Derives the reported state from the appliance power flag.
    #[must_use]
    pub const fn from_power(power: bool) -> Self {
        if power { Self::Cooling } else { Self::Inactive }
    }
}

impl fmt::Display for CurrentHeaterCoolerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for CurrentHeaterCoolerState {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Idle),
            2 => Ok(Self::Heating),
            3 => Ok(Self::Cooling),
            _ => Err(ValueError::InvalidCode {
                kind: "current heater-cooler state",
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_codes_round_trip() {
        for state in [
            TargetHeaterCoolerState::Auto,
            TargetHeaterCoolerState::Heat,
            TargetHeaterCoolerState::Cool,
        ] {
            assert_eq!(TargetHeaterCoolerState::try_from(state.as_num()), Ok(state));
        }
        assert!(TargetHeaterCoolerState::try_from(3).is_err());
    }

    #[test]
    fn current_from_power() {
        assert_eq!(
            CurrentHeaterCoolerState::from_power(true),
            CurrentHeaterCoolerState::Cooling
        );
        assert_eq!(
            CurrentHeaterCoolerState::from_power(false),
            CurrentHeaterCoolerState::Inactive
        );
    }

    #[test]
    fn current_invalid_code() {
        assert!(CurrentHeaterCoolerState::try_from(4).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(TargetHeaterCoolerState::Heat.to_string(), "HEAT");
        assert_eq!(CurrentHeaterCoolerState::Cooling.to_string(), "COOLING");
    }
}
