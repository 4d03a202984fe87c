// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance operating parameters as encoded on the wire.

use std::fmt;

use crate::error::ValueError;

/// Operating mode of the appliance.
///
/// This appliance class only supports cooling. The enum exists so the wire
/// code lives in one place.
///
/// # Examples
///
/// ```
/// use pac_adapter::types::OperatingMode;
///
/// assert_eq!(OperatingMode::Cool.code(), 8);
/// assert_eq!(OperatingMode::default(), OperatingMode::Cool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperatingMode {
    /// Cooling.
    #[default]
    Cool,
}

impl OperatingMode {
    /// Returns the numeric code used by the appliance's `/remote` endpoint.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Cool => 8,
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cool => f.write_str("cool"),
        }
    }
}

impl TryFrom<u8> for OperatingMode {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            8 => Ok(Self::Cool),
            _ => Err(ValueError::InvalidCode {
                kind: "operating mode",
                code,
            }),
        }
    }
}

/// Fan speed code sent to the appliance.
///
/// The adapter never changes the fan speed; it always sends the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// The fan speed the appliance runs at when driven by this adapter.
    pub const DEFAULT: Self = Self(2);

    /// Returns the raw code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.0
    }
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_code() {
        assert_eq!(OperatingMode::try_from(8), Ok(OperatingMode::Cool));
        assert_eq!(
            OperatingMode::try_from(1),
            Err(ValueError::InvalidCode {
                kind: "operating mode",
                code: 1
            })
        );
    }

    #[test]
    fn fan_default_code() {
        assert_eq!(FanSpeed::default().code(), 2);
    }
}
