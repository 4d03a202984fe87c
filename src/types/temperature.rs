// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type.
//!
//! The appliance only accepts whole degrees Celsius between 16 and 32. This
//! type guarantees that range at construction time.

use std::fmt;

use crate::error::ValueError;

/// Cooling target temperature in whole degrees Celsius (16-32).
///
/// # Examples
///
/// ```
/// use pac_adapter::types::TargetTemperature;
///
/// let t = TargetTemperature::new(22).unwrap();
/// assert_eq!(t.celsius(), 22);
///
/// assert_eq!(TargetTemperature::MIN.celsius(), 16);
/// assert_eq!(TargetTemperature::MAX.celsius(), 32);
///
/// assert!(TargetTemperature::new(33).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetTemperature(u8);

impl TargetTemperature {
    /// Lowest temperature the appliance accepts.
    pub const MIN: Self = Self(16);

    /// Highest temperature the appliance accepts.
    pub const MAX: Self = Self(32);

    /// Step between accepted values, in degrees.
    pub const STEP: u8 = 1;

    /// Creates a new target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `celsius` is outside 16-32.
    pub fn new(celsius: u8) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&celsius) {
            return Err(ValueError::OutOfRange {
                min: i32::from(Self::MIN.0),
                max: i32::from(Self::MAX.0),
                actual: i32::from(celsius),
            });
        }
        Ok(Self(celsius))
    }

    /// Creates a target temperature, clamping to the valid range.
    ///
    /// ```
    /// use pac_adapter::types::TargetTemperature;
    ///
    /// assert_eq!(TargetTemperature::clamped(10).celsius(), 16);
    /// assert_eq!(TargetTemperature::clamped(40).celsius(), 32);
    /// ```
    #[must_use]
    pub const fn clamped(celsius: u8) -> Self {
        if celsius < Self::MIN.0 {
            Self::MIN
        } else if celsius > Self::MAX.0 {
            Self::MAX
        } else {
            Self(celsius)
        }
    }

    /// Creates a target temperature from a host-supplied float.
    ///
    /// The value is rounded to the nearest step and clamped to the range,
    /// mirroring the constraints advertised to the host.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_host(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        // Safe: clamped to the u8-representable range first
        let rounded = value.round().clamp(0.0, f64::from(u8::MAX)) as u8;
        Self::clamped(rounded)
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> u8 {
        self.0
    }
}

impl Default for TargetTemperature {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for TargetTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<u8> for TargetTemperature {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
