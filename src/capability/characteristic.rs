// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristics and their values as seen by the host.

use std::fmt;

use crate::types::{CurrentHeaterCoolerState, TargetHeaterCoolerState};

/// A host characteristic exposed by the heater-cooler service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// On/off switch.
    Active,
    /// Requested operating mode.
    TargetHeaterCoolerState,
    /// Cooling set point in °C.
    CoolingThresholdTemperature,
    /// Room temperature in °C.
    CurrentTemperature,
    /// Reported operating state.
    CurrentHeaterCoolerState,
}

impl Characteristic {
    /// Every characteristic the adapter exposes, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::TargetHeaterCoolerState,
        Self::CoolingThresholdTemperature,
        Self::CurrentTemperature,
        Self::CurrentHeaterCoolerState,
    ];

    /// Returns the catalog name of the characteristic.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::TargetHeaterCoolerState => "TargetHeaterCoolerState",
            Self::CoolingThresholdTemperature => "CoolingThresholdTemperature",
            Self::CurrentTemperature => "CurrentTemperature",
            Self::CurrentHeaterCoolerState => "CurrentHeaterCoolerState",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value crossing the host boundary.
///
/// The host sends loosely typed values (booleans, small integers for enum
/// codes, floats for temperatures); conversions here accept the forms the
/// host actually uses.
///
/// # Examples
///
/// ```
/// use pac_adapter::capability::CharacteristicValue;
///
/// let on: CharacteristicValue = true.into();
/// assert_eq!(on.as_bool(), Some(true));
///
/// // Active is also sent as 0/1
/// assert_eq!(CharacteristicValue::UInt(1).as_bool(), Some(true));
///
/// assert_eq!(CharacteristicValue::UInt(22).as_f64(), Some(22.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacteristicValue {
    /// Boolean value.
    Bool(bool),
    /// Unsigned integer (enum codes, whole degrees).
    UInt(u8),
    /// Floating point value.
    Float(f64),
}

impl CharacteristicValue {
    /// Interprets the value as a boolean.
    ///
    /// Integers 0 and 1 are accepted as `false` and `true`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            Self::UInt(0) => Some(false),
            Self::UInt(1) => Some(true),
            Self::UInt(_) | Self::Float(_) => None,
        }
    }

    /// Interprets the value as an enum code.
    ///
    /// Whole-number floats in the `u8` range are accepted, since some hosts
    /// send every number as a float.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    pub fn as_code(&self) -> Option<u8> {
        match *self {
            Self::UInt(n) => Some(n),
            // Safe: whole and within u8 range
            Self::Float(x) if x.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&x) => {
                Some(x as u8)
            }
            Self::Bool(_) | Self::Float(_) => None,
        }
    }

    /// Interprets the value as a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::UInt(n) => Some(f64::from(n)),
            Self::Float(x) => Some(x),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for CharacteristicValue {
    fn from(value: u8) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for CharacteristicValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<TargetHeaterCoolerState> for CharacteristicValue {
    fn from(value: TargetHeaterCoolerState) -> Self {
        Self::UInt(value.as_num())
    }
}

impl From<CurrentHeaterCoolerState> for CharacteristicValue {
    fn from(value: CurrentHeaterCoolerState) -> Self {
        Self::UInt(value.as_num())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversions() {
        assert_eq!(CharacteristicValue::Bool(false).as_bool(), Some(false));
        assert_eq!(CharacteristicValue::UInt(0).as_bool(), Some(false));
        assert_eq!(CharacteristicValue::UInt(2).as_bool(), None);
        assert_eq!(CharacteristicValue::Float(1.0).as_bool(), None);
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(CharacteristicValue::Float(21.5).as_f64(), Some(21.5));
        assert_eq!(CharacteristicValue::Bool(true).as_f64(), None);
        assert_eq!(CharacteristicValue::UInt(2).as_code(), Some(2));
        assert_eq!(CharacteristicValue::Bool(true).as_code(), None);
    }

    #[test]
    fn whole_floats_are_codes() {
        assert_eq!(CharacteristicValue::Float(2.0).as_code(), Some(2));
        assert_eq!(CharacteristicValue::Float(0.0).as_code(), Some(0));
        assert_eq!(CharacteristicValue::Float(2.5).as_code(), None);
        assert_eq!(CharacteristicValue::Float(-1.0).as_code(), None);
        assert_eq!(CharacteristicValue::Float(256.0).as_code(), None);
        assert_eq!(CharacteristicValue::Float(f64::NAN).as_code(), None);
    }

    #[test]
    fn enum_values() {
        assert_eq!(
            CharacteristicValue::from(TargetHeaterCoolerState::Cool),
            CharacteristicValue::UInt(2)
        );
        assert_eq!(
            CharacteristicValue::from(CurrentHeaterCoolerState::Cooling),
            CharacteristicValue::UInt(3)
        );
    }

    #[test]
    fn all_lists_every_characteristic_once() {
        let mut names: Vec<_> = Characteristic::ALL.iter().map(Characteristic::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
