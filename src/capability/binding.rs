// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative characteristic bindings.
//!
//! Each [`CapabilityBinding`] ties one host characteristic to the piece of
//! adapter state that backs it, and carries the constraints advertised to the
//! host. The table is fixed at compile time.

use crate::types::{CurrentHeaterCoolerState, TargetHeaterCoolerState, TargetTemperature};

use super::Characteristic;

/// Value format advertised to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Boolean.
    Bool,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Floating point number.
    Float,
}

impl ValueFormat {
    /// Returns a human readable name for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::UInt8 => "integer",
            Self::Float => "numeric",
        }
    }
}

/// Where the value of a characteristic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// `DeviceState::power`.
    Power,
    /// `DeviceState::target_temperature`.
    TargetTemperature,
    /// `DeviceState::mode`; writes are accepted and ignored.
    Mode,
    /// The cached telemetry snapshot, refreshed by a pull.
    Telemetry,
    /// Derived from `DeviceState::power`.
    DerivedFromPower,
}

/// Range and value-set constraints advertised to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Minimum accepted value.
    pub min: Option<f64>,
    /// Maximum accepted value.
    pub max: Option<f64>,
    /// Step between accepted values.
    pub step: Option<f64>,
    /// Exhaustive list of accepted enum codes.
    pub valid_values: Option<&'static [u8]>,
}

impl Constraints {
    /// No constraints.
    pub const NONE: Self = Self {
        min: None,
        max: None,
        step: None,
        valid_values: None,
    };

    /// Returns `true` if `code` is in the valid value set (or no set is declared).
    #[must_use]
    pub fn allows_code(&self, code: u8) -> bool {
        self.valid_values.is_none_or(|values| values.contains(&code))
    }
}

/// Static association between a characteristic and its backing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilityBinding {
    /// The host characteristic.
    pub characteristic: Characteristic,
    /// Value format advertised to the host.
    pub format: ValueFormat,
    /// Backing state.
    pub source: BindingSource,
    /// Whether the host may read the value.
    pub readable: bool,
    /// Whether the host may write the value.
    pub writable: bool,
    /// Advertised constraints.
    pub constraints: Constraints,
}

const COOL_ONLY: &[u8] = &[TargetHeaterCoolerState::Cool.as_num()];

const INACTIVE_OR_COOLING: &[u8] = &[
    CurrentHeaterCoolerState::Inactive.as_num(),
    CurrentHeaterCoolerState::Cooling.as_num(),
];

/// The capability surface of the heater-cooler service.
#[allow(clippy::cast_lossless)]
pub static BINDINGS: [CapabilityBinding; 5] = [
    CapabilityBinding {
        characteristic: Characteristic::Active,
        format: ValueFormat::Bool,
        source: BindingSource::Power,
        readable: true,
        writable: true,
        constraints: Constraints::NONE,
    },
    CapabilityBinding {
        characteristic: Characteristic::TargetHeaterCoolerState,
        format: ValueFormat::UInt8,
        source: BindingSource::Mode,
        readable: true,
        writable: true,
        constraints: Constraints {
            valid_values: Some(COOL_ONLY),
            ..Constraints::NONE
        },
    },
    CapabilityBinding {
        characteristic: Characteristic::CoolingThresholdTemperature,
        format: ValueFormat::Float,
        source: BindingSource::TargetTemperature,
        readable: true,
        writable: true,
        constraints: Constraints {
            min: Some(TargetTemperature::MIN.celsius() as f64),
            max: Some(TargetTemperature::MAX.celsius() as f64),
            step: Some(TargetTemperature::STEP as f64),
            valid_values: None,
        },
    },
    CapabilityBinding {
        characteristic: Characteristic::CurrentTemperature,
        format: ValueFormat::Float,
        source: BindingSource::Telemetry,
        readable: true,
        writable: false,
        constraints: Constraints::NONE,
    },
    CapabilityBinding {
        characteristic: Characteristic::CurrentHeaterCoolerState,
        format: ValueFormat::UInt8,
        source: BindingSource::DerivedFromPower,
        readable: true,
        writable: false,
        constraints: Constraints {
            valid_values: Some(INACTIVE_OR_COOLING),
            ..Constraints::NONE
        },
    },
];

/// Returns the binding for a characteristic.
#[must_use]
pub fn binding(characteristic: Characteristic) -> &'static CapabilityBinding {
    // Every Characteristic variant has exactly one entry, in declaration order
    &BINDINGS[characteristic as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_follow_declaration_order() {
        for c in Characteristic::ALL {
            assert_eq!(binding(c).characteristic, c);
        }
    }

    #[test]
    fn target_temperature_range() {
        let b = binding(Characteristic::CoolingThresholdTemperature);
        assert_eq!(b.constraints.min, Some(16.0));
        assert_eq!(b.constraints.max, Some(32.0));
        assert_eq!(b.constraints.step, Some(1.0));
        assert!(b.writable);
    }

    #[test]
    fn target_mode_only_allows_cool() {
        let c = binding(Characteristic::TargetHeaterCoolerState).constraints;
        assert!(c.allows_code(2));
        assert!(!c.allows_code(0));
        assert!(!c.allows_code(1));
    }

    #[test]
    fn current_state_only_inactive_or_cooling() {
        let c = binding(Characteristic::CurrentHeaterCoolerState).constraints;
        assert!(c.allows_code(0));
        assert!(c.allows_code(3));
        assert!(!c.allows_code(1));
        assert!(!c.allows_code(2));
    }

    #[test]
    fn read_only_characteristics() {
        assert!(!binding(Characteristic::CurrentTemperature).writable);
        assert!(!binding(Characteristic::CurrentHeaterCoolerState).writable);
        assert!(BINDINGS.iter().all(|b| b.readable));
    }
}
