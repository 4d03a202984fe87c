// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The capability surface exposed to the smart-home host.
//!
//! | Characteristic | Get | Set | Constraints |
//! |---|---|---|---|
//! | [`Active`](Characteristic::Active) | yes | yes | boolean |
//! | [`TargetHeaterCoolerState`](Characteristic::TargetHeaterCoolerState) | yes | yes (ignored) | COOL only |
//! | [`CoolingThresholdTemperature`](Characteristic::CoolingThresholdTemperature) | yes | yes | 16-32, step 1 |
//! | [`CurrentTemperature`](Characteristic::CurrentTemperature) | yes | no | float |
//! | [`CurrentHeaterCoolerState`](Characteristic::CurrentHeaterCoolerState) | yes | no | INACTIVE or COOLING |

mod binding;
mod characteristic;

pub use binding::{BINDINGS, BindingSource, CapabilityBinding, Constraints, ValueFormat, binding};
pub use characteristic::{Characteristic, CharacteristicValue};
