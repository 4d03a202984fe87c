// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `PacAdapter` - Exposes an HTTP-controlled portable air conditioner as a
//! smart-home heater-cooler accessory.
//!
//! The appliance has no notion of individual settings: it accepts the
//! complete desired state on `POST /remote` and reports sensor readings on
//! `GET /status`. This library keeps the desired state locally, answers host
//! requests from memory and synchronizes with the appliance in the
//! background.
//!
//! # Capabilities
//!
//! | Characteristic                | Access     | Values                 |
//! |-------------------------------|------------|------------------------|
//! | `Active`                      | read/write | on, off                |
//! | `TargetHeaterCoolerState`     | read/write | always `COOL`          |
//! | `CoolingThresholdTemperature` | read/write | 16-32 °C, step 1       |
//! | `CurrentTemperature`          | read       | last pulled reading    |
//! | `CurrentHeaterCoolerState`    | read       | `COOLING` or `INACTIVE`|
//!
//! # Quick Start
//!
//! ```no_run
//! use pac_adapter::{Accessory, AccessoryConfig, Characteristic};
//!
//! #[tokio::main]
//! async fn main() -> pac_adapter::Result<()> {
//!     let config = AccessoryConfig::from_json(
//!         r#"{"name": "Bedroom Cooler", "address": "192.168.1.103"}"#,
//!     )?;
//!     let accessory = Accessory::http(config)?;
//!
//!     // Writes return immediately; the appliance is updated in the background
//!     accessory.handle_set(Characteristic::Active, true.into())?;
//!     accessory.handle_set(Characteristic::CoolingThresholdTemperature, 22.0.into())?;
//!
//!     // Wait for a fresh reading instead of serving the cached one
//!     let telemetry = accessory.refresh().await?;
//!     println!("room: {} °C", telemetry.current_temperature());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Notifications
//!
//! ```no_run
//! use pac_adapter::{Accessory, AccessoryConfig};
//!
//! # async fn example() -> pac_adapter::Result<()> {
//! let accessory = Accessory::http(AccessoryConfig::new("Cooler", "192.168.1.103"))?;
//!
//! accessory.on_telemetry(|snapshot| {
//!     println!("humidity: {:?}", snapshot.current_humidity());
//! });
//! # Ok(())
//! # }
//! ```

mod accessory;
pub mod capability;
mod config;
pub mod error;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod types;

pub use accessory::Accessory;
pub use capability::{Characteristic, CharacteristicValue};
pub use config::{AccessoryConfig, AccessoryInformation};
pub use error::{
    CapabilityError, ConfigError, DecodeError, Error, Result, TransportError, ValueError,
};
pub use protocol::Protocol;
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use state::{DeviceState, TelemetrySnapshot};
pub use subscription::SubscriptionId;
pub use types::{CurrentHeaterCoolerState, TargetHeaterCoolerState, TargetTemperature};
