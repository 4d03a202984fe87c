// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host notifications.
//!
//! The host learns about values that changed outside of its own requests
//! (a telemetry pull, or a derived characteristic such as the current
//! operating state) through callbacks registered on the accessory.
//!
//! ```no_run
//! use pac_adapter::{Accessory, AccessoryConfig};
//!
//! # async fn example() -> pac_adapter::Result<()> {
//! let accessory = Accessory::http(AccessoryConfig::new("Cooler", "192.168.1.103"))?;
//!
//! let sub_id = accessory.on_characteristic_changed(|characteristic, value| {
//!     println!("{characteristic} is now {value}");
//! });
//!
//! // Later, unsubscribe
//! accessory.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
