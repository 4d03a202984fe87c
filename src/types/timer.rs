// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance timer duration.

use std::fmt;

/// Timer duration in whole minutes.
///
/// The appliance expects this as a decimal string (`"timer_value": "90"`).
///
/// # Examples
///
/// ```
/// use pac_adapter::types::TimerMinutes;
///
/// let t = TimerMinutes::new(90);
/// assert_eq!(t.to_string(), "90");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimerMinutes(u32);

impl TimerMinutes {
    /// A zero-length timer.
    pub const ZERO: Self = Self(0);

    /// Creates a timer of the given number of minutes.
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns the number of minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimerMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
