// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure resolvers from protocol values to climate-surface values.
//!
//! - [`operating_mode`] - Composite (power, mode) → climate mode, deferred
//!   until both are known
//! - [`preset`] / [`preset_code`] - Alt-mode code ↔ preset, checked
//!   against the device catalog
//! - [`fan_setting`] / [`fan_mode`] - Fan code ↔ well-known or custom label
//!
//! None of these log or touch device state; the
//! [`Device`](crate::device::Device) decides what to do with a rejection.

mod fan_mode;
mod operating_mode;
mod preset;

pub use fan_mode::{fan_mode, fan_setting};
pub use operating_mode::operating_mode;
pub use preset::{preset, preset_code};
