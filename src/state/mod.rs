// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`FieldValue`] is the unknown-then-known cell every field is stored in.
//! [`FieldUpdate`] is one inbound partial update, tagged by [`FieldKind`].
//! [`DeviceState`] holds all cells of one unit and [`ClimateState`] is the
//! snapshot derived from them for the climate surface.

mod climate_state;
mod device_state;
mod field;
mod field_update;

pub use climate_state::ClimateState;
pub use device_state::DeviceState;
pub use field::{FieldKind, FieldValue, NumberField, SensorField, SwitchField};
pub use field_update::FieldUpdate;
