// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and the conversion layer.
//!
//! Every protocol-domain value (integer codes, bitmasks) has a typed
//! representation here, together with its translations to labels and to
//! the climate domain. All translations are pure; the bijective ones
//! round-trip exactly.
//!
//! # Types
//!
//! - [`Mode`] / [`WaterHeaterMode`] - Operating modes (codes and labels)
//! - [`FanMode`] / [`FanSetting`] - Fan speeds and their climate setting
//! - [`SwingMode`] - Two-axis swing bitmask
//! - [`AltMode`] / [`AltModeCatalog`] / [`PresetSetting`] - Vendor alt-modes
//! - [`ClimateMode`], [`ClimateFanMode`], [`ClimateSwingMode`], [`ClimatePreset`] -
//!   Climate-domain vocabulary
//! - [`DeviceAddress`] - Opaque unit address

mod address;
mod alt_mode;
mod climate;
mod fan;
mod mode;
mod swing;

pub use address::DeviceAddress;
pub use alt_mode::{AltMode, AltModeCatalog, AltModeDesc, PresetSetting};
pub use climate::{ClimateFanMode, ClimateMode, ClimatePreset, ClimateSwingMode};
pub use fan::{FanMode, FanSetting};
pub use mode::{Mode, WaterHeaterMode};
pub use swing::SwingMode;
