// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot published on the climate surface.

use serde::Serialize;

use crate::types::{
    ClimateFanMode, ClimateMode, ClimatePreset, ClimateSwingMode, FanSetting, PresetSetting,
};

/// What a virtual climate controller shows for one unit.
///
/// Every field is `None` until the values it depends on are known. The
/// operating mode in particular stays `None` until both power and mode
/// have been reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClimateState {
    /// Composite operating mode.
    pub mode: Option<ClimateMode>,
    /// Calibrated room temperature in °C.
    pub current_temperature: Option<f32>,
    /// Target room temperature in °C.
    pub target_temperature: Option<f32>,
    /// Fan speed, well-known or custom.
    pub fan: Option<FanSetting>,
    /// Active preset, well-known or custom.
    pub preset: Option<PresetSetting>,
    /// Louver swing.
    pub swing_mode: Option<ClimateSwingMode>,
}

impl ClimateState {
    /// Returns the well-known fan mode, if the fan setting is one.
    #[must_use]
    pub fn fan_mode(&self) -> Option<ClimateFanMode> {
        self.fan.as_ref().and_then(FanSetting::fan_mode)
    }

    /// Returns the custom fan label, if the fan setting is one.
    #[must_use]
    pub fn custom_fan_mode(&self) -> Option<&str> {
        self.fan.as_ref().and_then(FanSetting::custom_fan_mode)
    }

    /// Returns the well-known preset, if the preset setting is one.
    #[must_use]
    pub fn preset(&self) -> Option<ClimatePreset> {
        self.preset.as_ref().and_then(PresetSetting::preset)
    }

    /// Returns the custom preset label, if the preset setting is one.
    #[must_use]
    pub fn custom_preset(&self) -> Option<&str> {
        self.preset.as_ref().and_then(PresetSetting::custom_preset)
    }
}
