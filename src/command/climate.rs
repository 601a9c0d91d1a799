// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands issued on the climate surface.

use crate::protocol::ProtocolRequest;
use crate::resolve;
use crate::types::{
    AltModeCatalog, ClimateMode, ClimateSwingMode, FanSetting, Mode, PresetSetting, SwingMode,
};

use super::Translation;

/// A change requested on the climate surface.
///
/// Any subset of the fields may be set; unset fields are left unchanged.
///
/// # Examples
///
/// ```
/// use heatpump_sync::command::ClimateCall;
/// use heatpump_sync::types::{AltModeCatalog, ClimateMode, Mode};
///
/// let call = ClimateCall::new().with_mode(ClimateMode::Heat).with_target_temperature(22.0);
/// let request = call.translate(&AltModeCatalog::new()).request;
///
/// assert_eq!(request.power, Some(true));
/// assert_eq!(request.mode, Some(Mode::Heat));
/// assert_eq!(request.target_temp, Some(22.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateCall {
    /// Requested operating mode. `Off` powers the unit down.
    pub mode: Option<ClimateMode>,
    /// Requested target temperature in °C.
    pub target_temperature: Option<f32>,
    /// Requested fan speed.
    pub fan: Option<FanSetting>,
    /// Requested preset.
    pub preset: Option<PresetSetting>,
    /// Requested swing.
    pub swing_mode: Option<ClimateSwingMode>,
}

impl ClimateCall {
    /// Creates an empty call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests an operating mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ClimateMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Requests a target temperature.
    #[must_use]
    pub fn with_target_temperature(mut self, value: f32) -> Self {
        self.target_temperature = Some(value);
        self
    }

    /// Requests a fan speed.
    #[must_use]
    pub fn with_fan(mut self, fan: FanSetting) -> Self {
        self.fan = Some(fan);
        self
    }

    /// Requests a preset.
    #[must_use]
    pub fn with_preset(mut self, preset: PresetSetting) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Requests a swing mode.
    #[must_use]
    pub fn with_swing_mode(mut self, swing: ClimateSwingMode) -> Self {
        self.swing_mode = Some(swing);
        self
    }

    /// Translates this call into one sparse request.
    ///
    /// A fan label or preset the device cannot express is dropped and
    /// reported in [`Translation::rejected`].
    #[must_use]
    pub fn translate(&self, catalog: &AltModeCatalog) -> Translation {
        let mut request = ProtocolRequest::default();
        let mut rejected = Vec::new();

        if let Some(mode) = self.mode {
            match Mode::from_climate(mode) {
                Some(mode) => {
                    request.power = Some(true);
                    request.mode = Some(mode);
                }
                None => request.power = Some(false),
            }
        }

        request.target_temp = self.target_temperature;

        if let Some(fan) = &self.fan {
            match resolve::fan_mode(fan) {
                Ok(mode) => request.fan_mode = Some(mode),
                Err(err) => rejected.push(err),
            }
        }

        if let Some(preset) = &self.preset {
            match resolve::preset_code(preset, catalog) {
                Ok(code) => request.alt_mode = Some(code),
                Err(err) => rejected.push(err),
            }
        }

        request.swing_mode = self.swing_mode.map(SwingMode::from_climate);

        Translation { request, rejected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use crate::types::{ClimateFanMode, ClimatePreset, FanMode};

    fn catalog() -> AltModeCatalog {
        let mut catalog = AltModeCatalog::new();
        catalog.push("Sleep", 1);
        catalog.push("Quiet", 2);
        catalog
    }

    #[test]
    fn empty_call_is_empty_request() {
        let translation = ClimateCall::new().translate(&catalog());
        assert!(translation.request.is_empty());
        assert!(translation.rejected.is_empty());
    }

    #[test]
    fn off_only_clears_power() {
        let request = ClimateCall::new()
            .with_mode(ClimateMode::Off)
            .translate(&catalog())
            .request;
        assert_eq!(request.power, Some(false));
        assert_eq!(request.mode, None);
        assert_eq!(request.field_count(), 1);
    }

    #[test]
    fn mode_powers_on() {
        let request = ClimateCall::new()
            .with_mode(ClimateMode::FanOnly)
            .translate(&catalog())
            .request;
        assert_eq!(request.power, Some(true));
        assert_eq!(request.mode, Some(Mode::Fan));
    }

    #[test]
    fn fan_settings() {
        let request = ClimateCall::new()
            .with_fan(FanSetting::Standard(ClimateFanMode::Medium))
            .translate(&catalog())
            .request;
        assert_eq!(request.fan_mode, Some(FanMode::Mid));

        let request = ClimateCall::new()
            .with_fan(FanSetting::Custom("Turbo".to_string()))
            .translate(&catalog())
            .request;
        assert_eq!(request.fan_mode, Some(FanMode::Turbo));
    }

    #[test]
    fn presets_resolve_through_catalog() {
        let request = ClimateCall::new()
            .with_preset(PresetSetting::Standard(ClimatePreset::Sleep))
            .translate(&catalog())
            .request;
        assert_eq!(request.alt_mode, Some(1));

        let request = ClimateCall::new()
            .with_preset(PresetSetting::Custom("Quiet".to_string()))
            .translate(&catalog())
            .request;
        assert_eq!(request.alt_mode, Some(2));
    }

    #[test]
    fn unsupported_parts_are_dropped_rest_is_kept() {
        let translation = ClimateCall::new()
            .with_target_temperature(23.0)
            .with_preset(PresetSetting::Standard(ClimatePreset::Away))
            .with_fan(FanSetting::Custom("Breeze".to_string()))
            .translate(&catalog());

        assert_eq!(translation.request.target_temp, Some(23.0));
        assert_eq!(translation.request.alt_mode, None);
        assert_eq!(translation.request.fan_mode, None);
        assert_eq!(
            translation.rejected,
            vec![
                ValueError::UnmappedFanMode("Breeze".to_string()),
                ValueError::UnsupportedPreset("away".to_string()),
            ]
        );
    }

    #[test]
    fn swing_becomes_bitmask() {
        let request = ClimateCall::new()
            .with_swing_mode(ClimateSwingMode::Both)
            .translate(&catalog())
            .request;
        assert_eq!(request.swing_mode, Some(SwingMode::ALL));
    }
}
