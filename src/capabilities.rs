// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What the climate surface of a unit may offer.
//!
//! Traits are derived from a [`DeviceConfig`]: modes and fan speeds are the
//! same for every unit, while swing modes and presets depend on the
//! hardware and its alt-mode catalog.

use crate::config::DeviceConfig;
use crate::resolve;
use crate::types::{
    AltModeCatalog, ClimateFanMode, ClimateMode, ClimatePreset, ClimateSwingMode, FanMode,
    PresetSetting,
};

/// Options a climate surface can present to the user.
///
/// # Examples
///
/// ```
/// use heatpump_sync::capabilities::ClimateTraits;
/// use heatpump_sync::config::DeviceConfig;
/// use heatpump_sync::types::{ClimatePreset, ClimateSwingMode};
///
/// let config = DeviceConfig::new()
///     .with_vertical_swing(true)
///     .with_alt_mode("Sleep", 1)
///     .with_alt_mode("Quiet", 2);
/// let traits = ClimateTraits::from_config(&config);
///
/// assert_eq!(
///     traits.swing_modes,
///     vec![ClimateSwingMode::Off, ClimateSwingMode::Vertical]
/// );
/// assert_eq!(traits.presets, vec![ClimatePreset::Sleep]);
/// assert_eq!(traits.custom_presets, vec!["Quiet".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateTraits {
    /// Reports a current temperature.
    pub supports_current_temperature: bool,
    /// Selectable operating modes.
    pub modes: Vec<ClimateMode>,
    /// Selectable well-known fan modes.
    pub fan_modes: Vec<ClimateFanMode>,
    /// Selectable custom fan labels.
    pub custom_fan_modes: Vec<String>,
    /// Selectable swing modes. Always contains `Off`.
    pub swing_modes: Vec<ClimateSwingMode>,
    /// Well-known presets found in the catalog.
    pub presets: Vec<ClimatePreset>,
    /// Custom preset labels found in the catalog.
    pub custom_presets: Vec<String>,
}

impl ClimateTraits {
    /// Derives the traits for a configured unit.
    #[must_use]
    pub fn from_config(config: &DeviceConfig) -> Self {
        let (presets, custom_presets) = presets(&config.alt_modes);

        Self {
            supports_current_temperature: true,
            modes: ClimateMode::ALL.to_vec(),
            fan_modes: FanMode::ALL.iter().filter_map(FanMode::to_climate).collect(),
            custom_fan_modes: FanMode::ALL
                .iter()
                .filter_map(FanMode::custom_label)
                .map(str::to_string)
                .collect(),
            swing_modes: swing_modes(
                config.supports_vertical_swing,
                config.supports_horizontal_swing,
            ),
            presets,
            custom_presets,
        }
    }

    /// Returns `true` if the surface should offer any swing control.
    #[must_use]
    pub fn supports_swing(&self) -> bool {
        self.swing_modes.len() > 1
    }

    /// Returns `true` if the catalog offers any preset at all.
    #[must_use]
    pub fn supports_presets(&self) -> bool {
        !self.presets.is_empty() || !self.custom_presets.is_empty()
    }
}

fn swing_modes(vertical: bool, horizontal: bool) -> Vec<ClimateSwingMode> {
    let mut modes = vec![ClimateSwingMode::Off];
    if vertical {
        modes.push(ClimateSwingMode::Vertical);
    }
    if horizontal {
        modes.push(ClimateSwingMode::Horizontal);
    }
    if vertical && horizontal {
        modes.push(ClimateSwingMode::Both);
    }
    modes
}

fn presets(catalog: &AltModeCatalog) -> (Vec<ClimatePreset>, Vec<String>) {
    let mut presets = Vec::new();
    let mut custom = Vec::new();

    for desc in catalog {
        match resolve::preset(desc.value, catalog) {
            Ok(PresetSetting::Standard(preset)) if !presets.contains(&preset) => {
                presets.push(preset);
            }
            Ok(PresetSetting::Custom(name)) => custom.push(name),
            Ok(PresetSetting::Standard(_)) | Err(_) => {}
        }
    }

    (presets, custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FanSetting;

    #[test]
    fn default_config() {
        let traits = ClimateTraits::from_config(&DeviceConfig::default());
        assert!(traits.supports_current_temperature);
        assert_eq!(traits.modes.len(), 6);
        assert_eq!(traits.custom_fan_modes, vec!["Turbo".to_string()]);
        assert_eq!(traits.swing_modes, vec![ClimateSwingMode::Off]);
        assert!(!traits.supports_swing());
        assert!(!traits.supports_presets());
    }

    #[test]
    fn every_published_fan_setting_is_offered() {
        let traits = ClimateTraits::from_config(&DeviceConfig::default());
        assert!(traits.fan_modes.contains(&ClimateFanMode::Off));

        for mode in FanMode::ALL {
            match resolve::fan_setting(mode) {
                Ok(FanSetting::Standard(fan)) => assert!(traits.fan_modes.contains(&fan)),
                Ok(FanSetting::Custom(label)) => assert!(traits.custom_fan_modes.contains(&label)),
                Err(_) => assert_eq!(mode, FanMode::Unknown),
            }
        }
    }

    #[test]
    fn both_axes_add_both() {
        let config = DeviceConfig::new()
            .with_vertical_swing(true)
            .with_horizontal_swing(true);
        let traits = ClimateTraits::from_config(&config);
        assert_eq!(
            traits.swing_modes,
            vec![
                ClimateSwingMode::Off,
                ClimateSwingMode::Vertical,
                ClimateSwingMode::Horizontal,
                ClimateSwingMode::Both,
            ]
        );
    }

    #[test]
    fn horizontal_only() {
        let config = DeviceConfig::new().with_horizontal_swing(true);
        let traits = ClimateTraits::from_config(&config);
        assert_eq!(
            traits.swing_modes,
            vec![ClimateSwingMode::Off, ClimateSwingMode::Horizontal]
        );
    }

    #[test]
    fn presets_split_by_kind() {
        let config = DeviceConfig::new()
            .with_alt_mode("Eco", 3)
            .with_alt_mode("Windfree", 9)
            .with_alt_mode("Sleep", 1);
        let traits = ClimateTraits::from_config(&config);
        assert_eq!(traits.presets, vec![ClimatePreset::Eco, ClimatePreset::Sleep]);
        assert_eq!(traits.custom_presets, vec!["Windfree".to_string()]);
        assert!(traits.supports_presets());
    }
}
