// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ValueError;
use crate::types::{AltMode, AltModeCatalog, ClimatePreset, PresetSetting};

/// Resolves an inbound alt-mode code to the preset shown on the climate
/// surface.
///
/// The code must be listed in the device's catalog. The catalog name
/// becomes a well-known preset when one matches, otherwise a custom label.
///
/// # Errors
///
/// Returns `ValueError::UnsupportedAltMode` if the code is not in the
/// catalog.
///
/// # Examples
///
/// ```
/// use heatpump_sync::resolve::preset;
/// use heatpump_sync::types::{AltModeCatalog, ClimatePreset, PresetSetting};
///
/// let mut catalog = AltModeCatalog::new();
/// catalog.push("Sleep", 1);
/// catalog.push("Quiet", 2);
///
/// assert_eq!(preset(1, &catalog).unwrap(), PresetSetting::Standard(ClimatePreset::Sleep));
/// assert_eq!(preset(2, &catalog).unwrap(), PresetSetting::Custom("Quiet".into()));
/// assert!(preset(99, &catalog).is_err());
/// ```
pub fn preset(code: AltMode, catalog: &AltModeCatalog) -> Result<PresetSetting, ValueError> {
    let desc = catalog
        .find_by_code(code)
        .ok_or(ValueError::UnsupportedAltMode(code))?;

    Ok(match ClimatePreset::from_name(&desc.name) {
        Some(preset) => PresetSetting::Standard(preset),
        None => PresetSetting::Custom(desc.name.clone()),
    })
}

/// Finds the alt-mode code to request for a preset chosen on the climate
/// surface.
///
/// # Errors
///
/// Returns `ValueError::UnsupportedPreset` if no catalog entry carries
/// that preset's name.
pub fn preset_code(setting: &PresetSetting, catalog: &AltModeCatalog) -> Result<AltMode, ValueError> {
    let desc = match setting {
        PresetSetting::Standard(preset) => catalog.find_by_preset(*preset),
        PresetSetting::Custom(name) => catalog.find_by_name(name),
    };

    desc.map(|desc| desc.value).ok_or_else(|| {
        let label = match setting {
            PresetSetting::Standard(preset) => preset.as_str().to_string(),
            PresetSetting::Custom(name) => name.clone(),
        };
        ValueError::UnsupportedPreset(label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AltModeCatalog {
        let mut catalog = AltModeCatalog::new();
        catalog.push("Sleep", 1);
        catalog.push("Quiet", 2);
        catalog.push("Eco", 5);
        catalog
    }

    #[test]
    fn well_known_names_become_standard_presets() {
        assert_eq!(
            preset(5, &catalog()),
            Ok(PresetSetting::Standard(ClimatePreset::Eco))
        );
    }

    #[test]
    fn vendor_names_become_custom_presets() {
        assert_eq!(
            preset(2, &catalog()),
            Ok(PresetSetting::Custom("Quiet".to_string()))
        );
    }

    #[test]
    fn codes_outside_catalog_are_rejected() {
        assert_eq!(preset(99, &catalog()), Err(ValueError::UnsupportedAltMode(99)));
        assert_eq!(
            preset(1, &AltModeCatalog::new()),
            Err(ValueError::UnsupportedAltMode(1))
        );
    }

    #[test]
    fn preset_code_inverts_preset() {
        let catalog = catalog();
        for desc in &catalog {
            let setting = preset(desc.value, &catalog).unwrap();
            assert_eq!(preset_code(&setting, &catalog), Ok(desc.value));
        }
    }

    #[test]
    fn preset_code_unknown_name() {
        assert_eq!(
            preset_code(&PresetSetting::Standard(ClimatePreset::Away), &catalog()),
            Err(ValueError::UnsupportedPreset("away".to_string()))
        );
        assert_eq!(
            preset_code(&PresetSetting::Custom("Windfree".to_string()), &catalog()),
            Err(ValueError::UnsupportedPreset("Windfree".to_string()))
        );
    }
}
