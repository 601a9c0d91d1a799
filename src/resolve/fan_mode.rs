// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ValueError;
use crate::types::{FanMode, FanSetting};

/// Resolves an inbound fan speed to the setting shown on the climate
/// surface.
///
/// # Errors
///
/// Returns `ValueError::UnmappedFanMode` for [`FanMode::Unknown`], which
/// has neither a well-known nor a custom label.
pub fn fan_setting(mode: FanMode) -> Result<FanSetting, ValueError> {
    if let Some(standard) = mode.to_climate() {
        return Ok(FanSetting::Standard(standard));
    }
    mode.custom_label()
        .map(|label| FanSetting::Custom(label.to_string()))
        .ok_or_else(|| ValueError::UnmappedFanMode(mode.as_str().to_string()))
}

/// Translates a fan setting chosen on the climate surface back to a
/// protocol fan speed.
///
/// # Errors
///
/// Returns `ValueError::UnmappedFanMode` if a custom label names no speed.
pub fn fan_mode(setting: &FanSetting) -> Result<FanMode, ValueError> {
    match setting {
        FanSetting::Standard(mode) => Ok(FanMode::from_climate(*mode)),
        FanSetting::Custom(label) => FanMode::from_custom_label(label)
            .ok_or_else(|| ValueError::UnmappedFanMode(label.clone())),
    }
}
