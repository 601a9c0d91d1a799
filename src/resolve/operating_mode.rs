// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::{ClimateMode, Mode};

/// Derives the climate operating mode from power and mode.
///
/// Returns `None` until both inputs are known. A unit that is powered off
/// is [`ClimateMode::Off`] whatever its mode; a powered unit whose mode has
/// no climate equivalent also falls back to `Off`.
///
/// # Examples
///
/// ```
/// use heatpump_sync::resolve::operating_mode;
/// use heatpump_sync::types::{ClimateMode, Mode};
///
/// assert_eq!(operating_mode(Some(true), None), None);
/// assert_eq!(operating_mode(Some(true), Some(Mode::Heat)), Some(ClimateMode::Heat));
/// assert_eq!(operating_mode(Some(false), Some(Mode::Heat)), Some(ClimateMode::Off));
/// ```
#[must_use]
pub fn operating_mode(power: Option<bool>, mode: Option<Mode>) -> Option<ClimateMode> {
    let (power, mode) = (power?, mode?);
    if !power {
        return Some(ClimateMode::Off);
    }
    Some(mode.to_climate().unwrap_or(ClimateMode::Off))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_until_both_known() {
        assert_eq!(operating_mode(None, None), None);
        assert_eq!(operating_mode(Some(true), None), None);
        assert_eq!(operating_mode(Some(false), None), None);
        assert_eq!(operating_mode(None, Some(Mode::Cool)), None);
    }

    #[test]
    fn power_off_wins() {
        for mode in Mode::ALL {
            assert_eq!(operating_mode(Some(false), Some(mode)), Some(ClimateMode::Off));
        }
    }

    #[test]
    fn power_on_translates_mode() {
        assert_eq!(operating_mode(Some(true), Some(Mode::Auto)), Some(ClimateMode::Auto));
        assert_eq!(operating_mode(Some(true), Some(Mode::Cool)), Some(ClimateMode::Cool));
        assert_eq!(operating_mode(Some(true), Some(Mode::Dry)), Some(ClimateMode::Dry));
        assert_eq!(operating_mode(Some(true), Some(Mode::Fan)), Some(ClimateMode::FanOnly));
        assert_eq!(operating_mode(Some(true), Some(Mode::Heat)), Some(ClimateMode::Heat));
    }

    #[test]
    fn unknown_mode_falls_back_to_off() {
        assert_eq!(operating_mode(Some(true), Some(Mode::Unknown)), Some(ClimateMode::Off));
    }
}
