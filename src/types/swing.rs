// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Louver swing bitmask.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitmask;

use super::ClimateSwingMode;

/// Aggregate swing field as carried by the protocol.
///
/// Each axis is one bit. Bits outside [`SwingMode::ALL`] are kept as
/// received so that a round trip through this type never loses data.
///
/// # Examples
///
/// ```
/// use heatpump_sync::types::SwingMode;
///
/// let swing = SwingMode::FIX
///     .with_axis(SwingMode::VERTICAL, true)
///     .with_axis(SwingMode::HORIZONTAL, true)
///     .with_axis(SwingMode::VERTICAL, false);
/// assert_eq!(swing, SwingMode::HORIZONTAL);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwingMode(u8);

impl SwingMode {
    /// Both axes fixed.
    pub const FIX: Self = Self(0b00);
    /// Vertical louvers swing.
    pub const VERTICAL: Self = Self(0b01);
    /// Horizontal louvers swing.
    pub const HORIZONTAL: Self = Self(0b10);
    /// Both axes swing.
    pub const ALL: Self = Self(0b11);

    /// Creates a swing mode from raw protocol bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Creates a swing mode from the two axis flags.
    #[must_use]
    pub fn from_flags(vertical: bool, horizontal: bool) -> Self {
        Self::FIX
            .with_axis(Self::VERTICAL, vertical)
            .with_axis(Self::HORIZONTAL, horizontal)
    }

    /// Returns the raw protocol bits.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the vertical louvers swing.
    #[must_use]
    pub const fn vertical(&self) -> bool {
        self.0 & Self::VERTICAL.0 != 0
    }

    /// Returns `true` if the horizontal louvers swing.
    #[must_use]
    pub const fn horizontal(&self) -> bool {
        self.0 & Self::HORIZONTAL.0 != 0
    }

    /// Sets or clears one axis, leaving every other bit untouched.
    #[must_use]
    pub fn with_axis(self, axis: Self, enabled: bool) -> Self {
        Self(bitmask::combine(self.0, axis.0, enabled))
    }

    /// Translates to the climate domain.
    #[must_use]
    pub const fn to_climate(&self) -> ClimateSwingMode {
        match (self.vertical(), self.horizontal()) {
            (false, false) => ClimateSwingMode::Off,
            (true, false) => ClimateSwingMode::Vertical,
            (false, true) => ClimateSwingMode::Horizontal,
            (true, true) => ClimateSwingMode::Both,
        }
    }

    /// Translates from the climate domain.
    #[must_use]
    pub const fn from_climate(mode: ClimateSwingMode) -> Self {
        match mode {
            ClimateSwingMode::Off => Self::FIX,
            ClimateSwingMode::Vertical => Self::VERTICAL,
            ClimateSwingMode::Horizontal => Self::HORIZONTAL,
            ClimateSwingMode::Both => Self::ALL,
        }
    }
}

impl fmt::Debug for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwingMode({:#04b})", self.0)
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_climate().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert!(!SwingMode::FIX.vertical());
        assert!(SwingMode::VERTICAL.vertical());
        assert!(!SwingMode::VERTICAL.horizontal());
        assert!(SwingMode::ALL.vertical() && SwingMode::ALL.horizontal());
    }

    #[test]
    fn from_flags_matches_constants() {
        assert_eq!(SwingMode::from_flags(false, false), SwingMode::FIX);
        assert_eq!(SwingMode::from_flags(true, false), SwingMode::VERTICAL);
        assert_eq!(SwingMode::from_flags(false, true), SwingMode::HORIZONTAL);
        assert_eq!(SwingMode::from_flags(true, true), SwingMode::ALL);
    }

    #[test]
    fn climate_round_trip() {
        for mode in ClimateSwingMode::ALL {
            assert_eq!(SwingMode::from_climate(*mode).to_climate(), *mode);
        }
    }

    #[test]
    fn unrelated_bits_survive_axis_changes() {
        let swing = SwingMode::from_bits(0b1000_0001).with_axis(SwingMode::VERTICAL, false);
        assert_eq!(swing.bits(), 0b1000_0000);
    }

    #[test]
    fn debug_shows_bits() {
        assert_eq!(format!("{:?}", SwingMode::HORIZONTAL), "SwingMode(0b10)");
    }
}
