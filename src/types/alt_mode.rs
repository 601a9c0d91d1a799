// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor alt-modes and the per-device catalog that makes them legal.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::ClimatePreset;

/// Protocol code of a vendor alt-mode.
pub type AltMode = u8;

/// One catalog entry: a display name and its protocol code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltModeDesc {
    /// Name shown to users, e.g. `"Sleep"` or `"Quiet"`.
    pub name: String,
    /// Protocol code sent and received for this alt-mode.
    pub value: AltMode,
}

impl AltModeDesc {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: AltMode) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered list of the alt-modes one physical unit supports.
///
/// Supported alt-modes vary by unit, so the catalog is configured per
/// device. An inbound code that is not listed here is invalid for that
/// device.
///
/// # Examples
///
/// ```
/// use heatpump_sync::types::AltModeCatalog;
///
/// let mut catalog = AltModeCatalog::new();
/// catalog.push("Sleep", 1);
/// catalog.push("Quiet", 2);
///
/// assert_eq!(catalog.find_by_code(2).map(|d| d.name.as_str()), Some("Quiet"));
/// assert!(catalog.find_by_code(99).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AltModeCatalog(Vec<AltModeDesc>);

impl AltModeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Order of insertion is preserved.
    pub fn push(&mut self, name: impl Into<String>, value: AltMode) {
        self.0.push(AltModeDesc::new(name, value));
    }

    /// Finds the entry for a protocol code.
    #[must_use]
    pub fn find_by_code(&self, code: AltMode) -> Option<&AltModeDesc> {
        self.0.iter().find(|desc| desc.value == code)
    }

    /// Finds the entry with exactly this name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&AltModeDesc> {
        self.0.iter().find(|desc| desc.name == name)
    }

    /// Finds the entry whose name maps to the given well-known preset.
    #[must_use]
    pub fn find_by_preset(&self, preset: ClimatePreset) -> Option<&AltModeDesc> {
        self.0
            .iter()
            .find(|desc| ClimatePreset::from_name(&desc.name) == Some(preset))
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, AltModeDesc> {
        self.0.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no alt-modes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that names are non-empty and codes are unique.
    ///
    /// # Errors
    ///
    /// Returns the first offending entry as a `ConfigError`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, desc) in self.0.iter().enumerate() {
            if desc.name.trim().is_empty() {
                return Err(ConfigError::EmptyAltModeName(desc.value));
            }
            if self.0[..i].iter().any(|prev| prev.value == desc.value) {
                return Err(ConfigError::DuplicateAltMode(desc.value));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AltModeCatalog {
    type Item = &'a AltModeDesc;
    type IntoIter = std::slice::Iter<'a, AltModeDesc>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<AltModeDesc> for AltModeCatalog {
    fn from_iter<I: IntoIterator<Item = AltModeDesc>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Preset published on the climate surface.
///
/// Catalog names that match a well-known preset are published as such;
/// everything else is a custom label. Exactly one of the two is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetSetting {
    /// A well-known preset.
    Standard(ClimatePreset),
    /// A vendor-specific label, taken verbatim from the catalog.
    Custom(String),
}

impl PresetSetting {
    /// Returns the well-known preset, if this is one.
    #[must_use]
    pub const fn preset(&self) -> Option<ClimatePreset> {
        match self {
            Self::Standard(preset) => Some(*preset),
            Self::Custom(_) => None,
        }
    }

    /// Returns the custom label, if this is one.
    #[must_use]
    pub fn custom_preset(&self) -> Option<&str> {
        match self {
            Self::Standard(_) => None,
            Self::Custom(name) => Some(name),
        }
    }
}
