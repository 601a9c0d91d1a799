// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device address type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Bus address of one physical unit, e.g. `"20.00.00"`.
///
/// The address is opaque to this library: it is compared and hashed but
/// never parsed. It keys exactly one [`Device`](crate::device::Device) for
/// the lifetime of a [`DeviceRegistry`](crate::registry::DeviceRegistry).
///
/// # Examples
///
/// ```
/// use heatpump_sync::types::DeviceAddress;
///
/// let address = DeviceAddress::from("20.00.00");
/// assert_eq!(address.as_str(), "20.00.00");
/// assert_eq!(address.to_string(), "20.00.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    /// Creates an address from any string.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceAddress {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for DeviceAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl AsRef<str> for DeviceAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeviceAddress {
    fn borrow(&self) -> &str {
        &self.0
    }
}
