// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound path of one device.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::protocol::{MessageTarget, Protocol};
use crate::surface::Writer;
use crate::types::{AltModeCatalog, DeviceAddress};

use super::{FieldCommand, Translation};

/// Translates commands for one device and forwards them to its protocol.
///
/// Cheap to clone: every surface writer holds its own copy, so writers
/// never need a handle back to the [`Device`](crate::device::Device). The
/// catalog is shared with the device, so catalog entries added after a
/// surface was attached are still visible to that surface's writer.
#[derive(Clone)]
pub struct Commander {
    address: DeviceAddress,
    target: Arc<dyn MessageTarget>,
    protocol: Arc<dyn Protocol>,
    catalog: Arc<RwLock<AltModeCatalog>>,
}

impl Commander {
    pub(crate) fn new(
        address: DeviceAddress,
        target: Arc<dyn MessageTarget>,
        protocol: Arc<dyn Protocol>,
        catalog: Arc<RwLock<AltModeCatalog>>,
    ) -> Self {
        Self {
            address,
            target,
            protocol,
            catalog,
        }
    }

    /// Returns the address requests are sent to.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Translates a command and publishes the resulting request.
    ///
    /// Untranslatable parts are logged and dropped. Nothing is sent if no
    /// field survives translation.
    ///
    /// Returns `true` if a request was published.
    pub fn send(&self, command: &FieldCommand) -> bool {
        let Translation { request, rejected } = command.translate(&self.catalog.read());

        for err in &rejected {
            tracing::warn!(
                address = %self.address,
                error = %err,
                "Dropping untranslatable part of command"
            );
        }

        if request.is_empty() {
            tracing::debug!(address = %self.address, ?command, "Command produced no request");
            return false;
        }

        tracing::debug!(address = %self.address, %request, "Publishing request");
        self.protocol
            .publish_request(self.target.as_ref(), &self.address, &request);
        true
    }

    /// Asks the unit to re-announce its full state.
    pub fn refresh(&self) {
        tracing::debug!(address = %self.address, "Requesting full state");
        self.protocol.protocol_update(self.target.as_ref());
    }

    /// Builds a surface writer that wraps every user value into a command.
    pub(crate) fn writer<C, F>(&self, to_command: F) -> Writer<C>
    where
        C: 'static,
        F: Fn(C) -> FieldCommand + Send + Sync + 'static,
    {
        let commander = self.clone();
        Arc::new(move |value: C| {
            commander.send(&to_command(value));
        })
    }
}

impl fmt::Debug for Commander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commander")
            .field("address", &self.address)
            .field("catalog", &*self.catalog.read())
            .finish_non_exhaustive()
    }
}
