// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seam to the wire protocol.
//!
//! Framing and encoding live outside this crate. A [`Protocol`]
//! implementation turns a sparse [`ProtocolRequest`] into bytes and hands
//! them to a [`MessageTarget`]; a [`ProtocolResolver`] picks the protocol
//! implementation for an address when a device is created.

mod request;

pub use request::ProtocolRequest;

use std::sync::Arc;

use crate::types::DeviceAddress;

/// Outbound byte sink, typically the bus or serial link.
pub trait MessageTarget: Send + Sync {
    /// Writes one encoded frame.
    fn publish_data(&self, data: &[u8]);
}

/// A wire protocol variant spoken by some units.
///
/// Calls are fire-and-forget: no acknowledgement is observed here. The
/// device's state changes only when the unit echoes the new value back as
/// an inbound update.
pub trait Protocol: Send + Sync {
    /// Encodes a sparse write request for `address` and sends it.
    fn publish_request(
        &self,
        target: &dyn MessageTarget,
        address: &DeviceAddress,
        request: &ProtocolRequest,
    );

    /// Asks the unit(s) behind `target` to re-announce their full state.
    fn protocol_update(&self, target: &dyn MessageTarget);
}

/// Selects the protocol implementation for an address.
///
/// Any `Fn(&DeviceAddress) -> Arc<dyn Protocol>` closure is a resolver.
pub trait ProtocolResolver: Send + Sync {
    /// Returns the protocol to use for `address`.
    fn resolve(&self, address: &DeviceAddress) -> Arc<dyn Protocol>;
}

impl<F> ProtocolResolver for F
where
    F: Fn(&DeviceAddress) -> Arc<dyn Protocol> + Send + Sync,
{
    fn resolve(&self, address: &DeviceAddress) -> Arc<dyn Protocol> {
        self(address)
    }
}
