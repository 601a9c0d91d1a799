// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-modify-write helper for flags packed into one aggregate field.

use std::ops::{BitAnd, BitOr, Not};

/// Sets or clears the bits in `mask`, preserving every other bit of
/// `current`.
///
/// Several independent flags often share one protocol field. Writing a
/// flag by overwriting the whole field would clear its siblings, so
/// every single-flag update goes through here.
///
/// # Examples
///
/// ```
/// use heatpump_sync::bitmask::combine;
///
/// assert_eq!(combine(0b00u8, 0b01, true), 0b01);
/// assert_eq!(combine(0b01u8, 0b10, true), 0b11);
/// assert_eq!(combine(0b11u8, 0b01, false), 0b10);
/// ```
#[must_use]
pub fn combine<T>(current: T, mask: T, set: bool) -> T
where
    T: Copy + BitOr<Output = T> + BitAnd<Output = T> + Not<Output = T>,
{
    if set { current | mask } else { current & !mask }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn set_is_idempotent() {
        assert_eq!(combine(0b01u8, 0b01, true), 0b01);
        assert_eq!(combine(0b00u8, 0b01, false), 0b00);
    }

    #[test]
    fn works_on_wider_fields() {
        assert_eq!(combine(0x8000u16, 0x0001, true), 0x8001);
        assert_eq!(combine(u32::MAX, 0x0000_00F0, false), 0xFFFF_FF0F);
    }

    proptest! {
        #[test]
        fn bits_outside_mask_are_preserved(current: u16, mask: u16, set: bool) {
            let result = combine(current, mask, set);
            prop_assert_eq!(result & !mask, current & !mask);
        }

        #[test]
        fn bits_inside_mask_follow_flag(current: u16, mask: u16, set: bool) {
            let result = combine(current, mask, set);
            prop_assert_eq!(result & mask, if set { mask } else { 0 });
        }
    }
}
