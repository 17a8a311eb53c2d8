// SPDX-License-Identifier: MPL-2.0
//! Banner identity.

slotmap::new_key_type! {
    /// Identity of a banner owned by the host application.
    ///
    /// Keys are generational: once a banner is released its key never
    /// resolves again, even if the arena slot is reused. Two banners with
    /// identical content always have distinct keys.
    pub struct BannerKey;
}
