// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`snack`]: Queue, layout and timing values
//!   ([`MaxConcurrent`](snack::MaxConcurrent), [`WidthPercent`](snack::WidthPercent),
//!   [`DisplayDuration`](snack::DisplayDuration))

pub mod diagnostics;
pub mod snack;
