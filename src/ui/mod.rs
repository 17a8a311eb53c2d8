// SPDX-License-Identifier: MPL-2.0
//! iced integration: a [`Surface`](crate::snack::Surface) implementation and
//! the toast view that renders it.

pub mod design_tokens;
pub mod iced_surface;
pub mod swipe;
pub mod toast;

pub use iced_surface::{Frame, IcedSurface};
