// SPDX-License-Identifier: MPL-2.0
//! `iced_snacks` presents transient notification banners stacked at the
//! bottom of a host window.
//!
//! The [`snack`] module holds the framework-independent core: a bounded
//! FIFO presentation queue, the per-banner lifecycle and the stacking
//! layout. [`ui`] renders it with iced and [`app`] is a small demo.

#![doc(html_root_url = "https://docs.rs/iced_snacks/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod snack;
pub mod ui;

pub use error::{Error, Result};
