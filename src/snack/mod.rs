// SPDX-License-Identifier: MPL-2.0
//! Snackbar presentation core.
//!
//! - [`QueueManager`] bounds how many banners are on screen and promotes
//!   waiting requests in FIFO order.
//! - [`Banner`] runs each banner's lifecycle and reports its removal once.
//! - [`LayoutResolver`] stacks banners above the bottom anchor.
//! - [`Snackbar`] wires them to a host [`Surface`].
//!
//! # Example
//!
//! ```
//! use iced_snacks::snack::{
//!     BannerContent, BannerKey, HostMetrics, Position, PresentOptions, Snackbar,
//!     SnackbarConfig, Surface,
//! };
//! use std::time::{Duration, Instant};
//!
//! struct Headless;
//!
//! impl Surface for Headless {
//!     fn metrics(&self) -> HostMetrics {
//!         HostMetrics::new(400.0, 800.0)
//!     }
//!     fn attach(&mut self, _: BannerKey, _: &BannerContent, _: Position, _: Option<Duration>) {}
//!     fn relocate(&mut self, _: BannerKey, _: Position, _: Option<Duration>) {}
//!     fn begin_exit(&mut self, _: BannerKey, _: Option<Duration>) {}
//!     fn detach(&mut self, _: BannerKey) {}
//! }
//!
//! let now = Instant::now();
//! let mut snackbar = Snackbar::with_surface(SnackbarConfig::default(), Headless);
//! let key = snackbar.create_banner(BannerContent::new("Copied").with_action("Undo"));
//! snackbar.present(key, PresentOptions::new(), now)?;
//!
//! assert_eq!(snackbar.positions().len(), 1);
//! # Ok::<(), iced_snacks::Error>(())
//! ```

pub mod banner;
pub mod handle;
pub mod item;
pub mod layout;
pub mod queue;
pub mod signal;
pub mod snackbar;
pub mod stage;
pub mod surface;

pub use banner::{
    Banner, BannerContent, BannerDelegate, BannerState, Completion, DismissCause, ShowRequest,
    Transition,
};
pub use handle::BannerKey;
pub use item::{Presenter, SnackItem};
pub use layout::{HostMetrics, LayoutConfig, LayoutResolver, Placement, Position};
pub use queue::QueueManager;
pub use signal::{Removal, RemovalChannel, RemovalSender};
pub use snackbar::{PresentOptions, Snackbar, SnackbarConfig};
pub use stage::Stage;
pub use surface::Surface;
