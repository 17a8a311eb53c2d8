// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::toast;
use std::time::Instant;

/// Kinds of banner the demo can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSnack {
    /// Title only, auto-dismissed.
    Simple,
    /// Title with an "Undo" action.
    WithAction,
    /// Stays until dismissed.
    Sticky,
    /// Long title that wraps onto several lines.
    Long,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Present(DemoSnack),
    Toast(toast::Message),
    /// Dismiss the most recent banner as if its action had been taken.
    CompleteNewest,
    DismissAll,
    ResetQueue,
    SetMaxConcurrent(usize),
    ToggleUnderContainer,
    ExportDiagnostics,
    Resized(iced::Size),
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides `[queue] max_concurrent` from the config file.
    pub max_concurrent: Option<usize>,
}
