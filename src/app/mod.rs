// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the snackbar from buttons.
//!
//! The `App` owns a [`Snackbar`] rendering into an [`IcedSurface`], feeds it
//! the clock from a frame subscription and records every completion so the
//! lifecycle can be observed on screen.

mod message;
mod subscription;

pub use message::{DemoSnack, Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::snack::{DisplayDuration, MaxConcurrent};
use crate::snack::{
    BannerContent, BannerDelegate, BannerKey, HostMetrics, PresentOptions, Snackbar,
    SnackbarConfig,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::{self, Layer};
use crate::ui::{swipe, IcedSurface};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Completion lines kept on screen.
const OUTCOME_LOG_LEN: usize = 8;

type OutcomeLog = Rc<RefCell<VecDeque<String>>>;

fn record(log: &OutcomeLog, line: String) {
    let mut log = log.borrow_mut();
    if log.len() == OUTCOME_LOG_LEN {
        log.pop_front();
    }
    log.push_back(line);
}

/// Logs action presses reported by banners.
struct OutcomeDelegate {
    label: String,
    log: OutcomeLog,
}

impl BannerDelegate for OutcomeDelegate {
    fn action_pressed(&mut self, _key: BannerKey) {
        record(&self.log, format!("{}: action pressed", self.label));
    }
}

pub struct App {
    snackbar: Snackbar<IcedSurface>,
    diagnostics: DiagnosticsCollector,
    swipe: swipe::State,
    outcomes: OutcomeLog,
    presented: u64,
    last_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("snackbar", &self.snackbar)
            .field("presented", &self.presented)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced calls boot through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(SnackbarConfig::default(), DiagnosticsCollector::default())
    }
}

impl App {
    fn with_config(config: SnackbarConfig, diagnostics: DiagnosticsCollector) -> Self {
        let surface = IcedSurface::new(HostMetrics::new(
            WINDOW_DEFAULT_WIDTH,
            WINDOW_DEFAULT_HEIGHT,
        ));
        let mut snackbar = Snackbar::with_surface(config, surface);
        snackbar.set_diagnostics(diagnostics.handle());

        Self {
            snackbar,
            diagnostics,
            swipe: swipe::State::default(),
            outcomes: Rc::new(RefCell::new(VecDeque::new())),
            presented: 0,
            last_error: None,
        }
    }

    /// Loads preferences and applies command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = &config_warning {
            tracing::warn!(warning = %key, "using default snackbar settings");
        }

        let mut snack_config = SnackbarConfig::from(&config);
        if let Some(max) = flags.max_concurrent {
            snack_config.max_concurrent = MaxConcurrent::new(max);
        }
        tracing::info!(
            max_concurrent = snack_config.max_concurrent.value(),
            "starting snackbar demo"
        );

        let app = Self::with_config(
            snack_config,
            DiagnosticsCollector::new(config.buffer_capacity()),
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        let queue = self.snackbar.queue();
        format!(
            "Iced Snacks ({} shown, {} waiting)",
            queue.displayed_count(),
            queue.pending_count()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self
            .snackbar
            .surface()
            .is_some_and(IcedSurface::is_animating);
        subscription::create(self.snackbar.has_activity() || animating)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Present(kind) => self.present(kind, now),
            Message::Toast(toast::Message::Action(key)) => {
                let result = self.snackbar.press_action(key, now);
                self.check(result.map(|_| ()));
            }
            Message::Toast(toast::Message::Close(key)) => {
                let result = self.snackbar.dismiss(key, true, false, now);
                self.check(result.map(|_| ()));
            }
            Message::Toast(toast::Message::Pointer(pointer)) => {
                if let swipe::Effect::Swiped(key) = self.swipe.handle(pointer) {
                    let result = self.snackbar.swipe(key, now);
                    self.check(result.map(|_| ()));
                }
            }
            Message::CompleteNewest => {
                if let Some(newest) = self.snackbar.positions().last().map(|p| p.key) {
                    let result = self.snackbar.dismiss(newest, true, true, now);
                    self.check(result.map(|_| ()));
                }
            }
            Message::DismissAll => {
                let keys: Vec<BannerKey> =
                    self.snackbar.positions().iter().map(|p| p.key).collect();
                for key in keys {
                    let result = self.snackbar.dismiss(key, true, false, now);
                    self.check(result.map(|_| ()));
                }
            }
            Message::ResetQueue => {
                let discarded = self.snackbar.reset_all();
                record(&self.outcomes, format!("queue reset, {discarded} forgotten"));
            }
            Message::SetMaxConcurrent(max) => {
                self.snackbar
                    .configure_max_concurrent(MaxConcurrent::new(max));
            }
            Message::ToggleUnderContainer => {
                let mut layout = self.snackbar.config().layout;
                layout.show_under_host_container = !layout.show_under_host_container;
                self.snackbar.set_layout(layout);
                self.snackbar.invalidate_layout();
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
            Message::Resized(size) => {
                if let Some(surface) = self.snackbar.surface_mut() {
                    surface.resize(size.width, size.height);
                }
                self.snackbar.invalidate_layout();
            }
            Message::Tick(instant) => {
                if let Some(surface) = self.snackbar.surface_mut() {
                    surface.advance(instant);
                }
                let result = self.snackbar.tick(instant);
                self.check(result);
                self.diagnostics.process_pending();
            }
        }
        Task::none()
    }

    fn present(&mut self, kind: DemoSnack, now: Instant) {
        self.presented += 1;
        let label = format!("#{}", self.presented);

        let (content, duration) = match kind {
            DemoSnack::Simple => (BannerContent::new(format!("Saved {label}")), None),
            DemoSnack::WithAction => (
                BannerContent::new(format!("Deleted {label}"))
                    .with_action("Undo")
                    .with_icon("🗑"),
                None,
            ),
            DemoSnack::Sticky => (
                BannerContent::new(format!("Connection lost {label}")).with_icon("⚠"),
                Some(DisplayDuration::indefinite()),
            ),
            DemoSnack::Long => (
                BannerContent::new(format!(
                    "Sync finished {label}: 128 photos uploaded, 3 skipped because they \
                     already exist in the destination album"
                )),
                Some(DisplayDuration::from_secs(6.0)),
            ),
        };
        let has_action = content.action_label.is_some();

        let key = self.snackbar.create_banner(content);
        if has_action {
            self.snackbar.set_delegate(
                key,
                Box::new(OutcomeDelegate {
                    label: label.clone(),
                    log: Rc::clone(&self.outcomes),
                }),
            );
        }

        let log = Rc::clone(&self.outcomes);
        let mut options = PresentOptions::new().on_complete(move |action_taken| {
            let outcome = if action_taken { "action" } else { "dismissed" };
            record(&log, format!("{label}: {outcome}"));
        });
        if let Some(duration) = duration {
            options = options.duration(duration);
        }

        let result = self.snackbar.present(key, options, now);
        self.check(result);
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let dir = config::paths::config_dir().unwrap_or_else(std::env::temp_dir);
        match self.diagnostics.export_to_dir(&dir) {
            Ok(path) => record(&self.outcomes, format!("events → {}", path.display())),
            Err(err) => self.check(Err(err)),
        }
    }

    fn check(&mut self, result: crate::error::Result<()>) {
        if let Err(err) = result {
            tracing::error!(error = %err, "snackbar operation failed");
            self.last_error = Some(err.to_string());
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let queue = self.snackbar.queue();
        let max = queue.max_concurrent().value();

        let present_row = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Simple")).on_press(Message::Present(DemoSnack::Simple)))
            .push(
                button(Text::new("With action"))
                    .on_press(Message::Present(DemoSnack::WithAction)),
            )
            .push(button(Text::new("Sticky")).on_press(Message::Present(DemoSnack::Sticky)))
            .push(button(Text::new("Long")).on_press(Message::Present(DemoSnack::Long)));

        let control_row = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Complete newest")).on_press(Message::CompleteNewest))
            .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
            .push(button(Text::new("Reset queue")).on_press(Message::ResetQueue));

        let limit_row = Row::new()
            .spacing(spacing::XS)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                button(Text::new("−"))
                    .on_press_maybe((max > 1).then(|| Message::SetMaxConcurrent(max - 1))),
            )
            .push(Text::new(format!("max on screen: {max}")).size(typography::BODY))
            .push(button(Text::new("+")).on_press(Message::SetMaxConcurrent(max + 1)))
            .push(button(Text::new("Toggle under content")).on_press(Message::ToggleUnderContainer))
            .push(button(Text::new("Export events")).on_press(Message::ExportDiagnostics));

        let status = Text::new(format!(
            "{} shown · {} waiting · {} events",
            queue.displayed_count(),
            queue.pending_count(),
            self.diagnostics.len()
        ))
        .size(typography::CAPTION);

        let mut log = Column::new().spacing(spacing::XXS);
        for line in self.outcomes.borrow().iter() {
            log = log.push(Text::new(line.clone()).size(typography::CAPTION));
        }

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(Text::new("Iced Snacks").size(typography::TITLE_SM))
            .push(present_row)
            .push(control_row)
            .push(limit_row)
            .push(status)
            .push(log);
        if let Some(error) = &self.last_error {
            content = content.push(Text::new(error.clone()).size(typography::CAPTION));
        }

        let main = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        let Some(surface) = self.snackbar.surface() else {
            return main.into();
        };

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toast::view_layer(surface, Layer::Under).map(Message::Toast))
            .push(main)
            .push(toast::view_layer(surface, Layer::Over).map(Message::Toast))
            .into()
    }
}
