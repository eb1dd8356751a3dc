// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the boot outcome: either a mounted [`Session`] (splash, then the
//! portfolio) or the [`MountError`] that prevented mounting, shown with a
//! "Reload" action that re-runs boot. All state is mutated here, on the iced
//! update loop.

pub mod boot;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use session::{Session, SessionOptions};

use crate::config::{self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::MountError;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Result of the last boot.
enum Mount {
    Mounted(Box<Session>),
    Failed {
        error: MountError,
        show_details: bool,
    },
}

/// Root Iced application state.
pub struct App {
    flags: Flags,
    mount: Mount,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("App");
        match &self.mount {
            Mount::Mounted(session) => debug.field("session", session),
            Mount::Failed { error, .. } => debug.field("error", error),
        };
        debug.finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let (config, _) = config::load();
    let (width, height) = config.display.window_size();
    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // Close requests go through `App::update` so the session unmounts
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires the boot closure to be `Fn`
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mount = Self::mount(&flags);
        (App { flags, mount }, Task::none())
    }

    fn mount(flags: &Flags) -> Mount {
        match boot::boot(flags, Instant::now()) {
            Ok(session) => Mount::Mounted(Box::new(session)),
            Err(error) => Mount::Failed {
                error,
                show_details: false,
            },
        }
    }

    /// The mounted session, if boot succeeded.
    pub fn session(&self) -> Option<&Session> {
        match &self.mount {
            Mount::Mounted(session) => Some(session),
            Mount::Failed { .. } => None,
        }
    }

    fn title(&self) -> String {
        let name = self
            .session()
            .map(|session| session.catalog().hero.name.trim().to_string())
            .filter(|name| !name.is_empty());
        match name {
            Some(name) => format!("{name} - Portfolio"),
            None => "Portfolio".to_string(),
        }
    }

    fn theme_mode(&self) -> ThemeMode {
        self.session()
            .map(Session::theme_mode)
            .unwrap_or_default()
    }

    fn theme(&self) -> Theme {
        self.theme_mode().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let Some(session) = self.session() else {
            return event_sub;
        };
        Subscription::batch([
            event_sub,
            subscription::create_splash_subscription(session),
            subscription::create_frame_subscription(session),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::WindowCloseRequested(window_id) = message {
            log::debug!("close requested for window {window_id:?}");
            self.unmount();
            return iced::exit();
        }
        if matches!(self.mount, Mount::Failed { .. }) {
            self.update_failed(message);
            return Task::none();
        }
        let Mount::Mounted(session) = &mut self.mount else {
            return Task::none();
        };
        let session = session.as_mut();

        match message {
            Message::SplashTick => update::handle_splash_tick(session),
            Message::SplashGraceElapsed => update::handle_grace_elapsed(session),
            Message::Frame(now) => {
                session.frame(now);
                Task::none()
            }
            Message::Resized(size) => {
                session.resize(size, Instant::now());
                Task::none()
            }
            Message::Scrolled(offset_y) => {
                session.scroll(offset_y, Instant::now());
                Task::none()
            }
            Message::Section(section_message) => {
                update::handle_section_message(session, section_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(session, navbar_message)
            }
            Message::ThemeToggle(toggle_message) => {
                update::handle_theme_toggle(session, toggle_message)
            }
            Message::WindowCloseRequested(_) | Message::Reload | Message::ToggleErrorDetails => {
                Task::none()
            }
        }
    }

    /// Stops the session's timers ahead of exit.
    fn unmount(&mut self) {
        if let Mount::Mounted(session) = &mut self.mount {
            if session.screen() == Screen::Splash {
                session.cancel_splash();
            }
        }
    }

    fn update_failed(&mut self, message: Message) {
        match message {
            Message::Reload => {
                log::info!("Reloading after mount failure");
                self.mount = Self::mount(&self.flags);
            }
            Message::ToggleErrorDetails => {
                if let Mount::Failed { show_details, .. } = &mut self.mount {
                    *show_details = !*show_details;
                }
            }
            _ => {}
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.mount {
            Mount::Mounted(session) => view::view(session),
            Mount::Failed {
                error,
                show_details,
            } => view::view_mount_error(error, *show_details, &ColorScheme::light()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mount_keeps_app_alive() {
        let flags = Flags {
            mount: Some("sidebar".into()),
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        assert!(app.session().is_none());
        assert_eq!(app.title(), "Portfolio");
        assert_eq!(app.theme_mode(), ThemeMode::Light);

        let _ = app.update(Message::ToggleErrorDetails);
        let _ = app.update(Message::SplashTick);
        let _ = app.update(Message::Reload);
        assert!(app.session().is_none());
        let _element = app.view();
    }

    #[test]
    fn close_during_splash_stops_the_ticker() {
        let session = Session::new(
            SessionOptions {
                storage: Box::new(persisted_state::MemoryStorage::new()),
                window: iced::Size::new(1024.0, 800.0),
                catalog: crate::ui::sections::catalog::Catalog::default(),
                assets: std::path::PathBuf::from("assets/public"),
                seed: crate::test_utils::TEST_SEED,
            },
            Instant::now(),
        );
        let mut app = App {
            flags: Flags::default(),
            mount: Mount::Mounted(Box::new(session)),
        };
        assert!(app.session().is_some_and(|s| s.splash().is_ticking()));

        let _task = app.update(Message::WindowCloseRequested(window::Id::unique()));
        let session = app.session().expect("still mounted");
        assert!(!session.splash().is_ticking());
        assert!(!session.is_animating());
    }
}
