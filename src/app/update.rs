// SPDX-License-Identifier: MPL-2.0
//! Message handlers for a mounted session.
//!
//! Each handler applies one message to the [`Session`] and returns the
//! follow-up task, if any.

use super::session::Session;
use super::Message;
use crate::config::SPLASH_GRACE_DELAY;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::render;
use crate::ui::splash::TickOutcome;
use crate::ui::theme_toggle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Id of the scrollable holding the sections.
pub const PAGE_SCROLL_ID: &str = "portfolio-page";

/// Advances the splash; schedules the grace delay once progress hits 100.
pub fn handle_splash_tick(session: &mut Session) -> Task<Message> {
    match session.splash_tick(Instant::now()) {
        TickOutcome::Finished => Task::perform(tokio::time::sleep(SPLASH_GRACE_DELAY), |()| {
            Message::SplashGraceElapsed
        }),
        TickOutcome::Advanced | TickOutcome::Ignored => Task::none(),
    }
}

pub fn handle_grace_elapsed(session: &mut Session) -> Task<Message> {
    if session.finish_splash(Instant::now()) {
        // A fresh page starts at the top
        operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset::START)
    } else {
        Task::none()
    }
}

pub fn handle_section_message(session: &mut Session, message: render::Message) -> Task<Message> {
    match message {
        render::Message::Pointer { key, event } => {
            session.pointer(key, event, Instant::now());
        }
        render::Message::OpenLink(target) => open_link(&target),
    }
    Task::none()
}

pub fn handle_navbar_message(session: &mut Session, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollTo(section) => operation::snap_to(
            Id::new(PAGE_SCROLL_ID),
            RelativeOffset {
                x: 0.0,
                y: session.scroll_target(section),
            },
        ),
        NavbarEvent::Pointer { key, event } => {
            session.pointer(key, event, Instant::now());
            Task::none()
        }
        NavbarEvent::None => Task::none(),
    }
}

pub fn handle_theme_toggle(session: &mut Session, message: theme_toggle::Message) -> Task<Message> {
    match message {
        theme_toggle::Message::Toggle => {
            session.toggle_theme(Instant::now());
        }
        theme_toggle::Message::Pointer { key, event } => {
            session.pointer(key, event, Instant::now());
        }
    }
    Task::none()
}

/// Opens a link in the system browser or file handler.
///
/// Failures are logged; the page keeps running.
fn open_link(target: &str) {
    log::debug!("opening {target}");
    if let Err(err) = open::that_detached(target) {
        log::warn!("Failed to open {target}: {err}");
    }
}
