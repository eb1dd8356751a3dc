// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every timer is present only while it is needed: splash ticks while the
//! splash is running, animation frames while something moves. Window
//! sizes are always routed, starting with the size the window opened at.
//! Close requests are routed so the session unmounts before exit.

use super::session::Session;
use super::Message;
use crate::config::SPLASH_TICK_INTERVAL;
use iced::{event, time, window, Subscription};

/// Routes window sizes and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window_event) => window_message(&window_event, window_id),
        _ => None,
    })
}

/// The opened size replaces the configured one, so the first paint is
/// classified against the real window.
fn window_message(event: &window::Event, window_id: window::Id) -> Option<Message> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            Some(Message::Resized(*size))
        }
        window::Event::CloseRequested => Some(Message::WindowCloseRequested(window_id)),
        _ => None,
    }
}

/// Splash progress ticks, only while the splash is running.
pub fn create_splash_subscription(session: &Session) -> Subscription<Message> {
    if session.splash().is_ticking() {
        time::every(SPLASH_TICK_INTERVAL).map(|_| Message::SplashTick)
    } else {
        Subscription::none()
    }
}

/// Animation frames, only while a motion is in flight.
pub fn create_frame_subscription(session: &Session) -> Subscription<Message> {
    if session.is_animating() {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn opened_and_resized_both_report_size() {
        let id = window::Id::unique();
        let opened = window::Event::Opened {
            position: None,
            size: Size::new(700.0, 900.0),
        };
        assert!(matches!(
            window_message(&opened, id),
            Some(Message::Resized(size)) if size == Size::new(700.0, 900.0)
        ));
        assert!(matches!(
            window_message(&window::Event::Resized(Size::new(1280.0, 800.0)), id),
            Some(Message::Resized(size)) if size.width == 1280.0
        ));
        assert!(window_message(&window::Event::Focused, id).is_none());
    }

    #[test]
    fn close_request_is_routed() {
        let id = window::Id::unique();
        assert!(matches!(
            window_message(&window::Event::CloseRequested, id),
            Some(Message::WindowCloseRequested(routed)) if routed == id
        ));
    }
}
