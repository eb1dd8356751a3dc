// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The portfolio is one scrollable column of fixed-height sections, with the
//! navigation rail and the theme toggle stacked on top.

use super::session::Session;
use super::update::PAGE_SCROLL_ID;
use super::{Message, Screen};
use crate::config::CONTENT_LEFT_OFFSET;
use crate::error::MountError;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::render;
use crate::ui::styles;
use crate::ui::theme_toggle;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{alignment, Element, Length, Padding};

/// Renders a mounted session.
pub fn view(session: &Session) -> Element<'static, Message> {
    match session.screen() {
        Screen::Splash => view_splash(session),
        Screen::Portfolio => view_portfolio(session),
    }
}

fn view_splash(session: &Session) -> Element<'static, Message> {
    session
        .splash()
        .view(&session.scene(), &session.catalog().splash, session.layout())
        .map(Message::Section)
}

fn view_portfolio(session: &Session) -> Element<'static, Message> {
    let scene = session.scene();
    let viewport_height = session.viewport().size.height;

    let sections = session.slots().iter().filter_map(|slot| {
        let output = slot.rendered()?;
        let section: Element<'static, render::Message> = Container::new(scene.view(&output.layout))
            .width(Length::Fill)
            .height(Length::Fixed(slot.height(viewport_height)))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .clip(true)
            .into();
        Some(section.map(Message::Section))
    });

    let page = Scrollable::new(Column::with_children(sections).width(Length::Fill))
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: CONTENT_LEFT_OFFSET,
            ..Padding::ZERO
        })
        .style(styles::container::page(&session.theme().colors));

    let rail = navbar::view(&NavbarViewContext {
        scene,
        active: session.active_section(),
    })
    .map(Message::Navbar);

    let toggle = Container::new(theme_toggle::view(&scene).map(Message::ThemeToggle))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::LG - 4.0);

    Stack::new().push(page).push(rail).push(toggle).into()
}

/// Fallback shown when boot failed.
pub fn view_mount_error(
    error: &MountError,
    show_details: bool,
    colors: &ColorScheme,
) -> Element<'static, Message> {
    let display = match error {
        MountError::RootNotFound(name) => ErrorDisplay::new(severity(error))
            .title(error.to_string())
            .message(format!("No mount point named \"{name}\" is available."))
            .action("Reload", Message::Reload),
        MountError::InitPanicked(reason) => ErrorDisplay::new(severity(error))
            .title("Something went wrong")
            .message("The portfolio failed to start.")
            .details(reason.clone())
            .details_visible(show_details)
            .on_toggle_details(Message::ToggleErrorDetails)
            .action("Reload", Message::Reload),
    };
    centered_error_view(display, colors)
}

/// Missing mount points show as warnings, panics as errors.
fn severity(error: &MountError) -> ErrorSeverity {
    match error {
        MountError::RootNotFound(_) => ErrorSeverity::Warning,
        MountError::InitPanicked(_) => ErrorSeverity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::MemoryStorage;
    use crate::app::session::SessionOptions;
    use crate::test_utils::TEST_SEED;
    use crate::ui::sections::catalog::Catalog;
    use crate::ui::splash::TickOutcome;
    use iced::Size;
    use std::path::PathBuf;
    use std::time::Instant;

    #[test]
    fn splash_and_portfolio_render() {
        let now = Instant::now();
        let mut session = Session::new(
            SessionOptions {
                storage: Box::new(MemoryStorage::new()),
                window: Size::new(1024.0, 800.0),
                catalog: Catalog::embedded().0,
                assets: PathBuf::from("assets/public"),
                seed: TEST_SEED,
            },
            now,
        );
        let _splash = view(&session);

        while session.splash_tick(now) == TickOutcome::Advanced {}
        assert!(session.finish_splash(now));
        let _portfolio = view(&session);
    }

    #[test]
    fn mount_errors_render() {
        let colors = ColorScheme::light();
        let _missing = view_mount_error(&MountError::RootNotFound("app".into()), false, &colors);
        let _panicked =
            view_mount_error(&MountError::InitPanicked("boom".into()), true, &colors);
    }

    #[test]
    fn missing_mount_is_a_warning() {
        assert_eq!(
            severity(&MountError::RootNotFound("app".into())),
            ErrorSeverity::Warning
        );
        assert_eq!(
            severity(&MountError::InitPanicked("boom".into())),
            ErrorSeverity::Error
        );
    }
}
