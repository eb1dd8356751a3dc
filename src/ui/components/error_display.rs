// SPDX-License-Identifier: MPL-2.0
//! Error panel shown in place of the page when boot fails.
//!
//! The panel has a title, a short explanation, optional technical details
//! behind a toggle and an optional action button (e.g. "Reload").
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Something went wrong")
//!     .message("The portfolio failed to start.")
//!     .details(panic_message)
//!     .action("Reload", Message::Reload)
//!     .view(&colors)
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, rule, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Severity level determines the title color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Nothing can be shown (red)
    #[default]
    Error,
    /// Shown with reduced functionality (amber)
    Warning,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::AMBER_400,
        }
    }
}

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Sets the message to emit when toggling details visibility.
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    /// Renders the panel.
    pub fn view(self, colors: &ColorScheme) -> Element<'static, Message> {
        let accent_color = self.severity.color();
        let muted = colors.muted;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(
                Text::new(title_text)
                    .size(typography::TITLE_MD)
                    .color(accent_color),
            );
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Text::new(message_text)
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .padding([spacing::XS, spacing::LG])
                .on_press(msg)
                .style(styles::button::outlined(colors));
            content = content.push(Container::new(action_btn).padding(spacing::SM));
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_label = if self.show_details {
                    "Hide details"
                } else {
                    "Show details"
                };
                content = content.push(
                    button(text(toggle_label).size(typography::BODY_SM))
                        .on_press(toggle_msg)
                        .style(styles::button::outlined(colors)),
                );
            }

            if self.show_details {
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(text(details_text).size(typography::CAPTION).color(muted)),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(styles::container::panel(colors))
            .into()
    }
}

/// Creates a centered error display that fills its container.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
    colors: &ColorScheme,
) -> Element<'static, Message> {
    Container::new(error_display.view(colors))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::page(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Reload,
        ToggleDetails,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn error_display_builder_works() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Test Error")
            .message("Something went wrong")
            .details("panicked at src/main.rs")
            .details_visible(true)
            .action("Reload", TestMessage::Reload)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title, Some("Test Error".to_string()));
        assert_eq!(display.message, Some("Something went wrong".to_string()));
        assert_eq!(display.action_label, Some("Reload".to_string()));
        assert!(display.show_details);

        let _element = centered_error_view(display, &ColorScheme::light());
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
    }
}
