// SPDX-License-Identifier: MPL-2.0
//! Navigation rail fixed to the left edge of the portfolio.
//!
//! The rail lists every section; the entry for the section under the
//! viewport top is highlighted, and clicking an entry jumps straight to it.

use crate::config::NAV_RAIL_WIDTH;
use crate::domain::ui::SectionId;
use crate::ui::design_tokens::{faded, radius, spacing, typography};
use crate::ui::motion::{MotionDescriptor, MotionKey, MotionScope, MotionState, Trigger};
use crate::ui::render::{frame_transform, Scene};
use crate::ui::styles;
use crate::ui::widgets::{motion_frame, pointer_area, PointerEvent};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, font, Element, Font, Length};
use std::time::Duration;

const RAIL: MotionKey = MotionKey::new(MotionScope::Navigation, "rail");
const LINK: MotionKey = MotionKey::new(MotionScope::Navigation, "link");

const LINK_DELAY: Duration = Duration::from_millis(400);
const LINK_STAGGER: Duration = Duration::from_millis(50);
const INDICATOR_WIDTH: f32 = 4.0;
const INDICATOR_HEIGHT: f32 = 22.0;

/// Messages emitted by the rail.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Select(SectionId),
    Pointer { key: MotionKey, event: PointerEvent },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    Pointer { key: MotionKey, event: PointerEvent },
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(section) => {
            log::debug!("navigating to {section}");
            Event::ScrollTo(section)
        }
        Message::Pointer { key, event } => Event::Pointer { key, event },
    }
}

/// Slide-in of the rail and its entries, plus the entry hover.
#[must_use]
pub fn motions() -> Vec<MotionDescriptor> {
    let mut motions = vec![MotionDescriptor::entrance(
        RAIL,
        MotionState::HIDDEN.offset(-100.0, 0.0),
        MotionState::REST,
        Duration::from_millis(600),
    )
    .delayed(Duration::from_millis(300))];

    for section in SectionId::ALL {
        let key = LINK.at(section.index());
        #[allow(clippy::cast_possible_truncation)]
        let stagger = LINK_STAGGER * section.index() as u32;
        motions.push(
            MotionDescriptor::entrance(
                key,
                MotionState::HIDDEN.offset(-20.0, 0.0),
                MotionState::REST,
                Duration::from_millis(300),
            )
            .delayed(LINK_DELAY + stagger),
        );
        motions.push(MotionDescriptor::interaction(
            key,
            Trigger::Hover,
            MotionState::REST.scaled(1.1).offset(5.0, 0.0),
        ));
    }
    motions
}

/// Contextual data needed to render the rail.
pub struct ViewContext<'a> {
    pub scene: Scene<'a>,
    pub active: SectionId,
}

pub fn view(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let colors = &ctx.scene.theme.colors;
    let rail = ctx.scene.animator.sample_or_rest(RAIL, ctx.scene.now);

    let mut entries = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Space::new().height(Length::Fixed(spacing::XXL)));
    for section in SectionId::ALL {
        entries = entries.push(entry(ctx, section, rail.opacity));
    }

    let (offset, _) = frame_transform(&rail);
    motion_frame(
        Container::new(entries)
            .width(Length::Fixed(NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .style(styles::container::nav_rail(colors, rail.opacity)),
    )
    .offset(offset)
    .into()
}

fn entry(ctx: &ViewContext<'_>, section: SectionId, rail_opacity: f32) -> Element<'static, Message> {
    let colors = &ctx.scene.theme.colors;
    let key = LINK.at(section.index());
    let own = ctx.scene.animator.sample_or_rest(key, ctx.scene.now);
    let opacity = rail_opacity * own.opacity;
    let active = section == ctx.active;

    let label = text(section.nav_label())
        .size(if active { 20.0 } else { typography::BODY_LG })
        .font(Font {
            weight: if active {
                font::Weight::Semibold
            } else {
                font::Weight::Normal
            },
            ..Font::default()
        });
    let link = button(label)
        .padding([6.0, 10.0])
        .on_press(Message::Select(section))
        .style(styles::button::nav_link(colors, active, opacity));

    let indicator_color = if active {
        faded(colors.nav_active, opacity)
    } else {
        iced::Color::TRANSPARENT
    };
    let indicator = container(Space::new().height(Length::Fixed(INDICATOR_HEIGHT)))
        .width(Length::Fixed(INDICATOR_WIDTH))
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(iced::Background::Color(indicator_color)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..iced::Border::default()
            },
            ..container::Style::default()
        });

    let row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(indicator)
        .push(link);

    let (offset, scale) = frame_transform(&own);
    pointer_area(motion_frame(row).offset(offset).scale(scale), move |event| {
        Message::Pointer { key, event }
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::motion::{Animator, MotionClass};
    use crate::ui::theming::{AppTheme, ThemeMode};
    use crate::ui::widgets::orbit_scene::SceneClock;
    use std::time::Instant;

    #[test]
    fn select_scrolls_to_section() {
        assert_eq!(
            update(Message::Select(SectionId::Projects)),
            Event::ScrollTo(SectionId::Projects)
        );
    }

    #[test]
    fn pointer_events_pass_through() {
        let key = LINK.at(2);
        assert_eq!(
            update(Message::Pointer {
                key,
                event: PointerEvent::Entered
            }),
            Event::Pointer {
                key,
                event: PointerEvent::Entered
            }
        );
    }

    #[test]
    fn links_are_staggered_after_the_rail() {
        let motions = motions();
        let delays: Vec<Duration> = motions
            .iter()
            .filter(|m| m.key().name == "link" && m.class() == MotionClass::Entrance)
            .map(MotionDescriptor::delay)
            .collect();
        assert_eq!(delays.len(), SectionId::ALL.len());
        assert_eq!(delays[0], Duration::from_millis(400));
        assert_eq!(delays[6], Duration::from_millis(700));
        assert!(motions.iter().all(|m| m.key().scope == MotionScope::Navigation));
    }

    #[test]
    fn rail_renders_in_both_themes() {
        let animator = Animator::new();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = AppTheme::new(mode);
            let ctx = ViewContext {
                scene: Scene {
                    animator: &animator,
                    theme: &theme,
                    now: Instant::now(),
                    clock: SceneClock::default(),
                },
                active: SectionId::About,
            };
            let _element = view(&ctx);
        }
    }
}
