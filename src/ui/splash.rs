// SPDX-License-Identifier: MPL-2.0
//! Startup splash.
//!
//! [`SplashSequencer`] drives a 0–100 progress value that decelerates as it
//! approaches the end. Reaching 100 stops the ticker and starts a short
//! grace period; when that elapses the sequencer reports completion exactly
//! once and the app swaps in the portfolio for good.
//!
//! ```text
//! Running(p) ──tick──▶ Running(p') ──tick (p' = 100)──▶ Exiting ──grace──▶ Complete
//!      │                                                   │
//!      └────────────────────── cancel ─────────────────────┴──▶ Cancelled
//! ```

use crate::config::SPLASH_GRACE_DELAY;
use crate::domain::ui::{LayoutClass, Progress};
use crate::ui::design_tokens::{faded, palette, spacing, typography};
use crate::ui::motion::{MotionDescriptor, MotionKey, MotionScope, MotionState, TiltLimits};
use crate::ui::render::{Message, Scene};
use crate::ui::sections::catalog::SplashContent;
use crate::ui::sections::fade_up;
use crate::ui::sections::layout::{Align, Node, Weight};
use crate::ui::styles;
use crate::ui::theming::ColorRole;
use iced::widget::{container, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};
use std::time::Duration;

const SCREEN: MotionKey = MotionKey::new(MotionScope::Splash, "screen");
const EXIT: MotionKey = MotionKey::new(MotionScope::Splash, "exit");
const TAG: MotionKey = MotionKey::new(MotionScope::Splash, "tag");
const TITLE: MotionKey = MotionKey::new(MotionScope::Splash, "title");
const TAGLINE: MotionKey = MotionKey::new(MotionScope::Splash, "tagline");
const BAR: MotionKey = MotionKey::new(MotionScope::Splash, "bar");

/// Largest pointer tilt of the title.
const TITLE_TILT: TiltLimits = TiltLimits::new(18.0, 22.0);
const BAR_WIDTH: f32 = 380.0;
const BAR_HEIGHT: f32 = 8.0;

/// Letters drawn in the secondary color.
const ACCENT_LETTERS: [char; 2] = ['O', 'L'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashPhase {
    Running(Progress),
    /// Progress hit 100; waiting out the grace delay.
    Exiting,
    Complete,
    /// Unmounted before completion.
    Cancelled,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// Progress reached 100; schedule the grace delay.
    Finished,
    /// Not running; the tick was late.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SplashSequencer {
    phase: SplashPhase,
    last: Progress,
}

impl Default for SplashSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SplashPhase::Running(Progress::default()),
            last: Progress::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Latest progress value.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.last
    }

    /// Whether the tick subscription should be alive.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        matches!(self.phase, SplashPhase::Running(_))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }

    /// Advances progress by one step.
    pub fn tick(&mut self) -> TickOutcome {
        let SplashPhase::Running(progress) = self.phase else {
            return TickOutcome::Ignored;
        };
        let next = progress.advanced();
        self.last = next;
        if next.is_complete() {
            log::debug!("splash progress complete");
            self.phase = SplashPhase::Exiting;
            TickOutcome::Finished
        } else {
            self.phase = SplashPhase::Running(next);
            TickOutcome::Advanced
        }
    }

    /// Grace delay is over. Returns true exactly once, when the splash
    /// should hand over to the portfolio.
    pub fn grace_elapsed(&mut self) -> bool {
        if self.phase != SplashPhase::Exiting {
            return false;
        }
        self.phase = SplashPhase::Complete;
        true
    }

    /// Stops the sequence early. Later ticks and grace signals are ignored.
    pub fn cancel(&mut self) {
        if matches!(self.phase, SplashPhase::Running(_) | SplashPhase::Exiting) {
            self.phase = SplashPhase::Cancelled;
        }
    }

    /// Motions of the splash screen for its current phase.
    #[must_use]
    pub fn motions(&self, layout: LayoutClass) -> Vec<MotionDescriptor> {
        let mut motions = vec![
            MotionDescriptor::entrance(
                SCREEN,
                MotionState::HIDDEN,
                MotionState::REST,
                Duration::from_millis(500),
            ),
            MotionDescriptor::entrance(
                TAG,
                MotionState::HIDDEN.offset(0.0, -20.0),
                MotionState::REST,
                Duration::from_millis(600),
            ),
            fade_up(TAGLINE, 15.0, Duration::from_millis(600)).delayed(Duration::from_secs(1)),
            fade_up(BAR, 20.0, Duration::from_millis(600)).delayed(Duration::from_millis(1400)),
        ];
        if !layout.compact {
            motions.push(MotionDescriptor::tilt(TITLE, TITLE_TILT));
        }
        if self.phase == SplashPhase::Exiting {
            motions.push(MotionDescriptor::entrance(
                EXIT,
                MotionState::REST,
                MotionState::HIDDEN,
                SPLASH_GRACE_DELAY,
            ));
        }
        motions
    }

    /// Text part of the splash as a layout tree.
    #[must_use]
    pub fn layout(content: &SplashContent, layout: LayoutClass) -> Node {
        let letter_size = if layout.compact { 44.0 } else { 78.0 };
        let letters = content
            .title
            .chars()
            .map(|letter| {
                let role = if ACCENT_LETTERS.contains(&letter) {
                    ColorRole::Muted
                } else {
                    ColorRole::Heading
                };
                Node::text(letter.to_string(), letter_size, role).weight(Weight::Black)
            })
            .collect();

        Node::column(vec![
            Node::animated(
                TAG,
                Node::card(
                    Node::text(content.tag.as_str(), typography::BODY, ColorRole::Heading)
                        .weight(Weight::Semibold),
                    spacing::XS,
                    30.0,
                )
                .background(ColorRole::Surface),
            ),
            Node::Spacer(spacing::XL),
            Node::interactive(
                TITLE,
                Node::animated(
                    TITLE,
                    Node::row(letters).spacing(if layout.compact { 6.0 } else { 18.0 }),
                ),
            ),
            Node::Spacer(spacing::MD),
            Node::animated(
                TAGLINE,
                Node::text(content.tagline.to_uppercase(), 14.0, ColorRole::Muted),
            ),
        ])
        .align(Align::Center)
    }

    /// Full splash screen.
    #[must_use]
    pub fn view(
        &self,
        scene: &Scene<'_>,
        content: &SplashContent,
        layout: LayoutClass,
    ) -> Element<'static, Message> {
        let colors = &scene.theme.colors;
        let bar_motion = scene.animator.sample_or_rest(BAR, scene.now);
        let fraction = self.progress().as_fraction();

        let track_color = faded(
            if scene.theme.mode.is_dark() {
                palette::WHITE
            } else {
                palette::BLACK
            },
            0.1 * bar_motion.opacity,
        );
        let fill_color = faded(colors.heading, bar_motion.opacity);
        let bar_width = if layout.compact { BAR_WIDTH * 0.75 } else { BAR_WIDTH };

        let fill = container(Space::new().height(Length::Fixed(BAR_HEIGHT)))
            .width(Length::Fixed(bar_width * fraction))
            .style(styles::container::bar(fill_color));
        let track = container(Row::new().push(fill))
            .width(Length::Fixed(bar_width))
            .height(Length::Fixed(BAR_HEIGHT))
            .style(styles::container::bar(track_color));
        let percent = text(format!("{}%", self.progress().percent_label()))
            .size(typography::BODY)
            .color(faded(colors.muted, bar_motion.opacity));

        let bar = crate::ui::widgets::motion_frame(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(track)
                .push(percent),
        )
        .offset(iced::Vector::new(bar_motion.x, bar_motion.y));

        let screen = Node::animated(
            SCREEN,
            Node::animated(EXIT, Self::layout(content, layout)),
        );
        let body = Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(scene.view(&screen))
            .push(Space::new().height(Length::Fixed(60.0)))
            .push(bar);

        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::page(colors))
            .into()
    }
}
