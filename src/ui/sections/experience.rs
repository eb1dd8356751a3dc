// SPDX-License-Identifier: MPL-2.0
//! Experience section: climbing ladder, timeline, leadership board and the
//! certificate carousel.

use super::catalog::{Certificate, ExperienceContent};
use super::layout::{Align, Decoration, Node, Weight};
use super::{fade_up, RenderContext, SectionPresenter, SectionRender};
use crate::config::CERTIFICATE_SLIDE_INTERVAL;
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion::{Keyframes, MotionDescriptor, MotionKey, MotionState, TiltLimits, Trigger};
use crate::ui::theming::ColorRole;
use std::time::Duration;

const GLOW: MotionKey = MotionKey::section(SectionId::Experience, "glow");
const LADDER: MotionKey = MotionKey::section(SectionId::Experience, "ladder");
const CLIMBER: MotionKey = MotionKey::section(SectionId::Experience, "climber");
const CAPTION: MotionKey = MotionKey::section(SectionId::Experience, "caption");
const JOB: MotionKey = MotionKey::section(SectionId::Experience, "job");
const BOARD: MotionKey = MotionKey::section(SectionId::Experience, "leadership");
const ROLE: MotionKey = MotionKey::section(SectionId::Experience, "role");
const CAROUSEL: MotionKey = MotionKey::section(SectionId::Experience, "carousel");
const SLIDE: MotionKey = MotionKey::section(SectionId::Experience, "slide");

pub const CLIMB_PERIOD: Duration = Duration::from_secs(12);
const BOARD_TILT: TiltLimits = TiltLimits::new(14.0, 18.0);

/// Stepped loop showing certificate `index` of `count` for one slide
/// interval per cycle.
#[must_use]
pub fn slide_keyframes(index: usize, count: usize) -> Keyframes {
    Keyframes::Steps(
        (0..count)
            .map(|slot| {
                if slot == index {
                    MotionState::REST
                } else {
                    MotionState::HIDDEN.offset(80.0, 0.0)
                }
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceSection;

impl ExperienceSection {
    fn ladder(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let content = &ctx.content.experience;
        let height = if ctx.compact() { 240.0 } else { 320.0 };

        motions.push(MotionDescriptor::entrance(
            LADDER,
            MotionState::HIDDEN.offset(-30.0, 0.0).tilted(0.0, -15.0),
            MotionState::REST,
            Duration::from_millis(800),
        ));
        motions.push(MotionDescriptor::ambient(
            CLIMBER,
            Keyframes::Tween(
                MotionState::REST.offset(0.0, height * 0.85 - 40.0),
                MotionState::REST.offset(0.0, height * 0.08),
            ),
            CLIMB_PERIOD,
        ));
        motions.push(fade_up(CAPTION, 10.0, Duration::from_millis(600)).delayed(Duration::from_millis(400)));

        let scene = Node::Layers(vec![
            Node::Decoration(Decoration::Ladder {
                rungs: 6,
                width: 240.0,
                height,
            }),
            Node::positioned(
                0.1,
                0.0,
                Node::animated(CLIMBER, Node::text("🧗", 36.0, ColorRole::Accent)),
            ),
            Node::positioned(
                1.0,
                0.85,
                Node::animated(
                    CAPTION,
                    Node::column(vec![Node::text(
                        content.ladder_caption.as_str(),
                        typography::BODY,
                        ColorRole::Body,
                    )])
                    .max_width(130.0),
                ),
            ),
        ]);

        Node::animated(
            LADDER,
            Node::column(vec![
                Node::text("JOURNEY IN MOTION", typography::BODY, ColorRole::Muted),
                scene,
            ])
            .spacing(spacing::XS),
        )
    }

    fn timeline(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let content = &ctx.content.experience;
        let compact = ctx.compact();
        let mut children = vec![Node::text(
            content.heading.as_str(),
            typography::TITLE_LG,
            ColorRole::Heading,
        )
        .weight(Weight::Black)];

        for (index, job) in content.timeline.iter().enumerate() {
            let key = JOB.at(index);
            #[allow(clippy::cast_possible_truncation)]
            let stagger = Duration::from_millis(200 * index as u64);
            motions.push(fade_up(key, 60.0, Duration::from_millis(700)).delayed(stagger));
            motions.push(MotionDescriptor::interaction(
                key,
                Trigger::Hover,
                MotionState::REST.scaled(1.03).tilted(3.0, -3.0),
            ));
            if compact {
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Press,
                    MotionState::REST.scaled(0.97).rotated(2.0),
                ));
            }

            let mut lines = vec![
                Node::text(job.period.as_str(), typography::CAPTION, ColorRole::Muted),
                Node::text(job.title.as_str(), typography::TITLE_SM, ColorRole::Heading)
                    .weight(Weight::Semibold),
                Node::text(job.subtitle.as_str(), typography::BODY, ColorRole::Accent),
            ];
            lines.extend(
                job.bullets
                    .iter()
                    .map(|bullet| Node::text(format!("•  {bullet}"), typography::BODY, ColorRole::Body)),
            );
            let card = Node::card(
                Node::column(lines).spacing(spacing::XS),
                if compact { spacing::LG } else { spacing::XL },
                if compact { 16.0 } else { 20.0 },
            );
            children.push(Node::interactive(key, Node::animated(key, card)));
        }

        Node::column(children)
            .spacing(if compact { spacing::XL } else { spacing::XXL })
            .max_width(720.0)
    }

    fn leadership(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let content = &ctx.content.experience;
        let compact = ctx.compact();

        motions.push(MotionDescriptor::tilt(BOARD, BOARD_TILT));

        let cards: Vec<Node> = content
            .leadership
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let key = ROLE.at(index);
                motions.push(MotionDescriptor::ambient(
                    key,
                    Keyframes::Sequence(vec![
                        MotionState::REST,
                        MotionState::REST.offset(0.0, -6.0),
                        MotionState::REST,
                    ]),
                    Duration::from_secs(6),
                ));
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Hover,
                    MotionState::REST.scaled(1.08).tilted(5.0, -5.0),
                ));
                if compact {
                    motions.push(MotionDescriptor::interaction(
                        key,
                        Trigger::Press,
                        MotionState::REST.scaled(1.12).rotated(3.0),
                    ));
                }
                let card = Node::card(
                    Node::column(vec![
                        Node::text(item.title.as_str(), typography::TITLE_SM, ColorRole::Heading)
                            .weight(Weight::Semibold)
                            .align(Align::Center),
                        Node::text(item.desc.as_str(), typography::BODY_SM, ColorRole::Muted)
                            .align(Align::Center),
                    ])
                    .spacing(spacing::XS)
                    .align(Align::Center)
                    .max_width(sizing::CARD_MIN_WIDTH),
                    if compact { spacing::LG } else { spacing::XL },
                    if compact { 16.0 } else { 22.0 },
                );
                Node::interactive(key, Node::animated(key, card))
            })
            .collect();

        let grid = if compact {
            Node::column(cards).spacing(spacing::LG).align(Align::Center)
        } else {
            Node::row(cards).spacing(spacing::XL).wrapping()
        };

        Node::column(vec![
            Node::text(
                content.leadership_heading.as_str(),
                if compact { 29.0 } else { 37.0 },
                ColorRole::Heading,
            )
            .weight(Weight::Black),
            Node::interactive(BOARD, Node::animated(BOARD, grid)),
        ])
        .spacing(spacing::XXL)
    }

    fn certificates(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let content: &ExperienceContent = &ctx.content.experience;
        let compact = ctx.compact();
        let count = content.certificates.len();

        motions.push(MotionDescriptor::interaction(
            CAROUSEL,
            Trigger::Hover,
            MotionState::REST.scaled(1.06).tilted(6.0, -6.0),
        ));

        let slides: Vec<Node> = content
            .certificates
            .iter()
            .enumerate()
            .map(|(index, certificate)| {
                let key = SLIDE.at(index);
                #[allow(clippy::cast_possible_truncation)]
                let cycle = CERTIFICATE_SLIDE_INTERVAL * count as u32;
                motions.push(MotionDescriptor::ambient(
                    key,
                    slide_keyframes(index, count),
                    cycle,
                ));
                Node::positioned(
                    0.5,
                    0.0,
                    Node::animated(key, Self::certificate_card(ctx, certificate, compact)),
                )
            })
            .collect();

        let carousel = if slides.is_empty() {
            Node::Spacer(0.0)
        } else {
            Node::interactive(CAROUSEL, Node::animated(CAROUSEL, Node::Layers(slides)))
        };

        Node::column(vec![
            Node::text(
                content.certificates_heading.as_str(),
                if compact { 29.0 } else { 37.0 },
                ColorRole::Heading,
            )
            .weight(Weight::Black),
            carousel,
        ])
        .spacing(spacing::XXL)
        .align(Align::Center)
    }

    fn certificate_card(ctx: &RenderContext<'_>, certificate: &Certificate, compact: bool) -> Node {
        Node::card(
            Node::column(vec![
                Node::image(ctx.asset(&certificate.image), sizing::CERTIFICATE_WIDTH, 140.0)
                    .rounded(14.0),
                Node::text(certificate.title.as_str(), typography::TITLE_SM, ColorRole::Heading)
                    .weight(Weight::Semibold)
                    .align(Align::Center),
                Node::text(certificate.issuer.as_str(), typography::BODY, ColorRole::Body),
                Node::text(certificate.period.as_str(), typography::CAPTION, ColorRole::Muted),
            ])
            .spacing(spacing::XS)
            .align(Align::Center),
            if compact { spacing::LG } else { 40.0 },
            if compact { 16.0 } else { 24.0 },
        )
    }
}

impl SectionPresenter for ExperienceSection {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn min_height(&self, layout: LayoutClass, _viewport_height: f32) -> f32 {
        if layout.compact {
            3000.0
        } else {
            2200.0
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let compact = ctx.compact();
        let mut motions = vec![MotionDescriptor::ambient(
            GLOW,
            Keyframes::Sequence(vec![
                MotionState::REST,
                MotionState::REST.offset(0.0, -30.0),
                MotionState::REST,
            ]),
            Duration::from_secs(12),
        )];

        let ladder = Self::ladder(ctx, &mut motions);
        let timeline = Self::timeline(ctx, &mut motions);
        let journey = if compact {
            Node::column(vec![ladder, timeline]).spacing(spacing::XL)
        } else {
            Node::row(vec![ladder, timeline]).spacing(spacing::XXL)
        };

        let body = Node::column(vec![
            journey,
            Self::leadership(ctx, &mut motions),
            Self::certificates(ctx, &mut motions),
        ])
        .spacing(if compact { spacing::XXL } else { 96.0 });

        let glow = Node::positioned(
            1.0,
            0.0,
            Node::animated(
                GLOW,
                Node::Decoration(Decoration::Blob {
                    role: ColorRole::Glow,
                    diameter: 300.0,
                }),
            ),
        );

        SectionRender {
            layout: Node::Layers(vec![body, glow]),
            motions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, render_context};
    use crate::ui::motion::MotionClass;
    use crate::ui::sections::catalog::Catalog;
    use crate::ui::theming::ThemeMode;

    fn render(compact: bool) -> SectionRender {
        let catalog = Catalog::embedded().0;
        ExperienceSection.render(&render_context(&catalog, ThemeMode::Light, compact, true))
    }

    #[test]
    fn certificates_rotate_every_interval() {
        let render = render(false);
        let slides: Vec<&MotionDescriptor> = render
            .motions
            .iter()
            .filter(|m| m.key().name == "slide")
            .collect();
        assert_eq!(slides.len(), 3);

        let at = |slot: u32| -> Vec<f32> {
            slides
                .iter()
                .map(|m| {
                    m.sample_elapsed(CERTIFICATE_SLIDE_INTERVAL * slot + Duration::from_secs(1))
                        .opacity
                })
                .collect()
        };
        assert_eq!(at(0), vec![1.0, 0.0, 0.0]);
        assert_eq!(at(1), vec![0.0, 1.0, 0.0]);
        assert_eq!(at(2), vec![0.0, 0.0, 1.0]);
        assert_eq!(at(3), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn climber_loops_up_the_ladder() {
        let render = render(false);
        let climber = render
            .motions
            .iter()
            .find(|m| m.key() == CLIMBER)
            .expect("climber");
        assert_eq!(climber.duration(), CLIMB_PERIOD);
        let start = climber.sample_elapsed(Duration::ZERO).y;
        let near_top = climber.sample_elapsed(Duration::from_millis(11_900)).y;
        assert!(near_top < start);
        assert_abs_diff_eq!(climber.sample_elapsed(CLIMB_PERIOD).y, start, epsilon = 1e-3);
    }

    #[test]
    fn timeline_cards_stagger() {
        let render = render(false);
        let delays: Vec<Duration> = render
            .motions
            .iter()
            .filter(|m| m.key().name == "job" && m.class() == MotionClass::Entrance)
            .map(MotionDescriptor::delay)
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(200),
                Duration::from_millis(400)
            ]
        );
    }

    #[test]
    fn leadership_board_tilts_on_wide_only_after_suppression() {
        let mut wide = render(false).motions;
        let mut compact = render(true).motions;
        crate::ui::motion::suppress_for_layout(&mut wide, LayoutClass::WIDE);
        crate::ui::motion::suppress_for_layout(&mut compact, LayoutClass::COMPACT);
        assert!(wide.iter().any(|m| m.key() == BOARD && m.is_pointer_tilt()));
        assert!(!compact.iter().any(MotionDescriptor::is_pointer_tilt));
    }

    #[test]
    fn slide_keyframes_handle_single_certificate() {
        assert_eq!(
            slide_keyframes(0, 1).sample(0.7, crate::ui::motion::Easing::Linear),
            MotionState::REST
        );
    }
}
