// SPDX-License-Identifier: MPL-2.0
//! Projects section: wrapping card grid over two drifting glows.

use super::layout::{Align, Decoration, Node, Weight};
use super::{fade_up, RenderContext, SectionPresenter, SectionRender};
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::{Keyframes, MotionDescriptor, MotionKey, MotionState, Trigger};
use crate::ui::theming::ColorRole;
use std::time::Duration;

const CONTENT: MotionKey = MotionKey::section(SectionId::Projects, "content");
const CARD: MotionKey = MotionKey::section(SectionId::Projects, "card");
const GLOW_EAST: MotionKey = MotionKey::section(SectionId::Projects, "glow-east");
const GLOW_WEST: MotionKey = MotionKey::section(SectionId::Projects, "glow-west");

const CARD_WIDTH: f32 = 330.0;

fn drifting_glow(key: MotionKey, dx: f32, dy: f32, turn: f32, period: Duration) -> MotionDescriptor {
    MotionDescriptor::ambient(
        key,
        Keyframes::Sequence(vec![
            MotionState::REST,
            MotionState::REST.offset(dx, dy).rotated(turn),
            MotionState::REST,
        ]),
        period,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectsSection;

impl SectionPresenter for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn min_height(&self, layout: LayoutClass, _viewport_height: f32) -> f32 {
        if layout.compact {
            1500.0
        } else {
            960.0
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let projects = &ctx.content.projects;
        let compact = ctx.compact();

        let mut motions = vec![
            drifting_glow(GLOW_EAST, 60.0, -40.0, 20.0, Duration::from_secs(20)),
            drifting_glow(GLOW_WEST, -50.0, 30.0, -20.0, Duration::from_secs(18)),
            fade_up(CONTENT, 40.0, Duration::from_millis(800)),
        ];

        let cards: Vec<Node> = projects
            .items
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let key = CARD.at(index);
                #[allow(clippy::cast_possible_truncation)]
                let stagger = Duration::from_millis(200 * index as u64);
                motions.push(
                    MotionDescriptor::entrance(
                        key,
                        MotionState::HIDDEN.offset(0.0, 50.0).tilted(10.0, 0.0),
                        MotionState::REST,
                        Duration::from_millis(700),
                    )
                    .delayed(stagger),
                );
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Hover,
                    MotionState::REST
                        .scaled(1.08)
                        .offset(0.0, -12.0)
                        .tilted(6.0, -8.0)
                        .glowing(1.0),
                ));

                let card = Node::card(
                    Node::column(vec![
                        Node::text(
                            project.title.as_str(),
                            if compact { 19.0 } else { 24.0 },
                            ColorRole::Heading,
                        )
                        .weight(Weight::Semibold),
                        Node::text(
                            project.desc.as_str(),
                            if compact { 14.0 } else { 16.0 },
                            ColorRole::Body,
                        ),
                        Node::text(
                            project.tech.as_str(),
                            if compact { typography::CAPTION } else { typography::BODY_SM },
                            ColorRole::Accent,
                        ),
                    ])
                    .spacing(spacing::MD)
                    .max_width(CARD_WIDTH),
                    if compact { spacing::LG } else { 40.0 },
                    spacing::LG,
                );
                Node::interactive(key, Node::animated(key, card))
            })
            .collect();

        let grid = if compact {
            Node::column(cards).spacing(spacing::MD).align(Align::Center)
        } else {
            Node::row(cards).spacing(spacing::XL).wrapping()
        };

        let content = Node::animated(
            CONTENT,
            Node::column(vec![
                Node::text(
                    projects.heading.as_str(),
                    if compact { 32.0 } else { typography::DISPLAY_MD },
                    ColorRole::Muted,
                )
                .weight(Weight::Black)
                .align(Align::Center),
                Node::text(
                    projects.subtitle.as_str(),
                    if compact { 15.0 } else { typography::BODY_LG },
                    ColorRole::Muted,
                )
                .align(Align::Center),
                grid,
            ])
            .spacing(if compact { spacing::XL } else { spacing::XXL })
            .align(Align::Center)
            .max_width(1200.0),
        );

        let glow = |key, diameter, left, top| {
            Node::positioned(
                left,
                top,
                Node::animated(
                    key,
                    Node::Decoration(Decoration::Blob {
                        role: ColorRole::Glow,
                        diameter,
                    }),
                ),
            )
        };

        SectionRender {
            layout: Node::Layers(vec![
                glow(GLOW_EAST, 500.0, 1.0, 0.0),
                glow(GLOW_WEST, 400.0, 0.0, 1.0),
                Node::positioned(0.5, 0.0, content),
            ]),
            motions,
        }
    }
}
