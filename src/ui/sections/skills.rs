// SPDX-License-Identifier: MPL-2.0
//! Skills section: a tilting game board with a ring of skill labels.

use super::layout::{Align, Decoration, Node, Weight};
use super::{fade_up, RenderContext, SectionPresenter, SectionRender};
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::typography;
use crate::ui::motion::{
    Easing, Keyframes, MotionDescriptor, MotionKey, MotionState, TiltLimits, Trigger,
};
use crate::ui::theming::ColorRole;
use std::time::Duration;

const BOARD: MotionKey = MotionKey::section(SectionId::Skills, "board");
const GRID: MotionKey = MotionKey::section(SectionId::Skills, "grid");
const RING: MotionKey = MotionKey::section(SectionId::Skills, "ring");
const TITLE: MotionKey = MotionKey::section(SectionId::Skills, "title");

pub const RING_PERIOD: Duration = Duration::from_secs(35);
const GRID_PERIOD: Duration = Duration::from_secs(18);
const TILT: TiltLimits = TiltLimits::new(15.0, 18.0);
const GRID_CELL: f32 = 36.0;

/// Ring radius for a layout class.
#[must_use]
pub fn ring_radius(layout: LayoutClass) -> f32 {
    if layout.compact {
        110.0
    } else {
        200.0
    }
}

fn board_size(layout: LayoutClass) -> f32 {
    if layout.compact {
        280.0
    } else {
        480.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsSection;

impl SectionPresenter for SkillsSection {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn min_height(&self, layout: LayoutClass, viewport_height: f32) -> f32 {
        if layout.compact {
            480.0
        } else {
            viewport_height.max(680.0)
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let skills = &ctx.content.skills;
        let size = board_size(ctx.layout);

        let mut motions = vec![
            fade_up(TITLE, 20.0, Duration::from_millis(700)),
            MotionDescriptor::ambient(
                GRID,
                Keyframes::Sequence(vec![
                    MotionState::REST.tilted(52.0, 0.0).rotated(-8.0),
                    MotionState::REST.tilted(58.0, 0.0),
                    MotionState::REST.tilted(52.0, 0.0).rotated(-8.0),
                ]),
                GRID_PERIOD,
            ),
            MotionDescriptor::ambient(
                RING,
                Keyframes::Tween(MotionState::REST, MotionState::REST.rotated(360.0)),
                RING_PERIOD,
            )
            .eased(Easing::Linear),
            MotionDescriptor::tilt(BOARD, TILT),
        ];
        if ctx.compact() {
            motions.push(MotionDescriptor::interaction(
                BOARD,
                Trigger::Press,
                MotionState::REST.scaled(0.96).rotated(5.0),
            ));
        }

        let grid = Node::animated(
            GRID,
            Node::Decoration(Decoration::Grid {
                cell: GRID_CELL,
                width: size,
                height: size,
            }),
        );
        let ring = Node::animated(
            RING,
            Node::Decoration(Decoration::Orbit {
                labels: skills.items.clone(),
                radius: ring_radius(ctx.layout),
                caption: Some(skills.idle_label.clone()),
            }),
        );
        let title = Node::positioned(
            0.5,
            0.45,
            Node::animated(
                TITLE,
                Node::text(skills.heading.as_str(), typography::TITLE_MD, ColorRole::Heading)
                    .weight(Weight::Semibold)
                    .align(Align::Center),
            ),
        );

        let board = Node::interactive(
            BOARD,
            Node::animated(BOARD, Node::Layers(vec![grid, ring, title])),
        );

        SectionRender {
            layout: Node::column(vec![board]).align(Align::Center),
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
        SkillsSection.render(&render_context(&catalog, ThemeMode::Light, compact, true))
    }

    #[test]
    fn ring_radius_follows_layout() {
        assert_abs_diff_eq!(ring_radius(LayoutClass::COMPACT), 110.0);
        assert_abs_diff_eq!(ring_radius(LayoutClass::WIDE), 200.0);
    }

    #[test]
    fn ring_shows_idle_caption() {
        let render = render(false);
        let mut caption = None;
        render.layout.walk(&mut |node| {
            if let Node::Decoration(Decoration::Orbit { caption: c, labels, .. }) = node {
                caption = c.clone();
                assert_eq!(labels.len(), 13);
            }
        });
        assert_eq!(caption.as_deref(), Some("Explore Skills"));
    }

    #[test]
    fn ambient_loops_run_regardless_of_reveal() {
        let catalog = Catalog::embedded().0;
        let hidden = SkillsSection.render(&render_context(&catalog, ThemeMode::Dark, false, false));
        let ambient = hidden
            .motions
            .iter()
            .filter(|m| m.class() == MotionClass::Ambient)
            .count();
        assert_eq!(ambient, 2);
    }

    #[test]
    fn compact_board_reacts_to_press() {
        assert!(render(true)
            .motions
            .iter()
            .any(|m| m.class() == MotionClass::Interaction(Trigger::Press)));
        assert!(!render(false)
            .motions
            .iter()
            .any(|m| m.class() == MotionClass::Interaction(Trigger::Press)));
    }
}
