// SPDX-License-Identifier: MPL-2.0
//! Education section: entry cards next to a scattered photo wall.
//!
//! Each photo card is tilted by a small random angle. The angles come from
//! the per-mount seed, so they stay put across theme toggles and resizes and
//! change only when the app is started again.

use super::layout::{Node, Weight};
use super::{fade_up, jitter_rng, RenderContext, SectionPresenter, SectionRender};
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::motion::{MotionDescriptor, MotionKey, MotionState, Trigger};
use crate::ui::theming::ColorRole;
use rand::Rng;
use std::time::Duration;

const TITLE: MotionKey = MotionKey::section(SectionId::Education, "title");
const ENTRY: MotionKey = MotionKey::section(SectionId::Education, "entry");
const PHOTO: MotionKey = MotionKey::section(SectionId::Education, "photo");

/// Largest card tilt either way, in degrees.
pub const MAX_PHOTO_TILT: f32 = 3.0;

/// Card rotations for `count` photos under `seed`.
#[must_use]
pub fn photo_tilts(seed: u64, count: usize) -> Vec<f32> {
    let mut rng = jitter_rng(seed, SectionId::Education);
    (0..count)
        .map(|_| rng.random_range(-MAX_PHOTO_TILT..=MAX_PHOTO_TILT))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EducationSection;

impl EducationSection {
    fn entries(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let education = &ctx.content.education;
        let compact = ctx.compact();

        motions.push(MotionDescriptor::entrance(
            TITLE,
            MotionState::HIDDEN.offset(0.0, -20.0),
            MotionState::REST,
            Duration::from_millis(600),
        ));

        let mut children = vec![
            Node::animated(
                TITLE,
                Node::text(
                    education.title.as_str(),
                    if compact { 35.0 } else { 58.0 },
                    ColorRole::Heading,
                )
                .weight(Weight::Black),
            ),
            Node::text(
                education.heading.as_str(),
                if compact { 24.0 } else { 34.0 },
                ColorRole::Heading,
            )
            .weight(Weight::Semibold),
        ];

        for (index, entry) in education.entries.iter().enumerate() {
            let key = ENTRY.at(index);
            #[allow(clippy::cast_possible_truncation)]
            let stagger = Duration::from_millis(150 * index as u64);
            motions.push(
                MotionDescriptor::entrance(
                    key,
                    MotionState::HIDDEN.offset(-30.0, 0.0),
                    MotionState::REST,
                    Duration::from_millis(600),
                )
                .delayed(stagger),
            );
            motions.push(MotionDescriptor::interaction(
                key,
                Trigger::Hover,
                MotionState::REST.scaled(1.04),
            ));
            if compact {
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Press,
                    MotionState::REST.scaled(0.96).rotated(2.0),
                ));
            }

            let card = Node::card(
                Node::column(vec![
                    Node::text(entry.title.as_str(), typography::TITLE_SM, ColorRole::Heading)
                        .weight(Weight::Black),
                    Node::text(entry.place.as_str(), typography::BODY, ColorRole::Body),
                    Node::text(
                        format!("{} • {}", entry.year, entry.extra),
                        typography::BODY_SM,
                        ColorRole::Muted,
                    ),
                ])
                .spacing(spacing::XS),
                if compact { 19.0 } else { 26.0 },
                if compact { radius::MD } else { 16.0 },
            );
            children.push(Node::interactive(key, Node::animated(key, card)));
        }

        Node::column(children)
            .spacing(spacing::LG)
            .max_width(560.0)
    }

    fn photo_wall(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let photos = &ctx.content.education.photos;
        let compact = ctx.compact();
        let columns = if compact { 2 } else { 3 };
        let width = if compact { 130.0 } else { 150.0 };
        let tilts = photo_tilts(ctx.seed, photos.len());

        let mut stacks: Vec<Vec<Node>> = vec![Vec::new(); columns];
        for (index, (photo, tilt)) in photos.iter().zip(tilts).enumerate() {
            let key = PHOTO.at(index);
            #[allow(clippy::cast_possible_truncation)]
            let stagger = Duration::from_millis(100 * index as u64);
            motions.push(fade_up(key, 40.0, Duration::from_millis(600)).delayed(stagger));
            motions.push(MotionDescriptor::interaction(
                key,
                Trigger::Hover,
                MotionState::REST.scaled(1.08),
            ));
            if compact {
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Press,
                    MotionState::REST.scaled(1.12).rotated(5.0),
                ));
            }

            // Alternate portrait heights give the wall its masonry rhythm.
            #[allow(clippy::cast_precision_loss)]
            let height = width * (1.0 + 0.25 * (index % 3) as f32);
            let image = Node::image(ctx.asset(photo), width, height)
                .rounded(14.0)
                .rotated(tilt);
            let card = Node::card(image, 10.0, 18.0);
            stacks[index % columns].push(Node::interactive(key, Node::animated(key, card)));
        }

        Node::row(
            stacks
                .into_iter()
                .map(|stack| Node::column(stack).spacing(spacing::LG + 5.0))
                .collect(),
        )
        .spacing(if compact { spacing::MD } else { 26.0 })
    }
}

impl SectionPresenter for EducationSection {
    fn id(&self) -> SectionId {
        SectionId::Education
    }

    fn min_height(&self, layout: LayoutClass, _viewport_height: f32) -> f32 {
        if layout.compact {
            2100.0
        } else {
            1350.0
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let mut motions = Vec::new();
        let entries = Self::entries(ctx, &mut motions);
        let wall = Self::photo_wall(ctx, &mut motions);

        let layout = if ctx.compact() {
            Node::column(vec![entries, wall]).spacing(spacing::XL)
        } else {
            Node::row(vec![entries, wall]).spacing(64.0)
        };
        SectionRender { layout, motions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_context;
    use crate::ui::sections::catalog::Catalog;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn tilts_stay_within_bounds() {
        for seed in 0..20 {
            for tilt in photo_tilts(seed, 10) {
                assert!((-MAX_PHOTO_TILT..=MAX_PHOTO_TILT).contains(&tilt));
            }
        }
    }

    #[test]
    fn tilts_are_frozen_for_a_mount() {
        let catalog = Catalog::embedded().0;
        let light = EducationSection.render(&render_context(&catalog, ThemeMode::Light, false, true));
        let dark = EducationSection.render(&render_context(&catalog, ThemeMode::Dark, true, true));
        let angles = |render: &SectionRender| {
            let mut angles: Vec<(String, f32)> = render
                .layout
                .images()
                .iter()
                .map(|img| (img.path.display().to_string(), img.rotation))
                .collect();
            angles.sort_by(|a, b| a.0.cmp(&b.0));
            angles
        };
        assert_eq!(angles(&light), angles(&dark));
    }

    #[test]
    fn different_mounts_get_different_tilts() {
        assert_ne!(photo_tilts(1, 10), photo_tilts(2, 10));
    }

    #[test]
    fn entries_stagger_by_index() {
        let catalog = Catalog::embedded().0;
        let render = EducationSection.render(&render_context(&catalog, ThemeMode::Light, false, true));
        let delays: Vec<Duration> = render
            .motions
            .iter()
            .filter(|m| m.key().name == "entry" && m.class() == crate::ui::motion::MotionClass::Entrance)
            .map(MotionDescriptor::delay)
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(150),
                Duration::from_millis(300)
            ]
        );
    }

    #[test]
    fn all_photos_render() {
        let catalog = Catalog::embedded().0;
        let render = EducationSection.render(&render_context(&catalog, ThemeMode::Light, true, false));
        assert_eq!(render.layout.images().len(), 10);
        assert!(render
            .layout
            .images()
            .iter()
            .all(|img| img.path.starts_with("assets/public")));
    }
}
