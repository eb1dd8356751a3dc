// SPDX-License-Identifier: MPL-2.0
//! Contact section: floating photos over a grid, with the link buttons in
//! the middle.

use super::catalog::is_external;
use super::layout::{Align, Decoration, Node};
use super::{fade_up, RenderContext, SectionPresenter, SectionRender};
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::{Keyframes, MotionDescriptor, MotionKey, MotionState, Trigger};
use crate::ui::theming::ColorRole;
use std::time::Duration;

const CONTENT: MotionKey = MotionKey::section(SectionId::Contact, "content");
const LINK: MotionKey = MotionKey::section(SectionId::Contact, "link");
const PHOTO: MotionKey = MotionKey::section(SectionId::Contact, "photo");
const PHOTO_BOB: MotionKey = MotionKey::section(SectionId::Contact, "photo-bob");
const PHOTO_SWAY: MotionKey = MotionKey::section(SectionId::Contact, "photo-sway");

const GRID_CELL: f32 = 44.0;
const COMPACT_PHOTO_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSection;

impl ContactSection {
    fn photos(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Vec<Node> {
        let compact = ctx.compact();
        let size = if compact { 95.0 } else { 185.0 };
        let limit = if compact {
            COMPACT_PHOTO_LIMIT
        } else {
            usize::MAX
        };

        ctx.content
            .contact
            .photos
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, photo)| {
                let key = PHOTO.at(index);
                let bob = PHOTO_BOB.at(index);
                let sway = PHOTO_SWAY.at(index);
                #[allow(clippy::cast_precision_loss)]
                let position = index as f32;

                motions.push(MotionDescriptor::entrance(
                    key,
                    MotionState::HIDDEN.scaled(0.85).offset(0.0, 30.0),
                    MotionState::REST,
                    Duration::from_millis(700),
                ));
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Hover,
                    MotionState::REST.scaled(1.15).rotated(-photo.rotate).glowing(1.0),
                ));
                if compact {
                    motions.push(MotionDescriptor::interaction(
                        key,
                        Trigger::Press,
                        MotionState::REST.scaled(1.25).rotated(10.0),
                    ));
                }
                motions.push(MotionDescriptor::ambient(
                    bob,
                    Keyframes::Sequence(vec![
                        MotionState::REST,
                        MotionState::REST.offset(0.0, -12.0),
                        MotionState::REST,
                    ]),
                    Duration::from_secs_f32(4.0 + position * 0.5),
                ));
                motions.push(MotionDescriptor::ambient(
                    sway,
                    Keyframes::Sequence(vec![
                        MotionState::REST,
                        MotionState::REST.rotated(2.0),
                        MotionState::REST,
                    ]),
                    Duration::from_secs_f32(5.0 + position * 0.3),
                ));

                let image = Node::image(ctx.asset(&photo.src), size, size)
                    .rounded(22.0)
                    .rotated(photo.rotate);
                let (left, top) = if compact {
                    (photo.left * 0.7, photo.top * 0.6)
                } else {
                    (photo.left, photo.top)
                };
                Node::positioned(
                    left,
                    top,
                    Node::interactive(
                        key,
                        Node::animated(
                            key,
                            Node::animated(bob, Node::animated(sway, image)),
                        ),
                    ),
                )
            })
            .collect()
    }

    fn links(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let buttons = ctx
            .content
            .contact
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let key = LINK.at(index);
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Hover,
                    MotionState::REST.scaled(1.15).offset(0.0, -6.0).rotated(2.0),
                ));
                motions.push(MotionDescriptor::interaction(
                    key,
                    Trigger::Press,
                    MotionState::REST.scaled(0.92).rotated(-3.0),
                ));
                let target = if is_external(&link.href) {
                    link.href.clone()
                } else {
                    ctx.asset(&link.href).display().to_string()
                };
                Node::interactive(
                    key,
                    Node::animated(key, Node::link(format!("{} ↗", link.label), target)),
                )
            })
            .collect();
        Node::row(buttons).spacing(14.0).wrapping()
    }
}

impl SectionPresenter for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn min_height(&self, layout: LayoutClass, viewport_height: f32) -> f32 {
        if layout.compact {
            viewport_height.max(640.0)
        } else {
            viewport_height.max(760.0)
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let contact = &ctx.content.contact;
        let compact = ctx.compact();
        let mut motions = vec![fade_up(CONTENT, 40.0, Duration::from_secs(1))];

        let mut layers = vec![Node::Decoration(Decoration::Grid {
            cell: GRID_CELL,
            width: f32::INFINITY,
            height: f32::INFINITY,
        })];
        layers.extend(Self::photos(ctx, &mut motions));

        let content = Node::column(vec![
            Node::text(
                contact.heading.as_str(),
                if compact { 46.0 } else { 56.0 },
                ColorRole::Heading,
            )
            .align(Align::Center),
            Node::text(
                contact.subtitle.as_str(),
                if compact { 15.0 } else { typography::BODY_LG },
                ColorRole::Body,
            )
            .align(Align::Center),
            Self::links(ctx, &mut motions),
        ])
        .spacing(spacing::LG)
        .align(Align::Center)
        .max_width(560.0);
        layers.push(Node::positioned(0.5, 0.5, Node::animated(CONTENT, content)));

        SectionRender {
            layout: Node::Layers(layers),
            motions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_context;
    use crate::ui::motion::MotionClass;
    use crate::ui::sections::catalog::Catalog;
    use crate::ui::theming::ThemeMode;

    fn render(compact: bool) -> SectionRender {
        let catalog = Catalog::embedded().0;
        ContactSection.render(&render_context(&catalog, ThemeMode::Light, compact, true))
    }

    #[test]
    fn compact_keeps_first_four_photos() {
        assert_eq!(render(false).layout.images().len(), 6);
        let compact = render(true);
        assert_eq!(compact.layout.images().len(), 4);
        assert!(compact.layout.images().iter().all(|img| img.width == 95.0));
    }

    #[test]
    fn links_resolve_local_targets() {
        let render = render(false);
        let mut targets = Vec::new();
        render.layout.walk(&mut |node| {
            if let Node::Link { target, .. } = node {
                targets.push(target.clone());
            }
        });
        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0], "https://linkedin.com/in/palak-goyal/");
        assert!(targets[2].starts_with("mailto:"));
        assert!(targets[3].ends_with("Palak_Goyal_Resume.pdf"));
        assert!(targets[3].starts_with("assets/public"));
    }

    #[test]
    fn photo_bob_and_sway_are_separate_loops() {
        let render = render(false);
        let bob = render
            .motions
            .iter()
            .filter(|m| m.key().name == "photo-bob")
            .count();
        let sway = render
            .motions
            .iter()
            .filter(|m| m.key().name == "photo-sway")
            .count();
        assert_eq!((bob, sway), (6, 6));
        assert!(render
            .motions
            .iter()
            .filter(|m| m.key().name.starts_with("photo-"))
            .all(|m| m.class() == MotionClass::Ambient));
    }

    #[test]
    fn photos_keep_their_static_rotation() {
        let render = render(false);
        let rotations: Vec<f32> = render.layout.images().iter().map(|img| img.rotation).collect();
        assert_eq!(rotations, vec![-12.0, 10.0, 8.0, -10.0, 6.0, -8.0]);
    }
}
