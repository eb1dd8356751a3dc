// SPDX-License-Identifier: MPL-2.0
//! Hero section: globe scene, floating photos and the typed introduction.

use super::layout::{Decoration, Node, Weight};
use super::{fade_up, jitter_rng, RenderContext, SectionPresenter, SectionRender};
use crate::config::MIN_WINDOW_HEIGHT;
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::motion::{Keyframes, MotionDescriptor, MotionKey, MotionState, Trigger};
use crate::ui::theming::ColorRole;
use crate::ui::typewriter::typewriter;
use rand::Rng;
use std::time::Duration;

const TEXT: MotionKey = MotionKey::section(SectionId::Hero, "text");
const NAME: MotionKey = MotionKey::section(SectionId::Hero, "name");
const NAME_GLOW: MotionKey = MotionKey::section(SectionId::Hero, "name-glow");
const TAGLINE: MotionKey = MotionKey::section(SectionId::Hero, "tagline");
const TAGLINE_TYPING: MotionKey = MotionKey::section(SectionId::Hero, "tagline-typing");
const INTRO: MotionKey = MotionKey::section(SectionId::Hero, "intro");
const SCROLL_HINT: MotionKey = MotionKey::section(SectionId::Hero, "scroll-hint");
const PHOTO: MotionKey = MotionKey::section(SectionId::Hero, "photo");
const GLOW: MotionKey = MotionKey::section(SectionId::Hero, "glow");
const DRIFT: MotionKey = MotionKey::section(SectionId::Hero, "drift");

pub const NAME_CHAR_DELAY: Duration = Duration::from_millis(120);
pub const TAGLINE_CHAR_DELAY: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy, Default)]
pub struct HeroSection;

impl HeroSection {
    fn photos(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Vec<Node> {
        let compact = ctx.compact();
        let size = if compact { 80.0 } else { 120.0 };
        let corner = if compact { radius::MD } else { 18.0 };
        let shown = if compact { 2 } else { 4 };
        let mut rng = jitter_rng(ctx.seed, SectionId::Hero);

        let mut nodes = Vec::new();
        for (index, photo) in ctx.content.hero.photos.iter().take(shown).enumerate() {
            let key = PHOTO.at(index);
            let drift = MotionState::REST
                .offset(rng.random_range(-15.0..15.0), rng.random_range(-15.0..15.0))
                .rotated(rng.random_range(-4.0..4.0))
                .scaled(1.03);
            #[allow(clippy::cast_precision_loss)]
            let position = index as f32;
            motions.push(MotionDescriptor::ambient(
                key,
                Keyframes::Sequence(vec![MotionState::REST, drift, MotionState::REST]),
                Duration::from_secs_f32(7.0 + position * 1.5),
            ));
            motions.push(if compact {
                MotionDescriptor::interaction(
                    key,
                    Trigger::Press,
                    MotionState::REST.scaled(1.2).rotated(10.0),
                )
            } else {
                MotionDescriptor::interaction(
                    key,
                    Trigger::Hover,
                    MotionState::REST.scaled(1.15).rotated(5.0),
                )
            });

            let image = Node::image(ctx.asset(photo), size, size).rounded(corner);
            let left = 0.50 + 0.14 * (index % 2) as f32;
            let top = 0.18 + 0.14 * position;
            nodes.push(Node::positioned(
                left,
                top,
                Node::interactive(key, Node::animated(key, image)),
            ));
        }
        nodes
    }

    fn text_block(ctx: &RenderContext<'_>, motions: &mut Vec<MotionDescriptor>) -> Node {
        let hero = &ctx.content.hero;
        let compact = ctx.compact();
        let (name_size, tagline_size, intro_size) = if compact {
            (35.0, typography::BODY_LG, typography::BODY_SM)
        } else {
            (60.0, typography::TITLE_MD, typography::BODY)
        };

        motions.push(MotionDescriptor::entrance(
            TEXT,
            MotionState::HIDDEN.offset(0.0, 30.0).tilted(10.0, 0.0),
            MotionState::REST,
            Duration::from_secs(1),
        ));
        motions.push(typewriter(NAME, &hero.name, NAME_CHAR_DELAY));
        motions.push(fade_up(TAGLINE, 15.0, Duration::from_millis(600)).delayed(Duration::from_secs(1)));
        motions.push(typewriter(TAGLINE_TYPING, &hero.tagline, TAGLINE_CHAR_DELAY));
        motions.push(
            MotionDescriptor::entrance(
                INTRO,
                MotionState::HIDDEN,
                MotionState::REST,
                Duration::from_millis(600),
            )
            .delayed(Duration::from_millis(2200)),
        );

        let name = Node::animated(
            NAME,
            Node::text(hero.name.as_str(), name_size, ColorRole::Accent)
                .weight(Weight::Black)
                .with_caret(),
        );
        let name = if compact {
            name
        } else {
            motions.push(MotionDescriptor::ambient(
                NAME_GLOW,
                Keyframes::Sequence(vec![
                    MotionState::REST,
                    MotionState::REST.glowing(1.0),
                    MotionState::REST,
                ]),
                Duration::from_secs(3),
            ));
            Node::animated(NAME_GLOW, name)
        };

        let mut children = vec![
            Node::row(vec![
                Node::text("Hi, I'm ", name_size, ColorRole::Heading).weight(Weight::Black),
                name,
            ])
            .wrapping(),
            Node::animated(
                TAGLINE,
                Node::animated(
                    TAGLINE_TYPING,
                    Node::text(hero.tagline.as_str(), tagline_size, ColorRole::Body).with_caret(),
                ),
            ),
            Node::animated(
                INTRO,
                Node::text(hero.intro.as_str(), intro_size, ColorRole::Muted),
            ),
        ];

        if !compact {
            motions.push(
                MotionDescriptor::ambient(
                    SCROLL_HINT,
                    Keyframes::Sequence(vec![
                        MotionState::REST,
                        MotionState::REST.offset(0.0, 10.0),
                        MotionState::REST,
                    ]),
                    Duration::from_millis(1500),
                ),
            );
            children.push(Node::animated(
                SCROLL_HINT,
                Node::text(
                    format!("↓  {}", hero.scroll_hint),
                    typography::BODY_SM,
                    ColorRole::Accent,
                ),
            ));
        }

        let column = Node::column(children)
            .spacing(if compact { spacing::SM } else { spacing::MD })
            .max_width(if compact { 600.0 } else { 520.0 });
        Node::animated(TEXT, column)
    }

    fn glows(motions: &mut Vec<MotionDescriptor>) -> Vec<Node> {
        motions.push(MotionDescriptor::ambient(
            GLOW,
            Keyframes::Sequence(vec![
                MotionState::REST.scaled(0.95),
                MotionState::REST.scaled(1.05),
                MotionState::REST.scaled(0.95),
            ]),
            Duration::from_secs(7),
        ));
        motions.push(MotionDescriptor::ambient(
            DRIFT,
            Keyframes::Sequence(vec![
                MotionState::REST,
                MotionState::REST.offset(80.0, -60.0),
                MotionState::REST,
            ]),
            Duration::from_secs(12),
        ));
        vec![
            Node::positioned(
                0.0,
                0.15,
                Node::animated(
                    DRIFT,
                    Node::Decoration(Decoration::Blob {
                        role: ColorRole::Glow,
                        diameter: 350.0,
                    }),
                ),
            ),
            Node::positioned(
                0.45,
                0.4,
                Node::animated(
                    GLOW,
                    Node::Decoration(Decoration::Blob {
                        role: ColorRole::Highlight,
                        diameter: 280.0,
                    }),
                ),
            ),
        ]
    }
}

impl SectionPresenter for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn min_height(&self, _layout: LayoutClass, viewport_height: f32) -> f32 {
        viewport_height.max(MIN_WINDOW_HEIGHT)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let compact = ctx.compact();
        let mut motions = Vec::new();

        let globe_size = if compact { 320.0 } else { 520.0 };
        let mut layers = vec![Node::positioned(
            if compact { 0.5 } else { 0.6 },
            0.5,
            Node::Decoration(Decoration::Globe { size: globe_size }),
        )];
        if !compact {
            layers.extend(Self::glows(&mut motions));
        }
        layers.extend(Self::photos(ctx, &mut motions));

        let (left, top) = if compact { (0.05, 0.25) } else { (0.08, 0.32) };
        layers.push(Node::positioned(
            left,
            top,
            Self::text_block(ctx, &mut motions),
        ));

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

    fn render(compact: bool, seed: u64) -> SectionRender {
        let catalog = Catalog::embedded().0;
        let mut ctx = render_context(&catalog, ThemeMode::Light, compact, true);
        ctx.seed = seed;
        HeroSection.render(&ctx)
    }

    #[test]
    fn compact_hides_extra_photos_and_glows() {
        let wide = render(false, 1);
        let compact = render(true, 1);
        assert_eq!(wide.layout.images().len(), 4);
        assert_eq!(compact.layout.images().len(), 2);
        assert!(compact.layout.images().iter().all(|img| img.width == 80.0));
        assert!(!compact.layout.motion_keys().contains(&GLOW));
    }

    #[test]
    fn photos_float_with_staggered_periods() {
        let render = render(false, 7);
        let periods: Vec<Duration> = render
            .motions
            .iter()
            .filter(|m| m.key().name == "photo" && m.class() == MotionClass::Ambient)
            .map(MotionDescriptor::duration)
            .collect();
        assert_eq!(
            periods,
            vec![
                Duration::from_secs(7),
                Duration::from_millis(8500),
                Duration::from_secs(10),
                Duration::from_millis(11500),
            ]
        );
    }

    #[test]
    fn float_jitter_is_frozen_per_seed() {
        assert_eq!(render(false, 3).motions, render(false, 3).motions);
        assert_ne!(render(false, 3).motions, render(false, 4).motions);
    }

    #[test]
    fn name_types_at_its_own_speed() {
        let render = render(false, 1);
        let name = render
            .motions
            .iter()
            .find(|m| m.key() == NAME)
            .expect("name typewriter");
        assert_eq!(name.duration(), NAME_CHAR_DELAY * 11);
        let tagline = render
            .motions
            .iter()
            .find(|m| m.key() == TAGLINE_TYPING)
            .expect("tagline typewriter");
        let chars = u32::try_from(Catalog::embedded().0.hero.tagline.chars().count()).expect("len");
        assert_eq!(tagline.duration(), TAGLINE_CHAR_DELAY * chars);
    }

    #[test]
    fn hover_on_wide_press_on_compact() {
        let wide = render(false, 1);
        let compact = render(true, 1);
        assert!(wide
            .motions
            .iter()
            .any(|m| m.class() == MotionClass::Interaction(Trigger::Hover)));
        assert!(compact
            .motions
            .iter()
            .any(|m| m.class() == MotionClass::Interaction(Trigger::Press)));
    }

    #[test]
    fn height_is_one_viewport() {
        assert_eq!(HeroSection.min_height(LayoutClass::WIDE, 900.0), 900.0);
        assert_eq!(HeroSection.min_height(LayoutClass::COMPACT, 100.0), MIN_WINDOW_HEIGHT);
    }
}
