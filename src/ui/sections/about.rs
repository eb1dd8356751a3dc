// SPDX-License-Identifier: MPL-2.0
//! About section: the career objective inside a slowly spinning ring of
//! labels.

use super::layout::{Align, Decoration, Node, Weight};
use super::{fade_up, RenderContext, SectionPresenter, SectionRender};
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::{Easing, Keyframes, MotionDescriptor, MotionKey, MotionState, TiltLimits};
use crate::ui::theming::ColorRole;
use std::time::Duration;

const HEADING: MotionKey = MotionKey::section(SectionId::About, "heading");
const STAGE: MotionKey = MotionKey::section(SectionId::About, "stage");
const ORBIT: MotionKey = MotionKey::section(SectionId::About, "orbit");

pub const ORBIT_PERIOD: Duration = Duration::from_secs(40);
const TILT: TiltLimits = TiltLimits::uniform(6.0);

/// Orbit radius for a layout class.
#[must_use]
pub fn orbit_radius(layout: LayoutClass) -> f32 {
    if layout.compact {
        150.0
    } else {
        250.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AboutSection;

impl SectionPresenter for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn min_height(&self, layout: LayoutClass, _viewport_height: f32) -> f32 {
        if layout.compact {
            620.0
        } else {
            820.0
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender {
        let about = &ctx.content.about;
        let compact = ctx.compact();
        let radius = orbit_radius(ctx.layout);

        let motions = vec![
            fade_up(HEADING, 30.0, Duration::from_millis(800)),
            MotionDescriptor::ambient(
                ORBIT,
                Keyframes::Tween(MotionState::REST, MotionState::REST.rotated(360.0)),
                ORBIT_PERIOD,
            )
            .eased(Easing::Linear),
            MotionDescriptor::tilt(STAGE, TILT),
        ];

        let heading = Node::animated(
            HEADING,
            Node::text(
                about.heading.as_str(),
                if compact { 34.0 } else { 45.0 },
                ColorRole::Heading,
            )
            .weight(Weight::Black)
            .align(Align::Center),
        );

        let center = Node::column(vec![
            Node::text(
                about.objective.as_str(),
                if compact { 14.0 } else { typography::BODY_LG },
                ColorRole::Body,
            )
            .weight(Weight::Semibold)
            .align(Align::Center),
            Node::text(
                about.closing.as_str(),
                if compact { typography::BODY_SM } else { typography::BODY },
                ColorRole::Muted,
            )
            .align(Align::Center),
        ])
        .spacing(spacing::MD)
        .align(Align::Center)
        .max_width(if compact { 200.0 } else { 310.0 });

        let ring = Node::animated(
            ORBIT,
            Node::Decoration(Decoration::Orbit {
                labels: about.orbit.clone(),
                radius,
                caption: None,
            }),
        );

        let stage = Node::interactive(
            STAGE,
            Node::animated(
                STAGE,
                Node::Layers(vec![ring, Node::positioned(0.5, 0.5, center)]),
            ),
        );

        SectionRender {
            layout: Node::column(vec![heading, stage])
                .spacing(spacing::XL)
                .align(Align::Center),
            motions,
        }
    }
}
