// SPDX-License-Identifier: MPL-2.0
//! Turns section layout trees into iced widgets.
//!
//! Every [`Node::Motion`] samples the [`Animator`] and splits the result:
//! offset and scale go to a [`MotionFrame`](crate::ui::widgets::MotionFrame)
//! around the subtree, while opacity, rotation, tilt, glow and reveal flow
//! down to the leaves that can express them (text color, image opacity and
//! rotation, card halo, canvas ornaments).

use crate::ui::design_tokens::{faded, spacing, typography};
use crate::ui::motion::{Animator, MotionKey, MotionState};
use crate::ui::sections::layout::{Align, Decoration, ImageNode, Node, TextNode, Weight};
use crate::ui::styles;
use crate::ui::theming::{AppTheme, ColorRole};
use crate::ui::typewriter;
use crate::ui::widgets::orbit_scene::SceneClock;
use crate::ui::widgets::{motion_frame, pointer_area, Ornament, PointerEvent};
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Image, Row, Space, Stack};
use iced::{alignment, font, Element, Font, Length, Radians, Rotation, Vector};
use std::time::Instant;

/// Horizontal or vertical shift per degree of tilt, in pixels.
const TILT_SHIFT: f32 = 0.8;

/// Messages produced by rendered sections.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Pointer { key: MotionKey, event: PointerEvent },
    OpenLink(String),
}

/// Draw-time offset and scale for a sampled state.
///
/// Tilt has no widget equivalent; it nudges the element toward the side
/// that turns to the viewer.
#[must_use]
pub fn frame_transform(state: &MotionState) -> (Vector, f32) {
    (
        Vector::new(
            state.x + state.rotate_y * TILT_SHIFT,
            state.y - state.rotate_x * TILT_SHIFT,
        ),
        state.scale,
    )
}

/// The part of a state that children inherit: everything except what the
/// enclosing frame already applied.
#[must_use]
pub fn inherited(parent: MotionState, own: MotionState) -> MotionState {
    parent.compose(MotionState {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        ..own
    })
}

/// Weight portions splitting free space at `fraction`, or `None` where a
/// side gets no space.
#[must_use]
pub fn split_portions(fraction: f32) -> (Option<u16>, Option<u16>) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let before = (fraction.clamp(0.0, 1.0) * 100.0).round() as u16;
    let after = 100 - before;
    ((before > 0).then_some(before), (after > 0).then_some(after))
}

fn horizontal(align: Align) -> alignment::Horizontal {
    match align {
        Align::Start => alignment::Horizontal::Left,
        Align::Center => alignment::Horizontal::Center,
        Align::End => alignment::Horizontal::Right,
    }
}

fn vertical(align: Align) -> alignment::Vertical {
    match align {
        Align::Start => alignment::Vertical::Top,
        Align::Center => alignment::Vertical::Center,
        Align::End => alignment::Vertical::Bottom,
    }
}

fn font_for(weight: Weight) -> Font {
    let weight = match weight {
        Weight::Regular => font::Weight::Normal,
        Weight::Semibold => font::Weight::Semibold,
        Weight::Black => font::Weight::Black,
    };
    Font {
        weight,
        ..Font::default()
    }
}

/// Everything needed to render one frame of the page.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub animator: &'a Animator,
    pub theme: &'a AppTheme,
    pub now: Instant,
    pub clock: SceneClock,
}

impl Scene<'_> {
    #[must_use]
    pub fn view(&self, node: &Node) -> Element<'static, Message> {
        self.node(node, MotionState::REST)
    }

    fn node(&self, node: &Node, state: MotionState) -> Element<'static, Message> {
        match node {
            Node::Column {
                children,
                spacing,
                align,
                max_width,
            } => {
                let column = Column::with_children(children.iter().map(|c| self.node(c, state)))
                    .spacing(*spacing)
                    .align_x(horizontal(*align));
                match max_width {
                    Some(width) => column.width(Length::Fill).max_width(*width).into(),
                    None => column.into(),
                }
            }
            Node::Row {
                children,
                spacing,
                align,
                wrap,
            } => {
                let row = Row::with_children(children.iter().map(|c| self.node(c, state)))
                    .spacing(*spacing)
                    .align_y(vertical(*align));
                if *wrap {
                    row.wrap().vertical_spacing(*spacing).into()
                } else {
                    row.into()
                }
            }
            Node::Text(node) => self.text(node, state),
            Node::Image(node) => self.image(node, state),
            Node::Card {
                child,
                padding,
                background,
                border,
                radius,
            } => {
                let style = styles::container::card(
                    self.theme.color(*background),
                    self.theme.color(*border),
                    *radius,
                    state.opacity,
                    (self.theme.color(ColorRole::Glow), state.glow),
                );
                container(self.node(child, state))
                    .padding(*padding)
                    .style(style)
                    .into()
            }
            Node::Link { label, target } => button(
                text(label.clone())
                    .size(typography::BODY)
                    .font(font_for(Weight::Semibold)),
            )
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::OpenLink(target.clone()))
            .style(styles::button::pill(&self.theme.colors, state.opacity))
            .into(),
            Node::Motion { key, child } => {
                let own = self.animator.sample_or_rest(*key, self.now);
                let (offset, scale) = frame_transform(&own);
                motion_frame(self.node(child, inherited(state, own)))
                    .offset(offset)
                    .scale(scale)
                    .into()
            }
            Node::Interactive { key, child } => {
                let key = *key;
                pointer_area(self.node(child, state), move |event| Message::Pointer {
                    key,
                    event,
                })
                .into()
            }
            Node::Layers(layers) => {
                Stack::with_children(layers.iter().map(|layer| self.node(layer, state))).into()
            }
            Node::Positioned { left, top, child } => self.positioned(*left, *top, child, state),
            Node::Decoration(decoration) => self.decoration(decoration, state),
            Node::Spacer(height) => Space::new().height(Length::Fixed(*height)).into(),
        }
    }

    fn text(&self, node: &TextNode, state: MotionState) -> Element<'static, Message> {
        let content = typewriter::display(&node.content, state.reveal, node.caret);
        let color = faded(self.theme.color(node.role), state.opacity);
        let widget = text(content)
            .size(node.size)
            .font(font_for(node.weight))
            .color(color)
            .align_x(horizontal(node.align));
        if node.align == Align::Start {
            widget.into()
        } else {
            widget.width(Length::Fill).into()
        }
    }

    fn image(&self, node: &ImageNode, state: MotionState) -> Element<'static, Message> {
        let degrees = node.rotation + state.rotate;
        let picture = Image::new(Handle::from_path(&node.path))
            .width(Length::Fixed(node.width))
            .height(Length::Fixed(node.height))
            .opacity(state.opacity)
            .rotation(Rotation::Floating(Radians(degrees.to_radians())));
        // Missing files render as an empty frame of the same size
        container(picture)
            .style(styles::container::card(
                self.theme.color(ColorRole::Surface),
                self.theme.color(ColorRole::CardBorder),
                node.radius,
                state.opacity * 0.6,
                (self.theme.color(ColorRole::Glow), state.glow),
            ))
            .into()
    }

    fn positioned(
        &self,
        left: f32,
        top: f32,
        child: &Node,
        state: MotionState,
    ) -> Element<'static, Message> {
        let spacer_w = |portion: u16| Space::new().width(Length::FillPortion(portion));
        let spacer_h = |portion: u16| Space::new().height(Length::FillPortion(portion));

        let (before, after) = split_portions(left);
        let mut row = Row::new().width(Length::Fill);
        if let Some(portion) = before {
            row = row.push(spacer_w(portion));
        }
        row = row.push(self.node(child, state));
        if let Some(portion) = after {
            row = row.push(spacer_w(portion));
        }

        let (above, below) = split_portions(top);
        let mut column = Column::new().width(Length::Fill).height(Length::Fill);
        if let Some(portion) = above {
            column = column.push(spacer_h(portion));
        }
        column = column.push(row);
        if let Some(portion) = below {
            column = column.push(spacer_h(portion));
        }
        column.into()
    }

    fn decoration(&self, decoration: &Decoration, state: MotionState) -> Element<'static, Message> {
        Ornament::new(decoration.clone(), state, self.clock, self.theme).into_element()
    }
}
