// SPDX-License-Identifier: MPL-2.0
//! Wrapper that draws its content shifted and scaled about its centre.
//!
//! Layout and hit testing stay on the untransformed bounds, so an element
//! keeps its hover area while it bobs or grows.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Transformation, Vector};

/// Content drawn with a draw-time offset and scale.
pub struct MotionFrame<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
    scale: f32,
}

impl<'a, Message, Theme, Renderer> MotionFrame<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: Vector::ZERO,
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.0);
        self
    }

    fn is_identity(&self) -> bool {
        self.offset == Vector::ZERO && (self.scale - 1.0).abs() < f32::EPSILON
    }
}

/// Transformation scaling `bounds` about its centre, then shifting it.
#[must_use]
pub fn transformation(bounds: Rectangle, offset: Vector, scale: f32) -> Transformation {
    let center = bounds.center();
    Transformation::translate(center.x + offset.x, center.y + offset.y)
        * Transformation::scale(scale)
        * Transformation::translate(-center.x, -center.y)
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for MotionFrame<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let content = self.content.as_widget();
        if self.is_identity() {
            content.draw(&tree.children[0], renderer, theme, style, layout, cursor, viewport);
            return;
        }
        let transformation = transformation(layout.bounds(), self.offset, self.scale);
        renderer.with_transformation(transformation, |renderer| {
            content.draw(&tree.children[0], renderer, theme, style, layout, cursor, viewport);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }
}

impl<'a, Message, Theme, Renderer> From<MotionFrame<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(frame: MotionFrame<'a, Message, Theme, Renderer>) -> Self {
        Self::new(frame)
    }
}

pub fn motion_frame<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> MotionFrame<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    MotionFrame::new(content)
}
