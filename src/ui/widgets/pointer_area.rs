// SPDX-License-Identifier: MPL-2.0
//! Wrapper that reports pointer enter, exit, press, release and position
//! over its content.
//!
//! Positions are relative to the centre, as fractions of the content size,
//! so tilt effects do not need to know how large the element is.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Pointer activity over an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Entered,
    Exited,
    Pressed,
    Released,
    /// Position relative to the centre, each axis in `-0.5..=0.5`.
    Moved { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    hovered: bool,
    pressed: bool,
}

pub struct PointerArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_event: Box<dyn Fn(PointerEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> PointerArea<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_event: impl Fn(PointerEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_event: Box::new(on_event),
        }
    }
}

/// Position of `cursor` relative to the centre of `bounds`.
#[must_use]
pub fn relative_position(bounds: Rectangle, cursor: Point) -> (f32, f32) {
    let x = if bounds.width > 0.0 {
        (cursor.x - bounds.x) / bounds.width - 0.5
    } else {
        0.0
    };
    let y = if bounds.height > 0.0 {
        (cursor.y - bounds.y) / bounds.height - 0.5
    } else {
        0.0
    };
    (x.clamp(-0.5, 0.5), y.clamp(-0.5, 0.5))
}

/// Pointer events caused by `event`, updating `state`.
fn translate(state: &mut State, event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Vec<PointerEvent> {
    let over = cursor.position_over(bounds);
    let mut events = Vec::new();

    match event {
        Event::Mouse(mouse::Event::CursorMoved { .. }) => {
            match (over, state.hovered) {
                (Some(_), false) => {
                    state.hovered = true;
                    events.push(PointerEvent::Entered);
                }
                (None, true) => {
                    state.hovered = false;
                    state.pressed = false;
                    events.push(PointerEvent::Exited);
                }
                _ => {}
            }
            if let Some(position) = over {
                let (x, y) = relative_position(bounds, position);
                events.push(PointerEvent::Moved { x, y });
            }
        }
        Event::Mouse(mouse::Event::CursorLeft) if state.hovered => {
            *state = State::default();
            events.push(PointerEvent::Exited);
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if over.is_some() => {
            state.pressed = true;
            events.push(PointerEvent::Pressed);
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.pressed => {
            state.pressed = false;
            events.push(PointerEvent::Released);
        }
        _ => {}
    }
    events
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PointerArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

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
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
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

        let state = tree.state.downcast_mut::<State>();
        for pointer in translate(state, event, layout.bounds(), cursor) {
            shell.publish((self.on_event)(pointer));
        }
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

impl<'a, Message, Theme, Renderer> From<PointerArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: PointerArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

pub fn pointer_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_event: impl Fn(PointerEvent) -> Message + 'a,
) -> PointerArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    PointerArea::new(content, on_event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 100.0))
    }

    fn moved(x: f32, y: f32) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            }),
            mouse::Cursor::Available(Point::new(x, y)),
        )
    }

    #[test]
    fn relative_position_is_centred() {
        let (x, y) = relative_position(bounds(), Point::new(200.0, 150.0));
        assert_abs_diff_eq!(x, 0.0);
        assert_abs_diff_eq!(y, 0.0);
        let (x, y) = relative_position(bounds(), Point::new(300.0, 100.0));
        assert_abs_diff_eq!(x, 0.5);
        assert_abs_diff_eq!(y, -0.5);
    }

    #[test]
    fn enter_then_exit() {
        let mut state = State::default();
        let (event, cursor) = moved(150.0, 150.0);
        let events = translate(&mut state, &event, bounds(), cursor);
        assert_eq!(events[0], PointerEvent::Entered);
        assert!(matches!(events[1], PointerEvent::Moved { .. }));

        let (event, cursor) = moved(10.0, 10.0);
        assert_eq!(
            translate(&mut state, &event, bounds(), cursor),
            vec![PointerEvent::Exited]
        );
    }

    #[test]
    fn release_outside_still_reported_after_press() {
        let mut state = State::default();
        let cursor = mouse::Cursor::Available(Point::new(150.0, 150.0));
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            translate(&mut state, &press, bounds(), cursor),
            vec![PointerEvent::Pressed]
        );
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            translate(&mut state, &release, bounds(), mouse::Cursor::Unavailable),
            vec![PointerEvent::Released]
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut state = State::default();
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(0.0, 0.0));
        assert!(translate(&mut state, &press, bounds(), cursor).is_empty());
    }
}
