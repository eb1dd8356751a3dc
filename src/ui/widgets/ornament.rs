// SPDX-License-Identifier: MPL-2.0
//! Canvas program for decorative layers: glow blobs, grids, ladders, label
//! orbits and the hero globe.
//!
//! Offsets and scale are applied by the enclosing widget; the ornament itself
//! handles what widgets cannot express: rotation, 3D tilt (as
//! foreshortening) and fading.
#![allow(clippy::cast_precision_loss)]

use super::orbit_scene::{self, SceneClock};
use crate::ui::design_tokens::{faded, typography};
use crate::ui::motion::MotionState;
use crate::ui::sections::layout::Decoration;
use crate::ui::theming::{AppTheme, ColorRole, ThemeMode};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{alignment, mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Room around an orbit for its labels.
const ORBIT_MARGIN: f32 = 70.0;
/// Pointer distance within which an orbit label counts as hovered.
const LABEL_HIT_RADIUS: f32 = 36.0;
const BLOB_RINGS: usize = 10;

/// Rotation and foreshortening around a centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    center: Point,
    sin: f32,
    cos: f32,
    squash_x: f32,
    squash_y: f32,
}

impl Projector {
    #[must_use]
    pub fn new(center: Point, motion: &MotionState) -> Self {
        let (sin, cos) = motion.rotate.to_radians().sin_cos();
        Self {
            center,
            sin,
            cos,
            squash_x: motion.rotate_y.to_radians().cos(),
            squash_y: motion.rotate_x.to_radians().cos(),
        }
    }

    /// Maps a point given relative to the centre.
    #[must_use]
    pub fn apply(&self, local: Vector) -> Point {
        let x = local.x * self.cos - local.y * self.sin;
        let y = local.x * self.sin + local.y * self.cos;
        Point::new(
            self.center.x + x * self.squash_x,
            self.center.y + y * self.squash_y,
        )
    }
}

/// Screen positions of orbit labels, starting at the top and going
/// clockwise.
#[must_use]
pub fn orbit_positions(count: usize, radius: f32, projector: &Projector) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32 - FRAC_PI_2;
            projector.apply(Vector::new(radius * angle.cos(), radius * angle.sin()))
        })
        .collect()
}

/// Index of the label nearest to `cursor`, if within reach.
#[must_use]
pub fn hovered_label(positions: &[Point], cursor: Point) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(cursor)))
        .filter(|(_, d)| *d <= LABEL_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    line: Color,
    fill: Color,
    text: Color,
    highlight: Color,
    mode: ThemeMode,
}

/// A decoration with its sampled motion.
pub struct Ornament {
    decoration: Decoration,
    motion: MotionState,
    clock: SceneClock,
    palette: Palette,
}

impl Ornament {
    #[must_use]
    pub fn new(decoration: Decoration, motion: MotionState, clock: SceneClock, theme: &AppTheme) -> Self {
        let fill = match &decoration {
            Decoration::Blob { role, .. } => theme.color(*role),
            _ => theme.color(ColorRole::CardBackground),
        };
        Self {
            decoration,
            motion,
            clock,
            palette: Palette {
                line: theme.color(ColorRole::CardBorder),
                fill,
                text: theme.color(ColorRole::Body),
                highlight: theme.color(ColorRole::Accent),
                mode: theme.mode,
            },
        }
    }

    fn size(&self) -> (Length, Length) {
        let fixed = |v: f32| {
            if v.is_finite() {
                Length::Fixed(v)
            } else {
                Length::Fill
            }
        };
        match &self.decoration {
            Decoration::Blob { diameter, .. } => (fixed(*diameter), fixed(*diameter)),
            Decoration::Orbit { radius, .. } => {
                let side = 2.0 * (radius + ORBIT_MARGIN);
                (fixed(side), fixed(side))
            }
            Decoration::Globe { size } => (fixed(*size), fixed(*size)),
            Decoration::Grid { width, height, .. } | Decoration::Ladder { width, height, .. } => {
                (fixed(*width), fixed(*height))
            }
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let (width, height) = self.size();
        Canvas::new(self).width(width).height(height).into()
    }

    fn draw_blob(&self, frame: &mut Frame, diameter: f32) {
        // Stacked translucent discs approximate a blur
        let center = frame.center();
        let glow = 1.0 + self.motion.glow * 0.5;
        for ring in 0..BLOB_RINGS {
            let radius = diameter / 2.0 * (1.0 - ring as f32 / BLOB_RINGS as f32);
            frame.fill(
                &Path::circle(center, radius),
                faded(self.palette.fill, 0.18 * glow * self.motion.opacity),
            );
        }
    }

    fn draw_grid(&self, frame: &mut Frame, cell: f32) {
        let projector = Projector::new(frame.center(), &self.motion);
        let half_w = frame.width() / 2.0;
        let half_h = frame.height() / 2.0;
        let stroke = Stroke::default()
            .with_width(1.0)
            .with_color(faded(self.palette.line, self.motion.opacity));

        let columns = (half_w / cell).ceil() as i32;
        let rows = (half_h / cell).ceil() as i32;
        for c in -columns..=columns {
            let x = c as f32 * cell;
            frame.stroke(
                &Path::line(
                    projector.apply(Vector::new(x, -half_h)),
                    projector.apply(Vector::new(x, half_h)),
                ),
                stroke,
            );
        }
        for r in -rows..=rows {
            let y = r as f32 * cell;
            frame.stroke(
                &Path::line(
                    projector.apply(Vector::new(-half_w, y)),
                    projector.apply(Vector::new(half_w, y)),
                ),
                stroke,
            );
        }
    }

    fn draw_ladder(&self, frame: &mut Frame, rungs: usize) {
        let projector = Projector::new(frame.center(), &self.motion);
        let half_w = frame.width() * 0.3;
        let half_h = frame.height() / 2.0;
        let stroke = Stroke::default()
            .with_width(4.0)
            .with_color(faded(self.palette.text, 0.6 * self.motion.opacity))
            .with_line_cap(canvas::LineCap::Round);

        for x in [-half_w, half_w] {
            frame.stroke(
                &Path::line(
                    projector.apply(Vector::new(x, -half_h)),
                    projector.apply(Vector::new(x, half_h)),
                ),
                stroke,
            );
        }
        let spacing = frame.height() / (rungs + 1) as f32;
        for rung in 1..=rungs {
            let y = -half_h + spacing * rung as f32;
            frame.stroke(
                &Path::line(
                    projector.apply(Vector::new(-half_w, y)),
                    projector.apply(Vector::new(half_w, y)),
                ),
                stroke,
            );
        }
    }

    fn draw_orbit(
        &self,
        frame: &mut Frame,
        labels: &[String],
        radius: f32,
        caption: Option<&str>,
        hovered: Option<usize>,
    ) {
        let projector = Projector::new(frame.center(), &self.motion);
        let opacity = self.motion.opacity;

        let mut track = canvas::path::Builder::new();
        for step in 0..=72 {
            let angle = TAU * step as f32 / 72.0;
            let point = projector.apply(Vector::new(radius * angle.cos(), radius * angle.sin()));
            if step == 0 {
                track.move_to(point);
            } else {
                track.line_to(point);
            }
        }
        frame.stroke(
            &track.build(),
            Stroke::default()
                .with_width(1.0)
                .with_color(faded(self.palette.line, opacity)),
        );

        for (index, (label, position)) in labels
            .iter()
            .zip(orbit_positions(labels.len(), radius, &projector))
            .enumerate()
        {
            let active = hovered == Some(index);
            if active {
                frame.fill(
                    &Path::circle(position, LABEL_HIT_RADIUS * 0.8),
                    faded(self.palette.highlight, 0.15 * opacity),
                );
            }
            frame.fill_text(Text {
                content: label.clone(),
                position,
                color: faded(
                    if active {
                        self.palette.highlight
                    } else {
                        self.palette.text
                    },
                    opacity,
                ),
                size: if active {
                    typography::BODY_LG
                } else {
                    typography::BODY_SM
                }
                .into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        let centre_text = hovered
            .and_then(|index| labels.get(index).map(String::as_str))
            .or(caption);
        if let Some(content) = centre_text {
            frame.fill_text(Text {
                content: content.to_owned(),
                position: frame.center(),
                color: faded(self.palette.highlight, opacity),
                size: typography::TITLE_SM.into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
        }
    }

    fn label_positions(&self, bounds: Rectangle) -> Vec<Point> {
        match &self.decoration {
            Decoration::Orbit { labels, radius, .. } => {
                let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
                orbit_positions(labels.len(), *radius, &Projector::new(center, &self.motion))
            }
            _ => Vec::new(),
        }
    }
}

impl<Message> canvas::Program<Message> for Ornament {
    /// Hovered orbit label.
    type State = Option<usize>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let moved = matches!(
            event,
            iced::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft)
        );
        if !moved {
            return None;
        }
        let hovered = cursor
            .position_in(bounds)
            .and_then(|position| hovered_label(&self.label_positions(bounds), position));
        if hovered == *state {
            return None;
        }
        *state = hovered;
        Some(Action::request_redraw())
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        match &self.decoration {
            Decoration::Blob { diameter, .. } => self.draw_blob(&mut frame, *diameter),
            Decoration::Grid { cell, .. } => self.draw_grid(&mut frame, *cell),
            Decoration::Ladder { rungs, .. } => self.draw_ladder(&mut frame, *rungs),
            Decoration::Orbit {
                labels,
                radius,
                caption,
            } => self.draw_orbit(&mut frame, labels, *radius, caption.as_deref(), *state),
            Decoration::Globe { .. } => {
                orbit_scene::draw(&mut frame, self.clock, self.palette.mode, self.motion.opacity);
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn projector_rotates_clockwise_in_screen_space() {
        let projector = Projector::new(Point::ORIGIN, &MotionState::REST.rotated(90.0));
        let p = projector.apply(Vector::new(10.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn tilt_foreshortens_the_tilted_axis() {
        let projector = Projector::new(Point::ORIGIN, &MotionState::REST.tilted(60.0, 0.0));
        let p = projector.apply(Vector::new(10.0, 10.0));
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn first_label_sits_at_the_top() {
        let projector = Projector::new(Point::new(100.0, 100.0), &MotionState::REST);
        let positions = orbit_positions(4, 50.0, &projector);
        assert_abs_diff_eq!(positions[0].x, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(positions[0].y, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(positions[1].x, 150.0, epsilon = 1e-4);
    }

    #[test]
    fn hover_picks_nearest_label_within_reach() {
        let positions = vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)];
        assert_eq!(hovered_label(&positions, Point::new(30.0, 0.0)), Some(1));
        assert_eq!(hovered_label(&positions, Point::new(5.0, 5.0)), Some(0));
        assert_eq!(hovered_label(&positions, Point::new(0.0, 200.0)), None);
    }

    #[test]
    fn spinning_orbit_moves_the_hit_targets() {
        let rest = orbit_positions(6, 100.0, &Projector::new(Point::ORIGIN, &MotionState::REST));
        let spun = orbit_positions(
            6,
            100.0,
            &Projector::new(Point::ORIGIN, &MotionState::REST.rotated(30.0)),
        );
        assert_eq!(hovered_label(&rest, rest[2]), Some(2));
        assert_ne!(hovered_label(&spun, rest[2]), Some(2));
    }
}
