// SPDX-License-Identifier: MPL-2.0
//! Hero globe: a wireframe sphere with a tilted ring and a handful of
//! orbiting particles, projected through a camera that pulls back as the
//! page scrolls.
//!
//! The scene is plain geometry; [`draw`] strokes it into any canvas frame.
#![allow(clippy::cast_precision_loss)]

use crate::ui::design_tokens::{faded, palette};
use crate::ui::theming::ThemeMode;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point};
use std::f32::consts::{FRAC_PI_4, TAU};

/// Globe spin around the vertical axis, radians per second.
pub const YAW_RATE: f32 = 0.10;
/// Sphere tumble around the horizontal axis, radians per second.
pub const PITCH_RATE: f32 = 0.11;

pub const PARTICLE_COUNT: usize = 7;

const MERIDIANS: usize = 10;
const PARALLELS: usize = 7;
const SEGMENTS: usize = 36;
const RING_RADIUS: f32 = 1.7;
const RING_DROP: f32 = -1.2;
const NEAR_PLANE: f32 = 0.1;

/// Time and scroll inputs of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneClock {
    /// Seconds since the portfolio mounted.
    pub elapsed: f32,
    /// Page scroll progress in `0.0..=1.0`.
    pub scroll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    fn translated_y(self, dy: f32) -> Self {
        Self::new(self.x, self.y + dy, self.z)
    }

    #[must_use]
    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }
}

/// Camera distance from the globe for a scroll fraction.
#[must_use]
pub fn camera_distance(scroll: f32) -> f32 {
    4.0 + scroll.clamp(0.0, 1.0) * 6.0
}

/// Camera height for a scroll fraction; the camera sinks as the page scrolls.
#[must_use]
pub fn camera_height(scroll: f32) -> f32 {
    -scroll.clamp(0.0, 1.0) * 2.0
}

/// Pinhole camera on the z axis, looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub height: f32,
    /// Focal length in pixels.
    pub focal: f32,
}

impl Camera {
    #[must_use]
    pub fn new(clock: SceneClock, size: f32) -> Self {
        Self {
            distance: camera_distance(clock.scroll),
            height: camera_height(clock.scroll),
            focal: size * 1.2,
        }
    }

    /// Screen offset from the frame centre, `None` behind the camera.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<(f32, f32)> {
        let depth = self.distance - point.z;
        if depth < NEAR_PLANE {
            return None;
        }
        let dy = point.y - self.height;
        Some((self.focal * point.x / depth, -self.focal * dy / depth))
    }
}

fn circle(radius: f32, at: impl Fn(f32, f32) -> Vec3) -> Vec<Vec3> {
    (0..=SEGMENTS)
        .map(|i| {
            let theta = TAU * i as f32 / SEGMENTS as f32;
            at(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Meridians and parallels of the unit sphere at time `t`.
#[must_use]
pub fn sphere_lines(t: f32) -> Vec<Vec<Vec3>> {
    let yaw = t * YAW_RATE;
    let pitch = t * PITCH_RATE;
    let spin = |p: Vec3| p.rotate_x(pitch).rotate_y(yaw);

    let mut lines = Vec::with_capacity(MERIDIANS + PARALLELS);
    for m in 0..MERIDIANS {
        let longitude = TAU * m as f32 / MERIDIANS as f32 / 2.0;
        lines.push(
            circle(1.0, |a, b| Vec3::new(a, b, 0.0).rotate_y(longitude))
                .into_iter()
                .map(spin)
                .collect(),
        );
    }
    for p in 1..=PARALLELS {
        let latitude = -1.0 + 2.0 * p as f32 / (PARALLELS + 1) as f32;
        let radius = (1.0 - latitude * latitude).sqrt();
        lines.push(
            circle(radius, |a, b| Vec3::new(a, latitude, b))
                .into_iter()
                .map(spin)
                .collect(),
        );
    }
    lines
}

/// The tilted ring below the globe.
#[must_use]
pub fn ring(t: f32) -> Vec<Vec3> {
    let yaw = t * YAW_RATE;
    circle(RING_RADIUS, |a, b| {
        Vec3::new(a, 0.0, b)
            .rotate_x(FRAC_PI_4)
            .rotate_y(yaw)
            .translated_y(RING_DROP)
    })
}

/// Particle positions at time `t`.
#[must_use]
pub fn particles(t: f32) -> [Vec3; PARTICLE_COUNT] {
    let yaw = t * YAW_RATE;
    std::array::from_fn(|i| {
        let theta = TAU * i as f32 / PARTICLE_COUNT as f32;
        Vec3::new(
            1.32 * theta.cos(),
            0.55 * theta.sin(),
            1.09 * (theta + 1.0).cos(),
        )
        .rotate_y(yaw)
    })
}

/// Globe and ring greys for a theme.
#[must_use]
pub fn scene_colors(mode: ThemeMode) -> (Color, Color) {
    match mode {
        ThemeMode::Light => (palette::GRAY_500, palette::GRAY_600),
        ThemeMode::Dark => (palette::WHITE, palette::SLATE_300),
    }
}

fn polyline(camera: &Camera, center: Point, points: &[Vec3]) -> Option<Path> {
    let mut builder = canvas::path::Builder::new();
    let mut pen_down = false;
    let mut drawn = false;
    for point in points {
        match camera.project(*point) {
            Some((x, y)) if pen_down => {
                builder.line_to(Point::new(center.x + x, center.y + y));
                drawn = true;
            }
            Some((x, y)) => {
                builder.move_to(Point::new(center.x + x, center.y + y));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    drawn.then(|| builder.build())
}

/// Strokes the scene centred in `frame`.
pub fn draw(frame: &mut Frame, clock: SceneClock, mode: ThemeMode, opacity: f32) {
    let center = frame.center();
    let size = frame.width().min(frame.height());
    let camera = Camera::new(clock, size);
    let (globe, ring_color) = scene_colors(mode);

    for line in sphere_lines(clock.elapsed) {
        if let Some(path) = polyline(&camera, center, &line) {
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(faded(globe, 0.55 * opacity)),
            );
        }
    }

    if let Some(path) = polyline(&camera, center, &ring(clock.elapsed)) {
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(2.0)
                .with_color(faded(ring_color, 0.8 * opacity))
                .with_line_cap(canvas::LineCap::Round),
        );
    }

    for particle in particles(clock.elapsed) {
        if let Some((x, y)) = camera.project(particle) {
            frame.fill(
                &Path::circle(Point::new(center.x + x, center.y + y), 3.0),
                faded(ring_color, opacity),
            );
        }
    }
}
