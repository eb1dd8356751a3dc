// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction state.
//!
//! [`InteractionTracker`] keeps at most one of hover/press per element and
//! reports transitions; [`Tilt`] turns a pointer position into a
//! spring-smoothed 3D rotation.

use super::MotionKey;
use std::collections::HashMap;

/// Pointer condition of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// Per-element pointer state machine.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    states: HashMap<MotionKey, PointerState>,
}

impl InteractionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self, key: MotionKey) -> PointerState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    fn transition(&mut self, key: MotionKey, next: PointerState) -> Option<PointerState> {
        let current = self.state(key);
        if current == next {
            return None;
        }
        if next == PointerState::Idle {
            self.states.remove(&key);
        } else {
            self.states.insert(key, next);
        }
        Some(next)
    }

    /// Pointer entered the element.
    pub fn enter(&mut self, key: MotionKey) -> Option<PointerState> {
        match self.state(key) {
            PointerState::Idle => self.transition(key, PointerState::Hovered),
            _ => None,
        }
    }

    /// Pointer left the element; any hover or press reverts.
    pub fn exit(&mut self, key: MotionKey) -> Option<PointerState> {
        self.transition(key, PointerState::Idle)
    }

    /// Pointer pressed on the element. Replaces hover.
    pub fn press(&mut self, key: MotionKey) -> Option<PointerState> {
        self.transition(key, PointerState::Pressed)
    }

    /// Pointer released; the element is still under the pointer.
    pub fn release(&mut self, key: MotionKey) -> Option<PointerState> {
        match self.state(key) {
            PointerState::Pressed => self.transition(key, PointerState::Hovered),
            _ => None,
        }
    }

    /// Forgets every element, e.g. when the page is rebuilt.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Spring constants for tilt smoothing.
pub const TILT_STIFFNESS: f32 = 120.0;
pub const TILT_DAMPING: f32 = 18.0;

/// Velocity and distance below which the spring counts as settled.
const REST_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct SpringAxis {
    value: f32,
    velocity: f32,
    target: f32,
}

impl SpringAxis {
    fn step(&mut self, dt: f32) {
        // Unit mass damped spring, semi-implicit Euler
        let force = TILT_STIFFNESS * (self.target - self.value) - TILT_DAMPING * self.velocity;
        self.velocity += force * dt;
        self.value += self.velocity * dt;
    }

    fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }
}

/// Largest tilt per axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltLimits {
    /// Around the horizontal axis (pointer moving up and down).
    pub x: f32,
    /// Around the vertical axis (pointer moving left and right).
    pub y: f32,
}

impl TiltLimits {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn uniform(degrees: f32) -> Self {
        Self::new(degrees, degrees)
    }
}

/// Spring-smoothed pointer tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    limits: TiltLimits,
    x: SpringAxis,
    y: SpringAxis,
}

impl Tilt {
    #[must_use]
    pub fn new(limits: TiltLimits) -> Self {
        Self {
            limits,
            x: SpringAxis::default(),
            y: SpringAxis::default(),
        }
    }

    /// Aims at a pointer position relative to the element's centre, each
    /// component in `-0.5..=0.5` of the element size.
    ///
    /// Pointer above the centre tips the top toward the viewer (positive
    /// `rotate_x`); pointer to the right turns it right (positive
    /// `rotate_y`).
    pub fn point_at(&mut self, relative_x: f32, relative_y: f32) {
        let rx = relative_x.clamp(-0.5, 0.5);
        let ry = relative_y.clamp(-0.5, 0.5);
        self.x.target = -ry * 2.0 * self.limits.x;
        self.y.target = rx * 2.0 * self.limits.y;
    }

    /// Pointer left; spring back to flat.
    pub fn release(&mut self) {
        self.x.target = 0.0;
        self.y.target = 0.0;
    }

    /// Advances the spring by `dt` seconds, in sub-steps for stability.
    pub fn step(&mut self, dt: f32) {
        const MAX_STEP: f32 = 1.0 / 120.0;
        let mut remaining = dt.clamp(0.0, 0.25);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            self.x.step(step);
            self.y.step(step);
            remaining -= step;
        }
        if self.is_settled() {
            self.x.value = self.x.target;
            self.y.value = self.y.target;
            self.x.velocity = 0.0;
            self.y.velocity = 0.0;
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    /// Current `(rotate_x, rotate_y)` in degrees.
    #[must_use]
    pub fn angles(&self) -> (f32, f32) {
        (self.x.value, self.y.value)
    }
}
