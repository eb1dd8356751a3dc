// SPDX-License-Identifier: MPL-2.0
//! Declarative motion.
//!
//! Presenters describe animations as [`MotionDescriptor`] values; the
//! [`Animator`] arena keeps their start instants and interpolates them every
//! frame. Three classes exist:
//!
//! - **Entrance**: plays once after the owning section is revealed
//! - **Ambient**: repeats forever from mount, regardless of reveal
//! - **Interaction**: pointer hover/press, plus spring-smoothed tilt
//!
//! All descriptors on one element compose into a single [`MotionState`].

pub mod animator;
pub mod easing;
pub mod interaction;

pub use animator::Animator;
pub use easing::Easing;
pub use interaction::{InteractionTracker, PointerState, Tilt, TiltLimits};

use crate::config::MIN_MOTION_DURATION;
use crate::domain::ui::{LayoutClass, SectionId};
use std::time::Duration;

// =============================================================================
// MotionState
// =============================================================================

/// Animatable properties of one element.
///
/// Angles are in degrees. The identity ([`MotionState::REST`]) leaves an
/// element untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// Extra glow strength in `0.0..=1.0`.
    pub glow: f32,
    /// Fraction of text revealed (typewriter).
    pub reveal: f32,
}

impl MotionState {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        glow: 0.0,
        reveal: 1.0,
    };

    /// Fully transparent rest state.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    #[must_use]
    pub fn offset(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    #[must_use]
    pub fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    #[must_use]
    pub fn rotated(self, rotate: f32) -> Self {
        Self { rotate, ..self }
    }

    #[must_use]
    pub fn tilted(self, rotate_x: f32, rotate_y: f32) -> Self {
        Self {
            rotate_x,
            rotate_y,
            ..self
        }
    }

    #[must_use]
    pub fn glowing(self, glow: f32) -> Self {
        Self { glow, ..self }
    }

    #[must_use]
    pub fn revealing(self, reveal: f32) -> Self {
        Self { reveal, ..self }
    }

    /// Linear interpolation of every property.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            glow: mix(self.glow, to.glow),
            reveal: mix(self.reveal, to.reveal),
        }
    }

    /// Stacks two states: offsets and angles add, opacity and scale
    /// multiply, glow takes the stronger, reveal the weaker.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self {
            opacity: (self.opacity * other.opacity).clamp(0.0, 1.0),
            x: self.x + other.x,
            y: self.y + other.y,
            scale: self.scale * other.scale,
            rotate: self.rotate + other.rotate,
            rotate_x: self.rotate_x + other.rotate_x,
            rotate_y: self.rotate_y + other.rotate_y,
            glow: self.glow.max(other.glow),
            reveal: self.reveal.min(other.reveal),
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::REST
    }
}

// =============================================================================
// Descriptor parts
// =============================================================================

/// Pointer condition that activates an interaction descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Hover,
    Press,
    /// Follows the pointer position; suppressed on compact layouts.
    Tilt,
}

/// Animation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionClass {
    Entrance,
    Ambient,
    Interaction(Trigger),
}

/// Keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyframes {
    /// Interpolate between two states.
    Tween(MotionState, MotionState),
    /// Evenly spaced waypoints, eased per segment.
    Sequence(Vec<MotionState>),
    /// Discrete slots, each held for an equal share of the cycle.
    Steps(Vec<MotionState>),
}

impl Keyframes {
    /// State at the very beginning of the track.
    #[must_use]
    pub fn first(&self) -> MotionState {
        match self {
            Keyframes::Tween(from, _) => *from,
            Keyframes::Sequence(frames) | Keyframes::Steps(frames) => {
                frames.first().copied().unwrap_or_default()
            }
        }
    }

    /// State at the very end of the track.
    #[must_use]
    pub fn last(&self) -> MotionState {
        match self {
            Keyframes::Tween(_, to) => *to,
            Keyframes::Sequence(frames) | Keyframes::Steps(frames) => {
                frames.last().copied().unwrap_or_default()
            }
        }
    }

    /// State at cycle progress `t` in `0.0..=1.0`.
    #[must_use]
    pub fn sample(&self, t: f32, easing: Easing) -> MotionState {
        let t = t.clamp(0.0, 1.0);
        match self {
            Keyframes::Tween(from, to) => from.lerp(*to, easing.apply(t)),
            Keyframes::Sequence(frames) => match frames.len() {
                0 => MotionState::REST,
                1 => frames[0],
                len => {
                    let segments = (len - 1) as f32;
                    let position = t * segments;
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let index = (position.floor() as usize).min(len - 2);
                    let local = position - index as f32;
                    frames[index].lerp(frames[index + 1], easing.apply(local))
                }
            },
            Keyframes::Steps(frames) => match frames.len() {
                0 => MotionState::REST,
                len => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let index = ((t * len as f32).floor() as usize).min(len - 1);
                    frames[index]
                }
            },
        }
    }
}

/// How often a track plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Extra plays after the first; `Count(0)` plays once.
    Count(u32),
    Infinite,
}

// =============================================================================
// MotionKey
// =============================================================================

/// Owner of a group of motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotionScope {
    Section(SectionId),
    Splash,
    Navigation,
}

/// Identifies one animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MotionKey {
    pub scope: MotionScope,
    pub name: &'static str,
    pub index: usize,
}

impl MotionKey {
    #[must_use]
    pub const fn new(scope: MotionScope, name: &'static str) -> Self {
        Self {
            scope,
            name,
            index: 0,
        }
    }

    #[must_use]
    pub const fn section(section: SectionId, name: &'static str) -> Self {
        Self::new(MotionScope::Section(section), name)
    }

    /// Same element name, `index`-th instance.
    #[must_use]
    pub const fn at(self, index: usize) -> Self {
        Self { index, ..self }
    }
}

// =============================================================================
// MotionDescriptor
// =============================================================================

/// A single declared animation.
///
/// Built through the class constructors, which enforce that only ambient
/// motion repeats forever and that every duration is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionDescriptor {
    key: MotionKey,
    class: MotionClass,
    keyframes: Keyframes,
    duration: Duration,
    delay: Duration,
    easing: Easing,
    repeat: Repeat,
}

impl MotionDescriptor {
    fn build(
        key: MotionKey,
        class: MotionClass,
        keyframes: Keyframes,
        duration: Duration,
        repeat: Repeat,
        easing: Easing,
    ) -> Self {
        Self {
            key,
            class,
            keyframes,
            duration: duration.max(MIN_MOTION_DURATION),
            delay: Duration::ZERO,
            easing,
            repeat,
        }
    }

    /// One-shot transition from `from` to `to` once the section is revealed.
    #[must_use]
    pub fn entrance(key: MotionKey, from: MotionState, to: MotionState, duration: Duration) -> Self {
        Self::build(
            key,
            MotionClass::Entrance,
            Keyframes::Tween(from, to),
            duration,
            Repeat::Count(0),
            Easing::EaseOut,
        )
    }

    /// Endless decorative loop, running from mount.
    #[must_use]
    pub fn ambient(key: MotionKey, keyframes: Keyframes, duration: Duration) -> Self {
        Self::build(
            key,
            MotionClass::Ambient,
            keyframes,
            duration,
            Repeat::Infinite,
            Easing::EaseInOut,
        )
    }

    /// Transient pointer response toward `active`, reverting instantly.
    #[must_use]
    pub fn interaction(key: MotionKey, trigger: Trigger, active: MotionState) -> Self {
        Self::build(
            key,
            MotionClass::Interaction(trigger),
            Keyframes::Tween(MotionState::REST, active),
            Duration::from_millis(200),
            Repeat::Count(0),
            Easing::EaseOut,
        )
    }

    /// Pointer tilt up to `limits` degrees per axis.
    #[must_use]
    pub fn tilt(key: MotionKey, limits: TiltLimits) -> Self {
        Self::build(
            key,
            MotionClass::Interaction(Trigger::Tilt),
            Keyframes::Tween(
                MotionState::REST,
                MotionState::REST.tilted(limits.x, limits.y),
            ),
            Duration::from_millis(1),
            Repeat::Count(0),
            Easing::Linear,
        )
    }

    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn key(&self) -> MotionKey {
        self.key
    }

    #[must_use]
    pub fn class(&self) -> MotionClass {
        self.class
    }

    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    #[must_use]
    pub fn is_pointer_tilt(&self) -> bool {
        self.class == MotionClass::Interaction(Trigger::Tilt)
    }

    /// Per-axis tilt limits, for tilt descriptors.
    #[must_use]
    pub fn tilt_limits(&self) -> TiltLimits {
        let last = self.keyframes.last();
        TiltLimits::new(last.rotate_x, last.rotate_y)
    }

    /// State after `elapsed` since the track was started.
    #[must_use]
    pub fn sample_elapsed(&self, elapsed: Duration) -> MotionState {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.keyframes.first();
        };
        let cycle = self.duration.as_secs_f32();
        let played = active.as_secs_f32() / cycle;
        let progress = match self.repeat {
            Repeat::Infinite => played.fract(),
            Repeat::Count(extra) => {
                if played >= (extra + 1) as f32 {
                    return self.keyframes.last();
                }
                played.fract()
            }
        };
        self.keyframes.sample(progress, self.easing)
    }

    /// True once a finite track has played out.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Count(extra) => elapsed >= self.delay + self.duration * (extra + 1),
        }
    }
}

/// Drops the interactions a layout does not support.
///
/// Compact layouts lose pointer tilt only; entrance, ambient, hover and press
/// motions are kept.
pub fn suppress_for_layout(motions: &mut Vec<MotionDescriptor>, layout: LayoutClass) {
    if layout.compact {
        motions.retain(|motion| !motion.is_pointer_tilt());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn key() -> MotionKey {
        MotionKey::section(SectionId::Hero, "test")
    }

    #[test]
    fn entrance_never_repeats_forever() {
        let motion = MotionDescriptor::entrance(
            key(),
            MotionState::HIDDEN,
            MotionState::REST,
            Duration::from_millis(600),
        );
        assert_eq!(motion.repeat(), Repeat::Count(0));
        assert_eq!(motion.class(), MotionClass::Entrance);
        assert!(motion.is_finished(Duration::from_millis(600)));
    }

    #[test]
    fn ambient_stays_infinite() {
        let motion = MotionDescriptor::ambient(
            key(),
            Keyframes::Tween(MotionState::REST, MotionState::REST.offset(0.0, -20.0)),
            Duration::from_secs(7),
        );
        assert_eq!(motion.repeat(), Repeat::Infinite);
        assert!(!motion.is_finished(Duration::from_secs(3600)));
    }

    #[test]
    fn zero_duration_is_raised_to_minimum() {
        let motion = MotionDescriptor::ambient(
            key(),
            Keyframes::Steps(vec![MotionState::REST]),
            Duration::ZERO,
        );
        assert!(motion.duration() > Duration::ZERO);
    }

    #[test]
    fn entrance_interpolates_then_rests() {
        let motion = MotionDescriptor::entrance(
            key(),
            MotionState::HIDDEN.offset(0.0, 50.0),
            MotionState::REST,
            Duration::from_millis(600),
        );
        let start = motion.sample_elapsed(Duration::ZERO);
        assert_abs_diff_eq!(start.opacity, 0.0);
        assert_abs_diff_eq!(start.y, 50.0);

        let mid = motion.sample_elapsed(Duration::from_millis(300));
        assert!(mid.opacity > 0.5, "ease-out is past halfway at t=0.5");

        let end = motion.sample_elapsed(Duration::from_secs(5));
        assert_eq!(end, MotionState::REST);
        assert!(motion.is_finished(Duration::from_millis(600)));
    }

    #[test]
    fn delay_holds_first_keyframe() {
        let motion = MotionDescriptor::entrance(
            key(),
            MotionState::HIDDEN,
            MotionState::REST,
            Duration::from_millis(500),
        )
        .delayed(Duration::from_secs(1));
        assert_abs_diff_eq!(motion.sample_elapsed(Duration::from_millis(900)).opacity, 0.0);
        assert!(!motion.is_finished(Duration::from_millis(1200)));
    }

    #[test]
    fn ambient_sequence_loops() {
        let motion = MotionDescriptor::ambient(
            key(),
            Keyframes::Sequence(vec![
                MotionState::REST,
                MotionState::REST.offset(0.0, -20.0),
                MotionState::REST,
            ]),
            Duration::from_secs(2),
        )
        .eased(Easing::Linear);

        assert_abs_diff_eq!(motion.sample_elapsed(Duration::from_secs(1)).y, -20.0);
        assert_abs_diff_eq!(motion.sample_elapsed(Duration::from_secs(3)).y, -20.0);
        assert_abs_diff_eq!(
            motion.sample_elapsed(Duration::from_millis(500)).y,
            -10.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn steps_hold_each_slot() {
        let frames = Keyframes::Steps(vec![
            MotionState::REST.offset(0.0, 0.0),
            MotionState::REST.offset(-100.0, 0.0),
            MotionState::REST.offset(-200.0, 0.0),
        ]);
        assert_abs_diff_eq!(frames.sample(0.1, Easing::Linear).x, 0.0);
        assert_abs_diff_eq!(frames.sample(0.5, Easing::Linear).x, -100.0);
        assert_abs_diff_eq!(frames.sample(1.0, Easing::Linear).x, -200.0);
    }

    #[test]
    fn compose_stacks_entrance_and_ambient() {
        let entrance = MotionState::REST.with_opacity(0.5).offset(0.0, 20.0);
        let float = MotionState::REST.offset(0.0, -5.0).scaled(1.1);
        let combined = entrance.compose(float);
        assert_abs_diff_eq!(combined.opacity, 0.5);
        assert_abs_diff_eq!(combined.y, 15.0);
        assert_abs_diff_eq!(combined.scale, 1.1);
        assert_eq!(MotionState::REST.compose(MotionState::REST), MotionState::REST);
    }

    #[test]
    fn compact_layout_drops_only_tilt() {
        let mut motions = vec![
            MotionDescriptor::tilt(key(), TiltLimits::uniform(12.0)),
            MotionDescriptor::interaction(key(), Trigger::Hover, MotionState::REST.scaled(1.05)),
            MotionDescriptor::entrance(key(), MotionState::HIDDEN, MotionState::REST, Duration::from_millis(600)),
        ];
        suppress_for_layout(&mut motions, LayoutClass::WIDE);
        assert_eq!(motions.len(), 3);

        suppress_for_layout(&mut motions, LayoutClass::COMPACT);
        assert_eq!(motions.len(), 2);
        assert!(motions.iter().all(|m| !m.is_pointer_tilt()));
    }
}
