// SPDX-License-Identifier: MPL-2.0
//! Arena of running animations.
//!
//! Descriptors are recomputed on every render; the arena only keeps what must
//! survive re-renders: when each track started, pointer activation, and tilt
//! springs. Re-syncing with an unchanged key keeps the start instant, so a
//! theme toggle never restarts an ambient loop.

use super::interaction::{PointerState, Tilt};
use super::{MotionClass, MotionDescriptor, MotionKey, MotionScope, MotionState, Trigger};
use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Track {
    descriptor: MotionDescriptor,
    started: Option<Instant>,
    tilt: Option<Tilt>,
}

impl Track {
    fn new(descriptor: MotionDescriptor, revealed: bool, now: Instant) -> Self {
        let (started, tilt) = match descriptor.class() {
            MotionClass::Ambient => (Some(now), None),
            MotionClass::Entrance => (revealed.then_some(now), None),
            MotionClass::Interaction(Trigger::Tilt) => {
                (None, Some(Tilt::new(descriptor.tilt_limits())))
            }
            MotionClass::Interaction(_) => (None, None),
        };
        Self {
            descriptor,
            started,
            tilt,
        }
    }

    fn sample(&self, now: Instant) -> MotionState {
        if let Some(tilt) = &self.tilt {
            let (rx, ry) = tilt.angles();
            return MotionState::REST.tilted(rx, ry);
        }
        match (self.descriptor.class(), self.started) {
            (MotionClass::Interaction(_), None) => MotionState::REST,
            (_, None) => self.descriptor.keyframes().first(),
            (_, Some(started)) => self
                .descriptor
                .sample_elapsed(now.saturating_duration_since(started)),
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        if let Some(tilt) = &self.tilt {
            return !tilt.is_settled();
        }
        match self.started {
            Some(started) => !self
                .descriptor
                .is_finished(now.saturating_duration_since(started)),
            None => false,
        }
    }
}

/// Active animations keyed by element.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    tracks: BTreeMap<MotionKey, Vec<Track>>,
    last_advance: Option<Instant>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the descriptors of one scope and retires the scope's tracks
    /// that are no longer declared.
    ///
    /// Entrance tracks start the first time they are synced with
    /// `revealed == true`; ambient tracks start when first seen.
    pub fn sync(
        &mut self,
        scope: MotionScope,
        descriptors: &[MotionDescriptor],
        revealed: bool,
        now: Instant,
    ) {
        let mut declared: BTreeMap<MotionKey, Vec<MotionClass>> = BTreeMap::new();

        for descriptor in descriptors {
            let key = descriptor.key();
            debug_assert_eq!(key.scope, scope, "descriptor synced under foreign scope");
            declared.entry(key).or_default().push(descriptor.class());

            let tracks = self.tracks.entry(key).or_default();
            match tracks
                .iter_mut()
                .find(|track| track.descriptor.class() == descriptor.class())
            {
                Some(track) => {
                    if track.started.is_none()
                        && revealed
                        && descriptor.class() == MotionClass::Entrance
                    {
                        track.started = Some(now);
                    }
                    track.descriptor = descriptor.clone();
                }
                None => tracks.push(Track::new(descriptor.clone(), revealed, now)),
            }
        }

        self.tracks.retain(|key, tracks| {
            if key.scope != scope {
                return true;
            }
            let Some(classes) = declared.get(key) else {
                return false;
            };
            tracks.retain(|track| classes.contains(&track.descriptor.class()));
            !tracks.is_empty()
        });
    }

    /// Removes every track of a scope.
    pub fn retire_scope(&mut self, scope: MotionScope) {
        self.tracks.retain(|key, _| key.scope != scope);
    }

    /// Composite state of an element, or `None` if nothing animates it.
    #[must_use]
    pub fn sample(&self, key: MotionKey, now: Instant) -> Option<MotionState> {
        let tracks = self.tracks.get(&key)?;
        Some(
            tracks
                .iter()
                .fold(MotionState::REST, |state, track| state.compose(track.sample(now))),
        )
    }

    /// Like [`Animator::sample`], falling back to the rest state.
    #[must_use]
    pub fn sample_or_rest(&self, key: MotionKey, now: Instant) -> MotionState {
        self.sample(key, now).unwrap_or(MotionState::REST)
    }

    /// True while any track still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tracks
            .values()
            .flatten()
            .any(|track| track.is_animating(now))
    }

    /// Whether an element has a tilt track.
    #[must_use]
    pub fn accepts_tilt(&self, key: MotionKey) -> bool {
        self.tracks
            .get(&key)
            .is_some_and(|tracks| tracks.iter().any(|track| track.tilt.is_some()))
    }

    /// Applies a pointer state change to the element's hover/press tracks.
    ///
    /// Activation restarts the tween; deactivation snaps back to rest.
    pub fn set_pointer(&mut self, key: MotionKey, pointer: PointerState, now: Instant) {
        let Some(tracks) = self.tracks.get_mut(&key) else {
            return;
        };
        for track in tracks {
            let active = match track.descriptor.class() {
                MotionClass::Interaction(Trigger::Hover) => pointer == PointerState::Hovered,
                MotionClass::Interaction(Trigger::Press) => pointer == PointerState::Pressed,
                _ => continue,
            };
            track.started = match (active, track.started) {
                (true, Some(started)) => Some(started),
                (true, None) => Some(now),
                (false, _) => None,
            };
        }
    }

    /// Aims the element's tilt spring; `None` releases it.
    pub fn point_at(&mut self, key: MotionKey, relative: Option<(f32, f32)>) {
        let Some(tracks) = self.tracks.get_mut(&key) else {
            return;
        };
        for tilt in tracks.iter_mut().filter_map(|track| track.tilt.as_mut()) {
            match relative {
                Some((x, y)) => tilt.point_at(x, y),
                None => tilt.release(),
            }
        }
    }

    /// Steps every spring to `now`.
    pub fn advance(&mut self, now: Instant) {
        let dt = self
            .last_advance
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_advance = Some(now);
        if dt <= 0.0 {
            return;
        }
        for tilt in self
            .tracks
            .values_mut()
            .flatten()
            .filter_map(|track| track.tilt.as_mut())
        {
            tilt.step(dt);
        }
    }

    /// Number of elements with at least one track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::SectionId;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::motion::{Keyframes, TiltLimits};
    use std::time::Duration;

    const SCOPE: MotionScope = MotionScope::Section(SectionId::About);

    fn entrance() -> MotionDescriptor {
        MotionDescriptor::entrance(
            MotionKey::new(SCOPE, "body"),
            MotionState::HIDDEN.offset(0.0, 50.0),
            MotionState::REST,
            Duration::from_millis(600),
        )
    }

    fn float() -> MotionDescriptor {
        MotionDescriptor::ambient(
            MotionKey::new(SCOPE, "ring"),
            Keyframes::Tween(MotionState::REST, MotionState::REST.rotated(360.0)),
            Duration::from_secs(40),
        )
    }

    #[test]
    fn unrevealed_entrance_holds_initial_state() {
        let now = Instant::now();
        let mut animator = Animator::new();
        animator.sync(SCOPE, &[entrance()], false, now);

        let later = now + Duration::from_secs(10);
        let state = animator.sample(entrance().key(), later).expect("tracked");
        assert_abs_diff_eq!(state.opacity, 0.0);
        assert!(!animator.is_animating(later));
    }

    #[test]
    fn entrance_starts_on_reveal() {
        let now = Instant::now();
        let mut animator = Animator::new();
        animator.sync(SCOPE, &[entrance()], false, now);

        let reveal_at = now + Duration::from_secs(3);
        animator.sync(SCOPE, &[entrance()], true, reveal_at);
        assert!(animator.is_animating(reveal_at));

        let done = reveal_at + Duration::from_secs(1);
        assert_eq!(animator.sample(entrance().key(), done), Some(MotionState::REST));
        assert!(!animator.is_animating(done));
    }

    #[test]
    fn resync_keeps_ambient_start() {
        let now = Instant::now();
        let mut animator = Animator::new();
        animator.sync(SCOPE, &[float()], false, now);

        let later = now + Duration::from_secs(10);
        let before = animator.sample(float().key(), later).expect("tracked");
        animator.sync(SCOPE, &[float()], true, later);
        let after = animator.sample(float().key(), later).expect("tracked");

        assert_eq!(before, after);
        assert!(after.rotate > 0.0);
        assert!(animator.is_animating(later + Duration::from_secs(3600)));
    }

    #[test]
    fn undeclared_tracks_are_retired_per_scope() {
        let now = Instant::now();
        let mut animator = Animator::new();
        let other = MotionDescriptor::ambient(
            MotionKey::new(MotionScope::Splash, "title"),
            Keyframes::Tween(MotionState::REST, MotionState::REST.scaled(1.1)),
            Duration::from_secs(2),
        );
        animator.sync(MotionScope::Splash, &[other.clone()], false, now);
        animator.sync(SCOPE, &[entrance(), float()], false, now);
        assert_eq!(animator.len(), 3);

        animator.sync(SCOPE, &[float()], false, now);
        assert_eq!(animator.len(), 2);
        assert!(animator.sample(entrance().key(), now).is_none());
        assert!(animator.sample(other.key(), now).is_some());

        animator.retire_scope(MotionScope::Splash);
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn hover_applies_and_reverts_immediately() {
        let now = Instant::now();
        let key = MotionKey::new(SCOPE, "card");
        let hover = MotionDescriptor::interaction(key, Trigger::Hover, MotionState::REST.scaled(1.2));
        let press = MotionDescriptor::interaction(key, Trigger::Press, MotionState::REST.scaled(0.9));
        let mut animator = Animator::new();
        animator.sync(SCOPE, &[hover, press], true, now);

        assert_eq!(animator.sample(key, now), Some(MotionState::REST));

        animator.set_pointer(key, PointerState::Hovered, now);
        let hovered = animator.sample_or_rest(key, now + Duration::from_secs(1));
        assert_abs_diff_eq!(hovered.scale, 1.2);

        animator.set_pointer(key, PointerState::Pressed, now + Duration::from_secs(1));
        let pressed = animator.sample_or_rest(key, now + Duration::from_secs(2));
        assert_abs_diff_eq!(pressed.scale, 0.9);

        animator.set_pointer(key, PointerState::Idle, now + Duration::from_secs(2));
        assert_eq!(
            animator.sample(key, now + Duration::from_secs(2)),
            Some(MotionState::REST)
        );
    }

    #[test]
    fn tilt_follows_pointer_after_advance() {
        let now = Instant::now();
        let key = MotionKey::new(SCOPE, "orbit");
        let mut animator = Animator::new();
        let tilt = MotionDescriptor::tilt(key, TiltLimits::uniform(10.0));
        animator.sync(SCOPE, &[tilt], true, now);
        assert!(animator.accepts_tilt(key));

        animator.point_at(key, Some((0.5, 0.0)));
        animator.advance(now);
        assert!(animator.is_animating(now));
        for frame in 1..=300 {
            animator.advance(now + Duration::from_millis(frame * 16));
        }
        let state = animator.sample_or_rest(key, now);
        assert_abs_diff_eq!(state.rotate_y, 10.0, epsilon = 0.05);
    }
}
