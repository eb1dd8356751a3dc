// SPDX-License-Identifier: MPL-2.0
//! Character-by-character text reveal.
//!
//! A typewriter is an entrance motion on the `reveal` property; the renderer
//! shows [`visible_prefix`] of the text and a caret until it completes.

use crate::ui::motion::{Easing, MotionDescriptor, MotionKey, MotionState};
use std::time::Duration;

/// Caret glyph appended while typing.
pub const CARET: char = '|';

/// Entrance motion typing `text` at `per_char`.
#[must_use]
pub fn typewriter(key: MotionKey, text: &str, per_char: Duration) -> MotionDescriptor {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    MotionDescriptor::entrance(
        key,
        MotionState::REST.revealing(0.0),
        MotionState::REST,
        per_char.saturating_mul(chars),
    )
    .eased(Easing::Linear)
}

/// Number of characters shown at reveal fraction `reveal`.
#[must_use]
pub fn visible_chars(text: &str, reveal: f32) -> usize {
    let total = text.chars().count();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let shown = (reveal.clamp(0.0, 1.0) * total as f32).floor() as usize;
    shown.min(total)
}

/// The typed part of `text` at reveal fraction `reveal`.
#[must_use]
pub fn visible_prefix(text: &str, reveal: f32) -> &str {
    let count = visible_chars(text, reveal);
    match text.char_indices().nth(count) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Text to display, with the caret while typing is unfinished.
#[must_use]
pub fn display(text: &str, reveal: f32, caret: bool) -> String {
    let prefix = visible_prefix(text, reveal);
    if caret && prefix.len() < text.len() {
        format!("{prefix}{CARET}")
    } else {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::SectionId;

    #[test]
    fn duration_is_per_character() {
        let key = MotionKey::section(SectionId::Hero, "name");
        let motion = typewriter(key, "Palak Goyal", Duration::from_millis(120));
        assert_eq!(motion.duration(), Duration::from_millis(1320));

        let halfway = motion.sample_elapsed(Duration::from_millis(660));
        assert_eq!(visible_chars("Palak Goyal", halfway.reveal), 5);
    }

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(visible_prefix("Creative • Code", 0.0), "");
        assert_eq!(visible_prefix("a•b", 0.67), "a•");
        assert_eq!(visible_prefix("a•b", 1.0), "a•b");
    }

    #[test]
    fn caret_only_while_typing() {
        assert_eq!(display("Hi", 0.5, true), "H|");
        assert_eq!(display("Hi", 1.0, true), "Hi");
        assert_eq!(display("Hi", 0.5, false), "H");
    }

    #[test]
    fn empty_text_is_instant() {
        let key = MotionKey::section(SectionId::Hero, "empty");
        let motion = typewriter(key, "", Duration::from_millis(40));
        assert!(motion.duration() > Duration::ZERO);
        assert_eq!(display("", 0.0, true), "");
    }
}
