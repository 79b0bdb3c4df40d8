//! Typing animation state machine.
//!
//! Each tick either types one more character of the current phrase or
//! deletes one, and reports the text to show plus how long to wait before
//! the next tick. Deleting runs faster than typing, and a full phrase holds
//! on screen briefly before deletion starts. The animator itself never
//! finishes; the driving loop stops it through a cancel handle.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(70);
pub const DELETE_DELAY: Duration = Duration::from_millis(30);
pub const HOLD_DELAY: Duration = Duration::from_millis(900);

pub const DEFAULT_PHRASES: [&str; 3] = ["Strategic-Dynamo ⚡", "Enthusiastic-Dreamer ✨", "Dynamic-Thinker 🔥"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// One rendered step: the visible text and the wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    index: usize,
    /// Cursor position in chars, not bytes.
    cursor: usize,
    direction: Direction,
}

impl TypingAnimator {
    /// Empty phrases are dropped up front.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .map(Into::into)
            .filter(|phrase: &String| !phrase.is_empty())
            .collect();
        Self { phrases, index: 0, cursor: 0, direction: Direction::Forward }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one step. Returns `None` only when there is nothing to type.
    pub fn tick(&mut self) -> Option<Frame> {
        let phrase = self.phrases.get(self.index)?;
        let len = phrase.chars().count();

        match self.direction {
            Direction::Forward => {
                self.cursor = (self.cursor + 1).min(len);
                let text = prefix(phrase, self.cursor);
                if self.cursor == len {
                    self.direction = Direction::Backward;
                    return Some(Frame { text, delay: HOLD_DELAY });
                }
                Some(Frame { text, delay: TYPE_DELAY })
            }
            Direction::Backward => {
                self.cursor = self.cursor.saturating_sub(1);
                let text = prefix(phrase, self.cursor);
                if self.cursor == 0 {
                    self.direction = Direction::Forward;
                    self.index = (self.index + 1) % self.phrases.len();
                    return Some(Frame { text, delay: TYPE_DELAY });
                }
                Some(Frame { text, delay: DELETE_DELAY })
            }
        }
    }
}

fn prefix(phrase: &str, chars: usize) -> String {
    phrase.chars().take(chars).collect()
}
