//! Typewriter effect: types a phrase one character per tick, pauses, deletes
//! it, pauses again and moves on to the next phrase, forever.

use super::constants::*;

#[derive(Clone, Debug)]
pub struct TypewriterTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub word_end_pause_ms: u32,
    pub word_gap_pause_ms: u32,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_ms: TYPE_STEP_MS,
            delete_ms: DELETE_STEP_MS,
            word_end_pause_ms: WORD_END_PAUSE_MS,
            word_gap_pause_ms: WORD_GAP_PAUSE_MS,
        }
    }
}

/// Result of one tick: the text to display and the delay before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub next_delay_ms: u32,
}

pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, timings: TypewriterTimings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            timings,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    #[inline]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypeStep {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return TypeStep {
                text: String::new(),
                next_delay_ms: self.timings.word_gap_pause_ms,
            };
        };
        let len = phrase.chars().count();

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            self.timings.delete_ms
        } else {
            self.chars = (self.chars + 1).min(len);
            self.timings.type_ms
        };
        let text: String = phrase.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            delay = self.timings.word_end_pause_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = self.timings.word_gap_pause_ms;
        }

        TypeStep {
            text,
            next_delay_ms: delay,
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(TYPING_PHRASES, TypewriterTimings::default())
    }
}
