//! Reading time estimate.

use serde::{Deserialize, Serialize};

/// Default reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated time to read a document body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub words: usize,
    /// Whole minutes, rounded up.
    pub minutes: u32,
    /// Display text, e.g. `"3 min read"`.
    pub text: String,
}

impl ReadingTime {
    /// Estimate from whitespace-separated words.
    ///
    /// Returns `None` for a body without words.
    #[must_use]
    pub fn estimate(body: &str, words_per_minute: u32) -> Option<Self> {
        let words = body.split_whitespace().count();
        if words == 0 {
            return None;
        }

        let per_minute = usize::try_from(words_per_minute.max(1)).unwrap_or(usize::MAX);
        let minutes = u32::try_from(words.div_ceil(per_minute)).unwrap_or(u32::MAX);
        Some(Self {
            words,
            minutes,
            text: format!("{minutes} min read"),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_body_has_no_estimate() {
        assert_eq!(ReadingTime::estimate("", 200), None);
        assert_eq!(ReadingTime::estimate(" \n\t ", 200), None);
    }

    #[test]
    fn test_rounds_up() {
        let time = ReadingTime::estimate("one two three", 200).unwrap();

        assert_eq!(time.words, 3);
        assert_eq!(time.minutes, 1);
        assert_eq!(time.text, "1 min read");
    }

    #[test]
    fn test_exact_minutes() {
        let body = "word ".repeat(400);
        let time = ReadingTime::estimate(&body, 200).unwrap();

        assert_eq!(time.minutes, 2);
    }

    #[test]
    fn test_partial_minute() {
        let body = "word ".repeat(401);
        let time = ReadingTime::estimate(&body, 200).unwrap();

        assert_eq!(time.minutes, 3);
        assert_eq!(time.text, "3 min read");
    }

    #[test]
    fn test_zero_speed_is_clamped() {
        let time = ReadingTime::estimate("a b", 0).unwrap();

        assert_eq!(time.minutes, 2);
    }
}
