//! Traditional question-count suggestion.
//!
//! The traditional mode suggests one question per fixed number of words of
//! source text. The intelligent mode's content analysis needs a generation
//! backend and is not computed here.

use serde::{Deserialize, Serialize};

/// How a fractional suggestion is turned into a whole count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round down.
    Floor,
    /// Round to nearest, halves up.
    #[default]
    Round,
    /// Round up.
    Ceil,
}

/// Parameters of the traditional suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Words of source text per suggested question
    #[serde(default = "default_words_per_question")]
    pub words_per_question: u32,

    /// Rounding applied to `words / words_per_question`
    #[serde(default)]
    pub rounding: Rounding,
}

const fn default_words_per_question() -> u32 {
    100
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            words_per_question: default_words_per_question(),
            rounding: Rounding::default(),
        }
    }
}

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Suggested number of questions for `words` words of text. Never below 1.
#[must_use]
pub fn suggested_questions(words: usize, config: &SuggestionConfig) -> u32 {
    let per_question = usize::try_from(config.words_per_question.max(1)).unwrap_or(usize::MAX);
    let count = match config.rounding {
        Rounding::Floor => words / per_question,
        Rounding::Ceil => words.div_ceil(per_question),
        Rounding::Round => words.saturating_add(per_question / 2) / per_question,
    };
    u32::try_from(count).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn words(n: usize) -> String {
        vec!["palabra"; n].join(" ")
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  uno  dos\ntres\t"), 3);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(49, 1)]
    #[case(149, 1)]
    #[case(150, 2)]
    #[case(250, 3)]
    #[case(1000, 10)]
    fn test_default_rounds_to_nearest(#[case] n: usize, #[case] expected: u32) {
        let config = SuggestionConfig::default();
        assert_eq!(suggested_questions(word_count(&words(n)), &config), expected);
    }

    #[rstest]
    #[case(Rounding::Floor, 199, 1)]
    #[case(Rounding::Floor, 200, 2)]
    #[case(Rounding::Ceil, 101, 2)]
    #[case(Rounding::Ceil, 100, 1)]
    #[case(Rounding::Round, 349, 3)]
    fn test_rounding_methods(#[case] rounding: Rounding, #[case] n: usize, #[case] expected: u32) {
        let config = SuggestionConfig {
            words_per_question: 100,
            rounding,
        };
        assert_eq!(suggested_questions(n, &config), expected);
    }

    #[test]
    fn test_zero_words_per_question_does_not_divide_by_zero() {
        let config = SuggestionConfig {
            words_per_question: 0,
            rounding: Rounding::Round,
        };
        assert_eq!(suggested_questions(7, &config), 7);
    }

    #[test]
    fn test_serde_defaults() -> Result<(), serde_json::Error> {
        let config: SuggestionConfig = serde_json::from_str(r#"{"rounding": "ceil"}"#)?;
        assert_eq!(config.words_per_question, 100);
        assert_eq!(config.rounding, Rounding::Ceil);
        Ok(())
    }
}
