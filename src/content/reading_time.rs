//! Reading-time estimate for entry bodies

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Scripts written without spaces; every character reads as a word
    static ref CJK_CHAR: Regex =
        Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]").unwrap();
    static ref TOKEN: Regex =
        Regex::new(r"[^\s\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]+").unwrap();
}

/// Words counted in a body and the derived estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: f64,
    /// Human string, e.g. "3 min read"
    pub text: String,
}

/// Count words: each CJK character, plus each whitespace-delimited token
/// holding at least one letter or digit (bare punctuation is skipped).
pub fn count_words(text: &str) -> usize {
    let cjk = CJK_CHAR.find_iter(text).count();
    let words = TOKEN
        .find_iter(text)
        .filter(|m| m.as_str().chars().any(char::is_alphanumeric))
        .count();
    cjk + words
}

/// Estimate reading time at `words_per_minute`.
///
/// Displayed minutes are rounded to two decimals and then up to a whole
/// minute, so an empty body reads "0 min read".
pub fn reading_time(text: &str, words_per_minute: usize) -> ReadingTime {
    let words = count_words(text);
    let minutes = words as f64 / words_per_minute.max(1) as f64;
    let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

    ReadingTime {
        words,
        minutes,
        text: format!("{} min read", displayed),
    }
}
