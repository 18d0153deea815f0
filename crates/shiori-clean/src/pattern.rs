//! Obfuscation-tolerant regular expressions.
//!
//! A target word becomes one character class per letter (the letter plus its
//! homoglyphs), with a noise gap between consecutive classes so that
//! `fr33-web_n.o.v.e.1` still spells `freewebnovel`.
//!
//! Case is handled by the classes, not by the regex engine: each class
//! lists the letter in both cases and the capitals that look like it.
//! Engine-level case folding would pull `Ν` into the `v` class through `ν`.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::homoglyph;

/// Run of characters tolerated between two letters of one word: anything
/// that is not a letter, digit or whitespace. Stray combining marks land
/// here too.
pub const NOISE_GAP: &str = r"[^\p{L}\p{N}\s]*";

/// Separator between the words of a phrase.
pub const WORD_GAP: &str = r"[^\p{L}\p{N}]+";

/// What a `*` in a phrase expands to: a few arbitrary words, never past the
/// end of a sentence or line.
pub const WILDCARD: &str = r"[^.!?\n]{0,60}?";

/// Compiled-program budget; tolerant classes are large once the Unicode gap
/// classes are expanded.
const SIZE_LIMIT: usize = 1 << 26;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("no homoglyph class for {0:?} in {1:?}")]
    UnknownLetter(char, String),

    #[error("empty pattern phrase")]
    EmptyPhrase,

    #[error("failed to compile pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Character class matching `letter` or any of its homoglyphs.
pub fn letter_class(letter: char) -> Option<String> {
    let members = homoglyph::class_members(letter)?;
    let mut class = String::from("[");
    for c in members {
        class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
    }
    class.push(']');
    Some(class)
}

/// One word, letter by letter, with noise gaps in between.
pub fn tolerant_word(word: &str) -> Result<String, PatternError> {
    if word.is_empty() {
        return Err(PatternError::EmptyPhrase);
    }
    let mut classes = Vec::with_capacity(word.len());
    for c in word.chars() {
        let class =
            letter_class(c).ok_or_else(|| PatternError::UnknownLetter(c, word.to_string()))?;
        classes.push(class);
    }
    Ok(classes.join(NOISE_GAP))
}

/// A whitespace-separated phrase; `*` stands for a few arbitrary words.
///
/// Bounded by word boundaries on both ends so `research on google` does not
/// read as `search on google`.
pub fn tolerant_phrase(phrase: &str) -> Result<String, PatternError> {
    let mut body = String::new();
    let mut has_word = false;
    for token in phrase.split_whitespace() {
        if token == "*" {
            if has_word {
                body.push_str(&format!("(?:{WORD_GAP}{WILDCARD})?"));
            }
            continue;
        }
        if has_word {
            body.push_str(WORD_GAP);
        }
        body.push_str(&tolerant_word(token)?);
        has_word = true;
    }
    if !has_word {
        return Err(PatternError::EmptyPhrase);
    }
    Ok(format!(r"\b{body}\b"))
}

/// Optional domain suffix (`.com`, `. n e t`, ...) after a brand.
pub fn suffix_group<S: AsRef<str>>(suffixes: &[S]) -> Result<String, PatternError> {
    if suffixes.is_empty() {
        return Ok(String::new());
    }
    let words = suffixes
        .iter()
        .map(|s| tolerant_word(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("(?:{NOISE_GAP}(?:{}))?", words.join("|")))
}

/// A brand name with an optional trailing domain suffix.
pub fn brand_pattern<S: AsRef<str>>(brand: &str, suffixes: &[S]) -> Result<String, PatternError> {
    Ok(format!("{}{}", tolerant_word(brand)?, suffix_group(suffixes)?))
}

/// Non-capturing alternation of already-built patterns.
pub fn alternation<S: AsRef<str>>(patterns: &[S]) -> String {
    let parts: Vec<&str> = patterns.iter().map(|p| p.as_ref()).collect();
    format!("(?:{})", parts.join("|"))
}

/// Compile with `.` spanning newlines.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    let re = RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .size_limit(SIZE_LIMIT)
        .build()?;
    Ok(re)
}
