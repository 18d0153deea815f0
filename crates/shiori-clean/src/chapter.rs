use std::sync::LazyLock;

use regex::Regex;

use crate::ads::{AdFilter, DEFAULT_FILTER};

// ── Header prefixes ─────────────────────────────────────────────────

/// "Chapter 13:", "Chapter -2 - ", "chapter 7"
static RE_CHAPTER_NUMBER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Chapter\s+-?\d+:?\s*-?\s*").unwrap());

/// "Chapter 13 "
static RE_CHAPTER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Chapter\s+-?\d+\s+").unwrap());

/// "1:", "13 "
static RE_LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+:?\s*").unwrap());

/// Bare "Chapter " left over.
static RE_CHAPTER_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^Chapter\s+").unwrap());

/// Clean a chapter title from the two header strings a chapter page offers
/// (typically the page title and the heading).
///
/// The longer of the two is assumed to carry the full title; its
/// `Chapter N:` numbering is stripped.
///
/// ```
/// use shiori_clean::chapter::clean_header;
///
/// assert_eq!(clean_header("Ch. 5", "Chapter 5: The Long Night"), "The Long Night");
/// ```
pub fn clean_header(first: &str, second: &str) -> String {
    let main = if second.chars().count() > first.chars().count() {
        second
    } else {
        first
    };

    let mut title = main.trim().to_string();
    for re in [
        &RE_CHAPTER_NUMBER_COLON,
        &RE_CHAPTER_NUMBER,
        &RE_LEADING_NUMBER,
        &RE_CHAPTER_WORD,
    ] {
        title = re.replace(&title, "").into_owned();
    }
    title.trim().to_string()
}

// ── Chapter bodies ──────────────────────────────────────────────────

/// Clean a chapter body line by line with the built-in filter.
pub fn clean_chapter(body: &str) -> String {
    clean_chapter_with(&DEFAULT_FILTER, body)
}

/// Clean a chapter body line by line.
///
/// Lines the classifier does not flag are kept verbatim. Flagged lines go
/// through removal and are dropped if nothing is left, so one notice in the
/// middle of a chapter cannot take the rest of the chapter with it.
pub fn clean_chapter_with(filter: &AdFilter, body: &str) -> String {
    let mut kept = Vec::new();
    let mut altered = 0usize;
    let mut dropped = 0usize;

    for line in body.lines() {
        if !filter.is_advertisement(line) {
            kept.push(line.to_string());
            continue;
        }
        let cleaned = filter.remove_advertisement(line);
        if cleaned.is_empty() {
            dropped += 1;
        } else {
            altered += 1;
            kept.push(cleaned);
        }
    }

    if altered + dropped > 0 {
        tracing::debug!(altered, dropped, "Cleaned chapter body");
    }
    kept.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Headers ───────────────────────────────────────────────────────

    #[test]
    fn header_prefers_longer() {
        assert_eq!(clean_header("Chapter 13: Rain", "Chapter 13: Rain and Ash"), "Rain and Ash");
        assert_eq!(clean_header("Chapter 2 Dawn", "Dawn"), "Dawn");
    }

    #[test]
    fn header_tie_uses_first() {
        assert_eq!(clean_header("  Ash ", " Dust "), "Ash");
    }

    #[test]
    fn header_prefixes() {
        assert_eq!(clean_header("Chapter 13: The Fall", ""), "The Fall");
        assert_eq!(clean_header("chapter -2 - Prologue", ""), "Prologue");
        assert_eq!(clean_header("Chapter 7 Return", ""), "Return");
        assert_eq!(clean_header("13: Return", ""), "Return");
        assert_eq!(clean_header("42 Return", ""), "Return");
        assert_eq!(clean_header("Chapter Return", ""), "Return");
    }

    #[test]
    fn header_without_prefix() {
        assert_eq!(clean_header("The Long Night", "Night"), "The Long Night");
    }

    #[test]
    fn header_empty() {
        assert_eq!(clean_header("", ""), "");
    }

    // ── Bodies ────────────────────────────────────────────────────────

    #[test]
    fn body_without_ads() {
        let body = "The sky darkened.\n\nThunder rolled.";
        assert_eq!(clean_chapter(body), body);
    }

    #[test]
    fn body_drops_notice_lines_only() {
        let body = "The sky darkened.\nRead more at boxnovel.com\nThunder rolled.\nThe army advanced.";
        assert_eq!(
            clean_chapter(body),
            "The sky darkened.\nThunder rolled.\nThe army advanced."
        );
    }

    #[test]
    fn body_keeps_prose_on_flagged_line() {
        let body = "He bowed (daonovel.com) deeply.\nShe laughed.";
        assert_eq!(clean_chapter(body), "He bowed deeply.\nShe laughed.");
    }

    #[test]
    fn body_fullwidth_notice() {
        assert_eq!(
            clean_chapter("She left.\nRead at ｆｒｅｅｗｅｂｎｏｖｅｌ now\nEnd."),
            "She left.\nRead at\nEnd."
        );
        assert_eq!(
            clean_chapter("She left.\nRead more at ｆｒｅｅｗｅｂｎｏｖｅｌ now\nEnd."),
            "She left.\nEnd."
        );
        assert_eq!(
            clean_chapter("She bowed (ｂｏｘｎｏｖｅｌ) low.\nEnd."),
            "She bowed low.\nEnd."
        );
    }

    #[test]
    fn body_heuristic_line_without_removable_span() {
        // Flagged by a heuristic but nothing matches a removal pattern.
        let body = "Intro.\nThis content was taken from elsewhere.";
        assert_eq!(clean_chapter(body), body);
    }

    #[test]
    fn body_empty() {
        assert_eq!(clean_chapter(""), "");
    }
}
