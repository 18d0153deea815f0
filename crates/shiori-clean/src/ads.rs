//! Advertisement classification and removal.
//!
//! Both operations match against [`Folded`] text, so fullwidth and other
//! compatibility forms, diacritics and homoglyphs are tolerated the same
//! way. Removal maps each match back onto the original text and cuts it
//! there, so retained content keeps its casing and formatting.

use std::sync::LazyLock;

use regex::Regex;

use crate::library::{PatternLibrary, Phrase, PhraseKind, PhraseUsage};
use crate::normalize::Folded;
use crate::pattern::{self, PatternError, NOISE_GAP};

/// Filter over the built-in pattern library.
pub static DEFAULT_FILTER: LazyLock<AdFilter> = LazyLock::new(|| {
    AdFilter::new(&PatternLibrary::builtin()).expect("built-in pattern library compiles")
});

/// Whether `text` contains advertisement content, using the built-in library.
///
/// Meant for one fragment (a line or sentence) at a time.
pub fn is_advertisement(text: &str) -> bool {
    DEFAULT_FILTER.is_advertisement(text)
}

/// Strip advertisement spans from `text`, using the built-in library.
pub fn remove_advertisement(text: &str) -> String {
    DEFAULT_FILTER.remove_advertisement(text)
}

/// Tuning for the trailing-removal pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// When the tail that trailing removal would delete is longer than this
    /// many characters, only the line holding the match is removed.
    /// `None` deletes through the end of the text.
    pub max_trailing_chars: Option<usize>,
}

/// Compiled advertisement patterns. Immutable once built and safe to share
/// between threads.
#[derive(Debug, Clone)]
pub struct AdFilter {
    classifiers: Vec<(String, Regex)>,
    parenthetical: Option<Regex>,
    trailing: Option<Regex>,
    options: StripOptions,
}

impl AdFilter {
    /// Compile every phrase in `library`.
    ///
    /// This is the only place a [`PatternError`] can come from; the matching
    /// methods themselves never fail.
    pub fn new(library: &PatternLibrary) -> Result<Self, PatternError> {
        let suffixes = library.suffixes();

        let mut classifiers = Vec::new();
        for phrase in library.used_for(PhraseUsage::CLASSIFY) {
            let re = pattern::compile(&phrase_pattern(phrase, suffixes)?)?;
            classifiers.push((phrase.text.clone(), re));
        }

        let parenthetical = {
            let brands = library
                .used_for(PhraseUsage::PARENTHETICAL)
                .map(|p| phrase_pattern(p, suffixes))
                .collect::<Result<Vec<_>, _>>()?;
            if brands.is_empty() {
                None
            } else {
                Some(pattern::compile(&parenthetical_pattern(&brands)?)?)
            }
        };

        let trailing = {
            let starts = library
                .used_for(PhraseUsage::TRAILING)
                .map(|p| phrase_pattern(p, suffixes))
                .collect::<Result<Vec<_>, _>>()?;
            if starts.is_empty() {
                None
            } else {
                Some(pattern::compile(&format!(
                    "{}.*",
                    pattern::alternation(&starts)
                ))?)
            }
        };

        tracing::debug!(
            classifiers = classifiers.len(),
            parenthetical = parenthetical.is_some(),
            trailing = trailing.is_some(),
            "Compiled advertisement filter"
        );

        Ok(Self {
            classifiers,
            parenthetical,
            trailing,
            options: StripOptions::default(),
        })
    }

    pub fn with_options(mut self, options: StripOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> StripOptions {
        self.options
    }

    /// True if any classifying phrase matches the folded text.
    pub fn is_advertisement(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let folded = Folded::new(text);
        match self
            .classifiers
            .iter()
            .find(|(_, re)| re.is_match(folded.as_str()))
        {
            Some((label, _)) => {
                tracing::debug!(phrase = %label, "Advertisement fragment");
                true
            }
            None => false,
        }
    }

    /// Remove advertisement parentheticals, then everything from the first
    /// trailing-ad match on, then surrounding whitespace.
    ///
    /// ```
    /// use shiori_clean::ads::remove_advertisement;
    ///
    /// assert_eq!(
    ///     remove_advertisement("Great chapter (freewebnovel.com) enjoy."),
    ///     "Great chapter enjoy."
    /// );
    /// assert_eq!(
    ///     remove_advertisement("The hero smiled. Read more at daonovel.com for updates!"),
    ///     "The hero smiled."
    /// );
    /// ```
    pub fn remove_advertisement(&self, text: &str) -> String {
        let text = self.remove_parentheticals(text);
        let text = self.remove_trailing(&text);
        text.trim().to_string()
    }

    /// Pass 1: delete `(brand.com)`-style spans, delimiters included, along
    /// with the blank space that would otherwise be left doubled.
    fn remove_parentheticals(&self, text: &str) -> String {
        let Some(re) = &self.parenthetical else {
            return text.to_string();
        };

        let folded = Folded::new(text);
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in re.find_iter(folded.as_str()) {
            let span = folded.source_range(m.range());
            out.push_str(text[last..span.start].trim_end_matches(is_blank));
            last = span.end;
            // At the start of a line nothing precedes the span, so drop the
            // blanks that follow it instead.
            if out.is_empty() || out.ends_with('\n') {
                let rest = &text[last..];
                last += rest.len() - rest.trim_start_matches(is_blank).len();
            }
            tracing::debug!(span = &text[span], "Removed advertisement parenthetical");
        }
        if last == 0 {
            return text.to_string();
        }
        out.push_str(&text[last..]);
        out
    }

    /// Pass 2: cut from the first trailing-ad match to the end of the text.
    fn remove_trailing(&self, text: &str) -> String {
        let Some(re) = &self.trailing else {
            return text.to_string();
        };
        let folded = Folded::new(text);
        let Some(m) = re.find(folded.as_str()) else {
            return text.to_string();
        };
        let start = folded.source_range(m.range()).start;

        let tail = &text[start..];
        match self.options.max_trailing_chars {
            Some(limit) if tail.chars().count() > limit => {
                let line_end = tail.find('\n').map_or(text.len(), |i| start + i);
                tracing::debug!(
                    start,
                    removed = line_end - start,
                    limit,
                    "Trailing advertisement exceeds limit, removing its line only"
                );
                let mut out = String::with_capacity(text.len());
                out.push_str(&text[..start]);
                out.push_str(&text[line_end..]);
                out
            }
            _ => {
                tracing::debug!(start, removed = tail.len(), "Removed trailing advertisement");
                text[..start].to_string()
            }
        }
    }
}

/// Regex source for one library phrase.
fn phrase_pattern(phrase: &Phrase, suffixes: &[String]) -> Result<String, PatternError> {
    match phrase.kind {
        PhraseKind::Brand => pattern::brand_pattern(&phrase.text, suffixes),
        PhraseKind::Heuristic | PhraseKind::Pitch => pattern::tolerant_phrase(&phrase.text),
    }
}

/// `(`, optional `www` prefix, one brand, optional noise, `)`.
fn parenthetical_pattern(brands: &[String]) -> Result<String, PatternError> {
    let inner_gap = r"[^\p{L}\p{N}()]*";
    let www = pattern::tolerant_word("www")?;
    Ok(format!(
        r"\({inner_gap}(?:{www}{NOISE_GAP})?{}{inner_gap}\)",
        pattern::alternation(brands)
    ))
}

/// Horizontal whitespace.
fn is_blank(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Classification ────────────────────────────────────────────────

    #[test]
    fn empty_input() {
        assert!(!is_advertisement(""));
        assert_eq!(remove_advertisement(""), "");
    }

    #[test]
    fn plain_brand() {
        assert!(is_advertisement("Visit freewebnovel.com for more."));
        assert!(is_advertisement("boxnovel"));
    }

    #[test]
    fn fullwidth_and_accented_brand() {
        assert!(is_advertisement("This chapter is on ｆｒｅｅｗｅｂｎｏｖｅｌ today."));
        assert!(is_advertisement("Find it on FrééWébNövél, everyone."));
        assert!(is_advertisement("Hosted at d\u{0430}\u{043E}n\u{043E}vel."));
    }

    #[test]
    fn obfuscated_brand() {
        assert!(is_advertisement("Support us at fr33web-nove1.com please"));
        assert!(is_advertisement("b.o.x.n.o.v.e.l"));
        assert!(is_advertisement("N\u{043E}velB\u{0456}n"));
    }

    #[test]
    fn greek_and_cyrillic_capitals() {
        assert!(is_advertisement("visit \u{0392}\u{039F}\u{03A7}\u{039D}\u{039F}V\u{0395}L today"));
        assert!(is_advertisement("visit \u{039C}TLNOVEL today"));
        assert!(is_advertisement("\u{041D}osted on N\u{041E}VEL\u{0392}IN"));
    }

    #[test]
    fn heuristic_phrases() {
        assert!(is_advertisement(
            "Visit our site for the best novel reading experience"
        ));
        assert!(is_advertisement("New chapters published on a certain site."));
        assert!(is_advertisement("Follow current novels there"));
        assert!(is_advertisement("The most up-to-date novels are here"));
        assert!(is_advertisement("You're reading on some aggregator"));
    }

    #[test]
    fn ordinary_prose() {
        for line in [
            "The hero smiled.",
            "She read the letter twice before burning it.",
            "A novel full of twists, the elder said.",
            "He boxed the novel up and shipped it.",
            "Research on Google turned up nothing.",
            "The free market reacted to the web of lies in his novel.",
            "",
        ] {
            assert!(!is_advertisement(line), "false positive: {line:?}");
        }
    }

    // ── Removal ───────────────────────────────────────────────────────

    #[test]
    fn no_advertisement_is_unchanged() {
        let text = "  The hero smiled.\n\nShe nodded back.  ";
        assert_eq!(remove_advertisement(text), text.trim());
    }

    #[test]
    fn parenthetical() {
        assert_eq!(
            remove_advertisement("Great chapter (freewebnovel.com) enjoy."),
            "Great chapter enjoy."
        );
    }

    #[test]
    fn parenthetical_variants() {
        assert_eq!(
            remove_advertisement("He left(boxnovel). Then rain."),
            "He left. Then rain."
        );
        assert_eq!(
            remove_advertisement("Dawn came ( www.n0velbin.net ) slowly."),
            "Dawn came slowly."
        );
        assert_eq!(
            remove_advertisement("(daonovel.com) The end of winter."),
            "The end of winter."
        );
        assert_eq!(
            remove_advertisement("Line one.\n(daonovel) Line two."),
            "Line one.\nLine two."
        );
    }

    #[test]
    fn non_advertisement_parenthetical_kept() {
        let text = "He drew his sword (an old one) and waited.";
        assert_eq!(remove_advertisement(text), text);
    }

    #[test]
    fn parenthetical_keeps_following_content() {
        // The brand inside the parenthesis alone must not trigger the
        // trailing cut.
        assert_eq!(
            remove_advertisement("Mist rose (freewebnovel.com) over the lake.\nThe boat waited."),
            "Mist rose over the lake.\nThe boat waited."
        );
    }

    #[test]
    fn trailing() {
        assert_eq!(
            remove_advertisement("The hero smiled. Read more at daonovel.com for updates!"),
            "The hero smiled."
        );
    }

    #[test]
    fn trailing_spans_lines() {
        assert_eq!(
            remove_advertisement(
                "The gate opened.\nYou're reading on\nsome site\nplease support us"
            ),
            "The gate opened."
        );
    }

    #[test]
    fn trailing_after_parenthetical() {
        assert_eq!(
            remove_advertisement("Wind (boxnovel.com) howled. Search the name on Google to read"),
            "Wind howled."
        );
    }

    #[test]
    fn obfuscated_removal() {
        assert_eq!(remove_advertisement("She left.\nfr33web-nove1.com"), "She left.");
        assert_eq!(
            remove_advertisement("She left (fr33web-nove1.com) quietly."),
            "She left quietly."
        );
    }

    #[test]
    fn fullwidth_removal() {
        assert_eq!(
            remove_advertisement("Great chapter (ｆｒｅｅｗｅｂｎｏｖｅｌ.ｃｏｍ) enjoy."),
            "Great chapter enjoy."
        );
        assert_eq!(
            remove_advertisement("Great chapter （ｆｒｅｅｗｅｂｎｏｖｅｌ） enjoy."),
            "Great chapter enjoy."
        );
        assert_eq!(
            remove_advertisement("The hero smiled. Read more at ｄａｏｎｏｖｅｌ.ｃｏｍ"),
            "The hero smiled."
        );
    }

    #[test]
    fn math_alphanumeric_removal() {
        let bold_freewebnovel = "\u{1D41F}\u{1D42B}\u{1D41E}\u{1D41E}\u{1D430}\u{1D41E}\u{1D41B}\u{1D427}\u{1D428}\u{1D42F}\u{1D41E}\u{1D425}";
        assert!(is_advertisement(bold_freewebnovel));
        assert_eq!(
            remove_advertisement(&format!("Wind blew ({bold_freewebnovel}) hard.")),
            "Wind blew hard."
        );
    }

    #[test]
    fn capitals_removal() {
        assert_eq!(
            remove_advertisement("The end.\nvisit \u{0392}\u{039F}\u{03A7}\u{039D}\u{039F}V\u{0395}L today"),
            "The end.\nvisit"
        );
        assert_eq!(
            remove_advertisement("He sat (\u{039C}TLNOVEL) down."),
            "He sat down."
        );
    }

    #[test]
    fn removal_takes_trailing_marks() {
        assert_eq!(
            remove_advertisement("Rain fell (daonovel)\u{0301} softly."),
            "Rain fell softly."
        );
    }

    #[test]
    fn multi_brand_keeps_prose_before() {
        let text = "Lin Feng drew his sword.\nThe sect elders watched in silence.\nRead latest chapters at b0xn0vel.com and daonovel";
        assert_eq!(
            remove_advertisement(text),
            "Lin Feng drew his sword.\nThe sect elders watched in silence."
        );
    }

    #[test]
    fn whole_text_is_advertisement() {
        assert_eq!(remove_advertisement("  Read only at boxnovel.com  "), "");
    }

    #[test]
    fn removal_preserves_casing() {
        assert_eq!(
            remove_advertisement("ÉLAN Vital! (daonovel)"),
            "ÉLAN Vital!"
        );
    }

    // ── Custom libraries ──────────────────────────────────────────────

    #[test]
    fn empty_library_is_noop() {
        let filter = AdFilter::new(&PatternLibrary::new()).unwrap();
        assert!(!filter.is_advertisement("freewebnovel"));
        assert_eq!(filter.remove_advertisement(" freewebnovel "), "freewebnovel");
    }

    #[test]
    fn extra_brand() {
        let library = PatternLibrary::builtin()
            .with_brand("inkstone")
            .with_pitch("thanks for reading at");
        let filter = AdFilter::new(&library).unwrap();
        assert!(filter.is_advertisement("visit \u{0456}nkst0ne"));
        assert_eq!(
            filter.remove_advertisement("Done. Thanks for reading at our site"),
            "Done."
        );
    }

    #[test]
    fn invalid_phrase_fails_at_build() {
        let library = PatternLibrary::new().with_brand("novel9");
        assert!(matches!(
            AdFilter::new(&library),
            Err(PatternError::UnknownLetter('9', _))
        ));
    }

    #[test]
    fn trailing_limit_removes_only_the_line() {
        let filter = AdFilter::new(&PatternLibrary::builtin())
            .unwrap()
            .with_options(StripOptions {
                max_trailing_chars: Some(40),
            });
        let text = "Intro.\nRead more on boxnovel\nThe duel began at dawn and lasted until the sun went down.";
        assert_eq!(
            filter.remove_advertisement(text),
            "Intro.\n\nThe duel began at dawn and lasted until the sun went down."
        );
        // Short tails are still cut whole.
        assert_eq!(filter.remove_advertisement("Intro. Read more on boxnovel"), "Intro.");
    }

    #[test]
    fn filter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdFilter>();
    }
}
