//! Canonical matching forms for scraped text.
//!
//! [`normalize`] separates base characters from their diacritics (NFKD),
//! drops the nonspacing marks and lowercases what is left. Fullwidth forms
//! and ligatures collapse to their plain Latin spelling along the way.
//!
//! [`Folded`] does the same minus the lowercasing, and remembers where every
//! folded character came from so a match can be cut out of the source.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Unicode general category Mn.
static RE_NONSPACING_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Mn}+").unwrap());

/// Normalize text into its matching form.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use shiori_clean::normalize::normalize;
///
/// assert_eq!(normalize("Ｆｒｅｅ Wéb"), "free web");
/// ```
pub fn normalize(s: &str) -> String {
    let mut current = fold_pass(s);
    loop {
        let next = fold_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One decompose → strip → lowercase pass.
///
/// A single pass is not always a fixed point: `İ` lowercases to `i` plus a
/// combining dot, and `℡` decomposes to uppercase `TEL`.
fn fold_pass(s: &str) -> String {
    let decomposed: String = s.nfkd().collect();
    strip_nonspacing_marks(&decomposed).to_lowercase()
}

fn strip_nonspacing_marks(s: &str) -> String {
    RE_NONSPACING_MARK.replace_all(s, "").into_owned()
}

/// Source text after NFKD and mark stripping, case kept.
///
/// Letter case carries shape (`Ν` looks like `N`, its lowercase `ν` like
/// `v`), so the tolerant patterns match against this form rather than
/// [`normalize`]'s.
///
/// ```
/// use shiori_clean::normalize::Folded;
///
/// let source = "at ｄａｏｎｏｖｅｌ";
/// let folded = Folded::new(source);
/// assert_eq!(folded.as_str(), "at daonovel");
/// assert_eq!(&source[folded.source_range(3..11)], "ｄａｏｎｏｖｅｌ");
/// ```
#[derive(Debug, Clone)]
pub struct Folded<'a> {
    source: &'a str,
    text: String,
    /// Per source char: where its folding starts in `text`, and where the
    /// char itself starts in `source`.
    chars: Vec<(usize, usize)>,
}

impl<'a> Folded<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut chars = Vec::with_capacity(source.len());
        let mut decomposed = String::new();
        for (at, c) in source.char_indices() {
            decomposed.clear();
            decomposed.extend(std::iter::once(c).nfkd());
            chars.push((text.len(), at));
            text.push_str(&strip_nonspacing_marks(&decomposed));
        }
        Self {
            source,
            text,
            chars,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte range of the source covering `range` of the folded text.
    ///
    /// Both ends widen to whole source characters. The end also takes in
    /// marks that folded away directly after the range.
    pub fn source_range(&self, range: Range<usize>) -> Range<usize> {
        let first = self
            .chars
            .partition_point(|&(folded, _)| folded <= range.start)
            .saturating_sub(1);
        let start = self.chars.get(first).map_or(self.source.len(), |&(_, at)| at);

        let mut next = self.chars.partition_point(|&(folded, _)| folded < range.end);
        while next < self.chars.len() && self.folded_len(next) == 0 {
            next += 1;
        }
        let end = self.chars.get(next).map_or(self.source.len(), |&(_, at)| at);

        start..end.max(start)
    }

    fn folded_len(&self, index: usize) -> usize {
        let end = self
            .chars
            .get(index + 1)
            .map_or(self.text.len(), |&(folded, _)| folded);
        end - self.chars[index].0
    }
}
