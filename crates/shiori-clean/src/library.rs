use bitflags::bitflags;

bitflags! {
    /// Which passes a phrase takes part in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PhraseUsage: u8 {
        /// Flags a fragment in `is_advertisement`.
        const CLASSIFY = 0b0000_0001;
        /// Starts trailing boilerplate; everything from the match on is cut.
        const TRAILING = 0b0000_0010;
        /// Removed when it is the whole content of a parenthetical.
        const PARENTHETICAL = 0b0000_0100;
    }
}

/// The role a phrase plays in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    /// An aggregator site name, matched without word boundaries and with an
    /// optional domain suffix.
    Brand,
    /// A contextual phrase typical of aggregator notices.
    Heuristic,
    /// Self-promotion that opens a block of aggregator boilerplate.
    Pitch,
}

impl PhraseKind {
    pub const fn default_usage(self) -> PhraseUsage {
        match self {
            PhraseKind::Brand => PhraseUsage::all(),
            PhraseKind::Heuristic => PhraseUsage::CLASSIFY,
            PhraseKind::Pitch => PhraseUsage::CLASSIFY.union(PhraseUsage::TRAILING),
        }
    }
}

/// One entry of the library. Words are plain lowercase letters; `*` in a
/// heuristic or pitch phrase stands for a few arbitrary words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub kind: PhraseKind,
    pub usage: PhraseUsage,
}

impl Phrase {
    pub fn new(text: impl Into<String>, kind: PhraseKind) -> Self {
        Self {
            text: text.into(),
            kind,
            usage: kind.default_usage(),
        }
    }
}

// ── Built-in data ────────────────────────────────────────────────────

/// Aggregator brands seen injecting notices into chapter text.
pub const BRANDS: &[&str] = &[
    "freewebnovel",
    "daonovel",
    "boxnovel",
    "novelbin",
    "novelfull",
    "lightnovelpub",
    "lightnovelworld",
    "readlightnovel",
    "mtlnovel",
    "novelfire",
];

/// Domain suffixes allowed after a brand.
pub const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org"];

/// Notice phrasing that marks a fragment as an advertisement.
pub const HEURISTICS: &[&str] = &[
    "visit * for * novel * experience",
    "read * chapters * at",
    "content * taken from",
    "source of this content",
    "updated from",
    "chapter * updated by",
    "chapters published on",
    "novels published on",
    "follow current novels",
    "for the best novel reading",
    "most uptodate novels",
    "latest chapters at",
    "new novel chapters",
    "free web novel",
];

/// Phrases after which the rest of a text block is aggregator boilerplate.
pub const PITCHES: &[&str] = &[
    "read more on",
    "read more at",
    "read only at",
    "read latest chapters at",
    "youre reading on",
    "you are reading on",
    "search * on google",
    "this chapter is updated by",
];

/// Ordered set of phrases and domain suffixes that advertisement filters
/// are compiled from.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    phrases: Vec<Phrase>,
    suffixes: Vec<String>,
}

impl PatternLibrary {
    /// An empty library: matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in brands, heuristics, pitches and suffixes.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for brand in BRANDS {
            library.push(Phrase::new(*brand, PhraseKind::Brand));
        }
        for heuristic in HEURISTICS {
            library.push(Phrase::new(*heuristic, PhraseKind::Heuristic));
        }
        for pitch in PITCHES {
            library.push(Phrase::new(*pitch, PhraseKind::Pitch));
        }
        for suffix in DOMAIN_SUFFIXES {
            library.push_suffix(*suffix);
        }
        library
    }

    /// Append a phrase. Duplicates (same text and kind) are ignored.
    pub fn push(&mut self, phrase: Phrase) {
        if !self
            .phrases
            .iter()
            .any(|p| p.kind == phrase.kind && p.text == phrase.text)
        {
            self.phrases.push(phrase);
        }
    }

    pub fn push_suffix(&mut self, suffix: impl Into<String>) {
        let suffix = suffix.into();
        if !self.suffixes.contains(&suffix) {
            self.suffixes.push(suffix);
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.push(Phrase::new(brand, PhraseKind::Brand));
        self
    }

    pub fn with_pitch(mut self, pitch: impl Into<String>) -> Self {
        self.push(Phrase::new(pitch, PhraseKind::Pitch));
        self
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Phrases taking part in a given pass, in library order.
    pub fn used_for(&self, usage: PhraseUsage) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter().filter(move |p| p.usage.contains(usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contents() {
        let library = PatternLibrary::builtin();
        assert_eq!(
            library.phrases().len(),
            BRANDS.len() + HEURISTICS.len() + PITCHES.len()
        );
        assert_eq!(library.suffixes(), ["com", "net", "org"]);
    }

    #[test]
    fn usage_by_kind() {
        let library = PatternLibrary::builtin();
        let parenthetical: Vec<&str> = library
            .used_for(PhraseUsage::PARENTHETICAL)
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(parenthetical, BRANDS);

        assert!(library
            .used_for(PhraseUsage::TRAILING)
            .any(|p| p.text == "read more at"));
        assert!(!library
            .used_for(PhraseUsage::TRAILING)
            .any(|p| p.text == "updated from"));
        assert!(library
            .used_for(PhraseUsage::CLASSIFY)
            .any(|p| p.text == "boxnovel"));
    }

    #[test]
    fn push_ignores_duplicates() {
        let library = PatternLibrary::new()
            .with_brand("daonovel")
            .with_brand("daonovel")
            .with_pitch("read more on");
        assert_eq!(library.phrases().len(), 2);
    }

    #[test]
    fn empty_library() {
        let library = PatternLibrary::new();
        assert!(library.phrases().is_empty());
        assert_eq!(library.used_for(PhraseUsage::CLASSIFY).count(), 0);
    }
}
