//! Text cleaning for scraped web-novel chapters.
//!
//! Aggregator sites inject notices into chapter text and disguise them with
//! homoglyphs, inserted punctuation and diacritics. This crate normalizes
//! text, builds obfuscation-tolerant patterns from a per-letter homoglyph
//! table, and uses them to classify and strip those notices.
//!
//! ```
//! use shiori_clean::{is_advertisement, remove_advertisement};
//!
//! assert!(is_advertisement("Support us at fr33web-nove1.com"));
//! assert_eq!(remove_advertisement("She left.\nfr33web-nove1.com"), "She left.");
//! ```

pub mod ads;
pub mod chapter;
pub mod homoglyph;
pub mod library;
pub mod normalize;
pub mod pattern;

pub use ads::{is_advertisement, remove_advertisement, AdFilter, StripOptions};
pub use chapter::{clean_chapter, clean_header};
pub use library::{PatternLibrary, Phrase, PhraseKind, PhraseUsage};
pub use normalize::{normalize, Folded};
pub use pattern::PatternError;
