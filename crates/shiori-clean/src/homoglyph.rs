use phf::phf_map;

/// Lowercase confusables per base letter, the base letter itself excluded.
///
/// Keys are lowercase ASCII letters. Patterns are case-sensitive, so
/// uppercase look-alikes live in [`UPPERCASE_HOMOGLYPHS`], keyed by the
/// letter they resemble rather than by their lowercase form. A code point
/// must appear under one letter only, across both tables.
pub static HOMOGLYPHS: phf::Map<char, &'static str> = phf_map! {
    // ── Digits, symbols, Cyrillic а, Greek α ─────────────────────
    'a' => "4@\u{0430}\u{03B1}\u{00E1}\u{00E0}\u{00E2}\u{00E4}\u{00E3}\u{00E5}\u{0101}\u{0103}\u{0105}\u{01CE}\u{1EA1}\u{1EA3}\u{1EA5}\u{1EA7}\u{1EA9}\u{1EAB}\u{1EAD}\u{1EAF}\u{1EB1}\u{1EB3}\u{1EB5}\u{1EB7}",
    // в ь б ß β ƀ ɓ
    'b' => "86\u{0432}\u{044C}\u{0431}\u{00DF}\u{03B2}\u{1E03}\u{1E05}\u{0180}\u{0253}",
    // ¢ © с ϲ ς
    'c' => "\u{00A2}\u{00A9}\u{0441}\u{03F2}\u{03C2}\u{0107}\u{0109}\u{010B}\u{010D}\u{00E7}",
    // đ ԁ ɗ
    'd' => "\u{010F}\u{0111}\u{1E0B}\u{1E0D}\u{0501}\u{0257}",
    // € е ε ё є ҽ
    'e' => "3\u{20AC}\u{0435}\u{03B5}\u{0451}\u{0454}\u{0113}\u{0115}\u{0117}\u{0119}\u{011B}\u{00E9}\u{00E8}\u{00EA}\u{00EB}\u{1EB9}\u{1EBB}\u{1EBD}\u{1EBF}\u{1EC1}\u{1EC3}\u{1EC5}\u{1EC7}\u{04BD}",
    // ƒ ϝ
    'f' => "\u{0192}\u{1E1F}\u{03DD}",
    // ɡ
    'g' => "9\u{0121}\u{011F}\u{011D}\u{0123}\u{01E7}\u{01F5}\u{0261}",
    // һ н ħ
    'h' => "\u{04BB}\u{043D}\u{0127}\u{0125}\u{021F}\u{1E23}\u{1E25}",
    // ¡ ı і ɩ ι ї
    'i' => "!\u{00A1}\u{0131}\u{0456}\u{00ED}\u{00EC}\u{00EE}\u{00EF}\u{012B}\u{012D}\u{012F}\u{01D0}\u{1ECB}\u{1EC9}\u{0269}\u{03B9}\u{0457}",
    // ј
    'j' => "\u{0458}\u{0135}\u{01F0}",
    // к κ
    'k' => "\u{043A}\u{03BA}\u{0137}\u{1E31}\u{1E33}\u{01E9}",
    // ł ӏ ⅼ
    'l' => "1|\u{0140}\u{0142}\u{013A}\u{013C}\u{013E}\u{1E37}\u{04CF}\u{217C}",
    // м
    'm' => "\u{043C}\u{1E41}\u{1E43}\u{1E3F}",
    // п η ո
    'n' => "\u{043F}\u{03B7}\u{0578}\u{0144}\u{0148}\u{00F1}\u{0146}\u{1E45}\u{1E47}\u{01F9}",
    // о ο σ օ ø
    'o' => "0\u{043E}\u{03BF}\u{03C3}\u{0585}\u{00F3}\u{00F2}\u{00F4}\u{00F6}\u{00F5}\u{00F8}\u{014D}\u{014F}\u{0151}\u{1ECD}\u{1ECF}\u{1ED1}\u{1ED3}\u{1ED5}\u{1ED7}\u{1ED9}\u{1EDB}\u{1EDD}\u{1EDF}\u{1EE1}\u{1EE3}",
    // р ρ þ
    'p' => "\u{0440}\u{03C1}\u{00FE}\u{1E55}\u{1E57}",
    // ԛ ʠ
    'q' => "\u{051B}\u{02A0}",
    // г я
    'r' => "\u{0433}\u{044F}\u{0155}\u{0159}\u{0157}\u{1E59}\u{1E5B}",
    // ѕ
    's' => "5$\u{0455}\u{015B}\u{015D}\u{015F}\u{0161}\u{0219}\u{1E61}\u{1E63}",
    // т τ ŧ
    't' => "7\u{0442}\u{03C4}\u{0165}\u{0163}\u{021B}\u{1E6B}\u{1E6D}\u{0167}",
    // υ μ µ
    'u' => "\u{03C5}\u{03BC}\u{00B5}\u{00F9}\u{00FA}\u{00FB}\u{00FC}\u{0169}\u{016B}\u{016D}\u{016F}\u{0171}\u{0173}\u{01D4}\u{01B0}\u{1EE5}\u{1EE7}\u{1EE9}\u{1EEB}\u{1EED}\u{1EEF}\u{1EF1}",
    // ѵ ν
    'v' => "\u{0475}\u{03BD}\u{1E7D}\u{1E7F}",
    // ѡ ω ш щ
    'w' => "\u{0461}\u{03C9}\u{0448}\u{0449}\u{0175}\u{1E81}\u{1E83}\u{1E85}\u{1E87}\u{1E89}",
    // х χ ×
    'x' => "\u{0445}\u{03C7}\u{00D7}\u{1E8B}\u{1E8D}",
    // у ү γ
    'y' => "\u{0443}\u{04AF}\u{03B3}\u{00FD}\u{00FF}\u{0177}\u{1EF3}\u{1EF5}\u{1EF7}\u{1EF9}",
    // ƶ
    'z' => "2\u{017A}\u{017C}\u{017E}\u{1E93}\u{01B6}",
};

/// Uppercase confusables, keyed by the lowercase letter whose capital they
/// resemble. `Ν` sits under `n` even though `ν` sits under `v`.
pub static UPPERCASE_HOMOGLYPHS: phf::Map<char, &'static str> = phf_map! {
    // Α А
    'a' => "\u{0391}\u{0410}",
    // Β В
    'b' => "\u{0392}\u{0412}",
    // С
    'c' => "\u{0421}",
    // Ε Е
    'e' => "\u{0395}\u{0415}",
    // Ϝ
    'f' => "\u{03DC}",
    // Ԍ
    'g' => "\u{050C}",
    // Η Н Һ
    'h' => "\u{0397}\u{041D}\u{04BA}",
    // Ι І Ӏ
    'i' => "\u{0399}\u{0406}\u{04C0}",
    // Ј
    'j' => "\u{0408}",
    // Κ К
    'k' => "\u{039A}\u{041A}",
    // Μ М
    'm' => "\u{039C}\u{041C}",
    // Ν
    'n' => "\u{039D}",
    // Ο О Օ
    'o' => "\u{039F}\u{041E}\u{0555}",
    // Ρ Р
    'p' => "\u{03A1}\u{0420}",
    // Ԛ
    'q' => "\u{051A}",
    // Ѕ
    's' => "\u{0405}",
    // Τ Т
    't' => "\u{03A4}\u{0422}",
    // Ս
    'u' => "\u{0544}",
    // Ѵ
    'v' => "\u{0474}",
    // Ԝ Ѡ
    'w' => "\u{051C}\u{0460}",
    // Χ Х
    'x' => "\u{03A7}\u{0425}",
    // Υ Ү
    'y' => "\u{03A5}\u{04AE}",
    // Ζ
    'z' => "\u{0396}",
};

/// Every code point that may stand in for `letter`: the letter in both
/// cases first, then its lowercase and uppercase confusables.
///
/// Returns `None` for anything without an entry in [`HOMOGLYPHS`].
pub fn class_members(letter: char) -> Option<impl Iterator<Item = char>> {
    let letter = letter.to_ascii_lowercase();
    let lower = HOMOGLYPHS.get(&letter)?;
    let upper = UPPERCASE_HOMOGLYPHS.get(&letter).copied().unwrap_or("");
    Some(
        [letter, letter.to_ascii_uppercase()]
            .into_iter()
            .chain(lower.chars())
            .chain(upper.chars()),
    )
}

/// Reverse lookup: the base letter a code point stands in for.
pub fn base_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        return Some(c.to_ascii_lowercase());
    }
    HOMOGLYPHS
        .entries()
        .chain(UPPERCASE_HOMOGLYPHS.entries())
        .find(|(_, confusables)| confusables.contains(c))
        .map(|(letter, _)| *letter)
}
