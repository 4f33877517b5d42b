use scraper::ElementRef;
use unicode_normalization::UnicodeNormalization;

/// Extract normalized plain text from a table cell.
///
/// Concatenates all descendant text nodes, so nested markup
/// (`<samp><a>…</a></samp>`, `<mark>`, small-print annotations) flattens
/// into one string before normalization.
pub fn cell_text(cell: ElementRef) -> String {
    normalize(&cell.text().collect::<String>())
}

/// Normalize extracted text: NFC form, no-break spaces removed, leading and
/// trailing whitespace trimmed, internal whitespace runs collapsed to single
/// spaces.
///
/// NFC keeps umlauted entries in one stable representation regardless of how
/// the page encodes them. No-break spaces are dropped before the collapse so
/// they glue their neighbors together rather than turning into separators,
/// matching how the results page uses them inside single headwords.
pub fn normalize(raw: &str) -> String {
    let cleaned: String = raw.nfc().filter(|&c| c != '\u{a0}').collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
