//! Source-language table.
//!
//! The dictionary service addresses its result pages by the German name of
//! the source language ("englisch-deutsch", "französisch-deutsch", ...).
//! This table maps the short codes accepted on the command line to those
//! names. Lookups are total: unrecognized input falls back to the first
//! entry instead of failing, so a bad `-l` value degrades to an
//! English-German query rather than an error.

/// Ordered code/name pairs. The first entry is the fallback.
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "englisch"),
    ("fr", "französisch"),
    ("es", "spanisch"),
    ("it", "italienisch"),
    ("ch", "chinesisch"),
    ("ru", "russisch"),
    ("pt", "portugiesisch"),
    ("pl", "polnisch"),
];

/// Resolve a short code or full name to the full language name.
///
/// Accepts either side of the table; anything else returns the first
/// entry's name.
pub fn name_for(input: &str) -> &'static str {
    for (code, name) in LANGUAGES {
        if input == *code || input == *name {
            return name;
        }
    }
    LANGUAGES[0].1
}

/// Resolve a short code or full name to the short code.
///
/// Accepts either side of the table; anything else returns the first
/// entry's code.
pub fn code_for(input: &str) -> &'static str {
    for (code, name) in LANGUAGES {
        if input == *code || input == *name {
            return code;
        }
    }
    LANGUAGES[0].0
}

/// Default source-language code for this process, derived from the locale
/// environment (`LC_ALL`, then `LC_MESSAGES`, then `LANG`).
pub fn default_code() -> String {
    let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty());
    from_locale(locale.as_deref())
}

/// Extract the language field from a POSIX locale value.
///
/// `de_DE.UTF-8` yields `de`; unset, empty, `C`, and `POSIX` locales yield
/// `en`. The result is not checked against the table — [`name_for`] and
/// [`code_for`] absorb unknown codes downstream.
pub fn from_locale(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "en".to_string();
    };
    let field = value.split(['_', '.', '@']).next().unwrap_or("");
    match field {
        "" | "C" | "POSIX" => "en".to_string(),
        code => code.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_round_trip() {
        for (code, _) in LANGUAGES {
            assert_eq!(code_for(name_for(code)), *code);
        }
    }

    #[test]
    fn test_name_code_round_trip() {
        for (_, name) in LANGUAGES {
            assert_eq!(name_for(code_for(name)), *name);
        }
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(name_for("en"), "englisch");
        assert_eq!(name_for("französisch"), "französisch");
        assert_eq!(code_for("spanisch"), "es");
        assert_eq!(code_for("pl"), "pl");
    }

    #[test]
    fn test_unknown_falls_back_to_first_entry() {
        assert_eq!(name_for("klingon"), "englisch");
        assert_eq!(name_for(""), "englisch");
        assert_eq!(code_for("klingon"), "en");
        assert_eq!(code_for(""), "en");
        // Deterministic across repeated calls
        assert_eq!(name_for("klingon"), name_for("klingon"));
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(from_locale(Some("de_DE.UTF-8")), "de");
        assert_eq!(from_locale(Some("fr_FR@euro")), "fr");
        assert_eq!(from_locale(Some("en_US")), "en");
        assert_eq!(from_locale(Some("C")), "en");
        assert_eq!(from_locale(Some("C.UTF-8")), "en");
        assert_eq!(from_locale(Some("POSIX")), "en");
        assert_eq!(from_locale(Some("")), "en");
        assert_eq!(from_locale(None), "en");
    }
}
