/// How many result sections of the page are scanned. The results page
/// carries at most this many useful sections before page chrome starts;
/// overridable through [`QueryOptions::section_limit`].
pub const SECTION_SCAN_LIMIT: usize = 5;

/// Grammatical category of a result section, keyed by the `data-dz-name`
/// attribute on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Substantives,
    Verbs,
    AdjectivesAdverbs,
    Definitions,
    Examples,
    Phrases,
}

impl Category {
    /// Map a section's `data-dz-name` attribute value to a category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "subst" => Some(Category::Substantives),
            "verb" => Some(Category::Verbs),
            "adjadv" => Some(Category::AdjectivesAdverbs),
            "definition" => Some(Category::Definitions),
            "example" => Some(Category::Examples),
            "phrase" => Some(Category::Phrases),
            _ => None,
        }
    }

    /// The `data-dz-name` attribute value for this category.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Substantives => "subst",
            Category::Verbs => "verb",
            Category::AdjectivesAdverbs => "adjadv",
            Category::Definitions => "definition",
            Category::Examples => "example",
            Category::Phrases => "phrase",
        }
    }

    /// Heading printed above the section's rows.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Substantives => "Substantive",
            Category::Verbs => "Verbs",
            Category::AdjectivesAdverbs => "Adjectives/Adverbs",
            Category::Definitions => "Definitions",
            Category::Examples => "Examples",
            Category::Phrases => "Redewendung",
        }
    }
}

/// One bilingual dictionary entry, text already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Source-language cell text.
    pub source: String,
    /// German cell text.
    pub target: String,
}

/// A labeled region of the results page: one category, zero or more entries
/// in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub entries: Vec<Entry>,
}

/// What to extract from a results page.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Short code of the source language; the target is always German.
    pub language: String,
    /// Include definition sections.
    pub with_defs: bool,
    /// Include example sections.
    pub with_examples: bool,
    /// Include phrase sections.
    pub with_phrases: bool,
    /// Upper bound on result sections scanned, in document order.
    pub section_limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            language: "en".to_string(),
            with_defs: false,
            with_examples: false,
            with_phrases: false,
            section_limit: SECTION_SCAN_LIMIT,
        }
    }
}

impl QueryOptions {
    /// Whether a section of the given category should be rendered.
    /// Substantives, verbs, and adjectives/adverbs are always on; the rest
    /// only when their flag is set.
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Substantives | Category::Verbs | Category::AdjectivesAdverbs => true,
            Category::Definitions => self.with_defs,
            Category::Examples => self.with_examples,
            Category::Phrases => self.with_phrases,
        }
    }
}
