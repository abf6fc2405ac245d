//! Content category names per locale, and the generic listing noun.

use crate::i18n::{Locale, TranslationEntry, TranslationTable};
use std::sync::OnceLock;

static CATEGORY_ENTRIES: &[TranslationEntry] = &[
    TranslationEntry {
        canonical: "health",
        forms: &[
            ("pt", "saude"),
            ("es", "salud"),
            ("fr", "sante"),
            ("de", "gesundheit"),
            ("it", "salute"),
            ("nl", "gezondheid"),
            ("he", "briut"),
            ("ru", "zdorove"),
        ],
    },
    TranslationEntry {
        canonical: "technology",
        forms: &[
            ("pt", "tecnologia"),
            ("es", "tecnologia"),
            ("fr", "technologie"),
            ("de", "technologie"),
            ("it", "tecnologia"),
            ("nl", "technologie"),
            ("he", "technologia"),
            ("ru", "tekhnologii"),
        ],
    },
    TranslationEntry {
        canonical: "business",
        forms: &[
            ("pt", "negocios"),
            ("es", "negocios"),
            ("fr", "affaires"),
            ("de", "wirtschaft"),
            ("it", "affari"),
            ("nl", "zaken"),
            ("he", "asakim"),
            ("ru", "biznes"),
        ],
    },
    TranslationEntry {
        canonical: "science",
        forms: &[
            ("pt", "ciencia"),
            ("es", "ciencia"),
            ("fr", "sciences"),
            ("de", "wissenschaft"),
            ("it", "scienza"),
            ("nl", "wetenschap"),
            ("he", "mada"),
            ("ru", "nauka"),
        ],
    },
    TranslationEntry {
        canonical: "sports",
        forms: &[
            ("pt", "esportes"),
            ("es", "deportes"),
            ("fr", "sport"),
            ("de", "sport"),
            ("it", "sport"),
            ("nl", "sport"),
            ("he", "sport"),
            ("ru", "sport"),
        ],
    },
    TranslationEntry {
        canonical: "entertainment",
        forms: &[
            ("pt", "entretenimento"),
            ("es", "entretenimiento"),
            ("fr", "divertissement"),
            ("de", "unterhaltung"),
            ("it", "intrattenimento"),
            ("nl", "entertainment"),
            ("he", "bidur"),
            ("ru", "razvlecheniya"),
        ],
    },
    TranslationEntry {
        canonical: "politics",
        forms: &[
            ("pt", "politica"),
            ("es", "politica"),
            ("fr", "politique"),
            ("de", "politik"),
            ("it", "politica"),
            ("nl", "politiek"),
            ("he", "politika"),
            ("ru", "politika"),
        ],
    },
    TranslationEntry {
        canonical: "travel",
        forms: &[
            ("pt", "viagem"),
            ("es", "viajes"),
            ("fr", "voyage"),
            ("de", "reisen"),
            ("it", "viaggi"),
            ("nl", "reizen"),
            ("he", "tiyulim"),
            ("ru", "puteshestviya"),
        ],
    },
    TranslationEntry {
        canonical: "food",
        forms: &[
            ("pt", "culinaria"),
            ("es", "comida"),
            ("fr", "cuisine"),
            ("de", "essen"),
            ("it", "cucina"),
            ("nl", "eten"),
            ("he", "okhel"),
            ("ru", "eda"),
        ],
    },
    TranslationEntry {
        canonical: "lifestyle",
        forms: &[
            ("pt", "estilo-de-vida"),
            ("es", "estilo-de-vida"),
            ("fr", "style-de-vie"),
            ("de", "lebensstil"),
            ("it", "stile-di-vita"),
            ("nl", "levensstijl"),
            ("he", "signon-chaim"),
            ("ru", "obraz-zhizni"),
        ],
    },
    TranslationEntry {
        canonical: "education",
        forms: &[
            ("pt", "educacao"),
            ("es", "educacion"),
            ("fr", "education"),
            ("de", "bildung"),
            ("it", "istruzione"),
            ("nl", "onderwijs"),
            ("he", "chinuch"),
            ("ru", "obrazovanie"),
        ],
    },
    TranslationEntry {
        canonical: "finance",
        forms: &[
            ("pt", "financas"),
            ("es", "finanzas"),
            ("fr", "finance"),
            ("de", "finanzen"),
            ("it", "finanza"),
            ("nl", "financien"),
            ("he", "finansim"),
            ("ru", "finansy"),
        ],
    },
    TranslationEntry {
        canonical: "environment",
        forms: &[
            ("pt", "meio-ambiente"),
            ("es", "medio-ambiente"),
            ("fr", "environnement"),
            ("de", "umwelt"),
            ("it", "ambiente"),
            ("nl", "milieu"),
            ("he", "sviva"),
            ("ru", "ekologiya"),
        ],
    },
    TranslationEntry {
        canonical: "culture",
        forms: &[
            ("pt", "cultura"),
            ("es", "cultura"),
            ("fr", "culture"),
            ("de", "kultur"),
            ("it", "cultura"),
            ("nl", "cultuur"),
            ("he", "tarbut"),
            ("ru", "kultura"),
        ],
    },
];

/// The generic listing noun. It must never appear as a path segment of a
/// canonical article URL.
static LISTING_NOUN_ENTRIES: &[TranslationEntry] = &[TranslationEntry {
    canonical: "articles",
    forms: &[
        ("pt", "artigos"),
        ("es", "articulos"),
        ("fr", "articles"),
        ("de", "artikel"),
        ("it", "articoli"),
        ("nl", "artikelen"),
        ("he", "maamarim"),
        ("ru", "stati"),
    ],
}];

static CATEGORIES: OnceLock<TranslationTable> = OnceLock::new();
static LISTING_NOUNS: OnceLock<TranslationTable> = OnceLock::new();

/// Content category table.
pub fn categories() -> &'static TranslationTable {
    CATEGORIES.get_or_init(|| TranslationTable::build_lenient("categories", CATEGORY_ENTRIES))
}

/// Listing noun table ("articles" and its translations).
pub fn listing_nouns() -> &'static TranslationTable {
    LISTING_NOUNS
        .get_or_init(|| TranslationTable::build_lenient("listing-nouns", LISTING_NOUN_ENTRIES))
}

pub fn translate_category_to_locale(category: &str, locale: Locale) -> String {
    categories().translate_to_locale(category, locale)
}

pub fn translate_category_to_english(localized: &str) -> String {
    categories().translate_to_english(localized)
}

pub fn is_known_category(category: &str) -> bool {
    categories().is_known_canonical(category)
}

/// Check whether a path segment is the listing noun in any locale.
pub fn is_listing_noun(segment: &str) -> bool {
    let segment = segment.to_lowercase();
    listing_nouns().all_forms().any(|form| form == segment)
}
