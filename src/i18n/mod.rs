//! Locale-aware routing vocabulary.
//!
//! Everything that maps between canonical English identifiers and what a
//! visitor sees in a URL lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and regions
//! - `locale`: Validated `Locale` handle onto the registry
//! - `table`: Bidirectional translation table shared by every namespace
//! - `categories`: Content category table and the forbidden listing noun
//! - `routes`: Named application route table (legal, auth, account pages)
//! - `detect`: `Accept-Language` negotiation
//! - `lint`: Consistency checks over the static tables
//! - `metrics`: Lookup and redirect counters
//!
//! # Example
//!
//! ```rust
//! use lingua_press::i18n::{translate_category_to_locale, translate_category_to_english, Locale};
//!
//! let french = Locale::from_code("fr").unwrap();
//! assert_eq!(translate_category_to_locale("health", french), "sante");
//! assert_eq!(translate_category_to_english("sante"), "health");
//! ```

mod categories;
mod detect;
mod lint;
mod locale;
mod metrics;
mod registry;
mod routes;
mod table;

pub use categories::{
    categories, is_known_category, is_listing_noun, listing_nouns, translate_category_to_english,
    translate_category_to_locale,
};
pub use detect::{
    detect_from_parts, detect_user_language, parse_accept_language, LanguagePreference,
    DEFAULT_REGIONAL_LOCALE, GEO_COUNTRY_HEADER,
};
pub use lint::{LintReport, TableLint};
pub use locale::Locale;
pub use metrics::{MetricsReport, RoutingMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use routes::{is_known_route, routes, translate_route_to_english, translate_route_to_locale};
pub use table::{TranslationEntry, TranslationTable};

/// Lint every static table.
pub fn lint_all() -> LintReport {
    let mut report = TableLint::check(categories(), true);
    report.merge(TableLint::check(routes(), true));
    report.merge(TableLint::check(listing_nouns(), false));
    report
}
