//! Translation table lint.
//!
//! Checks that every form is usable as a URL path segment, that locales
//! exist in the registry and that reverse lookups are unambiguous.

use crate::i18n::{listing_nouns, Locale, LocaleRegistry, TranslationTable};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lint report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LintReport {
    /// Problems that break routing (bad slugs, unknown locales, collisions)
    pub errors: Vec<String>,

    /// Gaps that degrade gracefully (English fallbacks)
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings.
    pub fn merge(&mut self, other: LintReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for LintReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TableLint;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

impl TableLint {
    /// Lint one translation table.
    ///
    /// `forbid_listing_nouns` should be false only for the listing noun table
    /// itself.
    pub fn check(table: &TranslationTable, forbid_listing_nouns: bool) -> LintReport {
        let mut report = LintReport::new();
        let registry = LocaleRegistry::get();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for entry in table.entries() {
            if !Self::is_slug(entry.canonical) {
                report.errors.push(format!(
                    "[{}] canonical '{}' is not a lowercase hyphenated slug",
                    table.name(),
                    entry.canonical
                ));
            }

            for (code, form) in entry.forms {
                if registry.get_by_code(code).is_none() {
                    report.errors.push(format!(
                        "[{}] '{}' has a form for unknown locale '{}'",
                        table.name(),
                        entry.canonical,
                        code
                    ));
                }
                if !Self::is_slug(form) {
                    report.errors.push(format!(
                        "[{}] '{}' form '{}' ({}) is not a lowercase hyphenated slug",
                        table.name(),
                        entry.canonical,
                        form,
                        code
                    ));
                }
            }

            let forms = std::iter::once(entry.canonical)
                .chain(entry.forms.iter().map(|(_, form)| *form));
            for form in forms {
                match owners.get(form).copied() {
                    Some(owner) if owner != entry.canonical => {
                        report.errors.push(format!(
                            "[{}] '{}' is used by both '{}' and '{}'",
                            table.name(),
                            form,
                            owner,
                            entry.canonical
                        ));
                    }
                    _ => {
                        owners.entry(form).or_insert(entry.canonical);
                    }
                }

                if forbid_listing_nouns
                    && listing_nouns().all_forms().any(|noun| noun == form)
                {
                    report.warnings.push(format!(
                        "[{}] '{}' form '{}' is a listing noun and will fail canonical validation",
                        table.name(),
                        entry.canonical,
                        form
                    ));
                }
            }

            for locale in Locale::all_enabled() {
                if entry.form(locale.code()).is_none() {
                    report.warnings.push(format!(
                        "[{}] '{}' has no {} form, English will be used",
                        table.name(),
                        entry.canonical,
                        locale
                    ));
                }
            }
        }

        report
    }

    fn is_slug(value: &str) -> bool {
        let regex =
            SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
        regex.is_match(value)
    }
}
