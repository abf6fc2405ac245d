//! Bidirectional translation tables.
//!
//! One implementation serves every namespace (categories, routes, listing
//! nouns). Tables are built once from static entries; the reverse direction
//! goes through an inverse index computed at construction instead of a scan.

use crate::error::RoutingError;
use crate::i18n::{Locale, RoutingMetrics};
use std::collections::HashMap;
use tracing::error;

/// One canonical identifier and its per-locale forms.
///
/// The default-locale form is implicit: it is always `canonical` itself.
#[derive(Debug, Clone, Copy)]
pub struct TranslationEntry {
    pub canonical: &'static str,
    pub forms: &'static [(&'static str, &'static str)],
}

impl TranslationEntry {
    /// Form for a locale code, if this entry defines one.
    pub fn form(&self, locale: &str) -> Option<&'static str> {
        if locale == Locale::DEFAULT.code() {
            return Some(self.canonical);
        }
        self.forms
            .iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, form)| *form)
    }
}

/// Immutable translation table for one namespace.
#[derive(Debug)]
pub struct TranslationTable {
    name: &'static str,
    entries: &'static [TranslationEntry],
    by_canonical: HashMap<&'static str, usize>,
    by_form: HashMap<&'static str, &'static str>,
}

impl TranslationTable {
    /// Build a table, rejecting any form that maps to two canonical keys.
    pub fn build(
        name: &'static str,
        entries: &'static [TranslationEntry],
    ) -> Result<Self, RoutingError> {
        let (table, conflicts) = Self::assemble(name, entries);
        match conflicts.into_iter().next() {
            Some(conflict) => Err(conflict),
            None => Ok(table),
        }
    }

    /// Build a table, keeping the first mapping for any ambiguous form.
    ///
    /// Conflicts are logged. Used for the process-wide static tables, whose
    /// consistency is covered by tests, so lookups stay total at runtime.
    pub fn build_lenient(name: &'static str, entries: &'static [TranslationEntry]) -> Self {
        let (table, conflicts) = Self::assemble(name, entries);
        for conflict in conflicts {
            error!("{}", conflict);
        }
        table
    }

    fn assemble(
        name: &'static str,
        entries: &'static [TranslationEntry],
    ) -> (Self, Vec<RoutingError>) {
        let mut by_canonical = HashMap::with_capacity(entries.len());
        let mut by_form: HashMap<&'static str, &'static str> = HashMap::new();
        let mut conflicts = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            by_canonical.entry(entry.canonical).or_insert(index);

            let forms = std::iter::once(entry.canonical)
                .chain(entry.forms.iter().map(|(_, form)| *form));

            for form in forms {
                match by_form.get(form).copied() {
                    Some(existing) if existing != entry.canonical => {
                        conflicts.push(RoutingError::AmbiguousTranslation {
                            table: name,
                            form: form.to_string(),
                            first: existing,
                            second: entry.canonical,
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_form.insert(form, entry.canonical);
                    }
                }
            }
        }

        let table = Self {
            name,
            entries,
            by_canonical,
            by_form,
        };
        (table, conflicts)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [TranslationEntry] {
        self.entries
    }

    /// Canonical identifiers, in table order.
    pub fn canonicals(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.canonical)
    }

    fn entry(&self, canonical: &str) -> Option<&'static TranslationEntry> {
        self.by_canonical
            .get(canonical)
            .map(|index| &self.entries[*index])
    }

    /// Translate a canonical identifier into `locale`.
    ///
    /// Never fails: the default locale, unknown keys and missing locale
    /// forms all return the input unchanged.
    pub fn translate_to_locale(&self, canonical: &str, locale: Locale) -> String {
        if locale.is_default() {
            return canonical.to_string();
        }

        let normalized = canonical.trim().to_lowercase();
        match self
            .entry(&normalized)
            .and_then(|entry| entry.form(locale.code()))
        {
            Some(form) => {
                RoutingMetrics::global().record_translation();
                form.to_string()
            }
            None => {
                RoutingMetrics::global().record_passthrough();
                canonical.to_string()
            }
        }
    }

    /// Translate a localized form (in any locale) back to its canonical key.
    ///
    /// Matching is case-insensitive. Unknown input is returned unchanged.
    pub fn translate_to_english(&self, localized: &str) -> String {
        let normalized = localized.trim().to_lowercase();

        if self.by_canonical.contains_key(normalized.as_str()) {
            return normalized;
        }

        match self.by_form.get(normalized.as_str()) {
            Some(canonical) => {
                RoutingMetrics::global().record_translation();
                canonical.to_string()
            }
            None => {
                RoutingMetrics::global().record_passthrough();
                localized.to_string()
            }
        }
    }

    pub fn is_known_canonical(&self, id: &str) -> bool {
        self.by_canonical.contains_key(id)
    }

    /// Every form defined for a locale, including fallbacks to the canonical
    /// key where the locale has no entry.
    pub fn localized_forms(&self, locale: Locale) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.form(locale.code()).unwrap_or(entry.canonical))
            .collect()
    }

    /// Every distinct string this table recognizes, in any locale.
    pub fn all_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_form.keys().copied()
    }
}
