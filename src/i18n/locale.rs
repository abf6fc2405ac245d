//! Locale type: validated routing locale.
//!
//! A `Locale` can only be constructed for codes present in the registry, so
//! every downstream lookup can rely on the registry entry existing.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated routing locale (bare language code such as "en" or "fr").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// The default locale. URLs in this locale carry no locale prefix.
    pub const DEFAULT: Locale = Locale { code: "en" };

    /// Create a Locale from a language code.
    ///
    /// A region subtag is accepted and ignored (`"pt-BR"` gives `pt`).
    ///
    /// # Returns
    /// * `Err` if the code is not in the registry or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let language = bare_language(code);
        let registry = LocaleRegistry::get();

        match registry.get_by_code(&language) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Resolve any locale string, falling back to the default locale for
    /// unknown, disabled or empty codes.
    pub fn resolve(code: &str) -> Locale {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// Get the bare language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Locale` built through `from_code` or `DEFAULT`.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default (unprefixed) locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Text direction is right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// Default region-qualified locale, e.g. "pt-BR" for `pt`.
    pub fn default_region(&self) -> &'static str {
        self.config().default_region()
    }

    /// Tag used in `hreflang` alternate links.
    pub fn hreflang(&self) -> &'static str {
        self.code
    }

    /// All enabled locales, in registry order.
    pub fn all_enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Lowercase a locale tag and strip any region/script subtags.
pub(crate) fn bare_language(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_default_constant() {
        let default = Locale::DEFAULT;
        assert_eq!(default.code(), "en");
        assert_eq!(default.name(), "English");
        assert!(default.is_default());
        assert_eq!(Locale::default(), Locale::DEFAULT);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_known() {
        let locale = Locale::from_code("fr").expect("Should succeed");
        assert_eq!(locale.code(), "fr");
        assert_eq!(locale.name(), "French");
        assert!(!locale.is_default());
    }

    #[test]
    fn test_from_code_strips_region() {
        assert_eq!(Locale::from_code("pt-BR").unwrap().code(), "pt");
        assert_eq!(Locale::from_code("en_GB").unwrap().code(), "en");
        assert_eq!(Locale::from_code("DE").unwrap().code(), "de");
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Locale::from_code("ja");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve("ja"), Locale::DEFAULT);
        assert_eq!(Locale::resolve(""), Locale::DEFAULT);
        assert_eq!(Locale::resolve("  "), Locale::DEFAULT);
    }

    #[test]
    fn test_resolve_known() {
        assert_eq!(Locale::resolve("he-IL").code(), "he");
        assert_eq!(Locale::resolve("Ru").code(), "ru");
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_default_region_and_hreflang() {
        let pt = Locale::from_code("pt").unwrap();
        assert_eq!(pt.default_region(), "pt-BR");
        assert_eq!(pt.hreflang(), "pt");
        assert_eq!(pt.native_name(), "Português");
    }

    #[test]
    fn test_is_rtl() {
        assert!(Locale::from_code("he").unwrap().is_rtl());
        assert!(!Locale::from_code("ru").unwrap().is_rtl());
    }

    #[test]
    fn test_all_enabled_starts_with_default() {
        let all = Locale::all_enabled();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Locale::DEFAULT);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_and_serialize() {
        let es = Locale::from_code("es").unwrap();
        assert_eq!(es.to_string(), "es");
        assert_eq!(serde_json::to_string(&es).unwrap(), "\"es\"");
    }

    #[test]
    fn test_bare_language() {
        assert_eq!(bare_language("en-US"), "en");
        assert_eq!(bare_language(" PT_br "), "pt");
        assert_eq!(bare_language("zh-Hans-CN"), "zh");
        assert_eq!(bare_language(""), "");
    }
}
