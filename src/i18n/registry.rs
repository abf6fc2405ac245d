//! Locale registry: Single source of truth for all routing locales.
//!
//! The registry is built once behind a `OnceLock` and never mutated. Every
//! locale that can appear in a URL prefix, a translation table or a detected
//! `Accept-Language` result must be listed here.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code used as the URL prefix (e.g., "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the default locale (served without a URL prefix)
    pub is_default: bool,

    /// Whether this locale is enabled for routing
    pub enabled: bool,

    /// Right-to-left script
    pub rtl: bool,

    /// Supported region-qualified locales. The first one is the default
    /// region for the language.
    pub regions: &'static [&'static str],
}

impl LocaleConfig {
    /// Default region-qualified locale for this language (e.g., "pt-BR").
    pub fn default_region(&self) -> &'static str {
        self.regions.first().copied().unwrap_or(self.code)
    }

    /// Check if a region-qualified locale is supported for this language.
    ///
    /// Comparison ignores case and accepts `_` as a separator.
    pub fn find_region(&self, regional: &str) -> Option<&'static str> {
        let wanted = regional.replace('_', "-");
        self.regions
            .iter()
            .copied()
            .find(|region| region.eq_ignore_ascii_case(&wanted))
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its bare language code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
            rtl: false,
            regions: &["en-US", "en-GB", "en-CA", "en-AU"],
        },
        LocaleConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["pt-BR", "pt-PT"],
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["es-ES", "es-MX", "es-AR"],
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["fr-FR", "fr-CA", "fr-BE"],
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["de-DE", "de-AT", "de-CH"],
        },
        LocaleConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["it-IT"],
        },
        LocaleConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["nl-NL", "nl-BE"],
        },
        LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            is_default: false,
            enabled: true,
            rtl: true,
            regions: &["he-IL"],
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
            enabled: true,
            rtl: false,
            regions: &["ru-RU"],
        },
    ]
}
