//! Locale detection from request headers.
//!
//! Used when a request has no locale prefix. Detection never fails: anything
//! that cannot be matched to a supported regional locale ends in
//! [`DEFAULT_REGIONAL_LOCALE`].

use crate::i18n::locale::bare_language;
use crate::i18n::LocaleRegistry;
use axum::http::HeaderMap;
use std::cmp::Ordering;
use tracing::debug;

/// Locale returned when nothing else matches.
pub const DEFAULT_REGIONAL_LOCALE: &str = "en-US";

/// Two-letter country code set by the edge proxy.
pub const GEO_COUNTRY_HEADER: &str = "x-geo-country";

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub tag: String,
    pub quality: f32,
}

/// Parse an `Accept-Language` value into preferences sorted by quality.
///
/// Missing or malformed `q` values count as 1.0. Entries with `q=0`, empty
/// tags and the `*` wildcard are dropped. Ties keep header order.
pub fn parse_accept_language(value: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = value
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .filter_map(|param| {
                    let (key, value) = param.split_once('=')?;
                    (key.trim().eq_ignore_ascii_case("q")).then(|| value.trim().parse::<f32>().ok())
                })
                .next()
                .flatten()
                .filter(|q| q.is_finite())
                .map(|q| q.clamp(0.0, 1.0))
                .unwrap_or(1.0);

            (quality > 0.0).then(|| LanguagePreference {
                tag: tag.to_string(),
                quality,
            })
        })
        .collect();

    // sort_by is stable, so equal qualities keep their header order
    preferences.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    preferences
}

/// Pick a supported regional locale from the request headers.
pub fn detect_user_language(headers: &HeaderMap) -> &'static str {
    let accept_language = headers
        .get(axum::http::header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let country = headers
        .get(GEO_COUNTRY_HEADER)
        .and_then(|value| value.to_str().ok());

    detect_from_parts(accept_language, country)
}

/// Header-free core of [`detect_user_language`].
pub fn detect_from_parts(accept_language: Option<&str>, country: Option<&str>) -> &'static str {
    let Some(accept_language) = accept_language else {
        return DEFAULT_REGIONAL_LOCALE;
    };

    let country = country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_ascii_uppercase);
    let registry = LocaleRegistry::get();

    for preference in parse_accept_language(accept_language) {
        let language = bare_language(&preference.tag);
        let Some(config) = registry.get_by_code(&language).filter(|c| c.enabled) else {
            continue;
        };

        if let Some(country) = &country {
            if let Some(regional) = config.find_region(&format!("{}-{}", language, country)) {
                debug!(
                    "Detected {} from '{}' and country {}",
                    regional, preference.tag, country
                );
                return regional;
            }
        }

        let regional = config.default_region();
        debug!("Detected {} from '{}'", regional, preference.tag);
        return regional;
    }

    DEFAULT_REGIONAL_LOCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_orders_by_quality() {
        let prefs = parse_accept_language("fr;q=0.5, de-DE, en;q=0.8");
        let tags: Vec<_> = prefs.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, vec!["de-DE", "en", "fr"]);
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_parse_ties_keep_header_order() {
        let prefs = parse_accept_language("it, nl, es;q=0.9");
        let tags: Vec<_> = prefs.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, vec!["it", "nl", "es"]);
    }

    #[test]
    fn test_parse_drops_wildcard_zero_and_empty() {
        let prefs = parse_accept_language("*, , ru;q=0, he;q=0.3");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].tag, "he");
    }

    #[test]
    fn test_parse_malformed_quality_defaults_to_one() {
        let prefs = parse_accept_language("pt;q=abc, en;q=0.9");
        assert_eq!(prefs[0].tag, "pt");
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_accept_language("").is_empty());
    }

    // ==================== Detection Tests ====================

    #[test]
    fn test_no_header_returns_default() {
        assert_eq!(detect_user_language(&HeaderMap::new()), "en-US");
        assert_eq!(detect_from_parts(None, Some("BR")), "en-US");
    }

    #[test]
    fn test_language_default_region() {
        assert_eq!(detect_from_parts(Some("pt"), None), "pt-BR");
        assert_eq!(detect_from_parts(Some("de-CH,de;q=0.9"), None), "de-DE");
    }

    #[test]
    fn test_geo_country_composite_preferred() {
        assert_eq!(detect_from_parts(Some("pt"), Some("PT")), "pt-PT");
        assert_eq!(detect_from_parts(Some("fr-FR"), Some("ca")), "fr-CA");
    }

    #[test]
    fn test_unsupported_composite_falls_back_to_language_default() {
        assert_eq!(detect_from_parts(Some("es"), Some("US")), "es-ES");
    }

    #[test]
    fn test_skips_unsupported_languages() {
        assert_eq!(detect_from_parts(Some("ja, zh;q=0.9, nl;q=0.5"), None), "nl-NL");
    }

    #[test]
    fn test_nothing_supported_returns_default() {
        assert_eq!(detect_from_parts(Some("ja, ko"), None), "en-US");
        assert_eq!(detect_from_parts(Some(""), None), "en-US");
    }

    #[test]
    fn test_detect_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "accept-language",
            HeaderValue::from_static("he-IL,he;q=0.9,en;q=0.8"),
        );
        headers.insert(GEO_COUNTRY_HEADER, HeaderValue::from_static("IL"));
        assert_eq!(detect_user_language(&headers), "he-IL");
    }
}
