//! Canonical URL generation, validation and repair.
//!
//! A canonical URL has the shape `{base}[/{locale}]/{category}/{slug}` where
//! the locale segment is omitted for the default locale and the category is
//! always the locale's translation. The generic listing noun ("articles" and
//! its translations) is never a valid path segment.

use crate::config::Config;
use crate::error::RoutingError;
use crate::i18n::{is_listing_noun, translate_category_to_locale, Locale, RoutingMetrics};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Why a URL is not the canonical URL it was expected to be.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlIssue {
    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Host '{found}' does not belong to {expected}")]
    ForeignHost { expected: String, found: String },

    #[error("URL path contains forbidden segment '{0}'")]
    ForbiddenSegment(String),

    #[error("Path prefix mismatch: expected '{expected}', found '{found}'")]
    PathPrefixMismatch { expected: String, found: String },

    #[error("Expected {expected} path segments, found {found}")]
    SegmentCount { expected: usize, found: usize },

    #[error("Locale mismatch: expected '{expected}', found '{found}'")]
    LocaleMismatch { expected: String, found: String },

    #[error("Category mismatch: expected '{expected}', found '{found}'")]
    CategoryMismatch { expected: String, found: String },

    #[error("Slug mismatch: expected '{expected}', found '{found}'")]
    SlugMismatch { expected: String, found: String },
}

/// Result of checking a URL against the expected canonical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidation {
    Valid,
    Invalid(UrlIssue),
}

impl UrlValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, UrlValidation::Valid)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            UrlValidation::Valid => None,
            UrlValidation::Invalid(issue) => Some(issue.to_string()),
        }
    }
}

impl Serialize for UrlValidation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("UrlValidation", 2)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

/// One `hreflang` alternate for a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Canonical URL builder bound to one site origin.
#[derive(Debug, Clone)]
pub struct CanonicalUrls {
    base_url: String,
    base_domain: String,
}

impl CanonicalUrls {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_domain: config.base_domain.to_ascii_lowercase(),
        }
    }

    /// Build from an explicit origin, deriving the domain from its host.
    pub fn from_base_url(base_url: &str) -> Result<Self, RoutingError> {
        let parsed = Url::parse(base_url).map_err(|e| RoutingError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| RoutingError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "missing host".to_string(),
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            base_domain: host.trim_start_matches("www.").to_ascii_lowercase(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Expected path segments for a content item, before encoding.
    fn expected_segments(category: &str, slug: &str, locale: Locale) -> Vec<String> {
        let mut segments = Vec::with_capacity(3);
        if !locale.is_default() {
            segments.push(locale.code().to_string());
        }
        segments.push(translate_category_to_locale(category, locale));
        segments.push(slug.to_string());
        segments
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    ///
    /// A `/` inside a segment is encoded, so a slug is always one segment.
    fn content_url(&self, segments: &[String]) -> Result<Url, RoutingError> {
        let invalid = |reason: String| RoutingError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Generate the canonical URL for a content item.
    pub fn generate(
        &self,
        category: &str,
        slug: &str,
        locale: Locale,
    ) -> Result<String, RoutingError> {
        let category = category.trim();
        let slug = slug.trim();
        if category.is_empty() {
            return Err(RoutingError::Validation("category"));
        }
        if slug.is_empty() || slug == "." || slug == ".." {
            return Err(RoutingError::Validation("slug"));
        }

        let segments = Self::expected_segments(category, slug, locale);
        Ok(self.content_url(&segments)?.to_string())
    }

    /// Check a URL against the canonical URL expected for a content item.
    ///
    /// Never fails; every problem is reported through [`UrlValidation`].
    pub fn validate(&self, url: &str, category: &str, slug: &str, locale: Locale) -> UrlValidation {
        match self.check(url, category.trim(), slug.trim(), locale) {
            Ok(()) => UrlValidation::Valid,
            Err(issue) => UrlValidation::Invalid(issue),
        }
    }

    /// The host is the base domain itself or one of its subdomains.
    fn is_own_host(&self, host: &str) -> bool {
        host == self.base_domain
            || host
                .strip_suffix(self.base_domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    fn check(&self, url: &str, category: &str, slug: &str, locale: Locale) -> Result<(), UrlIssue> {
        let parsed = Url::parse(url).map_err(|e| UrlIssue::Malformed(e.to_string()))?;

        let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
        if !self.is_own_host(&host) {
            return Err(UrlIssue::ForeignHost {
                expected: self.base_domain.clone(),
                found: host,
            });
        }

        // Both sides are compared in their percent-encoded form
        let found = path_of(&parsed);

        if let Some(noun) = found.iter().find(|segment| is_listing_noun(segment)) {
            return Err(UrlIssue::ForbiddenSegment(noun.to_string()));
        }

        let raw = Self::expected_segments(category, slug, locale);
        let expected = self
            .content_url(&raw)
            .map(|url| path_of(&url))
            .map_err(|e| UrlIssue::Malformed(e.to_string()))?;
        if found.len() != expected.len() {
            return Err(UrlIssue::SegmentCount {
                expected: expected.len(),
                found: found.len(),
            });
        }

        let prefix = expected.len().saturating_sub(raw.len());
        let mut pairs = expected.iter().zip(found.iter());
        for (expected, found) in pairs.by_ref().take(prefix) {
            if expected != found {
                return Err(UrlIssue::PathPrefixMismatch {
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }
        if !locale.is_default() {
            if let Some((expected, found)) = pairs.next() {
                if expected != found {
                    return Err(UrlIssue::LocaleMismatch {
                        expected: expected.clone(),
                        found: found.clone(),
                    });
                }
            }
        }
        if let Some((expected, found)) = pairs.next() {
            if expected != found {
                return Err(UrlIssue::CategoryMismatch {
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }
        if let Some((expected, found)) = pairs.next() {
            if expected != found {
                return Err(UrlIssue::SlugMismatch {
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }

        Ok(())
    }

    /// Return `url` if it is the correct canonical URL, otherwise a freshly
    /// generated one.
    ///
    /// A bad stored URL is logged and replaced, never surfaced. The only
    /// error is an empty category or slug.
    pub fn normalize(
        &self,
        url: Option<&str>,
        category: &str,
        slug: &str,
        locale: Locale,
    ) -> Result<String, RoutingError> {
        let generated = self.generate(category, slug, locale)?;

        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(generated);
        };

        match self.validate(url, category, slug, locale) {
            UrlValidation::Valid => Ok(url.to_string()),
            UrlValidation::Invalid(issue) => {
                warn!(
                    "Replacing invalid canonical URL '{}' for {}/{} ({}): {}",
                    url, category, slug, locale, issue
                );
                RoutingMetrics::global().record_canonical_repair();
                Ok(generated)
            }
        }
    }

    /// `hreflang` alternates for every enabled locale plus `x-default`.
    pub fn alternates(&self, category: &str, slug: &str) -> Result<Vec<AlternateLink>, RoutingError> {
        let mut links = Vec::new();
        for locale in Locale::all_enabled() {
            links.push(AlternateLink {
                hreflang: locale.hreflang().to_string(),
                href: self.generate(category, slug, locale)?,
            });
        }

        links.push(AlternateLink {
            hreflang: "x-default".to_string(),
            href: self.generate(category, slug, Locale::DEFAULT)?,
        });
        Ok(links)
    }
}

/// Non-empty path segments of a parsed URL, still percent-encoded.
fn path_of(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
