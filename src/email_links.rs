//! Absolute links for transactional email.
//!
//! Emails are rendered both inside request handlers and from background
//! work, so the request host is an optional input rather than something
//! read from ambient state.

use crate::config::{Config, DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL};
use crate::i18n::{translate_route_to_locale, Locale};
use axum::http::HeaderMap;
use tracing::debug;
use url::form_urlencoded;

/// Request-derived origin information, when a request is in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub host: Option<String>,
    pub forwarded_proto: Option<String>,
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            host: read("host"),
            // Proxies may append their own hop: keep the client-facing one
            forwarded_proto: read("x-forwarded-proto")
                .and_then(|value| value.split(',').next().map(|p| p.trim().to_string())),
        }
    }

    /// Origin built from the request, if it carried a host.
    pub fn origin(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let scheme = match self.forwarded_proto.as_deref() {
            Some(proto) => proto.to_string(),
            None if is_local_host(host) => "http".to_string(),
            None => "https".to_string(),
        };
        Some(format!("{}://{}", scheme, host))
    }
}

fn is_local_host(host: &str) -> bool {
    let name = host.split(':').next().unwrap_or(host);
    name == "localhost" || name == "127.0.0.1"
}

/// Prepend `https://` to bare hosts such as platform deployment URLs.
fn with_scheme(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

/// Link builder for one email render.
pub struct EmailLinks<'a> {
    config: &'a Config,
    request: Option<&'a RequestContext>,
}

impl<'a> EmailLinks<'a> {
    pub fn new(config: &'a Config, request: Option<&'a RequestContext>) -> Self {
        Self { config, request }
    }

    /// Resolve the origin for links, in fixed priority order.
    ///
    /// Always returns a usable origin; the production URL is the last resort.
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        fn non_empty(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let (source, base) = if let Some(explicit) = non_empty(explicit) {
            ("explicit", explicit.to_string())
        } else if self.config.environment.is_development() {
            ("development", DEVELOPMENT_BASE_URL.to_string())
        } else if let Some(origin) = self.request.and_then(RequestContext::origin) {
            ("request", origin)
        } else if let Some(url) = non_empty(self.config.deployment_url.as_deref()) {
            ("DEPLOYMENT_URL", with_scheme(url))
        } else if let Some(url) = non_empty(self.config.app_base_url.as_deref()) {
            ("APP_BASE_URL", with_scheme(url))
        } else if let Some(url) = non_empty(self.config.public_site_url.as_deref()) {
            ("PUBLIC_SITE_URL", with_scheme(url))
        } else {
            ("production", PRODUCTION_BASE_URL.to_string())
        };

        debug!("Email base URL from {}: {}", source, base);
        base.trim_end_matches('/').to_string()
    }

    /// Build `{base}/{locale}/{translated route}[?{query}]`.
    ///
    /// Email links always carry the locale prefix, including for the default
    /// locale.
    pub fn link(
        &self,
        route: &str,
        params: &[(&str, &str)],
        locale: Locale,
        explicit_base: Option<&str>,
    ) -> String {
        let base = self.resolve_base_url(explicit_base);
        let route = translate_route_to_locale(route.trim_matches('/'), locale);

        let mut link = format!("{}/{}/{}", base, locale.code(), route);
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter().copied())
                .finish();
            link.push('?');
            link.push_str(&query);
        }
        link
    }
}
