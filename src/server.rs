use crate::canonical::{AlternateLink, CanonicalUrls, UrlValidation};
use crate::config::Config;
use crate::email_links::{EmailLinks, RequestContext};
use crate::error::RoutingError;
use crate::i18n::{self, Locale, MetricsReport, RoutingMetrics, TranslationTable};
use crate::listing::{self, ListingDecision, ListingKind};
use crate::pagination::compute_window;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub canonical: Arc<CanonicalUrls>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let canonical = CanonicalUrls::new(&config);
        Self {
            config: Arc::new(config),
            canonical: Arc::new(canonical),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/locale", get(detect_locale))
        .route("/api/translate/:namespace/:id", get(translate))
        .route("/api/canonical", get(canonical_url))
        .route("/api/canonical/validate", post(validate_canonical))
        .route("/api/canonical/normalize", post(normalize_canonical))
        .route("/api/alternates", get(alternates))
        .route("/api/email-link", post(email_link))
        .route("/api/listing", get(listing_window))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics() -> Json<MetricsReport> {
    Json(RoutingMetrics::global().report())
}

// ==================== Locale ====================

#[derive(Debug, Serialize)]
struct LocaleResponse {
    locale: &'static str,
    language: Locale,
    name: &'static str,
    direction: &'static str,
}

async fn detect_locale(headers: HeaderMap) -> Json<LocaleResponse> {
    let detected = i18n::detect_user_language(&headers);
    let language = Locale::resolve(detected);
    Json(LocaleResponse {
        locale: detected,
        language,
        name: language.native_name(),
        direction: if language.is_rtl() { "rtl" } else { "ltr" },
    })
}

// ==================== Translation ====================

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslateResponse {
    canonical: String,
    localized: String,
    locale: Locale,
    known: bool,
}

fn namespace_table(namespace: &str) -> Result<&'static TranslationTable, RoutingError> {
    match namespace {
        "categories" => Ok(i18n::categories()),
        "routes" => Ok(i18n::routes()),
        other => Err(RoutingError::UnknownNamespace(other.to_string())),
    }
}

/// Accepts either a canonical or a localized identifier.
async fn translate(
    Path((namespace, id)): Path<(String, String)>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<TranslateResponse>, RoutingError> {
    let table = namespace_table(&namespace)?;
    let locale = Locale::resolve(query.locale.as_deref().unwrap_or_default());

    let canonical = table.translate_to_english(&id);
    let localized = table.translate_to_locale(&canonical, locale);

    Ok(Json(TranslateResponse {
        known: table.is_known_canonical(&canonical),
        canonical,
        localized,
        locale,
    }))
}

// ==================== Canonical URLs ====================

#[derive(Debug, Deserialize)]
struct CanonicalQuery {
    category: Option<String>,
    slug: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UrlResponse {
    url: String,
}

async fn canonical_url(
    State(state): State<AppState>,
    Query(query): Query<CanonicalQuery>,
) -> Result<Json<UrlResponse>, RoutingError> {
    let locale = Locale::resolve(query.locale.as_deref().unwrap_or_default());
    let url = state.canonical.generate(
        query.category.as_deref().unwrap_or_default(),
        query.slug.as_deref().unwrap_or_default(),
        locale,
    )?;
    Ok(Json(UrlResponse { url }))
}

#[derive(Debug, Deserialize)]
struct CanonicalCheckRequest {
    url: Option<String>,
    category: String,
    slug: String,
    #[serde(default)]
    locale: String,
}

async fn validate_canonical(
    State(state): State<AppState>,
    Json(request): Json<CanonicalCheckRequest>,
) -> Json<UrlValidation> {
    let locale = Locale::resolve(&request.locale);
    Json(state.canonical.validate(
        request.url.as_deref().unwrap_or_default(),
        &request.category,
        &request.slug,
        locale,
    ))
}

async fn normalize_canonical(
    State(state): State<AppState>,
    Json(request): Json<CanonicalCheckRequest>,
) -> Result<Json<UrlResponse>, RoutingError> {
    let locale = Locale::resolve(&request.locale);
    let url = state.canonical.normalize(
        request.url.as_deref(),
        &request.category,
        &request.slug,
        locale,
    )?;
    Ok(Json(UrlResponse { url }))
}

async fn alternates(
    State(state): State<AppState>,
    Query(query): Query<CanonicalQuery>,
) -> Result<Json<Vec<AlternateLink>>, RoutingError> {
    let links = state.canonical.alternates(
        query.category.as_deref().unwrap_or_default(),
        query.slug.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(links))
}

// ==================== Email links ====================

#[derive(Debug, Deserialize)]
struct EmailLinkRequest {
    route: String,
    #[serde(default)]
    params: BTreeMap<String, String>,
    #[serde(default)]
    locale: String,
    base_url: Option<String>,
}

async fn email_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<EmailLinkRequest>,
) -> Json<UrlResponse> {
    let context = RequestContext::from_headers(&headers);
    let links = EmailLinks::new(&state.config, Some(&context));

    let params: Vec<(&str, &str)> = request
        .params
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let url = links.link(
        &request.route,
        &params,
        Locale::resolve(&request.locale),
        request.base_url.as_deref(),
    );
    Json(UrlResponse { url })
}

// ==================== Listings ====================

#[derive(Debug, Deserialize)]
struct ListingQuery {
    kind: String,
    category: Option<String>,
    q: Option<String>,
    locale: Option<String>,
    page: Option<String>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    excluded: u64,
    page_size: Option<u32>,
}

async fn listing_window(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingDecision>, RoutingError> {
    let kind = match query.kind.as_str() {
        "category" => {
            let category = query
                .category
                .filter(|c| !c.trim().is_empty())
                .ok_or(RoutingError::Validation("category"))?;
            ListingKind::Category(i18n::translate_category_to_english(&category))
        }
        "search" => ListingKind::Search(query.q.unwrap_or_default()),
        "favorites" => ListingKind::Favorites,
        other => return Err(RoutingError::UnknownListingKind(other.to_string())),
    };

    let locale = Locale::resolve(query.locale.as_deref().unwrap_or_default());
    let window = compute_window(
        query.page.as_deref(),
        query.total,
        query.page_size.unwrap_or(state.config.page_size),
        query.excluded,
    );

    Ok(Json(listing::decide(&kind, window, locale)))
}
