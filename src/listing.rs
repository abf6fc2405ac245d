//! Listing pages (category, search, favorites) and the page-1 redirect rule.
//!
//! Every listing consumer goes through [`decide`]: a page past the end of a
//! non-empty listing is never rendered empty, it redirects to page 1 of the
//! same listing.

use crate::i18n::{translate_category_to_locale, translate_route_to_locale, Locale, RoutingMetrics};
use crate::pagination::PaginationWindow;
use serde::Serialize;
use tracing::info;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKind {
    Category(String),
    Search(String),
    Favorites,
}

impl ListingKind {
    /// Locale-correct path of the first page of this listing.
    ///
    /// The default locale has no prefix, matching canonical article URLs.
    pub fn first_page_path(&self, locale: Locale) -> String {
        let prefix = if locale.is_default() {
            String::new()
        } else {
            format!("/{}", locale.code())
        };

        match self {
            ListingKind::Category(category) => {
                format!("{}/{}", prefix, translate_category_to_locale(category, locale))
            }
            ListingKind::Search(query) => {
                let route = translate_route_to_locale("search", locale);
                let mut path = format!("{}/{}", prefix, route);
                if !query.trim().is_empty() {
                    let encoded = form_urlencoded::Serializer::new(String::new())
                        .append_pair("q", query.trim())
                        .finish();
                    path.push('?');
                    path.push_str(&encoded);
                }
                path
            }
            ListingKind::Favorites => {
                format!("{}/{}", prefix, translate_route_to_locale("favorites", locale))
            }
        }
    }
}

/// What the caller should do with a listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ListingDecision {
    Render(PaginationWindow),
    RedirectToFirstPage { location: String },
}

/// Apply the out-of-range redirect rule to a computed window.
pub fn decide(kind: &ListingKind, window: PaginationWindow, locale: Locale) -> ListingDecision {
    if window.needs_redirect() {
        let location = kind.first_page_path(locale);
        info!(
            "Page {} of {} requested for {:?}, redirecting to {}",
            window.current_page, window.total_pages, kind, location
        );
        RoutingMetrics::global().record_listing_redirect();
        ListingDecision::RedirectToFirstPage { location }
    } else {
        ListingDecision::Render(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::compute_window;

    fn locale(code: &str) -> Locale {
        Locale::from_code(code).unwrap()
    }

    // ==================== Path Tests ====================

    #[test]
    fn test_category_first_page_path() {
        let kind = ListingKind::Category("health".to_string());
        assert_eq!(kind.first_page_path(Locale::DEFAULT), "/health");
        assert_eq!(kind.first_page_path(locale("fr")), "/fr/sante");
    }

    #[test]
    fn test_search_first_page_path_keeps_query() {
        let kind = ListingKind::Search("vitamin d".to_string());
        assert_eq!(kind.first_page_path(locale("de")), "/de/suche?q=vitamin+d");

        let empty = ListingKind::Search("  ".to_string());
        assert_eq!(empty.first_page_path(Locale::DEFAULT), "/search");
    }

    #[test]
    fn test_favorites_first_page_path() {
        assert_eq!(ListingKind::Favorites.first_page_path(locale("pt")), "/pt/favoritos");
    }

    // ==================== Decision Tests ====================

    #[test]
    fn test_out_of_range_redirects() {
        let window = compute_window(Some("5"), 25, 10, 10);
        let decision = decide(&ListingKind::Category("health".to_string()), window, locale("es"));
        assert_eq!(
            decision,
            ListingDecision::RedirectToFirstPage {
                location: "/es/salud".to_string()
            }
        );
    }

    #[test]
    fn test_in_range_renders() {
        let window = compute_window(Some("2"), 25, 10, 10);
        let decision = decide(&ListingKind::Favorites, window, Locale::DEFAULT);
        assert_eq!(decision, ListingDecision::Render(window));
    }

    #[test]
    fn test_empty_listing_renders() {
        let window = compute_window(Some("9"), 0, 10, 0);
        let decision = decide(&ListingKind::Search("nothing".to_string()), window, Locale::DEFAULT);
        assert!(matches!(decision, ListingDecision::Render(_)));
    }

    #[test]
    fn test_decision_serialization() {
        let redirect = ListingDecision::RedirectToFirstPage {
            location: "/health".to_string(),
        };
        let json = serde_json::to_value(&redirect).unwrap();
        assert_eq!(json["action"], "redirect_to_first_page");
        assert_eq!(json["location"], "/health");

        let render = ListingDecision::Render(compute_window(Some("1"), 5, 10, 0));
        let json = serde_json::to_value(&render).unwrap();
        assert_eq!(json["action"], "render");
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["total_pages"], 1);
    }
}
