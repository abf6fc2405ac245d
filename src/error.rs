use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the routing core.
///
/// Lookup misses and invalid stored URLs are not errors here: they degrade to
/// passthrough or regenerated values. Only programming/data errors surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Validation error: {0} is required")]
    Validation(&'static str),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Ambiguous translation in '{table}' table: '{form}' maps to both '{first}' and '{second}'")]
    AmbiguousTranslation {
        table: &'static str,
        form: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Unknown translation namespace: '{0}'")]
    UnknownNamespace(String),

    #[error("Unknown listing kind '{0}': expected category, search or favorites")]
    UnknownListingKind(String),
}

impl IntoResponse for RoutingError {
    fn into_response(self) -> Response {
        let status = match self {
            RoutingError::Validation(_) | RoutingError::UnknownListingKind(_) => {
                StatusCode::BAD_REQUEST
            }
            RoutingError::UnknownNamespace(_) => StatusCode::NOT_FOUND,
            RoutingError::InvalidBaseUrl { .. } | RoutingError::AmbiguousTranslation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = RoutingError::Validation("slug");
        assert_eq!(err.to_string(), "Validation error: slug is required");
    }

    #[test]
    fn test_ambiguous_translation_message() {
        let err = RoutingError::AmbiguousTranslation {
            table: "categories",
            form: "sport".to_string(),
            first: "sports",
            second: "fitness",
        };
        let message = err.to_string();
        assert!(message.contains("categories"));
        assert!(message.contains("'sport'"));
        assert!(message.contains("sports"));
        assert!(message.contains("fitness"));
    }

    #[test]
    fn test_unknown_listing_kind_message() {
        let err = RoutingError::UnknownListingKind("tags".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown listing kind 'tags': expected category, search or favorites"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RoutingError::Validation("category").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RoutingError::UnknownNamespace("pages".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RoutingError::InvalidBaseUrl {
                url: "nope".to_string(),
                reason: "relative URL without a base".to_string(),
            }
            .into_response()
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
