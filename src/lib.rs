//! Locale-aware routing core for a multilingual publishing site.
//!
//! Translates category and route names between canonical English and each
//! locale, builds and repairs canonical article URLs, composes links for
//! transactional email, negotiates a locale from request headers and shapes
//! listing pages.

pub mod canonical;
pub mod config;
pub mod email_links;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod pagination;
pub mod server;
