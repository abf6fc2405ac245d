//! Routes binary - previews the URLs generated for one piece of content
//!
//! Usage:
//!   cargo run --bin routes -- <category> <slug> [locale]
//!   cargo run --bin routes -- health sleep-cycles fr
//!   cargo run --bin routes -- --lint            # Only print the table lint report
//!   cargo run --bin routes -- health x --json   # Machine-readable output
//!
//! Optional environment variables:
//! - SITE_BASE_URL (defaults to the production origin)
//! - BASE_DOMAIN (defaults to the host of SITE_BASE_URL)

use anyhow::{bail, Result};
use lingua_press::canonical::{AlternateLink, CanonicalUrls};
use lingua_press::config::Config;
use lingua_press::i18n::{self, LintReport, Locale};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct Preview {
    category: String,
    slug: String,
    locale: Locale,
    canonical: String,
    alternates: Vec<AlternateLink>,
    lint: LintReport,
}

fn print_lint(report: &LintReport) {
    if report.is_clean() {
        println!("✓ Translation tables are clean");
        return;
    }
    for error in &report.errors {
        println!("❌ {}", error);
    }
    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingua_press=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let lint_only = args.iter().any(|arg| arg == "--lint");
    let positional: Vec<&str> = args
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .collect();

    let lint = i18n::lint_all();
    if lint_only {
        print_lint(&lint);
        if lint.has_errors() {
            bail!("{} translation table errors", lint.errors.len());
        }
        return Ok(());
    }

    let (category, slug, locale) = match positional.as_slice() {
        [category, slug] => (*category, *slug, Locale::DEFAULT),
        [category, slug, locale] => (*category, *slug, Locale::from_code(locale)?),
        _ => bail!("Usage: routes <category> <slug> [locale] [--json] [--lint]"),
    };

    let config = Config::from_env()?;
    let urls = CanonicalUrls::new(&config);
    info!("Using base URL {}", urls.base_url());

    let canonical_category = i18n::translate_category_to_english(category);
    if !i18n::is_known_category(&canonical_category) {
        info!("'{}' is not a known category, it will pass through untranslated", category);
    }

    let preview = Preview {
        canonical: urls.generate(&canonical_category, slug, locale)?,
        alternates: urls.alternates(&canonical_category, slug)?,
        category: canonical_category,
        slug: slug.to_string(),
        locale,
        lint,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!();
    println!("Category:  {} ({})", preview.category, preview.locale.native_name());
    println!("Slug:      {}", preview.slug);
    println!("Canonical: {}", preview.canonical);
    println!();
    println!("--- hreflang alternates ---");
    for link in &preview.alternates {
        println!("  {:<10} {}", link.hreflang, link.href);
    }
    println!();
    print_lint(&preview.lint);
    println!();

    Ok(())
}
