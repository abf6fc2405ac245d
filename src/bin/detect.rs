//! Detect binary - shows which locale a visitor would be routed to
//!
//! Usage:
//!   cargo run --bin detect -- "pt-PT,pt;q=0.9,en;q=0.8"
//!   cargo run --bin detect -- "fr-CA,fr;q=0.9" CA

use anyhow::{bail, Result};
use lingua_press::i18n::{detect_from_parts, parse_accept_language, Locale};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(accept_language) = args.first() else {
        bail!("Usage: detect <accept-language> [country]");
    };
    let country = args.get(1).map(String::as_str);

    println!("Preferences:");
    for preference in parse_accept_language(accept_language) {
        println!("  {:<12} q={:.2}", preference.tag, preference.quality);
    }

    let detected = detect_from_parts(Some(accept_language), country);
    let locale = Locale::resolve(detected);
    println!();
    println!(
        "Detected: {} {} (URL prefix: {})",
        detected,
        locale.name(),
        if locale.is_default() {
            "none".to_string()
        } else {
            format!("/{}", locale)
        }
    );

    Ok(())
}
