//! Named application routes (legal, auth and account pages) per locale.

use crate::i18n::{Locale, TranslationEntry, TranslationTable};
use std::sync::OnceLock;

static ROUTE_ENTRIES: &[TranslationEntry] = &[
    TranslationEntry {
        canonical: "privacy-policy",
        forms: &[
            ("pt", "politica-de-privacidade"),
            ("es", "politica-de-privacidad"),
            ("fr", "politique-de-confidentialite"),
            ("de", "datenschutz"),
            ("it", "informativa-privacy"),
            ("nl", "privacybeleid"),
            ("he", "mediniyut-pratiyut"),
            ("ru", "politika-konfidentsialnosti"),
        ],
    },
    TranslationEntry {
        canonical: "terms-of-service",
        forms: &[
            ("pt", "termos-de-servico"),
            ("es", "terminos-de-servicio"),
            ("fr", "conditions-d-utilisation"),
            ("de", "nutzungsbedingungen"),
            ("it", "termini-di-servizio"),
            ("nl", "servicevoorwaarden"),
            ("he", "tnaei-shimush"),
            ("ru", "usloviya-ispolzovaniya"),
        ],
    },
    TranslationEntry {
        canonical: "cookie-policy",
        forms: &[
            ("pt", "politica-de-cookies"),
            ("es", "politica-de-cookies"),
            ("fr", "politique-de-cookies"),
            ("de", "cookie-richtlinie"),
            ("it", "cookie-policy"),
            ("nl", "cookiebeleid"),
            ("he", "mediniyut-cookies"),
            ("ru", "politika-cookies"),
        ],
    },
    TranslationEntry {
        canonical: "about",
        forms: &[
            ("pt", "sobre"),
            ("es", "acerca-de"),
            ("fr", "a-propos"),
            ("de", "ueber-uns"),
            ("it", "chi-siamo"),
            ("nl", "over-ons"),
            ("he", "odot"),
            ("ru", "o-nas"),
        ],
    },
    TranslationEntry {
        canonical: "contact",
        forms: &[
            ("pt", "contato"),
            ("es", "contacto"),
            ("fr", "contact"),
            ("de", "kontakt"),
            ("it", "contatti"),
            ("nl", "contact"),
            ("he", "tsor-kesher"),
            ("ru", "kontakty"),
        ],
    },
    TranslationEntry {
        canonical: "login",
        forms: &[
            ("pt", "entrar"),
            ("es", "iniciar-sesion"),
            ("fr", "connexion"),
            ("de", "anmelden"),
            ("it", "accedi"),
            ("nl", "inloggen"),
            ("he", "hitchabrut"),
            ("ru", "vkhod"),
        ],
    },
    TranslationEntry {
        canonical: "register",
        forms: &[
            ("pt", "cadastro"),
            ("es", "registro"),
            ("fr", "inscription"),
            ("de", "registrieren"),
            ("it", "registrati"),
            ("nl", "registreren"),
            ("he", "harshama"),
            ("ru", "registratsiya"),
        ],
    },
    TranslationEntry {
        canonical: "forgot-password",
        forms: &[
            ("pt", "esqueci-senha"),
            ("es", "olvide-contrasena"),
            ("fr", "mot-de-passe-oublie"),
            ("de", "passwort-vergessen"),
            ("it", "password-dimenticata"),
            ("nl", "wachtwoord-vergeten"),
            ("he", "shakhachti-sisma"),
            ("ru", "zabyli-parol"),
        ],
    },
    TranslationEntry {
        canonical: "reset-password",
        forms: &[
            ("pt", "redefinir-senha"),
            ("es", "restablecer-contrasena"),
            ("fr", "reinitialiser-mot-de-passe"),
            ("de", "passwort-zuruecksetzen"),
            ("it", "reimposta-password"),
            ("nl", "wachtwoord-herstellen"),
            ("he", "ipus-sisma"),
            ("ru", "sbros-parolya"),
        ],
    },
    TranslationEntry {
        canonical: "verify-email",
        forms: &[
            ("pt", "verificar-email"),
            ("es", "verificar-correo"),
            ("fr", "verifier-email"),
            ("de", "email-bestaetigen"),
            ("it", "verifica-email"),
            ("nl", "e-mail-verifieren"),
            ("he", "imut-email"),
            ("ru", "podtverzhdenie-email"),
        ],
    },
    TranslationEntry {
        canonical: "account",
        forms: &[
            ("pt", "conta"),
            ("es", "cuenta"),
            ("fr", "compte"),
            ("de", "konto"),
            ("it", "account"),
            ("nl", "account"),
            ("he", "cheshbon"),
            ("ru", "akkaunt"),
        ],
    },
    TranslationEntry {
        canonical: "favorites",
        forms: &[
            ("pt", "favoritos"),
            ("es", "favoritos"),
            ("fr", "favoris"),
            ("de", "favoriten"),
            ("it", "preferiti"),
            ("nl", "favorieten"),
            ("he", "muadafim"),
            ("ru", "izbrannoe"),
        ],
    },
    TranslationEntry {
        canonical: "subscriptions",
        forms: &[
            ("pt", "assinaturas"),
            ("es", "suscripciones"),
            ("fr", "abonnements"),
            ("de", "abonnements"),
            ("it", "abbonamenti"),
            ("nl", "abonnementen"),
            ("he", "minuyim"),
            ("ru", "podpiski"),
        ],
    },
    TranslationEntry {
        canonical: "search",
        forms: &[
            ("pt", "busca"),
            ("es", "buscar"),
            ("fr", "recherche"),
            ("de", "suche"),
            ("it", "cerca"),
            ("nl", "zoeken"),
            ("he", "chipus"),
            ("ru", "poisk"),
        ],
    },
    TranslationEntry {
        canonical: "unsubscribe",
        forms: &[
            ("pt", "cancelar-inscricao"),
            ("es", "cancelar-suscripcion"),
            ("fr", "se-desabonner"),
            ("de", "abmelden"),
            ("it", "annulla-iscrizione"),
            ("nl", "afmelden"),
            ("he", "hasarat-minuy"),
            ("ru", "otpisatsya"),
        ],
    },
];

static ROUTES: OnceLock<TranslationTable> = OnceLock::new();

/// Named route table.
pub fn routes() -> &'static TranslationTable {
    ROUTES.get_or_init(|| TranslationTable::build_lenient("routes", ROUTE_ENTRIES))
}

pub fn translate_route_to_locale(route: &str, locale: Locale) -> String {
    routes().translate_to_locale(route, locale)
}

pub fn translate_route_to_english(localized: &str) -> String {
    routes().translate_to_english(localized)
}

pub fn is_known_route(route: &str) -> bool {
    routes().is_known_canonical(route)
}
