//! Localization for `admetrics-ui`.
//!
//! `i18n-embed` selects the language and formats messages through its fluent
//! loader. `rust-embed` bakes the `.ftl` files into the binary and
//! `i18n-embed-fl` checks message IDs at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/admetrics-ui.ftl   (fallback/reference)
//!   es-ES/admetrics-ui.ftl
//! ```
//!
//! Call [`init`] once at startup, then look messages up with `t!`:
//! ```ignore
//! use crate::t;
//! let label = t!("nav-dashboard");
//! ```
//!
//! Adding a locale: copy `en-US/admetrics-ui.ftl` to `i18n/<lang-id>/`,
//! translate the values (keep IDs and placeholders), and register it in
//! `tests/i18n_missing_keys.rs`.
//!
//! Desktop asks the OS for preferred languages, web reads
//! `navigator.languages`. On wasm the assets are always embedded
//! (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-dashboard")` or `t!("not-found-body", path = p)`; expands to
/// `fl!` against the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Language used when nothing else was selected; matches `ui/i18n.toml`.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "admetrics-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Loads the bundles for the user's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization ready"),
            Err(err) => tracing::warn!("language selection failed ({err}); using fallback"),
        }
    });
}

/// Switches language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted, for the picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
