//! Localization for `crimescroll-ui`.
//!
//! Message files are embedded at compile time from `i18n/<lang>/crimescroll-ui.ftl`
//! (`en-US` is the fallback and reference) and looked up through the `t!` macro,
//! which routes `fl!` through the shared [`LOADER`].
//!
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-story");
//! let title = crate::t!("chart-title-property", state = "Georgia");
//! ```
//!
//! Adding a locale: copy the `en-US` file into a new `i18n/<lang-id>/` folder and
//! translate the values, keeping IDs and `$placeholders` as they are. The
//! completeness tests fail until every key is present.
//!
//! The requested languages come from `navigator.languages` on the web and from
//! the OS locale list on desktop.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-story")` or `t!("chart-scatter-title", year = "2019")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "crimescroll-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&LOADER, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    select(&LOADER, &[lang])
}

/// Language currently shown, e.g. `"es-ES"`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Loading bundles resets the isolation flag, so it is cleared after every
/// selection. Chart titles are SVG text and must not carry bidi marks.
fn select(
    loader: &FluentLanguageLoader,
    requested: &[LanguageIdentifier],
) -> Result<(), I18nEmbedError> {
    i18n_embed::select(loader, &Localizations, requested)?;
    loader.set_use_isolating(false);
    Ok(())
}

/// Embedded language identifiers, sorted, for the locale picker.
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
