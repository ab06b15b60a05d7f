//! Internationalization (i18n) support for `deepwiki-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/deepwiki-ui.ftl   (fallback/reference)
//!   zh-CN/deepwiki-ui.ftl
//! ```
//!
//! Every supported locale gets its own loader, derived once from a base loader
//! that holds all bundles. Nothing switches a shared loader at runtime: a page
//! provides [`ActiveLocale`] through context and `t!` picks the matching
//! loader. Outside a component (or without that context) the fallback applies.
//!
//! ```ignore
//! let locale = use_signal(|| i18n::supported_locale(&i18n::resolve_locale(param, None)));
//! use_context_provider(|| ActiveLocale(locale));
//! let title = t!("home-title");
//! ```
use dioxus::prelude::{try_consume_context, Readable, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("home-title")
///     t!("repo-list-not-found", keyword = "foo")
///
/// Expands to `fl!(loader(), ...)`, so lookups follow the active locale.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader(), $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader(), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "deepwiki-ui";

pub const FALLBACK_LOCALE: &str = "en-US";
pub const CHINESE_LOCALE: &str = "zh-CN";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Locale of the page being rendered, provided as context by the page shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveLocale(pub Signal<String>);

/// Base loader holding every embedded bundle; resolves in the fallback locale.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback.clone());

    // Fallback first: the first loaded language becomes the current one.
    let mut languages = vec![fallback];
    languages.extend(
        available_languages()
            .iter()
            .filter(|tag| tag.as_str() != FALLBACK_LOCALE)
            .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok()),
    );
    if let Err(err) = loader.load_languages(&Localizations, &languages) {
        warn!(%err, "failed loading embedded languages");
    }
    // Only affects bundles that exist, so it has to follow the load.
    // Messages end up in URLs and toasts; no bidi isolation marks around arguments.
    loader.set_use_isolating(false);
    debug!(count = languages.len(), "i18n bundles loaded");
    loader
});

/// One loader per embedded locale, sharing the base loader's bundles.
static LOCALE_LOADERS: Lazy<Vec<(String, FluentLanguageLoader)>> = Lazy::new(|| {
    available_languages()
        .into_iter()
        .filter_map(|tag| {
            let lang: LanguageIdentifier = tag.parse().ok()?;
            let loader = LOADER.select_languages(&[lang]);
            Some((tag, loader))
        })
        .collect()
});

/// Load the embedded bundles (idempotent).
pub fn init() {
    Lazy::force(&LOCALE_LOADERS);
}

/// Loader for `tag`; unknown tags get the fallback loader.
pub fn loader_for(tag: &str) -> &'static FluentLanguageLoader {
    LOCALE_LOADERS
        .iter()
        .find(|(known, _)| known == tag)
        .map(|(_, loader)| loader)
        .unwrap_or_else(|| Lazy::force(&LOADER))
}

/// Loader for the [`ActiveLocale`] in scope, else the fallback loader.
///
/// Reading the locale inside a component render subscribes that component,
/// so a locale change re-renders its text.
pub fn loader() -> &'static FluentLanguageLoader {
    match try_consume_context::<ActiveLocale>() {
        Some(ActiveLocale(tag)) => loader_for(&tag.read()),
        None => Lazy::force(&LOADER),
    }
}

/// Pick the locale for a navigation.
///
/// A non-empty `locale` parameter always wins. Otherwise any browser tag that
/// mentions `zh` maps to Chinese and everything else to the fallback.
pub fn resolve_locale(param: Option<&str>, browser_language: Option<&str>) -> String {
    if let Some(tag) = param.map(str::trim).filter(|tag| !tag.is_empty()) {
        return tag.to_string();
    }
    match browser_language {
        Some(lang) if lang.to_ascii_lowercase().contains("zh") => CHINESE_LOCALE.to_string(),
        _ => FALLBACK_LOCALE.to_string(),
    }
}

/// `tag` when it is embedded, the fallback otherwise.
pub fn supported_locale(tag: &str) -> String {
    if available_languages().iter().any(|known| known == tag) {
        tag.to_string()
    } else {
        FALLBACK_LOCALE.to_string()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Human label for a locale in the switcher.
pub fn language_label(tag: &str) -> &'static str {
    match tag {
        "zh-CN" => "简体中文",
        "en-US" => "English",
        _ => "—",
    }
}

/// Languages the OS reports, most preferred first.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;

    #[test]
    fn config_domain_names_the_embedded_files() {
        let config = include_str!("../i18n.toml");
        assert!(
            config.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must declare domain `{DOMAIN}` so `fl!` checks deepwiki-ui.ftl"
        );
        let fallback = format!("{FALLBACK_LOCALE}/{DOMAIN}.ftl");
        assert!(Localizations::get(&fallback).is_some(), "missing {fallback}");
    }

    #[test]
    fn fallback_and_chinese_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK_LOCALE));
        assert!(langs.iter().any(|l| l == CHINESE_LOCALE));
    }

    #[test]
    fn explicit_parameter_wins() {
        assert_eq!(resolve_locale(Some("zh-CN"), Some("en-GB")), "zh-CN");
        assert_eq!(resolve_locale(Some("en-US"), Some("zh-TW")), "en-US");
    }

    #[test]
    fn browser_language_decides_without_parameter() {
        assert_eq!(resolve_locale(None, Some("zh-TW")), CHINESE_LOCALE);
        assert_eq!(resolve_locale(None, Some("ZH")), CHINESE_LOCALE);
        assert_eq!(resolve_locale(Some("  "), Some("de-DE")), FALLBACK_LOCALE);
        assert_eq!(resolve_locale(None, None), FALLBACK_LOCALE);
    }

    #[test]
    fn unknown_tags_use_the_fallback_loader() {
        assert_eq!(supported_locale("fr-FR"), FALLBACK_LOCALE);
        assert_eq!(supported_locale(CHINESE_LOCALE), CHINESE_LOCALE);
        assert_eq!(
            fl!(loader_for("zz-ZZ"), "repo-list-empty"),
            fl!(loader_for(FALLBACK_LOCALE), "repo-list-empty")
        );
    }

    #[test]
    fn outside_a_page_text_is_in_the_fallback_locale() {
        init();
        assert_eq!(loader().current_language().to_string(), FALLBACK_LOCALE);
        assert_eq!(t!("repo-list-empty"), "No repositories yet");
    }

    #[test]
    fn locale_loaders_are_independent() {
        let zh = loader_for(CHINESE_LOCALE);
        let en = loader_for(FALLBACK_LOCALE);
        assert_eq!(fl!(zh, "repo-list-empty"), "暂无仓库");
        assert_eq!(fl!(en, "repo-list-empty"), "No repositories yet");
        // Using one never changes the other or the base loader.
        assert_eq!(fl!(zh, "repo-list-empty"), "暂无仓库");
        assert_eq!(LOADER.current_language().to_string(), FALLBACK_LOCALE);
    }

    #[test]
    fn arguments_carry_no_isolation_marks() {
        for tag in [FALLBACK_LOCALE, CHINESE_LOCALE] {
            let text = fl!(loader_for(tag), "repo-add-failed", error = "already indexed");
            assert!(text.contains("already indexed"), "{text}");
            assert!(!text.contains('\u{2068}') && !text.contains('\u{2069}'), "{text:?}");
        }
        assert_eq!(
            t!("repo-list-not-found", keyword = "wiki"),
            "No repositories found for \"wiki\""
        );
    }

    #[component]
    fn Localized(tag: String) -> Element {
        let locale = use_signal(|| tag.clone());
        use_context_provider(|| ActiveLocale(locale));
        rsx! {
            p { {t!("repo-list-empty")} }
        }
    }

    fn render(tag: &str) -> String {
        let mut dom = VirtualDom::new_with_props(Localized, LocalizedProps { tag: tag.into() });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn pages_render_in_their_own_locale() {
        let zh = render(CHINESE_LOCALE);
        let en = render(FALLBACK_LOCALE);
        assert!(zh.contains("暂无仓库"), "{zh}");
        assert!(en.contains("No repositories yet"), "{en}");
        // Rendering the Chinese page did not switch the process default.
        assert_eq!(t!("repo-list-empty"), "No repositories yet");
    }
}
