use dioxus::prelude::*;

use crate::core::format::format_star_count;
use crate::i18n;
use crate::t;

pub const GITHUB_HOMEPAGE: &str = "https://github.com/AIDotNet/OpenDeepWiki";

/// Sticky site header: brand, locale switcher and the GitHub star counter.
///
/// The switcher does not change the language itself; it reports the chosen
/// tag so the page can navigate with `locale=<tag>` and re-run locale setup.
#[component]
pub fn SiteHeader(stars: u64, locale: String, on_locale_change: EventHandler<String>) -> Element {
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let star_label = format_star_count(stars);

    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    img {
                        class: "site-header__logo",
                        src: "/logo.png",
                        alt: "OpenDeepWiki",
                    }
                    span { class: "site-header__name", {t!("brand-name")} }
                }

                div { class: "site-header__actions",
                    if show_switcher {
                        div { class: "site-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{locale}",
                                oninput: move |evt: FormEvent| on_locale_change.call(evt.value()),
                                for code in langs() {
                                    option {
                                        key: "{code}",
                                        value: "{code}",
                                        selected: code == locale,
                                        {i18n::language_label(&code)}
                                    }
                                }
                            }
                        }
                    }

                    a {
                        class: "button button--outline site-header__github",
                        href: GITHUB_HOMEPAGE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: t!("nav-github-label"),
                        span { class: "site-header__github-icon", aria_hidden: "true" }
                        span { class: "site-header__stars", "★ {star_label}" }
                    }
                }
            }
        }
    }
}
