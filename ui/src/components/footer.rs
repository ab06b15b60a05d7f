use dioxus::prelude::*;

use super::header::GITHUB_HOMEPAGE;
use crate::core::format::current_year;
use crate::t;

const README: &str = "https://github.com/AIDotNet/OpenDeepWiki/blob/main/README.md";
const ISSUES: &str = "https://github.com/AIDotNet/OpenDeepWiki/issues";
const ORGANIZATION: &str = "https://github.com/OpenDeepWiki";
const CONTACT: &str = "mailto:239573049@qq.com";

pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy)]
pub struct FooterLink {
    pub title: fn() -> String,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub heading: fn() -> String,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: || t!("footer-product"),
        links: &[
            FooterLink { title: || t!("footer-features"), href: README },
            FooterLink { title: || t!("footer-guide"), href: README },
            FooterLink { title: || t!("footer-changelog"), href: README },
        ],
    },
    FooterColumn {
        heading: || t!("footer-resources"),
        links: &[
            FooterLink { title: || t!("footer-docs"), href: README },
            FooterLink { title: || t!("footer-api"), href: README },
            FooterLink { title: || t!("footer-faq"), href: ISSUES },
        ],
    },
    FooterColumn {
        heading: || t!("footer-company"),
        links: &[
            FooterLink { title: || t!("footer-about"), href: ORGANIZATION },
            FooterLink { title: || t!("footer-contact"), href: CONTACT },
            FooterLink { title: || t!("footer-join"), href: ISSUES },
        ],
    },
];

#[component]
pub fn SiteFooter() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__grid",
                    div { class: "site-footer__about",
                        div { class: "site-footer__brand",
                            img { class: "site-footer__logo", src: "/logo.png", alt: "OpenDeepWiki" }
                            h4 { {t!("brand-name")} }
                        }
                        p { class: "site-footer__text", {t!("footer-description")} }
                        div { class: "site-footer__badges",
                            a {
                                class: "button button--ghost",
                                href: GITHUB_HOMEPAGE,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                            span { class: "badge badge--outline", {t!("footer-open-source")} }
                        }
                    }

                    for column in FOOTER_COLUMNS.iter() {
                        div { class: "site-footer__column",
                            h4 { {(column.heading)()} }
                            for link in column.links.iter() {
                                a {
                                    class: "site-footer__link",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    {(link.title)()}
                                }
                            }
                        }
                    }
                }

                hr { class: "separator" }

                div { class: "site-footer__bottom",
                    div {
                        p { class: "site-footer__text", {t!("footer-copyright", year = year)} }
                        p { class: "site-footer__text",
                            {t!("footer-powered-by")}
                            " "
                            span { class: "site-footer__highlight", "Rust" }
                            " & "
                            span { class: "site-footer__highlight", "Dioxus" }
                        }
                    }
                    div { class: "site-footer__legal",
                        a { href: "/privacy", {t!("footer-privacy")} }
                        span { "•" }
                        a { href: "/terms", {t!("footer-terms")} }
                        span { "•" }
                        span { "{APP_VERSION}" }
                    }
                }
            }
        }
    }
}
