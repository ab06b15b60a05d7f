use dioxus::prelude::*;

use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { class: "page-not-found__path", "{path}" }
            a { class: "button button--primary", href: "/", {t!("not-found-back")} }
        }
    }
}
