use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Hero(total_repositories: u64) -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero__title", {t!("home-title")} }
            p { class: "hero__subtitle", {t!("home-subtitle")} }
            if total_repositories > 0 {
                p { class: "hero__stat",
                    {t!("stats-total-repositories", count = total_repositories)}
                }
            }
        }
    }
}
