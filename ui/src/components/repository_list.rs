use api::Repository;
use dioxus::prelude::*;

use super::repository_card::RepositoryCard;
use crate::t;

/// Grid of repository cards, or an empty-state indicator.
///
/// Column count comes from CSS breakpoints (`.repo-grid`), not from the data.
#[component]
pub fn RepositoryList(repositories: Vec<Repository>, keyword: Option<String>) -> Element {
    if repositories.is_empty() {
        let message = empty_state_message(keyword.as_deref());
        return rsx! {
            div { class: "empty-state",
                span { class: "empty-state__icon", aria_hidden: "true", "📄" }
                p { class: "empty-state__message", "{message}" }
            }
        };
    }

    rsx! {
        div { class: "repo-grid",
            for repository in repositories {
                div { key: "{repository.id}", class: "repo-grid__cell",
                    RepositoryCard { repository: repository.clone() }
                }
            }
        }
    }
}

/// "No repositories found for …" while searching, the generic message otherwise.
pub fn empty_state_message(keyword: Option<&str>) -> String {
    match keyword.map(str::trim).filter(|k| !k.is_empty()) {
        Some(keyword) => t!("repo-list-not-found", keyword = keyword.to_string()),
        None => t!("repo-list-empty"),
    }
}

pub fn empty_state_hint(keyword: Option<&str>) -> String {
    match keyword.map(str::trim).filter(|k| !k.is_empty()) {
        Some(_) => t!("repo-list-not-found-hint"),
        None => t!("repo-list-empty-hint"),
    }
}
