use api::{Repository, WarehouseStatus};
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn RepositoryCard(repository: Repository) -> Element {
    let title = repository.display_name();
    let href = repository.docs_href();
    let status = repository.status;
    let status_text = status_label(status);
    let status_class = format!("status-badge status-badge--{}", status.as_str());
    let description = repository
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| t!("repo-card-no-description"));
    let added = repository
        .created_at
        .as_deref()
        .and_then(format::format_created_date)
        .map(|date| t!("repo-card-added", date = date));

    rsx! {
        article { class: "repo-card",
            a { class: "repo-card__link", href: "{href}",
                header { class: "repo-card__header",
                    span { class: "repo-card__avatar", aria_hidden: "true",
                        {initials(&repository.name)}
                    }
                    h3 { class: "repo-card__title", "{title}" }
                    if repository.is_recommended {
                        span { class: "repo-card__badge", {t!("repo-card-recommended")} }
                    }
                }
                p { class: "repo-card__description", "{description}" }
                footer { class: "repo-card__meta",
                    span { class: "{status_class}", "{status_text}" }
                    if let Some(branch) = repository.branch.as_ref() {
                        span { class: "repo-card__branch", "{branch}" }
                    }
                    if let Some(stars) = repository.stars {
                        span { class: "repo-card__stars", "★ {format::format_star_count(stars)}" }
                    }
                    if let Some(added) = added {
                        span { class: "repo-card__date", "{added}" }
                    }
                }
            }
        }
    }
}

pub(crate) fn status_label(status: WarehouseStatus) -> String {
    match status {
        WarehouseStatus::Pending => t!("status-pending"),
        WarehouseStatus::Processing => t!("status-processing"),
        WarehouseStatus::Completed => t!("status-completed"),
        WarehouseStatus::Canceled => t!("status-canceled"),
        WarehouseStatus::Unauthorized => t!("status-unauthorized"),
        WarehouseStatus::Failed => t!("status-failed"),
    }
}

/// First two characters, uppercased, for the avatar placeholder.
pub(crate) fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_handle_short_and_unicode_names() {
        assert_eq!(initials("deepwiki"), "DE");
        assert_eq!(initials("a"), "A");
        assert_eq!(initials("痴者工良"), "痴者");
        assert_eq!(initials(""), "");
    }
}
