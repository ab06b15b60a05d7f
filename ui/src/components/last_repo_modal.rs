use api::Repository;
use dioxus::prelude::*;

use super::repository_card::status_label;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum Lookup {
    Idle,
    Loading,
    Found(Repository),
    NotFound,
    Failed(String),
}

/// Modal that shows the latest processing record for a repository address.
#[component]
pub fn LastRepoModal(open: bool, on_cancel: EventHandler<()>) -> Element {
    let mut address = use_signal(String::new);
    let mut lookup = use_signal(|| Lookup::Idle);

    if !open {
        return rsx! {};
    }

    let query = move |evt: FormEvent| {
        evt.prevent_default();
        let target = address().trim().to_string();
        if target.is_empty() || lookup() == Lookup::Loading {
            return;
        }
        lookup.set(Lookup::Loading);
        spawn(async move {
            let next = match api::last_warehouse(target).await {
                Ok(Some(repository)) => Lookup::Found(repository),
                Ok(None) => Lookup::NotFound,
                Err(err) => {
                    tracing::warn!(%err, "last repository lookup failed");
                    Lookup::Failed(err.to_string())
                }
            };
            lookup.set(next);
        });
    };

    let loading = lookup() == Lookup::Loading;

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal__header",
                    h2 { {t!("last-repo-title")} }
                }

                form { class: "modal__body", onsubmit: query,
                    label { class: "field",
                        span { class: "field__label", {t!("last-repo-address-label")} }
                        div { class: "field-row",
                            input {
                                class: "input",
                                r#type: "url",
                                name: "address",
                                placeholder: t!("form-address-placeholder"),
                                value: "{address}",
                                oninput: move |evt| address.set(evt.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "button button--primary",
                                disabled: loading,
                                if loading {
                                    {t!("last-repo-querying")}
                                } else {
                                    {t!("last-repo-query")}
                                }
                            }
                        }
                    }
                }

                match lookup() {
                    Lookup::Found(repository) => rsx! {
                        {render_record(&repository)}
                    },
                    Lookup::NotFound => rsx! {
                        p { class: "modal__notice", {t!("last-repo-not-found")} }
                    },
                    Lookup::Failed(error) => rsx! {
                        p { class: "modal__notice modal__notice--error",
                            {t!("last-repo-failed", error = error)}
                        }
                    },
                    Lookup::Idle | Lookup::Loading => rsx! {},
                }

                footer { class: "modal__footer",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_cancel.call(()),
                        {t!("last-repo-close")}
                    }
                }
            }
        }
    }
}

fn render_record(repository: &Repository) -> Element {
    let status = repository.status;
    let status_class = format!("status-badge status-badge--{}", status.as_str());

    rsx! {
        dl { class: "last-repo",
            dt { {t!("last-repo-address-label")} }
            dd {
                a { href: "{repository.docs_href()}", "{repository.display_name()}" }
                " · "
                span { class: "last-repo__address", "{repository.address}" }
            }
            dt { {t!("last-repo-status")} }
            dd {
                span { class: "{status_class}", {status_label(status)} }
            }
            if let Some(error) = repository.error.as_ref().filter(|e| !e.trim().is_empty()) {
                dt { {t!("last-repo-error")} }
                dd { class: "last-repo__error", "{error}" }
            }
        }
    }
}
