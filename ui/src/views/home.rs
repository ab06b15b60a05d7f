use api::RepositoryFormValues;
use dioxus::prelude::*;
use tracing::debug;

use crate::components::{
    empty_state_hint, empty_state_message, use_toasts, Hero, LastRepoModal, PaginationBar,
    RepositoryForm, RepositoryList, SiteFooter, SiteHeader, Sponsors, Toaster,
};
use crate::core::navigation::HomeQuery;
use crate::core::pagination::{pagination_visible, PaginationWindow};
use crate::core::platform;
use crate::core::stats::DisplayStats;
use crate::core::submission::SubmitOutcome;
use crate::core::view_state::HomeViewState;
use crate::i18n::{self, ActiveLocale};
use crate::t;

/// The landing page: header, hero, search, repository grid, pager, modals,
/// sponsors and footer.
///
/// Mount once per navigation (see [`super::HomeRoute`]). Every search, page
/// change or locale switch is handed to `on_navigate` as the next
/// [`HomeQuery`]; nothing here refetches in place except after a successful
/// submission on targets without a document to reload.
#[component]
pub fn HomePage(query: HomeQuery, on_navigate: EventHandler<HomeQuery>) -> Element {
    // Server and hydration agree on the parameter (or fallback); the browser
    // language is only consulted once mounted on the client.
    let mut locale = use_signal(|| {
        i18n::supported_locale(&i18n::resolve_locale(query.locale.as_deref(), None))
    });
    use_context_provider(|| ActiveLocale(locale));
    let explicit_locale = query.locale.is_some();
    use_effect(move || {
        if explicit_locale {
            return;
        }
        let detected = i18n::supported_locale(&i18n::resolve_locale(
            None,
            platform::browser_language().as_deref(),
        ));
        if *locale.peek() != detected {
            debug!(%detected, "locale from browser");
            locale.set(detected);
        }
    });

    let load_query = query.clone();
    let mut listing = use_server_future(move || {
        let q = load_query.clone();
        async move { api::list_repositories(q.page, q.page_size, q.keyword).await }
    })?;
    let mut stats = use_server_future(api::home_stats)?;

    let mut view = use_signal(|| HomeViewState::from_query(&query));
    let mut submitting = use_signal(|| false);
    let toasts = use_toasts();

    let add_repository = move |values: RepositoryFormValues| {
        if submitting() {
            return;
        }
        submitting.set(true);
        spawn(async move {
            let outcome = SubmitOutcome::from_result(api::submit_warehouse(values).await);
            let settled = view.write().settle_submission(&outcome);
            toasts.push(settled.notice);
            if settled.reload && !platform::reload_page() {
                listing.restart();
                stats.restart();
            }
            submitting.set(false);
        });
    };

    let change_page = move |page: u32| {
        let target = view.write().change_page(page);
        on_navigate.call(target);
    };

    let change_locale = move |tag: String| {
        let target = view.write().switch_locale(&tag);
        on_navigate.call(target);
    };

    let locale = locale();
    let state = view();
    let (repositories, total, load_error) = match &*listing.read() {
        Some(Ok(page)) => (page.items.clone(), page.total, None),
        Some(Err(err)) => (Vec::new(), 0, Some(err.to_string())),
        None => (Vec::new(), 0, None),
    };
    let loaded = listing.read().is_some();
    let home_stats = stats
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .cloned();
    let display = DisplayStats::resolve(home_stats.as_ref(), total, repositories.len());

    let keyword = state.active_keyword.clone();
    let keyword_opt = (!keyword.trim().is_empty()).then(|| keyword.clone());
    let show_pager = pagination_visible(total, state.page_size, &keyword);
    let window = PaginationWindow::compute(total, state.page_size, state.current_page);

    debug!(
        page = state.current_page,
        page_size = state.page_size,
        total,
        locale = %locale,
        "home render"
    );

    rsx! {
        document::Title { "OpenDeepWiki" }

        div { class: "page page-home", lang: "{locale}",
            SiteHeader {
                stars: display.open_deep_wiki_stars,
                locale: locale.clone(),
                on_locale_change: change_locale,
            }

            main { class: "page__main",
                Hero { total_repositories: display.total_repositories }

                div { class: "toolbar",
                    div { class: "toolbar__search",
                        span { class: "toolbar__search-icon", aria_hidden: "true", "⌕" }
                        input {
                            class: "input toolbar__search-input",
                            r#type: "search",
                            placeholder: t!("search-placeholder"),
                            value: "{state.search_value}",
                            oninput: move |evt| view.write().search_value = evt.value(),
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    submit_search(view, on_navigate);
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            class: "button button--outline",
                            onclick: move |_| submit_search(view, on_navigate),
                            {t!("search-button")}
                        }
                    }
                    div { class: "toolbar__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| view.write().open_form(),
                            "+ "
                            {t!("add-repo-button")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--outline",
                            onclick: move |_| view.write().open_last_repo_modal(),
                            {t!("query-last-repo-button")}
                        }
                    }
                }

                if let Some(error) = load_error {
                    div { class: "card card--error",
                        p { {t!("repo-list-load-failed", error = error)} }
                    }
                } else if !loaded {
                    p { class: "page__loading", {t!("repo-list-loading")} }
                } else if repositories.is_empty() {
                    div { class: "card empty-card",
                        div { class: "empty-card__icon", aria_hidden: "true", "📚" }
                        h3 { class: "empty-card__title", {empty_state_message(keyword_opt.as_deref())} }
                        p { class: "empty-card__hint", {empty_state_hint(keyword_opt.as_deref())} }
                        button {
                            r#type: "button",
                            class: "button button--primary button--large",
                            onclick: move |_| view.write().open_form(),
                            "+ "
                            {t!("repo-list-add-now")}
                        }
                    }
                } else {
                    RepositoryList { repositories, keyword: keyword_opt.clone() }
                    if show_pager {
                        PaginationBar { window, on_page: change_page }
                    }
                }

                RepositoryForm {
                    open: state.form_visible,
                    submitting: submitting(),
                    on_cancel: move |_| view.write().close_form(),
                    on_submit: add_repository,
                }

                LastRepoModal {
                    open: state.last_repo_modal_visible,
                    on_cancel: move |_| view.write().close_last_repo_modal(),
                }
            }

            Sponsors {}
            SiteFooter {}
        }

        Toaster { toasts }
    }
}

/// Submit whatever is in the search box.
fn submit_search(mut view: Signal<HomeViewState>, on_navigate: EventHandler<HomeQuery>) {
    let value = view.peek().search_value.clone();
    let target = view.write().search(&value);
    on_navigate.call(target);
}
