use dioxus::prelude::*;

use crate::core::pagination::PaginationWindow;
use crate::t;

#[component]
pub fn PaginationBar(window: PaginationWindow, on_page: EventHandler<u32>) -> Element {
    let current = window.current;
    let entries: Vec<(u32, bool, bool)> = window
        .pages
        .iter()
        .enumerate()
        .map(|(index, &page)| (page, window.is_current(page), window.has_gap_before(index)))
        .collect();

    rsx! {
        nav { class: "pagination", aria_label: t!("pagination-label"),
            ul { class: "pagination__list",
                if window.show_previous {
                    li {
                        button {
                            r#type: "button",
                            class: "pagination__link pagination__link--previous",
                            onclick: move |_| on_page.call(current - 1),
                            "‹ "
                            {t!("pagination-previous")}
                        }
                    }
                }

                for (page, active, gap) in entries {
                    li {
                        key: "{page}",
                        class: if gap { "pagination__item pagination__item--after-gap" } else { "pagination__item" },
                        button {
                            r#type: "button",
                            class: if active { "pagination__link pagination__link--active" } else { "pagination__link" },
                            aria_current: if active { "page" } else { "false" },
                            onclick: move |_| on_page.call(page),
                            "{page}"
                        }
                    }
                }

                if window.show_next {
                    li {
                        button {
                            r#type: "button",
                            class: "pagination__link pagination__link--next",
                            onclick: move |_| on_page.call(current + 1),
                            {t!("pagination-next")}
                            " ›"
                        }
                    }
                }
            }
        }
    }
}
