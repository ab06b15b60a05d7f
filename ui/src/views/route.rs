use dioxus::prelude::*;
use tracing::debug;

use super::HomePage;
use crate::core::navigation::HomeQuery;

/// Home route body. Every distinct query gets its own [`HomePage`] instance,
/// so locale, search box and data loads start over on each navigation.
#[component]
pub fn HomeRoute(query: HomeQuery, on_navigate: EventHandler<HomeQuery>) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_: SuspenseContext| rsx! {
                p { class: "page__loading", "…" }
            },
            KeyedByQuery {
                query,
                page: move |current: HomeQuery| rsx! {
                    HomePage { query: current, on_navigate }
                },
            }
        }
    }
}

/// Renders `page` as the only child of a one-item list keyed by the query
/// string. A new key drops the old subtree and mounts a fresh one; an equal
/// key keeps it.
#[component]
pub fn KeyedByQuery(query: HomeQuery, page: Callback<HomeQuery, Element>) -> Element {
    debug!(route = %query, "route body");

    rsx! {
        for current in std::iter::once(query) {
            Fragment { key: "{current}", {page.call(current)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static MOUNTS: Cell<u32> = const { Cell::new(0) };
        static ROUTE: RefCell<Option<Signal<HomeQuery>>> = const { RefCell::new(None) };
    }

    #[component]
    fn CountedPage(query: HomeQuery) -> Element {
        let mount = use_hook(|| {
            MOUNTS.with(|mounts| {
                mounts.set(mounts.get() + 1);
                mounts.get()
            })
        });

        rsx! {
            p { "mount {mount} page {query.page}" }
        }
    }

    #[component]
    fn Routed() -> Element {
        let route = use_signal(HomeQuery::default);
        use_hook(|| ROUTE.with(|slot| *slot.borrow_mut() = Some(route)));

        rsx! {
            KeyedByQuery {
                query: route(),
                page: move |current: HomeQuery| rsx! {
                    CountedPage { query: current }
                },
            }
        }
    }

    fn mounted() -> VirtualDom {
        MOUNTS.with(|mounts| mounts.set(0));
        let mut dom = VirtualDom::new(Routed);
        dom.rebuild_in_place();
        dom
    }

    fn navigate(dom: &mut VirtualDom, next: HomeQuery) {
        let mut route = ROUTE
            .with(|slot| *slot.borrow())
            .expect("route signal registered on mount");
        dom.in_runtime(|| route.set(next));
        dom.render_immediate_to_vec();
    }

    fn mounts() -> u32 {
        MOUNTS.with(Cell::get)
    }

    #[test]
    fn first_render_mounts_once() {
        let dom = mounted();
        assert_eq!(mounts(), 1);
        assert!(dioxus_ssr::render(&dom).contains("mount 1 page 1"));
    }

    #[test]
    fn navigating_to_another_page_remounts() {
        let mut dom = mounted();
        navigate(
            &mut dom,
            HomeQuery {
                page: 2,
                ..HomeQuery::default()
            },
        );

        assert_eq!(mounts(), 2);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("mount 2 page 2"), "{html}");
    }

    #[test]
    fn locale_only_change_remounts() {
        let mut dom = mounted();
        navigate(
            &mut dom,
            HomeQuery {
                locale: Some("zh-CN".into()),
                ..HomeQuery::default()
            },
        );

        assert_eq!(mounts(), 2);
    }

    #[test]
    fn same_query_keeps_the_mounted_page() {
        let mut dom = mounted();
        navigate(&mut dom, HomeQuery::default());

        assert_eq!(mounts(), 1);
        assert!(dioxus_ssr::render(&dom).contains("mount 1 page 1"));
    }
}
