use dioxus::prelude::*;

use ui::core::navigation::HomeQuery;
use ui::views::{HomeRoute, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/?:..query")]
    Home { query: HomeQuery },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

// Shared theme lives in the ui crate; inline it so the web bundle needs no copy.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(ui::i18n::init);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        Router::<Route> {}
    }
}

#[component]
fn Home(query: HomeQuery) -> Element {
    rsx! {
        HomeRoute {
            query,
            on_navigate: move |next: HomeQuery| {
                tracing::debug!(target_query = %next, "navigate");
                navigator().push(Route::Home { query: next });
            },
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFound { segments }
    }
}
