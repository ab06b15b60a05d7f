use dioxus::prelude::*;

use crate::core::platform;
use crate::core::submission::Notice;
use crate::t;

/// How long a toast stays up unless dismissed.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Handle to the toast stack. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

pub fn use_toasts() -> Toasts {
    let entries = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    Toasts { entries, next_id }
}

impl Toasts {
    /// Show `notice` and schedule its removal.
    pub fn push(mut self, notice: Notice) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.entries.write().push(ToastEntry { id, notice });

        spawn(async move {
            platform::sleep_ms(TOAST_TTL_MS).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.read().clone()
    }
}

#[component]
pub fn Toaster(toasts: Toasts) -> Element {
    let entries = toasts.entries();

    rsx! {
        div { class: "toaster", role: "status", aria_live: "polite",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: "toast {entry.notice.kind.css_class()}",
                    span { class: "toast__message", "{entry.notice.message}" }
                    button {
                        r#type: "button",
                        class: "toast__close",
                        aria_label: t!("toast-dismiss"),
                        onclick: move |_| toasts.dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
