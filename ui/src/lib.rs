//! Shared UI crate for the OpenDeepWiki home page. View logic, components and
//! localization live here; platform crates only provide routing.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod footer;
    mod header;
    mod hero;
    mod last_repo_modal;
    mod pagination;
    mod repository_card;
    mod repository_form;
    mod repository_list;
    mod sponsors;
    mod toast;

    pub use footer::{FooterColumn, FooterLink, SiteFooter, APP_VERSION, FOOTER_COLUMNS};
    pub use header::{SiteHeader, GITHUB_HOMEPAGE};
    pub use hero::Hero;
    pub use last_repo_modal::LastRepoModal;
    pub use pagination::PaginationBar;
    pub use repository_card::RepositoryCard;
    pub use repository_form::{collect_values, FormFields, RepositoryForm};
    pub use repository_list::{empty_state_hint, empty_state_message, RepositoryList};
    pub use sponsors::{Sponsor, Sponsors, SPONSORS};
    pub use toast::{use_toasts, ToastEntry, Toaster, Toasts, TOAST_TTL_MS};
}
