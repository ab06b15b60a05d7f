//! Ephemeral state of the home page.
//!
//! Rebuilt from the incoming [`HomeQuery`] on every navigation. Search and
//! paging do not mutate server data; they return the query to navigate to.

use super::navigation::HomeQuery;
use super::submission::{Notice, SubmitOutcome};

/// What the page does once a submission call has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSettled {
    /// The single toast to show.
    pub notice: Notice,
    /// Reload the page (or refetch where there is no document).
    pub reload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewState {
    /// Text in the search box, possibly not yet submitted.
    pub search_value: String,
    pub current_page: u32,
    pub page_size: u32,
    /// Page size of the page load; a new search starts over with it.
    pub initial_page_size: u32,
    /// Keyword of the page load, used when paging.
    pub active_keyword: String,
    pub locale: Option<String>,
    pub form_visible: bool,
    pub last_repo_modal_visible: bool,
}

impl HomeViewState {
    pub fn from_query(query: &HomeQuery) -> Self {
        Self {
            search_value: query.keyword.clone(),
            current_page: query.page.max(1),
            page_size: query.page_size.max(1),
            initial_page_size: query.page_size.max(1),
            active_keyword: query.keyword.clone(),
            locale: query.locale.clone(),
            form_visible: false,
            last_repo_modal_visible: false,
        }
    }

    /// Submit `value` as the new keyword: back to page 1 with the initial page size.
    pub fn search(&mut self, value: &str) -> HomeQuery {
        self.search_value = value.to_string();
        self.current_page = 1;
        self.page_size = self.initial_page_size;
        HomeQuery {
            page: 1,
            page_size: self.initial_page_size,
            keyword: value.to_string(),
            locale: self.locale.clone(),
        }
    }

    /// Move to `page`, keeping the keyword the current results were loaded with.
    pub fn change_page(&mut self, page: u32) -> HomeQuery {
        // Not `search_value`: unsubmitted text in the box must not leak into paging.
        self.current_page = page.max(1);
        HomeQuery {
            page: self.current_page,
            page_size: self.page_size,
            keyword: self.active_keyword.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Same listing, different language.
    pub fn switch_locale(&mut self, locale: &str) -> HomeQuery {
        self.locale = Some(locale.to_string());
        HomeQuery {
            page: self.current_page,
            page_size: self.page_size,
            keyword: self.active_keyword.clone(),
            locale: self.locale.clone(),
        }
    }

    pub fn open_form(&mut self) {
        self.form_visible = true;
    }

    pub fn close_form(&mut self) {
        self.form_visible = false;
    }

    /// Close the form after the call settled, whatever the outcome.
    pub fn settle_submission(&mut self, outcome: &SubmitOutcome) -> SubmissionSettled {
        self.form_visible = false;
        SubmissionSettled {
            notice: outcome.notice(),
            reload: outcome.reloads_page(),
        }
    }

    pub fn open_last_repo_modal(&mut self) {
        self.last_repo_modal_visible = true;
    }

    pub fn close_last_repo_modal(&mut self) {
        self.last_repo_modal_visible = false;
    }
}
