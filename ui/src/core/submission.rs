//! Classifying the result of an "add repository" submission.

use std::fmt::Display;

use api::SubmitResponse;
use tracing::error;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast--success",
            NoticeKind::Error => "toast--error",
        }
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the repository.
    Added,
    /// The backend declared a failure, optionally with its own message.
    Rejected(Option<String>),
    /// The call itself failed (transport, server error).
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_result<E: Display>(result: Result<SubmitResponse, E>) -> Self {
        match result {
            Ok(response) if response.success => SubmitOutcome::Added,
            Ok(response) => SubmitOutcome::Rejected(
                response
                    .error
                    .map(|e| e.trim().to_string())
                    .filter(|e| !e.is_empty()),
            ),
            Err(err) => {
                error!(%err, "adding repository failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    /// Only an accepted submission reloads the page.
    pub fn reloads_page(&self) -> bool {
        matches!(self, SubmitOutcome::Added)
    }

    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Added => Notice {
                kind: NoticeKind::Success,
                message: t!("repo-add-success"),
            },
            SubmitOutcome::Rejected(reason) => {
                let reason = reason.clone().unwrap_or_else(|| t!("unknown-error"));
                Notice {
                    kind: NoticeKind::Error,
                    message: t!("repo-add-failed", error = reason),
                }
            }
            SubmitOutcome::Failed(_) => Notice {
                kind: NoticeKind::Error,
                message: t!("repo-add-error"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submission_reloads() {
        let outcome = SubmitOutcome::from_result::<String>(Ok(SubmitResponse::accepted()));
        assert_eq!(outcome, SubmitOutcome::Added);
        assert!(outcome.reloads_page());
        assert_eq!(outcome.notice().kind, NoticeKind::Success);
    }

    #[test]
    fn declared_failure_carries_server_message() {
        let outcome =
            SubmitOutcome::from_result::<String>(Ok(SubmitResponse::rejected("already indexed")));
        assert!(!outcome.reloads_page());
        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to add repository: already indexed");
    }

    #[test]
    fn declared_failure_without_message_uses_fallback() {
        let outcome = SubmitOutcome::from_result::<String>(Ok(SubmitResponse {
            success: false,
            error: Some(String::new()),
        }));
        assert_eq!(outcome, SubmitOutcome::Rejected(None));
        assert_eq!(
            outcome.notice().message,
            "Failed to add repository: Unknown error"
        );
    }

    #[test]
    fn thrown_error_is_generic() {
        let outcome = SubmitOutcome::from_result(Err("connection reset"));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(!outcome.reloads_page());
        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.message,
            "Something went wrong while adding the repository. Please try again later."
        );
    }
}
