//! Wire types shared by the server functions and the UI.
//!
//! Field names follow the backend's camelCase JSON so the same structs decode
//! upstream responses and travel through the server-function boundary.

use serde::{Deserialize, Serialize};

/// Processing state of a warehouse (an indexed source repository).
///
/// Numeric on the wire; unknown codes decode as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum WarehouseStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Canceled,
    Unauthorized,
    Failed,
}

impl WarehouseStatus {
    /// Stable lowercase name, used for CSS modifiers and translation keys.
    pub fn as_str(self) -> &'static str {
        match self {
            WarehouseStatus::Pending => "pending",
            WarehouseStatus::Processing => "processing",
            WarehouseStatus::Completed => "completed",
            WarehouseStatus::Canceled => "canceled",
            WarehouseStatus::Unauthorized => "unauthorized",
            WarehouseStatus::Failed => "failed",
        }
    }
}

impl From<u8> for WarehouseStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => WarehouseStatus::Processing,
            2 => WarehouseStatus::Completed,
            3 => WarehouseStatus::Canceled,
            4 => WarehouseStatus::Unauthorized,
            5 => WarehouseStatus::Failed,
            _ => WarehouseStatus::Pending,
        }
    }
}

impl From<WarehouseStatus> for u8 {
    fn from(status: WarehouseStatus) -> Self {
        match status {
            WarehouseStatus::Pending => 0,
            WarehouseStatus::Processing => 1,
            WarehouseStatus::Completed => 2,
            WarehouseStatus::Canceled => 3,
            WarehouseStatus::Unauthorized => 4,
            WarehouseStatus::Failed => 5,
        }
    }
}

/// Summary of one repository as listed on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub status: WarehouseStatus,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub stars: Option<u64>,
}

impl Repository {
    /// `organization/name`, or just the name when the organization is unknown.
    pub fn display_name(&self) -> String {
        if self.organization_name.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.organization_name, self.name)
        }
    }

    /// Site-relative link to the generated documentation.
    pub fn docs_href(&self) -> String {
        if self.organization_name.trim().is_empty() {
            format!("/{}", self.name)
        } else {
            format!("/{}/{}", self.organization_name, self.name)
        }
    }
}

/// One page of the repository listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepositoryPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// Aggregate counters for the header and hero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStats {
    #[serde(default)]
    pub total_repositories: Option<u64>,
    #[serde(default)]
    pub open_deep_wiki_stars: Option<u64>,
}

/// Values collected by the "add repository" form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFormValues {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RepositoryFormValues {
    /// Trims every field and drops optional fields left blank.
    pub fn normalized(self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            address: self.address.trim().to_string(),
            branch: blank_to_none(self.branch),
            git_user_name: blank_to_none(self.git_user_name),
            git_password: blank_to_none(self.git_password),
            email: blank_to_none(self.email),
        }
    }
}

/// Outcome the backend declares for a submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_decodes_backend_shape() {
        let repo: Repository = serde_json::from_value(json!({
            "id": "42",
            "name": "OpenDeepWiki",
            "organizationName": "AIDotNet",
            "description": "AI docs",
            "address": "https://github.com/AIDotNet/OpenDeepWiki",
            "status": 2,
            "isRecommended": true,
            "createdAt": "2025-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(repo.status, WarehouseStatus::Completed);
        assert!(repo.is_recommended);
        assert_eq!(repo.display_name(), "AIDotNet/OpenDeepWiki");
        assert_eq!(repo.docs_href(), "/AIDotNet/OpenDeepWiki");
        assert_eq!(repo.branch, None);
    }

    #[test]
    fn unknown_status_code_is_pending() {
        let status: WarehouseStatus = serde_json::from_value(json!(99)).unwrap();
        assert_eq!(status, WarehouseStatus::Pending);
        assert_eq!(serde_json::to_value(WarehouseStatus::Failed).unwrap(), json!(5));
    }

    #[test]
    fn docs_href_without_organization() {
        let repo: Repository = serde_json::from_value(json!({ "id": "1", "name": "solo" })).unwrap();
        assert_eq!(repo.docs_href(), "/solo");
        assert_eq!(repo.display_name(), "solo");
    }

    #[test]
    fn normalized_form_drops_blank_optionals() {
        let values = RepositoryFormValues {
            address: "  https://github.com/a/b.git ".into(),
            branch: Some("  ".into()),
            git_user_name: Some(" me ".into()),
            git_password: None,
            email: Some(String::new()),
        }
        .normalized();

        assert_eq!(values.address, "https://github.com/a/b.git");
        assert_eq!(values.branch, None);
        assert_eq!(values.git_user_name.as_deref(), Some("me"));
        assert_eq!(values.email, None);

        let body = serde_json::to_value(&values).unwrap();
        assert_eq!(
            body,
            json!({ "address": "https://github.com/a/b.git", "gitUserName": "me" })
        );
    }
}
