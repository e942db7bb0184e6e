use std::collections::HashMap;

use serde::Serialize;

/// `per_page` / `page` query parameters accepted by GitHub list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub per_page: u32,
    pub page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            per_page: 30,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRepository {
    pub name: String,
    pub description: String,
    pub private: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `open` or `closed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    /// Branch holding the changes, `owner:branch` for cross-repository pulls.
    pub head: String,
    pub base: String,
    pub draft: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PullRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    #[default]
    Merge,
    Squash,
    Rebase,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    pub merge_method: MergeMethod,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReleaseParams {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// Annotated tag object.
#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    pub tag: String,
    pub message: String,
    /// SHA of the tagged object.
    pub object: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

impl NewTag {
    pub fn for_commit(tag: &str, message: &str, sha: &str) -> Self {
        Self {
            tag: tag.to_string(),
            message: message.to_string(),
            object: sha.to_string(),
            object_type: "commit".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HookParams {
    /// `url`, `content_type`, `secret`, `insecure_ssl`.
    pub config: HashMap<String, String>,
    pub events: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hireable: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamUpdate {
    pub name: String,
    pub description: String,
    /// `secret` or `closed`.
    pub privacy: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GistFile {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_defaults() {
        let page = Page::default();
        assert_eq!(page.per_page, 30);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_partial_updates_omit_unset_fields() {
        let update = RepositoryUpdate {
            description: Some("new".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"description": "new"}));
        assert_eq!(serde_json::to_value(IssueUpdate::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_tag_type_field_name() {
        let tag = NewTag::for_commit("v1.0.0", "First release", "abc123");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "tag": "v1.0.0",
                "message": "First release",
                "object": "abc123",
                "type": "commit"
            })
        );
    }

    #[test]
    fn test_merge_method_lowercase() {
        let options = MergeOptions {
            merge_method: MergeMethod::Squash,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"merge_method": "squash"})
        );
    }
}
