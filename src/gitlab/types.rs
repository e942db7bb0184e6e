use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Whether a `manage_*` call attaches or detaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Add,
    Remove,
}

impl MemberAction {
    pub fn method(self) -> Method {
        match self {
            MemberAction::Add => Method::POST,
            MemberAction::Remove => Method::DELETE,
        }
    }
}

/// Note (comment) operation on an issue or merge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    Add { body: String },
    Update { note_id: u64, body: String },
    Delete { note_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineAction {
    Retry,
    Cancel,
}

impl PipelineAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineAction::Retry => "retry",
            PipelineAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Play,
    Retry,
    Cancel,
    Erase,
}

impl JobAction {
    pub fn as_str(self) -> &'static str {
        match self {
            JobAction::Play => "play",
            JobAction::Retry => "retry",
            JobAction::Cancel => "cancel",
            JobAction::Erase => "erase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    Play,
    TakeOwnership,
}

impl ScheduleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleAction::Play => "play",
            ScheduleAction::TakeOwnership => "take_ownership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    CherryPick,
    Revert,
}

impl CommitAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitAction::CherryPick => "cherry_pick",
            CommitAction::Revert => "revert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Update,
    Delete,
}

impl FileAction {
    pub fn method(self) -> Method {
        match self {
            FileAction::Create => Method::POST,
            FileAction::Update => Method::PUT,
            FileAction::Delete => Method::DELETE,
        }
    }
}

/// A single-file commit through the repository files API.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub action: FileAction,
    pub branch: String,
    /// Ignored for deletions.
    pub content: String,
    pub commit_message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Internal,
    Public,
}
