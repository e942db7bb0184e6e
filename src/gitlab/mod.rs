pub mod client;
mod groups;
mod hooks;
mod issues;
mod labels;
mod merge_requests;
mod misc;
mod pipelines;
mod projects;
mod repository;
mod runners;
mod snippets;
pub mod types;
mod users;
mod wiki;

pub use client::{GitLabClient, GITLAB_URL};
pub use groups::DEVELOPER_ACCESS;
pub use types::{
    CommitAction, FileAction, FileChange, JobAction, MemberAction, NoteAction, PipelineAction,
    ScheduleAction, Visibility,
};
