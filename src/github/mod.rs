pub mod client;
mod gists;
mod issues;
mod orgs;
mod projects;
mod pulls;
mod releases;
mod repos;
mod search;
pub mod types;
mod users;
mod webhooks;
mod workflows;

pub use client::{GitHubClient, GITHUB_API_URL};
pub use types::{
    GistFile, HookParams, IssueUpdate, MergeMethod, MergeOptions, NewIssue, NewPullRequest,
    NewRepository, NewTag, Page, ProfileUpdate, PullRequestUpdate, ReleaseParams,
    RepositoryUpdate, TeamUpdate,
};
