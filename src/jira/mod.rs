mod boards;
pub mod client;
mod components;
mod filters;
mod groups;
mod issues;
mod projects;
mod sprints;
mod webhooks;
mod worklogs;

pub use client::JiraClient;
