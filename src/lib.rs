pub mod config;
pub mod confluence;
pub mod discord;
pub mod github;
pub mod gitlab;
pub mod http;
pub mod jira;
pub mod providers;
pub mod slack;
