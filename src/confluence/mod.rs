mod attachments;
pub mod client;
mod comments;
mod groups;
mod labels;
mod pages;
mod permissions;
mod search;
mod spaces;
mod users;
mod webhooks;

pub use client::ConfluenceClient;
