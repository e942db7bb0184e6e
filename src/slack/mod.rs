mod channels;
pub mod client;
mod conversations;
mod files;
mod messages;
mod pins;
mod reactions;
mod reminders;
mod search;
mod team;
mod usergroups;
mod users;
mod webhook;

pub use client::{SlackClient, SLACK_API_URL};
pub use webhook::send_webhook_message;
