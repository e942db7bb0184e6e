mod bans;
mod channels;
pub mod client;
mod interactions;
mod invites;
mod messages;
mod roles;
mod servers;
pub mod types;
mod users;
mod voice;
mod webhooks;

pub use client::{DiscordClient, DISCORD_API_URL};
pub use types::{CommandParams, RoleParams, VoiceStateUpdate};
