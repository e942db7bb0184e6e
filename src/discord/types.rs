use serde::Serialize;
use serde_json::Value;

/// Application (slash) command definition.
#[derive(Debug, Clone, Serialize)]
pub struct CommandParams {
    pub name: String,
    pub description: String,
    pub options: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleParams {
    pub name: String,
    /// Permission bit set.
    pub permissions: u64,
    /// RGB color as an integer.
    pub color: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceStateUpdate {
    pub channel_id: String,
    pub self_mute: bool,
    pub self_deaf: bool,
}
