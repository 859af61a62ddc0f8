// crates/tl_core/src/lineup/entry.rs
// Wire types exchanged with the persistence and roster collaborators

use serde::{Deserialize, Serialize};

use crate::formation::SlotId;

/// Player identity as issued by the roster collaborator.
pub type PlayerId = u32;

/// Persisted unit of assignment. `x`/`y`/`label` are present only for
/// freeform slots or when a native slot's defaults were overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub slot_id: SlotId,
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LineupEntry {
    /// Entry for a native template slot with no overrides.
    pub fn native(slot_id: impl Into<SlotId>, player_id: PlayerId) -> Self {
        Self {
            slot_id: slot_id.into(),
            player_id,
            role_tag: None,
            x: None,
            y: None,
            label: None,
        }
    }
}

/// Read-only reference to a player in the roster directory. The engine never
/// mutates these; it only validates that a player id is still live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub jersey_number: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_tag: Option<String>,
}
