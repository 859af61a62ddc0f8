// crates/tl_core/src/api.rs
// JSON entry points so hosts can integrate without linking the Rust types.

use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};
use crate::formation::{blank_template, find_template, FormationTemplate, GameFormat};
use crate::lineup::{
    compare_lineups, detect_formation, detection_ready, resolve_tiers, LineupDiff, LineupEntry,
};

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub entries: Vec<LineupEntry>,
    pub formation: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    /// Detected label; absent while too few slots are filled.
    pub label: Option<String>,
    pub filled: usize,
    pub slot_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub current: Vec<LineupEntry>,
    pub previous: Vec<LineupEntry>,
    pub current_formation: String,
    pub previous_formation: String,
}

/// Detect the formation label of a saved lineup. An unknown formation id
/// degrades to no native geometry: entries resolve through their own
/// freeform coordinates and the entry count stands in for the slot count.
pub fn detect_formation_json(request: &str) -> Result<String> {
    let request: DetectRequest =
        serde_json::from_str(request).map_err(|e| LineupError::Deserialization(e.to_string()))?;
    let blank = blank_template(GameFormat::ElevenASide);
    let template = find_template(&request.formation);
    let slot_count = template
        .map(FormationTemplate::slot_count)
        .unwrap_or(request.entries.len());
    let geometry = template.unwrap_or(&blank);

    let filled = request.entries.len();
    let label = if detection_ready(filled, slot_count) {
        let tiers: Vec<_> = resolve_tiers(&request.entries, geometry).into_values().collect();
        Some(detect_formation(&tiers))
    } else {
        None
    };

    let response = DetectResponse { label, filled, slot_count };
    serde_json::to_string(&response).map_err(|e| LineupError::Serialization(e.to_string()))
}

/// Diff a lineup against the previous match's, each resolved under its own
/// formation.
pub fn compare_lineups_json(request: &str) -> Result<String> {
    let request: CompareRequest =
        serde_json::from_str(request).map_err(|e| LineupError::Deserialization(e.to_string()))?;
    let diff = compare_request(&request);
    serde_json::to_string(&diff).map_err(|e| LineupError::Serialization(e.to_string()))
}

fn compare_request(request: &CompareRequest) -> LineupDiff {
    let blank = blank_template(GameFormat::ElevenASide);
    let current_template = find_template(&request.current_formation).unwrap_or(&blank);
    let previous_template = find_template(&request.previous_formation).unwrap_or(&blank);
    compare_lineups(
        &request.current,
        &request.previous,
        &resolve_tiers(&request.current, current_template),
        &resolve_tiers(&request.previous, previous_template),
    )
}
