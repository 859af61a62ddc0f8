// crates/tl_core/src/lineup/diff.rs
// LineupDiffEngine: churn heuristic between the live lineup and the one
// fielded last match.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::formation::{SlotId, Tier};
use crate::lineup::entry::{LineupEntry, PlayerId};

/// Spine changes at or above this count flag a rebuilt spine.
pub const NEW_SPINE_THRESHOLD: usize = 3;

/// Total changes at or above this count earn the generic banner.
pub const CHURN_MESSAGE_THRESHOLD: usize = 3;

/// Summary of how much a lineup moved since the previous match. Retention
/// only: which slot a kept player stands in is deliberately ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupDiff {
    pub total_changes: usize,
    pub spine_changes: usize,
    pub new_spine: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Compare the current lineup against the previous one. Tier maps are each
/// lineup's own geometry (see `resolve_tiers`); a player whose slot has no
/// known tier never counts toward the spine.
pub fn compare_lineups(
    current: &[LineupEntry],
    previous: &[LineupEntry],
    current_tiers: &HashMap<SlotId, Tier>,
    previous_tiers: &HashMap<SlotId, Tier>,
) -> LineupDiff {
    let previous_players: HashSet<PlayerId> = previous.iter().map(|e| e.player_id).collect();
    let total_changes = current
        .iter()
        .filter(|e| !previous_players.contains(&e.player_id))
        .count();

    let previous_spine: HashSet<PlayerId> = spine_players(previous, previous_tiers);
    let spine_changes = spine_players(current, current_tiers)
        .difference(&previous_spine)
        .count();

    let new_spine = spine_changes >= NEW_SPINE_THRESHOLD;
    let message = if new_spine {
        Some("New Spine This Week".to_string())
    } else if total_changes >= CHURN_MESSAGE_THRESHOLD {
        Some(format!("{} Changes from Last Match", total_changes))
    } else {
        None
    };

    LineupDiff { total_changes, spine_changes, new_spine, message }
}

fn spine_players(
    entries: &[LineupEntry],
    tiers: &HashMap<SlotId, Tier>,
) -> HashSet<PlayerId> {
    entries
        .iter()
        .filter(|e| tiers.get(&e.slot_id).is_some_and(Tier::is_spine))
        .map(|e| e.player_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::find_template;
    use crate::lineup::resolve::resolve_tiers;

    // 4-2-3-1 baseline: players 1..=11 in template order.
    fn baseline() -> Vec<LineupEntry> {
        ["GK", "LB", "LCB", "RCB", "RB", "LDM", "RDM", "LAM", "CAM", "RAM", "ST"]
            .iter()
            .enumerate()
            .map(|(i, slot)| LineupEntry::native(*slot, i as PlayerId + 1))
            .collect()
    }

    fn diff(current: &[LineupEntry], previous: &[LineupEntry]) -> LineupDiff {
        let t4231 = find_template("T4231").unwrap();
        compare_lineups(
            current,
            previous,
            &resolve_tiers(current, t4231),
            &resolve_tiers(previous, t4231),
        )
    }

    #[test]
    fn identical_lineups_report_nothing() {
        let d = diff(&baseline(), &baseline());
        assert_eq!(d.total_changes, 0);
        assert_eq!(d.spine_changes, 0);
        assert!(!d.new_spine);
        assert_eq!(d.message, None);
    }

    #[test]
    fn three_spine_changes_flag_a_new_spine() {
        // Swap in new players at LCB, LDM and ST: all spine tiers.
        let mut current = baseline();
        current[2].player_id = 21;
        current[5].player_id = 22;
        current[10].player_id = 23;

        let d = diff(&current, &baseline());
        assert_eq!(d.total_changes, 3);
        assert_eq!(d.spine_changes, 3);
        assert!(d.new_spine);
        assert_eq!(d.message.as_deref(), Some("New Spine This Week"));
    }

    #[test]
    fn attacking_mid_churn_is_not_a_new_spine() {
        // Same number of changes, all in the AMID band.
        let mut current = baseline();
        current[7].player_id = 21;
        current[8].player_id = 22;
        current[9].player_id = 23;

        let d = diff(&current, &baseline());
        assert_eq!(d.total_changes, 3);
        assert_eq!(d.spine_changes, 0);
        assert!(!d.new_spine);
        assert_eq!(d.message.as_deref(), Some("3 Changes from Last Match"));
    }

    #[test]
    fn small_churn_stays_silent() {
        let mut current = baseline();
        current[8].player_id = 21;
        current[9].player_id = 22;

        let d = diff(&current, &baseline());
        assert_eq!(d.total_changes, 2);
        assert_eq!(d.message, None);
    }

    #[test]
    fn retained_player_changing_slot_is_not_a_change() {
        // Rotate the front three among themselves.
        let mut current = baseline();
        current[7].player_id = 9;
        current[8].player_id = 10;
        current[9].player_id = 8;

        let d = diff(&current, &baseline());
        assert_eq!(d.total_changes, 0);
        assert_eq!(d.message, None);
    }

    #[test]
    fn spine_membership_uses_each_lineups_own_geometry() {
        // Player 30 enters on a freeform slot deep in defence: spine by
        // depth classification even though the slot is not native.
        let mut current = baseline();
        current[1].player_id = 21; // LB
        current[2].player_id = 22; // LCB
        current.remove(10); // drop the native ST entry
        current.push(LineupEntry {
            slot_id: SlotId::native("ff-0"),
            player_id: 30,
            role_tag: None,
            x: Some(50.0),
            y: Some(20.0),
            label: None,
        });

        let d = diff(&current, &baseline());
        assert_eq!(d.spine_changes, 3);
        assert!(d.new_spine);
    }
}
