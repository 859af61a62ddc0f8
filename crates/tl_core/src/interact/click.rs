// crates/tl_core/src/interact/click.rs
// ClickAssigner: tap-friendly pick-a-player, pick-a-slot assignment

use crate::formation::SlotId;
use crate::lineup::{AssignmentStore, PlayerId};

/// What a click resolved to, for rendering feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Selected(PlayerId),
    Deselected,
    Assigned { player: PlayerId, slot: SlotId },
    Ignored,
}

/// Holds at most one pending player. Selecting another player silently
/// replaces the previous selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickAssigner {
    pending: Option<PlayerId>,
}

impl ClickAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<PlayerId> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Click on a placed or benched player chip: toggle it as pending.
    pub fn click_player(&mut self, player: PlayerId) -> ClickOutcome {
        if self.pending == Some(player) {
            self.pending = None;
            ClickOutcome::Deselected
        } else {
            self.pending = Some(player);
            ClickOutcome::Selected(player)
        }
    }

    /// Click on a slot. With a pending player this commits the assignment
    /// (or deselects if the slot already holds that player); with none it
    /// selects the slot's occupant as a "move this player" shortcut.
    pub fn click_slot(&mut self, slot: &SlotId, store: &mut AssignmentStore) -> ClickOutcome {
        match self.pending.take() {
            Some(player) => {
                if store.occupant(slot) == Some(player) {
                    ClickOutcome::Deselected
                } else {
                    store.assign(player, slot.clone());
                    ClickOutcome::Assigned { player, slot: slot.clone() }
                }
            }
            None => match store.occupant(slot) {
                Some(occupant) => {
                    self.pending = Some(occupant);
                    ClickOutcome::Selected(occupant)
                }
                None => ClickOutcome::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_player_toggles_selection() {
        let mut clicks = ClickAssigner::new();
        assert_eq!(clicks.click_player(7), ClickOutcome::Selected(7));
        assert_eq!(clicks.pending(), Some(7));
        assert_eq!(clicks.click_player(7), ClickOutcome::Deselected);
        assert_eq!(clicks.pending(), None);
    }

    #[test]
    fn selecting_a_second_player_replaces_the_first() {
        let mut clicks = ClickAssigner::new();
        clicks.click_player(7);
        assert_eq!(clicks.click_player(9), ClickOutcome::Selected(9));
        assert_eq!(clicks.pending(), Some(9));
    }

    #[test]
    fn pending_player_commits_on_slot_click() {
        let mut clicks = ClickAssigner::new();
        let mut store = AssignmentStore::new();
        store.move_to_bench(7);

        clicks.click_player(7);
        let outcome = clicks.click_slot(&SlotId::native("ST"), &mut store);
        assert_eq!(outcome, ClickOutcome::Assigned { player: 7, slot: SlotId::native("ST") });
        assert_eq!(store.occupant(&SlotId::native("ST")), Some(7));
        assert!(!store.is_benched(7));
        assert_eq!(clicks.pending(), None);
    }

    #[test]
    fn clicking_the_players_own_slot_deselects() {
        let mut clicks = ClickAssigner::new();
        let mut store = AssignmentStore::new();
        store.assign(7, SlotId::native("ST"));

        clicks.click_player(7);
        let outcome = clicks.click_slot(&SlotId::native("ST"), &mut store);
        assert_eq!(outcome, ClickOutcome::Deselected);
        assert_eq!(store.occupant(&SlotId::native("ST")), Some(7));
        assert_eq!(clicks.pending(), None);
    }

    #[test]
    fn empty_pending_selects_the_slot_occupant() {
        let mut clicks = ClickAssigner::new();
        let mut store = AssignmentStore::new();
        store.assign(9, SlotId::native("RST"));

        let outcome = clicks.click_slot(&SlotId::native("RST"), &mut store);
        assert_eq!(outcome, ClickOutcome::Selected(9));
        assert_eq!(clicks.pending(), Some(9));

        // Second click on another slot moves the occupant there.
        let outcome = clicks.click_slot(&SlotId::native("LST"), &mut store);
        assert_eq!(outcome, ClickOutcome::Assigned { player: 9, slot: SlotId::native("LST") });
        assert_eq!(store.occupant(&SlotId::native("RST")), None);
    }

    #[test]
    fn empty_slot_with_no_pending_is_ignored() {
        let mut clicks = ClickAssigner::new();
        let mut store = AssignmentStore::new();
        assert_eq!(clicks.click_slot(&SlotId::native("ST"), &mut store), ClickOutcome::Ignored);
        assert_eq!(clicks.pending(), None);
    }
}
