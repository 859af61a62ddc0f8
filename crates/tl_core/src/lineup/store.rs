// crates/tl_core/src/lineup/store.rs
// AssignmentStore: the authoritative player -> slot mapping for one editing
// session, plus the bench and freeform metadata.

use std::collections::HashMap;

use crate::formation::{FormationTemplate, PitchPoint, SlotId, Tier};
use crate::lineup::detect::{detect_formation, detection_ready};
use crate::lineup::entry::{LineupEntry, PlayerId, PlayerRef};
use crate::lineup::resolve::{resolve_labels, resolve_positions};

/// Allocator for session-scoped freeform slot ids. Indices are opaque and
/// monotonic; `seed` raises the watermark above every persisted suffix so
/// continued editing never reuses an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeformIdArena {
    next: u32,
}

impl FreeformIdArena {
    pub fn allocate(&mut self) -> SlotId {
        let id = SlotId::freeform(self.next);
        self.next += 1;
        id
    }

    /// Only ids carrying the freeform prefix count. A native slot id that
    /// ever reused the prefix would make collisions possible again; the
    /// catalog tests guard against that.
    pub fn seed<'a>(&mut self, ids: impl Iterator<Item = &'a SlotId>) {
        for id in ids {
            if let Some(index) = id.freeform_index() {
                self.next = self.next.max(index + 1);
            }
        }
    }
}

/// In-memory assignment state for one lineup editing session.
///
/// Invariants, re-established by every operation before it returns:
/// - a player id appears at most once across assignment values and the bench
/// - freeform coordinate/label/role-tag keys are all assignment keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentStore {
    assignments: HashMap<SlotId, PlayerId>,
    bench: Vec<PlayerId>,
    freeform_coords: HashMap<SlotId, PitchPoint>,
    freeform_labels: HashMap<SlotId, String>,
    role_tags: HashMap<SlotId, String>,
    arena: FreeformIdArena,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild session state from a persisted snapshot. The arena is
    /// reseeded above the highest persisted freeform suffix.
    pub fn hydrate(entries: &[LineupEntry], bench: &[PlayerId]) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.assignments.insert(entry.slot_id.clone(), entry.player_id);
            if let (Some(x), Some(y)) = (entry.x, entry.y) {
                store.freeform_coords.insert(entry.slot_id.clone(), PitchPoint::new(x, y));
            }
            if let Some(label) = &entry.label {
                store.freeform_labels.insert(entry.slot_id.clone(), label.clone());
            }
            if let Some(tag) = &entry.role_tag {
                store.role_tags.insert(entry.slot_id.clone(), tag.clone());
            }
        }
        for player in bench {
            if !store.bench.contains(player) && store.slot_of(*player).is_none() {
                store.bench.push(*player);
            }
        }
        store.arena.seed(store.assignments.keys());
        store
    }

    /// Hydrate, dropping entries and bench ids whose player no longer exists
    /// in the roster directory. Deleted players disappear silently.
    pub fn hydrate_with_roster(
        entries: &[LineupEntry],
        bench: &[PlayerId],
        roster: &[PlayerRef],
    ) -> Self {
        let live: Vec<LineupEntry> = entries
            .iter()
            .filter(|e| roster.iter().any(|p| p.id == e.player_id))
            .cloned()
            .collect();
        let bench: Vec<PlayerId> = bench
            .iter()
            .copied()
            .filter(|id| roster.iter().any(|p| p.id == *id))
            .collect();
        if live.len() != entries.len() {
            log::debug!("dropped {} lineup entries for deleted players", entries.len() - live.len());
        }
        Self::hydrate(&live, &bench)
    }

    /// Serializable snapshot, sorted by slot id for deterministic output.
    pub fn to_entries(&self) -> Vec<LineupEntry> {
        let mut entries: Vec<LineupEntry> = self
            .assignments
            .iter()
            .map(|(slot, player)| LineupEntry {
                slot_id: slot.clone(),
                player_id: *player,
                role_tag: self.role_tags.get(slot).cloned(),
                x: self.freeform_coords.get(slot).map(|p| p.x),
                y: self.freeform_coords.get(slot).map(|p| p.y),
                label: self.freeform_labels.get(slot).cloned(),
            })
            .collect();
        entries.sort_by(|a, b| a.slot_id.cmp(&b.slot_id));
        entries
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn occupant(&self, slot: &SlotId) -> Option<PlayerId> {
        self.assignments.get(slot).copied()
    }

    pub fn slot_of(&self, player: PlayerId) -> Option<&SlotId> {
        self.assignments.iter().find(|(_, p)| **p == player).map(|(slot, _)| slot)
    }

    pub fn is_benched(&self, player: PlayerId) -> bool {
        self.bench.contains(&player)
    }

    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    pub fn assignments(&self) -> &HashMap<SlotId, PlayerId> {
        &self.assignments
    }

    pub fn freeform_position(&self, slot: &SlotId) -> Option<PitchPoint> {
        self.freeform_coords.get(slot).copied()
    }

    pub fn freeform_label(&self, slot: &SlotId) -> Option<&String> {
        self.freeform_labels.get(slot)
    }

    pub fn role_tag(&self, slot: &SlotId) -> Option<&String> {
        self.role_tags.get(slot)
    }

    pub fn filled_count(&self) -> usize {
        self.assignments.len()
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Resolved geometry for every occupied slot (freeform override wins,
    /// else the template's native position; gaps omitted).
    pub fn resolved_positions(&self, formation: &FormationTemplate) -> HashMap<SlotId, PitchPoint> {
        resolve_positions(self.assignments.keys(), formation, &self.freeform_coords)
    }

    pub fn resolved_labels(&self, formation: &FormationTemplate) -> HashMap<SlotId, String> {
        resolve_labels(self.assignments.keys(), formation, &self.freeform_labels)
    }

    /// Tier of every occupied slot with known geometry: native tier for
    /// template slots, depth classification for freeform ones.
    pub fn filled_tiers(&self, formation: &FormationTemplate) -> Vec<Tier> {
        self.assignments
            .keys()
            .filter_map(|slot| {
                if let Some(native) = formation.slot(slot) {
                    Some(native.tier)
                } else {
                    self.freeform_coords.get(slot).map(|p| Tier::classify(p.y))
                }
            })
            .collect()
    }

    /// Canonical formation label, gated until at most one slot is unfilled
    /// (a missing keeper should not block detection).
    pub fn detected_formation(&self, formation: &FormationTemplate) -> Option<String> {
        if !detection_ready(self.filled_count(), formation.slot_count()) {
            return None;
        }
        Some(detect_formation(&self.filled_tiers(formation)))
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Place a player on a slot. The player's previous location (slot or
    /// bench) is vacated first; a displaced occupant becomes unassigned.
    pub fn assign(&mut self, player: PlayerId, target: SlotId) {
        self.remove_from_bench(player);
        let carried_tag = self.vacate(player);
        if let Some(displaced) = self.assignments.insert(target.clone(), player) {
            if displaced != player {
                log::debug!("player {} displaced from {}", displaced, target);
            }
        }
        // The previous occupant's role tag leaves with them.
        self.role_tags.remove(&target);
        if let Some(tag) = carried_tag {
            self.role_tags.insert(target, tag);
        }
    }

    /// Slot-to-slot swap: the displaced occupant takes the mover's origin
    /// slot, so both slots stay filled. Degrades to `assign` when the mover
    /// has no origin slot or the target is free.
    pub fn swap_assign(&mut self, player: PlayerId, target: SlotId) {
        let origin = self.slot_of(player).cloned();
        let displaced = self.occupant(&target);
        match (origin, displaced) {
            (Some(origin), Some(other)) if other != player && origin != target => {
                self.assignments.insert(target.clone(), player);
                self.assignments.insert(origin.clone(), other);
                // Freeform geometry belongs to the slot; role tags travel
                // with the player.
                let tag_a = self.role_tags.remove(&origin);
                let tag_b = self.role_tags.remove(&target);
                if let Some(tag) = tag_a {
                    self.role_tags.insert(target.clone(), tag);
                }
                if let Some(tag) = tag_b {
                    self.role_tags.insert(origin.clone(), tag);
                }
                log::debug!("swapped {} and {} across {} / {}", player, other, origin, target);
            }
            _ => self.assign(player, target),
        }
    }

    /// Place a player at an ad hoc point, allocating a fresh freeform slot.
    /// `carry_label` is typically the label of the slot being vacated.
    pub fn move_to_freeform(
        &mut self,
        player: PlayerId,
        x: f32,
        y: f32,
        carry_label: Option<String>,
    ) -> SlotId {
        self.remove_from_bench(player);
        let carried_tag = self.vacate(player);
        let slot = self.arena.allocate();
        self.assignments.insert(slot.clone(), player);
        self.freeform_coords.insert(slot.clone(), PitchPoint::new(x, y));
        if let Some(label) = carry_label {
            self.freeform_labels.insert(slot.clone(), label);
        }
        if let Some(tag) = carried_tag {
            self.role_tags.insert(slot.clone(), tag);
        }
        log::debug!("player {} moved to freeform slot {}", player, slot);
        slot
    }

    /// Remove any slot assignment and add the player to the bench.
    pub fn move_to_bench(&mut self, player: PlayerId) {
        self.vacate(player);
        if !self.bench.contains(&player) {
            self.bench.push(player);
        }
    }

    /// Remove the player from slot and bench alike; "roster" is the implicit
    /// available state.
    pub fn move_to_roster(&mut self, player: PlayerId) {
        self.vacate(player);
        self.remove_from_bench(player);
    }

    /// Remap assignments onto a new formation template. Slots native to the
    /// new template and existing freeform slots stay put; native slots of
    /// the old template with no counterpart degrade to freeform at their old
    /// geometry, keeping label and role tag.
    pub fn change_formation(&mut self, old: &FormationTemplate, new: &FormationTemplate) {
        let slots: Vec<SlotId> = self.assignments.keys().cloned().collect();
        let mut degraded = 0usize;
        for slot in slots {
            if new.has_slot(&slot) || slot.is_freeform() {
                continue;
            }
            // Orphaned id known to neither template has no geometry to
            // carry; leave it keyed as-is and let the resolver omit it.
            let Some(native) = old.slot(&slot) else { continue };
            let Some(player) = self.assignments.remove(&slot) else { continue };
            let tag = self.role_tags.remove(&slot);
            let replacement = self.arena.allocate();
            self.assignments.insert(replacement.clone(), player);
            self.freeform_coords.insert(replacement.clone(), native.point());
            self.freeform_labels.insert(replacement.clone(), native.label.clone());
            if let Some(tag) = tag {
                self.role_tags.insert(replacement, tag);
            }
            degraded += 1;
        }
        self.prune_orphan_metadata();
        if degraded > 0 {
            log::info!(
                "formation change {} -> {}: {} slots degraded to freeform",
                old.id,
                new.id,
                degraded
            );
        }
    }

    // ------------------------------------------------------------------

    /// Remove the player's current slot assignment along with that slot's
    /// freeform metadata. Returns the role tag so moves can carry it.
    fn vacate(&mut self, player: PlayerId) -> Option<String> {
        let slot = self.slot_of(player).cloned()?;
        self.assignments.remove(&slot);
        self.freeform_coords.remove(&slot);
        self.freeform_labels.remove(&slot);
        self.role_tags.remove(&slot)
    }

    fn remove_from_bench(&mut self, player: PlayerId) {
        self.bench.retain(|p| *p != player);
    }

    fn prune_orphan_metadata(&mut self) {
        let assignments = &self.assignments;
        self.freeform_coords.retain(|slot, _| assignments.contains_key(slot));
        self.freeform_labels.retain(|slot, _| assignments.contains_key(slot));
        self.role_tags.retain(|slot, _| assignments.contains_key(slot));
    }

    #[cfg(test)]
    pub(crate) fn invariants_hold(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        for player in self.assignments.values().chain(self.bench.iter()) {
            if !seen.insert(*player) {
                return false;
            }
        }
        self.freeform_coords.keys().all(|s| self.assignments.contains_key(s))
            && self.freeform_labels.keys().all(|s| self.assignments.contains_key(s))
            && self.role_tags.keys().all(|s| self.assignments.contains_key(s))
    }
}
