// crates/tl_core/src/lineup/resolve.rs
// SlotResolver: pure derived views over the assignment mapping

use std::collections::HashMap;

use crate::formation::{FormationTemplate, PitchPoint, SlotId, Tier};
use crate::lineup::entry::LineupEntry;

/// Resolved (x, y) for every active slot. A freeform override wins over the
/// template's native position; a slot with neither is a data-integrity gap
/// and is omitted (the render layer tolerates missing geometry).
pub fn resolve_positions<'a>(
    active: impl Iterator<Item = &'a SlotId>,
    formation: &FormationTemplate,
    overrides: &HashMap<SlotId, PitchPoint>,
) -> HashMap<SlotId, PitchPoint> {
    let mut resolved = HashMap::new();
    for slot in active {
        let point = overrides
            .get(slot)
            .copied()
            .or_else(|| formation.slot(slot).map(|s| s.point()));
        if let Some(point) = point {
            resolved.insert(slot.clone(), point);
        }
    }
    resolved
}

/// Resolved display label for every active slot; same precedence as
/// `resolve_positions`.
pub fn resolve_labels<'a>(
    active: impl Iterator<Item = &'a SlotId>,
    formation: &FormationTemplate,
    overrides: &HashMap<SlotId, String>,
) -> HashMap<SlotId, String> {
    let mut resolved = HashMap::new();
    for slot in active {
        let label = overrides
            .get(slot)
            .cloned()
            .or_else(|| formation.slot(slot).map(|s| s.label.clone()));
        if let Some(label) = label {
            resolved.insert(slot.clone(), label);
        }
    }
    resolved
}

/// Tier of each entry's slot, resolved against that lineup's own formation:
/// native slots use the template tier, freeform slots classify their pitch
/// depth. Entries with no geometry at all carry no tier.
pub fn resolve_tiers(
    entries: &[LineupEntry],
    formation: &FormationTemplate,
) -> HashMap<SlotId, Tier> {
    let mut tiers = HashMap::new();
    for entry in entries {
        let tier = formation
            .slot(&entry.slot_id)
            .map(|s| s.tier)
            .or_else(|| entry.y.map(Tier::classify));
        if let Some(tier) = tier {
            tiers.insert(entry.slot_id.clone(), tier);
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::find_template;

    #[test]
    fn override_wins_over_native_position() {
        let t442 = find_template("T442").unwrap();
        let active = vec![SlotId::native("GK"), SlotId::native("LM")];
        let mut overrides = HashMap::new();
        overrides.insert(SlotId::native("LM"), PitchPoint::new(22.0, 61.0));

        let resolved = resolve_positions(active.iter(), t442, &overrides);
        assert_eq!(resolved[&SlotId::native("LM")], PitchPoint::new(22.0, 61.0));
        assert_eq!(resolved[&SlotId::native("GK")], PitchPoint::new(50.0, 5.0));
    }

    #[test]
    fn slot_without_geometry_is_omitted() {
        let t442 = find_template("T442").unwrap();
        let active = vec![SlotId::native("GK"), SlotId::native("XYZ")];
        let resolved = resolve_positions(active.iter(), t442, &HashMap::new());
        assert_eq!(resolved.len(), 1);
        assert!(!resolved.contains_key(&SlotId::native("XYZ")));

        let labels = resolve_labels(active.iter(), t442, &HashMap::new());
        assert_eq!(labels.get(&SlotId::native("GK")).map(String::as_str), Some("GK"));
        assert!(!labels.contains_key(&SlotId::native("XYZ")));
    }

    #[test]
    fn tiers_resolve_native_then_freeform_depth() {
        let t442 = find_template("T442").unwrap();
        let entries = vec![
            LineupEntry::native("LCB", 5),
            LineupEntry {
                slot_id: SlotId::native("ff-0"),
                player_id: 10,
                role_tag: None,
                x: Some(50.0),
                y: Some(80.0),
                label: None,
            },
            LineupEntry::native("XYZ", 11), // no geometry anywhere
        ];
        let tiers = resolve_tiers(&entries, t442);
        assert_eq!(tiers.get(&SlotId::native("LCB")), Some(&Tier::Defender));
        assert_eq!(tiers.get(&SlotId::native("ff-0")), Some(&Tier::Forward));
        assert!(!tiers.contains_key(&SlotId::native("XYZ")));
    }
}
