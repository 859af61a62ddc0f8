// crates/tl_core/src/lineup/detect.rs
// FormationDetector: canonical label from the tier composition of the
// currently filled positions.

use crate::formation::Tier;

/// Detection is meaningful once at most one slot is unfilled; a missing
/// keeper should not block it. Callers gate on this before displaying or
/// persisting the detected label.
pub fn detection_ready(filled: usize, slot_count: usize) -> bool {
    filled + 1 >= slot_count
}

/// Derive the canonical formation label from filled-slot tiers. The keeper
/// is excluded from the tally; tiers with no occupants are omitted entirely,
/// so a 4-3-3 with nobody in the DMID or AMID band reads "4-3-3" while one
/// routed through a single holding mid reads "4-1-2-3".
pub fn detect_formation(tiers: &[Tier]) -> String {
    let mut def = 0usize;
    let mut dmid = 0usize;
    let mut mid = 0usize;
    let mut amid = 0usize;
    let mut fwd = 0usize;
    for tier in tiers {
        match tier {
            Tier::Goalkeeper => {}
            Tier::Defender => def += 1,
            Tier::DefensiveMidfielder => dmid += 1,
            Tier::Midfielder => mid += 1,
            Tier::AttackingMidfielder => amid += 1,
            Tier::Forward => fwd += 1,
        }
    }

    // The diamond is the one shape the plain depth join misreads.
    if def == 4 && dmid == 1 && mid == 2 && amid == 1 && fwd == 2 {
        return "4-4-2 Diamond".to_string();
    }

    [def, dmid, mid, amid, fwd]
        .iter()
        .filter(|count| **count > 0)
        .map(|count| count.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Tier::*;

    fn tiers(counts: &[(Tier, usize)]) -> Vec<Tier> {
        counts.iter().flat_map(|(tier, n)| std::iter::repeat(*tier).take(*n)).collect()
    }

    #[test]
    fn joins_nonzero_tiers_in_depth_order() {
        let filled = tiers(&[(Goalkeeper, 1), (Defender, 4), (DefensiveMidfielder, 2), (AttackingMidfielder, 3), (Forward, 1)]);
        assert_eq!(detect_formation(&filled), "4-2-3-1");
    }

    #[test]
    fn zero_tiers_are_omitted_not_padded() {
        let flat = tiers(&[(Defender, 3), (Midfielder, 4), (Forward, 3)]);
        assert_eq!(detect_formation(&flat), "3-4-3");

        let routed = tiers(&[(Defender, 4), (DefensiveMidfielder, 1), (Midfielder, 2), (Forward, 3)]);
        assert_eq!(detect_formation(&routed), "4-1-2-3");
    }

    #[test]
    fn diamond_special_case_beats_the_generic_join() {
        let diamond = tiers(&[
            (Goalkeeper, 1),
            (Defender, 4),
            (DefensiveMidfielder, 1),
            (Midfielder, 2),
            (AttackingMidfielder, 1),
            (Forward, 2),
        ]);
        assert_eq!(detect_formation(&diamond), "4-4-2 Diamond");

        // One forward fewer and the literal no longer applies.
        let not_diamond = tiers(&[
            (Defender, 4),
            (DefensiveMidfielder, 1),
            (Midfielder, 2),
            (AttackingMidfielder, 1),
            (Forward, 1),
        ]);
        assert_eq!(detect_formation(&not_diamond), "4-1-2-1-1");
    }

    #[test]
    fn readiness_tolerates_one_unfilled_slot() {
        assert!(detection_ready(11, 11));
        assert!(detection_ready(10, 11));
        assert!(!detection_ready(9, 11));
        assert!(detection_ready(6, 7));
    }
}
