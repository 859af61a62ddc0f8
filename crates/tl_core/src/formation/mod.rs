// crates/tl_core/src/formation/mod.rs
// Formation types and the per-format template catalog

pub mod catalog;

pub use catalog::{blank_template, find_template, templates_for, CATALOG};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pitch depth category. Used for rendering grouping, formation detection
/// and spine classification in the lineup diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Goalkeeper,
    Defender,
    DefensiveMidfielder,
    Midfielder,
    AttackingMidfielder,
    Forward,
}

impl Tier {
    /// Outfield tiers in fixed depth order, own goal first. Formation
    /// detection walks this order when joining the count label.
    pub const OUTFIELD_DEPTH_ORDER: [Tier; 5] = [
        Tier::Defender,
        Tier::DefensiveMidfielder,
        Tier::Midfielder,
        Tier::AttackingMidfielder,
        Tier::Forward,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::DefensiveMidfielder => "DMID",
            Self::Midfielder => "MID",
            Self::AttackingMidfielder => "AMID",
            Self::Forward => "FWD",
        }
    }

    /// Spine tiers for the lineup diff: keeper, back line, holding mid and
    /// the front line. MID/AMID players rotate week to week and are
    /// deliberately excluded.
    pub fn is_spine(&self) -> bool {
        matches!(
            self,
            Self::Goalkeeper | Self::Defender | Self::DefensiveMidfielder | Self::Forward
        )
    }

    /// Classify a pitch depth (0 = own goal, 100 = opponent goal) into a
    /// tier. Thresholds sit between the bands the catalog templates use, so
    /// a freeform slot dropped near a native line lands in the same tier.
    pub fn classify(y: f32) -> Tier {
        if y < 12.0 {
            Tier::Goalkeeper
        } else if y < 28.0 {
            Tier::Defender
        } else if y < 43.0 {
            Tier::DefensiveMidfielder
        } else if y < 57.0 {
            Tier::Midfielder
        } else if y < 72.0 {
            Tier::AttackingMidfielder
        } else {
            Tier::Forward
        }
    }
}

/// Prefix reserved for session-allocated freeform slot ids. Formation
/// templates must never use it for a native slot id.
pub const FREEFORM_PREFIX: &str = "ff-";

/// Identity of a position slot, native ("LCB", "RW") or freeform ("ff-3").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn native(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub(crate) fn freeform(index: u32) -> Self {
        Self(format!("{}{}", FREEFORM_PREFIX, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_freeform(&self) -> bool {
        self.0.starts_with(FREEFORM_PREFIX)
    }

    /// Numeric suffix of a freeform id, used to reseed the arena on hydrate.
    pub fn freeform_index(&self) -> Option<u32> {
        self.0.strip_prefix(FREEFORM_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A point in the 0–100 pitch data space. x runs left touchline to right
/// touchline, y runs own goal to opponent goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: f32,
    pub y: f32,
}

impl PitchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }

    pub fn distance_to(&self, other: PitchPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A named position inside a formation template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSlot {
    pub id: SlotId,
    pub label: String,
    pub tier: Tier,
    pub x: f32,
    pub y: f32,
}

impl PositionSlot {
    pub fn new(id: &str, tier: Tier, x: f32, y: f32) -> Self {
        Self {
            id: SlotId::native(id),
            label: id.to_string(),
            tier,
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    pub fn point(&self) -> PitchPoint {
        PitchPoint::new(self.x, self.y)
    }
}

/// Game format a template is scoped to. Each format has its own catalog and
/// its own expected slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameFormat {
    ElevenASide,
    NineASide,
    SevenASide,
    FiveASide,
}

impl GameFormat {
    pub fn all() -> [GameFormat; 4] {
        [Self::ElevenASide, Self::NineASide, Self::SevenASide, Self::FiveASide]
    }

    pub fn player_count(&self) -> usize {
        match self {
            Self::ElevenASide => 11,
            Self::NineASide => 9,
            Self::SevenASide => 7,
            Self::FiveASide => 5,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::ElevenASide => "11v11",
            Self::NineASide => "9v9",
            Self::SevenASide => "7v7",
            Self::FiveASide => "5v5",
        }
    }

    pub fn from_id(id: &str) -> Option<GameFormat> {
        Self::all().into_iter().find(|f| f.id() == id)
    }
}

/// A named formation: an id stable across saves, a display name and the
/// native position slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationTemplate {
    pub id: String,
    pub name: String,
    pub format: GameFormat,
    pub slots: Vec<PositionSlot>,
}

impl FormationTemplate {
    pub fn new(id: &str, name: &str, format: GameFormat, slots: Vec<PositionSlot>) -> Self {
        Self { id: id.to_string(), name: name.to_string(), format, slots }
    }

    pub fn slot(&self, id: &SlotId) -> Option<&PositionSlot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    pub fn has_slot(&self, id: &SlotId) -> bool {
        self.slot(id).is_some()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_classify_matches_catalog_bands() {
        assert_eq!(Tier::classify(5.0), Tier::Goalkeeper);
        assert_eq!(Tier::classify(20.0), Tier::Defender);
        assert_eq!(Tier::classify(35.0), Tier::DefensiveMidfielder);
        assert_eq!(Tier::classify(50.0), Tier::Midfielder);
        assert_eq!(Tier::classify(65.0), Tier::AttackingMidfielder);
        assert_eq!(Tier::classify(85.0), Tier::Forward);
    }

    #[test]
    fn spine_excludes_mid_and_amid() {
        assert!(Tier::Goalkeeper.is_spine());
        assert!(Tier::Defender.is_spine());
        assert!(Tier::DefensiveMidfielder.is_spine());
        assert!(Tier::Forward.is_spine());
        assert!(!Tier::Midfielder.is_spine());
        assert!(!Tier::AttackingMidfielder.is_spine());
    }

    #[test]
    fn freeform_ids_round_trip_their_index() {
        let id = SlotId::freeform(17);
        assert!(id.is_freeform());
        assert_eq!(id.as_str(), "ff-17");
        assert_eq!(id.freeform_index(), Some(17));

        let native = SlotId::native("LCB");
        assert!(!native.is_freeform());
        assert_eq!(native.freeform_index(), None);
    }

    #[test]
    fn pitch_point_clamps_to_data_space() {
        let p = PitchPoint::new(-4.0, 130.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 100.0);
    }
}
