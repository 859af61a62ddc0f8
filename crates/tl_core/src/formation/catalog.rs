// crates/tl_core/src/formation/catalog.rs
// Static formation template catalog, one set per game format

use once_cell::sync::Lazy;

use super::{FormationTemplate, GameFormat, PositionSlot, Tier};

/// Every template across every game format. Built once; templates are
/// configuration data, not computed.
pub static CATALOG: Lazy<Vec<FormationTemplate>> = Lazy::new(|| {
    let mut all = eleven_a_side();
    all.extend(nine_a_side());
    all.extend(seven_a_side());
    all.extend(five_a_side());
    all
});

/// Templates for one game format.
pub fn templates_for(format: GameFormat) -> Vec<&'static FormationTemplate> {
    CATALOG.iter().filter(|t| t.format == format).collect()
}

/// Look a template up by id across all formats. Legacy lineups may reference
/// a template from a different format than the team's current one.
pub fn find_template(id: &str) -> Option<&'static FormationTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

/// Neutral fallback for callers holding an id the catalog no longer knows.
/// Every slot the lineup references resolves as freeform or not at all.
pub fn blank_template(format: GameFormat) -> FormationTemplate {
    FormationTemplate::new("blank", "Blank", format, Vec::new())
}

// ============================================================================
// 11v11
// ============================================================================

fn eleven_a_side() -> Vec<FormationTemplate> {
    vec![
        create_442(),
        create_433(),
        create_4231(),
        create_352(),
        create_442_diamond(),
        create_4141(),
        create_343(),
        create_532(),
    ]
}

fn back_four() -> Vec<PositionSlot> {
    vec![
        PositionSlot::new("LB", Tier::Defender, 20.0, 20.0),
        PositionSlot::new("LCB", Tier::Defender, 40.0, 20.0),
        PositionSlot::new("RCB", Tier::Defender, 60.0, 20.0),
        PositionSlot::new("RB", Tier::Defender, 80.0, 20.0),
    ]
}

fn create_442() -> FormationTemplate {
    let mut slots = vec![PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0)];
    slots.extend(back_four());
    slots.extend(vec![
        PositionSlot::new("LM", Tier::Midfielder, 15.0, 50.0),
        PositionSlot::new("LCM", Tier::Midfielder, 40.0, 50.0),
        PositionSlot::new("RCM", Tier::Midfielder, 60.0, 50.0),
        PositionSlot::new("RM", Tier::Midfielder, 85.0, 50.0),
        PositionSlot::new("LST", Tier::Forward, 35.0, 80.0),
        PositionSlot::new("RST", Tier::Forward, 65.0, 80.0),
    ]);
    FormationTemplate::new("T442", "4-4-2", GameFormat::ElevenASide, slots)
}

fn create_433() -> FormationTemplate {
    let mut slots = vec![PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0)];
    slots.extend(back_four());
    slots.extend(vec![
        PositionSlot::new("LCM", Tier::Midfielder, 35.0, 45.0),
        PositionSlot::new("CM", Tier::Midfielder, 50.0, 45.0),
        PositionSlot::new("RCM", Tier::Midfielder, 65.0, 45.0),
        PositionSlot::new("LW", Tier::Forward, 15.0, 80.0),
        PositionSlot::new("ST", Tier::Forward, 50.0, 85.0),
        PositionSlot::new("RW", Tier::Forward, 85.0, 80.0),
    ]);
    FormationTemplate::new("T433", "4-3-3", GameFormat::ElevenASide, slots)
}

fn create_4231() -> FormationTemplate {
    let mut slots = vec![PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0)];
    slots.extend(back_four());
    slots.extend(vec![
        PositionSlot::new("LDM", Tier::DefensiveMidfielder, 40.0, 35.0),
        PositionSlot::new("RDM", Tier::DefensiveMidfielder, 60.0, 35.0),
        PositionSlot::new("LAM", Tier::AttackingMidfielder, 20.0, 62.0),
        PositionSlot::new("CAM", Tier::AttackingMidfielder, 50.0, 62.0),
        PositionSlot::new("RAM", Tier::AttackingMidfielder, 80.0, 62.0),
        PositionSlot::new("ST", Tier::Forward, 50.0, 85.0),
    ]);
    FormationTemplate::new("T4231", "4-2-3-1", GameFormat::ElevenASide, slots)
}

fn create_352() -> FormationTemplate {
    FormationTemplate::new(
        "T352",
        "3-5-2",
        GameFormat::ElevenASide,
        vec![
            PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0),
            PositionSlot::new("LCB", Tier::Defender, 35.0, 20.0),
            PositionSlot::new("CB", Tier::Defender, 50.0, 20.0),
            PositionSlot::new("RCB", Tier::Defender, 65.0, 20.0),
            PositionSlot::new("LWB", Tier::Midfielder, 10.0, 45.0),
            PositionSlot::new("LCM", Tier::Midfielder, 35.0, 50.0),
            PositionSlot::new("CM", Tier::Midfielder, 50.0, 50.0),
            PositionSlot::new("RCM", Tier::Midfielder, 65.0, 50.0),
            PositionSlot::new("RWB", Tier::Midfielder, 90.0, 45.0),
            PositionSlot::new("LST", Tier::Forward, 40.0, 80.0),
            PositionSlot::new("RST", Tier::Forward, 60.0, 80.0),
        ],
    )
}

fn create_442_diamond() -> FormationTemplate {
    let mut slots = vec![PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0)];
    slots.extend(back_four());
    slots.extend(vec![
        PositionSlot::new("CDM", Tier::DefensiveMidfielder, 50.0, 35.0), // bottom of diamond
        PositionSlot::new("LM", Tier::Midfielder, 30.0, 50.0),
        PositionSlot::new("RM", Tier::Midfielder, 70.0, 50.0),
        PositionSlot::new("CAM", Tier::AttackingMidfielder, 50.0, 65.0), // top of diamond
        PositionSlot::new("LST", Tier::Forward, 40.0, 85.0),
        PositionSlot::new("RST", Tier::Forward, 60.0, 85.0),
    ]);
    FormationTemplate::new("T442Diamond", "4-4-2 Diamond", GameFormat::ElevenASide, slots)
}

fn create_4141() -> FormationTemplate {
    let mut slots = vec![PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0)];
    slots.extend(back_four());
    slots.extend(vec![
        PositionSlot::new("CDM", Tier::DefensiveMidfielder, 50.0, 35.0),
        PositionSlot::new("LM", Tier::Midfielder, 15.0, 55.0),
        PositionSlot::new("LCM", Tier::Midfielder, 40.0, 55.0),
        PositionSlot::new("RCM", Tier::Midfielder, 60.0, 55.0),
        PositionSlot::new("RM", Tier::Midfielder, 85.0, 55.0),
        PositionSlot::new("ST", Tier::Forward, 50.0, 82.0),
    ]);
    FormationTemplate::new("T4141", "4-1-4-1", GameFormat::ElevenASide, slots)
}

fn create_343() -> FormationTemplate {
    FormationTemplate::new(
        "T343",
        "3-4-3",
        GameFormat::ElevenASide,
        vec![
            PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0),
            PositionSlot::new("LCB", Tier::Defender, 35.0, 20.0),
            PositionSlot::new("CB", Tier::Defender, 50.0, 20.0),
            PositionSlot::new("RCB", Tier::Defender, 65.0, 20.0),
            PositionSlot::new("LM", Tier::Midfielder, 15.0, 50.0),
            PositionSlot::new("LCM", Tier::Midfielder, 40.0, 50.0),
            PositionSlot::new("RCM", Tier::Midfielder, 60.0, 50.0),
            PositionSlot::new("RM", Tier::Midfielder, 85.0, 50.0),
            PositionSlot::new("LW", Tier::Forward, 20.0, 80.0),
            PositionSlot::new("ST", Tier::Forward, 50.0, 85.0),
            PositionSlot::new("RW", Tier::Forward, 80.0, 80.0),
        ],
    )
}

fn create_532() -> FormationTemplate {
    FormationTemplate::new(
        "T532",
        "5-3-2",
        GameFormat::ElevenASide,
        vec![
            PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 5.0),
            PositionSlot::new("LWB", Tier::Defender, 10.0, 25.0),
            PositionSlot::new("LCB", Tier::Defender, 30.0, 18.0),
            PositionSlot::new("CB", Tier::Defender, 50.0, 18.0),
            PositionSlot::new("RCB", Tier::Defender, 70.0, 18.0),
            PositionSlot::new("RWB", Tier::Defender, 90.0, 25.0),
            PositionSlot::new("LCM", Tier::Midfielder, 35.0, 50.0),
            PositionSlot::new("CM", Tier::Midfielder, 50.0, 50.0),
            PositionSlot::new("RCM", Tier::Midfielder, 65.0, 50.0),
            PositionSlot::new("LST", Tier::Forward, 40.0, 80.0),
            PositionSlot::new("RST", Tier::Forward, 60.0, 80.0),
        ],
    )
}

// ============================================================================
// 9v9
// ============================================================================

fn nine_a_side() -> Vec<FormationTemplate> {
    vec![
        FormationTemplate::new(
            "N332",
            "3-3-2",
            GameFormat::NineASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 6.0),
                PositionSlot::new("LCB", Tier::Defender, 30.0, 20.0),
                PositionSlot::new("CB", Tier::Defender, 50.0, 18.0),
                PositionSlot::new("RCB", Tier::Defender, 70.0, 20.0),
                PositionSlot::new("LM", Tier::Midfielder, 20.0, 50.0),
                PositionSlot::new("CM", Tier::Midfielder, 50.0, 50.0),
                PositionSlot::new("RM", Tier::Midfielder, 80.0, 50.0),
                PositionSlot::new("LST", Tier::Forward, 38.0, 80.0),
                PositionSlot::new("RST", Tier::Forward, 62.0, 80.0),
            ],
        ),
        FormationTemplate::new(
            "N233",
            "2-3-3",
            GameFormat::NineASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 6.0),
                PositionSlot::new("LCB", Tier::Defender, 38.0, 20.0),
                PositionSlot::new("RCB", Tier::Defender, 62.0, 20.0),
                PositionSlot::new("LM", Tier::Midfielder, 20.0, 50.0),
                PositionSlot::new("CM", Tier::Midfielder, 50.0, 50.0),
                PositionSlot::new("RM", Tier::Midfielder, 80.0, 50.0),
                PositionSlot::new("LW", Tier::Forward, 22.0, 80.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 84.0),
                PositionSlot::new("RW", Tier::Forward, 78.0, 80.0),
            ],
        ),
        FormationTemplate::new(
            "N323",
            "3-2-3",
            GameFormat::NineASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 6.0),
                PositionSlot::new("LCB", Tier::Defender, 30.0, 20.0),
                PositionSlot::new("CB", Tier::Defender, 50.0, 18.0),
                PositionSlot::new("RCB", Tier::Defender, 70.0, 20.0),
                PositionSlot::new("LCM", Tier::Midfielder, 38.0, 48.0),
                PositionSlot::new("RCM", Tier::Midfielder, 62.0, 48.0),
                PositionSlot::new("LW", Tier::Forward, 22.0, 80.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 84.0),
                PositionSlot::new("RW", Tier::Forward, 78.0, 80.0),
            ],
        ),
    ]
}

// ============================================================================
// 7v7
// ============================================================================

fn seven_a_side() -> Vec<FormationTemplate> {
    vec![
        FormationTemplate::new(
            "S231",
            "2-3-1",
            GameFormat::SevenASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 8.0),
                PositionSlot::new("LCB", Tier::Defender, 35.0, 22.0),
                PositionSlot::new("RCB", Tier::Defender, 65.0, 22.0),
                PositionSlot::new("LM", Tier::Midfielder, 20.0, 50.0),
                PositionSlot::new("CM", Tier::Midfielder, 50.0, 50.0),
                PositionSlot::new("RM", Tier::Midfielder, 80.0, 50.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 80.0),
            ],
        ),
        FormationTemplate::new(
            "S321",
            "3-2-1",
            GameFormat::SevenASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 8.0),
                PositionSlot::new("LCB", Tier::Defender, 28.0, 22.0),
                PositionSlot::new("CB", Tier::Defender, 50.0, 20.0),
                PositionSlot::new("RCB", Tier::Defender, 72.0, 22.0),
                PositionSlot::new("LCM", Tier::Midfielder, 38.0, 50.0),
                PositionSlot::new("RCM", Tier::Midfielder, 62.0, 50.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 80.0),
            ],
        ),
        FormationTemplate::new(
            "S2121",
            "2-1-2-1",
            GameFormat::SevenASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 8.0),
                PositionSlot::new("LCB", Tier::Defender, 35.0, 22.0),
                PositionSlot::new("RCB", Tier::Defender, 65.0, 22.0),
                PositionSlot::new("CDM", Tier::DefensiveMidfielder, 50.0, 38.0),
                PositionSlot::new("LM", Tier::Midfielder, 28.0, 55.0),
                PositionSlot::new("RM", Tier::Midfielder, 72.0, 55.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 80.0),
            ],
        ),
    ]
}

// ============================================================================
// 5v5
// ============================================================================

fn five_a_side() -> Vec<FormationTemplate> {
    vec![
        FormationTemplate::new(
            "F121",
            "1-2-1",
            GameFormat::FiveASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 10.0),
                PositionSlot::new("CB", Tier::Defender, 50.0, 25.0),
                PositionSlot::new("LM", Tier::Midfielder, 30.0, 55.0),
                PositionSlot::new("RM", Tier::Midfielder, 70.0, 55.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 82.0),
            ],
        ),
        FormationTemplate::new(
            "F211",
            "2-1-1",
            GameFormat::FiveASide,
            vec![
                PositionSlot::new("GK", Tier::Goalkeeper, 50.0, 10.0),
                PositionSlot::new("LCB", Tier::Defender, 35.0, 25.0),
                PositionSlot::new("RCB", Tier::Defender, 65.0, 25.0),
                PositionSlot::new("CM", Tier::Midfielder, 50.0, 52.0),
                PositionSlot::new("ST", Tier::Forward, 50.0, 80.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::{SlotId, FREEFORM_PREFIX};

    #[test]
    fn every_template_has_its_formats_slot_count() {
        for template in CATALOG.iter() {
            assert_eq!(
                template.slot_count(),
                template.format.player_count(),
                "template {} should field {} players",
                template.id,
                template.format.player_count()
            );
        }
    }

    #[test]
    fn coordinates_stay_in_data_space() {
        for template in CATALOG.iter() {
            for slot in &template.slots {
                assert!(
                    (0.0..=100.0).contains(&slot.x) && (0.0..=100.0).contains(&slot.y),
                    "template {} slot {} out of range ({}, {})",
                    template.id,
                    slot.id,
                    slot.x,
                    slot.y
                );
            }
        }
    }

    #[test]
    fn no_native_slot_uses_the_freeform_prefix() {
        for template in CATALOG.iter() {
            for slot in &template.slots {
                assert!(
                    !slot.id.as_str().starts_with(FREEFORM_PREFIX),
                    "template {} reserves {} for session slots",
                    template.id,
                    FREEFORM_PREFIX
                );
            }
        }
    }

    #[test]
    fn find_template_searches_across_formats() {
        assert_eq!(find_template("T442").map(|t| t.format), Some(GameFormat::ElevenASide));
        assert_eq!(find_template("S231").map(|t| t.format), Some(GameFormat::SevenASide));
        assert!(find_template("T999").is_none());
    }

    #[test]
    fn template_tiers_agree_with_depth_classification() {
        for template in CATALOG.iter() {
            for slot in &template.slots {
                assert_eq!(
                    Tier::classify(slot.y),
                    slot.tier,
                    "template {} slot {} at y={} classifies as {:?}",
                    template.id,
                    slot.id,
                    slot.y,
                    Tier::classify(slot.y)
                );
            }
        }
    }

    #[test]
    fn blank_template_resolves_nothing() {
        let blank = blank_template(GameFormat::ElevenASide);
        assert_eq!(blank.slot_count(), 0);
        assert!(!blank.has_slot(&SlotId::native("GK")));
    }
}
