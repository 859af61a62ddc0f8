// crates/tl_core/src/interact/hit.rs
// HitTester: pointer coordinates -> slot, freeform point or drop zone

use crate::formation::{FormationTemplate, PitchPoint, SlotId};

/// A pointer within this many data units of a native slot snaps to it.
pub const SNAP_RADIUS: f32 = 8.0;

/// Bounding rectangle of a rendered container, in screen coordinates.
/// Supplied by the rendering layer; the engine never queries layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

/// Result of a field hit test.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldHit {
    Slot(SlotId),
    Freeform(PitchPoint),
}

/// Named drop zones outside the field surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    Bench,
    Roster,
}

/// Map a pointer into the pitch data space and resolve it to a target.
/// Outside the surface: no hit. Within `SNAP_RADIUS` data units of a native
/// slot: that slot, ties broken by distance. Anywhere else on the field is a
/// valid freeform point. Screen y grows downward, data y grows toward the
/// opponent goal, so the y axis inverts.
pub fn hit_test_field(
    pointer_x: f32,
    pointer_y: f32,
    surface: &SurfaceRect,
    formation: &FormationTemplate,
) -> Option<FieldHit> {
    if !surface.contains(pointer_x, pointer_y) || surface.width <= 0.0 || surface.height <= 0.0 {
        return None;
    }
    let data = PitchPoint::new(
        (pointer_x - surface.left) / surface.width * 100.0,
        (1.0 - (pointer_y - surface.top) / surface.height) * 100.0,
    );

    let nearest = formation
        .slots
        .iter()
        .map(|slot| (slot, data.distance_to(slot.point())))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((slot, distance)) if distance < SNAP_RADIUS => Some(FieldHit::Slot(slot.id.clone())),
        _ => Some(FieldHit::Freeform(data)),
    }
}

/// Check the bench and roster containers, used only after the field test
/// misses. Bench wins if the rendering layer ever overlaps the two.
pub fn hit_test_drop_zone(
    pointer_x: f32,
    pointer_y: f32,
    bench: Option<&SurfaceRect>,
    roster: Option<&SurfaceRect>,
) -> Option<DropZone> {
    if bench.is_some_and(|r| r.contains(pointer_x, pointer_y)) {
        return Some(DropZone::Bench);
    }
    if roster.is_some_and(|r| r.contains(pointer_x, pointer_y)) {
        return Some(DropZone::Roster);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::find_template;

    fn surface() -> SurfaceRect {
        // 200x400 field at origin: 1 data unit = 2px wide, 4px tall.
        SurfaceRect::new(0.0, 0.0, 200.0, 400.0)
    }

    #[test]
    fn pointer_outside_surface_is_rejected() {
        let t442 = find_template("T442").unwrap();
        assert_eq!(hit_test_field(-1.0, 50.0, &surface(), t442), None);
        assert_eq!(hit_test_field(50.0, 401.0, &surface(), t442), None);
    }

    #[test]
    fn pointer_near_native_slot_snaps_to_it() {
        let t442 = find_template("T442").unwrap();
        // LST sits at data (35, 80) -> screen (70, 80).
        let hit = hit_test_field(74.0, 90.0, &surface(), t442);
        assert_eq!(hit, Some(FieldHit::Slot(SlotId::native("LST"))));
    }

    #[test]
    fn tie_break_is_by_distance_not_declaration_order() {
        let t442 = find_template("T442").unwrap();
        // Between LCB (40, 20) and RCB (60, 20) but nearer RCB.
        let hit = hit_test_field(110.0, 320.0, &surface(), t442);
        assert_eq!(hit, Some(FieldHit::Slot(SlotId::native("RCB"))));
    }

    #[test]
    fn beyond_snap_radius_yields_exact_inverted_y_point() {
        let t442 = find_template("T442").unwrap();
        // Screen (20, 160) -> data (10, 60); nearest native slot is LM at
        // (15, 50), distance ~11.2 > SNAP_RADIUS.
        let hit = hit_test_field(20.0, 160.0, &surface(), t442);
        match hit {
            Some(FieldHit::Freeform(p)) => {
                assert!((p.x - 10.0).abs() < 1e-4);
                assert!((p.y - 60.0).abs() < 1e-4);
            }
            other => panic!("expected freeform hit, got {:?}", other),
        }
    }

    #[test]
    fn blank_formation_makes_everything_freeform() {
        let blank = crate::formation::blank_template(crate::formation::GameFormat::ElevenASide);
        let hit = hit_test_field(100.0, 200.0, &surface(), &blank);
        assert_eq!(hit, Some(FieldHit::Freeform(PitchPoint::new(50.0, 50.0))));
    }

    #[test]
    fn drop_zones_check_bench_then_roster() {
        let bench = SurfaceRect::new(0.0, 420.0, 200.0, 60.0);
        let roster = SurfaceRect::new(220.0, 0.0, 100.0, 480.0);
        assert_eq!(hit_test_drop_zone(50.0, 450.0, Some(&bench), Some(&roster)), Some(DropZone::Bench));
        assert_eq!(hit_test_drop_zone(250.0, 100.0, Some(&bench), Some(&roster)), Some(DropZone::Roster));
        assert_eq!(hit_test_drop_zone(210.0, 100.0, Some(&bench), Some(&roster)), None);
        assert_eq!(hit_test_drop_zone(50.0, 450.0, None, None), None);
    }
}
