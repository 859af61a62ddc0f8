// crates/tl_core/src/interact/drag.rs
// DragController: pointer events -> at most one drop operation

use crate::formation::{FormationTemplate, SlotId};
use crate::interact::hit::{
    hit_test_drop_zone, hit_test_field, DropZone, FieldHit, SurfaceRect,
};
use crate::lineup::{AssignmentStore, PlayerId};

/// Displacement in screen pixels that turns an armed pointer into a drag.
/// Anything shorter on release is a plain click.
pub const DRAG_THRESHOLD_PX: f32 = 8.0;

/// Where a drag started. A field origin carries the slot so drops onto an
/// occupied slot can swap instead of displace.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOrigin {
    Roster,
    Bench,
    Field { slot: SlotId },
}

/// Geometry the rendering layer supplies for the duration of a gesture.
#[derive(Debug, Clone)]
pub struct DragContext<'a> {
    pub formation: &'a FormationTemplate,
    pub surface: SurfaceRect,
    pub bench_zone: Option<SurfaceRect>,
    pub roster_zone: Option<SurfaceRect>,
}

/// What a pointer-up produced. `Click` means the threshold was never
/// crossed; the caller routes it to the ClickAssigner. `Missed` is the
/// implicit cancel: nothing moved.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Assigned(SlotId),
    MovedFreeform(SlotId),
    Benched,
    ReturnedToRoster,
    Click(PlayerId),
    Missed,
    Inactive,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Armed { player: PlayerId, origin: DragOrigin, start_x: f32, start_y: f32 },
    Dragging { player: PlayerId, origin: DragOrigin, highlight: Option<FieldHit> },
}

/// Interaction state machine for one pointer. The host registers its global
/// move/up listeners on pointer-down and must drop them when `pointer_up`
/// returns, whatever the outcome; the controller itself always lands back in
/// idle.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    phase: Phase,
    threshold: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { phase: Phase::Idle, threshold: DRAG_THRESHOLD_PX }
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self { phase: Phase::Idle, threshold }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Current drop target preview, for rendering feedback only.
    pub fn highlight(&self) -> Option<&FieldHit> {
        match &self.phase {
            Phase::Dragging { highlight, .. } => highlight.as_ref(),
            _ => None,
        }
    }

    /// Pointer-down over a draggable player chip.
    pub fn pointer_down(&mut self, player: PlayerId, origin: DragOrigin, x: f32, y: f32) {
        self.phase = Phase::Armed { player, origin, start_x: x, start_y: y };
    }

    /// Pointer-move: arms become drags past the threshold; drags re-run the
    /// hit test to refresh the highlight. No store mutation mid-drag.
    pub fn pointer_move(&mut self, x: f32, y: f32, ctx: &DragContext<'_>) {
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Armed { player, origin, start_x, start_y } => {
                let dx = x - *start_x;
                let dy = y - *start_y;
                if (dx * dx + dy * dy).sqrt() > self.threshold {
                    let player = *player;
                    let origin = origin.clone();
                    let highlight = hit_test_field(x, y, &ctx.surface, ctx.formation);
                    self.phase = Phase::Dragging { player, origin, highlight };
                }
            }
            Phase::Dragging { highlight, .. } => {
                *highlight = hit_test_field(x, y, &ctx.surface, ctx.formation);
            }
        }
    }

    /// Pointer-up: dispatch exactly one drop operation, or report a click if
    /// the drag never started. The highlight is cleared unconditionally.
    pub fn pointer_up(
        &mut self,
        x: f32,
        y: f32,
        ctx: &DragContext<'_>,
        store: &mut AssignmentStore,
    ) -> DropOutcome {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle => DropOutcome::Inactive,
            Phase::Armed { player, .. } => DropOutcome::Click(player),
            Phase::Dragging { player, origin, .. } => {
                self.dispatch_drop(player, &origin, x, y, ctx, store)
            }
        }
    }

    fn dispatch_drop(
        &self,
        player: PlayerId,
        origin: &DragOrigin,
        x: f32,
        y: f32,
        ctx: &DragContext<'_>,
        store: &mut AssignmentStore,
    ) -> DropOutcome {
        match hit_test_field(x, y, &ctx.surface, ctx.formation) {
            Some(FieldHit::Slot(slot)) => {
                // Chip dragged off the field onto an occupied slot swaps;
                // chips arriving from bench or roster displace.
                if matches!(origin, DragOrigin::Field { .. }) {
                    store.swap_assign(player, slot.clone());
                } else {
                    store.assign(player, slot.clone());
                }
                DropOutcome::Assigned(slot)
            }
            Some(FieldHit::Freeform(point)) => {
                let label = self.origin_label(origin, ctx.formation, store);
                let slot = store.move_to_freeform(player, point.x, point.y, label);
                DropOutcome::MovedFreeform(slot)
            }
            None => match hit_test_drop_zone(x, y, ctx.bench_zone.as_ref(), ctx.roster_zone.as_ref())
            {
                Some(DropZone::Bench) => {
                    store.move_to_bench(player);
                    DropOutcome::Benched
                }
                Some(DropZone::Roster) => {
                    store.move_to_roster(player);
                    DropOutcome::ReturnedToRoster
                }
                None => DropOutcome::Missed,
            },
        }
    }

    /// Label carried onto a freeform slot: the vacated slot's resolved label
    /// when the drag started on the field, nothing otherwise.
    fn origin_label(
        &self,
        origin: &DragOrigin,
        formation: &FormationTemplate,
        store: &AssignmentStore,
    ) -> Option<String> {
        let DragOrigin::Field { slot } = origin else { return None };
        store
            .freeform_label(slot)
            .cloned()
            .or_else(|| formation.slot(slot).map(|s| s.label.clone()))
    }
}
