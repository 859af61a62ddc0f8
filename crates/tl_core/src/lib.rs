//! # tl_core - Lineup Assignment & Formation Engine
//!
//! Core of the Touchline roster planner: places players onto a tactical
//! diagram, resolves pointer and click gestures into assignment changes,
//! derives a canonical formation label from the geometry of who is standing
//! where, and diffs two lineups to flag meaningful change.
//!
//! ## Features
//! - Fixed formation slots and ad hoc ("freeform") positions
//! - Drag and tap interaction state machines with a shared assignment store
//! - Formation detection gated on fill level, with the 4-4-2 Diamond special case
//! - Spine-aware lineup diff for the match-day banner
//!
//! Everything is synchronous, in-memory state transformation between UI
//! events and a serializable snapshot; persistence and rendering live in
//! collaborator crates.

pub mod api;
pub mod error;
pub mod formation;
pub mod interact;
pub mod lineup;

// Re-export the JSON boundary
pub use api::{compare_lineups_json, detect_formation_json};
pub use error::{LineupError, Result};

// Re-export formation types and catalog
pub use formation::{
    blank_template, find_template, templates_for, FormationTemplate, GameFormat, PitchPoint,
    PositionSlot, SlotId, Tier, CATALOG, FREEFORM_PREFIX,
};

// Re-export lineup state and derived views
pub use lineup::{
    compare_lineups, detect_formation, detection_ready, resolve_labels, resolve_positions,
    resolve_tiers, AssignmentStore, FreeformIdArena, LineupDiff, LineupEntry, PlayerId, PlayerRef,
};

// Re-export interaction layer
pub use interact::{
    hit_test_drop_zone, hit_test_field, ClickAssigner, ClickOutcome, DragContext, DragController,
    DragOrigin, DropOutcome, DropZone, FieldHit, SurfaceRect, DRAG_THRESHOLD_PX, SNAP_RADIUS,
};
