// crates/tl_core/src/interact/mod.rs
// Pointer and click interaction layer

pub mod click;
pub mod drag;
pub mod hit;

pub use click::{ClickAssigner, ClickOutcome};
pub use drag::{DragContext, DragController, DragOrigin, DropOutcome, DRAG_THRESHOLD_PX};
pub use hit::{hit_test_drop_zone, hit_test_field, DropZone, FieldHit, SurfaceRect, SNAP_RADIUS};
