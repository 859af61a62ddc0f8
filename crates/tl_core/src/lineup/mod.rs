// crates/tl_core/src/lineup/mod.rs
// Lineup state: assignments, derived views, detection and diffing

pub mod detect;
pub mod diff;
pub mod entry;
pub mod resolve;
pub mod store;

pub use detect::{detect_formation, detection_ready};
pub use diff::{compare_lineups, LineupDiff, CHURN_MESSAGE_THRESHOLD, NEW_SPINE_THRESHOLD};
pub use entry::{LineupEntry, PlayerId, PlayerRef};
pub use resolve::{resolve_labels, resolve_positions, resolve_tiers};
pub use store::{AssignmentStore, FreeformIdArena};
