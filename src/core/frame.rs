//=========================================================================
// Frame Snapshot
//=========================================================================
//
// The state published to the render adapter after each batch of fixed
// steps. Everything the presentation layer needs is flattened into
// plain values here so it never reaches into simulation internals.
//
// Snapshots are derived data: rebuilt from scratch every frame, never
// mutated incrementally.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::sim::{CharacterState, Facing, TriggerId, Vec2};

//=== CharacterView =======================================================

/// Renderable view of a character: position plus animation flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterView {
    /// World-space position of the character's feet.
    pub position: Vec2,

    /// Sprite direction (mirror horizontally when facing left).
    pub facing: Facing,

    /// Walking this frame; drives the walk cycle.
    pub moving: bool,

    /// Mid-jump or falling; drives the jump pose.
    pub airborne: bool,
}

impl From<&CharacterState> for CharacterView {
    fn from(state: &CharacterState) -> Self {
        Self {
            position: state.position,
            facing: state.facing,
            moving: state.moving(),
            airborne: state.airborne,
        }
    }
}

//=== DoorView ============================================================

/// A trigger zone annotated with its activation state for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorView {
    pub id: TriggerId,
    pub position: Vec2,
    pub label: String,

    /// True for at most one door per frame: the one in activation range.
    pub active: bool,
}

//=== FrameSnapshot =======================================================

/// Per-frame output of the simulation, one variant per scene.
///
/// The world frame carries the camera offset and the annotated door
/// list; the mentor frame is a fixed, non-scrolling stage with only the
/// character and the mentor actor.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSnapshot {
    World {
        character: CharacterView,
        camera_offset: f32,
        doors: Vec<DoorView>,
    },
    Mentor {
        character: CharacterView,
        mentor_position: Vec2,
    },
}

//=========================================================================
// Unit Tests
//=========================================================================
