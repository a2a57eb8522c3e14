//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use wayfare_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Input system
pub use crate::core::input::{Controls, InputEvent, KeyCode, StateTracker, StepInput};

// Simulation
pub use crate::core::sim::{
    CharacterState, Facing, TriggerId, TriggerZone, Tuning, Vec2,
};

// Scenes and world content
pub use crate::core::scene::{GameWorld, SceneCommand, SceneMode, WorldLayout};

// Frame publication
pub use crate::core::frame::{CharacterView, DoorView, FrameSnapshot};
