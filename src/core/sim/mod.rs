//=========================================================================
// Simulation
//=========================================================================
//
// The per-step simulation pipeline, as pure functions over value types.
//
// Flow per fixed step:
//   StepInput → integrate() → resolve() → active_trigger() → camera_offset()
//
// State ownership and sequencing live one level up in the scene state
// machine; everything here is stateless and directly testable.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod physics;
pub mod trigger;

mod character;

//=== Public API ==========================================================

pub use camera::camera_offset;
pub use character::{CharacterState, Facing, Vec2};
pub use physics::{integrate, resolve, Tuning};
pub use trigger::{active_trigger, TriggerId, TriggerZone};
