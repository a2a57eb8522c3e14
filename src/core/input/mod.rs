//=========================================================================
// Input System
//
// Keyboard input handling for the engine.
//
// Responsibilities:
// - Define the portable event vocabulary (`KeyCode`, `InputEvent`)
// - Track held keys and per-step press/release edges (`StateTracker`)
// - Map keys to the fixed game actions (`Controls` → `StepInput`)
//
// Notes:
// The tracker is owned and driven by the logic thread; the platform
// layer only produces `InputEvent`s and never touches state here.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

mod controls;
mod state_tracker;

//=== Public API ==========================================================

pub use controls::{Controls, StepInput};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;
