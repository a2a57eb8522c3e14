//=========================================================================
// Controls
//=========================================================================
//
// Maps the fixed set of game actions to physical keys.
//
// Architecture:
//   StateTracker (which keys) + Controls (which keys mean what)
//     → StepInput (what the simulation consumes this step)
//
// Movement is sampled from held state; jump and interact are sampled
// from press edges so holding the key does not retrigger them.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== Controls ============================================================

/// Key bindings for the four game actions.
///
/// Defaults follow the classic layout: arrows to move, Space to jump,
/// ArrowUp to interact with a door. All bindings are plain fields so a
/// host can rebind them wholesale before the engine starts:
///
/// ```
/// use wayfare_engine::prelude::*;
///
/// let controls = Controls {
///     move_left: KeyCode::KeyA,
///     move_right: KeyCode::KeyD,
///     jump: KeyCode::KeyW,
///     ..Controls::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Held: walk left.
    pub move_left: KeyCode,

    /// Held: walk right.
    pub move_right: KeyCode,

    /// Press edge: jump while grounded.
    pub jump: KeyCode,

    /// Press edge: enter the active trigger zone.
    pub interact: KeyCode,
}

impl Controls {
    //--- Sampling ---------------------------------------------------------

    /// Samples the tracker into the per-step input the simulation consumes.
    pub(crate) fn sample(&self, tracker: &StateTracker) -> StepInput {
        StepInput {
            left_held: tracker.is_key_down(self.move_left),
            right_held: tracker.is_key_down(self.move_right),
            jump_pressed: tracker.is_key_pressed(self.jump),
            interact_pressed: tracker.is_key_pressed(self.interact),
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_left: KeyCode::ArrowLeft,
            move_right: KeyCode::ArrowRight,
            jump: KeyCode::Space,
            interact: KeyCode::ArrowUp,
        }
    }
}

//=== StepInput ===========================================================

/// Input snapshot consumed by one simulation step.
///
/// Decouples the physics and scene code from key identities: by the
/// time a step runs, only intent remains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    /// Left movement key currently held.
    pub left_held: bool,

    /// Right movement key currently held.
    pub right_held: bool,

    /// Jump key went down this step.
    pub jump_pressed: bool,

    /// Interact key went down this step.
    pub interact_pressed: bool,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::InputEvent;

    #[test]
    fn default_bindings_sample_held_movement() {
        let controls = Controls::default();
        let mut tracker = StateTracker::new();

        tracker.process_events(&[InputEvent::KeyDown(KeyCode::ArrowLeft)]);

        let input = controls.sample(&tracker);
        assert!(input.left_held);
        assert!(!input.right_held);
        assert!(!input.jump_pressed);
    }

    #[test]
    fn jump_is_edge_not_held() {
        let controls = Controls::default();
        let mut tracker = StateTracker::new();

        tracker.begin_step();
        tracker.process_events(&[InputEvent::KeyDown(KeyCode::Space)]);
        assert!(controls.sample(&tracker).jump_pressed);

        // Next step, key still held: no edge
        tracker.begin_step();
        tracker.process_events(&[]);
        assert!(!controls.sample(&tracker).jump_pressed);
    }

    #[test]
    fn rebinding_moves_the_action() {
        let controls = Controls {
            move_right: KeyCode::KeyD,
            ..Controls::default()
        };
        let mut tracker = StateTracker::new();

        tracker.process_events(&[InputEvent::KeyDown(KeyCode::KeyD)]);
        assert!(controls.sample(&tracker).right_held);

        // Old binding no longer does anything
        let mut other = StateTracker::new();
        other.process_events(&[InputEvent::KeyDown(KeyCode::ArrowRight)]);
        assert!(!controls.sample(&other).right_held);
    }

    #[test]
    fn interact_edge_sampled_independently_of_jump() {
        let controls = Controls::default();
        let mut tracker = StateTracker::new();

        tracker.begin_step();
        tracker.process_events(&[
            InputEvent::KeyDown(KeyCode::ArrowUp),
            InputEvent::KeyDown(KeyCode::Space),
        ]);

        let input = controls.sample(&tracker);
        assert!(input.interact_pressed);
        assert!(input.jump_pressed);
    }
}
