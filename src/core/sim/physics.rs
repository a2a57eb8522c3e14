//=========================================================================
// Physics
//=========================================================================
//
// The per-step physics pipeline: integrate, then resolve.
//
// Architecture:
//   StepInput + CharacterState ──integrate()──> unclamped candidate
//   candidate ──resolve()──> legal CharacterState
//
// Both halves are pure functions of their inputs. The resolver is the
// only thing that ends a jump or fall: landing on the ground plane
// zeroes vertical velocity and clears the airborne flag.
//
// Constants are per fixed step at the configured tick rate, so the
// simulation runs at the same speed on every display.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::StepInput;
use super::character::{CharacterState, Facing};

//=== Tuning ==============================================================

/// Per-step physics constants.
///
/// Values are expressed per simulation step and tuned for the default
/// 60 steps/second tick rate. A host raising the tick rate should scale
/// these down accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Horizontal walk speed, pixels per step.
    pub run_speed: f32,

    /// Downward acceleration added to vertical velocity each step.
    pub gravity: f32,

    /// Upward velocity applied on the step a jump triggers.
    pub jump_impulse: f32,

    /// Y coordinate of the flat ground plane.
    pub ground_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: 4.0,
            gravity: 0.5,
            jump_impulse: 12.0,
            ground_y: 390.0,
        }
    }
}

//=== Integrator ==========================================================

/// Advances the character one step, producing an unclamped candidate.
///
/// Semantics:
/// - Horizontal velocity is not accumulated: it is recomputed from the
///   held movement keys each step (left → −speed, right → +speed,
///   neither → 0). Right is evaluated last, so holding both walks right.
/// - Facing follows the most recently evaluated held key even when the
///   resolver later cancels the displacement.
/// - Gravity accumulates on vertical velocity every step, unbounded;
///   only the resolver caps descent.
/// - A jump triggers only on a press edge while grounded, setting
///   `velocity.y = -jump_impulse` and marking the character airborne.
///   Press edges while airborne are ignored.
/// - Position advances by one Euler step.
pub fn integrate(prev: &CharacterState, input: StepInput, tuning: &Tuning) -> CharacterState {
    let mut next = *prev;

    // Vertical: accumulate gravity
    next.velocity.y += tuning.gravity;

    // Horizontal: recompute from held keys, right wins when both held
    next.velocity.x = 0.0;
    if input.left_held {
        next.velocity.x = -tuning.run_speed;
        next.facing = Facing::Left;
    }
    if input.right_held {
        next.velocity.x = tuning.run_speed;
        next.facing = Facing::Right;
    }

    // Jump: press edge, grounded only
    if input.jump_pressed && !next.airborne {
        next.velocity.y = -tuning.jump_impulse;
        next.airborne = true;
    }

    // One Euler step
    next.position.x += next.velocity.x;
    next.position.y += next.velocity.y;

    next
}

//=== Collision Resolver ==================================================

/// Clamps an integrated candidate to world and ground bounds.
///
/// - `x = max(0, x)`: the left wall is impenetrable; there is no right
///   wall (the world is unbounded rightward).
/// - `y = min(y, ground)`: descent stops at the ground plane; upward
///   motion is never clamped.
/// - Ground contact forces `velocity.y = 0` and clears the airborne
///   flag regardless of prior state. This is the sole mechanism that
///   ends a jump or fall.
pub fn resolve(candidate: &CharacterState, tuning: &Tuning) -> CharacterState {
    let mut resolved = *candidate;

    resolved.position.x = resolved.position.x.max(0.0);

    if resolved.position.y >= tuning.ground_y {
        resolved.position.y = tuning.ground_y;
        resolved.velocity.y = 0.0;
        resolved.airborne = false;
    }

    resolved
}

//=========================================================================
// Unit Tests
//=========================================================================
