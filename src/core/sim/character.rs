//=========================================================================
// Character State
//=========================================================================
//
// Value types for the simulated character.
//
// `CharacterState` is owned exclusively by the active scene variant and
// mutated once per step by the integrator + resolver pair. Scene
// transitions never patch it field by field; they replace it wholesale
// with `CharacterState::at_spawn`.
//
//=========================================================================

//=== Vec2 ================================================================

/// Position or velocity in world pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Facing ==============================================================

/// Horizontal direction the character sprite faces.
///
/// Follows the most recently evaluated held movement key, independent
/// of actual displacement (pushing into the left wall still faces left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

//=== CharacterState ======================================================

/// Full physical state of the character for one scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    /// World-space position of the character's feet.
    pub position: Vec2,

    /// Per-step velocity. `x` is recomputed every step from held keys;
    /// `y` accumulates gravity until the resolver lands the character.
    pub velocity: Vec2,

    /// True from a jump until ground contact resets it.
    pub airborne: bool,

    /// Sprite direction.
    pub facing: Facing,
}

impl CharacterState {
    /// A grounded, motionless character at `spawn`, facing right.
    ///
    /// Used for initial state and for every scene transition.
    pub fn at_spawn(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            airborne: false,
            facing: Facing::Right,
        }
    }

    /// True when the character has horizontal motion this step.
    ///
    /// Drives the walk animation on the render side.
    pub fn moving(&self) -> bool {
        self.velocity.x != 0.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
