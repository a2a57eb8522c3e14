//=========================================================================
// World Layout
//=========================================================================
//
// Static world content: trigger zones, spawn points, the mentor's
// position, and scene geometry constants. Immutable for the session.
//
// The default layout is the shipped course world: nine labelled doors
// spaced 400 px apart along the ground line, with the mentor waiting
// in the secondary scene.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::sim::{TriggerZone, Vec2};

//=== WorldLayout =========================================================

/// Static content and geometry of the game world.
///
/// Supplied once at engine construction; the simulation only ever reads
/// it. Zone ids must be unique within a layout. Zones need not be
/// sorted: the proximity detector is order-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldLayout {
    /// Stationary doors along the primary world.
    pub zones: Vec<TriggerZone>,

    /// Where the character appears when (re)entering the primary world.
    pub world_spawn: Vec2,

    /// Where the character appears when entering the mentor scene.
    pub mentor_spawn: Vec2,

    /// Fixed position of the mentor actor in the secondary scene.
    pub mentor_position: Vec2,

    /// Width of the visible viewport, used by the camera.
    pub viewport_width: f32,

    /// Horizontal activation radius of a trigger zone (strict).
    pub trigger_radius: f32,
}

impl WorldLayout {
    /// Ground-line y coordinate the default layout is built around.
    const GROUND_Y: f32 = 390.0;

    /// Y coordinate of door anchors (door base sits above the ground line).
    const DOOR_Y: f32 = 330.0;
}

impl Default for WorldLayout {
    fn default() -> Self {
        let labels = [
            "Introduction to C",
            "Variables & Data Types",
            "Operators & Expressions",
            "Control Structures",
            "Functions",
            "Arrays & Strings",
            "Pointers",
            "Structures & Unions",
            "File I/O",
        ];

        let zones = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let x = 200.0 + 400.0 * i as f32;
                TriggerZone::new(i as u32 + 1, Vec2::new(x, Self::DOOR_Y), *label)
            })
            .collect();

        Self {
            zones,
            world_spawn: Vec2::new(100.0, Self::GROUND_Y),
            mentor_spawn: Vec2::new(100.0, Self::GROUND_Y),
            mentor_position: Vec2::new(800.0, 380.0),
            viewport_width: 800.0,
            trigger_radius: 20.0,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
