//=========================================================================
// Scene System
//=========================================================================
//
// The two-scene state machine and the per-step game update.
//
// Architecture:
//   GameWorld
//     ├─ scene: SceneState (tagged variant, owns its character state)
//     ├─ layout: WorldLayout (static content)
//     └─ commands: Vec<SceneCommand> (drained at step boundaries)
//
// Flow per fixed step:
//   sample input → physics (integrate + resolve) → derive trigger/camera
//     → interact transition → drain commands
//
// Each `SceneState` variant owns its own character sub-state, and a
// transition replaces the whole variant. Stale fields (residual
// airborne flag, old camera offset) cannot leak across scenes because
// there is no partial mutation path.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::frame::{CharacterView, DoorView, FrameSnapshot};
use crate::core::input::{Controls, StateTracker, StepInput};
use crate::core::sim::{
    active_trigger, camera_offset, integrate, resolve, CharacterState, TriggerId, Tuning,
};

mod layout;

pub use layout::WorldLayout;

//=== SceneMode ===========================================================

/// Which scene is currently active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    /// The scrolling primary world with doors.
    World,

    /// The fixed mentor stage.
    Mentor,
}

//=== SceneCommand ========================================================

/// Discrete commands from outside the simulation, drained at step
/// boundaries.
///
/// Leaving the mentor scene is an explicit UI action (a button on the
/// render side), not a key edge, so it arrives as a command rather
/// than through the input tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Return from the mentor scene to the primary world.
    ///
    /// No-op while already in the world scene.
    ExitMentor,
}

//=== SceneState ==========================================================

// Tagged-variant scene state. Each variant owns the character plus the
// derived values that are meaningful in that scene and nothing else.
#[derive(Debug, Clone, PartialEq)]
enum SceneState {
    World {
        character: CharacterState,
        camera_offset: f32,
        active_trigger: Option<TriggerId>,
    },
    Mentor {
        character: CharacterState,
    },
}

impl SceneState {
    /// Fresh world scene with the character at the world spawn.
    fn spawn_world(layout: &WorldLayout) -> Self {
        let character = CharacterState::at_spawn(layout.world_spawn);
        Self::World {
            camera_offset: camera_offset(character.position.x, layout.viewport_width),
            active_trigger: active_trigger(
                character.position.x,
                &layout.zones,
                layout.trigger_radius,
            ),
            character,
        }
    }

    /// Fresh mentor scene with the character at the mentor spawn.
    fn spawn_mentor(layout: &WorldLayout) -> Self {
        Self::Mentor {
            character: CharacterState::at_spawn(layout.mentor_spawn),
        }
    }
}

//=== GameWorld ===========================================================

/// The complete simulation state and its update logic.
///
/// Owned and stepped exclusively by the logic thread; the only inputs
/// are the input tracker (fed from platform events) and the command
/// queue (fed from the UI side). Everything the render adapter sees
/// goes out through [`snapshot`](Self::snapshot).
pub struct GameWorld {
    tuning: Tuning,
    controls: Controls,
    layout: WorldLayout,
    scene: SceneState,
    commands: Vec<SceneCommand>,
}

impl GameWorld {
    //--- Construction -----------------------------------------------------

    /// Creates a world in the primary scene at the world spawn point.
    pub fn new(tuning: Tuning, controls: Controls, layout: WorldLayout) -> Self {
        Self {
            scene: SceneState::spawn_world(&layout),
            tuning,
            controls,
            layout,
            commands: Vec::new(),
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Queues a command to be applied at the end of the next step.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the simulation by one fixed step.
    ///
    /// The tracker must already reflect this step's events (the caller
    /// drives `begin_step`/`process_events`). Scene transitions from
    /// the interact key happen inside the step; queued commands are
    /// applied at the step boundary afterwards.
    pub fn step(&mut self, tracker: &StateTracker) {
        let input = self.controls.sample(tracker);

        match &self.scene {
            SceneState::World { character, .. } => self.step_world(*character, input),
            SceneState::Mentor { character } => self.step_mentor(*character, input),
        }

        self.drain_commands();
    }

    //--- Scene Steps ------------------------------------------------------

    fn step_world(&mut self, previous: CharacterState, input: StepInput) {
        let character = resolve(&integrate(&previous, input, &self.tuning), &self.tuning);

        let active = active_trigger(
            character.position.x,
            &self.layout.zones,
            self.layout.trigger_radius,
        );

        if input.interact_pressed {
            match active {
                Some(id) => {
                    info!("Entering door {:?}", id);
                    self.scene = SceneState::spawn_mentor(&self.layout);
                    return;
                }
                // Intentional no-op: interacting with nothing nearby
                None => debug!("Interact pressed with no door in range"),
            }
        }

        self.scene = SceneState::World {
            camera_offset: camera_offset(character.position.x, self.layout.viewport_width),
            active_trigger: active,
            character,
        };
    }

    fn step_mentor(&mut self, previous: CharacterState, input: StepInput) {
        // Same physics as the world scene; no doors, no scrolling.
        // Interact edges are meaningless here and fall through untouched.
        let character = resolve(&integrate(&previous, input, &self.tuning), &self.tuning);

        self.scene = SceneState::Mentor { character };
    }

    //--- Command Processing -----------------------------------------------

    fn drain_commands(&mut self) {
        for command in std::mem::take(&mut self.commands) {
            match command {
                SceneCommand::ExitMentor => match self.scene {
                    SceneState::Mentor { .. } => {
                        info!("Leaving mentor scene");
                        self.scene = SceneState::spawn_world(&self.layout);
                    }
                    SceneState::World { .. } => {
                        debug!("ExitMentor ignored: already in world scene");
                    }
                },
            }
        }
    }

    //--- Publication ------------------------------------------------------

    /// Builds the frame snapshot for the render adapter.
    pub fn snapshot(&self) -> FrameSnapshot {
        match &self.scene {
            SceneState::World { character, camera_offset, active_trigger } => {
                let doors = self
                    .layout
                    .zones
                    .iter()
                    .map(|zone| DoorView {
                        id: zone.id,
                        position: zone.position,
                        label: zone.label.clone(),
                        active: Some(zone.id) == *active_trigger,
                    })
                    .collect();

                FrameSnapshot::World {
                    character: CharacterView::from(character),
                    camera_offset: *camera_offset,
                    doors,
                }
            }
            SceneState::Mentor { character } => FrameSnapshot::Mentor {
                character: CharacterView::from(character),
                mentor_position: self.layout.mentor_position,
            },
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// The currently active scene.
    pub fn scene_mode(&self) -> SceneMode {
        match self.scene {
            SceneState::World { .. } => SceneMode::World,
            SceneState::Mentor { .. } => SceneMode::Mentor,
        }
    }

    /// Resolved character state of the active scene.
    pub fn character(&self) -> &CharacterState {
        match &self.scene {
            SceneState::World { character, .. } | SceneState::Mentor { character } => character,
        }
    }

    /// Camera offset of the world scene; zero in the mentor scene.
    pub fn camera_offset(&self) -> f32 {
        match self.scene {
            SceneState::World { camera_offset, .. } => camera_offset,
            SceneState::Mentor { .. } => 0.0,
        }
    }

    /// The trigger zone in activation range, if any (world scene only).
    pub fn active_trigger(&self) -> Option<TriggerId> {
        match self.scene {
            SceneState::World { active_trigger, .. } => active_trigger,
            SceneState::Mentor { .. } => None,
        }
    }

    /// The static world content.
    pub fn layout(&self) -> &WorldLayout {
        &self.layout
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::sim::Vec2;

    //--- Test Helpers -----------------------------------------------------

    fn world() -> GameWorld {
        GameWorld::new(Tuning::default(), Controls::default(), WorldLayout::default())
    }

    /// Runs one step with the given events applied first.
    fn step_with(world: &mut GameWorld, tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.begin_step();
        tracker.process_events(events);
        world.step(tracker);
    }

    /// Walks the character right until it stands on the given x (± one step).
    fn walk_to(world: &mut GameWorld, tracker: &mut StateTracker, target_x: f32) {
        step_with(world, tracker, &[InputEvent::KeyDown(KeyCode::ArrowRight)]);
        while world.character().position.x < target_x {
            step_with(world, tracker, &[]);
        }
        step_with(world, tracker, &[InputEvent::KeyUp(KeyCode::ArrowRight)]);
    }

    fn press(key: KeyCode) -> [InputEvent; 1] {
        [InputEvent::KeyDown(key)]
    }

    //=====================================================================
    // World Scene
    //=====================================================================

    #[test]
    fn starts_in_world_scene_at_spawn() {
        let world = world();

        assert_eq!(world.scene_mode(), SceneMode::World);
        assert_eq!(world.character().position, Vec2::new(100.0, 390.0));
        assert_eq!(world.camera_offset(), 0.0);
        assert!(world.active_trigger().is_none());
    }

    #[test]
    fn walking_updates_camera_and_trigger_each_step() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        // First door is at x = 200, radius 20
        walk_to(&mut world, &mut tracker, 190.0);

        assert_eq!(world.active_trigger(), Some(crate::core::sim::TriggerId(1)));
        assert_eq!(
            world.camera_offset(),
            camera_offset(world.character().position.x, 800.0)
        );
    }

    #[test]
    fn trigger_deactivates_when_walking_away() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        assert!(world.active_trigger().is_some());

        walk_to(&mut world, &mut tracker, 300.0);
        assert!(world.active_trigger().is_none());
    }

    //=====================================================================
    // World → Mentor Transition
    //=====================================================================

    #[test]
    fn interact_at_door_enters_mentor_scene_reset_to_spawn() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        assert!(world.active_trigger().is_some());

        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        assert_eq!(world.scene_mode(), SceneMode::Mentor);
        assert_eq!(world.character().position, Vec2::new(100.0, 390.0));
        assert_eq!(world.character().velocity, Vec2::ZERO);
        assert!(!world.character().airborne);
    }

    #[test]
    fn interact_with_no_door_in_range_is_a_noop() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        let before = *world.character();
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        assert_eq!(world.scene_mode(), SceneMode::World);
        assert_eq!(*world.character(), before);
    }

    #[test]
    fn interact_mid_jump_over_door_still_enters() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);

        // Jump, then interact at the apex: only horizontal distance matters
        step_with(&mut world, &mut tracker, &press(KeyCode::Space));
        assert!(world.character().airborne);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        assert_eq!(world.scene_mode(), SceneMode::Mentor);
        assert!(!world.character().airborne, "Airborne flag must not leak across scenes");
    }

    #[test]
    fn held_interact_key_does_not_retrigger() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));
        assert_eq!(world.scene_mode(), SceneMode::Mentor);

        world.queue_command(SceneCommand::ExitMentor);
        // Key still held from the transition; no new edge, no re-entry
        step_with(&mut world, &mut tracker, &[]);
        assert_eq!(world.scene_mode(), SceneMode::World);

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &[]);
        assert_eq!(world.scene_mode(), SceneMode::World, "Held key is not an edge");
    }

    //=====================================================================
    // Mentor Scene
    //=====================================================================

    #[test]
    fn mentor_scene_has_no_triggers_and_no_scroll() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        // Walk to where a door would be in the world scene
        walk_to(&mut world, &mut tracker, 600.0);

        assert_eq!(world.scene_mode(), SceneMode::Mentor);
        assert!(world.active_trigger().is_none());
        assert_eq!(world.camera_offset(), 0.0);
    }

    #[test]
    fn character_can_walk_and_jump_in_mentor_scene() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        let x0 = world.character().position.x;
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowRight));
        assert!(world.character().position.x > x0);

        step_with(&mut world, &mut tracker, &press(KeyCode::Space));
        assert!(world.character().airborne);
    }

    #[test]
    fn interact_in_mentor_scene_is_a_noop() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));
        assert_eq!(world.scene_mode(), SceneMode::Mentor);

        // Release and press again inside the mentor scene
        step_with(&mut world, &mut tracker, &[InputEvent::KeyUp(KeyCode::ArrowUp)]);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        assert_eq!(world.scene_mode(), SceneMode::Mentor);
    }

    //=====================================================================
    // Mentor → World Transition
    //=====================================================================

    #[test]
    fn exit_command_returns_to_world_spawn_not_entry_point() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        // Enter from the second door, far from spawn
        walk_to(&mut world, &mut tracker, 600.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));
        assert_eq!(world.scene_mode(), SceneMode::Mentor);

        world.queue_command(SceneCommand::ExitMentor);
        step_with(&mut world, &mut tracker, &[]);

        assert_eq!(world.scene_mode(), SceneMode::World);
        assert_eq!(world.character().position, Vec2::new(100.0, 390.0));
        assert_eq!(world.character().velocity, Vec2::ZERO);
        assert!(!world.character().airborne);
    }

    #[test]
    fn exit_command_in_world_scene_is_a_noop() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        let before = *world.character();
        world.queue_command(SceneCommand::ExitMentor);
        step_with(&mut world, &mut tracker, &[]);

        assert_eq!(world.scene_mode(), SceneMode::World);
        assert_eq!(world.character().position, before.position);
    }

    #[test]
    fn held_movement_key_survives_scene_transition() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);

        // Hold right while entering the door
        step_with(&mut world, &mut tracker, &[InputEvent::KeyDown(KeyCode::ArrowRight)]);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));
        assert_eq!(world.scene_mode(), SceneMode::Mentor);

        // Input is not reset on transition: still walking right
        let x0 = world.character().position.x;
        step_with(&mut world, &mut tracker, &[]);
        assert!(world.character().position.x > x0);
    }

    //=====================================================================
    // Snapshot
    //=====================================================================

    #[test]
    fn world_snapshot_annotates_only_the_active_door() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);

        match world.snapshot() {
            FrameSnapshot::World { character, doors, camera_offset } => {
                assert_eq!(doors.len(), 9);
                assert_eq!(doors.iter().filter(|d| d.active).count(), 1);
                assert!(doors[0].active, "Character stands at the first door");
                assert_eq!(doors[0].label, "Introduction to C");
                assert_eq!(character.position, world.character().position);
                assert_eq!(camera_offset, world.camera_offset());
            }
            other => panic!("Expected world frame, got {:?}", other),
        }
    }

    #[test]
    fn mentor_snapshot_carries_fixed_mentor_position() {
        let mut world = world();
        let mut tracker = StateTracker::new();

        walk_to(&mut world, &mut tracker, 200.0);
        step_with(&mut world, &mut tracker, &press(KeyCode::ArrowUp));

        match world.snapshot() {
            FrameSnapshot::Mentor { mentor_position, .. } => {
                assert_eq!(mentor_position, Vec2::new(800.0, 380.0));
            }
            other => panic!("Expected mentor frame, got {:?}", other),
        }
    }
}
