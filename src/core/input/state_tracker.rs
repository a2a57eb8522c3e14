//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-step delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys held) → query
//
// Step lifecycle: begin_step() → process_events() → query
//
// Held state persists across steps and across scene transitions;
// releasing a key is the only way to clear it. Press/release deltas
// live for exactly one simulation step, which is what makes discrete
// edges (jump, interact) distinguishable from held movement keys.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-step deltas (keys pressed/released).
/// Step lifecycle: begin_step() → process_events() → query.
pub struct StateTracker {
    //--- Persistent State (survives step boundary) -----------------------
    keys_down: HashSet<KeyCode>,

    //--- Step Deltas (reset each step via begin_step()) ------------------
    keys_pressed_this_step: HashSet<KeyCode>,
    keys_released_this_step: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed_this_step: HashSet::new(),
            keys_released_this_step: HashSet::new(),
        }
    }

    //--- Step Processing --------------------------------------------------

    /// Clears step-specific deltas (pressed/released flags).
    ///
    /// Held keys are untouched; they remain down until a release event
    /// arrives from the platform.
    pub fn begin_step(&mut self) {
        self.keys_pressed_this_step.clear();
        self.keys_released_this_step.clear();
    }

    /// Processes input events, updating internal state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_step.insert(*key);
                }
            }

            InputEvent::KeyUp(key) => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(key) {
                    self.keys_released_this_step.insert(*key);
                }
            }

            InputEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN (one step only).
    ///
    /// Use for discrete actions like jumping or entering a door.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_step.contains(&key)
    }

    /// Returns `true` while key is held.
    ///
    /// Use for continuous actions like movement.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_step.contains(&key)
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    //--- Tests ------------------------------------------------------------

    /// Tests that key_pressed only returns true on the transition step.
    #[test]
    fn key_pressed_only_on_transition_step() {
        let mut tracker = StateTracker::new();

        // Step 1: Key down
        tracker.begin_step();
        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        // Step 2: Still held
        tracker.begin_step();
        tracker.process_events(&[]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        // Step 3: Released
        tracker.begin_step();
        tracker.process_events(&[key_up(KeyCode::Space)]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
    }

    /// Tests that key_down persists across steps.
    #[test]
    fn key_down_persists_across_steps() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::ArrowRight)]);
        assert!(tracker.is_key_down(KeyCode::ArrowRight));

        // Hold for multiple steps
        for _ in 0..10 {
            tracker.begin_step();
            tracker.process_events(&[]);
            assert!(tracker.is_key_down(KeyCode::ArrowRight), "Key should remain down");
        }
    }

    /// Tests that multiple keys are tracked independently.
    #[test]
    fn multiple_keys_tracked_independently() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[
            key_down(KeyCode::ArrowLeft),
            key_down(KeyCode::ArrowRight),
            key_down(KeyCode::Space),
        ]);

        assert!(tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::ArrowRight));
        assert!(tracker.is_key_down(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));

        // Release one
        tracker.begin_step();
        tracker.process_events(&[key_up(KeyCode::ArrowLeft)]);

        assert!(!tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::ArrowRight));
        assert!(tracker.is_key_down(KeyCode::Space));
    }

    /// Tests fast tap (press + release same step).
    #[test]
    fn fast_tap_both_transitions_captured() {
        let mut tracker = StateTracker::new();

        // Same step: press AND release
        tracker.process_events(&[
            key_down(KeyCode::Space),
            key_up(KeyCode::Space),
        ]);

        assert!(tracker.is_key_pressed(KeyCode::Space), "Should register press");
        assert!(tracker.is_key_released(KeyCode::Space), "Should register release");
        assert!(!tracker.is_key_down(KeyCode::Space), "Should end up not down");
    }

    /// Tests duplicate KeyDown is ignored (OS key repeat).
    #[test]
    fn duplicate_key_down_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(tracker.is_key_pressed(KeyCode::Space));

        tracker.begin_step();

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(!tracker.is_key_pressed(KeyCode::Space), "Repeat press should not trigger");
        assert!(tracker.is_key_down(KeyCode::Space), "Should still be down");
    }

    /// Tests spurious KeyUp is ignored.
    #[test]
    fn key_up_without_down_ignored() {
        let mut tracker = StateTracker::new();

        // Release key that was never pressed
        tracker.process_events(&[key_up(KeyCode::KeyZ)]);

        assert!(!tracker.is_key_released(KeyCode::KeyZ), "Should not register spurious release");
    }

    /// Tests that unknown keys are stored but harmless.
    #[test]
    fn unknown_keys_are_inert() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::Unidentified)]);

        assert!(tracker.is_key_down(KeyCode::Unidentified));
        assert_eq!(tracker.keys_down().count(), 1);
    }

    /// Tests that unidentified events are safely ignored.
    #[test]
    fn unidentified_events_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[InputEvent::Unidentified]);

        assert_eq!(tracker.keys_down().count(), 0);
    }

    /// Tests empty event batch is handled correctly.
    #[test]
    fn empty_event_batch_handled() {
        let mut tracker = StateTracker::new();

        tracker.begin_step();
        tracker.process_events(&[]);

        assert_eq!(tracker.keys_down().count(), 0);
    }
}
