//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the simulation running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Receive and batch platform events via MPSC channel
// - Drain scene commands from the UI side at step boundaries
// - Run the fixed-timestep loop: accumulate real elapsed time and run
//   zero-or-more simulation steps per wakeup, so simulation speed is
//   independent of the display refresh rate
// - Publish a frame snapshot to the render adapter after stepping
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// the input tracker and the game world outright and is their sole
// writer. Communication with the platform occurs only through message
// passing (MPSC), ensuring isolation and thread safety.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;

//=== Internal Modules ====================================================

use crate::platform::PlatformEvent;
use frame::FrameSnapshot;
use input::{InputEvent, StateTracker};
use scene::{GameWorld, SceneCommand};

pub mod frame;
pub mod input;
pub mod scene;
pub mod sim;

//=== FrameSink ===========================================================

/// Callback receiving the frame snapshot after each batch of steps.
///
/// This is the render adapter boundary: the engine core never draws,
/// it only publishes state.
pub(crate) type FrameSink = Box<dyn FnMut(&FrameSnapshot) + Send>;

//=== TickControl =========================================================
//
// Defines control flow for the core update loop.
// Event collection can signal either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CoreSystemsOrchestrator =============================================
//
// Owns the simulation-side systems (input tracker, game world) and
// drives them at a fixed step rate on a dedicated thread.
//
pub(crate) struct CoreSystemsOrchestrator {
    tracker: StateTracker,
    world: GameWorld,
    frame_sink: Option<FrameSink>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes the simulation but does not yet start the logic thread.
    //
    pub fn new(world: GameWorld, frame_sink: Option<FrameSink>) -> Self {
        Self {
            tracker: StateTracker::new(),
            world,
            frame_sink,
        }
    }

    //--- spawn_core_thread() -----------------------------------------------
    //
    // Spawns the logic thread responsible for stepping the simulation at
    // a fixed update frequency (TPS - ticks per second).
    //
    // Each wakeup:
    //  1. Collects platform events (blocking until the next step is due)
    //  2. Drains queued scene commands into the world
    //  3. Runs as many fixed steps as the elapsed time covers
    //  4. Publishes a frame snapshot if any step ran
    //  5. Exits cleanly when the window closes or the channel disconnects
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        commands: Receiver<SceneCommand>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let step = Duration::from_secs_f64(1.0 / tps);

        // A stalled thread catches up at most this far, then drops time.
        let max_backlog = step * 8;

        thread::spawn(move || {
            let mut tracker = self.tracker;
            let mut world = self.world;
            let mut frame_sink = self.frame_sink;

            let mut pending: Vec<InputEvent> = Vec::with_capacity(16);
            let mut accumulator = Duration::ZERO;
            let mut last = Instant::now();

            loop {
                //--- Step 1: Gather platform events -----------------------
                let wait = step.saturating_sub(accumulator);
                if let TickControl::Exit =
                    Self::collect_platform_events(&receiver, &mut pending, wait)
                {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Drain scene commands --------------------------
                while let Ok(command) = commands.try_recv() {
                    world.queue_command(command);
                }

                //--- Step 3: Fixed-timestep update --------------------------
                let now = Instant::now();
                accumulator = (accumulator + (now - last)).min(max_backlog);
                last = now;

                let mut stepped = false;
                while accumulator >= step {
                    tracker.begin_step();
                    tracker.process_events(&pending);
                    // Press/release edges belong to the first step only
                    pending.clear();

                    world.step(&tracker);

                    accumulator -= step;
                    stepped = true;
                }

                //--- Step 4: Publish to the render adapter ------------------
                if stepped {
                    if let Some(sink) = frame_sink.as_mut() {
                        sink(&world.snapshot());
                    }
                }
            }
        })
    }

    //--- collect_platform_events() ------------------------------------------
    //
    // Aggregates all input events received from the platform, blocking at
    // most `wait` for the first one (this doubles as step pacing).
    // Returns a TickControl indicating whether to continue or exit.
    //
    fn collect_platform_events(
        receiver: &Receiver<PlatformEvent>,
        pending: &mut Vec<InputEvent>,
        wait: Duration,
    ) -> TickControl {
        // Wait for at most one pacing interval
        match receiver.recv_timeout(wait) {
            Ok(PlatformEvent::Inputs(batch)) => pending.extend(batch),
            Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Drain anything else already queued
        while let Ok(event) = receiver.try_recv() {
            match event {
                PlatformEvent::Inputs(batch) => pending.extend(batch),
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
