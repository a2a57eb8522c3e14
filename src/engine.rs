//=========================================================================
// Wayfare Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_tuning()              runs platform
//         ├─ with_layout()             blocks until exit
//         └─ on_frame()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::frame::FrameSnapshot;
use crate::core::input::Controls;
use crate::core::scene::{GameWorld, SceneCommand, WorldLayout};
use crate::core::sim::Tuning;
use crate::core::{CoreSystemsOrchestrator, FrameSink};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Provides a fluent API for setting engine parameters before
/// construction.
///
/// # Default Values
///
/// - **TPS**: 60.0 (simulation steps per second)
/// - **Channel capacity**: 128 events
/// - **Tuning / controls / layout**: the shipped course world
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use wayfare_engine::EngineBuilder;
///
/// EngineBuilder::new().build().run();
/// ```
///
/// Advanced configuration:
/// ```no_run
/// use wayfare_engine::prelude::*;
///
/// EngineBuilder::new()
///     .with_tps(120.0)                  // Finer simulation steps
///     .with_controls(Controls {
///         jump: KeyCode::KeyW,
///         ..Controls::default()
///     })
///     .on_frame(|snapshot| {
///         // Hand the snapshot to the render adapter
///         let _ = snapshot;
///     })
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    title: String,
    tuning: Tuning,
    controls: Controls,
    layout: WorldLayout,
    frame_sink: Option<FrameSink>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            title: "Wayfare".to_string(),
            tuning: Tuning::default(),
            controls: Controls::default(),
            layout: WorldLayout::default(),
            frame_sink: None,
        }
    }

    /// Sets the target simulation steps per second for the logic thread.
    ///
    /// The logic thread maintains this rate with a fixed-timestep
    /// accumulator, so simulation speed never depends on the display
    /// refresh rate. Note that [`Tuning`] constants are per step; a
    /// host raising the TPS should scale them accordingly.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Larger values provide more buffering during frame spikes but
    /// increase memory usage.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the per-step physics constants.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Replaces the key bindings.
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Replaces the static world content (doors, spawns, geometry).
    pub fn with_layout(mut self, layout: WorldLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Registers the frame sink: the render adapter's entry point.
    ///
    /// The callback runs on the logic thread after each batch of fixed
    /// steps and receives the freshly built [`FrameSnapshot`]. Keep it
    /// cheap (hand the snapshot off, don't render inline).
    pub fn on_frame<F>(mut self, sink: F) -> Self
    where
        F: FnMut(&FrameSnapshot) + Send + 'static,
    {
        self.frame_sink = Some(Box::new(sink));
        self
    }

    /// Builds the engine instance.
    ///
    /// Consumes the builder and produces a configured [`Engine`] ready
    /// for execution.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let world = GameWorld::new(self.tuning, self.controls, self.layout);
        let (command_tx, command_rx) = unbounded();

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(world, self.frame_sink),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
            command_tx,
            command_rx,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Wayfare Engine runtime.
///
/// The engine coordinates all subsystems and manages the main execution
/// loop. Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► StateTracker, GameWorld, FrameSnapshot
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Keyboard Events
///
/// Communication: MPSC Channel (PlatformEvent)
///                MPSC Channel (SceneCommand, UI → core)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    title: String,
    command_tx: Sender<SceneCommand>,
    command_rx: Receiver<SceneCommand>,
}

impl Engine {
    //--- Scene Command Hook -------------------------------------------------

    /// Returns a sender for scene commands.
    ///
    /// The render adapter keeps a clone of this to deliver explicit UI
    /// actions — leaving the mentor scene is a button, not a key edge:
    ///
    /// ```no_run
    /// use wayfare_engine::prelude::*;
    ///
    /// let engine = EngineBuilder::new().build();
    /// let commands = engine.scene_commands();
    ///
    /// // Later, from the UI side:
    /// let _ = commands.send(SceneCommand::ExitMentor);
    ///
    /// engine.run();
    /// ```
    pub fn scene_commands(&self) -> Sender<SceneCommand> {
        self.command_tx.clone()
    }

    //--- Execution ----------------------------------------------------------

    /// Starts the engine runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the MPSC channel for platform → core communication
    /// 2. Spawns the logic thread stepping at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → logic thread terminates →
    ///    both the key-event and frame subscriptions die with their
    ///    owning threads, so nothing dangles after teardown
    ///
    /// # Thread Panic Handling
    ///
    /// If the logic thread panics, the error is logged and the engine
    /// attempts graceful shutdown.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx) = bounded(self.channel_capacity);

        info!("MPSC channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.command_rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.title);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {:?}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
