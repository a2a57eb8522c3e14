//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's logic thread via MPSC.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  StateTracker    │
//  │   ↓                      │    │  ↓               │
//  │  map_key_event()         │    │  GameWorld       │
//  │   ↓                      │    │  (fixed steps)   │
//  │  InputBuffer             │    │  ↓               │
//  │   ↓                      │    │  FrameSnapshot   │
//  │  RedrawRequested         │    └──────────────────┘
//  │   ↓ (flush)              │             ↑
//  │  MPSC Channel ───────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Logic thread steps at a fixed rate (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Key handlers never touch simulation state**: they only append to
//   the buffer, preserving single-writer discipline without locks
// - **Graceful channel disconnect**: If the logic thread dies, the
//   platform logs a warning but keeps running so the window can close
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit key events → engine InputEvents
// - Buffer input until the frame boundary
// - Send batched events to the logic thread
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::event::InputEvent;
use event_mapper::map_key_event;
use input_buffer::InputBuffer;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the logic thread.
///
/// These are the only messages that cross the thread boundary.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched keyboard events for a single frame.
    ///
    /// Sent on every `RedrawRequested` event (typically 60-144Hz
    /// depending on monitor refresh rate). Order within a batch is
    /// significant. Empty batches are NOT sent.
    Inputs(Vec<InputEvent>),

    /// Window close requested by user or OS.
    ///
    /// Sent when:
    /// - User clicks the window X button
    /// - OS requests shutdown (logout, restart, etc.)
    /// - Alt+F4 / Cmd+Q pressed
    ///
    /// The logic thread terminates cleanly upon receiving this.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the engine cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and keyboard event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the logic thread via MPSC channel.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender)` - initializes subsystems
/// 2. **Execution**: `platform.run()` - starts event loop (blocks)
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
/// Communication with other threads occurs exclusively via the MPSC sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers keyboard input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to the logic thread.
    event_sender: Sender<PlatformEvent>,

    /// Window title, taken from the engine configuration.
    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, title: String) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            title,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] only if event loop creation fails before
    /// starting. Once started, errors are handled internally (logged and
    /// graceful shutdown attempted).
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(PlatformError::EventLoopCreation)?;

        event_loop.run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the logic thread.
    ///
    /// Called on every `RedrawRequested` event. Empty buffers are not
    /// sent.
    ///
    /// # Error Handling
    ///
    /// If the channel is disconnected (logic thread panicked or exited
    /// early), logs a warning and drops the events. This is intentional:
    /// the platform thread must keep running so the user can close the
    /// window normally; the logic thread's shutdown is logged separately.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();

            trace!(target: "platform::input", "Flushing {} keyboard events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 500));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify logic thread of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = map_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, CursorMoved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
