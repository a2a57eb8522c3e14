//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard events.
//
// This module abstracts away platform-specific input (e.g. Winit, SDL)
// into a unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held set + per-step edges)
//         ↓
//    Simulation step (movement, jump, interact)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyA` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY).
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
///
/// Platform mapping:
/// - Winit: Uses `winit::keyboard::KeyCode`
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Fallback for keys not explicitly mapped by the input layer.
    ///
    /// Used when the platform reports a key that isn't in the enum.
    /// Unidentified keys are stored like any other but never consulted
    /// by the simulation, so they are inert by construction.
    Unidentified
}

//=== InputEvent ==========================================================

/// Low-level keyboard event from the platform layer.
///
/// Events carry the transition type (down/up) and the key involved.
/// They are cheap to copy and hash-stable for buffering and
/// deduplication in the platform layer.
///
/// # Event Types
///
/// - **KeyDown/KeyUp**: Discrete keyboard transitions
/// - **Unidentified**: Unknown/unsupported events (ignored by the tracker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Unrecognized or unsupported event.
    ///
    /// These are silently ignored by the input system. Used for forward
    /// compatibility when new platform events are added.
    Unidentified
}

//=========================================================================
// Unit Tests
//=========================================================================
