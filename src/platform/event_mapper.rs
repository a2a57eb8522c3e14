//=========================================================================
// Platform Event Mapper
//
// Converts Winit keyboard events to engine-level `InputEvent` types.
// Provides a clean separation between OS-specific input and the
// engine's internal event representation.
//
// Responsibilities:
// - Translate keyboard events
// - Ignore unsupported or irrelevant Winit events
// - Filter OS key repeats (held keys re-report as Pressed)
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Special keys -----------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified
        }
    }
}

//=== Key Event Conversion ================================================
//
// Converts full Winit `KeyEvent`s into `InputEvent`s.
//
// Notes:
// - OS key repeats (`repeat == true`) are dropped; the state tracker
//   derives held state from the first press and the eventual release.
// - Keys with no physical code mapping are dropped entirely rather
//   than forwarded as `Unidentified`, keeping the channel quiet.
//

pub(crate) fn map_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    if key_event.repeat {
        return None;
    }

    let key = match key_event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    if matches!(key, KeyCode::Unidentified) {
        return None;
    }

    Some(match key_event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
