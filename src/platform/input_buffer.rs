//=========================================================================
// Input Buffer
//
// Collects keyboard events between frame boundaries. Acts as a
// transient event aggregator between the Winit handlers and the MPSC
// channel to the logic thread.
//
// Responsibilities:
// - Store incoming platform events for the current frame
// - Deduplicate immediately repeated events
// - Hand over the batch via `drain()` at the frame boundary
//
// Notes:
// The buffer exists only for the current frame and is reset after
// being drained. Capacity is retained across frames.
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================
//
// Represents the transient event store for one frame of input.
// Order is significant: the tracker replays events in arrival order.
//
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for typical frames to minimize reallocations.
    //
    pub fn new() -> Self {
        const EVENT_BASE: usize = 64;

        Self {
            events: Vec::with_capacity(EVENT_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends a keyboard event. Identical back-to-back events are
    // ignored to prevent flooding.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's batch and resets the buffer, or `None` when
    // nothing was collected (empty batches are not sent).
    //
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
