//=========================================================================
// Camera
//=========================================================================
//
// Derives the horizontal viewport offset that keeps the character
// centered. Pure function of the just-resolved character position;
// the camera owns no state of its own.
//
// The offset is clamped at zero on the left (world edge) and not
// clamped on the right, matching the unbounded-right world model.
//
//=========================================================================

/// Horizontal translation for the world layer.
///
/// `offset = max(0, character_x − viewport_width / 2)`. The render
/// adapter subtracts this from world coordinates to position the
/// visible layer.
pub fn camera_offset(character_x: f32, viewport_width: f32) -> f32 {
    (character_x - viewport_width / 2.0).max(0.0)
}

//=========================================================================
// Unit Tests
//=========================================================================
