//=========================================================================
// Trigger Zones
//=========================================================================
//
// Stationary interactive zones ("doors") and the proximity detector.
//
// A zone becomes active when the character's horizontal distance to it
// is strictly less than the activation radius. At most one zone is
// active at a time; the detector picks the nearest by absolute
// distance and breaks ties by lowest id, so the result is fully
// deterministic regardless of zone declaration order.
//
// The active zone is derived state: recomputed every step, never
// stored across steps.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::character::Vec2;

//=== TriggerId ===========================================================

/// Stable identifier of a trigger zone within a world layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(pub u32);

//=== TriggerZone =========================================================

/// A fixed world location that enables a context-sensitive interaction
/// when the character is within activation range.
///
/// Immutable for the session; zones are static world content supplied
/// by the [`WorldLayout`](crate::core::scene::WorldLayout).
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerZone {
    pub id: TriggerId,
    pub position: Vec2,
    pub label: String,
}

impl TriggerZone {
    pub fn new(id: u32, position: Vec2, label: impl Into<String>) -> Self {
        Self {
            id: TriggerId(id),
            position,
            label: label.into(),
        }
    }
}

//=== Proximity Detector ==================================================

/// Returns the zone within activation range of `character_x`, if any.
///
/// Only horizontal distance is considered (zones are point-like along
/// the ground line). Distance must be strictly less than `radius`.
/// When several zones qualify, the nearest wins; equal distances fall
/// back to the lowest id.
pub fn active_trigger(
    character_x: f32,
    zones: &[TriggerZone],
    radius: f32,
) -> Option<TriggerId> {
    zones
        .iter()
        .filter_map(|zone| {
            let distance = (zone.position.x - character_x).abs();
            (distance < radius).then_some((distance, zone.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, id)| id)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn zone(id: u32, x: f32) -> TriggerZone {
        TriggerZone::new(id, Vec2::new(x, 330.0), format!("zone-{id}"))
    }

    const RADIUS: f32 = 20.0;

    //--- Tests ------------------------------------------------------------

    #[test]
    fn zone_active_just_inside_radius() {
        let zones = [zone(1, 200.0)];

        let active = active_trigger(200.0 - RADIUS + 1.0, &zones, RADIUS);
        assert_eq!(active, Some(TriggerId(1)));
    }

    #[test]
    fn zone_inactive_just_outside_radius() {
        let zones = [zone(1, 200.0)];

        let active = active_trigger(200.0 - RADIUS - 1.0, &zones, RADIUS);
        assert_eq!(active, None);
    }

    #[test]
    fn boundary_distance_is_exclusive() {
        let zones = [zone(1, 200.0)];

        // Exactly at radius: strictly-less-than, so not active
        assert_eq!(active_trigger(200.0 - RADIUS, &zones, RADIUS), None);
        assert_eq!(active_trigger(200.0 + RADIUS, &zones, RADIUS), None);
    }

    #[test]
    fn dead_center_is_active() {
        let zones = [zone(7, 600.0)];
        assert_eq!(active_trigger(600.0, &zones, RADIUS), Some(TriggerId(7)));
    }

    #[test]
    fn no_zones_yields_none() {
        assert_eq!(active_trigger(100.0, &[], RADIUS), None);
    }

    #[test]
    fn nearest_of_two_overlapping_zones_wins() {
        // Close enough together that both are in range
        let zones = [zone(1, 195.0), zone(2, 210.0)];

        assert_eq!(active_trigger(200.0, &zones, RADIUS), Some(TriggerId(1)));
        assert_eq!(active_trigger(206.0, &zones, RADIUS), Some(TriggerId(2)));
    }

    #[test]
    fn equal_distance_tie_breaks_by_lowest_id() {
        let zones = [zone(4, 210.0), zone(3, 190.0)];

        // Character equidistant from both; id 3 wins regardless of order
        assert_eq!(active_trigger(200.0, &zones, RADIUS), Some(TriggerId(3)));
    }

    #[test]
    fn selection_is_independent_of_declaration_order() {
        let forward = [zone(1, 195.0), zone(2, 205.0)];
        let reversed = [zone(2, 205.0), zone(1, 195.0)];

        assert_eq!(
            active_trigger(199.0, &forward, RADIUS),
            active_trigger(199.0, &reversed, RADIUS),
        );
    }
}
