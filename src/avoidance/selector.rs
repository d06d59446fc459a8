// src/avoidance/selector.rs
//
// Flat decision table over the five zone occupancies. Priority order:
// center first, then whichever side is strictly clearer, then the
// half-comparison tie-break, otherwise no section at all.

use super::occupancy::{OccupancyTable, Zone};

/// Where the robot should steer this frame. `None` means no zone is clear
/// enough and the robot should hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SteeringDecision {
    Left,
    Center,
    Right,
    None,
}

impl SteeringDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SteeringDecision::Left => "LEFT",
            SteeringDecision::Center => "CENTER",
            SteeringDecision::Right => "RIGHT",
            SteeringDecision::None => "NONE",
        }
    }
}

/// Pick a steering zone from the occupancy table.
///
/// A zone with no data never passes a threshold test or an ordered
/// comparison, so degenerate regions fall through to `None` instead of
/// steering blind. On an exact tie between the thirds, the halves decide;
/// a half-tie goes right.
pub fn select_section(table: &OccupancyTable, occupancy_threshold: f32) -> SteeringDecision {
    let center = table.percent(Zone::CenterThird);
    let left = table.percent(Zone::LeftThird);
    let right = table.percent(Zone::RightThird);

    let clear = |pct: Option<f32>| pct.map_or(false, |p| p < occupancy_threshold);

    if clear(center) {
        return SteeringDecision::Center;
    }

    if let (Some(l), Some(r)) = (left, right) {
        if l < r && l < occupancy_threshold {
            return SteeringDecision::Left;
        }
        if r < l && r < occupancy_threshold {
            return SteeringDecision::Right;
        }
        if l == r && l < occupancy_threshold {
            return match (
                table.percent(Zone::LeftHalf),
                table.percent(Zone::RightHalf),
            ) {
                (Some(lh), Some(rh)) if lh < rh => SteeringDecision::Left,
                _ => SteeringDecision::Right,
            };
        }
    }

    SteeringDecision::None
}
