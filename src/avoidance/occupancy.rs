// src/avoidance/occupancy.rs
//
// Per-pixel occupancy scoring. This is the only loop that touches every
// pixel of the region, so it runs exactly once per frame.

use super::partition::ZoneBoundaries;
use super::region::Region;
use crate::types::DepthFrame;

/// The five overlapping horizontal zones of a region. Thirds drive the
/// steering choice; halves break left/right ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    LeftThird = 0,
    CenterThird = 1,
    RightThird = 2,
    LeftHalf = 3,
    RightHalf = 4,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::LeftThird,
        Zone::CenterThird,
        Zone::RightThird,
        Zone::LeftHalf,
        Zone::RightHalf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::LeftThird => "left third",
            Zone::CenterThird => "center third",
            Zone::RightThird => "right third",
            Zone::LeftHalf => "left half",
            Zone::RightHalf => "right half",
        }
    }
}

/// Obstacle counts per zone. `percent` is the derived occupancy, `None`
/// when the zone holds no pixels at all (degenerate regions narrower than
/// three columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyTable {
    near: [u32; 5],
    total: [u32; 5],
}

impl OccupancyTable {
    /// Assemble a table from raw per-zone counts, ordered as [`Zone::ALL`].
    pub fn from_counts(near: [u32; 5], total: [u32; 5]) -> Self {
        Self { near, total }
    }

    pub fn near(&self, zone: Zone) -> u32 {
        self.near[zone as usize]
    }

    pub fn total(&self, zone: Zone) -> u32 {
        self.total[zone as usize]
    }

    /// Occupancy percentage for a zone, or `None` for a zone with no data.
    pub fn percent(&self, zone: Zone) -> Option<f32> {
        let total = self.total[zone as usize];
        if total == 0 {
            return None;
        }
        Some(100.0 * self.near[zone as usize] as f32 / total as f32)
    }

    fn count(&mut self, zone: Zone, near: bool) {
        self.total[zone as usize] += 1;
        if near {
            self.near[zone as usize] += 1;
        }
    }
}

/// Is this pixel an obstacle inside the unsafe range?
///
/// Zero disparity means the matcher produced no measurement there, and a
/// non-finite depth means the conversion blew up; both count as near,
/// because an unknown obstacle must be treated like a present one.
fn is_near(disparity: f32, depth_scale: f32, distance_threshold: f32) -> bool {
    if disparity == 0.0 {
        return true;
    }
    let depth = depth_scale / disparity;
    !depth.is_finite() || depth <= distance_threshold
}

/// Score every pixel of the region into the occupancy table in a single
/// linear pass.
pub fn score(
    frame: &DepthFrame,
    region: &Region,
    bounds: &ZoneBoundaries,
    distance_threshold: f32,
) -> OccupancyTable {
    let depth_scale = frame.depth_scale();
    let mut table = OccupancyTable::default();

    for y in region.y_start..region.y_end {
        for x in region.x_start..region.x_end {
            let near = is_near(frame.at(x, y), depth_scale, distance_threshold);

            if x < bounds.left {
                table.count(Zone::LeftThird, near);
                table.count(Zone::LeftHalf, near);
            } else if x < bounds.right {
                table.count(Zone::CenterThird, near);
                if x < bounds.mid {
                    table.count(Zone::LeftHalf, near);
                } else {
                    table.count(Zone::RightHalf, near);
                }
            } else {
                table.count(Zone::RightThird, near);
                table.count(Zone::RightHalf, near);
            }
        }
    }

    table
}
