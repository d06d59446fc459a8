// src/avoidance/partition.rs

use super::region::Region;

/// Vertical split positions inside a located region, in frame coordinates.
///
/// `left` and `right` cut the region into thirds; `mid` cuts it in half.
/// The halves are only consulted to break a left/right tie, they are not a
/// finer partition of the thirds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBoundaries {
    /// End of the left third.
    pub left: usize,
    /// Half split, used for the left-half/right-half tie-break.
    pub mid: usize,
    /// Start of the right third.
    pub right: usize,
}

/// Compute the zone boundaries for a region. Purely geometric, recomputed
/// every frame; integer division, so uneven widths give the right third the
/// extra columns.
pub fn partition(region: &Region) -> ZoneBoundaries {
    let w = region.width();
    ZoneBoundaries {
        left: w / 3 + region.x_start,
        mid: w / 2 + region.x_start,
        right: w * 2 / 3 + region.x_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x_start: usize, x_end: usize) -> Region {
        Region {
            x_start,
            y_start: 0,
            x_end,
            y_end: 10,
        }
    }

    #[test]
    fn test_even_split() {
        let bounds = partition(&region(0, 90));
        assert_eq!(bounds.left, 30);
        assert_eq!(bounds.mid, 45);
        assert_eq!(bounds.right, 60);
    }

    #[test]
    fn test_offset_region_shifts_boundaries() {
        let bounds = partition(&region(10, 100));
        assert_eq!(bounds.left, 40);
        assert_eq!(bounds.mid, 55);
        assert_eq!(bounds.right, 70);
    }

    #[test]
    fn test_boundaries_are_ordered_for_small_widths() {
        for width in 3..40 {
            let bounds = partition(&region(7, 7 + width));
            assert!(7 <= bounds.left, "width {width}");
            assert!(bounds.left <= bounds.mid, "width {width}");
            assert!(bounds.mid <= bounds.right, "width {width}");
            assert!(bounds.right <= 7 + width, "width {width}");
        }
    }
}
