// src/avoidance/region.rs
//
// Finds the bounding rectangle of valid (non-zero) disparity data.
// Stereo matchers leave a zero border where the views don't overlap;
// everything downstream works inside this rectangle only.

use crate::types::DepthFrame;
use thiserror::Error;

/// Frame contains no non-zero disparity at all, so there is no region
/// to score. The cycle aborts and no command is published.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("frame has no valid disparity data")]
pub struct EmptyFrameError;

/// Half-open pixel rectangle: `x_start <= x < x_end`, `y_start <= y < y_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
}

impl Region {
    pub fn width(&self) -> usize {
        self.x_end - self.x_start
    }

    pub fn height(&self) -> usize {
        self.y_end - self.y_start
    }
}

/// Locate the region of valid data by trimming all-zero rows and columns
/// from the four frame edges.
///
/// Each scan starts at its frame edge. The left-column scan only inspects
/// rows below the already-trimmed top edge; the bottom and right scans
/// likewise skip the trimmed left columns / top rows. The top scan alone
/// inspects the full width.
pub fn locate_region(frame: &DepthFrame) -> Result<Region, EmptyFrameError> {
    let width = frame.width();
    let height = frame.height();

    // First row with any data.
    let mut y_start = 0;
    loop {
        if y_start >= height {
            return Err(EmptyFrameError);
        }
        if (0..width).any(|x| frame.at(x, y_start) != 0.0) {
            break;
        }
        y_start += 1;
    }

    // First column with any data, checked from y_start down.
    let mut x_start = 0;
    loop {
        if x_start >= width {
            return Err(EmptyFrameError);
        }
        if (y_start..height).any(|y| frame.at(x_start, y) != 0.0) {
            break;
        }
        x_start += 1;
    }

    // Last row with any data.
    let mut y_end = height;
    loop {
        if y_end <= y_start {
            return Err(EmptyFrameError);
        }
        if (x_start..width).any(|x| frame.at(x, y_end - 1) != 0.0) {
            break;
        }
        y_end -= 1;
    }

    // Last column with any data.
    let mut x_end = width;
    loop {
        if x_end <= x_start {
            return Err(EmptyFrameError);
        }
        if (y_start..y_end).any(|y| frame.at(x_end - 1, y) != 0.0) {
            break;
        }
        x_end -= 1;
    }

    Ok(Region {
        x_start,
        y_start,
        x_end,
        y_end,
    })
}
