// src/types.rs

use ndarray::Array2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub camera: CameraConfig,
    pub avoidance: AvoidanceConfig,
    pub drive: DriveConfig,
    pub replay: ReplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Focal length in pixels, from the stereo calibration.
    pub focal_length: f32,
    /// Baseline between the two cameras in meters.
    pub baseline: f32,
    /// Divisor applied to raw image values to recover disparity
    /// (KITTI-style 16-bit disparity images use 256.0).
    pub disparity_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvoidanceConfig {
    /// Depth (meters) at which a pixel counts as an obstacle.
    pub distance_threshold: f32,
    /// Maximum occupancy percentage for a zone to still be considered clear.
    pub occupancy_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    pub linear_speed: f32,
    pub angular_speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub save_overlays: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// One disparity frame plus the calibration scalars needed to turn
/// disparity into depth. Immutable for the duration of a cycle.
#[derive(Debug, Clone)]
pub struct DepthFrame {
    /// Disparity values, row-major `(height, width)`. Zero means no data.
    pub disparity: Array2<f32>,
    pub focal_length: f32,
    pub baseline: f32,
}

impl DepthFrame {
    pub fn new(disparity: Array2<f32>, focal_length: f32, baseline: f32) -> Self {
        Self {
            disparity,
            focal_length,
            baseline,
        }
    }

    pub fn width(&self) -> usize {
        self.disparity.ncols()
    }

    pub fn height(&self) -> usize {
        self.disparity.nrows()
    }

    /// Disparity at pixel (x, y).
    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.disparity[[y, x]]
    }

    /// `f * T`, the numerator of the disparity-to-depth conversion.
    pub fn depth_scale(&self) -> f32 {
        self.focal_length * self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions_follow_array_shape() {
        let frame = DepthFrame::new(Array2::from_elem((48, 64), 1.0), 500.0, 0.12);
        assert_eq!(frame.width(), 64);
        assert_eq!(frame.height(), 48);
    }

    #[test]
    fn test_at_is_x_then_y() {
        let mut disparity = Array2::zeros((4, 8));
        disparity[[1, 6]] = 3.5;
        let frame = DepthFrame::new(disparity, 1.0, 1.0);
        assert_eq!(frame.at(6, 1), 3.5);
    }
}
