// src/replay.rs

use crate::types::{Config, DepthFrame};
use anyhow::{Context, Result};
use image::ImageBuffer;
use ndarray::Array2;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Replays recorded disparity images as if they arrived from a live
/// stereo camera, one frame at a time. Frames are delivered strictly in
/// filename order and the caller finishes each cycle before the next
/// frame is decoded, so no two cycles ever overlap.
pub struct FrameReplayer {
    config: Config,
}

impl FrameReplayer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn find_frame_files(&self) -> Result<Vec<PathBuf>> {
        let mut frames = Vec::new();

        let frame_extensions = vec!["png", "pgm", "tif", "PNG", "PGM", "TIF"];

        for entry in WalkDir::new(&self.config.replay.input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                if frame_extensions.contains(&ext.to_str().unwrap_or("")) {
                    frames.push(path.to_path_buf());
                }
            }
        }

        frames.sort();
        info!("Found {} disparity frame(s)", frames.len());
        Ok(frames)
    }

    /// Decode one disparity image into a frame carrying the configured
    /// calibration. Raw values divide by `disparity_scale`; zero stays
    /// zero, meaning no data at that pixel.
    pub fn load_frame(&self, path: &Path) -> Result<DepthFrame> {
        let img = image::open(path)
            .with_context(|| format!("decoding disparity image {}", path.display()))?;
        let luma = img.into_luma16();
        Ok(self.frame_from_luma16(&luma))
    }

    fn frame_from_luma16(&self, luma: &ImageBuffer<image::Luma<u16>, Vec<u16>>) -> DepthFrame {
        let (width, height) = luma.dimensions();
        let scale = self.config.camera.disparity_scale;

        let mut disparity = Array2::zeros((height as usize, width as usize));
        for (x, y, pixel) in luma.enumerate_pixels() {
            disparity[[y as usize, x as usize]] = pixel.0[0] as f32 / scale;
        }

        DepthFrame::new(
            disparity,
            self.config.camera.focal_length,
            self.config.camera.baseline,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AvoidanceConfig, CameraConfig, DriveConfig, LoggingConfig, ReplayConfig,
    };
    use image::Luma;

    fn config() -> Config {
        Config {
            camera: CameraConfig {
                focal_length: 500.0,
                baseline: 0.1,
                disparity_scale: 256.0,
            },
            avoidance: AvoidanceConfig {
                distance_threshold: 1.0,
                occupancy_threshold: 15.0,
            },
            drive: DriveConfig {
                linear_speed: 0.4,
                angular_speed: 0.6,
            },
            replay: ReplayConfig {
                input_dir: "data".into(),
                output_dir: "output".into(),
                save_overlays: false,
            },
            logging: LoggingConfig {
                level: "info".into(),
            },
        }
    }

    #[test]
    fn test_decode_scales_raw_values() {
        let mut luma = ImageBuffer::<Luma<u16>, Vec<u16>>::new(4, 3);
        luma.put_pixel(2, 1, Luma([512]));
        luma.put_pixel(0, 0, Luma([256]));

        let replayer = FrameReplayer::new(config());
        let frame = replayer.frame_from_luma16(&luma);

        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.at(2, 1), 2.0);
        assert_eq!(frame.at(0, 0), 1.0);
        assert_eq!(frame.at(3, 2), 0.0);
        assert_eq!(frame.focal_length, 500.0);
        assert_eq!(frame.baseline, 0.1);
    }
}
