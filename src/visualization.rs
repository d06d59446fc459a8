// src/visualization.rs
//
// Optional diagnostics consumer: renders the disparity frame as a
// normalized grayscale image with the three partition lines and a marker
// on the far region corner. Purely a viewer of FrameDiagnostics; the
// decision engine never draws.

use crate::avoidance::FrameDiagnostics;
use crate::types::DepthFrame;
use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use std::path::Path;

const LINE_VALUE: u8 = 255;
const LINE_HALF_WIDTH: i64 = 1;
const MARKER_RADIUS: f32 = 10.0;
const MARKER_THICKNESS: f32 = 2.5;

/// Render the frame with partition lines and the region corner marker.
pub fn render_overlay(frame: &DepthFrame, diagnostics: &FrameDiagnostics) -> GrayImage {
    let width = frame.width();
    let height = frame.height();

    // Normalize by the frame's own maximum so each overlay uses the full
    // gray range regardless of the disparity units.
    let max = frame.disparity.iter().cloned().fold(0.0f32, f32::max);
    let scale = if max > 0.0 { 255.0 / max } else { 0.0 };

    let mut img = GrayImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let v = (frame.at(x, y) * scale).clamp(0.0, 255.0) as u8;
            img.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }

    let region = &diagnostics.region;
    let bounds = &diagnostics.boundaries;
    for line_x in [bounds.left, bounds.mid, bounds.right] {
        draw_vertical_line(&mut img, line_x, region.y_start, region.y_end);
    }
    draw_ring(&mut img, region.x_end, region.y_end);

    img
}

pub fn save_overlay(img: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    img.save(path)
        .with_context(|| format!("writing overlay {}", path.display()))
}

fn draw_vertical_line(img: &mut GrayImage, x: usize, y_start: usize, y_end: usize) {
    let width = img.width() as i64;
    for y in y_start..y_end.min(img.height() as usize) {
        for dx in -LINE_HALF_WIDTH..=LINE_HALF_WIDTH {
            let px = x as i64 + dx;
            if (0..width).contains(&px) {
                img.put_pixel(px as u32, y as u32, Luma([LINE_VALUE]));
            }
        }
    }
}

/// Ring marker on the far region corner, clipped at the frame edges.
fn draw_ring(img: &mut GrayImage, cx: usize, cy: usize) {
    let (width, height) = (img.width() as i64, img.height() as i64);
    let r = MARKER_RADIUS;
    let span = (r + MARKER_THICKNESS).ceil() as i64;

    for dy in -span..=span {
        for dx in -span..=span {
            let px = cx as i64 + dx;
            let py = cy as i64 + dy;
            if !(0..width).contains(&px) || !(0..height).contains(&py) {
                continue;
            }
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if (dist - r).abs() <= MARKER_THICKNESS {
                img.put_pixel(px as u32, py as u32, Luma([LINE_VALUE]));
            }
        }
    }
}
