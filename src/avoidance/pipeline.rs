// src/avoidance/pipeline.rs
//
// Orchestrator that wires the region locator, zone partitioner, occupancy
// scorer, and section selector into one frame-processing cycle.
//
// Single entry point: call process_frame() once per frame. Everything the
// cycle derives (region, boundaries, occupancy) lives in the returned
// FrameOutcome and is discarded with it; no state crosses frames apart
// from the shared metrics counters.

use super::occupancy::{score, OccupancyTable, Zone};
use super::partition::{partition, ZoneBoundaries};
use super::region::{locate_region, EmptyFrameError, Region};
use super::selector::{select_section, SteeringDecision};
use crate::metrics::PipelineMetrics;
use crate::types::{AvoidanceConfig, DepthFrame};
use std::time::Instant;
use tracing::{debug, warn};

/// Everything one cycle produced: the decision plus the intermediate
/// geometry for diagnostics consumers (overlay rendering, logging).
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub decision: SteeringDecision,
    pub diagnostics: FrameDiagnostics,
}

#[derive(Debug, Clone)]
pub struct FrameDiagnostics {
    pub region: Region,
    pub boundaries: ZoneBoundaries,
    pub occupancy: OccupancyTable,
}

pub struct AvoidancePipeline {
    distance_threshold: f32,
    occupancy_threshold: f32,
    metrics: PipelineMetrics,
}

impl AvoidancePipeline {
    pub fn new(config: &AvoidanceConfig, metrics: PipelineMetrics) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            occupancy_threshold: config.occupancy_threshold,
            metrics,
        }
    }

    /// Run one full decision cycle over a frame.
    ///
    /// An all-zero frame fails with `EmptyFrameError`; the caller must not
    /// publish a command for that frame.
    pub fn process_frame(&self, frame: &DepthFrame) -> Result<FrameOutcome, EmptyFrameError> {
        let started = Instant::now();
        self.metrics.inc(&self.metrics.total_frames);

        let region = locate_region(frame).map_err(|e| {
            self.metrics.inc(&self.metrics.empty_frames);
            warn!("region scan failed: {e}");
            e
        })?;
        debug!(
            "region {}x{} at ({}, {})..({}, {})",
            region.width(),
            region.height(),
            region.x_start,
            region.y_start,
            region.x_end,
            region.y_end
        );

        let boundaries = partition(&region);
        debug!(
            "partition lines: left {} mid {} right {}",
            boundaries.left, boundaries.mid, boundaries.right
        );

        let occupancy = score(frame, &region, &boundaries, self.distance_threshold);
        for zone in Zone::ALL {
            match occupancy.percent(zone) {
                Some(pct) => debug!(
                    "{}: {}/{} = {:.1}%",
                    zone.as_str(),
                    occupancy.near(zone),
                    occupancy.total(zone),
                    pct
                ),
                None => debug!("{}: no data", zone.as_str()),
            }
        }

        let decision = select_section(&occupancy, self.occupancy_threshold);
        self.metrics.record_decision(decision);
        self.metrics
            .add_scan_time(started.elapsed().as_micros() as u64);

        Ok(FrameOutcome {
            decision,
            diagnostics: FrameDiagnostics {
                region,
                boundaries,
                occupancy,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn pipeline() -> AvoidancePipeline {
        AvoidancePipeline::new(
            &AvoidanceConfig {
                distance_threshold: 1.0,
                occupancy_threshold: 15.0,
            },
            PipelineMetrics::new(),
        )
    }

    #[test]
    fn test_wall_filling_the_frame_blocks_every_zone() {
        // Disparity 2 with f = T = 1 gives depth 0.5, inside the unsafe
        // range: every zone scores 100% and nothing is clear.
        let frame = DepthFrame::new(Array2::from_elem((100, 100), 2.0), 1.0, 1.0);
        let outcome = pipeline().process_frame(&frame).unwrap();
        assert_eq!(outcome.decision, SteeringDecision::None);
        assert_eq!(
            outcome.diagnostics.occupancy.percent(Zone::CenterThird),
            Some(100.0)
        );
    }

    #[test]
    fn test_open_space_steers_center() {
        // Disparity 0.5 gives depth 2, past the threshold: all clear.
        let frame = DepthFrame::new(Array2::from_elem((100, 100), 0.5), 1.0, 1.0);
        let outcome = pipeline().process_frame(&frame).unwrap();
        assert_eq!(outcome.decision, SteeringDecision::Center);
        assert_eq!(
            outcome.diagnostics.occupancy.percent(Zone::CenterThird),
            Some(0.0)
        );

        // Steering center drives straight ahead.
        let command = crate::command::command_for(
            outcome.decision,
            &crate::types::DriveConfig {
                linear_speed: 0.4,
                angular_speed: 0.6,
            },
        );
        assert_eq!(command.linear, 0.4);
        assert_eq!(command.angular, 0.0);
    }

    #[test]
    fn test_empty_frame_aborts_cycle() {
        let frame = DepthFrame::new(Array2::zeros((50, 50)), 1.0, 1.0);
        let metrics = PipelineMetrics::new();
        let pipeline = AvoidancePipeline::new(
            &AvoidanceConfig {
                distance_threshold: 1.0,
                occupancy_threshold: 15.0,
            },
            metrics.clone(),
        );
        assert!(pipeline.process_frame(&frame).is_err());
        assert_eq!(metrics.summary().empty_frames, 1);
        assert_eq!(metrics.summary().total_frames, 1);
    }

    #[test]
    fn test_wall_ahead_and_right_steers_left() {
        // Far background, near wall over the center and right thirds:
        // center is blocked, the left side is the clearer escape.
        let mut disparity = Array2::from_elem((60, 90), 0.1);
        for y in 0..60 {
            for x in 30..90 {
                disparity[[y, x]] = 4.0;
            }
        }
        let frame = DepthFrame::new(disparity, 1.0, 1.0);
        let outcome = pipeline().process_frame(&frame).unwrap();
        assert_eq!(outcome.decision, SteeringDecision::Left);
    }

    #[test]
    fn test_diagnostics_carry_the_region() {
        let mut disparity = Array2::zeros((20, 40));
        for y in 5..15 {
            for x in 10..34 {
                disparity[[y, x]] = 0.5;
            }
        }
        let frame = DepthFrame::new(disparity, 1.0, 1.0);
        let outcome = pipeline().process_frame(&frame).unwrap();
        let region = outcome.diagnostics.region;
        assert_eq!((region.x_start, region.x_end), (10, 34));
        assert_eq!((region.y_start, region.y_end), (5, 15));
        assert_eq!(outcome.diagnostics.boundaries.left, 10 + 8);
        assert_eq!(outcome.diagnostics.boundaries.mid, 10 + 12);
        assert_eq!(outcome.diagnostics.boundaries.right, 10 + 16);
    }
}
