// src/metrics.rs
//
// Run-level observability. Counts frames and decisions, accumulates scan
// time, reported once at shutdown.

use crate::avoidance::SteeringDecision;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    pub total_frames: Arc<AtomicU64>,
    pub empty_frames: Arc<AtomicU64>,
    pub left_decisions: Arc<AtomicU64>,
    pub center_decisions: Arc<AtomicU64>,
    pub right_decisions: Arc<AtomicU64>,
    pub blocked_decisions: Arc<AtomicU64>,
    pub scan_time_us: Arc<AtomicU64>,
    pub started_at: Instant,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            total_frames: Arc::new(AtomicU64::new(0)),
            empty_frames: Arc::new(AtomicU64::new(0)),
            left_decisions: Arc::new(AtomicU64::new(0)),
            center_decisions: Arc::new(AtomicU64::new(0)),
            right_decisions: Arc::new(AtomicU64::new(0)),
            blocked_decisions: Arc::new(AtomicU64::new(0)),
            scan_time_us: Arc::new(AtomicU64::new(0)),
            started_at: Instant::now(),
        }
    }

    pub fn inc(&self, counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_scan_time(&self, duration_us: u64) {
        self.scan_time_us.fetch_add(duration_us, Ordering::Relaxed);
    }

    pub fn record_decision(&self, decision: SteeringDecision) {
        let counter = match decision {
            SteeringDecision::Left => &self.left_decisions,
            SteeringDecision::Center => &self.center_decisions,
            SteeringDecision::Right => &self.right_decisions,
            SteeringDecision::None => &self.blocked_decisions,
        };
        self.inc(counter);
    }

    pub fn fps(&self) -> f64 {
        let frames = self.total_frames.load(Ordering::Relaxed);
        let elapsed = self.started_at.elapsed().as_secs_f64();
        if elapsed > 0.01 {
            frames as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        let total_frames = self.total_frames.load(Ordering::Relaxed);
        let scan_time_us = self.scan_time_us.load(Ordering::Relaxed);
        MetricsSummary {
            total_frames,
            empty_frames: self.empty_frames.load(Ordering::Relaxed),
            left_decisions: self.left_decisions.load(Ordering::Relaxed),
            center_decisions: self.center_decisions.load(Ordering::Relaxed),
            right_decisions: self.right_decisions.load(Ordering::Relaxed),
            blocked_decisions: self.blocked_decisions.load(Ordering::Relaxed),
            avg_scan_us: if total_frames > 0 {
                scan_time_us / total_frames
            } else {
                0
            },
            fps: self.fps(),
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub total_frames: u64,
    pub empty_frames: u64,
    pub left_decisions: u64,
    pub center_decisions: u64,
    pub right_decisions: u64,
    pub blocked_decisions: u64,
    pub avg_scan_us: u64,
    pub fps: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_counters() {
        let metrics = PipelineMetrics::new();
        metrics.record_decision(SteeringDecision::Center);
        metrics.record_decision(SteeringDecision::Center);
        metrics.record_decision(SteeringDecision::Left);
        metrics.record_decision(SteeringDecision::None);
        let summary = metrics.summary();
        assert_eq!(summary.center_decisions, 2);
        assert_eq!(summary.left_decisions, 1);
        assert_eq!(summary.right_decisions, 0);
        assert_eq!(summary.blocked_decisions, 1);
    }

    #[test]
    fn test_average_scan_time() {
        let metrics = PipelineMetrics::new();
        metrics.inc(&metrics.total_frames);
        metrics.inc(&metrics.total_frames);
        metrics.add_scan_time(300);
        metrics.add_scan_time(500);
        assert_eq!(metrics.summary().avg_scan_us, 400);
    }
}
