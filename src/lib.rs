//! Depth-frame obstacle avoidance for a mobile robot.
//!
//! One disparity frame in, one steering decision out. Each frame is
//! processed independently: locate the valid-data region, partition it
//! into horizontal zones, score per-zone obstacle occupancy, and select
//! the clearest zone (or none). The selected zone maps to a fixed
//! `{linear, angular}` velocity command.
//!
//! The crate is organized into:
//!
//! - [`avoidance`]: the per-frame decision engine
//! - [`replay`]: disparity-image frame source
//! - [`command`]: decision-to-velocity mapping and command recording
//! - [`visualization`]: optional overlay rendering from frame diagnostics
//! - [`metrics`]: run-level counters
//! - [`types`] / [`config`]: configuration and shared data types

pub mod avoidance;
pub mod command;
pub mod config;
pub mod metrics;
pub mod replay;
pub mod types;
pub mod visualization;

pub use avoidance::{AvoidancePipeline, FrameOutcome, SteeringDecision};
pub use command::{command_for, VelocityCommand};
pub use types::{Config, DepthFrame};
