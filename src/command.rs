// src/command.rs
//
// Velocity-command side of the boundary: maps a steering decision to a
// {linear, angular} pair and records the published commands as JSON lines,
// one per frame, standing in for a live command topic.

use crate::avoidance::SteeringDecision;
use crate::types::DriveConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityCommand {
    pub linear: f32,
    pub angular: f32,
}

impl VelocityCommand {
    pub fn stop() -> Self {
        Self {
            linear: 0.0,
            angular: 0.0,
        }
    }
}

/// Fixed decision-to-command table. Turning toward the left zone means a
/// negative angular velocity; a blocked frame stops the robot.
pub fn command_for(decision: SteeringDecision, drive: &DriveConfig) -> VelocityCommand {
    match decision {
        SteeringDecision::Left => VelocityCommand {
            linear: drive.linear_speed,
            angular: -drive.angular_speed,
        },
        SteeringDecision::Center => VelocityCommand {
            linear: drive.linear_speed,
            angular: 0.0,
        },
        SteeringDecision::Right => VelocityCommand {
            linear: drive.linear_speed,
            angular: drive.angular_speed,
        },
        SteeringDecision::None => VelocityCommand::stop(),
    }
}

#[derive(Debug, Serialize)]
pub struct CommandRecord<'a> {
    pub frame: &'a str,
    pub decision: SteeringDecision,
    pub command: VelocityCommand,
}

/// Appends one JSON object per published command to a `.jsonl` file.
pub struct CommandLog {
    writer: BufWriter<File>,
    path: PathBuf,
    records: u64,
}

impl CommandLog {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)
            .with_context(|| format!("creating command log {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            records: 0,
        })
    }

    pub fn publish(&mut self, record: &CommandRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        info!("Wrote {} commands to {}", self.records, self.path.display());
        Ok(())
    }
}
