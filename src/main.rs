// src/main.rs

use anyhow::Result;
use obstacle_avoidance::avoidance::AvoidancePipeline;
use obstacle_avoidance::command::{command_for, CommandLog, CommandRecord};
use obstacle_avoidance::metrics::PipelineMetrics;
use obstacle_avoidance::replay::FrameReplayer;
use obstacle_avoidance::types::Config;
use obstacle_avoidance::visualization;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("obstacle_avoidance={}", config.logging.level))
        .init();

    info!("Obstacle Avoidance Starting");
    info!("✓ Configuration loaded from {}", config_path);
    info!(
        "Thresholds: distance={:.2}m, occupancy={:.1}%",
        config.avoidance.distance_threshold, config.avoidance.occupancy_threshold
    );
    info!(
        "Calibration: f={:.1}px, T={:.3}m, disparity scale {:.1}",
        config.camera.focal_length, config.camera.baseline, config.camera.disparity_scale
    );

    let metrics = PipelineMetrics::new();
    let pipeline = AvoidancePipeline::new(&config.avoidance, metrics.clone());
    let replayer = FrameReplayer::new(config.clone());

    let frame_files = replayer.find_frame_files()?;
    if frame_files.is_empty() {
        error!("No disparity frames found in {}", config.replay.input_dir);
        return Ok(());
    }

    let output_dir = PathBuf::from(&config.replay.output_dir);
    let mut command_log = CommandLog::create(&output_dir.join("commands.jsonl"))?;

    for path in &frame_files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let frame = match replayer.load_frame(path) {
            Ok(frame) => frame,
            Err(e) => {
                error!("Skipping {}: {:#}", name, e);
                continue;
            }
        };

        match pipeline.process_frame(&frame) {
            Ok(outcome) => {
                let command = command_for(outcome.decision, &config.drive);
                info!(
                    "{}: {} (linear {:.2}, angular {:.2})",
                    name,
                    outcome.decision.as_str(),
                    command.linear,
                    command.angular
                );
                command_log.publish(&CommandRecord {
                    frame: &name,
                    decision: outcome.decision,
                    command,
                })?;

                if config.replay.save_overlays {
                    let stem = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| name.clone());
                    let overlay = visualization::render_overlay(&frame, &outcome.diagnostics);
                    let overlay_path = output_dir.join(format!("{stem}_overlay.png"));
                    if let Err(e) = visualization::save_overlay(&overlay, &overlay_path) {
                        warn!("Overlay for {} not saved: {:#}", name, e);
                    } else {
                        debug!("Overlay saved to {}", overlay_path.display());
                    }
                }
            }
            Err(e) => {
                // Cycle failed; hold back the command and move on to the
                // next frame.
                warn!("{}: {}; no command published", name, e);
            }
        }
    }

    command_log.finish()?;

    let summary = metrics.summary();
    info!("✓ Replay complete");
    info!("  Total frames: {}", summary.total_frames);
    info!("  Empty frames: {}", summary.empty_frames);
    info!(
        "  Decisions: left {} / center {} / right {} / none {}",
        summary.left_decisions,
        summary.center_decisions,
        summary.right_decisions,
        summary.blocked_decisions
    );
    info!("  Average cycle: {}us", summary.avg_scan_us);
    info!("  Processing speed: {:.1} FPS", summary.fps);

    Ok(())
}
