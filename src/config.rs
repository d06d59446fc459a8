use crate::types::Config;
use anyhow::{Context, Result};
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make every frame decision meaningless.
    fn validate(&self) -> Result<()> {
        if self.camera.disparity_scale <= 0.0 {
            anyhow::bail!("camera.disparity_scale must be positive");
        }
        if self.avoidance.distance_threshold <= 0.0 {
            anyhow::bail!("avoidance.distance_threshold must be positive");
        }
        if self.avoidance.occupancy_threshold < 0.0 || self.avoidance.occupancy_threshold > 100.0 {
            anyhow::bail!("avoidance.occupancy_threshold must be within 0..=100");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
camera:
  focal_length: 554.25
  baseline: 0.12
  disparity_scale: 256.0
avoidance:
  distance_threshold: 1.0
  occupancy_threshold: 15.0
drive:
  linear_speed: 0.4
  angular_speed: 0.6
replay:
  input_dir: data/frames
  output_dir: output
  save_overlays: true
logging:
  level: info
"#;

    #[test]
    fn test_parse_sample_config() {
        let config: Config = serde_yaml::from_str(SAMPLE).unwrap();
        config.validate().unwrap();
        assert_eq!(config.avoidance.occupancy_threshold, 15.0);
        assert_eq!(config.drive.linear_speed, 0.4);
        assert_eq!(config.camera.disparity_scale, 256.0);
    }

    #[test]
    fn test_rejects_zero_disparity_scale() {
        let mut config: Config = serde_yaml::from_str(SAMPLE).unwrap();
        config.camera.disparity_scale = 0.0;
        assert!(config.validate().is_err());
    }
}
