use std::time::Duration;

use pendulum_core::{Discipline, Pose, Vector};
use serde::Deserialize;

/// Arm configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ArmConfig {
    /// Arm length in field units.
    pub length: f64,
    /// Initial arm angle in degrees.
    pub angle: f64,
}

impl ArmConfig {
    fn vector(&self) -> Vector {
        Vector::new(self.length, self.angle.to_radians())
    }
}

/// Pendulum configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Anchor position on the field.
    pub anchor: [f64; 2],
    /// First arm.
    pub arm1: ArmConfig,
    /// Second arm.
    pub arm2: ArmConfig,
    /// Posing discipline at startup.
    pub discipline: Discipline,
    /// Animation frame interval in milliseconds.
    pub frame_interval: u64,
}

impl Config {
    /// Read the configuration from the first existing file in the list.
    ///
    /// When none of the files exist the default configuration is returned.
    pub fn try_from_file<P: AsRef<std::path::Path>>(paths: Vec<P>) -> crate::runtime::Result<Self> {
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }

            log::debug!("Reading configuration from {}", path.display());

            let contents = std::fs::read_to_string(path)?;
            return Ok(toml::from_str(&contents)?);
        }

        Ok(Self::default())
    }

    /// Initial pose described by this configuration.
    pub fn pose(&self) -> Pose {
        Pose::new(
            Vector::from_cartesian(self.anchor[0], self.anchor[1]),
            self.arm1.vector(),
            self.arm2.vector(),
        )
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: [150.0, 200.0],
            arm1: ArmConfig {
                length: 70.0,
                angle: 30.0,
            },
            arm2: ArmConfig {
                length: 90.0,
                angle: 157.5,
            },
            discipline: Discipline::Inverse,
            frame_interval: crate::consts::FRAME_INTERVAL_MS,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {}ms",
            self.discipline,
            self.pose(),
            self.frame_interval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_pose() {
        let pose = Config::default().pose();
        let expected = Pose::default();

        assert!((pose.arm1.angle() - expected.arm1.angle()).abs() < 1e-12);
        assert!((pose.arm2.angle() - expected.arm2.angle()).abs() < 1e-12);
        assert_eq!(pose.arm1.length(), expected.arm1.length());
        assert_eq!(pose.arm2.length(), expected.arm2.length());
    }

    #[test]
    fn test_parse() {
        let config: Config = toml::from_str(
            r#"
            anchor = [200.0, 225.0]
            discipline = "FK"

            [arm1]
            length = 85.0
            angle = -36.0

            [arm2]
            length = 105.0
            angle = -157.5
            "#,
        )
        .unwrap();

        assert_eq!(config.discipline, Discipline::Forward);
        assert_eq!(config.frame_interval, 16);
        assert_eq!(config.pose().arm1.length(), 85.0);
        assert!((config.pose().arm2.angle() + 7.0 * std::f64::consts::PI / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::try_from_file(vec!["/nonexistent/pendulumd.toml"]).unwrap();
        assert_eq!(config.frame_interval, 16);
        assert_eq!(config.discipline, Discipline::Inverse);
    }

    #[test]
    fn test_contrib_config() {
        let config: Config = toml::from_str(include_str!("../../contrib/etc/pendulumd.toml")).unwrap();
        assert_eq!(config.discipline, Discipline::Inverse);
        assert_eq!(config.anchor, [150.0, 200.0]);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }
}
