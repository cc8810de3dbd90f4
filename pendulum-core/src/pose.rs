use std::f64::consts::PI;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::Vector;

/// Pendulum segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arm {
    /// Segment attached to the fixed anchor.
    Arm1,
    /// Segment attached to the tip of the first arm.
    Arm2,
}

impl TryFrom<u8> for Arm {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Arm1),
            2 => Ok(Self::Arm2),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arm::Arm1 => write!(f, "arm 1"),
            Arm::Arm2 => write!(f, "arm 2"),
        }
    }
}

/// Posing discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// Forward kinematics, each arm angle is set directly.
    #[serde(rename = "FK")]
    Forward,
    /// Inverse kinematics, the second arm tip is steered to the cursor.
    #[default]
    #[serde(rename = "IK")]
    Inverse,
}

impl std::str::FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FK" => Ok(Self::Forward),
            "IK" => Ok(Self::Inverse),
            _ => Err(format!("unknown discipline '{}'", s)),
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Forward => write!(f, "FK"),
            Discipline::Inverse => write!(f, "IK"),
        }
    }
}

/// Pendulum pose.
///
/// The first arm is relative to the anchor, the second arm is relative to the
/// tip of the first arm. Arm lengths are fixed once the pose is created; the
/// solvers only ever replace angles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub anchor: Vector,
    pub arm1: Vector,
    pub arm2: Vector,
}

impl Pose {
    pub fn new(anchor: Vector, arm1: Vector, arm2: Vector) -> Self {
        Self { anchor, arm1, arm2 }
    }

    /// Pivot of the second arm.
    #[inline]
    pub fn anchor2(&self) -> Vector {
        self.anchor + self.arm1
    }

    /// Tip of the second arm.
    #[inline]
    pub fn tip(&self) -> Vector {
        self.anchor2() + self.arm2
    }

    /// Same pose with both arm angles replaced.
    pub fn with_arm_angles(&self, angle1: f64, angle2: f64) -> Self {
        Self {
            anchor: self.anchor,
            arm1: self.arm1.with_angle(angle1),
            arm2: self.arm2.with_angle(angle2),
        }
    }

    /// Arm vector by segment.
    pub fn arm(&self, arm: Arm) -> &Vector {
        match arm {
            Arm::Arm1 => &self.arm1,
            Arm::Arm2 => &self.arm2,
        }
    }

    /// Root of the arm in field coordinates.
    pub fn root(&self, arm: Arm) -> Vector {
        match arm {
            Arm::Arm1 => self.anchor,
            Arm::Arm2 => self.anchor2(),
        }
    }

    /// Anchor position in field coordinates.
    #[inline]
    pub fn anchor_point(&self) -> Point2<f64> {
        self.anchor.to_cartesian()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            anchor: Vector::from_cartesian(150.0, 200.0),
            arm1: Vector::new(70.0, PI / 6.0),
            arm2: Vector::new(90.0, 7.0 * PI / 8.0),
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let anchor = self.anchor.to_cartesian();
        write!(
            f,
            "Anchor=({:.2}, {:.2}) Arm1=[{}] Arm2=[{}]",
            anchor.x, anchor.y, self.arm1, self.arm2
        )
    }
}
