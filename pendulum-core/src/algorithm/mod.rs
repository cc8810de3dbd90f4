use std::f64::consts::{PI, TAU};

use nalgebra::Point2;

use crate::{Arm, Discipline, DomainError, Pose, Vector};

pub mod fk;
pub mod ik;

/// Grab captured when a drag begins.
///
/// The offsets hold the angle between an arm and the cursor direction at the
/// moment of grab, so the arm keeps that angle while it is dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grab {
    /// Grabbed arm.
    pub arm: Arm,
    /// Angle between arm 1 and the cursor seen from the anchor.
    pub offset1: Option<f64>,
    /// Angle between arm 2 and arm 1 (arm 1 grabbed), or between arm 2 and
    /// the phantom arm (arm 2 grabbed).
    pub offset2: Option<f64>,
    /// Vector from the arm 2 pivot to the cursor.
    pub phantom: Option<Vector>,
}

impl Grab {
    /// Capture the grab offsets from the pose and the cursor position.
    pub fn capture(pose: &Pose, arm: Arm, position: &Point2<f64>) -> Self {
        let cursor = Vector::from_point(position);
        let phantom = cursor - pose.anchor2();

        match arm {
            Arm::Arm1 => Self {
                arm,
                offset1: Some(pose.arm1.angle_difference(&(cursor - pose.anchor))),
                offset2: Some(pose.arm2.angle_difference(&pose.arm1)),
                phantom: Some(phantom),
            },
            Arm::Arm2 => Self {
                arm,
                offset1: None,
                offset2: Some(pose.arm2.angle_difference(&phantom)),
                phantom: Some(phantom),
            },
        }
    }

    /// Where the grabbed point of the second arm lies in the given pose.
    ///
    /// This is the tip of the phantom arm carried along by arm 2.
    pub fn handle(&self, pose: &Pose) -> Option<Point2<f64>> {
        let phantom = self.phantom?;
        let offset2 = self.offset2?;

        let handle = pose.anchor2() + phantom.with_angle(pose.arm2.angle() - offset2);
        Some(handle.to_cartesian())
    }
}

/// Pose solver.
pub trait Solver {
    /// Solve a new pose with the grabbed arm following the target.
    fn solve(&self, pose: &Pose, grab: &Grab, target: &Point2<f64>) -> Result<Pose, DomainError>;
}

impl Discipline {
    /// Solver for this discipline.
    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            Discipline::Forward => &fk::ForwardKinematics,
            Discipline::Inverse => &ik::InverseKinematics,
        }
    }
}

/// Elbow configuration of the two arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elbow {
    /// Arm 2 turns counterclockwise from arm 1, by less than half a turn.
    Concave,
    /// Arm 2 turns clockwise from arm 1.
    Convex,
}

impl Elbow {
    /// Elbow configuration of the pose.
    pub fn of(arm1: &Vector, arm2: &Vector) -> Self {
        let k = ((arm2.angle_difference(arm1) + TAU) / PI)
            .floor()
            .rem_euclid(2.0);

        if k == 0.0 {
            Elbow::Concave
        } else {
            Elbow::Convex
        }
    }
}
