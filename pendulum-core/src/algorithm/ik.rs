use std::f64::consts::{PI, TAU};

use nalgebra::Point2;

use crate::{Arm, DomainError, Pose, Vector};

use super::{fk::ForwardKinematics, Elbow, Grab, Solver};

/// Shortest reach the solver accepts before calling the geometry degenerate.
const REACH_EPSILON: f64 = 1e-9;

/// Inverse kinematics for the two-link pendulum.
///
/// Dragging arm 2 back-solves both arm angles so the grabbed point follows the
/// cursor. The triangle is formed by arm 1 and the phantom arm captured at
/// grab. Dragging arm 1 is plain forward kinematics.
pub struct InverseKinematics;

impl Solver for InverseKinematics {
    fn solve(&self, pose: &Pose, grab: &Grab, target: &Point2<f64>) -> Result<Pose, DomainError> {
        if grab.arm == Arm::Arm1 {
            return ForwardKinematics.solve(pose, grab, target);
        }

        let (offset2, phantom) = match (grab.offset2, grab.phantom) {
            (Some(offset2), Some(phantom)) => (offset2, phantom),
            _ => return Ok(*pose),
        };

        let l1 = pose.arm1.length();
        let l2 = phantom.length();
        if l1 < REACH_EPSILON || l2 < REACH_EPSILON {
            return Err(DomainError::DegenerateReach);
        }

        let reach = Vector::from_point(target) - pose.anchor;
        if reach.length() < REACH_EPSILON {
            return Err(DomainError::DegenerateReach);
        }

        let diff = reach.clamp_length(l1 - l2, l1 + l2);
        if diff.length() < REACH_EPSILON {
            return Err(DomainError::DegenerateReach);
        }
        log::trace!(" IK reach:          {:.2} (clamped {:.2})", reach.length(), diff.length());

        let cos_arms_angle =
            ((l1.powi(2) + l2.powi(2) - diff.length().powi(2)) / (2.0 * l1 * l2)).clamp(-1.0, 1.0);
        let arms_angle = cos_arms_angle.acos();

        // The triangle closes on the phantom arm, so its elbow is the one to keep.
        let phantom_arm = pose.arm2.with_angle(pose.arm2.angle() - offset2);
        let phi = match Elbow::of(&pose.arm1, &phantom_arm) {
            Elbow::Concave => arms_angle,
            Elbow::Convex => TAU - arms_angle,
        };
        log::trace!(" IK phi:            {:5.2}rad {:5.2}°", phi, phi.to_degrees());

        // Law of sines angle at the anchor, resolved on the obtuse branch as well.
        let gamma = (l2 * phi.sin()).atan2(l1 - l2 * phi.cos());

        let angle1 = -(gamma - diff.angle());
        let angle2 = PI + angle1 + offset2 - phi;

        log::trace!(
            " IK angles:         {:5.2}rad {:5.2}° {:5.2}rad {:5.2}°",
            angle1,
            angle1.to_degrees(),
            angle2,
            angle2.to_degrees()
        );

        Ok(pose.with_arm_angles(angle1, angle2))
    }
}
