use nalgebra::Point2;

use crate::{Arm, DomainError, Pose, Vector};

use super::{Grab, Solver};

/// Forward kinematics.
///
/// The grabbed arm points at the cursor, rotated by the offset captured at
/// grab. Dragging arm 1 carries arm 2 along rigidly.
pub struct ForwardKinematics;

impl Solver for ForwardKinematics {
    fn solve(&self, pose: &Pose, grab: &Grab, target: &Point2<f64>) -> Result<Pose, DomainError> {
        let cursor = Vector::from_point(target);

        match (grab.arm, grab.offset1, grab.offset2) {
            (Arm::Arm1, Some(offset1), Some(offset2)) => {
                let angle1 = (cursor - pose.anchor).angle() + offset1;
                let angle2 = angle1 + offset2;

                log::trace!("FK arm 1: {:5.2}rad {:5.2}rad", angle1, angle2);

                Ok(pose.with_arm_angles(angle1, angle2))
            }
            (Arm::Arm2, _, Some(offset2)) => {
                let angle2 = (cursor - pose.anchor2()).angle() + offset2;

                log::trace!("FK arm 2: {:5.2}rad", angle2);

                Ok(Pose {
                    arm2: pose.arm2.with_angle(angle2),
                    ..*pose
                })
            }
            _ => Ok(*pose),
        }
    }
}
