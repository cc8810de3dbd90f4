use pendulum_core::{nalgebra::Point2, Pose};

/// Pose store.
///
/// Holds the current pose and the last known pointer position. The store is
/// only mutated by the runtime; renderers read snapshots.
#[derive(Clone, Debug)]
pub struct PoseStore {
    pose: Pose,
    pointer: Point2<f64>,
}

impl PoseStore {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            pointer: Point2::origin(),
        }
    }

    /// Snapshot of the current pose.
    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Last pointer position on the field.
    #[inline]
    pub fn pointer(&self) -> Point2<f64> {
        self.pointer
    }

    pub(crate) fn replace(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub(crate) fn update_pointer(&mut self, position: Point2<f64>) {
        self.pointer = position;
    }

    /// Publish new arm angles, lengths are kept.
    pub(crate) fn update_arm_angles(&mut self, angle1: f64, angle2: f64) {
        self.pose = self.pose.with_arm_angles(angle1, angle2);
    }
}

impl Default for PoseStore {
    fn default() -> Self {
        Self::new(Pose::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_arm_angles() {
        let mut store = PoseStore::default();
        store.update_arm_angles(0.25, -1.5);

        assert_eq!(store.pose().arm1.angle(), 0.25);
        assert_eq!(store.pose().arm2.angle(), -1.5);
        assert_eq!(store.pose().arm1.length(), 70.0);
        assert_eq!(store.pose().arm2.length(), 90.0);
    }

    #[test]
    fn test_pointer() {
        let mut store = PoseStore::default();
        assert_eq!(store.pointer(), Point2::origin());

        store.update_pointer(Point2::new(3.0, 4.0));
        assert_eq!(store.pointer(), Point2::new(3.0, 4.0));
    }
}
