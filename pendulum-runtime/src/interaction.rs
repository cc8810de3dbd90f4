use pendulum_core::{
    algorithm::Grab,
    nalgebra::Point2,
    Arm, Discipline, Pose, Vector,
};

/// Drag interaction state.
///
/// The discipline is latched when the arm is grabbed, switching discipline
/// only affects the next drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// Nothing grabbed.
    #[default]
    Idle,
    /// Arm grabbed. The grab offsets are captured on the first pointer
    /// sample after the pointer went down.
    Grabbed {
        arm: Arm,
        discipline: Discipline,
        grab: Option<Grab>,
    },
}

impl DragState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Grabbed arm, if any.
    pub fn grabbed_arm(&self) -> Option<Arm> {
        match self {
            DragState::Idle => None,
            DragState::Grabbed { arm, .. } => Some(*arm),
        }
    }

    fn grab(&self) -> Option<&Grab> {
        match self {
            DragState::Grabbed { grab, .. } => grab.as_ref(),
            DragState::Idle => None,
        }
    }

    pub fn offset1(&self) -> Option<f64> {
        self.grab().and_then(|grab| grab.offset1)
    }

    pub fn offset2(&self) -> Option<f64> {
        self.grab().and_then(|grab| grab.offset2)
    }

    pub fn phantom_arm2(&self) -> Option<Vector> {
        self.grab().and_then(|grab| grab.phantom)
    }

    /// Pointer went down on an arm.
    ///
    /// A pointer going down while an arm is already grabbed starts a new drag.
    pub fn pointer_down(&mut self, arm: Arm, discipline: Discipline) {
        log::debug!("Grabbed {} ({})", arm, discipline);

        *self = DragState::Grabbed {
            arm,
            discipline,
            grab: None,
        };
    }

    /// Pointer went down on an arm at a known position.
    ///
    /// The grab offsets are captured immediately against the given pose.
    pub fn pointer_press(
        &mut self,
        pose: &Pose,
        arm: Arm,
        discipline: Discipline,
        position: &Point2<f64>,
    ) {
        log::debug!(
            "Grabbed {} ({}) at ({:.2}, {:.2})",
            arm,
            discipline,
            position.x,
            position.y
        );

        *self = DragState::Grabbed {
            arm,
            discipline,
            grab: Some(Grab::capture(pose, arm, position)),
        };
    }

    /// Pointer moved to a new position.
    ///
    /// Returns the next pose, or `None` when idle or when the solver could
    /// not pose the arms. In the latter case the caller keeps the previous
    /// pose.
    pub fn pointer_move(&mut self, pose: &Pose, position: &Point2<f64>) -> Option<Pose> {
        let (discipline, grab) = match self {
            DragState::Idle => return None,
            DragState::Grabbed {
                arm,
                discipline,
                grab,
            } => {
                let grab = *grab.get_or_insert_with(|| Grab::capture(pose, *arm, position));
                (*discipline, grab)
            }
        };

        match discipline.solver().solve(pose, &grab, position) {
            Ok(pose) => Some(pose),
            Err(e) => {
                log::warn!(
                    "Holding pose at ({:.2}, {:.2}): {}",
                    position.x,
                    position.y,
                    e
                );
                None
            }
        }
    }

    /// Pointer released, drag ends.
    pub fn pointer_up(&mut self) {
        if let Some(arm) = self.grabbed_arm() {
            log::debug!("Released {}", arm);
        }

        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn pose() -> Pose {
        Pose::new(
            Vector::from_cartesian(200.0, 225.0),
            Vector::new(85.0, -PI / 5.0),
            Vector::new(105.0, -7.0 * PI / 8.0),
        )
    }

    #[test]
    fn test_idle_move_is_noop() {
        let mut state = DragState::default();
        assert!(state.pointer_move(&pose(), &Point2::new(10.0, 10.0)).is_none());
        assert!(state.is_idle());
    }

    #[test]
    fn test_first_move_captures_offsets() {
        let pose = pose();
        let mut state = DragState::default();

        state.pointer_down(Arm::Arm2, Discipline::Forward);
        assert_eq!(state.grabbed_arm(), Some(Arm::Arm2));
        assert_eq!(state.offset2(), None);
        assert_eq!(state.phantom_arm2(), None);

        let position = Point2::new(250.0, 300.0);
        let next = state.pointer_move(&pose, &position).unwrap();

        let phantom = Vector::from_point(&position) - pose.anchor2();
        assert_eq!(state.offset1(), None);
        assert!((state.offset2().unwrap() - pose.arm2.angle_difference(&phantom)).abs() < 1e-12);
        assert!((state.phantom_arm2().unwrap().length() - phantom.length()).abs() < 1e-12);

        assert_eq!(next.arm1, pose.arm1);
        assert!((next.arm2.angle() - pose.arm2.angle()).abs() < 1e-9);
    }

    #[test]
    fn test_offsets_survive_moves() {
        let pose = pose();
        let mut state = DragState::default();

        state.pointer_down(Arm::Arm1, Discipline::Forward);
        let first = state.pointer_move(&pose, &Point2::new(230.0, 200.0)).unwrap();
        let offsets = (state.offset1(), state.offset2(), state.phantom_arm2());

        state.pointer_move(&first, &Point2::new(120.0, 260.0)).unwrap();
        assert_eq!((state.offset1(), state.offset2(), state.phantom_arm2()), offsets);
    }

    #[test]
    fn test_discipline_latched_at_grab() {
        let mut state = DragState::default();
        state.pointer_down(Arm::Arm2, Discipline::Forward);

        match state {
            DragState::Grabbed { discipline, .. } => assert_eq!(discipline, Discipline::Forward),
            DragState::Idle => panic!("expected grab"),
        }
    }

    #[test]
    fn test_degenerate_holds() {
        let pose = pose();
        let mut state = DragState::default();

        state.pointer_press(&pose, Arm::Arm2, Discipline::Inverse, &pose.tip().to_cartesian());
        assert!(state.pointer_move(&pose, &pose.anchor_point()).is_none());
        assert_eq!(state.grabbed_arm(), Some(Arm::Arm2));
    }

    #[test]
    fn test_pointer_up_resets() {
        let pose = pose();
        let mut state = DragState::default();

        state.pointer_down(Arm::Arm1, Discipline::Inverse);
        state.pointer_move(&pose, &Point2::new(230.0, 200.0));
        state.pointer_up();

        assert_eq!(state, DragState::Idle);
        assert_eq!(state.grabbed_arm(), None);
        assert_eq!(state.offset1(), None);
        assert_eq!(state.offset2(), None);
        assert_eq!(state.phantom_arm2(), None);
    }
}
