use pendulum_core::{nalgebra::Point2, outline::ArmOutline, Arm, Discipline, DomainError, Pose};

use crate::event::Event;
use crate::interaction::DragState;
use crate::sim::Animation;
use crate::store::PoseStore;

mod error;

pub use self::error::Error;

pub type Result<T = ()> = std::result::Result<T, error::Error>;

/// Pendulum runtime.
///
/// Owns the pose store, the drag state and the animation ticker. All pose
/// mutations go through this type, one event at a time.
#[derive(Debug)]
pub struct Runtime {
    store: PoseStore,
    drag: DragState,
    discipline: Discipline,
    animation: Animation,
}

impl Runtime {
    /// Construct a new runtime with the animation running.
    ///
    /// Both arms must have a length.
    pub fn new(pose: Pose, discipline: Discipline) -> Result<Self> {
        if pose.arm1.length() == 0.0 || pose.arm2.length() == 0.0 {
            return Err(DomainError::ZeroVector.into());
        }

        Ok(Self::with_pose(pose, discipline))
    }

    fn with_pose(pose: Pose, discipline: Discipline) -> Self {
        let mut animation = Animation::default();
        animation.resume();

        Self {
            store: PoseStore::new(pose),
            drag: DragState::Idle,
            discipline,
            animation,
        }
    }

    /// Construct the runtime from configuration.
    pub fn from_config(config: &crate::Config) -> Result<Self> {
        Self::new(config.pose(), config.discipline)
    }

    /// Snapshot of the current pose.
    #[inline]
    pub fn current_pose(&self) -> Pose {
        self.store.pose()
    }

    #[inline]
    pub fn store(&self) -> &PoseStore {
        &self.store
    }

    #[inline]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Switch the posing discipline. A drag in progress keeps its discipline.
    pub fn set_discipline(&mut self, discipline: Discipline) {
        if self.discipline != discipline {
            log::info!("Discipline changed to {}", discipline);
        }
        self.discipline = discipline;
    }

    /// Pointer went down on an arm.
    pub fn on_pointer_down(&mut self, arm: Arm) {
        self.drag.pointer_down(arm, self.discipline);
    }

    /// Pointer went down on the field.
    ///
    /// The arms are hit-tested top first. On a hit the arm is grabbed with
    /// its offsets captured at the press position. Returns the grabbed arm.
    pub fn on_pointer_press(&mut self, position: Point2<f64>) -> Option<Arm> {
        self.store.update_pointer(position);

        let pose = self.store.pose();
        let arm = self.hit_test(&pose, &position)?;

        self.drag.pointer_press(&pose, arm, self.discipline, &position);

        Some(arm)
    }

    /// Pointer moved on the field.
    pub fn on_pointer_move(&mut self, position: Point2<f64>) {
        self.store.update_pointer(position);

        if let Some(pose) = self.drag.pointer_move(&self.store.pose(), &position) {
            log::trace!("Pose: {}", pose);
            self.store.replace(pose);
        }
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    /// Pointer entered the field, manual posing takes over from animation.
    pub fn on_pointer_enter(&mut self) {
        self.pause();
    }

    /// Pointer left the field.
    pub fn on_pointer_leave(&mut self) {
        self.resume();
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn pause(&mut self) {
        self.animation.pause();
    }

    pub fn resume(&mut self) {
        self.animation.resume();
    }

    /// Run an animation frame at `timestamp` milliseconds.
    pub fn tick(&mut self, timestamp: f64) {
        if let Some(frame) = self.animation.tick(timestamp) {
            log::trace!("Frame {} at {:.2}ms", frame.id, timestamp);

            if let Some(delta) = frame.delta {
                self.step(delta);
            }
        }
    }

    /// Advance the pose by `delta` seconds.
    ///
    /// The pendulum has no dynamics, the current angles are published as-is.
    fn step(&mut self, _delta: f64) {
        let pose = self.store.pose();
        self.store.update_arm_angles(pose.arm1.angle(), pose.arm2.angle());
    }

    /// Dispatch a collaborator event.
    pub fn dispatch(&mut self, event: Event) {
        log::trace!("Event: {:?}", event);

        match event {
            Event::PointerDown { arm: index } => match event.arm() {
                Some(arm) => self.on_pointer_down(arm),
                None => log::warn!("Pointer down on unknown arm {}", index),
            },
            Event::PointerPress { x, y } => {
                self.on_pointer_press(Point2::new(x, y));
            }
            Event::PointerMove { x, y } => self.on_pointer_move(Point2::new(x, y)),
            Event::PointerUp => self.on_pointer_up(),
            Event::PointerEnter => self.on_pointer_enter(),
            Event::PointerLeave => self.on_pointer_leave(),
            Event::Discipline { discipline } => self.set_discipline(discipline),
            Event::Tick { timestamp } => self.tick(timestamp),
        }
    }

    fn hit_test(&self, pose: &Pose, position: &Point2<f64>) -> Option<Arm> {
        [Arm::Arm2, Arm::Arm1].into_iter().find(|arm| {
            match ArmOutline::new(&pose.root(*arm), pose.arm(*arm)) {
                Ok(outline) => outline.contains(position),
                Err(e) => {
                    log::warn!("No hit region for {}: {}", arm, e);
                    false
                }
            }
        })
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::with_pose(Pose::default(), Discipline::default())
    }
}
