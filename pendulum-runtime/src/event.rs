use pendulum_core::{Arm, Discipline};
use serde::{Deserialize, Serialize};

/// Collaborator event.
///
/// One variant per call the rendering layer makes into the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Pointer went down on an arm.
    PointerDown { arm: u8 },
    /// Pointer went down somewhere on the field.
    PointerPress { x: f64, y: f64 },
    /// Pointer moved on the field.
    PointerMove { x: f64, y: f64 },
    /// Pointer released.
    PointerUp,
    /// Pointer entered the field.
    PointerEnter,
    /// Pointer left the field.
    PointerLeave,
    /// Posing discipline changed.
    Discipline { discipline: Discipline },
    /// Animation frame at a timestamp in milliseconds.
    Tick { timestamp: f64 },
}

impl Event {
    /// Arm carried by the event.
    pub fn arm(&self) -> Option<Arm> {
        match self {
            Event::PointerDown { arm } => Arm::try_from(*arm).ok(),
            _ => None,
        }
    }
}
