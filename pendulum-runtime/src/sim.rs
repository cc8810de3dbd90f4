const MS_PER_SEC: f64 = 1_000.0;

/// Animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Frame identifier.
    pub id: u64,
    /// Seconds since the previous frame. Absent on the first frame after
    /// the animation was resumed.
    pub delta: Option<f64>,
}

/// Cooperative animation ticker.
///
/// The caller owns the clock and calls [`Animation::tick`] on every frame
/// interval. Pausing cancels the pending frame so that a tick arriving after
/// the pause is ignored.
#[derive(Debug, Default)]
pub struct Animation {
    pending: Option<u64>,
    next_id: u64,
    timestamp: Option<f64>,
}

impl Animation {
    /// Schedule the next frame.
    fn schedule(&mut self) {
        self.next_id += 1;
        self.pending = Some(self.next_id);
    }

    /// Whether a frame is pending.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Resume ticking. Resuming a running animation keeps its pending frame.
    pub fn resume(&mut self) {
        if self.pending.is_none() {
            log::trace!("Animation resumed");
            self.schedule();
        }
    }

    /// Pause ticking and cancel the pending frame.
    pub fn pause(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("Animation paused");
        }
        self.timestamp = None;
    }

    /// Advance the animation to `timestamp` milliseconds.
    ///
    /// Returns the frame that ran, or `None` when no frame was pending.
    pub fn tick(&mut self, timestamp: f64) -> Option<Frame> {
        let id = self.pending?;

        let delta = self
            .timestamp
            .map(|previous| (timestamp - previous) / MS_PER_SEC);

        self.timestamp = Some(timestamp);
        self.schedule();

        Some(Frame { id, delta })
    }
}
