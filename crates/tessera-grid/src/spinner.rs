//! Self-rescheduling animation state.
//!
//! A spinner never owns a timer. Starting it bumps its epoch and returns the first
//! [`Schedule`]; each accepted tick advances the frame and asks for one more tick
//! only while the status is still [`TaskStatus::Running`]. Ticks carrying an older
//! epoch belong to a previous run and are dropped untouched.

use std::time::Duration;

pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const LINE: &[&str] = &["-", "\\", "|", "/"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl TaskStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, TaskStatus::Running)
    }
}

/// A request for one tick `after` from now, tagged with the run it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub epoch: u64,
    pub after: Duration,
}

#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    interval: Duration,
    frame: usize,
    epoch: u64,
    status: TaskStatus,
}

impl Spinner {
    pub fn new(frames: &'static [&'static str], interval: Duration) -> Self {
        Self {
            frames,
            interval,
            frame: 0,
            epoch: 0,
            status: TaskStatus::Idle,
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn frame_count(&self) -> usize {
        self.frame
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin a new run. Any ticks still in flight from an earlier run become stale.
    pub fn start(&mut self) -> Schedule {
        self.epoch += 1;
        self.frame = 0;
        self.status = TaskStatus::Running;
        Schedule {
            epoch: self.epoch,
            after: self.interval,
        }
    }

    pub fn finish(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn on_tick(&mut self, epoch: u64) -> Option<Schedule> {
        if epoch != self.epoch {
            return None;
        }
        self.frame = self.frame.wrapping_add(1);
        self.status.is_running().then_some(Schedule {
            epoch: self.epoch,
            after: self.interval,
        })
    }

    pub fn glyph(&self) -> &'static str {
        if self.frames.is_empty() {
            return "";
        }
        self.frames[self.frame % self.frames.len()]
    }
}
