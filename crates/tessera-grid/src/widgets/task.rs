//! A card tracking one long-running task with a spinner while it runs.

use std::time::Duration;

use crate::spinner::{Schedule, Spinner, TaskStatus, DOTS};
use crate::style::{Color, Style};
use crate::widget::Widget;

/// A labelled task with a spinner while it runs.
///
/// With [`finish_after`](TaskCard::finish_after) the task settles on its own after
/// that many ticks, which is how the demo shows an animation winding down.
#[derive(Debug, Clone)]
pub struct TaskCard {
    label: String,
    spinner: Spinner,
    autostart: bool,
    finish_after: Option<(usize, TaskStatus)>,
}

impl TaskCard {
    pub fn new(label: impl Into<String>, interval: Duration) -> Self {
        Self {
            label: label.into(),
            spinner: Spinner::new(DOTS, interval),
            autostart: true,
            finish_after: None,
        }
    }

    /// Do not start spinning when added to a board.
    pub fn idle(mut self) -> Self {
        self.autostart = false;
        self
    }

    pub fn finish_after(mut self, ticks: usize, status: TaskStatus) -> Self {
        self.finish_after = Some((ticks, status));
        self
    }

    pub fn status(&self) -> TaskStatus {
        self.spinner.status()
    }

    pub fn frames(&self) -> usize {
        self.spinner.frame_count()
    }

    /// Restart the task. Ticks from the previous run are discarded.
    pub fn restart(&mut self) -> Schedule {
        self.spinner.start()
    }

    pub fn finish(&mut self, status: TaskStatus) {
        self.spinner.finish(status);
    }

    fn status_glyph(&self) -> String {
        match self.spinner.status() {
            TaskStatus::Idle => Style::new().fg(Color::DarkGrey).paint("·"),
            TaskStatus::Running => Style::new().fg(Color::DarkCyan).paint(self.spinner.glyph()),
            TaskStatus::Succeeded => Style::new().fg(Color::DarkGreen).paint("✓"),
            TaskStatus::Failed => Style::new().fg(Color::DarkRed).paint("✗"),
        }
    }

    fn status_text(&self) -> &'static str {
        match self.spinner.status() {
            TaskStatus::Idle => "idle",
            TaskStatus::Running => "running",
            TaskStatus::Succeeded => "done",
            TaskStatus::Failed => "failed",
        }
    }
}

impl Widget for TaskCard {
    fn render(&self, _width: usize, height: usize) -> String {
        let lines = [
            format!("{} {}", self.status_glyph(), self.label),
            Style::new()
                .dim()
                .paint(&format!("{} ({} frames)", self.status_text(), self.frames())),
        ];
        lines[..height.min(lines.len())].join("\n")
    }

    fn title(&self) -> Option<&str> {
        Some("task")
    }

    fn init(&mut self) -> Option<Schedule> {
        self.autostart.then(|| self.spinner.start())
    }

    fn tick(&mut self, epoch: u64) -> Option<Schedule> {
        if epoch == self.spinner.epoch() {
            if let Some((ticks, status)) = self.finish_after {
                if self.spinner.frame_count() + 1 >= ticks {
                    self.spinner.finish(status);
                }
            }
        }
        self.spinner.on_tick(epoch)
    }
}
