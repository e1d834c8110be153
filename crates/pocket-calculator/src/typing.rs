//! Typewriter animation
//!
//! Renders a string into a text target one character per interval. Only one
//! animation runs per [`Typewriter`]: starting a new one cancels the
//! previous task before touching the target, so two animations never
//! interleave their writes.
//!
//! Time is supplied by the caller through [`Typewriter::advance`], which
//! keeps the animation deterministic under test and lets the browser front
//! end drive it from `requestAnimationFrame` or a timer.

use std::time::Duration;
use tracing::debug;

/// Something a typewriter can write into
pub trait TextTarget {
    /// Replaces the whole text
    fn set_text(&mut self, text: &str);
    /// Appends one character
    fn push_char(&mut self, c: char);
}

impl TextTarget for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn push_char(&mut self, c: char) {
        self.push(c);
    }
}

/// Identifies one started animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct TypingTask {
    handle: TaskHandle,
    chars: Vec<char>,
    position: usize,
    interval: Duration,
    /// Time accumulated toward the next character
    pending: Duration,
}

impl TypingTask {
    fn is_finished(&self) -> bool {
        self.position >= self.chars.len()
    }
}

/// Cancellable typewriter
#[derive(Debug, Default)]
pub struct Typewriter {
    next_id: u64,
    task: Option<TypingTask>,
}

impl Typewriter {
    /// Creates an idle typewriter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any running animation, clears `target` and starts typing `text`
    pub fn start<T: TextTarget + ?Sized>(
        &mut self,
        target: &mut T,
        text: &str,
        interval: Duration,
    ) -> TaskHandle {
        self.cancel();
        target.set_text("");

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        debug!(?handle, chars = text.chars().count(), ?interval, "typing started");

        self.task = Some(TypingTask {
            handle,
            chars: text.chars().collect(),
            position: 0,
            interval,
            pending: Duration::ZERO,
        });
        handle
    }

    /// Stops the running animation, if any, and returns its handle
    pub fn cancel(&mut self) -> Option<TaskHandle> {
        let task = self.task.take()?;
        debug!(handle = ?task.handle, written = task.position, "typing cancelled");
        Some(task.handle)
    }

    /// Stops the animation only if `handle` is the running one
    pub fn cancel_handle(&mut self, handle: TaskHandle) -> bool {
        if self.is_running(handle) {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// True while `handle` still has characters to write
    #[must_use]
    pub fn is_running(&self, handle: TaskHandle) -> bool {
        self.task.as_ref().is_some_and(|t| t.handle == handle)
    }

    /// True while any animation is running
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Handle of the running animation
    #[must_use]
    pub fn current(&self) -> Option<TaskHandle> {
        self.task.as_ref().map(|t| t.handle)
    }

    /// Lets `elapsed` pass, writing one character per whole interval
    ///
    /// Returns the number of characters written. A zero interval writes
    /// everything that remains.
    pub fn advance<T: TextTarget + ?Sized>(&mut self, target: &mut T, elapsed: Duration) -> usize {
        let Some(task) = self.task.as_mut() else {
            return 0;
        };

        let due = if task.interval.is_zero() {
            task.chars.len() - task.position
        } else {
            task.pending += elapsed;
            let mut due = 0;
            while task.pending >= task.interval {
                task.pending -= task.interval;
                due += 1;
            }
            due
        };

        let end = (task.position + due).min(task.chars.len());
        for &c in &task.chars[task.position..end] {
            target.push_char(c);
        }
        let written = end - task.position;
        task.position = end;

        if task.is_finished() {
            debug!(handle = ?task.handle, "typing finished");
            self.task = None;
        }
        written
    }

    /// Writes the next character immediately
    pub fn tick<T: TextTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let Some(interval) = self.task.as_ref().map(|t| t.interval) else {
            return false;
        };
        let step = if interval.is_zero() {
            Duration::from_nanos(1)
        } else {
            interval
        };
        self.advance(target, step) > 0
    }
}
