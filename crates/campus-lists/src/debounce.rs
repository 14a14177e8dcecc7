use std::time::{Duration, Instant};

/// Keystroke debounce policy for search-as-you-type.
///
/// Pure bookkeeping, no timers: callers record edits and ask whether the
/// pending request is due. Each edit pushes the deadline out by the full
/// window, so a burst of typing issues one request, after the last key.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(275);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record an edit at `now`. The pending fire moves to `now + window`.
    pub fn edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True when the pending request is due at `now`. Clears the pending
    /// state, so each burst of edits fires exactly once.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
