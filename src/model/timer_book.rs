//! Bookkeeping for pending timeouts and intervals.
//!
//! Generic over the payload so the wasm glue can park its callbacks here and
//! tests can use plain values. Each payload lives exactly as long as its timer:
//! a fired timeout hands its payload back, and closing the book hands back
//! everything still pending. Once closed nothing new is admitted, so callers
//! check [`TimerBook::is_closed`] before creating anything that relies on a
//! timer to clean it up.

use fnv::FnvHashMap;

pub struct TimerBook<C> {
    timeouts: FnvHashMap<i32, C>,
    intervals: Vec<(i32, C)>,
    closed: bool,
}

/// Everything that was pending when the book closed.
pub struct ClosedTimers<C> {
    pub timeouts: Vec<(i32, C)>,
    pub intervals: Vec<(i32, C)>,
}

impl<C> Default for TimerBook<C> {
    fn default() -> Self {
        Self {
            timeouts: FnvHashMap::default(),
            intervals: Vec::new(),
            closed: false,
        }
    }
}

impl<C> TimerBook<C> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Records a scheduled timeout. A closed book refuses it and returns the
    /// payload.
    pub fn add_timeout(&mut self, handle: i32, payload: C) -> Result<(), C> {
        if self.closed {
            return Err(payload);
        }
        self.timeouts.insert(handle, payload);
        Ok(())
    }

    pub fn add_interval(&mut self, handle: i32, payload: C) -> Result<(), C> {
        if self.closed {
            return Err(payload);
        }
        self.intervals.push((handle, payload));
        Ok(())
    }

    /// Forgets a timeout that has run.
    pub fn fired(&mut self, handle: i32) -> Option<C> {
        self.timeouts.remove(&handle)
    }

    pub fn pending(&self) -> usize {
        self.timeouts.len() + self.intervals.len()
    }

    pub fn close(&mut self) -> ClosedTimers<C> {
        self.closed = true;
        ClosedTimers {
            timeouts: self.timeouts.drain().collect(),
            intervals: std::mem::take(&mut self.intervals),
        }
    }
}
