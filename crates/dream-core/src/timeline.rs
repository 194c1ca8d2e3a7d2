//! Cancellable one-shot task queue driven by an external clock.
//!
//! The web frontend has no timer thread of its own: the animation frame calls
//! [`Timeline::drain_due`] with the current time and acts on whatever fired.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    at_ms: f64,
    task: T,
}

#[derive(Debug)]
pub struct Timeline<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at_ms: f64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, at_ms, task });
        id
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.at_ms).reduce(f64::min)
    }

    /// Remove and return every task with `at_ms <= now_ms`, earliest first
    /// (ties in scheduling order).
    pub fn drain_due(&mut self, now_ms: f64) -> SmallVec<[(f64, T); 4]> {
        let mut due: SmallVec<[Entry<T>; 4]> = SmallVec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].at_ms <= now_ms {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms).then(a.id.cmp(&b.id)));
        due.into_iter().map(|e| (e.at_ms, e.task)).collect()
    }
}
