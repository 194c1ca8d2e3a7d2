//! Shooting-comet scheduling.
//!
//! Comets are pure data; the frontend renders one streak element per live
//! comet and lets CSS animate it. All timing goes through a [`Timeline`], so
//! `stop` leaves nothing pending.

use crate::constants::*;
use crate::timeline::{Timeline, TimerId};
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comet {
    pub id: u64,
    /// percent of viewport height
    pub top: f64,
    /// percent of viewport width
    pub left: f64,
    /// px
    pub width: f64,
    pub duration_ms: f64,
}

impl Comet {
    /// Time after spawn at which the comet is dropped.
    pub fn lifetime_ms(&self) -> f64 {
        self.duration_ms + COMET_CLEANUP_DELAY_MS
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CometEvent {
    Spawned(Comet),
    Removed(u64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CometTask {
    Spawn,
    /// fires every `period_ms`, may trigger a cluster follow-up
    Recurring { period_ms: f64 },
    Remove(u64),
}

pub struct CometSpawner {
    rng: StdRng,
    timeline: Timeline<CometTask>,
    comets: SmallVec<[Comet; 8]>,
    next_id: u64,
    recurring: Option<TimerId>,
}

impl CometSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            timeline: Timeline::new(),
            comets: SmallVec::new(),
            next_id: 0,
            recurring: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.recurring.is_some()
    }

    /// Schedule the first comet and the recurring spawn. No-op if running.
    pub fn start(&mut self, now_ms: f64) {
        if self.is_running() {
            return;
        }
        let initial = self.rng.gen::<f64>() * COMET_INITIAL_DELAY_MAX_MS;
        self.timeline.schedule(now_ms + initial, CometTask::Spawn);

        let period_ms = COMET_INTERVAL_MIN_MS + self.rng.gen::<f64>() * COMET_INTERVAL_SPAN_MS;
        let id = self
            .timeline
            .schedule(now_ms + period_ms, CometTask::Recurring { period_ms });
        self.recurring = Some(id);
        log::debug!("[comets] started, first in {initial:.0} ms, every {period_ms:.0} ms");
    }

    /// Cancel everything pending and drop all live comets.
    pub fn stop(&mut self) {
        self.timeline.clear();
        self.comets.clear();
        self.recurring = None;
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    /// Run every task due at `now_ms`. Tasks scheduled as a result of this
    /// call that are already due also run; the recurring spawn fires at most
    /// once per call, so a long frame gap does not burst.
    pub fn advance(&mut self, now_ms: f64) -> SmallVec<[CometEvent; 4]> {
        let mut events = SmallVec::new();
        loop {
            let due = self.timeline.drain_due(now_ms);
            if due.is_empty() {
                break;
            }
            for (at_ms, task) in due {
                self.run(at_ms, now_ms, task, &mut events);
            }
        }
        events
    }

    fn run(
        &mut self,
        at_ms: f64,
        now_ms: f64,
        task: CometTask,
        events: &mut SmallVec<[CometEvent; 4]>,
    ) {
        match task {
            CometTask::Spawn => events.push(CometEvent::Spawned(self.spawn(at_ms))),
            CometTask::Recurring { period_ms } => {
                events.push(CometEvent::Spawned(self.spawn(at_ms)));
                if self.rng.gen::<f64>() < COMET_CLUSTER_PROBABILITY {
                    let delay = COMET_CLUSTER_DELAY_MIN_MS
                        + self.rng.gen::<f64>() * COMET_CLUSTER_DELAY_SPAN_MS;
                    self.timeline.schedule(at_ms + delay, CometTask::Spawn);
                }
                let mut next_at = at_ms + period_ms;
                if next_at <= now_ms {
                    next_at = now_ms + period_ms;
                }
                let id = self
                    .timeline
                    .schedule(next_at, CometTask::Recurring { period_ms });
                self.recurring = Some(id);
            }
            CometTask::Remove(id) => {
                self.comets.retain(|c| c.id != id);
                events.push(CometEvent::Removed(id));
            }
        }
    }

    fn spawn(&mut self, at_ms: f64) -> Comet {
        self.next_id += 1;
        let comet = Comet {
            id: self.next_id,
            top: 5.0 + self.rng.gen::<f64>() * 50.0,
            left: 60.0 + self.rng.gen::<f64>() * 35.0,
            width: 80.0 + self.rng.gen::<f64>() * 160.0,
            duration_ms: 1000.0 + self.rng.gen::<f64>() * 1800.0,
        };
        self.comets.push(comet);
        self.timeline
            .schedule(at_ms + comet.lifetime_ms(), CometTask::Remove(comet.id));
        comet
    }
}
