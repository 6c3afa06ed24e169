//! Watches the active job list.
//!
//! A job id present now but unknown at the last scan was initiated; a known
//! id gone from the list completed. The abstract world has no cancel flag,
//! so a vanished job always reports as completed.

use crate::{
    error::EventResult,
    event::SimEvent,
    monitor::StateMonitor,
    types::{JobId, Tick},
    world::World,
};
use std::collections::HashSet;

#[derive(Default)]
pub struct JobMonitor {
    known: HashSet<JobId>,
}

impl JobMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for JobMonitor {
    fn name(&self) -> &'static str {
        "jobs"
    }

    fn prime(&mut self, world: &World) {
        self.known = world.jobs.iter().map(|j| j.id).collect();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let current: HashSet<JobId> = world.jobs.iter().map(|j| j.id).collect();
        let mut events = Vec::new();

        // Completions first: report in id order for a stable log.
        let mut completed: Vec<JobId> = self.known.difference(&current).copied().collect();
        completed.sort_unstable();
        for job_id in completed {
            events.push(SimEvent::JobCompleted { tick, job_id });
        }

        let mut initiated: Vec<JobId> = current.difference(&self.known).copied().collect();
        initiated.sort_unstable();
        for job_id in initiated {
            events.push(SimEvent::JobInitiated { tick, job_id });
        }

        self.known = current;
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
