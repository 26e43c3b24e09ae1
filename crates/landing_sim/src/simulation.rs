use crate::{
    error::{Result, SimError},
    scenario::Scenario,
};
use chrono::{DateTime, Local};
use log::debug;
use rocket_landing::{LandingChecker, LandingStatus, Point, RocketId};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    thread,
};

/// One landing request and the answer it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingAttempt {
    pub rocket: String,
    pub rocket_id: RocketId,
    pub point: Point,
    pub status: LandingStatus,
    pub timestamp: DateTime<Local>,
}

pub type AttemptLog = Arc<Mutex<Vec<LandingAttempt>>>;

pub fn create_attempt_log(capacity: usize) -> AttemptLog {
    Arc::new(Mutex::new(Vec::with_capacity(capacity)))
}

pub fn record_attempt(log: &AttemptLog, attempt: LandingAttempt) {
    log.lock().unwrap_or_else(|p| p.into_inner()).push(attempt);
}

pub fn get_attempts_snapshot(log: &AttemptLog) -> Vec<LandingAttempt> {
    log.lock().unwrap_or_else(|p| p.into_inner()).clone()
}

/// Races every rocket of the scenario on its own thread against `checker`.
///
/// Attempts are returned in the order they were answered.
pub fn run(checker: &LandingChecker, scenario: &Scenario) -> Result<Vec<LandingAttempt>> {
    let log = create_attempt_log(scenario.total_targets());

    thread::scope(|s| {
        let handles = scenario
            .rockets
            .iter()
            .map(|rocket| {
                let log = Arc::clone(&log);
                let name = rocket.name.trim();
                thread::Builder::new()
                    .name(format!("rocket-{name}"))
                    .spawn_scoped(s, move || {
                        let rocket_id = RocketId::new();
                        for point in rocket.points() {
                            let status = checker.check_landing_availability(point, rocket_id);
                            debug!("{name} -> {point}: {status}");
                            record_attempt(
                                &log,
                                LandingAttempt {
                                    rocket: name.to_string(),
                                    rocket_id,
                                    point,
                                    status,
                                    timestamp: Local::now(),
                                },
                            );
                        }
                    })
                    .map_err(SimError::from)
            })
            .collect::<Result<Vec<_>>>()?;

        for handle in handles {
            handle.join().map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                SimError::RocketPanicked(reason)
            })?;
        }
        Ok::<(), SimError>(())
    })?;

    Ok(get_attempts_snapshot(&log))
}

/// Number of attempts per status
pub fn summarize(attempts: &[LandingAttempt]) -> HashMap<LandingStatus, usize> {
    let mut counts = HashMap::with_capacity(LandingStatus::ALL.len());
    for attempt in attempts {
        *counts.entry(attempt.status).or_insert(0) += 1;
    }
    counts
}
