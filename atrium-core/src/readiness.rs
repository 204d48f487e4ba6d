//! Asset readiness aggregation.
//!
//! A [`ReadinessGate`] tracks a fixed set of assets and latches ready when
//! every one of them has settled, or when the owner reports that the page's
//! deadline elapsed first. Whichever writer arrives first wins; the latch is
//! write-once and the loser's report degrades to [`GateEvent::AlreadyReady`].
//!
//! Completion is keyed by asset identity. Reporting the same asset twice, or
//! an asset the gate never expected, is a logged no-op rather than a count
//! corruption.

use std::collections::BTreeMap;
use std::time::Duration;

use atrium_model::{AssetId, AssetStatus};

/// Why the gate opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyCause {
    /// Every expected asset reported a terminal status.
    AllSettled,
    /// The wall-clock deadline elapsed with assets still pending.
    TimedOut,
}

/// Outcome of feeding one event into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// Recorded; the gate is still waiting on at least one asset.
    Pending,
    /// This event flipped the latch. Fires exactly once per gate.
    BecameReady(ReadyCause),
    /// The latch was already set; the event had no effect.
    AlreadyReady,
}

impl GateEvent {
    pub fn became_ready(&self) -> bool {
        matches!(self, GateEvent::BecameReady(_))
    }
}

/// Aggregates per-asset completion for one page instance.
///
/// The gate never reads a clock. [`ReadinessGate::timeout`] is carried as
/// data so the owner can schedule the deadline; the deadline reports back via
/// [`ReadinessGate::force_timeout`].
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    statuses: BTreeMap<AssetId, AssetStatus>,
    timeout: Duration,
    ready: Option<ReadyCause>,
}

impl ReadinessGate {
    /// Build a gate over the given asset set. An empty set is born ready:
    /// there is nothing to wait for, so the page reveals immediately.
    pub fn new(expected: impl IntoIterator<Item = AssetId>, timeout: Duration) -> Self {
        let statuses: BTreeMap<_, _> = expected
            .into_iter()
            .map(|id| (id, AssetStatus::Pending))
            .collect();

        let ready = statuses.is_empty().then_some(ReadyCause::AllSettled);

        ReadinessGate {
            statuses,
            timeout,
            ready,
        }
    }

    /// Record a terminal status for one asset.
    ///
    /// `Loaded` and `Failed` both settle the asset; the gate exists to stop
    /// blocking the page, not to vouch for the media. A `Pending` report,
    /// an unknown id, or a re-report of a settled asset changes nothing.
    pub fn mark(&mut self, id: &AssetId, status: AssetStatus) -> GateEvent {
        if self.ready.is_some() {
            return GateEvent::AlreadyReady;
        }

        if !status.is_settled() {
            return GateEvent::Pending;
        }

        match self.statuses.get_mut(id) {
            None => {
                log::warn!("readiness: ignoring completion for untracked asset {id}");
                return GateEvent::Pending;
            }
            Some(existing) if existing.is_settled() => {
                log::debug!("readiness: duplicate completion for {id} ignored");
                return GateEvent::Pending;
            }
            Some(existing) => {
                if status == AssetStatus::Failed {
                    log::warn!("readiness: asset {id} failed to load; settling anyway");
                }
                *existing = status;
            }
        }

        if self.settled_count() == self.expected() {
            self.ready = Some(ReadyCause::AllSettled);
            GateEvent::BecameReady(ReadyCause::AllSettled)
        } else {
            GateEvent::Pending
        }
    }

    /// The deadline writer. First writer wins; calling this after the gate
    /// opened (by either path) has no effect.
    pub fn force_timeout(&mut self) -> GateEvent {
        if self.ready.is_some() {
            return GateEvent::AlreadyReady;
        }

        log::warn!(
            "readiness: deadline elapsed with {}/{} assets settled",
            self.settled_count(),
            self.expected()
        );
        self.ready = Some(ReadyCause::TimedOut);
        GateEvent::BecameReady(ReadyCause::TimedOut)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    pub fn ready_cause(&self) -> Option<ReadyCause> {
        self.ready
    }

    /// The deadline the owner should schedule for this gate.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn expected(&self) -> usize {
        self.statuses.len()
    }

    pub fn settled_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| status.is_settled())
            .count()
    }

    pub fn status_of(&self, id: &AssetId) -> Option<AssetStatus> {
        self.statuses.get(id).copied()
    }

    /// Assets still awaiting a terminal status.
    pub fn pending_assets(&self) -> impl Iterator<Item = &AssetId> {
        self.statuses
            .iter()
            .filter(|(_, status)| !status.is_settled())
            .map(|(id, _)| id)
    }

    /// Assets that settled via the failure path.
    pub fn failed_assets(&self) -> impl Iterator<Item = &AssetId> {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == AssetStatus::Failed)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<AssetId> {
        names.iter().map(|name| AssetId::new(*name)).collect()
    }

    fn gate(names: &[&str]) -> ReadinessGate {
        ReadinessGate::new(ids(names), Duration::from_secs(5))
    }

    #[test]
    fn ready_after_exactly_n_settles_and_not_before() {
        let mut gate = gate(&["a.jpg", "b.jpg", "c.mp4"]);

        assert_eq!(gate.mark(&"a.jpg".into(), AssetStatus::Loaded), GateEvent::Pending);
        assert!(!gate.is_ready());
        assert_eq!(gate.mark(&"c.mp4".into(), AssetStatus::Failed), GateEvent::Pending);
        assert!(!gate.is_ready());

        assert_eq!(
            gate.mark(&"b.jpg".into(), AssetStatus::Loaded),
            GateEvent::BecameReady(ReadyCause::AllSettled)
        );
        assert!(gate.is_ready());
        assert_eq!(gate.ready_cause(), Some(ReadyCause::AllSettled));
    }

    #[test]
    fn arrival_order_is_irrelevant() {
        let names = ["a.jpg", "b.jpg", "c.jpg"];
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let mut gate = gate(&names);
            for (step, idx) in order.into_iter().enumerate() {
                let event = gate.mark(&names[idx].into(), AssetStatus::Loaded);
                if step == 2 {
                    assert_eq!(event, GateEvent::BecameReady(ReadyCause::AllSettled));
                } else {
                    assert_eq!(event, GateEvent::Pending);
                }
            }
        }
    }

    #[test]
    fn duplicate_completions_are_idempotent() {
        let mut gate = gate(&["a.jpg", "b.jpg", "c.jpg"]);

        gate.mark(&"a.jpg".into(), AssetStatus::Loaded);
        gate.mark(&"a.jpg".into(), AssetStatus::Loaded);
        gate.mark(&"a.jpg".into(), AssetStatus::Failed);

        assert_eq!(gate.settled_count(), 1);
        assert!(!gate.is_ready());
    }

    #[test]
    fn untracked_asset_is_ignored() {
        let mut gate = gate(&["a.jpg"]);
        assert_eq!(gate.mark(&"ghost.jpg".into(), AssetStatus::Loaded), GateEvent::Pending);
        assert_eq!(gate.settled_count(), 0);
    }

    #[test]
    fn timeout_wins_when_completions_lag() {
        let mut gate = gate(&["a.jpg", "b.jpg", "c.jpg"]);
        gate.mark(&"a.jpg".into(), AssetStatus::Loaded);

        assert_eq!(
            gate.force_timeout(),
            GateEvent::BecameReady(ReadyCause::TimedOut)
        );
        assert_eq!(gate.ready_cause(), Some(ReadyCause::TimedOut));

        // Late completions after the deadline have no observable effect.
        assert_eq!(gate.mark(&"b.jpg".into(), AssetStatus::Loaded), GateEvent::AlreadyReady);
        assert_eq!(gate.mark(&"c.jpg".into(), AssetStatus::Loaded), GateEvent::AlreadyReady);
        assert_eq!(gate.settled_count(), 1);
        assert_eq!(gate.ready_cause(), Some(ReadyCause::TimedOut));
    }

    #[test]
    fn completion_wins_over_a_late_deadline() {
        let mut gate = gate(&["a.jpg", "b.jpg", "c.jpg"]);
        gate.mark(&"a.jpg".into(), AssetStatus::Loaded);
        gate.mark(&"b.jpg".into(), AssetStatus::Loaded);
        assert!(gate.mark(&"c.jpg".into(), AssetStatus::Failed).became_ready());

        assert_eq!(gate.force_timeout(), GateEvent::AlreadyReady);
        assert_eq!(gate.ready_cause(), Some(ReadyCause::AllSettled));
    }

    #[test]
    fn once_ready_stays_ready() {
        let mut gate = gate(&["a.jpg"]);
        assert!(gate.mark(&"a.jpg".into(), AssetStatus::Loaded).became_ready());

        for _ in 0..3 {
            gate.mark(&"a.jpg".into(), AssetStatus::Failed);
            gate.force_timeout();
            assert!(gate.is_ready());
            assert_eq!(gate.ready_cause(), Some(ReadyCause::AllSettled));
        }
    }

    #[test]
    fn empty_gate_is_born_ready() {
        let gate = ReadinessGate::new([], Duration::from_secs(5));
        assert!(gate.is_ready());
        assert_eq!(gate.ready_cause(), Some(ReadyCause::AllSettled));
        assert_eq!(gate.expected(), 0);
    }

    #[test]
    fn pending_reports_do_not_settle() {
        let mut gate = gate(&["a.jpg"]);
        assert_eq!(gate.mark(&"a.jpg".into(), AssetStatus::Pending), GateEvent::Pending);
        assert_eq!(gate.settled_count(), 0);
        assert!(!gate.is_ready());
    }

    #[test]
    fn failed_assets_are_enumerable() {
        let mut gate = gate(&["a.jpg", "b.jpg"]);
        gate.mark(&"a.jpg".into(), AssetStatus::Failed);
        gate.mark(&"b.jpg".into(), AssetStatus::Loaded);

        let failed: Vec<_> = gate.failed_assets().cloned().collect();
        assert_eq!(failed, vec![AssetId::new("a.jpg")]);
        assert_eq!(gate.pending_assets().count(), 0);
    }
}
