use crate::models::{
    NetworkStats, ResponseAction, SECURITY_SCORE_CEIL, SECURITY_SCORE_FLOOR, SecurityEvent,
    Severity,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Maximum number of events retained for display. Older entries are evicted;
/// the aggregates keep accumulating regardless.
pub const FEED_CAPACITY: usize = 10;

pub const CONNECTIONS_PER_TICK_MIN: u64 = 1;
pub const CONNECTIONS_PER_TICK_MAX: u64 = 5;
pub const SCORE_STEP_MAGNITUDE: f64 = 5.0;

/// Bounded most-recent-first event sequence plus the running aggregates.
pub struct FeedStore {
    events: VecDeque<SecurityEvent>,
    stats: NetworkStats,
    rng: StdRng,
}

/// Point-in-time copy handed to the display layer and the report builder.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub events: Vec<SecurityEvent>,
    pub stats: NetworkStats,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::with_stats(NetworkStats::default())
    }

    pub fn with_stats(stats: NetworkStats) -> Self {
        Self {
            events: VecDeque::with_capacity(FEED_CAPACITY + 1),
            stats,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            events: VecDeque::with_capacity(FEED_CAPACITY + 1),
            stats: NetworkStats::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Prepends the event, trims the window to [`FEED_CAPACITY`], and updates
    /// the aggregates from this event alone. O(1) regardless of history size.
    pub fn ingest(&mut self, event: SecurityEvent) {
        self.stats.total_connections += self
            .rng
            .gen_range(CONNECTIONS_PER_TICK_MIN..=CONNECTIONS_PER_TICK_MAX);
        if event.severity >= Severity::High {
            self.stats.suspicious_activity += 1;
        }
        if event.action == ResponseAction::Blocked {
            self.stats.blocked_attempts += 1;
        }
        let step = self
            .rng
            .gen_range(-SCORE_STEP_MAGNITUDE..=SCORE_STEP_MAGNITUDE);
        self.stats.security_score = (self.stats.security_score + step)
            .clamp(SECURITY_SCORE_FLOOR, SECURITY_SCORE_CEIL);

        self.events.push_front(event);
        self.events.truncate(FEED_CAPACITY);
    }

    /// Lazy read-only projection of the retained sequence. Never mutates the
    /// store; a panicking predicate propagates to the caller and leaves the
    /// store intact.
    pub fn filter<P>(&self, mut predicate: P) -> impl Iterator<Item = &SecurityEvent>
    where
        P: FnMut(&SecurityEvent) -> bool,
    {
        self.events.iter().filter(move |event| predicate(event))
    }

    pub fn events(&self) -> impl Iterator<Item = &SecurityEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn stats(&self) -> NetworkStats {
        self.stats
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            events: self.events.iter().cloned().collect(),
            stats: self.stats,
        }
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FEED_CAPACITY, FeedStore};
    use crate::models::{
        ResponseAction, SECURITY_SCORE_CEIL, SECURITY_SCORE_FLOOR, SecurityEvent, Severity,
        ThreatCategory,
    };

    fn sample_event(id: u64, category: ThreatCategory, action: ResponseAction) -> SecurityEvent {
        SecurityEvent {
            id,
            timestamp: chrono::Utc::now(),
            category,
            severity: category.severity(),
            description: category.description().to_string(),
            source_address: "192.168.1.45".to_string(),
            action,
        }
    }

    #[test]
    fn sequence_is_most_recent_first() {
        let mut feed = FeedStore::with_seed(1);
        for id in 1..=5 {
            feed.ingest(sample_event(
                id,
                ThreatCategory::PortScan,
                ResponseAction::Monitored,
            ));
        }

        let ids: Vec<u64> = feed.events().map(|event| event.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn fifteen_ingests_retain_ten_most_recent_while_counters_see_all() {
        let mut feed = FeedStore::with_seed(2);
        for id in 1..=15 {
            // BruteForce is High severity, so every ingest is suspicious.
            feed.ingest(sample_event(
                id,
                ThreatCategory::BruteForce,
                ResponseAction::Blocked,
            ));
        }

        assert_eq!(feed.len(), FEED_CAPACITY);
        let ids: Vec<u64> = feed.events().map(|event| event.id).collect();
        assert_eq!(ids, (6..=15).rev().collect::<Vec<u64>>());

        let stats = feed.stats();
        assert_eq!(stats.suspicious_activity, 15);
        assert_eq!(stats.blocked_attempts, 15);
        assert!(stats.total_connections >= 15);
        assert!(stats.total_connections <= 75);
    }

    #[test]
    fn suspicious_counts_high_and_critical_only() {
        let mut feed = FeedStore::with_seed(3);
        feed.ingest(sample_event(
            1,
            ThreatCategory::PortScan,
            ResponseAction::Monitored,
        )); // Medium
        feed.ingest(sample_event(
            2,
            ThreatCategory::BruteForce,
            ResponseAction::Monitored,
        )); // High
        feed.ingest(sample_event(
            3,
            ThreatCategory::MalwareCommunication,
            ResponseAction::Monitored,
        )); // Critical
        feed.ingest(sample_event(
            4,
            ThreatCategory::UnauthorizedAccess,
            ResponseAction::Monitored,
        )); // Medium

        assert_eq!(feed.stats().suspicious_activity, 2);
    }

    #[test]
    fn blocked_counts_blocked_actions_only() {
        let mut feed = FeedStore::with_seed(4);
        for (id, action) in [
            (1, ResponseAction::Blocked),
            (2, ResponseAction::Monitored),
            (3, ResponseAction::Quarantined),
            (4, ResponseAction::Blocked),
        ] {
            feed.ingest(sample_event(id, ThreatCategory::PortScan, action));
        }

        assert_eq!(feed.stats().blocked_attempts, 2);
    }

    #[test]
    fn security_score_never_leaves_bounds() {
        let mut feed = FeedStore::with_seed(5);
        for id in 1..=5_000 {
            feed.ingest(sample_event(
                id,
                ThreatCategory::SqlInjection,
                ResponseAction::Quarantined,
            ));
            let score = feed.stats().security_score;
            assert!(
                (SECURITY_SCORE_FLOOR..=SECURITY_SCORE_CEIL).contains(&score),
                "score {score} escaped bounds after {id} ingests"
            );
        }
    }

    #[test]
    fn connection_counter_grows_within_per_tick_bounds() {
        let mut feed = FeedStore::with_seed(6);
        let mut previous = feed.stats().total_connections;
        for id in 1..=100 {
            feed.ingest(sample_event(
                id,
                ThreatCategory::PortScan,
                ResponseAction::Monitored,
            ));
            let current = feed.stats().total_connections;
            let delta = current - previous;
            assert!((1..=5).contains(&delta), "per-tick delta {delta} out of range");
            previous = current;
        }
    }

    #[test]
    fn filter_is_lazy_and_does_not_mutate() {
        let mut feed = FeedStore::with_seed(7);
        feed.ingest(sample_event(
            1,
            ThreatCategory::BruteForce,
            ResponseAction::Blocked,
        ));
        feed.ingest(sample_event(
            2,
            ThreatCategory::PortScan,
            ResponseAction::Monitored,
        ));
        feed.ingest(sample_event(
            3,
            ThreatCategory::BruteForce,
            ResponseAction::Blocked,
        ));

        let high_ids: Vec<u64> = feed
            .filter(|event| event.severity >= Severity::High)
            .map(|event| event.id)
            .collect();
        assert_eq!(high_ids, vec![3, 1]);
        assert_eq!(feed.len(), 3);

        let none: Vec<&SecurityEvent> = feed.filter(|_| false).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn filter_on_empty_store_is_safe() {
        let feed = FeedStore::with_seed(8);
        assert_eq!(feed.filter(|_| true).count(), 0);
    }

    #[test]
    fn panicking_predicate_leaves_store_valid() {
        let mut feed = FeedStore::with_seed(9);
        feed.ingest(sample_event(
            1,
            ThreatCategory::PortScan,
            ResponseAction::Monitored,
        ));
        feed.ingest(sample_event(
            2,
            ThreatCategory::PortScan,
            ResponseAction::Monitored,
        ));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = feed.filter(|_| panic!("predicate failure")).count();
        }));
        assert!(result.is_err());

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.filter(|_| true).count(), 2);
    }
}
