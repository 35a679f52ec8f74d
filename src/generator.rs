use crate::models::{ResponseAction, SecurityEvent, ThreatCategory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SOURCE_ADDRESSES: [&str; 5] = [
    "192.168.1.45",
    "10.0.0.23",
    "172.16.0.8",
    "203.0.113.5",
    "198.51.100.12",
];

pub const RESPONSE_ACTIONS: [ResponseAction; 3] = [
    ResponseAction::Blocked,
    ResponseAction::Monitored,
    ResponseAction::Quarantined,
];

/// Produces one synthetic [`SecurityEvent`] per tick, drawing uniformly from
/// the fixed candidate tables. Ids are monotonic and survive start/stop
/// cycles of the driving timer.
pub struct ThreatGenerator {
    rng: StdRng,
    next_id: u64,
}

impl ThreatGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            next_id: 1,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Generation always succeeds; the candidate tables are non-empty by
    /// construction.
    pub fn tick(&mut self) -> SecurityEvent {
        let category = ThreatCategory::ALL[self.rng.gen_range(0..ThreatCategory::ALL.len())];
        let source = SOURCE_ADDRESSES[self.rng.gen_range(0..SOURCE_ADDRESSES.len())];
        let action = RESPONSE_ACTIONS[self.rng.gen_range(0..RESPONSE_ACTIONS.len())];

        let id = self.next_id;
        self.next_id += 1;

        SecurityEvent {
            id,
            timestamp: chrono::Utc::now(),
            category,
            severity: category.severity(),
            description: category.description().to_string(),
            source_address: source.to_string(),
            action,
        }
    }
}

impl Default for ThreatGenerator {
    fn default() -> Self {
        Self::new()
    }
}
