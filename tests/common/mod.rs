#![allow(dead_code)]

use time::macros::datetime;
use time::OffsetDateTime;

use ronim::app::seed::Seed;
use ronim::config::AppConfig;
use ronim::domain::EntityId;
use ronim::infra::clock::Clock;
use ronim::infra::ids::IdSource;
use ronim::{Session, StoreError};

// ---------------------------------------------------------------------------
// Deterministic collaborators
// ---------------------------------------------------------------------------

/// 9:05 PM UTC, so message times render as "09:05 PM".
pub const FIXED_NOW: OffsetDateTime = datetime!(2024-03-01 21:05:00 UTC);

pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Hands out "new-1", "new-2", ...
#[derive(Default)]
pub struct SequenceIds {
    next: u32,
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> Result<EntityId, StoreError> {
        self.next += 1;
        Ok(EntityId::new(format!("new-{}", self.next)))
    }
}

/// Always returns the same id; the second insert must collide.
pub struct StuckIds(pub &'static str);

impl IdSource for StuckIds {
    fn next_id(&mut self) -> Result<EntityId, StoreError> {
        Ok(EntityId::new(self.0))
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

pub fn seeded_session() -> Session {
    Session::new(
        &AppConfig::default(),
        Seed::demo(),
        Box::new(SequenceIds::default()),
        Box::new(FixedClock(FIXED_NOW)),
    )
}

pub fn empty_session() -> Session {
    Session::new(
        &AppConfig::default(),
        Seed::empty(),
        Box::new(SequenceIds::default()),
        Box::new(FixedClock(FIXED_NOW)),
    )
}

pub fn id(value: &str) -> EntityId {
    EntityId::new(value)
}
