//! Shared test data builders

use chrono::NaiveDate;

use meetwhenah::config::Settings;
use meetwhenah::database::EventStore;
use meetwhenah::models::{CreateEventRequest, Event, SlotToken};
use meetwhenah::services::ServiceFactory;

use super::memory_store::MemoryStore;

pub const EVENT_CODE: &str = "ABCD1234EFGH5678";

/// Services wired to a fresh in-memory store
pub fn test_services(store: MemoryStore) -> ServiceFactory<MemoryStore> {
    ServiceFactory::new(store, Settings::default())
}

/// Seed an event covering 20-25 Jul 2025 under [`EVENT_CODE`]
pub async fn seed_event(store: &MemoryStore) -> Event {
    store
        .create_event(CreateEventRequest {
            event_code: EVENT_CODE.to_string(),
            name: "team offsite".to_string(),
            details: None,
            creator_id: None,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
        })
        .await
        .expect("seed event")
}

pub fn token(date: &str, time: &str) -> SlotToken {
    SlotToken {
        date: date.to_string(),
        time: time.to_string(),
    }
}
